use crate::ui::mvi::UiState;

/// Text input contents. `cursor` counts chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputFieldState {
    pub text: String,
    pub cursor: usize,
    pub focused: bool,
}

impl UiState for InputFieldState {}

impl InputFieldState {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the cursor inside `text`.
    pub fn byte_cursor(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_cursor_handles_multibyte() {
        let state = InputFieldState {
            text: "héllo".to_string(),
            cursor: 2,
            focused: true,
        };
        assert_eq!(state.byte_cursor(), 3);
        assert_eq!(state.char_len(), 5);
    }

    #[test]
    fn byte_cursor_at_end() {
        let state = InputFieldState {
            text: "ab".to_string(),
            cursor: 2,
            focused: false,
        };
        assert_eq!(state.byte_cursor(), 2);
    }
}
