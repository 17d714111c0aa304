use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIntent {
    Focus,
    Blur,
    /// Insert a character at the cursor. Ignored while unfocused.
    Insert(char),
    /// Delete the character before the cursor. Ignored while unfocused.
    Backspace,
    MoveLeft,
    MoveRight,
    Home,
    End,
}

impl Intent for InputIntent {}
