use crate::ui::mvi::Reducer;

use super::intent::InputIntent;
use super::state::InputFieldState;

pub struct InputReducer;

impl Reducer for InputReducer {
    type State = InputFieldState;
    type Intent = InputIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InputIntent::Focus => {
                state.focused = true;
                state
            }
            InputIntent::Blur => {
                state.focused = false;
                state
            }
            _ if !state.focused => state,
            InputIntent::Insert(ch) => {
                let at = state.byte_cursor();
                state.text.insert(at, ch);
                state.cursor += 1;
                state
            }
            InputIntent::Backspace => {
                if state.cursor > 0 {
                    state.cursor -= 1;
                    let at = state.byte_cursor();
                    state.text.remove(at);
                }
                state
            }
            InputIntent::MoveLeft => {
                state.cursor = state.cursor.saturating_sub(1);
                state
            }
            InputIntent::MoveRight => {
                state.cursor = (state.cursor + 1).min(state.char_len());
                state
            }
            InputIntent::Home => {
                state.cursor = 0;
                state
            }
            InputIntent::End => {
                state.cursor = state.char_len();
                state
            }
        }
    }
}
