//! State for the reducer counter.

use crate::ui::mvi::UiState;

/// Open-ended counter. Every integer is a valid state and none is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub value: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}
