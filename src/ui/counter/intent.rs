//! Intents for the reducer counter.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    /// Any action tag the reducer does not know. Reduces to the same state.
    Unrecognized(String),
}

impl CounterIntent {
    /// Map an action tag (`"increment"`, `"decrement"`) onto an intent.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "increment" => Self::Increment,
            "decrement" => Self::Decrement,
            _ => Self::Unrecognized(tag.to_string()),
        }
    }
}

impl Intent for CounterIntent {}
