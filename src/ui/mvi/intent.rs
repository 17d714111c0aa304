//! Marker trait for intents.

/// An action a reducer understands.
///
/// Intents are closed enums. Anything a caller cannot map onto a known
/// variant should still become a variant (see `CounterIntent::Unrecognized`)
/// so the reducer's `match` stays exhaustive.
pub trait Intent: Send + 'static {}
