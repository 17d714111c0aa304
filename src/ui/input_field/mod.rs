//! Single-line text input the focus handle points at.
//!
//! Uses MVI like the counter: edits are intents, the reducer is pure, and
//! the panel decides when `Focus` may be dispatched.

mod intent;
mod reducer;
mod state;

pub use intent::InputIntent;
pub use reducer::InputReducer;
pub use state::InputFieldState;
