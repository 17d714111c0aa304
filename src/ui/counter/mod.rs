//! Reducer-driven counter.
//!
//! - `state.rs` - the counter value
//! - `intent.rs` - Increment, Decrement and the identity fallback
//! - `reducer.rs` - transitions (pure)

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
