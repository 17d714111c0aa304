//! Terminal counter panel demonstrating reactive UI state: local state, a
//! reducer, a focus reference, a memoized value and a resize subscription.

pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
