//! Marker trait for feature state.

/// State values are cloned, compared and defaulted, never shared mutably.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
