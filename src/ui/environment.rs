//! The panel's view of the world outside it.

use crate::ui::viewport::ViewportSize;
use parking_lot::Mutex;
use ratatui::style::Color;
use std::sync::Arc;

/// Size used when the terminal cannot be queried.
pub const FALLBACK_VIEWPORT: ViewportSize = ViewportSize {
    width: 80,
    height: 24,
};

/// Queries and side effects the panel needs from its host.
pub trait Environment {
    /// Current viewport size.
    fn viewport(&self) -> ViewportSize;

    /// Paint the page background.
    fn set_background(&mut self, color: Color);
}

/// Page background shared between the environment (writer) and the
/// renderer (reader).
#[derive(Debug, Clone, Default)]
pub struct PageBackground {
    color: Arc<Mutex<Option<Color>>>,
}

impl PageBackground {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Color> {
        *self.color.lock()
    }

    fn set(&self, color: Color) {
        *self.color.lock() = Some(color);
    }
}

/// Environment backed by the real terminal.
pub struct TerminalEnvironment {
    background: PageBackground,
}

impl TerminalEnvironment {
    pub fn new(background: PageBackground) -> Self {
        Self { background }
    }
}

impl Environment for TerminalEnvironment {
    fn viewport(&self) -> ViewportSize {
        crossterm::terminal::size()
            .map(ViewportSize::from)
            .unwrap_or(FALLBACK_VIEWPORT)
    }

    fn set_background(&mut self, color: Color) {
        self.background.set(color);
    }
}
