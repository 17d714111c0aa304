use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::palette::DEFAULT_PALETTE;

pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 5000;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// What the counter panel shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Background colors indexed by `count % 6`. `#rrggbb` or a color name.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    /// Placeholder shown in the empty text input.
    #[serde(default = "default_input_placeholder")]
    pub input_placeholder: String,
}

/// Event loop and terminal behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval when no events arrive (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks on buttons (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn default_input_placeholder() -> String {
    "Type something here...".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            input_placeholder: default_input_placeholder(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}
