mod loader;
mod palette;
mod types;

pub use loader::ConfigError;
pub use palette::{Palette, PaletteError, DEFAULT_PALETTE, PALETTE_SIZE};
pub use types::{Config, PanelConfig, UiConfig, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS};
