use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS};

#[derive(Debug, Parser)]
#[command(
    name = "hookpanel",
    version,
    about = "Terminal counter panel showing reactive UI state patterns"
)]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Redraw interval in milliseconds (overrides config)
    #[arg(
        long,
        value_name = "MS",
        value_parser = clap::value_parser!(u64).range(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS)
    )]
    pub tick_rate_ms: Option<u64>,

    /// Do not capture the mouse (buttons stay reachable from the keyboard)
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Load the config this invocation asks for and apply flag overrides.
    ///
    /// An explicit `--config` must load cleanly. A broken file at the default
    /// location is logged and replaced by defaults.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Ignoring invalid config, using defaults");
                Config::default()
            }),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(tick_rate_ms) = self.tick_rate_ms {
            config.ui.tick_rate_ms = tick_rate_ms;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
    }
}
