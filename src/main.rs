use anyhow::Context;
use clap::Parser;
use hookpanel::cli::Cli;
use hookpanel::logging::init_tracing;
use hookpanel::ui::runtime::{run, RunOptions};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let options = RunOptions::from_config(&config).context("Invalid palette")?;
    run(options).context("Terminal UI failed")?;
    Ok(())
}
