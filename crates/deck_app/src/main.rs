mod platform;

use std::path::PathBuf;

use clap::Parser;
use deck_core::Page;
use deck_logging::deck_info;

use platform::config::DeckConfig;
use platform::logging::{self, LogDestination};

/// Quotes, dog pictures and stock charts in the terminal.
#[derive(Parser)]
#[command(name = "fetchdeck", version)]
struct Args {
    /// RON configuration file (defaults to ./fetchdeck.ron when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Page to open first
    #[arg(long, default_value = "home")]
    page: Page,
    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    log: LogDestination,
    /// Polygon.io API key, overriding the configuration
    #[arg(long)]
    polygon_key: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = DeckConfig::resolve(args.config.as_deref())?;
    if let Some(key) = args.polygon_key {
        config.polygon_api_key = key;
    }

    logging::initialize(args.log, config.log_level());
    deck_info!("Starting fetchdeck on page {}", args.page);

    platform::run_app(config, args.page)
}
