//! rolle - a terminal browser for the rested characters/places database
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use rolle_core::Location;

/// A terminal browser for the rested characters/places database
#[derive(Parser, Debug)]
#[command(name = "rolle")]
#[command(about = "Browse characters and places from a rested server", long_about = None)]
struct Args {
    /// Location to open, e.g. "/?state=0,place5,1,character7"
    #[arg(value_name = "LOCATION")]
    location: Option<String>,

    /// Base URL of the rested server (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    rolle_core::logging::init()?;

    let mut settings = rolle_app::load_settings(args.config.as_deref());
    if let Some(server) = args.server {
        settings.server.url = server;
    }

    let location = args.location.map(Location::new).unwrap_or_default();

    rolle_tui::run(settings, location).await?;
    Ok(())
}
