//! Entry point wiring CLI dispatch to the conversion pipeline.

use anyhow::Result;
use drugprot_prep::{cli::Cli, config::Settings, logging};
use tracing::info;

fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting conversion");
    cli.dispatch(settings)
}
