use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use sharepoint_fetch::cli::{self, Cli};
use sharepoint_fetch::config::Config;
use sharepoint_fetch::fetch;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env for SHAREPOINT_FETCH_CONFIG / RUST_LOG, loaded before the
    // logger reads its filter. Logs go to stderr.
    let (dotenv_path, mut logger) = cli::logging::load_env_and_logger(None);
    logger.init();
    if let Some(path) = dotenv_path {
        debug!("Loaded environment from {:?}", path);
    }

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    info!("Starting sharepoint-fetch");

    cli::ui::print_header(cli.format);

    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;
    let sheet_name = cli.sheet.as_deref().unwrap_or(&config.sheet_name);

    let report = fetch::fetch_latest_sheet_named(&config, sheet_name)
        .await
        .context("Failed to fetch SharePoint data")?;

    cli::ui::print_report(&report, cli.format).context("Failed to write output")?;
    Ok(())
}
