use crate::api::constants::defaults;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sharepoint-fetch")]
#[command(about = "Print a worksheet from the latest matching file in a SharePoint folder")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(
        short,
        long,
        env = "SHAREPOINT_FETCH_CONFIG",
        default_value = defaults::CONFIG_FILE,
        help = "Path to the JSON configuration file"
    )]
    pub config: PathBuf,

    /// Worksheet to load (overrides `sheet_name` from the config)
    #[arg(long, help = "Worksheet to load")]
    pub sheet: Option<String>,

    /// Output format
    #[arg(long, default_value = "table", help = "Output format")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table (default)
    Table,
    /// Comma-separated values, header first
    Csv,
}
