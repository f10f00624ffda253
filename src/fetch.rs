//! End-to-end run: token, drive lookup, folder listing, selection, worksheet

use crate::api::{DriveItem, GraphClient, build_http_client, find_drive};
use crate::auth::acquire_token;
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::selection::select_latest;
use crate::workbook::{SheetData, fetch_worksheet};
use chrono::{DateTime, FixedOffset};
use log::{info, warn};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct FetchReport {
    pub item: DriveItem,
    pub modified: DateTime<FixedOffset>,
    pub sheet: SheetData,
}

pub async fn fetch_latest_sheet(config: &Config) -> Result<FetchReport> {
    fetch_latest_sheet_named(config, &config.sheet_name).await
}

/// Same as [`fetch_latest_sheet`] with the worksheet name overridden
pub async fn fetch_latest_sheet_named(config: &Config, sheet_name: &str) -> Result<FetchReport> {
    let drives_url = config.graph_sites()?;
    let http = build_http_client()?;

    let token = acquire_token(&http, config).await?;
    let graph = GraphClient::new(drives_url, &token, http.clone());

    let drives = graph.list_drives().await?;
    let drive = find_drive(&drives, &config.drive_name)?;
    info!("Using drive '{}' ({})", drive.name, drive.id);

    let folder = graph.resolve_folder(&drive.id, &config.folder_path).await?;
    let children = graph.list_children(&drive.id, &folder.id).await?;
    info!("Folder '{}' has {} children", config.folder_path, children.len());

    let filter = config.item_filter();
    let candidate = select_latest(&children, &filter)?.ok_or_else(|| {
        warn!(
            "No file in '{}' starts with '{}' and ends with one of {:?}",
            config.folder_path, filter.prefix, filter.extensions
        );
        FetchError::retrieval("No file selected to download")
    })?;

    let sheet = fetch_worksheet(&http, candidate.item, sheet_name).await?;
    info!("Loaded '{}' from '{}'", sheet_name, candidate.item.name);

    Ok(FetchReport {
        item: candidate.item.clone(),
        modified: candidate.modified,
        sheet,
    })
}
