//! Download a drive item and load one worksheet from it

use crate::api::models::DriveItem;
use crate::error::{FetchError, Result};
use calamine::{Reader, open_workbook_auto_from_rs};
use log::{debug, info};
use reqwest::Client;
use std::fmt;
use std::io::Cursor;

/// One worksheet; the first row is taken as the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    /// Parse xlsx/xlsm/xlsb/xls/ods content and read `sheet_name`
    pub fn from_bytes(bytes: Vec<u8>, sheet_name: &str) -> Result<Self> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| {
            FetchError::retrieval(format!("Content is not a readable spreadsheet: {}", e))
        })?;

        let available = workbook.sheet_names();
        let range = workbook.worksheet_range(sheet_name).map_err(|e| {
            FetchError::retrieval(format!(
                "Error reading sheet '{}': {} (available: {})",
                sheet_name,
                e,
                available.join(", ")
            ))
        })?;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
        let headers = rows.next().unwrap_or_default();
        let rows: Vec<Vec<String>> = rows.collect();

        debug!(
            "Read sheet '{}': {} columns, {} rows",
            sheet_name,
            headers.len(),
            rows.len()
        );

        Ok(SheetData {
            name: sheet_name.to_string(),
            headers,
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    pub fn to_csv(&self) -> String {
        let mut csv_output = String::new();

        for line in std::iter::once(&self.headers).chain(self.rows.iter()) {
            let fields: Vec<String> = line.iter().map(|field| csv_field(field)).collect();
            csv_output.push_str(&fields.join(","));
            csv_output.push('\n');
        }

        csv_output
    }
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}

/// Right-aligned table with a row index column
impl fmt::Display for SheetData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Empty sheet '{}'", self.name);
        }

        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                std::iter::once(cell(&self.headers, col))
                    .chain(self.rows.iter().map(|row| cell(row, col)))
                    .map(|value| value.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let index_width = self.rows.len().saturating_sub(1).to_string().len();

        write!(f, "{:>width$}", "", width = index_width)?;
        for (col, width) in widths.iter().enumerate() {
            write!(f, "  {:>width$}", cell(&self.headers, col), width = width)?;
        }
        writeln!(f)?;

        for (index, row) in self.rows.iter().enumerate() {
            write!(f, "{:>width$}", index, width = index_width)?;
            for (col, width) in widths.iter().enumerate() {
                write!(f, "  {:>width$}", cell(row, col), width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// GET a pre-authenticated download URL
pub async fn download(http: &Client, url: &str) -> Result<Vec<u8>> {
    let response = http.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(FetchError::retrieval(format!(
            "Download failed with status {}",
            status
        )));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Download the selected item and read `sheet_name` from it.
///
/// Fails without touching the network when the item carries no download URL.
pub async fn fetch_worksheet(http: &Client, item: &DriveItem, sheet_name: &str) -> Result<SheetData> {
    let url = item
        .download_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| FetchError::retrieval(format!("'{}' has no download URL", item.name)))?;

    debug!("Downloading '{}'", item.name);
    let bytes = download(http, url).await?;
    info!("Downloaded '{}' ({} bytes)", item.name, bytes.len());

    SheetData::from_bytes(bytes, sheet_name)
}
