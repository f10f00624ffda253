//! Pick the most recently modified item whose name matches a prefix and extension

use crate::api::constants::{DATE_FORMAT, defaults};
use crate::api::models::DriveItem;
use crate::error::{FetchError, Result};
use chrono::{DateTime, FixedOffset};
use log::debug;

/// Name filter applied to folder children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    pub prefix: String,
    pub extensions: Vec<String>,
}

impl ItemFilter {
    pub fn new(prefix: impl Into<String>, extensions: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extensions,
        }
    }

    /// Case-sensitive prefix and suffix match on the full name
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
            && self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self::new(
            defaults::FILE_PREFIX,
            defaults::FILE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

/// Selected item together with its parsed modification time
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub item: &'a DriveItem,
    pub modified: DateTime<FixedOffset>,
}

/// Parse `lastModifiedDateTime`; Graph may also send `Z` and fractional seconds
pub fn parse_timestamp(value: &str) -> std::result::Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(value, DATE_FORMAT).or_else(|_| DateTime::parse_from_rfc3339(value))
}

/// Latest matching item, first seen wins on equal timestamps.
///
/// `Ok(None)` when nothing matches the filter. A matching item without a
/// readable timestamp cannot be ranked and fails the selection.
pub fn select_latest<'a>(items: &'a [DriveItem], filter: &ItemFilter) -> Result<Option<Candidate<'a>>> {
    let mut latest: Option<Candidate<'a>> = None;
    let mut matched = 0usize;

    for item in items.iter().filter(|item| filter.matches(&item.name)) {
        matched += 1;

        let raw = item.last_modified_date_time.as_deref().ok_or_else(|| {
            FetchError::selection(format!("'{}' has no lastModifiedDateTime", item.name))
        })?;
        let modified = parse_timestamp(raw).map_err(|e| {
            FetchError::selection(format!(
                "Invalid lastModifiedDateTime '{}' on '{}': {}",
                raw, item.name, e
            ))
        })?;

        if latest.as_ref().is_none_or(|current| modified > current.modified) {
            latest = Some(Candidate { item, modified });
        }
    }

    debug!(
        "{} of {} items match prefix '{}' and extensions {:?}",
        matched,
        items.len(),
        filter.prefix,
        filter.extensions
    );
    Ok(latest)
}
