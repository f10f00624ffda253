use crate::api::constants::defaults;
use crate::error::{FetchError, Result};
use crate::selection::ItemFilter;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// `sharepoint_scope` may be a single scope or a list of scopes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Scopes {
    One(String),
    Many(Vec<String>),
}

impl Scopes {
    /// Space-separated form expected by the token endpoint
    pub fn to_scope_string(&self) -> String {
        match self {
            Scopes::One(scope) => scope.trim().to_string(),
            Scopes::Many(scopes) => scopes
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Static run configuration, read once from `parameters.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sharepoint_client_id: Option<String>,
    pub authority: Option<String>,
    pub sharepoint_client_sct_value: Option<String>,
    pub sharepoint_scope: Option<Scopes>,
    pub graph_sites: Option<String>,
    #[serde(default = "default_drive_name")]
    pub drive_name: String,
    #[serde(default = "default_folder_path")]
    pub folder_path: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_drive_name() -> String {
    defaults::DRIVE_NAME.to_string()
}

fn default_folder_path() -> String {
    defaults::FOLDER_PATH.to_string()
}

fn default_file_prefix() -> String {
    defaults::FILE_PREFIX.to_string()
}

fn default_file_extensions() -> Vec<String> {
    defaults::FILE_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_sheet_name() -> String {
    defaults::SHEET_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sharepoint_client_id: None,
            authority: None,
            sharepoint_client_sct_value: None,
            sharepoint_scope: None,
            graph_sites: None,
            drive_name: default_drive_name(),
            folder_path: default_folder_path(),
            file_prefix: default_file_prefix(),
            file_extensions: default_file_extensions(),
            sheet_name: default_sheet_name(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| {
            FetchError::configuration(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config = Self::from_json_str(&content).map_err(|e| match e {
            FetchError::Configuration { message } => {
                FetchError::configuration(format!("{:?}: {}", path, message))
            }
            other => other,
        })?;

        debug!("Loaded config, graph_sites set: {}", config.graph_sites.is_some());
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| FetchError::configuration(format!("Failed to parse config: {}", e)))
    }

    /// Base drives URL of the site collection
    pub fn graph_sites(&self) -> Result<&str> {
        self.graph_sites
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| FetchError::configuration("graph_sites not set in configuration"))
    }

    pub fn item_filter(&self) -> ItemFilter {
        ItemFilter::new(self.file_prefix.clone(), self.file_extensions.clone())
    }
}
