//! Error types for sharepoint-fetch

use thiserror::Error;

/// Everything that can go wrong between reading the config and printing the sheet
#[derive(Debug, Error)]
pub enum FetchError {
    /// Config file missing, unreadable or malformed, or a required key absent
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Missing credentials or the identity provider returned no access token
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// Expected drive or folder not found
    #[error("Lookup error: {message}")]
    Lookup { message: String },

    /// A candidate item could not be ranked
    #[error("Selection error: {message}")]
    Selection { message: String },

    /// Download reference missing or content is not a readable spreadsheet
    #[error("Retrieval error: {message}")]
    Retrieval { message: String },

    /// Graph answered with a non-success status
    #[error("Graph API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl FetchError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication { message: message.into() }
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup { message: message.into() }
    }

    pub fn selection(message: impl Into<String>) -> Self {
        Self::Selection { message: message.into() }
    }

    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
