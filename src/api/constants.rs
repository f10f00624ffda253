//! Constants for the identity provider and Microsoft Graph drive endpoints

/// Timestamp format Graph uses for `lastModifiedDateTime`
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Token endpoint path appended to the configured authority
pub const TOKEN_PATH: &str = "oauth2/v2.0/token";

/// OAuth2 grant used for app-only access
pub const GRANT_CLIENT_CREDENTIALS: &str = "client_credentials";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("sharepoint-fetch/", env!("CARGO_PKG_VERSION"));

/// Defaults for the optional config keys
pub mod defaults {
    pub const CONFIG_FILE: &str = "parameters.json";
    pub const DRIVE_NAME: &str = "Sales";
    pub const FOLDER_PATH: &str = "US/US02/US0201.3834/Projs";
    pub const FILE_PREFIX: &str = "GCTS_";
    pub const FILE_EXTENSIONS: &[&str] = &[".xlsx", ".xls"];
    pub const SHEET_NAME: &str = "SUMMARY";
}

/// Build the token endpoint URL for an authority
pub fn token_endpoint(authority: &str) -> String {
    format!("{}/{}", authority.trim_end_matches('/'), TOKEN_PATH)
}

/// Build the path-addressed folder endpoint under a drive
///
/// Each `/`-separated segment is percent-encoded so names with `#`, `?` or
/// spaces stay inside the path.
pub fn folder_by_path_endpoint(drives_url: &str, drive_id: &str, path: &str) -> String {
    let encoded_path = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/");

    format!(
        "{}/{}/root:/{}",
        drives_url.trim_end_matches('/'),
        drive_id,
        encoded_path
    )
}

/// Build the children listing endpoint for an item in a drive
pub fn children_endpoint(drives_url: &str, drive_id: &str, item_id: &str) -> String {
    format!(
        "{}/{}/items/{}/children",
        drives_url.trim_end_matches('/'),
        drive_id,
        item_id
    )
}
