use super::constants::{self, USER_AGENT};
use super::models::{Collection, DriveItem, GraphErrorBody};
use crate::auth::Token;
use crate::error::{FetchError, Result};
use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Shared HTTP client for the token, Graph and download calls of one run
pub fn build_http_client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// Microsoft Graph client scoped to one site's drives collection
#[derive(Clone)]
pub struct GraphClient {
    drives_url: String,
    http_client: Client,
    authorization: String,
}

impl GraphClient {
    pub fn new(drives_url: impl Into<String>, token: &Token, http_client: Client) -> Self {
        Self {
            drives_url: drives_url.into().trim_end_matches('/').to_string(),
            http_client,
            authorization: token.authorization_header(),
        }
    }

    /// List the document libraries of the site
    pub async fn list_drives(&self) -> Result<Vec<DriveItem>> {
        self.get_collection(&self.drives_url).await
    }

    /// Resolve a folder by its path relative to the drive root
    pub async fn resolve_folder(&self, drive_id: &str, path: &str) -> Result<DriveItem> {
        let url = constants::folder_by_path_endpoint(&self.drives_url, drive_id, path);
        let response = self.send_get(&url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::lookup(format!(
                "Folder '{}' not found in drive {}",
                path, drive_id
            )));
        }

        let folder: DriveItem = parse_response(response).await?;
        debug!("Resolved folder '{}' to item {}", path, folder.id);
        Ok(folder)
    }

    /// List the immediate children of a drive item
    pub async fn list_children(&self, drive_id: &str, item_id: &str) -> Result<Vec<DriveItem>> {
        let url = constants::children_endpoint(&self.drives_url, drive_id, item_id);
        self.get_collection(&url).await
    }

    async fn get_collection(&self, url: &str) -> Result<Vec<DriveItem>> {
        let response = self.send_get(url).await?;
        let listing: Collection<DriveItem> = parse_response(response).await?;

        if listing.next_link.is_some() {
            warn!("Listing {} has more pages; only the first page is used", url);
        }
        debug!("Listed {} items from {}", listing.value.len(), url);
        Ok(listing.value)
    }

    async fn send_get(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);
        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(api_error(status, &body));
    }
    Ok(response.json::<T>().await?)
}

fn api_error(status: StatusCode, body: &str) -> FetchError {
    let message = serde_json::from_str::<GraphErrorBody>(body)
        .ok()
        .map(|b| match (b.error.code, b.error.message) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (Some(code), None) => code,
            (None, Some(message)) => message,
            (None, None) => String::new(),
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    FetchError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Find a drive by exact name; a miss is a lookup failure, never a fallback
pub fn find_drive<'a>(drives: &'a [DriveItem], name: &str) -> Result<&'a DriveItem> {
    drives.iter().find(|drive| drive.name == name).ok_or_else(|| {
        FetchError::lookup(format!(
            "Drive '{}' not found among {} drives",
            name,
            drives.len()
        ))
    })
}
