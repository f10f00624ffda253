use crate::api::constants;
use crate::config::Config;
use crate::error::{FetchError, Result};
use log::info;
use std::fmt;

/// App registration credentials for the client-credentials grant
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub authority: String,
    pub client_secret: String,
    pub scope: String,
}

impl ClientCredentials {
    pub fn from_config(config: &Config) -> Result<ClientCredentials> {
        info!("Reading client credentials from configuration");

        let client_id = required(config.sharepoint_client_id.as_deref(), "sharepoint_client_id")?;
        let authority = required(config.authority.as_deref(), "authority")?;
        let client_secret = required(
            config.sharepoint_client_sct_value.as_deref(),
            "sharepoint_client_sct_value",
        )?;
        let scope = config
            .sharepoint_scope
            .as_ref()
            .map(|s| s.to_scope_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                FetchError::authentication("sharepoint_scope not set in configuration")
            })?;

        Ok(ClientCredentials {
            client_id,
            authority,
            client_secret,
            scope,
        })
    }

    pub fn token_url(&self) -> String {
        constants::token_endpoint(&self.authority)
    }
}

fn required(value: Option<&str>, key: &str) -> Result<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| FetchError::authentication(format!("{} not set in configuration", key)))
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("authority", &self.authority)
            .field("client_secret", &"<redacted>")
            .field("scope", &self.scope)
            .finish()
    }
}
