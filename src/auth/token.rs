use super::credentials::ClientCredentials;
use crate::api::constants::GRANT_CLIENT_CREDENTIALS;
use crate::config::Config;
use crate::error::{FetchError, Result};
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;

/// Raw token endpoint response. Empty when the provider issued no access token.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl TokenResponse {
    pub fn is_empty(&self) -> bool {
        self.access_token.as_deref().is_none_or(str::is_empty)
    }

    /// `Authorization` header value; fails instead of producing a garbage header
    pub fn authorization_header(&self) -> Result<String> {
        let access_token = self
            .access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| FetchError::authentication("No access token in token response"))?;
        let token_type = self
            .token_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Bearer");
        Ok(format!("{} {}", token_type, access_token))
    }

    pub fn into_token(self) -> Result<Token> {
        let access_token = match self.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(FetchError::authentication(
                    "Identity provider returned no access token",
                ));
            }
        };

        Ok(Token {
            token_type: self
                .token_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Bearer".to_string()),
            access_token,
            expires_in: self.expires_in,
        })
    }
}

/// Access token for the Graph calls of a single run
#[derive(Clone)]
pub struct Token {
    token_type: String,
    access_token: String,
    expires_in: Option<u64>,
}

impl Token {
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }

    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Run the client-credentials grant once
///
/// Returns an empty [`TokenResponse`] when the provider answers without an
/// access token, whatever the HTTP status. Transport failures are errors.
pub async fn request_token(http: &Client, credentials: &ClientCredentials) -> Result<TokenResponse> {
    let token_url = credentials.token_url();
    debug!(
        "Requesting token from {} with client_id {}",
        token_url, credentials.client_id
    );

    let response = http
        .post(&token_url)
        .form(&[
            ("grant_type", GRANT_CLIENT_CREDENTIALS),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("scope", credentials.scope.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    debug!("Token request status: {}", status);
    let body = response.text().await?;

    let token: TokenResponse = match serde_json::from_str(&body) {
        Ok(token) => token,
        Err(e) => {
            warn!("Unreadable token response ({}): {}", status, e);
            return Ok(TokenResponse::default());
        }
    };

    if token.is_empty() {
        warn!(
            "No access token in response ({}): {} {}",
            status,
            token.error.as_deref().unwrap_or("unknown_error"),
            token.error_description.as_deref().unwrap_or("")
        );
        return Ok(TokenResponse::default());
    }

    Ok(token)
}

/// Acquire a token for the configured app; no token is a hard failure
pub async fn acquire_token(http: &Client, config: &Config) -> Result<Token> {
    let credentials = ClientCredentials::from_config(config)?;
    let token = request_token(http, &credentials).await?.into_token()?;
    info!(
        "Access token obtained (type {}, expires in {:?}s)",
        token.token_type(),
        token.expires_in()
    );
    Ok(token)
}
