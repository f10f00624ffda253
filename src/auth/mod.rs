//! Client-credentials authentication against Azure AD

pub mod credentials;
pub mod token;

pub use credentials::ClientCredentials;
pub use token::{Token, TokenResponse, acquire_token, request_token};
