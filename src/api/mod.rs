//! Microsoft Graph drive API
//!
//! Thin client over the three drive endpoints needed to reach a folder's
//! children: list drives, resolve a folder by path, list children.

pub mod client;
pub mod constants;
pub mod models;

pub use client::{GraphClient, build_http_client, find_drive};
pub use models::{Collection, DriveItem};
