pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod selection;
pub mod workbook;

pub use error::{FetchError, Result};
