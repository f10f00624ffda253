//! Environment and logger setup for the binary

use env_logger::{Builder, Env};
use std::path::{Path, PathBuf};

/// Load `.env` and then configure the stderr logger from the environment.
///
/// `RUST_LOG` set in the `.env` file is in place before the filter is read.
/// `dotenv_file` overrides the usual lookup of `.env` from the working directory.
/// Returns the loaded file, if any, and a builder ready for `init()`.
pub fn load_env_and_logger(dotenv_file: Option<&Path>) -> (Option<PathBuf>, Builder) {
    let loaded = match dotenv_file {
        Some(path) => dotenvy::from_path(path).ok().map(|_| path.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    };

    let builder = Builder::from_env(Env::default().default_filter_or("warn"));
    (loaded, builder)
}
