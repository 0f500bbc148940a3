//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MERCADITO_DATA_DIR` - Directory holding the JSON storage slots
//!   (default: `.mercadito`)

use std::path::PathBuf;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".mercadito";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the JSON storage slots.
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            data_dir: PathBuf::from(get_env_or_default(
                "MERCADITO_DATA_DIR",
                DEFAULT_DATA_DIR,
            )),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
