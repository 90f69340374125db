//! Runtime settings for the Store Engine server.
//!
//! Settings come from `STORE_*` environment variables, optionally
//! seeded from a `.env` file in the working directory.

use anyhow::Result;
use ::config::{Config, Environment};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// `STORE_BIND_ADDR`
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// `STORE_LOG_LEVEL`; ignored when `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `STORE_DEFAULT_PAGE_SIZE`
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// `STORE_TAX_SLAB_FILE`; the default slabs are used when unset.
    #[serde(default)]
    pub tax_slab_file: Option<PathBuf>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            log_level: default_log_level(),
            default_page_size: default_page_size(),
            tax_slab_file: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env(Environment::with_prefix("STORE"))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
