//! Daemon configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `FOODQ_*` environment variables.

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use foodq_api_rpc::server::{DEFAULT_RPC_HOST, DEFAULT_RPC_PORT};
use foodq_core::application::retry::{
    DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DELAY_MS,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "~/.foodq/foodq.db";
const ENV_PREFIX: &str = "FOODQ";
const CONFIG_PATH_VAR: &str = "FOODQ_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub retry_max_attempts: u32,
    pub retry_base_delay_ms: u64,
    pub retry_max_delay_ms: u64,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        let file = env
            .get(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .or_else(default_config_file);

        Self::load_from(file, env)
    }

    /// Load from an explicit file and variable set
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(file: Option<PathBuf>, env: HashMap<String, String>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("db_path", DEFAULT_DB_PATH)?
            .set_default("rpc_host", DEFAULT_RPC_HOST)?
            .set_default("rpc_port", i64::from(DEFAULT_RPC_PORT))?
            .set_default("retry_max_attempts", i64::from(DEFAULT_MAX_ATTEMPTS))?
            .set_default("retry_base_delay_ms", DEFAULT_BASE_DELAY_MS)?
            .set_default("retry_max_delay_ms", DEFAULT_MAX_DELAY_MS)?
            .set_default("log_format", "pretty")?;

        if let Some(path) = file {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(Some(env)),
            )
            .build()
            .context("Failed to read configuration")?;

        let mut config: DaemonConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        config.db_path = shellexpand::tilde(&config.db_path).into_owned();

        Ok(config)
    }

    /// sqlx connection string for `db_path`
    pub fn database_url(&self) -> String {
        if self.db_path.starts_with("sqlite:") {
            self.db_path.clone()
        } else {
            format!("sqlite://{}", self.db_path)
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path.contains(":memory:")
    }
}

fn default_config_file() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("foodq").join("config.toml"))
}
