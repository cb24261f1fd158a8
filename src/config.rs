//! # Configuration
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. built-in defaults ([`ServiceConfig::default`])
//! 2. a TOML file (`product-service.toml`, or the path given with `--config`); a missing file is skipped
//! 3. environment variables prefixed `PRODUCT_SERVICE_` (e.g. `PRODUCT_SERVICE_PORT=8000`)
//! 4. command-line flags

use crate::http::NormalizationPolicy;
use crate::validation::ValidationMode;
use axum::http::HeaderValue;
use clap::Parser;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "product-service.toml";
pub const ENV_PREFIX: &str = "PRODUCT_SERVICE_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
    #[error("channel_capacity must be greater than zero")]
    ZeroChannelCapacity,
}

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "product-service", version, about = "Product catalogue HTTP service")]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Port to listen on.
    #[arg(long)]
    pub port: Option<u16>,

    /// JSON file holding the product collection.
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub cors_origin: String,
    /// Body fields whose string values are lowercased. Keys not listed here, including
    /// extra keys, keep their case; `"*"` lowercases every top-level string value.
    pub lowercase_fields: Vec<String>,
    pub patch_validation: ValidationMode,
    pub channel_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_file: PathBuf::from("products.json"),
            cors_origin: "http://localhost:8080".to_string(),
            lowercase_fields: ["name", "category", "dateAdded", "supplier"]
                .map(String::from)
                .to_vec(),
            patch_validation: ValidationMode::Full,
            channel_capacity: 32,
        }
    }
}

impl ServiceConfig {
    /// Defaults, then `config_file`, then the environment.
    pub fn figment(config_file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads every layer and applies the CLI overrides on top.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(&cli.config), cli)
    }

    pub fn from_figment(figment: Figment, cli: &Cli) -> Result<Self, ConfigError> {
        let mut config: Self = figment.extract()?;
        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(data_file) = &cli.data_file {
            config.data_file = data_file.clone();
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }
        self.cors_origin_header()?;
        Ok(())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cors_origin_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.cors_origin)
            .map_err(|_| ConfigError::InvalidOrigin(self.cors_origin.clone()))
    }

    pub fn normalization(&self) -> NormalizationPolicy {
        NormalizationPolicy::lowercase(self.lowercase_fields.iter().cloned())
    }
}
