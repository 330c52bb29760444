//! Configuration - Item catalog and class templates loaded from TOML
//!
//! Both tables ship with the crate under `config/` and are embedded at build
//! time; `load_*` reads a replacement from disk and `parse_*` from a string.

mod classes;
mod items;

pub use classes::{
    default_class_templates, load_class_templates, parse_class_templates, ClassTemplate, StatSeed,
};
pub use items::{default_item_catalog, load_item_catalog, parse_item_catalog, ItemCatalog};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content)
}

/// Deserialize a TOML string
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
