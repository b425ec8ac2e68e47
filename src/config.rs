//! Default inputs loaded from an optional TOML file
//!
//! Lookup order: an explicit path, then `INTEREST_CONFIG`, then
//! `<config_home>/compound-interest/config.toml`. Only the last one may be absent.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{InterestError, Result};

pub const CONFIG_ENV_VAR: &str = "INTEREST_CONFIG";
const CONFIG_DIR: &str = "compound-interest";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Inputs used when a flag is not given on the command line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub principal: Decimal,
    pub rate: Decimal,
    pub years: Decimal,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            principal: Decimal::from(1000),
            rate: Decimal::from(5),
            years: Decimal::from(10),
        }
    }
}

impl Config {
    /// Resolve and load the config file, falling back to built-in defaults
    /// when no file is configured and none exists at the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Self::from_file(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            InterestError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content)
            .map_err(|e| InterestError::Config(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dir_spec::config_home().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}
