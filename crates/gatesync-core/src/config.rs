//! Environment configuration.
//!
//! One required value: the deployment region, read from `AWS_REGION` once at
//! process start. Absence or an invalid value is a fatal startup condition,
//! not a per-call error.

use figment::{Figment, providers::Env};
use serde::Deserialize;
use thiserror::Error;

use crate::arn::Region;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

#[derive(Debug, Deserialize)]
struct ProviderConfig {
    region: String,
}

/// Resolve the deployment region from the process environment.
pub fn load_region() -> Result<Region, ConfigError> {
    let config: ProviderConfig = Figment::new()
        .merge(Env::prefixed("AWS_").only(&["region"]))
        .extract()?;
    region_from_name(&config.region)
}

/// Validate a region name and derive its partition.
pub fn region_from_name(name: &str) -> Result<Region, ConfigError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::Validation {
            field: "region".to_owned(),
            reason: "must not be empty".to_owned(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ConfigError::Validation {
            field: "region".to_owned(),
            reason: format!("'{name}' is not a valid region name"),
        });
    }
    Ok(Region::new(name))
}
