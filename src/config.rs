//! Provides configuration options for conversions, both programmatically and via config files.

use std::io::Error as IoError;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read config file: {0}")]
    Read(#[source] IoError),
    #[error("cannot parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// What to do with a flat sequence that ends in a key with no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, EnumString, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OddLength {
    /// Fail with a malformed input error before looking at any pair.
    Reject,
    /// Drop the dangling key. It still has to be a string.
    Truncate,
}

impl Default for OddLength {
    fn default() -> Self {
        Self::Reject
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub odd_length: OddLength,
}

impl Config {
    pub fn from_str(value: &str) -> Result<Self, Error> {
        toml::from_str(value).map_err(Error::Parse)
    }

    pub fn from_file<P: AsRef<Path>>(path: &P) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(Error::Read)?;
        Self::from_str(&contents)
    }
}
