//! Release stage and target platform

use crate::exceptions::{ReleaseError, Result};
use serde::Serialize;
use std::env;
use std::fmt;

/// Deployment stage a release is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Prod,
    Gamma,
}

impl Stage {
    /// Parse a stage name; no name means prod
    pub fn parse(name: Option<&str>) -> Result<Self> {
        match name {
            None | Some("prod") => Ok(Stage::Prod),
            Some("gamma") => Ok(Stage::Gamma),
            Some(other) => Err(ReleaseError::UnknownStage(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Prod => "prod",
            Stage::Gamma => "gamma",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform release artifacts are produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(rename = "macos")]
    MacOs,
    Linux,
}

impl Platform {
    /// Parse an OS name as reported by `std::env::consts::OS` (`darwin` accepted too)
    pub fn parse(os: &str) -> Result<Self> {
        match os.to_lowercase().as_str() {
            "macos" | "darwin" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(ReleaseError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Platform of the running host
    pub fn current() -> Result<Self> {
        Self::parse(env::consts::OS)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
