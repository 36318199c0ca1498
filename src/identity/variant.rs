//! Build variant selection

use super::constants::{
    ALPHA_ENV_VAR, APP_NAME, DMG_ALPHA_NAME, MACOS_ALPHA_BUNDLE_ID, MACOS_BUNDLE_ID,
};
use serde::Serialize;
use std::env;
use std::fmt;

/// Which identity a build ships under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    /// Regular release identity
    #[default]
    Standard,
    /// Pre-release identity with suffixed bundle id and display name
    Alpha,
}

impl BuildVariant {
    /// Derive the variant from the raw value of the alpha flag.
    ///
    /// A set but empty flag counts as unset.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => BuildVariant::Alpha,
            _ => BuildVariant::Standard,
        }
    }

    /// Read `Q_CLI_ALPHA` from the process environment
    pub fn from_env() -> Self {
        // var_os so a non-UTF-8 value still counts as set
        let raw = env::var_os(ALPHA_ENV_VAR);
        let variant = Self::from_flag(raw.as_ref().map(|v| v.to_string_lossy()).as_deref());
        log::debug!("{}={:?} -> {} build", ALPHA_ENV_VAR, raw, variant);
        variant
    }

    /// macOS bundle identifier for this variant
    pub fn bundle_identifier(self) -> &'static str {
        match self {
            BuildVariant::Standard => MACOS_BUNDLE_ID,
            BuildVariant::Alpha => MACOS_ALPHA_BUNDLE_ID,
        }
    }

    /// Display name used for the disk image volume
    pub fn display_name(self) -> &'static str {
        match self {
            BuildVariant::Standard => APP_NAME,
            BuildVariant::Alpha => DMG_ALPHA_NAME,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildVariant::Standard => "standard",
            BuildVariant::Alpha => "alpha",
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
