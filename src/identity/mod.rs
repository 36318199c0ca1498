//! Product identity: names, bundle ids and package identifiers
//!
//! Everything here is fixed except the bundle identifier and the disk image
//! display name, which follow the [`BuildVariant`]. The variant is resolved
//! once and carried by an [`Identity`] value that callers pass around.

pub mod constants;
pub mod variant;

pub use variant::BuildVariant;

use constants::{
    APP_NAME, APPLE_TEAM_ID, CHAT_BINARY_NAME, CHAT_PACKAGE_NAME, CLI_BINARY_NAME,
    CLI_PACKAGE_NAME, DESKTOP_BINARY_NAME, DESKTOP_FUZZ_PACKAGE_NAME, DESKTOP_PACKAGE_NAME,
    DESKTOP_PACKAGE_PATH, LINUX_ARCHIVE_NAME, LINUX_LEGACY_GNOME_EXTENSION_UUID,
    LINUX_MODERN_GNOME_EXTENSION_UUID, LINUX_PACKAGE_NAME, PTY_BINARY_NAME, PTY_PACKAGE_NAME,
    TAURI_PRODUCT_NAME, URL_SCHEMA,
};
use serde::Serialize;

/// Resolved identity for one build invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Identity {
    variant: BuildVariant,
}

impl Identity {
    /// Identity for an explicit variant
    pub fn new(variant: BuildVariant) -> Self {
        Self { variant }
    }

    /// Identity for the variant selected by the process environment
    pub fn from_env() -> Self {
        Self::new(BuildVariant::from_env())
    }

    pub fn variant(&self) -> BuildVariant {
        self.variant
    }

    /// macOS bundle identifier (`com.amazon.codewhisperer[.alpha]`)
    pub fn resolve_bundle_identifier(&self) -> &'static str {
        self.variant.bundle_identifier()
    }

    /// Display name used for the disk image (`Amazon Q[ Alpha]`)
    pub fn resolve_display_name(&self) -> &'static str {
        self.variant.display_name()
    }

    /// Snapshot of the full constants table for this identity
    pub fn table(&self) -> IdentityTable {
        IdentityTable {
            variant: self.variant,
            app_name: APP_NAME,
            cli_binary_name: CLI_BINARY_NAME,
            chat_binary_name: CHAT_BINARY_NAME,
            pty_binary_name: PTY_BINARY_NAME,
            desktop_binary_name: DESKTOP_BINARY_NAME,
            url_schema: URL_SCHEMA,
            tauri_product_name: TAURI_PRODUCT_NAME,
            macos_bundle_id: self.resolve_bundle_identifier(),
            dmg_name: self.resolve_display_name(),
            apple_team_id: APPLE_TEAM_ID,
            linux_package_name: LINUX_PACKAGE_NAME,
            linux_archive_name: LINUX_ARCHIVE_NAME,
            linux_legacy_gnome_extension_uuid: LINUX_LEGACY_GNOME_EXTENSION_UUID,
            linux_modern_gnome_extension_uuid: LINUX_MODERN_GNOME_EXTENSION_UUID,
            cli_package_name: CLI_PACKAGE_NAME,
            chat_package_name: CHAT_PACKAGE_NAME,
            pty_package_name: PTY_PACKAGE_NAME,
            desktop_package_name: DESKTOP_PACKAGE_NAME,
            desktop_fuzz_package_name: DESKTOP_FUZZ_PACKAGE_NAME,
            desktop_package_path: DESKTOP_PACKAGE_PATH,
        }
    }
}

/// Serializable view of every identity value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityTable {
    pub variant: BuildVariant,
    pub app_name: &'static str,
    pub cli_binary_name: &'static str,
    pub chat_binary_name: &'static str,
    pub pty_binary_name: &'static str,
    pub desktop_binary_name: &'static str,
    pub url_schema: &'static str,
    pub tauri_product_name: &'static str,
    pub macos_bundle_id: &'static str,
    pub dmg_name: &'static str,
    pub apple_team_id: &'static str,
    pub linux_package_name: &'static str,
    pub linux_archive_name: &'static str,
    pub linux_legacy_gnome_extension_uuid: &'static str,
    pub linux_modern_gnome_extension_uuid: &'static str,
    pub cli_package_name: &'static str,
    pub chat_package_name: &'static str,
    pub pty_package_name: &'static str,
    pub desktop_package_name: &'static str,
    pub desktop_fuzz_package_name: &'static str,
    pub desktop_package_path: &'static str,
}

impl IdentityTable {
    /// `KEY=VALUE` lines for shell consumption, keys upper-cased.
    ///
    /// Values are single-quoted so names with spaces survive `eval`.
    pub fn to_env_lines(&self) -> Result<Vec<String>, serde_json::Error> {
        let value = serde_json::to_value(self)?;
        let mut lines = Vec::new();
        if let serde_json::Value::Object(map) = value {
            for (key, value) in map {
                let raw = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                lines.push(format!(
                    "{}='{}'",
                    key.to_uppercase(),
                    raw.replace('\'', r"'\''")
                ));
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{BINARY_NAMES, DMG_ALPHA_NAME, MACOS_ALPHA_BUNDLE_ID};
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_identity() {
        let identity = Identity::new(BuildVariant::from_flag(None));
        assert_eq!(
            identity.resolve_bundle_identifier(),
            "com.amazon.codewhisperer"
        );
        assert_eq!(identity.resolve_display_name(), "Amazon Q");
    }

    #[test]
    fn test_alpha_identity() {
        let identity = Identity::new(BuildVariant::from_flag(Some("1")));
        assert_eq!(
            identity.resolve_bundle_identifier(),
            "com.amazon.codewhisperer.alpha"
        );
        assert_eq!(identity.resolve_display_name(), "Amazon Q Alpha");
    }

    #[test]
    fn test_alpha_differs_from_standard() {
        let standard = Identity::new(BuildVariant::Standard);
        let alpha = Identity::new(BuildVariant::Alpha);
        assert_ne!(
            standard.resolve_bundle_identifier(),
            alpha.resolve_bundle_identifier()
        );
        assert_ne!(standard.resolve_display_name(), alpha.resolve_display_name());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let identity = Identity::from_env();
        assert_eq!(
            identity.resolve_bundle_identifier(),
            identity.resolve_bundle_identifier()
        );
        assert_eq!(identity.table(), identity.table());
        assert_eq!(Identity::from_env(), Identity::from_env());
    }

    #[test]
    fn test_binary_names_are_distinct() {
        let names: HashSet<_> = BINARY_NAMES.iter().map(|(_, name)| *name).collect();
        assert_eq!(names.len(), BINARY_NAMES.len());
    }

    #[test]
    fn test_table_carries_resolved_values() {
        let table = Identity::new(BuildVariant::Alpha).table();
        assert_eq!(table.macos_bundle_id, MACOS_ALPHA_BUNDLE_ID);
        assert_eq!(table.dmg_name, DMG_ALPHA_NAME);
        assert_eq!(table.app_name, "Amazon Q");
        assert_eq!(table.apple_team_id, "94KV3E626L");
        assert_eq!(table.desktop_package_path, "crates/fig_desktop");

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["variant"], "alpha");
        assert_eq!(json["chat_package_name"], "chat_cli");
    }

    #[test]
    fn test_env_lines_quote_values() {
        let lines = Identity::new(BuildVariant::Standard)
            .table()
            .to_env_lines()
            .unwrap();
        assert!(lines.contains(&"APP_NAME='Amazon Q'".to_string()));
        assert!(lines.contains(&"MACOS_BUNDLE_ID='com.amazon.codewhisperer'".to_string()));
        assert!(lines.contains(&"VARIANT='standard'".to_string()));
    }
}
