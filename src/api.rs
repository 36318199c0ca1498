//! High-level API used by the `qrelease` binary and release scripts

use crate::dmg::{self, DmgDescriptor};
use crate::exceptions::Result;
use crate::identity::Identity;
use crate::release::{Platform, ReleaseArtifact, Stage, release_artifacts};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output format for the identity table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityFormat {
    /// Pretty-printed JSON object
    #[default]
    Json,
    /// `KEY='value'` lines
    Env,
}

/// Options for producing dmgbuild settings
#[derive(Debug, Default)]
pub struct DmgOptions {
    /// Where to write the settings; `None` only renders them
    pub output: Option<PathBuf>,
    /// Skip the layout check before rendering
    pub skip_validation: bool,
    /// JSON layout to use instead of the built-in one
    pub descriptor: Option<PathBuf>,
}

/// What a release produces for one platform and stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleasePlan {
    pub stage: Stage,
    pub platform: Platform,
    pub artifacts: Vec<ReleaseArtifact>,
}

/// Render the identity table
pub fn identity_report(identity: &Identity, format: IdentityFormat) -> Result<String> {
    let table = identity.table();
    match format {
        IdentityFormat::Json => Ok(serde_json::to_string_pretty(&table)?),
        IdentityFormat::Env => Ok(table.to_env_lines()?.join("\n")),
    }
}

/// Layout from `path`, or the built-in layout for `identity`
pub fn load_descriptor(identity: &Identity, path: Option<&Path>) -> Result<DmgDescriptor> {
    match path {
        Some(path) => DmgDescriptor::from_json_file(path),
        None => Ok(DmgDescriptor::for_identity(identity)),
    }
}

/// Load the disk image layout, check it, and render (and optionally write)
/// the dmgbuild settings. Returns the rendered JSON.
pub fn prepare_dmg_settings(identity: &Identity, options: &DmgOptions) -> Result<String> {
    let descriptor = load_descriptor(identity, options.descriptor.as_deref())?;

    if options.skip_validation {
        log::warn!("Skipping disk image layout validation");
    } else {
        descriptor.validate()?;
    }

    if let Some(output) = &options.output {
        dmg::write_settings(&descriptor, output)?;
    }
    dmg::render_settings(&descriptor)
}

/// Archive names a release produces
pub fn release_plan(platform: Platform, stage: Stage) -> ReleasePlan {
    log::info!("Planning {} release for {}", stage, platform);
    ReleasePlan {
        stage,
        platform,
        artifacts: release_artifacts(platform),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::BuildVariant;
    use tempfile::TempDir;

    #[test]
    fn test_identity_report_json() {
        let report =
            identity_report(&Identity::new(BuildVariant::Alpha), IdentityFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["dmg_name"], "Amazon Q Alpha");
    }

    #[test]
    fn test_identity_report_env() {
        let report =
            identity_report(&Identity::new(BuildVariant::Standard), IdentityFormat::Env).unwrap();
        assert!(report.lines().any(|l| l == "CHAT_BINARY_NAME='qchat'"));
    }

    #[test]
    fn test_prepare_dmg_settings_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("settings.json");
        let options = DmgOptions {
            output: Some(output.clone()),
            skip_validation: false,
            descriptor: None,
        };

        let rendered =
            prepare_dmg_settings(&Identity::new(BuildVariant::Standard), &options).unwrap();
        let on_disk = std::fs::read_to_string(&output).unwrap();
        assert_eq!(on_disk.trim_end(), rendered);
    }

    #[test]
    fn test_prepare_dmg_settings_rejects_bad_layout_file() {
        let temp_dir = TempDir::new().unwrap();
        let layout = temp_dir.path().join("layout.json");
        let mut dmg = DmgDescriptor::default();
        dmg.files.push("../assets/Applications".to_string());
        std::fs::write(&layout, serde_json::to_string(&dmg).unwrap()).unwrap();

        let identity = Identity::new(BuildVariant::Standard);
        let options = DmgOptions {
            descriptor: Some(layout.clone()),
            ..DmgOptions::default()
        };
        let err = prepare_dmg_settings(&identity, &options).unwrap_err();
        assert!(matches!(err, crate::ReleaseError::InvalidDescriptor(_)));

        // Loaded layout keeps its own title rather than the identity's
        dmg.files.pop();
        dmg.title = "Custom".to_string();
        std::fs::write(&layout, serde_json::to_string(&dmg).unwrap()).unwrap();
        let rendered = prepare_dmg_settings(&identity, &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["title"], "Custom");
    }

    #[test]
    fn test_release_plan() {
        let plan = release_plan(Platform::Linux, Stage::Gamma);
        assert_eq!(plan.artifacts.len(), 2);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["stage"], "gamma");
        assert_eq!(json["platform"], "linux");
        assert_eq!(json["artifacts"][0]["kind"], "tar.gz");
    }
}
