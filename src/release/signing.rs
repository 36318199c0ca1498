//! Code-signing request manifest
//!
//! The signing service expects the executables under a fixed directory name
//! and an app section carrying the bundle id and team prefix.

use crate::identity::Identity;
use crate::identity::constants::APPLE_TEAM_ID;
use serde::Serialize;

pub const EXECUTABLES_DIR: &str = "EXECUTABLES_TO_SIGN";
pub const CERTIFICATE_TYPE: &str = "developerIDAppDistribution";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigningManifest {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub os: &'static str,
    pub name: &'static str,
    pub outputs: Vec<SigningOutput>,
    pub app: SigningApp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigningOutput {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigningApp {
    pub identifier: &'static str,
    pub signing_requirements: SigningRequirements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigningRequirements {
    pub certificate_type: &'static str,
    pub app_id_prefix: &'static str,
}

impl SigningManifest {
    /// Manifest for signing the macOS executables of `identity`
    pub fn for_identity(identity: &Identity) -> Self {
        Self {
            kind: "app",
            os: "osx",
            name: EXECUTABLES_DIR,
            outputs: vec![SigningOutput {
                label: "macos",
                path: EXECUTABLES_DIR,
            }],
            app: SigningApp {
                identifier: identity.resolve_bundle_identifier(),
                signing_requirements: SigningRequirements {
                    certificate_type: CERTIFICATE_TYPE,
                    app_id_prefix: APPLE_TEAM_ID,
                },
            },
        }
    }
}
