//! Release plumbing that reads the identity: stage, artifact names, signing manifest

pub mod artifacts;
pub mod signing;
pub mod stage;

pub use artifacts::{ReleaseArtifact, release_artifacts, write_sha256_sidecar};
pub use signing::SigningManifest;
pub use stage::{Platform, Stage};
