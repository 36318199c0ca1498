//! Release archive names and checksum sidecars

use super::stage::Platform;
use crate::exceptions::Result;
use crate::identity::constants::CHAT_BINARY_NAME;
use anyhow::Context;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub const CHECKSUM_SUFFIX: &str = ".sha256";

const CHUNK_SIZE: usize = 64 * 1024;

/// Archive format of a release artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArchiveKind {
    #[serde(rename = "zip")]
    Zip,
    #[serde(rename = "tar.gz")]
    TarGz,
}

impl ArchiveKind {
    pub fn extension(self) -> &'static str {
        match self {
            ArchiveKind::Zip => "zip",
            ArchiveKind::TarGz => "tar.gz",
        }
    }
}

/// One archive produced by a release and its checksum sidecar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseArtifact {
    pub kind: ArchiveKind,
    pub file_name: String,
    pub checksum_file_name: String,
}

impl ReleaseArtifact {
    fn new(kind: ArchiveKind) -> Self {
        let file_name = format!("{}.{}", CHAT_BINARY_NAME, kind.extension());
        let checksum_file_name = format!("{file_name}{CHECKSUM_SUFFIX}");
        Self {
            kind,
            file_name,
            checksum_file_name,
        }
    }
}

/// Archives a release produces on `platform`
pub fn release_artifacts(platform: Platform) -> Vec<ReleaseArtifact> {
    match platform {
        Platform::MacOs => vec![ReleaseArtifact::new(ArchiveKind::Zip)],
        Platform::Linux => vec![
            ReleaseArtifact::new(ArchiveKind::TarGz),
            ReleaseArtifact::new(ArchiveKind::Zip),
        ],
    }
}

/// Sidecar path for `path` (`qchat.zip` -> `qchat.zip.sha256`)
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(CHECKSUM_SUFFIX);
    path.with_file_name(name)
}

/// Lowercase hex SHA-256 of a file
pub fn sha256_file(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("opening {} for checksum", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader
            .read(&mut buffer)
            .with_context(|| format!("reading {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Write the SHA-256 of `path` to its `.sha256` sidecar and return the sidecar path
pub fn write_sha256_sidecar(path: &Path) -> Result<PathBuf> {
    let digest = sha256_file(path)?;
    let sidecar = sidecar_path(path);
    std::fs::write(&sidecar, &digest)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    log::info!("Wrote sha256sum to {}: {}", sidecar.display(), digest);
    Ok(sidecar)
}
