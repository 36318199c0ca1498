//! dmgbuild JSON settings
//!
//! `dmgbuild -s settings.json` takes the layout as a JSON document with a
//! flat `contents` list instead of separate file/symlink/position tables.

use super::descriptor::{DmgDescriptor, Point, item_name};
use crate::exceptions::{ReleaseError, Result};
use log::{debug, info};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DmgbuildSettings {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub format: String,
    pub size: String,
    pub icon_size: u32,
    pub text_size: u32,
    pub window: DmgbuildWindow,
    pub contents: Vec<DmgbuildItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DmgbuildWindow {
    pub position: Point,
    pub size: DmgbuildSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DmgbuildSize {
    pub width: u32,
    pub height: u32,
}

/// Kind of a volume entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Link,
}

/// One positioned entry in the volume root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DmgbuildItem {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub path: String,
    /// Entry name when it differs from the basename of `path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DmgDescriptor {
    /// Convert to the dmgbuild JSON layout.
    ///
    /// dmgbuild needs a position for every entry, so an included file or
    /// symlink without an icon location is an error here.
    pub fn to_dmgbuild_settings(&self) -> Result<DmgbuildSettings> {
        let position = |name: &str| {
            self.icon_locations.get(name).copied().ok_or_else(|| {
                ReleaseError::InvalidDescriptor(format!("no icon location for '{}'", name))
            })
        };

        let mut contents = Vec::with_capacity(self.files.len() + self.symlinks.len());

        for file in &self.files {
            let at = position(item_name(file))?;
            contents.push(DmgbuildItem {
                x: at.x,
                y: at.y,
                kind: ItemKind::File,
                path: file.clone(),
                name: None,
            });
        }

        for (name, target) in &self.symlinks {
            let at = position(name)?;
            let renamed = item_name(target) != name;
            contents.push(DmgbuildItem {
                x: at.x,
                y: at.y,
                kind: ItemKind::Link,
                path: target.clone(),
                name: renamed.then(|| name.clone()),
            });
        }

        Ok(DmgbuildSettings {
            title: self.title.clone(),
            icon: self.icon.clone(),
            background: self.background.clone(),
            format: self.format.clone(),
            size: self.size.clone(),
            icon_size: self.icon_size,
            text_size: self.text_size,
            window: DmgbuildWindow {
                position: self.window_rect.origin,
                size: DmgbuildSize {
                    width: self.window_rect.width,
                    height: self.window_rect.height,
                },
            },
            contents,
        })
    }
}

/// Render the dmgbuild settings as pretty JSON
pub fn render_settings(descriptor: &DmgDescriptor) -> Result<String> {
    let settings = descriptor.to_dmgbuild_settings()?;
    Ok(serde_json::to_string_pretty(&settings)?)
}

/// Write dmgbuild settings to `output`.
///
/// The file is written next to its destination and renamed into place, so a
/// reader never sees a partial document.
pub fn write_settings(descriptor: &DmgDescriptor, output: &Path) -> Result<()> {
    let json = render_settings(descriptor)?;

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    debug!("Staging dmgbuild settings in {}", dir.display());

    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(json.as_bytes())?;
    staged.write_all(b"\n")?;
    staged.flush()?;
    staged.persist(output).map_err(|e| e.error)?;

    info!(
        "Wrote dmgbuild settings for '{}' to {}",
        descriptor.title,
        output.display()
    );
    Ok(())
}
