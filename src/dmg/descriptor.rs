//! Declarative disk image layout

use super::defaults::{
    APPLICATIONS_LINK_NAME, APPLICATIONS_LINK_TARGET, DEFAULT_APPLICATIONS_ICON_POSITION,
    DEFAULT_BINARY_ICON_POSITION, DEFAULT_FORMAT, DEFAULT_ICON_SIZE, DEFAULT_SIZE,
    DEFAULT_TEXT_SIZE, DEFAULT_WINDOW_ORIGIN, DEFAULT_WINDOW_SIZE, default_binary_path,
};
use crate::exceptions::{ReleaseError, Result};
use crate::identity::Identity;
use crate::identity::constants::{APP_NAME, CHAT_PACKAGE_NAME};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// A point in Finder window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// Finder window bounds: top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            origin: DEFAULT_WINDOW_ORIGIN.into(),
            width: DEFAULT_WINDOW_SIZE.0,
            height: DEFAULT_WINDOW_SIZE.1,
        }
    }
}

/// Layout of the distributable `.dmg`.
///
/// Plain data: the image builder reads the fields directly. [`validate`]
/// is available for callers that want to catch layout mistakes before
/// invoking the builder.
///
/// [`validate`]: DmgDescriptor::validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmgDescriptor {
    /// Volume name shown in Finder
    pub title: String,
    /// Volume format passed to `hdiutil`
    pub format: String,
    /// Volume size, `hdiutil` notation
    pub size: String,
    /// Files copied into the volume root
    pub files: Vec<String>,
    /// Symlink name -> target
    pub symlinks: BTreeMap<String, String>,
    /// Volume icon (.icns)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Window background image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub window_rect: WindowRect,
    pub icon_size: u32,
    pub text_size: u32,
    /// Item name -> icon position; names are file basenames or symlink names
    pub icon_locations: BTreeMap<String, Point>,
}

impl Default for DmgDescriptor {
    fn default() -> Self {
        let symlinks = BTreeMap::from([(
            APPLICATIONS_LINK_NAME.to_string(),
            APPLICATIONS_LINK_TARGET.to_string(),
        )]);
        let icon_locations = BTreeMap::from([
            (
                CHAT_PACKAGE_NAME.to_string(),
                DEFAULT_BINARY_ICON_POSITION.into(),
            ),
            (
                APPLICATIONS_LINK_NAME.to_string(),
                DEFAULT_APPLICATIONS_ICON_POSITION.into(),
            ),
        ]);

        Self {
            title: APP_NAME.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            size: DEFAULT_SIZE.to_string(),
            files: vec![default_binary_path()],
            symlinks,
            icon: None,
            background: None,
            window_rect: WindowRect::default(),
            icon_size: DEFAULT_ICON_SIZE,
            text_size: DEFAULT_TEXT_SIZE,
            icon_locations,
        }
    }
}

/// Name an included file shows up under inside the volume
pub(crate) fn item_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file)
}

impl DmgDescriptor {
    /// Default layout with the volume titled after the identity's display name
    pub fn for_identity(identity: &Identity) -> Self {
        Self {
            title: identity.resolve_display_name().to_string(),
            ..Self::default()
        }
    }

    /// Load a layout from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let descriptor: Self = serde_json::from_str(&data)?;
        log::debug!(
            "Loaded disk image layout '{}' from {}",
            descriptor.title,
            path.display()
        );
        Ok(descriptor)
    }

    /// Names of every item placed in the volume root, files first
    pub fn item_names(&self) -> Vec<&str> {
        self.files
            .iter()
            .map(|f| item_name(f))
            .chain(self.symlinks.keys().map(String::as_str))
            .collect()
    }

    /// Check the layout for mistakes the image builder would trip over.
    ///
    /// Every problem found is reported in one error.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.files.is_empty() {
            problems.push("no files to include".to_string());
        }
        if self.icon_size == 0 {
            problems.push("icon size must be positive".to_string());
        }
        if self.window_rect.width == 0 || self.window_rect.height == 0 {
            problems.push(format!(
                "window size {}x{} must be positive",
                self.window_rect.width, self.window_rect.height
            ));
        }

        let items = self.item_names();

        // Two entries with one name collide in the volume root
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for name in &items {
            if !seen.insert(*name) {
                duplicates.insert(*name);
            }
        }
        for name in duplicates {
            problems.push(format!("duplicate item '{}'", name));
        }

        for name in self.icon_locations.keys() {
            if !items.contains(&name.as_str()) {
                problems.push(format!(
                    "icon location '{}' names neither an included file nor a symlink",
                    name
                ));
            }
        }

        if problems.is_empty() {
            log::debug!(
                "Disk image layout '{}' is valid ({} items)",
                self.title,
                items.len()
            );
            Ok(())
        } else {
            Err(ReleaseError::InvalidDescriptor(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::BuildVariant;

    #[test]
    fn test_default_layout() {
        let dmg = DmgDescriptor::default();
        assert_eq!(dmg.format, "UDBZ");
        assert_eq!(dmg.size, "50M");
        assert_eq!(dmg.files, vec!["../target/release/chat_cli".to_string()]);
        assert_eq!(dmg.symlinks["Applications"], "/Applications");
        assert_eq!(dmg.window_rect.origin, Point { x: 100, y: 100 });
        assert_eq!((dmg.window_rect.width, dmg.window_rect.height), (640, 280));
        assert_eq!(dmg.icon_size, 128);
        assert_eq!(dmg.text_size, 16);
        assert_eq!(dmg.icon_locations["chat_cli"], Point { x: 160, y: 140 });
        assert_eq!(dmg.icon_locations["Applications"], Point { x: 480, y: 140 });
        assert!(dmg.icon.is_none());
        assert!(dmg.background.is_none());
    }

    #[test]
    fn test_every_icon_location_names_an_item() {
        let dmg = DmgDescriptor::default();
        let items = dmg.item_names();
        for key in dmg.icon_locations.keys() {
            assert!(items.contains(&key.as_str()), "{key} not in {items:?}");
        }
        dmg.validate().unwrap();
    }

    #[test]
    fn test_title_follows_identity() {
        let alpha = DmgDescriptor::for_identity(&Identity::new(BuildVariant::Alpha));
        assert_eq!(alpha.title, "Amazon Q Alpha");
        let standard = DmgDescriptor::for_identity(&Identity::new(BuildVariant::Standard));
        assert_eq!(standard.title, "Amazon Q");
        assert_eq!(alpha.icon_locations, standard.icon_locations);
    }

    #[test]
    fn test_unknown_icon_location_rejected() {
        let mut dmg = DmgDescriptor::default();
        dmg.icon_locations
            .insert("qchat".to_string(), Point { x: 0, y: 0 });
        let err = dmg.validate().unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidDescriptor(_)));
        assert!(err.to_string().contains("'qchat'"));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        // Basename collides with the Applications symlink
        let mut dmg = DmgDescriptor::default();
        dmg.files.push("../assets/Applications".to_string());
        let msg = dmg.validate().unwrap_err().to_string();
        assert!(msg.contains("duplicate item 'Applications'"));

        // Two files sharing a basename
        let mut dmg = DmgDescriptor::default();
        dmg.files.push("../target/debug/chat_cli".to_string());
        let msg = dmg.validate().unwrap_err().to_string();
        assert!(msg.contains("duplicate item 'chat_cli'"));
        assert_eq!(msg.matches("duplicate item").count(), 1);
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("layout.json");
        let mut dmg = DmgDescriptor::default();
        dmg.title = "Custom".to_string();
        fs::write(&path, serde_json::to_string(&dmg).unwrap()).unwrap();

        let loaded = DmgDescriptor::from_json_file(&path).unwrap();
        assert_eq!(loaded, dmg);

        fs::write(&path, "{\"title\": \"x\"}").unwrap();
        assert!(matches!(
            DmgDescriptor::from_json_file(&path),
            Err(ReleaseError::JsonError(_))
        ));
    }

    #[test]
    fn test_all_problems_reported() {
        let dmg = DmgDescriptor {
            files: Vec::new(),
            icon_size: 0,
            ..DmgDescriptor::default()
        };
        let msg = dmg.validate().unwrap_err().to_string();
        assert!(msg.contains("no files"));
        assert!(msg.contains("icon size"));
        // chat_cli is no longer included
        assert!(msg.contains("'chat_cli'"));
    }

    #[test]
    fn test_json_roundtrip_keeps_optional_fields_absent() {
        let dmg = DmgDescriptor::default();
        let json = serde_json::to_value(&dmg).unwrap();
        assert!(json.get("icon").is_none());
        let back: DmgDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, dmg);
    }
}
