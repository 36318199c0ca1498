// Default disk image layout for the macOS installer.
// Paths are relative to the scripts/ directory the builder runs from.

use crate::identity::constants::CHAT_PACKAGE_NAME;

// =================================
// Volume
// =================================
pub const DEFAULT_FORMAT: &str = "UDBZ"; // bzip2-compressed, see `hdiutil create -help`
pub const DEFAULT_SIZE: &str = "50M";
pub const DEFAULT_RELEASE_DIR: &str = "../target/release";

// =================================
// Symlinks
// =================================
pub const APPLICATIONS_LINK_NAME: &str = "Applications";
pub const APPLICATIONS_LINK_TARGET: &str = "/Applications";

// =================================
// Finder window
// =================================
pub const DEFAULT_WINDOW_ORIGIN: (i32, i32) = (100, 100);
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (640, 280);
pub const DEFAULT_ICON_SIZE: u32 = 128;
pub const DEFAULT_TEXT_SIZE: u32 = 16;

// =================================
// Icon placement
// =================================
pub const DEFAULT_BINARY_ICON_POSITION: (i32, i32) = (160, 140);
pub const DEFAULT_APPLICATIONS_ICON_POSITION: (i32, i32) = (480, 140);

/// Path of the release binary the image ships
pub fn default_binary_path() -> String {
    format!("{DEFAULT_RELEASE_DIR}/{CHAT_PACKAGE_NAME}")
}
