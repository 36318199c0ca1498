// Product identity constants shared by every release artifact.
// Values that depend on the build variant live in variant.rs.

// =================================
// Product and binary names
// =================================
pub const APP_NAME: &str = "Amazon Q";
pub const CLI_BINARY_NAME: &str = "q";
pub const CHAT_BINARY_NAME: &str = "qchat";
pub const PTY_BINARY_NAME: &str = "qterm";
pub const DESKTOP_BINARY_NAME: &str = "q-desktop";
pub const URL_SCHEMA: &str = "q";
pub const TAURI_PRODUCT_NAME: &str = "q_desktop";

// =================================
// macOS
// =================================
pub const MACOS_BUNDLE_ID: &str = "com.amazon.codewhisperer";
pub const MACOS_ALPHA_BUNDLE_ID: &str = "com.amazon.codewhisperer.alpha";
pub const DMG_ALPHA_NAME: &str = "Amazon Q Alpha";

/// AMZN Mobile LLC
pub const APPLE_TEAM_ID: &str = "94KV3E626L";

// =================================
// Linux
// =================================
pub const LINUX_PACKAGE_NAME: &str = "amazon-q";
pub const LINUX_ARCHIVE_NAME: &str = "q";
pub const LINUX_LEGACY_GNOME_EXTENSION_UUID: &str =
    "amazon-q-for-cli-legacy-gnome-integration@aws.amazon.com";
pub const LINUX_MODERN_GNOME_EXTENSION_UUID: &str =
    "amazon-q-for-cli-gnome-integration@aws.amazon.com";

// =================================
// Cargo packages
// =================================
pub const CLI_PACKAGE_NAME: &str = "q_cli";
pub const CHAT_PACKAGE_NAME: &str = "chat_cli";
pub const PTY_PACKAGE_NAME: &str = "figterm";
pub const DESKTOP_PACKAGE_NAME: &str = "fig_desktop";
pub const DESKTOP_FUZZ_PACKAGE_NAME: &str = "fig_desktop-fuzz";

// Relative to the workspace root, '/'-separated
pub const DESKTOP_PACKAGE_PATH: &str = "crates/fig_desktop";

// =================================
// Environment
// =================================
/// Selects the alpha identity when set to a non-empty value
pub const ALPHA_ENV_VAR: &str = "Q_CLI_ALPHA";

/// Every binary name with the role it ships under
pub const BINARY_NAMES: [(&str, &str); 4] = [
    ("cli", CLI_BINARY_NAME),
    ("chat", CHAT_BINARY_NAME),
    ("pty", PTY_BINARY_NAME),
    ("desktop", DESKTOP_BINARY_NAME),
];
