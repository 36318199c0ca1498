//! Version information for the qrelease binary

/// Current version, stamped by build.rs
pub const VERSION: &str = env!("QRELEASE_VERSION");

/// Build timestamp (set at compile time)
pub const BUILD_TIME: Option<&str> = option_env!("BUILD_TIME");

/// Git commit hash (set at compile time)
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Get full version string with optional build information
pub fn full_version() -> String {
    format_version(VERSION, GIT_COMMIT, BUILD_TIME)
}

fn format_version(version: &str, commit: Option<&str>, build_time: Option<&str>) -> String {
    let mut out = version.to_string();

    if let Some(commit) = commit {
        let short: String = commit.chars().take(8).collect();
        out.push_str(&format!(" ({})", short));
    }

    if let Some(time) = build_time {
        out.push_str(&format!(" built {}", time));
    }

    out
}

/// Whether `arg` asks for the full version (`--version` or `-V`)
pub fn is_version_flag(arg: Option<&str>) -> bool {
    matches!(arg, Some("--version" | "-V"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_version_starts_with_version() {
        assert!(full_version().starts_with(VERSION));
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_format_version_with_build_info() {
        assert_eq!(
            format_version("0.1.0", Some("0123456789abcdef"), Some("2026-10-19")),
            "0.1.0 (01234567) built 2026-10-19"
        );
        assert_eq!(format_version("0.1.0", Some("abc"), None), "0.1.0 (abc)");
        assert_eq!(format_version("0.1.0", None, None), "0.1.0");
    }

    #[test]
    fn test_format_version_multibyte_commit() {
        // 'é' is two bytes; a byte slice at 8 would split it
        assert_eq!(
            format_version("0.1.0", Some("abcdefgé12"), None),
            "0.1.0 (abcdefgé)"
        );
    }

    #[test]
    fn test_version_flags() {
        assert!(is_version_flag(Some("--version")));
        assert!(is_version_flag(Some("-V")));
        assert!(!is_version_flag(Some("-v")));
        assert!(!is_version_flag(Some("identity")));
        assert!(!is_version_flag(None));
    }
}
