//! Template pack version checks against the running CLI

use anyhow::Result;
use semver::Version;

/// Warn when a template pack expects a newer CLI than the one running
///
/// Unparseable versions never produce a warning.
pub fn check_compatibility(
    cli_name: &str,
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli = parse_version(cli_version).ok()?;
    let template = parse_version(template_version).ok()?;

    (cli < template).then(|| {
        format!(
            "Template pack targets {} {} or newer, but {} is running.\n\
             Consider updating: {}",
            cli_name, template, cli, upgrade_command
        )
    })
}

/// Parse a version string, accepting an optional leading `v`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install pelias-init --force";

    #[test]
    fn test_older_cli_warns() {
        let warning = check_compatibility("pelias-init", "0.1.0", "0.2.0", UPGRADE).unwrap();
        assert!(warning.contains("0.2.0"));
        assert!(warning.contains(UPGRADE));
    }

    #[test]
    fn test_same_or_newer_cli_is_silent() {
        assert!(check_compatibility("pelias-init", "0.1.0", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("pelias-init", "1.0.0", "0.9.3", UPGRADE).is_none());
    }

    #[test]
    fn test_invalid_versions_are_silent() {
        assert!(check_compatibility("pelias-init", "dev", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("pelias-init", "0.1.0", "latest", UPGRADE).is_none());
    }

    #[test]
    fn test_parse_version_prefix() {
        assert_eq!(parse_version("v1.2.3").unwrap(), Version::new(1, 2, 3));
        assert!(parse_version("1.2").is_err());
    }
}
