//! Availability checks for the external tools used after scaffolding

use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// One-line summary such as `git (git version 2.43.0)`
    pub fn summary(&self) -> String {
        match (&self.version, self.available) {
            (Some(version), true) => format!("{} ({})", self.name, version),
            (None, true) => format!("{} (unknown version)", self.name),
            _ => format!("{} (not installed)", self.name),
        }
    }
}

/// Probe a binary with `--version`
pub fn check_tool(name: &'static str) -> RuntimeInfo {
    let output = Command::new(name).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: (!version.is_empty()).then_some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check every tool, in order
pub fn check_tools(names: &[&'static str]) -> Vec<RuntimeInfo> {
    names.iter().copied().map(check_tool).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool() {
        let info = check_tool("pelias-init-no-such-tool");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert_eq!(info.summary(), "pelias-init-no-such-tool (not installed)");
    }

    #[test]
    fn test_check_tools_preserves_order() {
        let infos = check_tools(&["pelias-init-missing-a", "pelias-init-missing-b"]);
        let names: Vec<_> = infos.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["pelias-init-missing-a", "pelias-init-missing-b"]);
    }

    #[test]
    fn test_summary_with_version() {
        let info = RuntimeInfo {
            name: "npm",
            version: Some("10.2.4".to_string()),
            available: true,
        };
        assert_eq!(info.summary(), "npm (10.2.4)");
    }
}
