//! Template pack manifest types and parsing

use crate::config::Convention;
use crate::manifest::ProjectManifest;
use serde::{Deserialize, Serialize};

/// When a template file is copied into a new project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCondition {
    /// Every project (ignore files, lint config)
    #[default]
    Always,
    /// Only when unit tests are requested (CI config, test stub)
    Tests,
}

impl FileCondition {
    pub fn applies(&self, manifest: &ProjectManifest) -> bool {
        match self {
            FileCondition::Always => true,
            FileCondition::Tests => manifest.include_tests,
        }
    }
}

/// A static file in the template pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    /// Path relative to the template pack directory
    pub source: String,

    /// Path in the generated project (defaults to source if not specified)
    #[serde(default)]
    pub dest: Option<String>,

    #[serde(default)]
    pub when: FileCondition,
}

impl TemplateFile {
    /// Get the destination path (falls back to source if dest not specified)
    pub fn destination(&self) -> &str {
        self.dest.as_deref().unwrap_or(&self.source)
    }
}

/// Template pack manifest (`template.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template pack
    pub name: String,

    /// Description of what the template provides
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,

    /// README template used when the convention asks for a rich README
    #[serde(default)]
    pub readme: Option<String>,

    /// Static files copied into every project (or only tested ones)
    #[serde(default)]
    pub files: Vec<TemplateFile>,

    /// Naming and packaging conventions
    #[serde(default)]
    pub convention: Convention,
}

impl TemplateManifest {
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReadmeStyle;

    #[test]
    fn test_parse_template_manifest() {
        let yaml = r#"
name: Example
description: Example pack
version: 0.1.0
files:
  - source: gitignore
    dest: .gitignore
  - source: test/test.js
    when: tests
"#;
        let manifest = TemplateManifest::from_yaml(yaml).unwrap();
        assert_eq!(manifest.name, "Example");
        assert_eq!(manifest.files.len(), 2);
        assert_eq!(manifest.files[0].destination(), ".gitignore");
        assert_eq!(manifest.files[0].when, FileCondition::Always);
        assert_eq!(manifest.files[1].destination(), "test/test.js");
        assert_eq!(manifest.files[1].when, FileCondition::Tests);
        assert!(manifest.readme.is_none());
        assert_eq!(manifest.convention, Convention::default());
    }

    #[test]
    fn test_parse_template_manifest_with_convention() {
        let yaml = r#"
name: Example
description: Example pack
version: 0.1.0
readme: README.md
convention:
  namespace: acme-
  readme: rich
"#;
        let manifest = TemplateManifest::from_yaml(yaml).unwrap();
        assert_eq!(manifest.readme.as_deref(), Some("README.md"));
        assert_eq!(manifest.convention.namespace.as_deref(), Some("acme-"));
        assert_eq!(manifest.convention.readme, ReadmeStyle::Rich);
        assert!(manifest.files.is_empty());
    }

    #[test]
    fn test_unknown_condition_rejected() {
        let yaml = r#"
name: Example
description: Example pack
version: 0.1.0
files:
  - source: a
    when: sometimes
"#;
        assert!(TemplateManifest::from_yaml(yaml).is_err());
    }
}
