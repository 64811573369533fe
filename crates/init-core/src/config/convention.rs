//! Naming and packaging conventions applied to generated projects

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Placeholder substituted with the project's short name in URL templates
pub const NAME_PLACEHOLDER: &str = "{name}";

/// What to do with empty keyword tokens (from `a,,b`, a trailing comma, or empty input)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordPolicy {
    #[default]
    DropEmpty,
    PreserveEmpty,
}

/// How README.md is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadmeStyle {
    /// Heading plus description
    #[default]
    Plain,
    /// Full template with badges and sections
    Rich,
}

/// Repository URL template such as `https://github.com/pelias/{name}`
///
/// Validated on construction: it must contain `{name}` and produce an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepositoryTemplate(String);

impl RepositoryTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, ScaffoldError> {
        let template = template.into();
        let invalid = |reason: String| ScaffoldError::InvalidRepositoryTemplate {
            template: template.clone(),
            reason,
        };

        if !template.contains(NAME_PLACEHOLDER) {
            return Err(invalid(format!("missing {} placeholder", NAME_PLACEHOLDER)));
        }

        let probe = template.replace(NAME_PLACEHOLDER, "probe");
        let url = Url::parse(&probe).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }

        Ok(Self(template))
    }

    /// Substitute a project name into the template
    pub fn apply(&self, name: &str) -> String {
        self.0
            .replace(NAME_PLACEHOLDER, name)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RepositoryTemplate {
    type Error = ScaffoldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepositoryTemplate> for String {
    fn from(template: RepositoryTemplate) -> Self {
        template.0
    }
}

/// package.json fields that do not depend on user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageDefaults {
    pub version: String,
    pub main: String,
    pub author: Option<String>,
    pub license: Option<String>,

    /// Scripts present in every project
    pub scripts: BTreeMap<String, String>,

    /// Scripts run by the pre-commit hook, in order
    pub pre_commit: Vec<String>,

    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Default for PackageDefaults {
    fn default() -> Self {
        Self {
            version: "0.0.0".to_string(),
            main: "index.js".to_string(),
            author: None,
            license: None,
            scripts: BTreeMap::new(),
            pre_commit: Vec::new(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        }
    }
}

/// package.json additions applied when unit tests are requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestDefaults {
    /// Value of `scripts.test`
    pub script: String,

    /// Pinned dev dependencies for the test runner
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Default for TestDefaults {
    fn default() -> Self {
        Self {
            script: "node test/test.js | tap-dot".to_string(),
            dev_dependencies: [("tape", "^3.0.3"), ("tap-dot", "^0.2.3")]
                .into_iter()
                .map(|(name, version)| (name.to_string(), version.to_string()))
                .collect(),
        }
    }
}

/// Project conventions, usually read from the `convention` section of a template pack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Convention {
    /// Prefix applied to the package name (e.g. `pelias-`)
    pub namespace: Option<String>,

    /// When set, repository/bugs/homepage links are derived from the project name
    pub repository: Option<RepositoryTemplate>,

    pub keywords: KeywordPolicy,
    pub readme: ReadmeStyle,
    pub package: PackageDefaults,
    pub tests: TestDefaults,
}

impl Convention {
    /// Parse a convention from YAML
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Project name with the namespace prefix removed
    ///
    /// A name consisting of nothing but the prefix is returned unchanged.
    pub fn short_name<'n>(&self, name: &'n str) -> &'n str {
        self.namespace
            .as_deref()
            .and_then(|prefix| name.strip_prefix(prefix))
            .filter(|rest| !rest.is_empty())
            .unwrap_or(name)
    }

    /// Package name for a validated project name
    pub fn package_name(&self, name: &str) -> String {
        match &self.namespace {
            Some(prefix) if !name.starts_with(prefix.as_str()) => format!("{}{}", prefix, name),
            _ => name.to_string(),
        }
    }
}
