//! Validation and normalization of user-supplied project metadata

use crate::config::{Convention, KeywordPolicy};
use crate::error::ScaffoldError;
use crate::manifest::{build_manifest, ProjectManifest};

/// Raw answers collected from the user (prompts or CLI flags)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,

    /// Comma-separated keywords
    pub keywords_raw: String,

    /// `y` or `n`
    pub init_tests: String,
}

impl ProjectInput {
    /// Validate every field and build the project manifest
    ///
    /// The name is checked first, so a bad name is reported even when other
    /// fields are also invalid.
    pub fn normalize(&self, convention: &Convention) -> Result<ProjectManifest, ScaffoldError> {
        let name = validate_name(&self.name)?;
        let include_tests = parse_test_flag(&self.init_tests)?;
        let keywords = parse_keywords_with(&self.keywords_raw, convention.keywords);

        Ok(build_manifest(
            &name,
            &self.description,
            keywords,
            include_tests,
            convention,
        ))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Check a project name against `[A-Za-z0-9._-]+`, returning it unchanged
pub fn validate_name(raw: &str) -> Result<String, ScaffoldError> {
    if raw.is_empty() || !raw.chars().all(is_name_char) {
        return Err(ScaffoldError::InvalidName {
            value: raw.to_string(),
        });
    }
    Ok(raw.to_string())
}

/// Split comma-separated keywords, trimming whitespace and dropping empty tokens
pub fn parse_keywords(raw: &str) -> Vec<String> {
    parse_keywords_with(raw, KeywordPolicy::DropEmpty)
}

/// Split comma-separated keywords with an explicit empty-token policy
pub fn parse_keywords_with(raw: &str, policy: KeywordPolicy) -> Vec<String> {
    let tokens = raw.split(',').map(str::trim);
    match policy {
        KeywordPolicy::DropEmpty => tokens
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
        KeywordPolicy::PreserveEmpty => tokens.map(str::to_string).collect(),
    }
}

/// Parse a `y`/`n` answer (case-insensitive)
pub fn parse_test_flag(raw: &str) -> Result<bool, ScaffoldError> {
    match raw {
        "y" | "Y" => Ok(true),
        "n" | "N" => Ok(false),
        _ => Err(ScaffoldError::InvalidFlag {
            value: raw.to_string(),
        }),
    }
}
