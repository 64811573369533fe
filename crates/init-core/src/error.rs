//! Error types surfaced by the scaffolding core

use thiserror::Error;

/// Errors produced while normalizing input or rendering project files
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Project name is empty or contains characters outside `[A-Za-z0-9._-]`
    #[error("Invalid project name '{value}': valid name characters are [a-zA-Z0-9._-]")]
    InvalidName { value: String },

    /// Tests flag is not one of `y`/`n` (any case)
    #[error("Invalid tests flag '{value}': expected 'y' or 'n'")]
    InvalidFlag { value: String },

    /// Repository URL template in a convention is unusable
    #[error("Invalid repository URL template '{template}': {reason}")]
    InvalidRepositoryTemplate { template: String, reason: String },

    /// README template failed to render
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    /// package.json serialization failed
    #[error("Failed to serialize package manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScaffoldError {
    /// Name of the input field the error refers to, if it came from user input
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ScaffoldError::InvalidName { .. } => Some("name"),
            ScaffoldError::InvalidFlag { .. } => Some("tests"),
            _ => None,
        }
    }
}
