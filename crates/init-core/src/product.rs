//! Product configuration trait for CLI binaries
//!
//! A binary implements this trait to pick its template pack, environment
//! variable names, package manager and closing instructions.

use crate::manifest::ProjectManifest;
use crate::templates::EmbeddedFile;
use std::path::Path;

/// Configuration trait for scaffolding products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Template pack compiled into the binary
    fn embedded_templates(&self) -> &'static [EmbeddedFile];

    /// Environment variable naming a local template pack directory
    fn template_dir_env(&self) -> &'static str;

    /// Package manager run after `git init`
    fn package_manager(&self) -> &'static str {
        "npm"
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, manifest: &ProjectManifest, installed: bool) -> Vec<String>;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;
}
