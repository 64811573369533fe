//! Template packs: static project files plus conventions
//!
//! This module provides:
//! - Template pack manifest types (`template.yaml`)
//! - Loading packs from the embedded copy or a local directory
//! - Selection of the static files a project receives
//! - Writing generated projects to disk
//! - Version compatibility checking and pack linting

pub mod embedded;
pub mod lint;
pub mod manifest;
pub mod source;
pub mod version;
pub mod writer;

use crate::manifest::ProjectManifest;
use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::Path;

pub use lint::{lint_template_dir, LintReport};
pub use manifest::{FileCondition, TemplateFile, TemplateManifest};
pub use source::{EmbeddedFile, LoadedFile, TemplatePack, TemplateSource};
pub use version::check_compatibility;
pub use writer::write_project;

/// Destination paths of the template files a project receives
///
/// Files marked `always` are always selected; files marked `tests` (CI
/// config, test stub) only when the manifest includes tests.
pub fn select_optional_files(
    manifest: &ProjectManifest,
    files: &[TemplateFile],
) -> BTreeSet<String> {
    files
        .iter()
        .filter(|f| f.when.applies(manifest))
        .map(|f| f.destination().to_string())
        .collect()
}

/// Lint a local template pack directory and print the findings
pub fn check_templates(dir: &Path) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!("Template directory not found: {}", dir.display());
    }

    let (manifest, report) = lint_template_dir(dir)?;

    println!(
        "{}",
        format!("Checking template pack {} ({})...", manifest.name, manifest.version)
            .cyan()
            .bold()
    );
    println!();

    for file in &manifest.files {
        let status = if report.missing.contains(&file.source) {
            "missing".red()
        } else {
            "ok".green()
        };
        println!(
            "  {} {} -> {} [{:?}] {}",
            "->".blue(),
            file.source,
            file.destination(),
            file.when,
            status
        );
    }

    for path in &report.unsafe_paths {
        eprintln!("{} path escapes the pack: {}", "Error:".red(), path);
    }
    for path in &report.missing {
        eprintln!("{} missing file: {}", "Error:".red(), path);
    }
    for path in &report.unlisted {
        eprintln!("{} not listed in template.yaml: {}", "Warning:".yellow(), path);
    }

    // Loading exercises YAML, convention and template parsing together
    let pack = TemplatePack::load(&TemplateSource::Local(dir.to_path_buf()))?;
    let sample = crate::input::ProjectInput {
        name: "example".to_string(),
        description: "Example project".to_string(),
        keywords_raw: "example".to_string(),
        init_tests: "y".to_string(),
    }
    .normalize(pack.convention())?;
    crate::render::generate_files(&sample, &pack)?;

    println!();
    if report.is_clean() {
        println!("{} {}", "Template pack OK:".green().bold(), dir.display());
        Ok(())
    } else {
        anyhow::bail!("Template pack has errors: {}", dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Convention;
    use crate::manifest::build_manifest;

    fn files() -> Vec<TemplateFile> {
        let file = |source: &str, dest: Option<&str>, when| TemplateFile {
            source: source.to_string(),
            dest: dest.map(str::to_string),
            when,
        };
        vec![
            file("gitignore", Some(".gitignore"), FileCondition::Always),
            file(".jshintrc", None, FileCondition::Always),
            file(".travis.yml", None, FileCondition::Tests),
            file("test/test.js", None, FileCondition::Tests),
        ]
    }

    fn manifest(include_tests: bool) -> ProjectManifest {
        build_manifest("geocoder", "", Vec::new(), include_tests, &Convention::default())
    }

    #[test]
    fn test_select_without_tests() {
        let selected = select_optional_files(&manifest(false), &files());
        assert_eq!(
            selected.into_iter().collect::<Vec<_>>(),
            vec![".gitignore", ".jshintrc"]
        );
    }

    #[test]
    fn test_select_with_tests() {
        let selected = select_optional_files(&manifest(true), &files());
        assert!(selected.contains(".travis.yml"));
        assert!(selected.contains("test/test.js"));
        assert!(selected.contains(".gitignore"));
        assert!(selected.contains(".jshintrc"));
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_select_embedded_pack() {
        let pack = TemplatePack::load(&TemplateSource::Embedded(embedded::PELIAS)).unwrap();

        let without = select_optional_files(&manifest(false), &pack.manifest().files);
        assert!(!without.contains(".travis.yml"));
        assert!(!without.contains("test/test.js"));

        let with = select_optional_files(&manifest(true), &pack.manifest().files);
        assert!(with.contains(".travis.yml"));
        assert!(with.contains("test/test.js"));
    }

    #[test]
    fn test_check_templates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_templates(&dir.path().join("nope")).is_err());
    }
}
