//! Consistency checks for a local template pack directory

use super::manifest::TemplateManifest;
use super::source::{is_safe_relative_path, MANIFEST_FILE};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Problems found in a template pack directory
#[derive(Debug, Default)]
pub struct LintReport {
    /// Files referenced by template.yaml that do not exist
    pub missing: Vec<String>,

    /// Files on disk that template.yaml does not reference
    pub unlisted: Vec<String>,

    /// Paths that escape the pack directory
    pub unsafe_paths: Vec<String>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unsafe_paths.is_empty()
    }
}

/// Compare a pack's template.yaml against the files actually in the directory
pub fn lint_template_dir(dir: &Path) -> Result<(TemplateManifest, LintReport)> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let manifest = TemplateManifest::from_yaml(&content)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

    let mut listed: BTreeSet<String> = manifest.files.iter().map(|f| f.source.clone()).collect();
    if let Some(readme) = &manifest.readme {
        listed.insert(readme.clone());
    }

    let mut report = LintReport::default();

    for file in &manifest.files {
        for path in [file.source.as_str(), file.destination()] {
            if !is_safe_relative_path(path) {
                report.unsafe_paths.push(path.to_string());
            }
        }
    }

    for path in &listed {
        if is_safe_relative_path(path) && !dir.join(path).is_file() {
            report.missing.push(path.clone());
        }
    }

    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(dir)
            .with_context(|| format!("Unexpected path {}", entry.path().display()))?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if relative != MANIFEST_FILE && !listed.contains(&relative) {
            report.unlisted.push(relative);
        }
    }
    report.unlisted.sort();

    Ok((manifest, report))
}
