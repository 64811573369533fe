//! Template pack loading from the embedded pack or a local directory
//!
//! The embedded pack is compiled into the binary so scaffolding never needs
//! the network. A local directory (via `--template-dir` or the product's
//! environment variable) overrides it, which is how template changes are
//! tried out during development.

use super::manifest::{TemplateFile, TemplateManifest};
use crate::config::Convention;
use crate::product::ProductConfig;
use crate::render::{Renderer, PACKAGE_MANIFEST_PATH, README_PATH};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Name of the manifest file at the root of every template pack
pub const MANIFEST_FILE: &str = "template.yaml";

/// A file compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFile {
    pub path: &'static str,
    pub contents: &'static str,
}

/// Template source - either the embedded pack or a local directory
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Embedded(&'static [EmbeddedFile]),
    Local(PathBuf),
}

impl TemplateSource {
    /// Pick the template source: explicit directory, then the product's
    /// environment variable, then the embedded pack
    pub fn resolve<C: ProductConfig>(config: &C, template_dir: Option<PathBuf>) -> Self {
        template_dir
            .or_else(|| {
                std::env::var_os(config.template_dir_env())
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .map(Self::Local)
            .unwrap_or_else(|| Self::Embedded(config.embedded_templates()))
    }

    /// Read a pack file as UTF-8 text
    pub fn read_to_string(&self, path: &str) -> Result<String> {
        match self {
            TemplateSource::Embedded(files) => files
                .iter()
                .find(|f| f.path == path)
                .map(|f| f.contents.to_string())
                .ok_or_else(|| anyhow::anyhow!("File '{}' not found in embedded templates", path)),
            TemplateSource::Local(dir) => {
                let full_path = dir.join(path);
                std::fs::read_to_string(&full_path)
                    .with_context(|| format!("Failed to read {}", full_path.display()))
            }
        }
    }

    /// Human-readable description for log output
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Embedded(_) => "built-in templates".to_string(),
            TemplateSource::Local(dir) => format!("local templates from {}", dir.display()),
        }
    }
}

/// Check that a pack path stays inside the directory it is joined to
pub(crate) fn is_safe_relative_path(path: &str) -> bool {
    let path = Path::new(path);
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// A template file together with its contents
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub file: TemplateFile,
    pub contents: String,
}

/// A fully loaded template pack
#[derive(Debug, Clone)]
pub struct TemplatePack {
    manifest: TemplateManifest,
    entries: Vec<LoadedFile>,
    readme_template: Option<String>,
}

impl TemplatePack {
    /// Load and validate a template pack
    pub fn load(source: &TemplateSource) -> Result<Self> {
        let content = source.read_to_string(MANIFEST_FILE)?;
        let manifest = TemplateManifest::from_yaml(&content)
            .with_context(|| format!("Failed to parse {}", MANIFEST_FILE))?;

        let mut destinations = HashSet::new();
        let mut entries = Vec::with_capacity(manifest.files.len());

        for file in &manifest.files {
            let dest = file.destination();
            if !is_safe_relative_path(&file.source) || !is_safe_relative_path(dest) {
                anyhow::bail!(
                    "Template file '{}' -> '{}' must be a relative path inside the pack",
                    file.source,
                    dest
                );
            }
            if dest == README_PATH || dest == PACKAGE_MANIFEST_PATH {
                anyhow::bail!(
                    "Template file '{}' would overwrite generated {}",
                    file.source,
                    dest
                );
            }
            if !destinations.insert(dest.to_string()) {
                anyhow::bail!("Duplicate template destination: {}", dest);
            }

            let contents = source.read_to_string(&file.source)?;
            entries.push(LoadedFile {
                file: file.clone(),
                contents,
            });
        }

        let readme_template = match &manifest.readme {
            Some(path) => Some(source.read_to_string(path)?),
            None => None,
        };

        Ok(Self {
            manifest,
            entries,
            readme_template,
        })
    }

    pub fn manifest(&self) -> &TemplateManifest {
        &self.manifest
    }

    pub fn convention(&self) -> &Convention {
        &self.manifest.convention
    }

    pub fn entries(&self) -> &[LoadedFile] {
        &self.entries
    }

    pub fn readme_template(&self) -> Option<&str> {
        self.readme_template.as_deref()
    }

    /// Renderer configured with this pack's convention and README template
    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(self.convention()).with_readme_template(self.readme_template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReadmeStyle;
    use crate::templates::embedded;

    fn write(dir: &Path, path: &str, contents: &str) {
        let full = dir.join(path);
        std::fs::create_dir_all(full.parent().unwrap()).unwrap();
        std::fs::write(full, contents).unwrap();
    }

    const MINIMAL_MANIFEST: &str = r#"
name: Minimal
description: Minimal pack
version: 0.1.0
files:
  - source: gitignore
    dest: .gitignore
  - source: test/test.js
    when: tests
"#;

    #[test]
    fn test_load_embedded_pack() {
        let pack = TemplatePack::load(&TemplateSource::Embedded(embedded::PELIAS)).unwrap();
        assert_eq!(pack.manifest().name, "Pelias");
        assert_eq!(pack.convention().namespace.as_deref(), Some("pelias-"));
        assert_eq!(pack.convention().readme, ReadmeStyle::Rich);
        assert!(pack.readme_template().is_some());
        assert_eq!(pack.entries().len(), pack.manifest().files.len());
    }

    #[test]
    fn test_load_local_pack() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MANIFEST_FILE, MINIMAL_MANIFEST);
        write(dir.path(), "gitignore", "node_modules\n");
        write(dir.path(), "test/test.js", "// tests\n");

        let pack = TemplatePack::load(&TemplateSource::Local(dir.path().to_path_buf())).unwrap();
        assert_eq!(pack.entries().len(), 2);
        assert_eq!(pack.entries()[0].contents, "node_modules\n");
        assert_eq!(pack.entries()[0].file.destination(), ".gitignore");
        assert!(pack.readme_template().is_none());
    }

    #[test]
    fn test_load_local_pack_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MANIFEST_FILE, MINIMAL_MANIFEST);
        write(dir.path(), "gitignore", "node_modules\n");

        let err = TemplatePack::load(&TemplateSource::Local(dir.path().to_path_buf()))
            .unwrap_err()
            .to_string();
        assert!(err.contains("test.js"));
    }

    #[test]
    fn test_load_rejects_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            MANIFEST_FILE,
            "name: x\ndescription: x\nversion: 0.1.0\nfiles:\n  - source: a\n    dest: ../a\n",
        );
        write(dir.path(), "a", "");

        assert!(TemplatePack::load(&TemplateSource::Local(dir.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_load_rejects_generated_destinations() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            MANIFEST_FILE,
            "name: x\ndescription: x\nversion: 0.1.0\nfiles:\n  - source: package.json\n",
        );
        write(dir.path(), "package.json", "{}");

        assert!(TemplatePack::load(&TemplateSource::Local(dir.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_load_rejects_duplicate_destinations() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            MANIFEST_FILE,
            "name: x\ndescription: x\nversion: 0.1.0\nfiles:\n  - source: a\n  - source: b\n    dest: a\n",
        );
        write(dir.path(), "a", "");
        write(dir.path(), "b", "");

        assert!(TemplatePack::load(&TemplateSource::Local(dir.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_safe_relative_paths() {
        assert!(is_safe_relative_path(".gitignore"));
        assert!(is_safe_relative_path("test/test.js"));
        assert!(!is_safe_relative_path(""));
        assert!(!is_safe_relative_path("/etc/passwd"));
        assert!(!is_safe_relative_path("../outside"));
        assert!(!is_safe_relative_path("a/../../b"));
    }
}
