//! Rendering of project files from a manifest
//!
//! Everything here is pure: the same manifest, convention and template pack
//! always produce byte-identical output.

mod package;

use crate::config::{Convention, ReadmeStyle};
use crate::error::ScaffoldError;
use crate::manifest::ProjectManifest;
use crate::templates::{select_optional_files, TemplatePack};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

pub const README_PATH: &str = "README.md";
pub const PACKAGE_MANIFEST_PATH: &str = "package.json";

/// README template used in rich mode when the template pack ships none
pub const DEFAULT_README_TEMPLATE: &str = include_str!("readme.md.j2");

/// Relative path to file content for a new project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFileSet {
    files: BTreeMap<String, String>,
}

impl GeneratedFileSet {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn insert(&mut self, path: impl Into<String>, content: String) {
        self.files.insert(path.into(), content);
    }
}

#[derive(Serialize)]
struct ReadmeContext<'a> {
    #[serde(flatten)]
    manifest: &'a ProjectManifest,

    /// `owner/repo` part of the repository URL, for badges
    repository_path: Option<String>,
}

/// Renders README.md and package.json for a convention
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    convention: &'a Convention,
    readme_template: Option<&'a str>,
}

impl<'a> Renderer<'a> {
    pub fn new(convention: &'a Convention) -> Self {
        Self {
            convention,
            readme_template: None,
        }
    }

    /// Use a custom README template in rich mode
    pub fn with_readme_template(mut self, template: Option<&'a str>) -> Self {
        self.readme_template = template;
        self
    }

    pub fn render_readme(&self, manifest: &ProjectManifest) -> Result<String, ScaffoldError> {
        match self.convention.readme {
            ReadmeStyle::Plain => Ok(plain_readme(manifest)),
            ReadmeStyle::Rich => {
                let template = self.readme_template.unwrap_or(DEFAULT_README_TEMPLATE);
                rich_readme(template, manifest)
            }
        }
    }

    pub fn render_package_manifest(
        &self,
        manifest: &ProjectManifest,
    ) -> Result<String, ScaffoldError> {
        let package = package::PackageJson::new(manifest, self.convention);
        let mut json = serde_json::to_string_pretty(&package)?;
        json.push('\n');
        Ok(json)
    }
}

fn plain_readme(manifest: &ProjectManifest) -> String {
    if manifest.description.is_empty() {
        format!("# {}\n", manifest.name)
    } else {
        format!("# {}\n\n{}\n", manifest.name, manifest.description)
    }
}

fn repository_path(manifest: &ProjectManifest) -> Option<String> {
    let links = manifest.links.as_ref()?;
    let url = Url::parse(&links.repository_url).ok()?;
    let path = url.path().trim_matches('/');
    (!path.is_empty()).then(|| path.trim_end_matches(".git").to_string())
}

fn rich_readme(template: &str, manifest: &ProjectManifest) -> Result<String, ScaffoldError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);

    let context = ReadmeContext {
        manifest,
        repository_path: repository_path(manifest),
    };
    Ok(env.render_str(template, context)?)
}

/// Render every file of a new project: README, package.json and the selected template files
pub fn generate_files(
    manifest: &ProjectManifest,
    pack: &TemplatePack,
) -> Result<GeneratedFileSet, ScaffoldError> {
    let renderer = pack.renderer();
    let mut files = GeneratedFileSet::default();

    files.insert(README_PATH, renderer.render_readme(manifest)?);
    files.insert(
        PACKAGE_MANIFEST_PATH,
        renderer.render_package_manifest(manifest)?,
    );

    let selected = select_optional_files(manifest, &pack.manifest().files);
    for entry in pack.entries() {
        let dest = entry.file.destination();
        if selected.contains(dest) {
            files.insert(dest, entry.contents.clone());
        }
    }

    Ok(files)
}
