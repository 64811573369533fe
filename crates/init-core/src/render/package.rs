//! Typed package.json layout
//!
//! Field order here is the key order of the generated file.

use crate::config::Convention;
use crate::manifest::ProjectManifest;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct Repository<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct Bugs<'a> {
    url: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PackageJson<'a> {
    name: &'a str,
    version: &'a str,
    description: &'a str,
    main: &'a str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    scripts: BTreeMap<&'a str, &'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<Repository<'a>>,
    keywords: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bugs: Option<Bugs<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<&'a str>,
    #[serde(rename = "pre-commit", skip_serializing_if = "Vec::is_empty")]
    pre_commit: Vec<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    dependencies: BTreeMap<&'a str, &'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    dev_dependencies: BTreeMap<&'a str, &'a str>,
}

fn borrow_map(map: &BTreeMap<String, String>) -> BTreeMap<&str, &str> {
    map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

impl<'a> PackageJson<'a> {
    pub(crate) fn new(manifest: &'a ProjectManifest, convention: &'a Convention) -> Self {
        let package = &convention.package;

        let mut scripts = borrow_map(&package.scripts);
        let mut pre_commit: Vec<&str> = package.pre_commit.iter().map(String::as_str).collect();
        let mut dev_dependencies = borrow_map(&package.dev_dependencies);

        if manifest.include_tests {
            scripts.insert("test", convention.tests.script.as_str());
            if !pre_commit.contains(&"test") {
                pre_commit.push("test");
            }
            dev_dependencies.extend(borrow_map(&convention.tests.dev_dependencies));
        }

        let links = manifest.links.as_ref();

        Self {
            name: &manifest.name,
            version: &package.version,
            description: &manifest.description,
            main: &package.main,
            scripts,
            repository: links.map(|l| Repository {
                kind: "git",
                url: &l.repository_url,
            }),
            keywords: &manifest.keywords,
            author: package.author.as_deref(),
            license: package.license.as_deref(),
            bugs: links.map(|l| Bugs { url: &l.bugs_url }),
            homepage: links.map(|l| l.homepage_url.as_str()),
            pre_commit,
            dependencies: borrow_map(&package.dependencies),
            dev_dependencies,
        }
    }
}
