//! Project manifest derived from normalized user input

use crate::config::Convention;
use serde::Serialize;

/// Links to the hosted repository, derived from the project name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryLinks {
    pub repository_url: String,
    pub bugs_url: String,
    pub homepage_url: String,
}

impl RepositoryLinks {
    fn from_repository(repository_url: String) -> Self {
        Self {
            bugs_url: format!("{}/issues", repository_url),
            homepage_url: format!("{}#readme", repository_url),
            repository_url,
        }
    }
}

/// Everything needed to render a new project's files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectManifest {
    /// Package name, namespaced when the convention asks for it
    pub name: String,

    /// Validated name without the namespace prefix; names the project directory
    pub short_name: String,

    pub description: String,
    pub keywords: Vec<String>,
    pub include_tests: bool,
    pub links: Option<RepositoryLinks>,
}

/// Assemble a manifest from already-validated pieces
pub fn build_manifest(
    name: &str,
    description: &str,
    keywords: Vec<String>,
    include_tests: bool,
    convention: &Convention,
) -> ProjectManifest {
    let short_name = convention.short_name(name);
    let links = convention
        .repository
        .as_ref()
        .map(|template| RepositoryLinks::from_repository(template.apply(short_name)));

    ProjectManifest {
        name: convention.package_name(name),
        short_name: short_name.to_string(),
        description: description.to_string(),
        keywords,
        include_tests,
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepositoryTemplate;

    #[test]
    fn test_build_manifest_without_convention() {
        let manifest = build_manifest(
            "geocoder",
            "Resolves addresses",
            vec!["geo".to_string()],
            false,
            &Convention::default(),
        );

        assert_eq!(manifest.name, "geocoder");
        assert_eq!(manifest.short_name, "geocoder");
        assert_eq!(manifest.description, "Resolves addresses");
        assert_eq!(manifest.keywords, vec!["geo"]);
        assert!(!manifest.include_tests);
        assert!(manifest.links.is_none());
    }

    #[test]
    fn test_build_manifest_with_namespace_and_links() {
        let convention = Convention {
            namespace: Some("pelias-".to_string()),
            repository: Some(RepositoryTemplate::new("https://github.com/pelias/{name}").unwrap()),
            ..Convention::default()
        };

        let manifest = build_manifest("geocoder", "", Vec::new(), true, &convention);

        assert_eq!(manifest.name, "pelias-geocoder");
        assert_eq!(manifest.short_name, "geocoder");
        let links = manifest.links.unwrap();
        assert_eq!(links.repository_url, "https://github.com/pelias/geocoder");
        assert_eq!(links.bugs_url, "https://github.com/pelias/geocoder/issues");
        assert_eq!(links.homepage_url, "https://github.com/pelias/geocoder#readme");
    }

    #[test]
    fn test_prefixed_input_matches_short_input() {
        let convention = Convention {
            namespace: Some("pelias-".to_string()),
            repository: Some(RepositoryTemplate::new("https://github.com/pelias/{name}").unwrap()),
            ..Convention::default()
        };

        let short = build_manifest("api", "", Vec::new(), false, &convention);
        let prefixed = build_manifest("pelias-api", "", Vec::new(), false, &convention);

        assert_eq!(prefixed.name, "pelias-api");
        assert_eq!(prefixed.short_name, "api");
        assert_eq!(prefixed, short);
        assert_eq!(
            prefixed.links.unwrap().repository_url,
            "https://github.com/pelias/api"
        );
    }
}
