//! Project conventions (namespacing, repository linkage, package defaults)

pub mod convention;

pub use convention::{
    Convention, KeywordPolicy, PackageDefaults, ReadmeStyle, RepositoryTemplate, TestDefaults,
};
