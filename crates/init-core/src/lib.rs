//! Init Core - library behind the `pelias-init` project scaffolder
//!
//! Turns a handful of answers (name, description, keywords, whether to set up
//! tests) into a ready-to-write set of project files, then writes them and
//! bootstraps version control and dependencies.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure core** - input normalization (`input`), the project
//!   manifest (`manifest`) and file rendering (`render`). No I/O.
//! - **Layer 2: Collaborators** - conventions (`config`), template packs and
//!   the project writer (`templates`), git/npm bootstrap (`runtime`), and the
//!   `ProductConfig` trait binaries implement
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use init_core::{generate_files, ProjectInput, TemplatePack, TemplateSource};
//!
//! let pack = TemplatePack::load(&TemplateSource::Embedded(init_core::templates::embedded::PELIAS))?;
//! let manifest = ProjectInput {
//!     name: "geocoder".into(),
//!     description: "Resolves addresses".into(),
//!     keywords_raw: "geo, search".into(),
//!     init_tests: "y".into(),
//! }
//! .normalize(pack.convention())?;
//! let files = generate_files(&manifest, &pack)?;
//! init_core::write_project(&parent.join(&manifest.short_name), &files).await?;
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod manifest;
pub mod product;
pub mod render;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Convention, KeywordPolicy, ReadmeStyle};
pub use error::ScaffoldError;
pub use input::{parse_keywords, parse_test_flag, validate_name, ProjectInput};
pub use manifest::{build_manifest, ProjectManifest, RepositoryLinks};
pub use product::ProductConfig;
pub use render::{generate_files, GeneratedFileSet, Renderer};
pub use runtime::{Bootstrap, BootstrapOptions, InstallMode};
pub use templates::{
    check_compatibility, select_optional_files, write_project, TemplatePack, TemplateSource,
};

#[cfg(feature = "tui")]
pub use tui::run;
