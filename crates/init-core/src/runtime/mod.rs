//! External tooling run after the project files are written
//!
//! This module provides:
//! - Availability checks for git and the package manager
//! - The ordered bootstrap sequence (`git init`, then install)

pub mod bootstrap;
pub mod check;

pub use bootstrap::{
    Bootstrap, BootstrapOptions, BootstrapStep, InstallMode, StepMode, StepOutcome,
};
pub use check::{check_tool, check_tools, RuntimeInfo};
