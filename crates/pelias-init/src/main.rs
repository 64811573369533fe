//! pelias-init - Project scaffolding for Pelias modules

use anyhow::Result;
use clap::{Parser, Subcommand};
use init_core::templates::{embedded, EmbeddedFile};
use init_core::tui::CreateArgs;
use init_core::{InstallMode, ProductConfig, ProjectManifest};
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pelias product configuration
#[derive(Clone)]
pub struct PeliasConfig;

impl ProductConfig for PeliasConfig {
    fn name(&self) -> &'static str {
        "pelias-init"
    }

    fn display_name(&self) -> &'static str {
        "Pelias"
    }

    fn embedded_templates(&self) -> &'static [EmbeddedFile] {
        embedded::PELIAS
    }

    fn template_dir_env(&self) -> &'static str {
        "PELIAS_INIT_TEMPLATE_DIR"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install pelias-init --force"
    }

    fn next_steps(&self, dir: &Path, manifest: &ProjectManifest, installed: bool) -> Vec<String> {
        let mut steps = vec![format!("cd {}", dir.display())];

        if !installed {
            steps.push(format!("{} install", self.package_manager()));
        }

        steps.push("Write your module in index.js".to_string());

        if manifest.include_tests {
            steps.push("npm test".to_string());
        }

        if let Some(links) = &manifest.links {
            steps.push(format!("Push to {}", links.repository_url));
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "pelias-init")]
#[command(about = "CLI for scaffolding new Pelias modules")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Pelias module
    Create(CliCreateArgs),
    /// Check a template pack directory for missing or unlisted files (for development use)
    CheckTemplates(CheckTemplatesArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project name (characters: a-z A-Z 0-9 . _ -)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Brief, one sentence description
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated list of keywords
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Initialize unit tests (y or n)
    #[arg(short, long)]
    pub tests: Option<String>,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Local template pack directory to use instead of the built-in one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Do not run git init
    #[arg(long = "skip-git")]
    pub skip_git: bool,

    /// Do not install dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Wait for dependency installation instead of running it in the background
    #[arg(long, conflicts_with = "skip_install")]
    pub wait: bool,

    /// Show the files that would be created without writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        let install = if args.skip_install {
            InstallMode::Skip
        } else if args.wait {
            InstallMode::Foreground
        } else {
            InstallMode::Background
        };

        CreateArgs {
            template_dir: args.template_dir,
            name: args.name,
            description: args.description,
            keywords: args.keywords,
            tests: args.tests,
            directory: args.directory,
            skip_git: args.skip_git,
            install,
            dry_run: args.dry_run,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CheckTemplatesArgs {
    /// Template pack directory to check
    #[arg(long = "template-dir", default_value = "templates/pelias")]
    pub template_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = PeliasConfig;

    match args.command {
        Some(Command::Create(create_args)) => {
            let result = init_core::run(&config, create_args.into(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::CheckTemplates(check_args)) => {
            init_core::templates::check_templates(&check_args.template_dir)
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = init_core::run(&config, CreateArgs::default(), CLI_VERSION).await;

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
