//! Charm-style CLI prompts using cliclack

use crate::input::{parse_test_flag, validate_name, ProjectInput};
use crate::manifest::ProjectManifest;
use crate::product::ProductConfig;
use crate::render::{generate_files, GeneratedFileSet};
use crate::runtime::{check_tools, Bootstrap, BootstrapOptions, InstallMode, StepOutcome};
use crate::templates::{version, write_project, TemplatePack, TemplateSource};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local template pack directory to use instead of the built-in one
    pub template_dir: Option<PathBuf>,

    pub name: Option<String>,
    pub description: Option<String>,

    /// Comma-separated keywords
    pub keywords: Option<String>,

    /// `y` or `n`
    pub tests: Option<String>,

    /// Directory the project directory is created in (defaults to cwd)
    pub directory: Option<PathBuf>,

    /// Skip `git init`
    pub skip_git: bool,

    pub install: InstallMode,

    /// Render files and list them without writing anything
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Load the template pack
    let pack = load_pack(config, &args, cli_version)?;

    // Step 2: Collect and normalize project metadata
    let input = collect_input(&args)?;
    let manifest = match input.normalize(pack.convention()) {
        Ok(manifest) => manifest,
        Err(e) => {
            cliclack::log::error(e.to_string())?;
            return Err(e.into());
        }
    };

    // Step 3: Resolve the project directory
    let project_dir = select_directory(&args, &manifest)?;

    // Step 4: Render all files before touching the file system
    let files = generate_files(&manifest, &pack)?;

    if args.dry_run {
        print_dry_run(&project_dir, &files)?;
        cliclack::outro("Dry run complete, nothing was written.")?;
        return Ok(());
    }

    // Step 5: Write the project
    create_project(&project_dir, &files).await?;

    // Step 6: git init, then dependency install
    let installed = run_bootstrap(config, &args, &project_dir).await?;

    // Step 7: Show next steps
    print_next_steps(config, &project_dir, &manifest, installed)?;

    Ok(())
}

fn load_pack<C: ProductConfig>(
    config: &C,
    args: &CreateArgs,
    cli_version: &str,
) -> Result<TemplatePack> {
    let source = TemplateSource::resolve(config, args.template_dir.clone());
    cliclack::log::info(format!("Using {}", source.describe()))?;

    let pack = TemplatePack::load(&source)?;

    if let Some(warning) = version::check_compatibility(
        config.name(),
        cli_version,
        &pack.manifest().version,
        config.upgrade_command(),
    ) {
        cliclack::log::warning(format!(
            "Version warning: {}",
            warning.lines().next().unwrap_or(&warning)
        ))?;
    }

    Ok(pack)
}

fn collect_input(args: &CreateArgs) -> Result<ProjectInput> {
    let name = match &args.name {
        Some(name) => {
            cliclack::log::info(format!("Project name: {}", name))?;
            name.clone()
        }
        None if args.yes => anyhow::bail!("--name is required in non-interactive mode"),
        None => cliclack::input("Project name")
            .placeholder("geocoder")
            .validate(|input: &String| validate_name(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact()?,
    };

    let description = match &args.description {
        Some(description) => description.clone(),
        None if args.yes => String::new(),
        None => cliclack::input("Description")
            .placeholder("A brief, one sentence description")
            .required(false)
            .interact()?,
    };

    let keywords_raw = match &args.keywords {
        Some(keywords) => keywords.clone(),
        None if args.yes => String::new(),
        None => cliclack::input("Keywords")
            .placeholder("Comma-separated list of keywords")
            .required(false)
            .interact()?,
    };

    let init_tests = match &args.tests {
        Some(tests) => tests.clone(),
        None if args.yes => "y".to_string(),
        None => cliclack::input("Initialize unit tests? [yn]")
            .default_input("y")
            .validate(|input: &String| {
                parse_test_flag(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact()?,
    };

    Ok(ProjectInput {
        name,
        description,
        keywords_raw,
        init_tests,
    })
}

fn select_directory(args: &CreateArgs, manifest: &ProjectManifest) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let parent = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !parent.is_dir() {
        anyhow::bail!("Parent directory does not exist: {}", parent.display());
    }

    let path = parent.join(&manifest.short_name);
    if path.exists() {
        anyhow::bail!(
            "{} already exists. Choose another name or directory.",
            path.display()
        );
    }

    cliclack::log::info(format!("Project directory: {}", path.display()))?;
    Ok(path)
}

fn print_dry_run(project_dir: &Path, files: &GeneratedFileSet) -> Result<()> {
    let listing = files
        .iter()
        .map(|(path, content)| format!("{} ({} bytes)", path, content.len()))
        .collect::<Vec<_>>()
        .join("\n");
    cliclack::log::info(format!(
        "Would create {} files in {}:\n{}",
        files.len(),
        project_dir.display(),
        listing
    ))?;
    Ok(())
}

async fn create_project(project_dir: &Path, files: &GeneratedFileSet) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match write_project(project_dir, files).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.error("Failed to create project");
            Err(e)
        }
    }
}

/// Returns whether dependency installation was started
async fn run_bootstrap<C: ProductConfig>(
    config: &C,
    args: &CreateArgs,
    project_dir: &Path,
) -> Result<bool> {
    let options = BootstrapOptions {
        git: !args.skip_git,
        install: args.install,
        package_manager: config.package_manager(),
    };
    let bootstrap = Bootstrap::new(&options);

    if bootstrap.is_empty() {
        cliclack::log::info("Skipping git init and dependency installation")?;
        return Ok(false);
    }

    let tools = check_tools(&bootstrap.programs());
    let missing: Vec<&str> = tools.iter().filter(|t| !t.available).map(|t| t.name).collect();
    let (bootstrap, dropped) = bootstrap.without_missing(&missing);
    if !dropped.is_empty() {
        cliclack::log::warning(format!(
            "Not installed: {}. Skipping: {}",
            missing.join(", "),
            dropped
                .iter()
                .map(|s| s.command_line())
                .collect::<Vec<_>>()
                .join(", then ")
        ))?;
    }
    if bootstrap.is_empty() {
        return Ok(false);
    }

    let summaries: Vec<String> = tools
        .iter()
        .filter(|t| t.available)
        .map(|t| t.summary())
        .collect();
    cliclack::log::info(format!("Detected tools: {}", summaries.join(", ")))?;

    match bootstrap.run(project_dir).await {
        Ok(outcomes) => {
            for (name, outcome) in outcomes {
                match outcome {
                    StepOutcome::Completed => cliclack::log::success(format!("{} done", name))?,
                    StepOutcome::Detached => {
                        cliclack::log::success(format!("{} started in the background", name))?
                    }
                }
            }
        }
        Err(e) => {
            cliclack::log::error(format!("{:#}", e))?;
            anyhow::bail!("Project files were written, but bootstrapping stopped.");
        }
    }

    let installed = bootstrap
        .steps()
        .iter()
        .any(|step| step.program == options.package_manager);
    Ok(installed)
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    manifest: &ProjectManifest,
    installed: bool,
) -> Result<()> {
    let steps = config.next_steps(project_dir, manifest, installed);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
