//! Post-scaffold bootstrap: version control first, then dependency installation
//!
//! Steps run strictly in order. A step starts only after the previous one has
//! exited successfully, because installing the precommit hook needs the git
//! repository to exist. The first failure stops the sequence.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for `git init`
const GIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for a foreground dependency install
const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// How dependency installation runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InstallMode {
    /// Wait for the install and stream its output
    Foreground,
    /// Start the install detached and return immediately
    #[default]
    Background,
    /// Do not install
    Skip,
}

/// Which bootstrap steps to run
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub git: bool,
    pub install: InstallMode,
    pub package_manager: &'static str,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            git: true,
            install: InstallMode::default(),
            package_manager: "npm",
        }
    }
}

/// How a single step is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Run to completion; `stream` echoes output to the terminal
    Wait { timeout: Duration, stream: bool },
    /// Spawn with all stdio discarded and do not wait
    Detach,
}

/// One external command in the bootstrap sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapStep {
    pub name: &'static str,
    pub program: &'static str,
    pub args: Vec<&'static str>,
    pub mode: StepMode,
}

impl BootstrapStep {
    pub fn command_line(&self) -> String {
        std::iter::once(self.program)
            .chain(self.args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of a step that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Detached,
}

/// Ordered list of bootstrap steps
#[derive(Debug, Clone)]
pub struct Bootstrap {
    steps: Vec<BootstrapStep>,
}

impl Bootstrap {
    pub fn new(options: &BootstrapOptions) -> Self {
        let mut steps = Vec::new();

        if options.git {
            steps.push(BootstrapStep {
                name: "git init",
                program: "git",
                args: vec!["init"],
                mode: StepMode::Wait {
                    timeout: GIT_TIMEOUT,
                    stream: false,
                },
            });
        }

        let install_mode = match options.install {
            InstallMode::Foreground => Some(StepMode::Wait {
                timeout: INSTALL_TIMEOUT,
                stream: true,
            }),
            InstallMode::Background => Some(StepMode::Detach),
            InstallMode::Skip => None,
        };
        if let Some(mode) = install_mode {
            steps.push(BootstrapStep {
                name: "install",
                program: options.package_manager,
                args: vec!["install"],
                mode,
            });
        }

        Self { steps }
    }

    pub fn from_steps(steps: Vec<BootstrapStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[BootstrapStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Distinct programs the steps invoke, in order
    pub fn programs(&self) -> Vec<&'static str> {
        let mut programs: Vec<&'static str> = Vec::new();
        for step in &self.steps {
            if !programs.contains(&step.program) {
                programs.push(step.program);
            }
        }
        programs
    }

    /// Drop the first step whose program is in `missing`, and every step after it
    ///
    /// Returns the runnable steps and the dropped ones.
    pub fn without_missing(&self, missing: &[&str]) -> (Bootstrap, Vec<BootstrapStep>) {
        let cut = self
            .steps
            .iter()
            .position(|step| missing.contains(&step.program))
            .unwrap_or(self.steps.len());
        let (runnable, dropped) = self.steps.split_at(cut);
        (Bootstrap::from_steps(runnable.to_vec()), dropped.to_vec())
    }

    /// Run every step inside `dir`, stopping at the first failure
    pub async fn run(&self, dir: &Path) -> Result<Vec<(&'static str, StepOutcome)>> {
        let mut outcomes = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let outcome = run_step(step, dir)
                .await
                .with_context(|| format!("Bootstrap step '{}' failed", step.name))?;
            outcomes.push((step.name, outcome));
        }
        Ok(outcomes)
    }
}

async fn run_step(step: &BootstrapStep, dir: &Path) -> Result<StepOutcome> {
    match step.mode {
        StepMode::Detach => {
            std::process::Command::new(step.program)
                .args(&step.args)
                .current_dir(dir)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .with_context(|| format!("Failed to start: {}", step.command_line()))?;
            Ok(StepOutcome::Detached)
        }
        StepMode::Wait {
            timeout: limit,
            stream: false,
        } => {
            let output = TokioCommand::new(step.program)
                .args(&step.args)
                .current_dir(dir)
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output();

            let output = timeout(limit, output)
                .await
                .map_err(|_| {
                    anyhow::anyhow!(
                        "'{}' timed out after {} seconds",
                        step.command_line(),
                        limit.as_secs()
                    )
                })?
                .with_context(|| format!("Failed to start: {}", step.command_line()))?;

            if !output.status.success() {
                anyhow::bail!(
                    "'{}' exited with code {}: {}",
                    step.command_line(),
                    output.status.code().unwrap_or(-1),
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            Ok(StepOutcome::Completed)
        }
        StepMode::Wait {
            timeout: limit,
            stream: true,
        } => run_streaming(step, dir, limit).await,
    }
}

/// Run a step while echoing its output, indented
async fn run_streaming(step: &BootstrapStep, dir: &Path, limit: Duration) -> Result<StepOutcome> {
    let cmd = step.command_line();
    println!();
    println!("{} {}", "Running:".dimmed(), cmd.yellow());
    println!();

    let mut child = TokioCommand::new(step.program)
        .args(&step.args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("Failed to start: {}", cmd))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow::anyhow!("Failed to capture stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow::anyhow!("Failed to capture stderr"))?;

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    let output_task = async {
        let mut stdout_open = true;
        let mut stderr_open = true;
        while stdout_open || stderr_open {
            tokio::select! {
                line = stdout_reader.next_line(), if stdout_open => match line {
                    Ok(Some(line)) => println!("  {}", line),
                    Ok(None) => stdout_open = false,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stdout:".red(), e);
                        stdout_open = false;
                    }
                },
                line = stderr_reader.next_line(), if stderr_open => match line {
                    Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                    Ok(None) => stderr_open = false,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stderr:".red(), e);
                        stderr_open = false;
                    }
                },
            }
        }
        child.wait().await
    };

    let status = match timeout(limit, output_task).await {
        Ok(status) => status.with_context(|| format!("Failed to wait for: {}", cmd))?,
        Err(_) => {
            println!();
            anyhow::bail!(
                "'{}' timed out after {} seconds.\n\
                 Run it manually inside the project directory.",
                cmd,
                limit.as_secs()
            );
        }
    };

    println!();
    if !status.success() {
        anyhow::bail!(
            "'{}' exited with code {}",
            cmd,
            status.code().unwrap_or(-1)
        );
    }
    Ok(StepOutcome::Completed)
}
