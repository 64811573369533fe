//! Writing generated project files to disk

use crate::render::GeneratedFileSet;
use crate::templates::source::is_safe_relative_path;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Create `target_dir` and write every generated file into it
///
/// The directory must not exist yet; its parent must. Returns the written
/// relative paths in order.
pub async fn write_project(target_dir: &Path, files: &GeneratedFileSet) -> Result<Vec<String>> {
    match fs::create_dir(target_dir).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            anyhow::bail!("Directory already exists: {}", target_dir.display());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to create directory: {}", target_dir.display())
            });
        }
    }

    let mut written = Vec::with_capacity(files.len());

    for (relative, content) in files.iter() {
        if !is_safe_relative_path(relative) {
            anyhow::bail!("Refusing to write outside the project: {}", relative);
        }

        let target_path = target_dir.join(relative);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        written.push(relative.to_string());
    }

    Ok(written)
}
