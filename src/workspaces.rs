//! Resolves a monorepo root's workspace globs into package directories.

use log::*;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{config::Config, error::Result, manifest};

/// Resolve the target package directories for a repository root.
///
/// A root manifest with a `workspaces` field yields its resolved member
/// directories; a plain single-package manifest yields the root itself.
/// Only directories that actually contain a manifest file count as
/// members. Results are sorted for deterministic batches.
pub async fn resolve_targets(
    config: &Config,
    root: &Path,
) -> Result<Vec<PathBuf>> {
    let Some(patterns) = manifest::workspace_patterns(config, root).await?
    else {
        return Ok(vec![root.to_path_buf()]);
    };

    let mut targets: Vec<PathBuf> = vec![];

    for pattern in patterns {
        let full_pattern = root.join(&pattern);
        let paths = glob::glob(&full_pattern.to_string_lossy())?;

        for path in paths {
            let path = path?;
            if is_package_dir(config, &path).await {
                targets.push(path);
            } else {
                debug!(
                    "ignoring workspace match without manifest: {}",
                    path.display()
                );
            }
        }
    }

    targets.sort();
    targets.dedup();

    Ok(targets)
}

async fn is_package_dir(config: &Config, path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }

    fs::try_exists(path.join(&config.manifest_name))
        .await
        .unwrap_or(false)
}
