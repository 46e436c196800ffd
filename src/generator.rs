//! Orchestrates changelog generation across many package directories.
//!
//! Each package runs its own pipeline: check for pending fragments, load
//! and sort them, bump the manifest version, prepend the rendered block to
//! the changelog, then delete the consumed folder. Packages are fanned out
//! as independent futures and joined all-settled, so one package's failure
//! never aborts its siblings.

use futures_util::future::join_all;
use log::*;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{
    changelog::{Block, prepend},
    config::Config,
    error::{RelogError, Result},
    fragment::FragmentStore,
    manifest,
};

/// Terminal state of one package's pipeline.
#[derive(Debug)]
pub enum PackageStatus {
    /// No pending fragment folder (or no fragment files): nothing to do.
    Skipped,
    /// Fragments were merged, the version bumped, and the folder consumed.
    Updated { changelog: PathBuf, version: String },
    /// The pipeline failed after pending fragments were found.
    Failed(RelogError),
}

/// Outcome of one package directory in a generation batch.
#[derive(Debug)]
pub struct PackageReport {
    pub package_dir: PathBuf,
    pub status: PackageStatus,
}

impl PackageReport {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, PackageStatus::Failed(_))
    }
}

/// Paths of every changelog file updated in a batch, in report order.
pub fn updated_changelogs(reports: &[PackageReport]) -> Vec<PathBuf> {
    reports
        .iter()
        .filter_map(|report| match &report.status {
            PackageStatus::Updated { changelog, .. } => {
                Some(changelog.clone())
            }
            _ => None,
        })
        .collect()
}

/// Runs the per-package generation pipeline over a batch of directories.
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate one changelog block per package directory with pending
    /// fragments.
    ///
    /// Every directory gets a report; directories without pending
    /// fragments come back as [`PackageStatus::Skipped`] with nothing
    /// touched on disk. Failures are captured per package rather than
    /// returned, so callers can act on partial success.
    pub async fn generate_changelog(
        &self,
        package_dirs: &[PathBuf],
    ) -> Vec<PackageReport> {
        join_all(
            package_dirs
                .iter()
                .map(|package_dir| self.process_package(package_dir)),
        )
        .await
    }

    async fn process_package(&self, package_dir: &Path) -> PackageReport {
        let status = match self.run_pipeline(package_dir).await {
            Ok(Some((changelog, version))) => {
                info!(
                    "updated {} to version {}",
                    changelog.display(),
                    version
                );
                PackageStatus::Updated { changelog, version }
            }
            Ok(None) => {
                debug!(
                    "no pending fragments in {}: skipping",
                    package_dir.display()
                );
                PackageStatus::Skipped
            }
            Err(e) => {
                warn!("failed to process {}: {}", package_dir.display(), e);
                PackageStatus::Failed(e)
            }
        };

        PackageReport {
            package_dir: package_dir.to_path_buf(),
            status,
        }
    }

    /// One package's pipeline. Returns `None` when there is nothing to
    /// consume. Cleanup only runs after the changelog write succeeds, so
    /// a failed write never loses fragments.
    async fn run_pipeline(
        &self,
        package_dir: &Path,
    ) -> Result<Option<(PathBuf, String)>> {
        let store = FragmentStore::new(&self.config);

        if !store.has_pending(package_dir).await {
            return Ok(None);
        }

        let mut fragments = store.list_fragments(package_dir).await?;
        if fragments.is_empty() {
            return Ok(None);
        }

        // Stable sort: fragments with equal datetimes keep their filename
        // discovery order.
        fragments.sort_by_key(|fragment| fragment.datetime);

        let version = manifest::bump_version(&self.config, package_dir).await?;

        let block = match Block::from_fragments(&version, &fragments) {
            Some(block) => block,
            None => return Ok(None),
        };

        let changelog_path = package_dir.join(&self.config.changelog_name);
        let existing = match fs::read_to_string(&changelog_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        let content = prepend(&existing, &block.render());
        fs::write(&changelog_path, content).await?;

        store.consume(package_dir).await?;

        Ok(Some((changelog_path, version)))
    }
}
