//! Pending changelog fragments and the per-package store that owns them.

use chrono::{DateTime, Utc};
use log::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{
    config::Config,
    error::{RelogError, Result},
};

/// One pending change record, authored per code change and consumed in
/// bulk during generation. Serialized as a two-field JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// Free-text description of the change.
    pub message: String,
    /// When the fragment was authored. Accepts any RFC 3339 timestamp.
    pub datetime: DateTime<Utc>,
}

/// Lists, parses, and deletes the pending-fragments folder of a single
/// package directory. No state is shared across packages.
pub struct FragmentStore<'a> {
    config: &'a Config,
}

impl<'a> FragmentStore<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Path to the pending folder for a package directory.
    pub fn folder(&self, package_dir: &Path) -> PathBuf {
        package_dir.join(&self.config.fragment_folder)
    }

    /// True iff the pending-fragments folder exists for this package.
    pub async fn has_pending(&self, package_dir: &Path) -> bool {
        fs::try_exists(self.folder(package_dir))
            .await
            .unwrap_or(false)
    }

    /// Parse every fragment file in the pending folder.
    ///
    /// Only entries with a `.json` extension count as fragments. Entries
    /// are returned in filename order so discovery order is deterministic;
    /// the generator's datetime sort is stable on top of that. A file that
    /// fails to parse aborts this package's listing with
    /// [`RelogError::MalformedFragment`].
    pub async fn list_fragments(
        &self,
        package_dir: &Path,
    ) -> Result<Vec<Fragment>> {
        let folder = self.folder(package_dir);
        let mut entries = fs::read_dir(&folder).await?;
        let mut paths: Vec<PathBuf> = vec![];

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }

        paths.sort();

        let mut fragments: Vec<Fragment> = vec![];

        for path in paths {
            let content = fs::read_to_string(&path).await?;
            let fragment = serde_json::from_str(&content).map_err(|e| {
                RelogError::malformed_fragment(path.clone(), e)
            })?;
            fragments.push(fragment);
        }

        debug!(
            "found {} pending fragments in {}",
            fragments.len(),
            folder.display()
        );

        Ok(fragments)
    }

    /// Delete the pending folder and all its contents. A folder that is
    /// already absent is a no-op, not an error.
    pub async fn consume(&self, package_dir: &Path) -> Result<()> {
        let folder = self.folder(package_dir);
        match fs::remove_dir_all(&folder).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
