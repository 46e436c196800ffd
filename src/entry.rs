//! Records a pending changelog entry in each target package.

use chrono::Utc;
use log::*;
use nanoid::nanoid;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{config::Config, error::Result, fragment::Fragment};

const ENTRY_ID_LENGTH: usize = 8;

/// Write one fragment file per target package directory, creating the
/// pending folder when absent. All targets receive the same message and
/// authoring timestamp. Returns the created file paths.
pub async fn create_entry(
    config: &Config,
    message: &str,
    package_dirs: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let fragment = Fragment {
        message: message.to_string(),
        datetime: Utc::now(),
    };
    let content = serde_json::to_string_pretty(&fragment)?;

    let mut created: Vec<PathBuf> = vec![];

    for package_dir in package_dirs {
        let path = write_fragment(config, package_dir, &content).await?;
        debug!("created fragment {}", path.display());
        created.push(path);
    }

    Ok(created)
}

async fn write_fragment(
    config: &Config,
    package_dir: &Path,
    content: &str,
) -> Result<PathBuf> {
    let folder = package_dir.join(&config.fragment_folder);
    fs::create_dir_all(&folder).await?;

    // Timestamp prefix keeps filename order aligned with authoring order;
    // the nanoid suffix avoids collisions within the same second.
    let filename = format!(
        "{}-{}.json",
        Utc::now().format("%Y%m%d%H%M%S"),
        nanoid!(ENTRY_ID_LENGTH)
    );
    let path = folder.join(filename);

    fs::write(&path, content).await?;

    Ok(path)
}
