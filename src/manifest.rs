//! Package manifest parsing and in-place version updates.

use log::*;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{
    config::Config,
    error::{RelogError, Result},
    version,
};

/// Path to the manifest file for a package directory.
pub fn manifest_path(config: &Config, package_dir: &Path) -> PathBuf {
    package_dir.join(&config.manifest_name)
}

/// Load the manifest as a JSON document.
///
/// The document keeps its key order (serde_json is built with
/// `preserve_order`) so a later read-modify-write never reorders fields
/// the caller did not touch.
pub async fn read(config: &Config, package_dir: &Path) -> Result<Value> {
    let path = manifest_path(config, package_dir);
    let content = fs::read_to_string(&path).await?;
    let doc = serde_json::from_str(&content)?;
    Ok(doc)
}

/// Bump the manifest's `version` field to the next patch version and
/// rewrite the file in place, preserving all other fields and their
/// order. Returns the new version string.
pub async fn bump_version(config: &Config, package_dir: &Path) -> Result<String> {
    let path = manifest_path(config, package_dir);
    let mut doc = read(config, package_dir).await?;

    let current = doc
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            RelogError::invalid_manifest(format!(
                "missing version field in {}",
                path.display()
            ))
        })?;

    let next = version::next_patch_version(current)?;
    debug!(
        "bumping {} from {} to {}",
        path.display(),
        current,
        next
    );

    doc["version"] = json!(next);

    let formatted = serde_json::to_string_pretty(&doc)?;
    fs::write(&path, formatted).await?;

    Ok(next)
}

/// Read the monorepo root manifest's `workspaces` glob patterns.
///
/// Returns `None` when the manifest has no `workspaces` field, which is
/// how single-package repos look.
pub async fn workspace_patterns(
    config: &Config,
    package_dir: &Path,
) -> Result<Option<Vec<String>>> {
    let doc = read(config, package_dir).await?;

    let Some(value) = doc.get("workspaces") else {
        return Ok(None);
    };

    let patterns = value
        .as_array()
        .ok_or_else(|| {
            RelogError::invalid_manifest(format!(
                "workspaces field in {} is not an array",
                manifest_path(config, package_dir).display()
            ))
        })?
        .iter()
        .map(|entry| {
            entry.as_str().map(str::to_string).ok_or_else(|| {
                RelogError::invalid_manifest(
                    "workspaces entries must be strings".to_string(),
                )
            })
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(Some(patterns))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &Path, content: &str) {
        std::fs::write(dir.join("package.json"), content).unwrap();
    }

    #[tokio::test]
    async fn bump_version_rewrites_only_version_field() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        write_manifest(
            dir.path(),
            r#"{
  "name": "pkg-a",
  "version": "1.2.3",
  "private": true,
  "dependencies": {
    "left-pad": "^1.0.0"
  }
}"#,
        );

        let next = bump_version(&config, dir.path()).await.unwrap();
        assert_eq!(next, "1.2.4");

        let content =
            std::fs::read_to_string(dir.path().join("package.json")).unwrap();
        let doc: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(doc["version"], "1.2.4");
        assert_eq!(doc["name"], "pkg-a");
        assert_eq!(doc["private"], true);
        assert_eq!(doc["dependencies"]["left-pad"], "^1.0.0");

        // Key order survives the round trip.
        let name_idx = content.find("\"name\"").unwrap();
        let version_idx = content.find("\"version\"").unwrap();
        let private_idx = content.find("\"private\"").unwrap();
        assert!(name_idx < version_idx);
        assert!(version_idx < private_idx);
    }

    #[tokio::test]
    async fn bump_version_fails_without_version_field() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), r#"{ "name": "pkg-a" }"#);

        let err = bump_version(&config, dir.path()).await.unwrap_err();
        assert!(matches!(err, RelogError::InvalidManifest(_)));
    }

    #[tokio::test]
    async fn bump_version_fails_on_unparseable_version() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        write_manifest(
            dir.path(),
            r#"{ "name": "pkg-a", "version": "not-semver" }"#,
        );

        let err = bump_version(&config, dir.path()).await.unwrap_err();
        assert!(matches!(err, RelogError::InvalidVersion(_)));
    }

    #[tokio::test]
    async fn workspace_patterns_absent_for_single_repo() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), r#"{ "name": "solo", "version": "0.1.0" }"#);

        let patterns =
            workspace_patterns(&config, dir.path()).await.unwrap();
        assert!(patterns.is_none());
    }

    #[tokio::test]
    async fn workspace_patterns_returns_globs() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        write_manifest(
            dir.path(),
            r#"{ "name": "root", "version": "0.0.0", "workspaces": ["packages/*", "tools/cli"] }"#,
        );

        let patterns = workspace_patterns(&config, dir.path())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(patterns, vec!["packages/*", "tools/cli"]);
    }

    #[tokio::test]
    async fn workspace_patterns_rejects_non_array() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        write_manifest(
            dir.path(),
            r#"{ "name": "root", "version": "0.0.0", "workspaces": "packages/*" }"#,
        );

        let err =
            workspace_patterns(&config, dir.path()).await.unwrap_err();
        assert!(matches!(err, RelogError::InvalidManifest(_)));
    }
}
