//! Fixed file and folder names used across a run, injectable for tests.

/// Default name of the pending-fragments folder inside a package directory.
pub const DEFAULT_FRAGMENT_FOLDER: &str = ".relog";

/// Default name of the merged changelog file.
pub const DEFAULT_CHANGELOG_NAME: &str = "CHANGELOG.md";

/// Default name of the package manifest file.
pub const DEFAULT_MANIFEST_NAME: &str = "package.json";

/// Names of the files relog reads and writes inside each package directory.
///
/// Injected into the store, generator, and entry functions rather than
/// hardwired so tests can redirect everything to temporary directories.
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder holding pending fragment files, relative to the package dir.
    pub fragment_folder: String,
    /// Merged changelog filename at the package dir root.
    pub changelog_name: String,
    /// Manifest filename holding the `version` and `workspaces` fields.
    pub manifest_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fragment_folder: DEFAULT_FRAGMENT_FOLDER.to_string(),
            changelog_name: DEFAULT_CHANGELOG_NAME.to_string(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}
