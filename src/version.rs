//! Patch-only version arithmetic.

use semver::Version as SemVer;

use crate::error::{RelogError, Result};

/// Compute `MAJOR.MINOR.(PATCH+1)` for a core semver triple.
///
/// Only the plain three-part form is supported: pre-release and build
/// metadata are rejected with [`RelogError::InvalidVersion`], as is
/// anything semver itself cannot parse. The patch component never carries
/// into minor or major.
pub fn next_patch_version(current: &str) -> Result<String> {
    let parsed = SemVer::parse(current.trim())
        .map_err(|_| RelogError::InvalidVersion(current.to_string()))?;

    if !parsed.pre.is_empty() || !parsed.build.is_empty() {
        return Err(RelogError::InvalidVersion(current.to_string()));
    }

    Ok(format!(
        "{}.{}.{}",
        parsed.major,
        parsed.minor,
        parsed.patch + 1
    ))
}
