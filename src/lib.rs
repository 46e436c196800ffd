//! relog aggregates per-change JSON changelog fragments into a dated,
//! versioned block at the top of each package's changelog, bumps the
//! package's patch version, and deletes the consumed fragments. Works on
//! single-package repos and on monorepos whose root manifest declares
//! `workspaces` globs.

pub mod changelog;
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod fragment;
pub mod generator;
pub mod manifest;
pub mod version;
pub mod workspaces;

pub use config::Config;
pub use error::{RelogError, Result};
pub use generator::{
    Generator, PackageReport, PackageStatus, updated_changelogs,
};
