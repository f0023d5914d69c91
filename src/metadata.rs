//! Package metadata lookup.
//!
//! The package name and version come from `cargo metadata`. Only the first
//! listed package is used.

use serde::Deserialize;
use std::path::PathBuf;
use std::process::Command;

use crate::boundary::BoundaryWarning;
use crate::error::{ChangelogError, Result};

/// Name and version of the package being released
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
}

impl PackageInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        PackageInfo {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Report a version that does not parse as semver. Versions are never rejected.
    pub fn semver_warning(&self) -> Option<BoundaryWarning> {
        semver::Version::parse(&self.version)
            .err()
            .map(|e| BoundaryWarning::NonSemverVersion {
                version: self.version.clone(),
                reason: e.to_string(),
            })
    }
}

/// Source of package name and version
pub trait PackageMetadataSource {
    fn package(&self) -> Result<PackageInfo>;
}

#[derive(Deserialize)]
struct CargoMetadataOutput {
    packages: Vec<PackageInfo>,
}

/// Parse `cargo metadata --format-version=1` JSON and return the first package.
pub fn parse_cargo_metadata(json: &str) -> Result<PackageInfo> {
    let output: CargoMetadataOutput = serde_json::from_str(json)?;

    output
        .packages
        .into_iter()
        .next()
        .ok_or_else(|| ChangelogError::metadata("cargo metadata listed no packages"))
}

/// Runs `cargo metadata --no-deps --format-version=1` in a manifest directory
#[derive(Debug, Clone)]
pub struct CargoMetadata {
    manifest_dir: PathBuf,
}

impl CargoMetadata {
    pub fn new(manifest_dir: impl Into<PathBuf>) -> Self {
        CargoMetadata {
            manifest_dir: manifest_dir.into(),
        }
    }
}

impl Default for CargoMetadata {
    fn default() -> Self {
        Self::new(".")
    }
}

impl PackageMetadataSource for CargoMetadata {
    fn package(&self) -> Result<PackageInfo> {
        let output = Command::new("cargo")
            .args(["metadata", "--no-deps", "--format-version=1"])
            .current_dir(&self.manifest_dir)
            .output()
            .map_err(|e| ChangelogError::command(format!("Failed to run cargo metadata: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChangelogError::command(format!(
                "cargo metadata failed with exit code {}\nStderr: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_cargo_metadata(&stdout)
    }
}

/// Metadata fixed up front, for callers that already know the package
#[derive(Debug, Clone)]
pub struct StaticMetadata(pub PackageInfo);

impl PackageMetadataSource for StaticMetadata {
    fn package(&self) -> Result<PackageInfo> {
        Ok(self.0.clone())
    }
}
