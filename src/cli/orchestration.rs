//! Main workflow orchestration logic
//!
//! Ties the collaborators together: package metadata, commit history, the
//! clock and the changelog file. Kept apart from `main.rs` so the whole run
//! can be driven programmatically with substitute sources.

use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::changelog::{ChangelogFile, EntryBuilder};
use crate::clock::DateSource;
use crate::config::{Config, Maintainer};
use crate::domain::{Category, EntryContext, LogEntry};
use crate::error::Result;
use crate::git::CommitHistorySource;
use crate::metadata::{PackageInfo, PackageMetadataSource};

/// Arguments for the changelog workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowArgs {
    /// Version to release; skips the metadata lookup for the version
    pub release: Option<String>,

    /// Changelog path overriding the configured one
    pub changelog_path: Option<PathBuf>,

    /// Render the entry without touching the changelog
    pub dry_run: bool,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub package: PackageInfo,
    pub entry: LogEntry,
    pub path: PathBuf,
    /// Whether the changelog was rewritten
    pub written: bool,
    pub change_count: usize,
    pub bug_fix_count: usize,
    pub warnings: Vec<BoundaryWarning>,
}

/// Collaborators the workflow needs besides its configuration
pub struct Sources<'a, H, M, D> {
    pub history: H,
    pub metadata: &'a M,
    pub clock: &'a D,
    pub maintainer: Maintainer,
}

/// Main changelog workflow
///
/// 1. Resolve package name and version
/// 2. Classify commits since the release tag
/// 3. Render the entry
/// 4. Prepend it to the changelog (unless dry run)
pub fn run_workflow<H, M, D>(
    args: &WorkflowArgs,
    config: &Config,
    sources: Sources<'_, H, M, D>,
) -> Result<WorkflowResult>
where
    H: CommitHistorySource,
    M: PackageMetadataSource,
    D: DateSource,
{
    let package = resolve_package(args, config, sources.metadata)?;
    log::info!("generating entry for {} {}", package.name, package.version);

    let mut warnings: Vec<BoundaryWarning> = package.semver_warning().into_iter().collect();

    let context = EntryContext {
        package: package.name.clone(),
        version: package.version.clone(),
        distribution: config.entry.distribution.clone(),
        urgency: config.entry.urgency.clone(),
        maintainer: sources.maintainer,
        timestamp: sources.clock.rfc2822_now(),
    };

    let builder = EntryBuilder::new(sources.history)
        .tag_prefix(config.entry.tag_prefix.clone())
        .skip_malformed(config.behavior.skip_malformed);
    let (entry, classification) = builder.build(&context)?;
    warnings.extend(classification.warnings);

    let path = args
        .changelog_path
        .clone()
        .unwrap_or_else(|| config.changelog.path.clone());

    if !args.dry_run {
        ChangelogFile::new(&path).prepend(entry.as_str())?;
        log::info!("prepended entry to {}", path.display());
    }

    Ok(WorkflowResult {
        package,
        entry,
        path,
        written: !args.dry_run,
        change_count: classification.changes.messages(Category::Changes).len(),
        bug_fix_count: classification.changes.messages(Category::BugFixes).len(),
        warnings,
    })
}

/// Package name and version after CLI and config overrides.
///
/// Metadata is only consulted when one of the two is still unknown.
fn resolve_package<M: PackageMetadataSource>(
    args: &WorkflowArgs,
    config: &Config,
    metadata: &M,
) -> Result<PackageInfo> {
    if let (Some(name), Some(version)) = (&config.entry.package, &args.release) {
        return Ok(PackageInfo::new(name.clone(), version.clone()));
    }

    let mut package = metadata.package()?;
    if let Some(name) = &config.entry.package {
        package.name = name.clone();
    }
    if let Some(version) = &args.release {
        package.version = version.clone();
    }
    Ok(package)
}
