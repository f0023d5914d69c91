//! Changelog entry builder and changelog file handling.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::domain::{Category, ChangeMap, CommitRecord, EntryContext, LogEntry};
use crate::error::{ChangelogError, Result};
use crate::git::CommitHistorySource;

/// Result of classifying the history since a release
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub changes: ChangeMap,
    pub warnings: Vec<BoundaryWarning>,
}

/// Builds changelog entries from a commit history source
pub struct EntryBuilder<H> {
    history: H,
    tag_prefix: String,
    skip_malformed: bool,
}

impl<H: CommitHistorySource> EntryBuilder<H> {
    pub fn new(history: H) -> Self {
        EntryBuilder {
            history,
            tag_prefix: "v".to_string(),
            skip_malformed: false,
        }
    }

    pub fn tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_prefix = prefix.into();
        self
    }

    /// Skip malformed log lines with a warning instead of failing
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = skip;
        self
    }

    /// Classify every commit between the release tag for `version` and HEAD.
    ///
    /// The version is not validated; it is only used to name the tag.
    pub fn classify(&self, version: &str) -> Result<Classification> {
        let tag = format!("{}{}", self.tag_prefix, version);
        let mut warnings = Vec::new();

        if !self.history.tag_exists(&tag)? {
            warnings.push(BoundaryWarning::MissingTag { tag: tag.clone() });
        }

        let lines = self.history.oneline_log(&tag)?;
        let (changes, skipped) = classify_lines(&lines, self.skip_malformed)?;
        warnings.extend(skipped);

        if changes.is_empty() {
            warnings.push(BoundaryWarning::NoCategorizedChanges {
                version: version.to_string(),
            });
        }

        Ok(Classification { changes, warnings })
    }

    /// Classify the history and render the entry in one step.
    pub fn build(&self, context: &EntryContext) -> Result<(LogEntry, Classification)> {
        let classification = self.classify(&context.version)?;
        let entry = LogEntry::render(context, &classification.changes);
        Ok((entry, classification))
    }
}

/// Sort one-line log records into categories.
///
/// Lines whose type token is neither `change:` nor `fix:` are ignored. A line
/// with fewer than three whitespace-separated parts fails the whole run, unless
/// `skip_malformed` is set, in which case it is reported back as a warning.
pub fn classify_lines<S: AsRef<str>>(
    lines: &[S],
    skip_malformed: bool,
) -> Result<(ChangeMap, Vec<BoundaryWarning>)> {
    let mut changes = ChangeMap::new();
    let mut warnings = Vec::new();

    for line in lines {
        let line = line.as_ref();
        let record = match CommitRecord::parse(line) {
            Ok(record) => record,
            Err(ChangelogError::MalformedCommit { line }) if skip_malformed => {
                warnings.push(BoundaryWarning::MalformedCommitSkipped { line });
                continue;
            }
            Err(e) => return Err(e),
        };

        match Category::from_type_token(&record.type_token) {
            Some(category) => changes.push(category, &record.message),
            None => log::debug!(
                "ignoring {} with type '{}'",
                record.id,
                record.type_token
            ),
        }
    }

    Ok((changes, warnings))
}

/// Prepend a new entry to existing changelog text.
pub fn merge(entry: &str, existing: Option<&str>) -> String {
    match existing {
        Some(history) => {
            let mut merged = String::with_capacity(entry.len() + history.len());
            merged.push_str(entry);
            merged.push_str(history);
            merged
        }
        None => entry.to_string(),
    }
}

/// The persisted changelog, newest entry first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogFile {
    path: PathBuf,
}

impl ChangelogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ChangelogFile { path: path.into() }
    }

    /// Full text of the changelog, or `None` if it does not exist yet
    pub fn read_existing(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrite the changelog with `entry` in front of the existing history.
    ///
    /// Creates the file when missing. Not atomic and keeps no backup.
    pub fn prepend(&self, entry: &str) -> Result<String> {
        let existing = self.read_existing()?;
        let merged = merge(entry, existing.as_deref());
        fs::write(&self.path, &merged)?;

        log::debug!("wrote {} bytes to {}", merged.len(), self.path.display());
        Ok(merged)
    }
}
