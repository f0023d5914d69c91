use std::fmt;

/// Warnings raised while building a changelog entry.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The release tag the history is measured from does not exist
    MissingTag { tag: String },
    /// No commit carried a recognised type token
    NoCategorizedChanges { version: String },
    /// A log line could not be split into id, type and message
    MalformedCommitSkipped { line: String },
    /// The package version is not a semantic version
    NonSemverVersion { version: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingTag { tag } => {
                write!(
                    f,
                    "Tag '{}' not found; the entry will have no categorized changes",
                    tag
                )
            }
            BoundaryWarning::NoCategorizedChanges { version } => {
                write!(f, "No 'change:' or 'fix:' commits found for {}", version)
            }
            BoundaryWarning::MalformedCommitSkipped { line } => {
                write!(f, "Skipped malformed commit line '{}'", line)
            }
            BoundaryWarning::NonSemverVersion { version, reason } => {
                write!(f, "Version '{}' is not semver: {}", version, reason)
            }
        }
    }
}
