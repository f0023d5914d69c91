//! Commit history abstraction layer
//!
//! The builder never talks to git directly. It asks a [CommitHistorySource]
//! for the one-line log between a release tag and HEAD. The concrete
//! implementations are:
//!
//! - [repository::Git2History]: reads a real repository through the `git2` crate
//! - [mock::MockHistory]: canned log lines for tests
//!
//! ```rust
//! # use debchangelog::git::{CommitHistorySource, MockHistory};
//! let history = MockHistory::new()
//!     .with_tag("v1.0.0")
//!     .with_line("abc1 fix: crash on start");
//! let lines = history.oneline_log("v1.0.0").unwrap();
//! assert_eq!(lines, vec!["abc1 fix: crash on start".to_string()]);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockHistory;
pub use repository::Git2History;

use crate::error::Result;

/// Source of one-line commit records.
///
/// Records have the shape `<short id> <summary>`, the same as
/// `git log --oneline --no-decorate`.
pub trait CommitHistorySource {
    /// Whether the given tag exists.
    fn tag_exists(&self, tag: &str) -> Result<bool>;

    /// Commits reachable from HEAD but not from `tag`, newest first.
    ///
    /// A tag that does not exist yields an empty log rather than an error.
    fn oneline_log(&self, tag: &str) -> Result<Vec<String>>;
}

impl<T: CommitHistorySource + ?Sized> CommitHistorySource for &T {
    fn tag_exists(&self, tag: &str) -> Result<bool> {
        (**self).tag_exists(tag)
    }

    fn oneline_log(&self, tag: &str) -> Result<Vec<String>> {
        (**self).oneline_log(tag)
    }
}
