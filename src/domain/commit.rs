use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ChangelogError, Result};

// id, type token, then the untouched rest of the line
static ONELINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)\s+(\S+)\s+(\S.*)$").expect("valid oneline regex"));

/// A single `<short id> <type> <message>` line from the commit log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub id: String,
    pub type_token: String,
    pub message: String,
}

impl CommitRecord {
    /// Parse a one-line log record.
    ///
    /// The line is split on whitespace into at most three parts. The message keeps
    /// its inner whitespace. Lines with fewer than three parts are rejected.
    pub fn parse(line: &str) -> Result<Self> {
        let captures = ONELINE
            .captures(line)
            .ok_or_else(|| ChangelogError::malformed(line))?;

        Ok(CommitRecord {
            id: captures[1].to_string(),
            type_token: captures[2].to_string(),
            message: captures[3].to_string(),
        })
    }
}
