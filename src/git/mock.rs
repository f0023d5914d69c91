use crate::error::Result;
use crate::git::CommitHistorySource;
use std::collections::HashSet;

/// Mock history for testing without an actual repository
#[derive(Debug, Clone, Default)]
pub struct MockHistory {
    tags: HashSet<String>,
    lines: Vec<String>,
}

impl MockHistory {
    /// Create a new empty mock history
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tag as existing
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Append a log line; lines are returned in insertion order
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
}

impl CommitHistorySource for MockHistory {
    fn tag_exists(&self, tag: &str) -> Result<bool> {
        Ok(self.tags.contains(tag))
    }

    fn oneline_log(&self, tag: &str) -> Result<Vec<String>> {
        if !self.tags.contains(tag) {
            return Ok(Vec::new());
        }
        Ok(self.lines.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_history_returns_lines_in_order() {
        let history = MockHistory::new()
            .with_tag("v1.0.0")
            .with_lines(["abc2 change: b", "abc1 change: a"]);

        assert_eq!(
            history.oneline_log("v1.0.0").unwrap(),
            vec!["abc2 change: b".to_string(), "abc1 change: a".to_string()]
        );
    }

    #[test]
    fn test_mock_history_unknown_tag_is_empty() {
        let history = MockHistory::new().with_line("abc1 fix: x");

        assert!(!history.tag_exists("v9.9.9").unwrap());
        assert!(history.oneline_log("v9.9.9").unwrap().is_empty());
    }

    #[test]
    fn test_mock_history_default() {
        let history = MockHistory::default();
        assert!(!history.tag_exists("v1.0.0").unwrap());
    }
}
