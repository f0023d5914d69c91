use std::fmt;

use crate::config::Maintainer;
use crate::domain::ChangeMap;

/// Everything the entry needs besides the categorized messages
#[derive(Debug, Clone, PartialEq)]
pub struct EntryContext {
    pub package: String,
    pub version: String,
    pub distribution: String,
    pub urgency: String,
    pub maintainer: Maintainer,
    /// RFC-2822 formatted timestamp for the trailer line
    pub timestamp: String,
}

/// A rendered changelog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    text: String,
}

impl LogEntry {
    /// Render an entry in Debian changelog layout.
    ///
    /// Sections with no messages are left out. Message text is written as-is.
    pub fn render(context: &EntryContext, changes: &ChangeMap) -> Self {
        let mut text = format!(
            "{} ({}) {}; urgency={}\n\n",
            context.package, context.version, context.distribution, context.urgency
        );

        for (category, messages) in changes.iter() {
            if messages.is_empty() {
                continue;
            }

            text.push_str(&format!("  [ {} ]\n", category.label()));
            for message in messages {
                text.push_str(&format!("  * {}\n", message));
            }
        }

        // Trailing blank line separates this entry from the previous one
        text.push_str(&format!(
            "\n -- {}  {}\n\n",
            context.maintainer, context.timestamp
        ));

        LogEntry { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn context() -> EntryContext {
        EntryContext {
            package: "rust-apt".to_string(),
            version: "1.0.0".to_string(),
            distribution: "unstable".to_string(),
            urgency: "medium".to_string(),
            maintainer: Maintainer::new("Jane Doe", "jane@example.org"),
            timestamp: "Mon, 19 Oct 2026 10:00:00 +0000".to_string(),
        }
    }

    #[test]
    fn test_render_full_entry() {
        let mut changes = ChangeMap::new();
        changes.push(Category::BugFixes, "Something Broke");
        changes.push(Category::Changes, "add widget");

        let entry = LogEntry::render(&context(), &changes);
        assert_eq!(
            entry.as_str(),
            "rust-apt (1.0.0) unstable; urgency=medium\n\
             \n\
             \x20 [ Changes ]\n\
             \x20 * add widget\n\
             \x20 [ Bug Fixes ]\n\
             \x20 * Something broke\n\
             \n\
             \x20-- Jane Doe <jane@example.org>  Mon, 19 Oct 2026 10:00:00 +0000\n\
             \n"
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut changes = ChangeMap::new();
        changes.push(Category::BugFixes, "crash on start");

        let entry = LogEntry::render(&context(), &changes);
        assert!(!entry.as_str().contains("[ Changes ]"));
        assert!(entry.as_str().contains("  [ Bug Fixes ]\n  * Crash on start\n"));
    }

    #[test]
    fn test_no_changes_renders_header_and_trailer_only() {
        let entry = LogEntry::render(&context(), &ChangeMap::new());
        assert_eq!(
            entry.to_string(),
            "rust-apt (1.0.0) unstable; urgency=medium\n\n\n -- Jane Doe <jane@example.org>  Mon, 19 Oct 2026 10:00:00 +0000\n\n"
        );
    }

    #[test]
    fn test_message_content_is_not_escaped() {
        let mut changes = ChangeMap::new();
        changes.push(Category::Changes, "x\n  [ Bug Fixes ]");

        let entry = LogEntry::render(&context(), &changes);
        assert!(entry.as_str().contains("  * x\n  [ Bug Fixes ]\n"));
    }

    #[test]
    fn test_custom_distribution_and_urgency() {
        let mut ctx = context();
        ctx.distribution = "stable".to_string();
        ctx.urgency = "high".to_string();

        let entry = LogEntry::render(&ctx, &ChangeMap::new());
        assert!(entry
            .as_str()
            .starts_with("rust-apt (1.0.0) stable; urgency=high\n\n"));
    }
}
