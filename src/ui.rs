//! Terminal output for the changelog workflow.
//!
//! Status lines go to stdout, errors and warnings to stderr.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::LogEntry;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Show the rendered entry, framed by a bold heading.
///
/// # Arguments
/// * `entry` - The rendered changelog entry
/// * `heading` - Title printed above the entry
pub fn display_entry(entry: &LogEntry, heading: &str) {
    println!("\n{}", style(heading).bold());
    print!("{}", entry);
}

/// One-line summary of how many messages landed in each section
pub fn format_counts(changes: usize, bug_fixes: usize) -> String {
    format!(
        "{} change{}, {} bug fix{}",
        changes,
        if changes == 1 { "" } else { "s" },
        bug_fixes,
        if bug_fixes == 1 { "" } else { "es" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_counts() {
        assert_eq!(format_counts(0, 0), "0 changes, 0 bug fixes");
        assert_eq!(format_counts(1, 1), "1 change, 1 bug fix");
        assert_eq!(format_counts(3, 2), "3 changes, 2 bug fixes");
    }
}
