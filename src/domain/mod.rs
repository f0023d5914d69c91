//! Domain logic - pure changelog rules independent of git, cargo and the filesystem

pub mod change_map;
pub mod commit;
pub mod entry;

pub use change_map::{Category, ChangeMap};
pub use commit::CommitRecord;
pub use entry::{EntryContext, LogEntry};
