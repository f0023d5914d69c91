pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod metadata;
pub mod ui;

pub use error::{ChangelogError, Result};
