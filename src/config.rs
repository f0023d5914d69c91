use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

const LOCAL_CONFIG: &str = "./debchangelog.toml";
const USER_CONFIG: &str = ".debchangelog.toml";

/// Represents the complete configuration for debchangelog.
///
/// Contains the maintainer identity, entry header settings, the changelog location and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub maintainer: Option<Maintainer>,

    #[serde(default)]
    pub entry: EntryConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Person signing the changelog entry trailer.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Maintainer {
    pub name: String,
    pub email: String,
}

impl Maintainer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Maintainer {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Maintainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

fn default_distribution() -> String {
    "unstable".to_string()
}

fn default_urgency() -> String {
    "medium".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Settings for the entry header line and the release tag lookup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EntryConfig {
    /// Overrides the package name reported by cargo metadata
    #[serde(default)]
    pub package: Option<String>,

    #[serde(default = "default_distribution")]
    pub distribution: String,

    #[serde(default = "default_urgency")]
    pub urgency: String,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for EntryConfig {
    fn default() -> Self {
        EntryConfig {
            package: None,
            distribution: default_distribution(),
            urgency: default_urgency(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

fn default_changelog_path() -> PathBuf {
    PathBuf::from("changelog")
}

/// Location of the persisted changelog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Skip log lines that cannot be split into id, type and message instead of aborting
    #[serde(default)]
    pub skip_malformed: bool,
}

impl Config {
    /// Resolves the maintainer identity.
    ///
    /// Order: the `[maintainer]` table, then `DEBFULLNAME`/`DEBEMAIL`,
    /// then git's `user.name`/`user.email`.
    pub fn resolve_maintainer(&self) -> Result<Maintainer> {
        if let Some(maintainer) = &self.maintainer {
            return Ok(maintainer.clone());
        }

        if let (Ok(name), Ok(email)) = (std::env::var("DEBFULLNAME"), std::env::var("DEBEMAIL")) {
            if !name.is_empty() && !email.is_empty() {
                return Ok(Maintainer::new(name, email));
            }
        }

        let git_config = git2::Config::open_default()?;
        match (
            git_config.get_string("user.name"),
            git_config.get_string("user.email"),
        ) {
            (Ok(name), Ok(email)) => Ok(Maintainer::new(name, email)),
            _ => Err(ChangelogError::config(
                "No maintainer configured; set [maintainer] in debchangelog.toml, \
                 DEBFULLNAME/DEBEMAIL, or git user.name/user.email",
            )),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `debchangelog.toml` in current directory
/// 3. `.debchangelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG).exists() {
        fs::read_to_string(LOCAL_CONFIG)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| ChangelogError::config(e.to_string()))
}
