use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dirtree::{DirOptions, SortOrder};
use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dir: DirConfig,
}

/// Defaults for the `dir` command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirConfig {
    /// Show hidden entries
    pub show_hidden: bool,
    /// Deepest level to expand (absent = unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Entry order: name, dirs-first
    pub sort: SortOrder,
    /// Append file sizes to labels
    pub show_sizes: bool,
    /// Follow symbolic links
    pub follow_symlinks: bool,
}

impl Config {
    /// Load configuration from `path`, or from the default location when no
    /// path is given. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/printtree/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("printtree").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Read configuration file");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.max_depth == Some(0) {
            return Err(ConfigError::Invalid(
                "dir.max_depth must be at least 1; omit it for unlimited depth".into(),
            ));
        }
        Ok(())
    }
}

impl From<&DirConfig> for DirOptions {
    fn from(config: &DirConfig) -> Self {
        DirOptions::new()
            .with_hidden(config.show_hidden)
            .with_max_depth(config.max_depth)
            .with_sort(config.sort)
            .with_sizes(config.show_sizes)
            .with_follow_symlinks(config.follow_symlinks)
    }
}
