//! Configuration management
//!
//! This module handles loading configuration from TOML files and
//! merging it with CLI arguments.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::core::constants::{config_files, defaults};
use crate::core::error::{RawLinksError, Result};
use crate::rewrite::UrlRewriter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory to walk
    pub root: Option<String>,

    /// Local path prefix to replace
    pub local_prefix: Option<String>,

    /// Raw-content URL prefix substituted for the local prefix
    pub remote_prefix: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: Some(defaults::ROOT_DIR.to_string()),
            local_prefix: Some(defaults::LOCAL_ROOT_PREFIX.to_string()),
            remote_prefix: Some(defaults::REMOTE_ROOT_PREFIX.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. Fields left out take the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| read_error(path, e))?;
        Self::from_toml(path, &content)
    }

    /// Find and load a config file in standard locations, falling back to
    /// defaults when none exists. A file that exists but cannot be read or
    /// parsed is an error.
    pub fn load_from_standard_locations() -> Result<Self> {
        for i in 0..=config_files::MAX_PARENT_LEVELS {
            let path = format!("{}{}", "../".repeat(i), config_files::FILE_NAME);
            if let Some(config) = Self::load_if_present(Path::new(&path))? {
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    fn load_if_present(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(path, &content).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(read_error(path, e)),
        }
    }

    fn from_toml(path: &Path, content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content).map_err(|e| {
            RawLinksError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.fill_defaults();

        config.validate()?;
        Ok(config)
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    fn fill_defaults(&mut self) {
        let defaults = Self::default();
        self.root = self.root.take().or(defaults.root);
        self.local_prefix = self.local_prefix.take().or(defaults.local_prefix);
        self.remote_prefix = self.remote_prefix.take().or(defaults.remote_prefix);
        self.verbose = self.verbose.take().or(defaults.verbose);
    }

    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(self.root.as_deref().unwrap_or(defaults::ROOT_DIR))
    }

    pub fn rewriter(&self) -> UrlRewriter {
        UrlRewriter::new(
            self.local_prefix
                .as_deref()
                .unwrap_or(defaults::LOCAL_ROOT_PREFIX),
            self.remote_prefix
                .as_deref()
                .unwrap_or(defaults::REMOTE_ROOT_PREFIX),
        )
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.root.as_deref().is_some_and(str::is_empty) {
            return Err(RawLinksError::Config(
                "Root directory cannot be empty.".to_string(),
            ));
        }

        // An empty pattern would splice the remote prefix between every character
        if self.local_prefix.as_deref().is_some_and(str::is_empty) {
            return Err(RawLinksError::Config(
                "Local prefix cannot be empty.".to_string(),
            ));
        }

        if self.remote_prefix.as_deref().is_some_and(str::is_empty) {
            return Err(RawLinksError::Config(
                "Remote prefix cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

fn read_error(path: &Path, err: io::Error) -> RawLinksError {
    RawLinksError::Config(format!(
        "Could not read config file '{}': {}",
        path.display(),
        err
    ))
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub config_file: Option<String>,
    pub no_config: bool,
    pub verbose: bool,
    pub quiet: bool,
}
