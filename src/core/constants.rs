//! Application-wide constants.
//!
//! The built-in defaults reproduce the source tree this tool was written for.

/// Built-in defaults used when no config file overrides them
pub mod defaults {
    /// Directory that gets walked
    pub const ROOT_DIR: &str = "H:/Pingloo/src/main";
    /// Local path prefix replaced in every listed path
    pub const LOCAL_ROOT_PREFIX: &str = "H:/Pingloo/src/main";
    /// Raw-content URL substituted for the local prefix
    pub const REMOTE_ROOT_PREFIX: &str =
        "https://raw.githubusercontent.com/ZeNoX49/Pingloo/splitUtilsView/src/main";
}

/// Path separator constants
pub mod separators {
    /// Windows path separator
    pub const BACKSLASH: char = '\\';
    /// Separator used in URLs
    pub const FORWARD_SLASH: &str = "/";
}

/// Config file lookup constants
pub mod config_files {
    /// Name of the config file looked up in standard locations
    pub const FILE_NAME: &str = ".rawlinks.toml";
    /// How many parent directories are searched for the config file
    pub const MAX_PARENT_LEVELS: usize = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_matches_local_prefix() {
        assert_eq!(defaults::ROOT_DIR, defaults::LOCAL_ROOT_PREFIX);
    }

    #[test]
    fn test_remote_prefix_is_https() {
        assert!(defaults::REMOTE_ROOT_PREFIX.starts_with("https://"));
        assert!(!defaults::REMOTE_ROOT_PREFIX.ends_with('/'));
    }

    #[test]
    fn test_config_file_name() {
        assert!(config_files::FILE_NAME.ends_with(".toml"));
        assert!(config_files::MAX_PARENT_LEVELS > 0);
    }
}
