//! Turns local file paths into raw-content URLs

use std::path::Path;

use crate::core::constants::separators;

/// Replace every backslash with a forward slash.
pub fn normalize_separators(path: &str) -> String {
    path.replace(separators::BACKSLASH, separators::FORWARD_SLASH)
}

/// Rewrites local paths by swapping a local prefix for a remote one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRewriter {
    local_prefix: String,
    remote_prefix: String,
}

impl UrlRewriter {
    pub fn new(local_prefix: impl Into<String>, remote_prefix: impl Into<String>) -> Self {
        Self {
            local_prefix: local_prefix.into(),
            remote_prefix: remote_prefix.into(),
        }
    }

    pub fn local_prefix(&self) -> &str {
        &self.local_prefix
    }

    pub fn remote_prefix(&self) -> &str {
        &self.remote_prefix
    }

    /// Normalize separators, then replace every occurrence of the local prefix.
    ///
    /// The replacement is not anchored: a prefix that reappears deeper in the
    /// path is replaced there too. A path without the prefix comes back
    /// normalized and otherwise unchanged.
    pub fn rewrite(&self, path: &str) -> String {
        normalize_separators(path).replace(&self.local_prefix, &self.remote_prefix)
    }

    /// Same as [`UrlRewriter::rewrite`]; non UTF-8 paths are converted lossily.
    pub fn rewrite_path(&self, path: &Path) -> String {
        self.rewrite(&path.to_string_lossy())
    }
}
