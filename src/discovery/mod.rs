//! File discovery
//!
//! This module handles directory traversal and collects the paths
//! of every regular file under a root.

pub mod lister;

// Re-export commonly used items
pub use lister::list_files;
