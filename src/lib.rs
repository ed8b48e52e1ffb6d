//! rawlinks lists every file under a local source tree and prints each path
//! rewritten as a raw-content URL on a remote repository branch.

pub mod app;
pub mod config;
pub mod core;
pub mod discovery;
pub mod logging;
pub mod printer;
pub mod rewrite;
pub mod ui;

// Re-export commonly used items
pub use app::run;
pub use config::{CliConfig, Config};
pub use crate::core::{RawLinksError, Result};
pub use discovery::list_files;
pub use rewrite::{UrlRewriter, normalize_separators};
