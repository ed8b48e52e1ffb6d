use std::io::Write;
use std::time::Instant;

use crate::config::Config;
use crate::core::error::Result;
use crate::discovery::list_files;
use crate::logging;
use crate::printer::{LinePrinter, PrintUrls};

/// List the configured root, then print one rewritten URL per file to `out`.
///
/// The listing finishes before anything is written, so a walk error leaves
/// `out` untouched. Returns the number of lines printed.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    let started = Instant::now();
    logging::log_config_info(config);

    let root = config.root_path();
    let files = list_files(&root).inspect_err(|e| {
        logging::log_error(
            &format!("Could not list files under '{}'", root.display()),
            Some(e),
        );
    })?;
    logging::log_file_info(files.len(), &files);
    if files.is_empty() {
        logging::log_warning(&format!("No files found under '{}'", root.display()));
    }

    let rewriter = config.rewriter();
    let printed = LinePrinter::new(out).print_urls(&rewriter, &files)?;

    logging::log_print_complete(printed, started.elapsed().as_millis());
    Ok(printed)
}
