use std::io::{self, Write};
use std::path::PathBuf;

use crate::rewrite::UrlRewriter;

pub trait PrintUrls {
    fn print_urls(&mut self, rewriter: &UrlRewriter, paths: &[PathBuf]) -> io::Result<usize>;
}

/// Writes one rewritten URL per line to the wrapped writer.
pub struct LinePrinter<W: Write> {
    out: W,
}

impl<W: Write> LinePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PrintUrls for LinePrinter<W> {
    fn print_urls(&mut self, rewriter: &UrlRewriter, paths: &[PathBuf]) -> io::Result<usize> {
        for path in paths {
            writeln!(self.out, "{}", rewriter.rewrite_path(path))?;
        }
        self.out.flush()?;

        Ok(paths.len())
    }
}
