//! Output handling for the CLI.
//!
//! Rendered markup or JSON goes to stdout or to an output file;
//! diagnostics go through the log facade to stderr.

use std::io;
use std::path::Path;

use bucketdir_core::{Config, Entry, render_page};

/// Where the rendered result ends up.
pub struct OutputHandler<'a> {
    output: Option<&'a Path>,
}

impl<'a> OutputHandler<'a> {
    pub fn new(output: Option<&'a Path>) -> Self {
        Self { output }
    }

    /// Emit a rendered block: printed bare, or wrapped in a full page
    /// when writing to a file.
    pub fn emit_block(&self, block: &str, config: &Config) -> io::Result<()> {
        match self.output {
            Some(path) => {
                std::fs::write(path, render_page(block, config))?;
                log::info!("wrote listing page to {}", path.display());
                Ok(())
            }
            None => {
                println!("{}", block);
                Ok(())
            }
        }
    }

    /// Emit the sorted entries as a JSON array.
    pub fn emit_entries(&self, entries: &[Entry]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| io::Error::other(format!("serializing entries failed: {}", e)))?;
        match self.output {
            Some(path) => {
                std::fs::write(path, json + "\n")?;
                log::info!("wrote entries to {}", path.display());
                Ok(())
            }
            None => {
                println!("{}", json);
                Ok(())
            }
        }
    }
}
