//! CLI argument parsing with clap.

use std::io::{self, ErrorKind};
use std::path::PathBuf;

use clap::Parser;

/// bucketdir - render an object-storage bucket listing as a sortable
/// directory index
#[derive(Parser, Debug)]
#[command(
    name = "bucketdir",
    version,
    about = "Render an object-storage bucket listing as a sortable directory index"
)]
pub struct Cli {
    /// Page URL: the listing is fetched from its origin and the sort
    /// state (`sort`, `sortdir`) is read from its query string
    #[arg(value_name = "PAGE_URL")]
    pub url: Option<String>,

    /// Read the listing XML from a file instead of fetching
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Query string supplying the sort state when --input is used
    #[arg(short = 'q', long = "query", value_name = "QUERY", requires = "input")]
    pub query: Option<String>,

    /// Write a full HTML page to this file instead of printing the block
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit the sorted entries as JSON instead of markup
    #[arg(long = "json")]
    pub json: bool,

    /// Invoke the delete hook for an object name and exit
    #[arg(long = "delete", value_name = "NAME")]
    pub delete: Option<String>,

    /// Config file (TOML); built-in defaults apply when omitted
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parse and validate arguments: exactly one listing source is required
/// unless only the delete hook is invoked.
pub fn parse() -> io::Result<Cli> {
    validate(Cli::parse())
}

fn validate(cli: Cli) -> io::Result<Cli> {
    if cli.delete.is_some() {
        return Ok(cli);
    }
    match (&cli.url, &cli.input) {
        (Some(_), Some(_)) => Err(io::Error::new(
            ErrorKind::InvalidInput,
            "give either a page URL or --input, not both",
        )),
        (None, None) => Err(io::Error::new(
            ErrorKind::InvalidInput,
            "a page URL or --input <FILE> is required",
        )),
        _ => Ok(cli),
    }
}
