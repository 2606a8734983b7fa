//! bucketdir-core: library behind the `bucketdir` CLI.
//!
//! Fetches an object-storage bucket's root listing, parses the XML into
//! entry records, sorts them by a column chosen through URL query
//! parameters, and renders the directory-index markup block.
//!
//! # Quick Start
//!
//! ```no_run
//! use bucketdir_core::{Config, QueryParams, parse_listing, render_block};
//!
//! fn main() -> std::io::Result<()> {
//!     let xml = std::fs::read_to_string("listing.xml")?;
//!     let params = QueryParams::from_query("sort=size&sortdir=desc");
//!     let entries = parse_listing(&xml);
//!     print!("{}", render_block(entries, &params, &Config::default()));
//!     Ok(())
//! }
//! ```
//!
//! For lower-level access, use the individual modules directly.

pub mod config;
pub mod fetch;
pub mod listing;
pub mod query;
pub mod render;
pub mod sort;

// Re-export commonly used types
pub use config::Config;
pub use listing::{Entry, delete_object, parse_listing};
pub use query::QueryParams;
pub use render::{render_block, render_page};
pub use sort::{SortColumn, SortDirection, SortSpec, next_sort_dir, sort_entries};
