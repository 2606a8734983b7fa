//! Fixed-width markup rendering.
//!
//! Produces the listing block byte-for-byte in the shape the index page
//! serves: a header row of three sort-toggle links followed by one
//! padded line per entry, wrapped in a `<PRE>` element.

use crate::config::Config;
use crate::listing::Entry;
use crate::query::QueryParams;
use crate::sort::{SortColumn, next_sort_dir, sort_entries};

/// Spaces needed ahead of `value` to reach `width` columns; empty when
/// the value is already at or past the width. The measure is the bare
/// value, never the markup around it.
pub fn pad(value: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(value.len()))
}

/// Markup for one entry line. The name padding follows the hyperlink but
/// is computed from the bare name.
fn entry_line(entry: &Entry, config: &Config) -> String {
    let mut line = String::new();
    line.push_str(&pad(&entry.size, 15));
    line.push_str(&entry.size);
    line.push_str(" B ");
    line.push(' ');
    line.push_str(&pad(&entry.last_modified, 20));
    line.push_str(&entry.last_modified);
    line.push(' ');
    line.push(' ');
    line.push_str(&format!("<A HREF=\"{0}\">{0}</A>", entry.name));
    line.push_str(&pad(&entry.name, 50));
    line.push(' ');
    if config.include_delete_actions {
        line.push_str(&delete_button(&entry.name));
    }
    line.push_str("<BR>");
    line
}

/// Delete affordance markup. Rendering it is opt-in; the action behind
/// it is the `delete_object` extension point.
fn delete_button(name: &str) -> String {
    format!("<button onclick=\"deleteFile('{}')\">Delete</button>", name)
}

/// One column header link encoding the next sort toggle.
fn header_link(column: SortColumn, label: &str, params: &QueryParams) -> String {
    format!(
        "<A HREF=\"?sort={}&sortdir={}\">{}</A>",
        column.as_ref(),
        next_sort_dir(column, params).as_ref(),
        label
    )
}

/// The header row: Size, Lastmodified and Name links spaced to line up
/// with the entry columns.
fn header_line(params: &QueryParams) -> String {
    format!(
        "             {}  {}              {}   ",
        header_link(SortColumn::Size, "Size", params),
        header_link(SortColumn::Lastmod, "Lastmodified", params),
        header_link(SortColumn::Name, "Name", params),
    )
}

/// Render the full listing block: entries sorted under the query's sort
/// spec, formatted as fixed-width lines under the sort-toggle header.
pub fn render_block(mut entries: Vec<Entry>, params: &QueryParams, config: &Config) -> String {
    sort_entries(&mut entries, params);

    let mut block = String::from("<PRE>");
    block.push_str(&header_line(params));
    block.push_str("<BR>");
    for entry in &entries {
        block.push_str(&entry_line(entry, config));
    }
    block.push_str("</PRE>");
    block
}

/// Wrap a rendered block in a minimal page with the configured container
/// element, for writing to a file.
pub fn render_page(block: &str, config: &Config) -> String {
    format!(
        "<HTML><HEAD><TITLE>{}</TITLE></HEAD><BODY><DIV id=\"{}\">{}</DIV></BODY></HTML>\n",
        config.page_title, config.container_id, block
    )
}
