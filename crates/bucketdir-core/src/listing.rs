//! Bucket listing entries and the XML parser that produces them.
//!
//! The listing endpoint returns one `<Contents>` element per stored
//! object; extraction works directly on those flat blocks. Malformed
//! blocks are skipped and reported, never fatal.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static CONTENTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<Contents>(.*?)</Contents>").expect("static pattern"));

/// One stored object's metadata as parsed from the listing.
///
/// `size` keeps the listing's text form; numeric interpretation happens
/// only inside the size comparator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub name: String,
    pub size: String,
    pub last_modified: String,
}

/// Parse a listing document into entries, in document order.
///
/// A `<Contents>` block missing `Key`, `Size` or `LastModified` (or
/// carrying one with no text) is malformed: it is skipped and reported
/// through the log facade.
pub fn parse_listing(xml: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    for cap in CONTENTS_RE.captures_iter(xml) {
        let Some(block) = cap.get(1) else { continue };
        match parse_entry(block.as_str()) {
            Ok(entry) => entries.push(entry),
            Err(tag) => log::warn!("skipping malformed listing entry: missing <{}>", tag),
        }
    }
    entries
}

/// Extract one entry from a `<Contents>` block, or name the missing tag.
fn parse_entry(block: &str) -> Result<Entry, &'static str> {
    let name = extract_tag(block, "Key").ok_or("Key")?;
    let size = extract_tag(block, "Size").ok_or("Size")?;
    let last_modified = extract_tag(block, "LastModified").ok_or("LastModified")?;
    Ok(Entry {
        name,
        size,
        last_modified,
    })
}

/// Text content of the first `<tag>` element in the block.
fn extract_tag(block: &str, tag: &str) -> Option<String> {
    let pattern = format!(r"<{0}[^>]*>([^<]*)</{0}>", tag);
    let re = Regex::new(&pattern).ok()?;
    let text = re.captures(block)?.get(1)?.as_str().trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Delete-action extension point.
///
/// The deletion endpoint's contract is not settled, so the hook only
/// records the request. TODO: wire to a real delete call once the
/// endpoint contract exists.
pub fn delete_object(name: &str) {
    log::warn!("delete_object: no deletion endpoint wired, ignoring '{}'", name);
}
