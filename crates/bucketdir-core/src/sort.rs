//! Sort order selection.
//!
//! Maps the `sort` / `sortdir` query parameters to a total order over
//! listing entries. Unrecognized columns and directions fall back to
//! name-ascending instead of failing.

use std::cmp::Ordering;
use std::str::FromStr;

use strum::{AsRefStr, EnumString};

use crate::listing::Entry;
use crate::query::QueryParams;

/// Column a listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Name,
    Size,
    Lastmod,
}

/// Direction of the selected order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// The (column, direction) pair governing render order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Derive the sort spec from query parameters. Missing or
    /// unrecognized values default to name ascending.
    pub fn from_params(params: &QueryParams) -> Self {
        let column = params
            .get("sort")
            .and_then(|s| SortColumn::from_str(s).ok())
            .unwrap_or_default();
        let direction = params
            .get("sortdir")
            .and_then(|s| SortDirection::from_str(s).ok())
            .unwrap_or_default();
        Self { column, direction }
    }

    /// Compare two entries under this spec.
    ///
    /// Sizes compare numerically; size text that does not parse as an
    /// integer compares as zero. Names and timestamps compare
    /// lexicographically (the listing's timestamp format is zero-padded,
    /// so byte order is time order).
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        let ordering = match self.column {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Size => size_bytes(&a.size).cmp(&size_bytes(&b.size)),
            SortColumn::Lastmod => a.last_modified.cmp(&b.last_modified),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

fn size_bytes(text: &str) -> u64 {
    text.trim().parse().unwrap_or(0)
}

/// Sort entries in place under the spec derived from the query
/// parameters. The sort is stable: ties keep parse order.
pub fn sort_entries(entries: &mut [Entry], params: &QueryParams) {
    let spec = SortSpec::from_params(params);
    entries.sort_by(|a, b| spec.compare(a, b));
}

/// Direction a column's header link should request next.
///
/// Only the currently active column toggles between ascending and
/// descending; any other column starts over at ascending. The active
/// column is the raw `sort` parameter, so an unrecognized value leaves
/// every link at ascending even though the listing itself renders in
/// name order.
pub fn next_sort_dir(column: SortColumn, params: &QueryParams) -> SortDirection {
    if params.get("sort") == Some(column.as_ref()) {
        if params.get("sortdir") == Some(SortDirection::Desc.as_ref()) {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    } else {
        SortDirection::Asc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size: &str, last_modified: &str) -> Entry {
        Entry {
            name: name.to_string(),
            size: size.to_string(),
            last_modified: last_modified.to_string(),
        }
    }

    fn params(query: &str) -> QueryParams {
        QueryParams::from_query(query)
    }

    #[test]
    fn test_column_tokens() {
        assert_eq!(SortColumn::from_str("name"), Ok(SortColumn::Name));
        assert_eq!(SortColumn::from_str("size"), Ok(SortColumn::Size));
        assert_eq!(SortColumn::from_str("lastmod"), Ok(SortColumn::Lastmod));
        assert!(SortColumn::from_str("Name").is_err());
        assert!(SortColumn::from_str("modified").is_err());
        assert_eq!(SortColumn::Lastmod.as_ref(), "lastmod");
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!(SortDirection::from_str("asc"), Ok(SortDirection::Asc));
        assert_eq!(SortDirection::from_str("desc"), Ok(SortDirection::Desc));
        assert!(SortDirection::from_str("down").is_err());
    }

    #[test]
    fn test_spec_defaults_to_name_ascending() {
        let spec = SortSpec::from_params(&params(""));
        assert_eq!(spec.column, SortColumn::Name);
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn test_spec_unknown_values_fall_back() {
        let spec = SortSpec::from_params(&params("sort=bogus&sortdir=sideways"));
        assert_eq!(spec.column, SortColumn::Name);
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn test_size_compares_numerically() {
        let spec = SortSpec::from_params(&params("sort=size"));
        let small = entry("a", "9", "2020-01-01");
        let big = entry("b", "100", "2020-01-01");
        // lexicographically "9" > "100"; numerically 9 < 100
        assert_eq!(spec.compare(&small, &big), Ordering::Less);
        assert_eq!(spec.compare(&big, &small), Ordering::Greater);
        assert_eq!(spec.compare(&small, &small), Ordering::Equal);
    }

    #[test]
    fn test_size_antisymmetric_and_desc_inverts() {
        let asc = SortSpec::from_params(&params("sort=size&sortdir=asc"));
        let desc = SortSpec::from_params(&params("sort=size&sortdir=desc"));
        let a = entry("a", "10", "2020-01-01");
        let b = entry("b", "20", "2020-01-02");
        assert_eq!(asc.compare(&a, &b), asc.compare(&b, &a).reverse());
        assert_eq!(desc.compare(&a, &b), asc.compare(&a, &b).reverse());
        assert_eq!(desc.compare(&b, &a), asc.compare(&b, &a).reverse());
    }

    #[test]
    fn test_non_numeric_size_compares_as_zero() {
        let spec = SortSpec::from_params(&params("sort=size"));
        let odd = entry("odd", "not-a-number", "2020-01-01");
        let zero = entry("zero", "0", "2020-01-01");
        let one = entry("one", "1", "2020-01-01");
        assert_eq!(spec.compare(&odd, &zero), Ordering::Equal);
        assert_eq!(spec.compare(&odd, &one), Ordering::Less);
    }

    #[test]
    fn test_name_and_lastmod_compare_lexicographically() {
        let by_name = SortSpec::from_params(&params("sort=name"));
        let by_lastmod = SortSpec::from_params(&params("sort=lastmod"));
        let a = entry("a.txt", "1", "2020-01-01T00:00:00.000Z");
        let b = entry("b.txt", "1", "2020-01-02T00:00:00.000Z");
        assert_eq!(by_name.compare(&a, &b), a.name.cmp(&b.name));
        assert_eq!(
            by_lastmod.compare(&a, &b),
            a.last_modified.cmp(&b.last_modified)
        );
    }

    #[test]
    fn test_sort_entries_default_order() {
        let mut entries = vec![
            entry("b.txt", "20", "2020-01-02"),
            entry("a.txt", "10", "2020-01-01"),
        ];
        sort_entries(&mut entries, &params(""));
        assert_eq!(entries[0].name, "a.txt");
        assert_eq!(entries[1].name, "b.txt");
    }

    #[test]
    fn test_sort_entries_size_descending() {
        let mut entries = vec![
            entry("b.txt", "20", "2020-01-02"),
            entry("a.txt", "10", "2020-01-01"),
        ];
        sort_entries(&mut entries, &params("sort=size&sortdir=desc"));
        assert_eq!(entries[0].name, "b.txt");
        assert_eq!(entries[1].name, "a.txt");
    }

    #[test]
    fn test_sort_entries_ties_keep_parse_order() {
        let mut entries = vec![
            entry("second", "5", "2020-01-01"),
            entry("first", "5", "2020-01-01"),
        ];
        sort_entries(&mut entries, &params("sort=size"));
        assert_eq!(entries[0].name, "second");
        assert_eq!(entries[1].name, "first");
    }

    #[test]
    fn test_toggle_active_column() {
        // active ascending -> link requests descending
        let active_asc = params("sort=size&sortdir=asc");
        assert_eq!(
            next_sort_dir(SortColumn::Size, &active_asc),
            SortDirection::Desc
        );
        // active descending -> link requests ascending
        let active_desc = params("sort=size&sortdir=desc");
        assert_eq!(
            next_sort_dir(SortColumn::Size, &active_desc),
            SortDirection::Asc
        );
        // active with no explicit direction -> link requests descending
        let active_bare = params("sort=size");
        assert_eq!(
            next_sort_dir(SortColumn::Size, &active_bare),
            SortDirection::Desc
        );
    }

    #[test]
    fn test_toggle_inactive_column_resets_to_ascending() {
        let active = params("sort=size&sortdir=desc");
        assert_eq!(next_sort_dir(SortColumn::Name, &active), SortDirection::Asc);
        assert_eq!(
            next_sort_dir(SortColumn::Lastmod, &active),
            SortDirection::Asc
        );
    }

    #[test]
    fn test_toggle_with_no_parameters() {
        let empty = params("");
        assert_eq!(next_sort_dir(SortColumn::Name, &empty), SortDirection::Asc);
        assert_eq!(next_sort_dir(SortColumn::Size, &empty), SortDirection::Asc);
    }

    #[test]
    fn test_toggle_unrecognized_active_column() {
        // the listing falls back to name order, but no link toggles
        let odd = params("sort=bogus&sortdir=desc");
        assert_eq!(next_sort_dir(SortColumn::Name, &odd), SortDirection::Asc);
        assert_eq!(next_sort_dir(SortColumn::Size, &odd), SortDirection::Asc);
    }
}
