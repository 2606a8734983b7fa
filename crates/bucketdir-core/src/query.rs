//! URL query-parameter reading.
//!
//! The sort state of a rendered listing lives entirely in the page URL's
//! query component; this module turns that component into a lookup map.

use indexmap::IndexMap;
use url::Url;

/// Parsed query parameters: name to raw value, in document order.
///
/// An absent parameter is distinct from a parameter with an empty value:
/// `?a` and `?a=` both look up as `Some("")`, a name that never appears
/// looks up as `None`. No percent-decoding happens here beyond what the
/// URL type already applied to the query component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: IndexMap<String, String>,
}

impl QueryParams {
    /// Parse a raw query string. A leading `?` is tolerated. The string
    /// splits on `&` into pairs and each pair splits on the first `=`;
    /// a pair without `=` maps to the empty value. Empty segments are
    /// skipped, and a repeated name keeps the last value.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = IndexMap::new();
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            match pair.split_once('=') {
                Some((name, value)) => params.insert(name.to_string(), value.to_string()),
                None => params.insert(pair.to_string(), String::new()),
            };
        }
        Self { params }
    }

    /// Read the query component of a URL. A URL without one yields the
    /// empty map.
    pub fn from_url(url: &Url) -> Self {
        Self::from_query(url.query().unwrap_or(""))
    }

    /// Look up a parameter's raw value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
