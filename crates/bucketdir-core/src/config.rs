//! Tool configuration, loaded from an optional TOML file.
//!
//! Every field has a default so a missing or partial file works.

use std::io::{self, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};

fn default_container_id() -> String {
    "bucket_list".to_string()
}

fn default_page_title() -> String {
    "Bucket listing".to_string()
}

/// Runtime configuration for fetching and rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timeout for the listing request, in seconds. Absent means the
    /// request may wait indefinitely.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
    /// id of the container element in generated pages
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Title of generated pages
    #[serde(default = "default_page_title")]
    pub page_title: String,
    /// Render a per-entry delete button. The action behind it is the
    /// unimplemented `delete_object` extension point.
    #[serde(default)]
    pub include_delete_actions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_seconds: None,
            container_id: default_container_id(),
            page_title: default_page_title(),
            include_delete_actions: false,
        }
    }
}

impl Config {
    /// Load from a TOML file. `None` yields defaults; a named file must
    /// exist and parse.
    pub fn load(path: Option<&Path>) -> io::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("failed to read config '{}': {}", path.display(), e),
            )
        })?;
        toml::from_str(&content).map_err(|e| {
            io::Error::new(
                ErrorKind::InvalidData,
                format!("invalid config '{}': {}", path.display(), e),
            )
        })
    }
}
