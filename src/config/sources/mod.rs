//! Concrete [`RouteSource`](super::RouteSource) implementations.
//!
//! Provides file-based sources (YAML, JSON, TOML) gated by feature
//! flags, and the [`parse_table_str`] helper for format-specific
//! deserialization.

pub mod file_source;

#[cfg(feature = "yaml")]
pub mod yaml;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "toml")]
pub mod toml_source;

use sha2::{Digest, Sha256};

use crate::config::model::RouteTable;
use crate::error::WayfinderError;

/// Parse a route table string based on file extension.
pub fn parse_table_str(
    ext: &str,
    content: &str,
    path_display: &str,
) -> Result<RouteTable, WayfinderError> {
    match ext {
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => serde_yml::from_str(content).map_err(|e| WayfinderError::TableParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "json")]
        "json" => serde_json::from_str(content).map_err(|e| WayfinderError::TableParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "toml")]
        "toml" => toml::from_str(content).map_err(|e| WayfinderError::TableParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        other => Err(WayfinderError::UnsupportedFormat(other.to_string())),
    }
}

/// Compute a lowercase hex-encoded SHA-256 digest.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}
