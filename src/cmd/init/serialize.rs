//! Serialize a [`RouteTable`] struct to the chosen output format.

use crate::cli::TableFormat;
use crate::config::model::RouteTable;
use crate::error::WayfinderError;

/// Serialize a `RouteTable` to a formatted string in the given format.
pub fn serialize_table(
    table: &RouteTable,
    format: &TableFormat,
) -> Result<String, WayfinderError> {
    match format {
        #[cfg(feature = "yaml")]
        TableFormat::Yaml => serde_yml::to_string(table)
            .map_err(|e| WayfinderError::Io(std::io::Error::other(e.to_string()))),

        #[cfg(not(feature = "yaml"))]
        TableFormat::Yaml => Err(WayfinderError::UnsupportedFormat("yaml".into())),

        TableFormat::Json => serde_json::to_string_pretty(table)
            .map_err(|e| WayfinderError::Io(std::io::Error::other(e.to_string()))),

        #[cfg(feature = "toml")]
        TableFormat::Toml => toml::to_string_pretty(table)
            .map_err(|e| WayfinderError::Io(std::io::Error::other(e.to_string()))),

        #[cfg(not(feature = "toml"))]
        TableFormat::Toml => Err(WayfinderError::UnsupportedFormat("toml".into())),
    }
}
