//! Generic async file-based route source with SHA-256 change detection.
//!
//! [`FileSource`] implements [`RouteSource`] for any file format by
//! accepting a deserialization function at construction time. It reads
//! the file asynchronously via Tokio, validates the parsed table, and
//! computes a SHA-256 hash for version tracking.

use std::path::PathBuf;

use async_trait::async_trait;

use super::sha256_hex;
use crate::config::model::RouteTable;
use crate::config::validation::validate;
use crate::config::{RouteSource, TableVersion};
use crate::error::WayfinderError;

pub struct FileSource {
    path: PathBuf,
    name: &'static str,
    deserialize: fn(&str) -> Result<RouteTable, Box<dyn std::error::Error + Send + Sync>>,
}

impl FileSource {
    #[must_use]
    pub fn new(
        path: PathBuf,
        name: &'static str,
        deserialize: fn(&str) -> Result<RouteTable, Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            path,
            name,
            deserialize,
        }
    }

    async fn read_content(&self) -> Result<String, WayfinderError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WayfinderError::RouteFileNotFound {
                    path: self.path.clone(),
                }
            } else {
                WayfinderError::Io(e)
            }
        })
    }
}

#[async_trait]
impl RouteSource for FileSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn load(&self) -> Result<(RouteTable, TableVersion), WayfinderError> {
        let content = self.read_content().await?;

        let table = (self.deserialize)(&content).map_err(|e| WayfinderError::TableParse {
            path: self.path.display().to_string(),
            source: e,
        })?;

        if let Err(errors) = validate(&table) {
            return Err(WayfinderError::TableValidation { errors });
        }

        let hash = sha256_hex(content.as_bytes());
        Ok((table, TableVersion::Hash(hash)))
    }

    async fn has_changed(&self, current: &TableVersion) -> Result<bool, WayfinderError> {
        let content = self.read_content().await?;
        let hash = sha256_hex(content.as_bytes());
        Ok(*current != TableVersion::Hash(hash))
    }
}
