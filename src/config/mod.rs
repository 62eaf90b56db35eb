//! Route table loading and validation.
//!
//! Defines the [`RouteSource`] trait for pluggable table backends and
//! the [`TableVersion`] enum for change detection during hot reloads.
//! Submodules provide the data model, validation logic, and the
//! format-specific file sources.

pub mod model;
pub mod sources;
pub mod validation;

use async_trait::async_trait;

use crate::error::WayfinderError;
use model::RouteTable;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableVersion {
    Hash(String),
}

// async_trait is required here because RouteSource is used as Box<dyn RouteSource>
// and native async fn in traits (Rust 1.75+) does not support dyn dispatch.
#[async_trait]
pub trait RouteSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn load(&self) -> Result<(RouteTable, TableVersion), WayfinderError>;
    async fn has_changed(&self, current: &TableVersion) -> Result<bool, WayfinderError>;
}
