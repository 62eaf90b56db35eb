//! Wayfinder is a named-route URL matching and generation toolkit.
//!
//! A declarative route table maps names to path templates with
//! `{placeholder}` segments, per-placeholder regex requirements, default
//! parameter values, and allowed HTTP methods. The routing core matches
//! incoming paths against the table (first registered wins) and
//! generates URLs back from route names, with the 404/405 distinction
//! surfaced as two separate failure kinds.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, init, validate,
//!   match, url, health).
//! - [`config`] -- Route table loading and validation via the
//!   [`RouteSource`](config::RouteSource) trait.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`health`] -- `GET /health` endpoint handler returning runtime diagnostics.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`resolve`] -- The HTTP resolution handler mapping match failures to
//!   404 / 405 (with `Allow` header).
//! - [`router`] -- The routing core: [`Route`](router::Route) compilation,
//!   the ordered [`RouteCollection`](router::RouteCollection), the
//!   [`UrlMatcher`](router::UrlMatcher) / [`UrlGenerator`](router::UrlGenerator)
//!   services, and the [`Router`](router::Router) facade.
//! - [`server`] -- Axum server setup, shared application state, and
//!   graceful shutdown.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `yaml` | YAML route table support _(enabled by default)_ |
//! | `json` | JSON route table support |
//! | `toml` | TOML route table support |
//! | `file-backends` | All file format backends |
//! | `full` | All features |

// Binary crate: public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod resolve;
pub mod router;
pub mod server;
