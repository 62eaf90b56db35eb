//! Unified error types for wayfinder.
//!
//! Defines [`WayfinderError`] (the main crate error enum) and
//! [`ValidationError`] for route-table validation failures. Both use
//! `thiserror` for `Display` and `Error` derives. The routing core has
//! its own narrower error enums ([`PatternError`], [`MatchError`],
//! [`GenerateError`]) which convert into [`WayfinderError`] at the CLI
//! boundary.

use std::path::PathBuf;

use crate::router::{GenerateError, MatchError, PatternError};

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub route: String,
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "  route {}: {}: {}",
            self.route, self.field, self.message
        )?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn format_errors(errors: &[ValidationError]) -> String {
    use std::fmt::Write;
    let mut buf = String::new();
    for (i, e) in errors.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        let _ = write!(buf, "{e}");
    }
    buf
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WayfinderError {
    #[error("No route table found.\n\n  {hint}")]
    NoRouteSource { hint: String },

    #[error("Route table not found: {}", path.display())]
    RouteFileNotFound { path: PathBuf },

    #[error("Route table parse error in {path}:\n  {source}")]
    TableParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Route table validation failed:\n{}", format_errors(.errors))]
    TableValidation { errors: Vec<ValidationError> },

    #[error("Unsupported route table format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),

    #[error("File already exists: {}", path.display())]
    FileExists { path: PathBuf },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pattern(#[from] PatternError),

    #[error("{0}")]
    Match(#[from] MatchError),

    #[error("{0}")]
    Generate(#[from] GenerateError),

    #[error("Invalid parameter '{argument}' (expected key=value)")]
    ParameterSyntax { argument: String },
}
