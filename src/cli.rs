//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, init, validate, match, url, health), and their
//! associated argument structs. Every flag has an environment variable
//! equivalent for container deployments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "wayfinder",
    version,
    about = "Named-route URL matching and generation toolkit",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        wayfinder init                       Create a starter route table\n  \
        wayfinder match /products/42         Resolve a path against ./wayfinder.yaml\n  \
        wayfinder url product id=42          Generate a URL from a route name\n  \
        wayfinder run                        Serve the table over HTTP"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the route table over HTTP
    Run(RunArgs),

    /// Generate a starter route table file
    Init(InitArgs),

    /// Validate a route table file without serving
    Validate(ValidateArgs),

    /// Match a path and method against the route table
    #[command(name = "match")]
    Match(MatchArgs),

    /// Generate a URL for a named route
    Url(UrlArgs),

    /// Check health of a running instance
    Health(HealthArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        wayfinder run                                Auto-detect route table\n  \
        wayfinder run -r routes.yaml                 Specific route table\n  \
        wayfinder run -r routes.yaml -p 8080 --pretty    Local dev mode")]
pub struct RunArgs {
    /// Route table file path (.yaml, .json, .toml)
    #[arg(short, long, env = "ROUTES_FILE")]
    pub routes: Option<PathBuf>,

    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    // -- Tuning --
    /// Per-request handler timeout in milliseconds
    #[arg(
        long,
        env = "REQUEST_TIMEOUT_MS",
        default_value_t = 5000,
        help_heading = "Tuning"
    )]
    pub timeout: u64,

    /// Route table refresh interval in seconds
    #[arg(
        long,
        env = "POLL_INTERVAL_SECS",
        default_value_t = 30,
        help_heading = "Tuning"
    )]
    pub poll_interval: u64,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        wayfinder init                          Quick start table (yaml)\n  \
        wayfinder init -i                       Interactive wizard\n  \
        wayfinder init -f toml -o routes.toml   Non-interactive, TOML format")]
pub struct InitArgs {
    /// Output format
    #[arg(short, long, default_value = "yaml")]
    pub format: TableFormat,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include full documentation as comments (non-interactive only)
    #[arg(long, conflicts_with = "interactive")]
    pub full: bool,

    /// Launch interactive wizard to build the table step by step
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Route table file to validate
    #[arg(default_value = "wayfinder.yaml")]
    pub routes: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        wayfinder match /products/42                 GET by default\n  \
        wayfinder match /products/42 -X DELETE       Other methods\n  \
        wayfinder match /orders --format json        Machine-readable output")]
pub struct MatchArgs {
    /// Request path to resolve
    pub path: String,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Route table file path (.yaml, .json, .toml)
    #[arg(short, long, env = "ROUTES_FILE")]
    pub routes: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        wayfinder url product id=42                  Relative URL\n  \
        wayfinder url product id=42 page=2           Extras become the query string\n  \
        wayfinder url product id=42 --absolute       Prefix scheme and host")]
pub struct UrlArgs {
    /// Route name to generate a URL for
    pub name: String,

    /// Parameters as key=value pairs
    pub params: Vec<String>,

    /// Produce an absolute URL (scheme and host from the table's base)
    #[arg(short, long)]
    pub absolute: bool,

    /// Route table file path (.yaml, .json, .toml)
    #[arg(short, long, env = "ROUTES_FILE")]
    pub routes: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:3000")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum TableFormat {
    Yaml,
    Json,
    Toml,
}

impl TableFormat {
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
