//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`], [`init`], [`validate`], [`match_route`],
//! [`url`], or [`health`]. Each handler lives in its own submodule.

pub mod health;
pub mod init;
pub mod match_route;
pub mod run;
pub mod url;
pub mod validate;

use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands};
use crate::config::model::RouteTable;
use crate::config::sources::parse_table_str;
use crate::config::validation;
use crate::error::WayfinderError;

/// File names probed, in order, when no route table is given explicitly.
pub(crate) const TABLE_CANDIDATES: &[&str] = &[
    "wayfinder.yaml",
    "wayfinder.yml",
    "wayfinder.json",
    "wayfinder.toml",
];

pub async fn dispatch(cli: Cli) -> Result<(), WayfinderError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(args).await,
        Some(Commands::Init(ref args)) => init::execute(args),
        Some(Commands::Validate(ref args)) => validate::execute(args),
        Some(Commands::Match(ref args)) => match_route::execute(args),
        Some(Commands::Url(ref args)) => url::execute(args),
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  wayfinder v{version} \u{2014} named-route URL matching and generation\n\n  \
         No command provided. To get started:\n\n    \
         wayfinder init                    Generate a starter route table\n    \
         wayfinder match /some/path       Resolve a path (auto-detects ./wayfinder.yaml)\n    \
         wayfinder url <route> k=v        Generate a URL for a named route\n    \
         wayfinder run                     Serve the route table over HTTP\n    \
         wayfinder --help                  See all commands and options\n"
    );
}

/// Synchronous table loading for the one-shot commands (match, url,
/// validate stays with its own reporting). Resolves the explicit path or
/// probes [`TABLE_CANDIDATES`], then parses and validates.
pub(crate) fn load_table(explicit: Option<&Path>) -> Result<(RouteTable, PathBuf), WayfinderError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => TABLE_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
            .ok_or_else(|| WayfinderError::NoRouteSource {
                hint: "Provide --routes <file> or create one of wayfinder.{yaml,json,toml}.\n  \
                       Run 'wayfinder init' to create a route table."
                    .into(),
            })?,
    };

    if !path.exists() {
        return Err(WayfinderError::RouteFileNotFound { path });
    }

    let content = std::fs::read_to_string(&path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let table = parse_table_str(ext, &content, &path.display().to_string())?;

    if let Err(errors) = validation::validate(&table) {
        return Err(WayfinderError::TableValidation { errors });
    }

    Ok((table, path))
}
