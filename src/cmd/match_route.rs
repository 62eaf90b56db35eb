//! `wayfinder match`: resolve a path and method against a route table.
//!
//! Compiles the table, runs the matcher once, and prints the resolved
//! route name and extracted parameters. The two failure kinds are
//! reported distinctly: no path match, or a path match whose method
//! list rejects the request (with the aggregated allowed methods).

use crate::cli::{MatchArgs, OutputFormat};
use crate::error::WayfinderError;
use crate::router::MatchError;

pub fn execute(args: &MatchArgs) -> Result<(), WayfinderError> {
    let (table, _) = super::load_table(args.routes.as_deref())?;
    let router = table.compile()?;

    match router.match_request(&args.path, &args.method) {
        Ok(matched) => {
            match args.format {
                OutputFormat::Text => {
                    println!(
                        "\u{2713} {} {} -> {}",
                        args.method.to_uppercase(),
                        args.path,
                        matched.name
                    );
                    let mut params: Vec<(&String, &String)> = matched.params.iter().collect();
                    params.sort_by_key(|(key, _)| key.as_str());
                    for (key, value) in params {
                        println!("    {key} = {value}");
                    }
                }
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::json!({
                            "matched": true,
                            "route": matched.name,
                            "params": matched.params,
                        })
                    );
                }
            }
            Ok(())
        }
        Err(err) => {
            match args.format {
                OutputFormat::Text => match &err {
                    MatchError::NotFound { path } => {
                        eprintln!("\u{2717} no route matches '{path}'");
                    }
                    MatchError::MethodNotAllowed { path, method, allowed } => {
                        eprintln!(
                            "\u{2717} '{path}' matched, but not with {method} (allowed: {})",
                            allowed.join(", ")
                        );
                    }
                },
                OutputFormat::Json => {
                    let allowed = match &err {
                        MatchError::MethodNotAllowed { allowed, .. } => Some(allowed.clone()),
                        MatchError::NotFound { .. } => None,
                    };
                    println!(
                        "{}",
                        serde_json::json!({
                            "matched": false,
                            "error": err.to_string(),
                            "allowed": allowed,
                        })
                    );
                }
            }
            Err(err.into())
        }
    }
}
