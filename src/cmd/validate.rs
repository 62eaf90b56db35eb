//! `wayfinder validate`: check a route table file for errors.
//!
//! Parses and validates the table, reporting results in either
//! human-readable text or machine-readable JSON format.

use crate::cli::{OutputFormat, ValidateArgs};
use crate::config::sources::parse_table_str;
use crate::config::validation;
use crate::error::WayfinderError;

pub fn execute(args: &ValidateArgs) -> Result<(), WayfinderError> {
    let path = &args.routes;

    if !path.exists() {
        return Err(WayfinderError::RouteFileNotFound { path: path.clone() });
    }

    let content = std::fs::read_to_string(path)?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let table = parse_table_str(ext, &content, &path.display().to_string())?;

    if let Err(errors) = validation::validate(&table) {
        match args.format {
            OutputFormat::Text => {
                eprintln!("\u{2717} {} has {} errors\n", path.display(), errors.len());
                for error in &errors {
                    eprintln!("{error}");
                }
            }
            OutputFormat::Json => {
                let json_errors: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "route": e.route,
                            "field": e.field,
                            "message": e.message,
                            "suggestion": e.suggestion,
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "valid": false,
                        "errors": json_errors,
                    })
                );
            }
        }
        return Err(WayfinderError::TableValidation { errors });
    }

    match args.format {
        OutputFormat::Text => {
            println!(
                "\u{2713} {}",
                validation::format_validation_report(&path.display().to_string(), &table)
            );
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "valid": true,
                    "routes": table.routes.len(),
                })
            );
        }
    }

    Ok(())
}
