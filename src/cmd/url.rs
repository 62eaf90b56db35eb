//! `wayfinder url`: generate a URL for a named route.
//!
//! Parses `key=value` arguments into a parameter map and runs the
//! generator once. Parameters not consumed by a placeholder end up in
//! the query string; `--absolute` prefixes the table's base URL.

use std::collections::HashMap;

use crate::cli::{OutputFormat, UrlArgs};
use crate::error::WayfinderError;

pub fn execute(args: &UrlArgs) -> Result<(), WayfinderError> {
    let (table, _) = super::load_table(args.routes.as_deref())?;
    let router = table.compile()?;

    let mut params = HashMap::new();
    for argument in &args.params {
        let Some((key, value)) = argument.split_once('=') else {
            return Err(WayfinderError::ParameterSyntax {
                argument: argument.clone(),
            });
        };
        params.insert(key.to_string(), value.to_string());
    }

    match router.generate(&args.name, &params, args.absolute) {
        Ok(url) => {
            match args.format {
                OutputFormat::Text => println!("{url}"),
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::json!({
                            "route": args.name,
                            "url": url,
                        })
                    );
                }
            }
            Ok(())
        }
        Err(err) => {
            match args.format {
                OutputFormat::Text => eprintln!("\u{2717} {err}"),
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::json!({
                            "route": args.name,
                            "error": err.to_string(),
                        })
                    );
                }
            }
            Err(err.into())
        }
    }
}
