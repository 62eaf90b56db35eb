//! Interactive wizard for step-by-step route table generation.

use std::collections::HashMap;
use std::path::PathBuf;

use console::style;
use dialoguer::{Confirm, Input, Select};

use crate::cli::{InitArgs, TableFormat};
use crate::config::model::{BaseUrl, RouteDef, RouteTable};
use crate::config::validation::{validate, validate_method, validate_path};
use crate::error::WayfinderError;
use crate::router::Route;

use super::serialize::serialize_table;

/// Map a `dialoguer::Error` to a `WayfinderError`.
fn map_prompt_err(e: dialoguer::Error) -> WayfinderError {
    WayfinderError::Io(std::io::Error::other(e.to_string()))
}

pub fn run(args: &InitArgs) -> Result<(), WayfinderError> {
    // Ensure we're running in an interactive terminal
    if !console::Term::stdout().is_term() {
        return Err(WayfinderError::Io(std::io::Error::other(
            "interactive mode requires a terminal (TTY). Use wayfinder init without -i for non-interactive mode.",
        )));
    }

    println!(
        "\n  {} Route Table Wizard\n  {}\n",
        style("Wayfinder").cyan().bold(),
        style("─────────────────────────").dim()
    );

    // Step 1: Output settings
    println!("  {}\n", style("Step 1: Output").bold());
    let format = prompt_format(args)?;
    let output = prompt_output(args, &format)?;

    // Step 2: Base URL
    println!("\n  {}\n", style("Step 2: Base URL").bold());
    let base = prompt_base()?;

    // Step 3: Routes
    println!("\n  {}\n", style("Step 3: Routes").bold());
    let routes = prompt_routes()?;

    let table = RouteTable { base, routes };

    // Validate the assembled table
    if let Err(errors) = validate(&table) {
        eprintln!(
            "\n  {} Route table has validation errors:",
            style("!").red().bold()
        );
        for e in &errors {
            eprintln!("    {e}");
        }
        return Err(WayfinderError::TableValidation { errors });
    }

    // Step 4: Review
    println!("\n  {}\n", style("Step 4: Review").bold());
    print_summary(&table, &format, &output);

    let confirm = Confirm::new()
        .with_prompt(format!("Write route table to {}?", output.display()))
        .default(true)
        .interact()
        .map_err(map_prompt_err)?;

    if !confirm {
        println!("  Aborted.");
        return Ok(());
    }

    // Handle existing file
    if output.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", output.display()))
            .default(false)
            .interact()
            .map_err(map_prompt_err)?;
        if !overwrite {
            println!("  Aborted.");
            return Ok(());
        }
    }

    let content = serialize_table(&table, &format)?;
    std::fs::write(&output, content)?;
    println!(
        "\n  {} Created {}",
        style("✓").green().bold(),
        output.display()
    );
    Ok(())
}

fn prompt_format(args: &InitArgs) -> Result<TableFormat, WayfinderError> {
    let formats = &["yaml", "json", "toml"];
    let default_idx = match args.format {
        TableFormat::Yaml => 0,
        TableFormat::Json => 1,
        TableFormat::Toml => 2,
    };

    let selection = Select::new()
        .with_prompt("Route table format")
        .items(formats)
        .default(default_idx)
        .interact()
        .map_err(map_prompt_err)?;

    Ok(match selection {
        0 => TableFormat::Yaml,
        1 => TableFormat::Json,
        2 => TableFormat::Toml,
        _ => unreachable!(),
    })
}

fn prompt_output(args: &InitArgs, format: &TableFormat) -> Result<PathBuf, WayfinderError> {
    let default_path = args.output.as_ref().map_or_else(
        || format!("wayfinder.{}", format.extension()),
        |p| p.display().to_string(),
    );

    let path_str: String = Input::new()
        .with_prompt("Output file path")
        .default(default_path)
        .interact_text()
        .map_err(map_prompt_err)?;

    Ok(PathBuf::from(path_str))
}

fn prompt_base() -> Result<BaseUrl, WayfinderError> {
    let scheme: String = Input::new()
        .with_prompt("Scheme for absolute URLs")
        .default("http".to_string())
        .interact_text()
        .map_err(map_prompt_err)?;

    let host: String = Input::new()
        .with_prompt("Host for absolute URLs")
        .default("localhost".to_string())
        .interact_text()
        .map_err(map_prompt_err)?;

    Ok(BaseUrl { scheme, host })
}

fn prompt_routes() -> Result<Vec<RouteDef>, WayfinderError> {
    let mut routes = Vec::new();

    loop {
        println!("  {}", style(format!("Route #{}", routes.len() + 1)).bold());

        let name: String = Input::new()
            .with_prompt("Route name")
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err("name cannot be empty".into())
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(map_prompt_err)?;

        let path: String = Input::new()
            .with_prompt("Path template (e.g. /products/{id})")
            .validate_with(|input: &String| -> Result<(), String> {
                validate_path(input)?;
                Route::new(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(map_prompt_err)?;

        let methods = prompt_methods()?;

        // Path validity was checked by the prompt above.
        let (requirements, defaults) = match Route::new(&path) {
            Ok(route) => prompt_placeholders(route.placeholders())?,
            Err(_) => (HashMap::new(), HashMap::new()),
        };

        routes.push(RouteDef {
            name,
            path,
            methods,
            defaults,
            requirements,
        });

        let another = Confirm::new()
            .with_prompt("Add another route?")
            .default(false)
            .interact()
            .map_err(map_prompt_err)?;
        if !another {
            break;
        }
        println!();
    }

    Ok(routes)
}

fn prompt_methods() -> Result<Vec<String>, WayfinderError> {
    let raw: String = Input::new()
        .with_prompt("Allowed methods, comma-separated (empty = any)")
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            for method in input.split(',').map(str::trim).filter(|m| !m.is_empty()) {
                validate_method(method)?;
            }
            Ok(())
        })
        .interact_text()
        .map_err(map_prompt_err)?;

    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_uppercase)
        .collect())
}

#[allow(clippy::type_complexity)]
fn prompt_placeholders(
    placeholders: &[String],
) -> Result<(HashMap<String, String>, HashMap<String, String>), WayfinderError> {
    let mut requirements = HashMap::new();
    let mut defaults = HashMap::new();

    for placeholder in placeholders {
        let requirement: String = Input::new()
            .with_prompt(format!(
                "Requirement regex for {{{placeholder}}} (empty = any segment)"
            ))
            .allow_empty(true)
            .interact_text()
            .map_err(map_prompt_err)?;
        if !requirement.trim().is_empty() {
            requirements.insert(placeholder.clone(), requirement.trim().to_string());
        }

        let default: String = Input::new()
            .with_prompt(format!("Default value for {{{placeholder}}} (empty = none)"))
            .allow_empty(true)
            .interact_text()
            .map_err(map_prompt_err)?;
        if !default.trim().is_empty() {
            defaults.insert(placeholder.clone(), default.trim().to_string());
        }
    }

    Ok((requirements, defaults))
}

fn print_summary(table: &RouteTable, format: &TableFormat, output: &std::path::Path) {
    println!(
        "  format: {}    output: {}",
        format.extension(),
        output.display()
    );
    println!("  base:   {}://{}", table.base.scheme, table.base.host);
    println!("  routes:");
    for def in &table.routes {
        let methods = if def.methods.is_empty() {
            "any".to_string()
        } else {
            def.methods.join(", ")
        };
        println!("    {}  {}  [{}]", def.name, def.path, methods);
    }
}
