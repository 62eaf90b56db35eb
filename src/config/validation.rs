//! Route table validation with detailed error reporting.
//!
//! The [`validate`] function checks a parsed [`RouteTable`] for
//! structural errors such as empty tables, duplicate names, paths that
//! fail to compile, requirements on unknown placeholders, and bad HTTP
//! methods. Returns a list of [`ValidationError`] values with per-field
//! suggestions.

use url::Url;

use super::model::RouteTable;
use crate::error::ValidationError;

pub const VALID_METHODS: &[&str] = &[
    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS",
];

/// Validate a single route path. Returns `Ok(())` or a human-readable error.
pub fn validate_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("path cannot be empty".into());
    }
    if !path.starts_with('/') {
        return Err(format!("path must start with '/' (did you mean '/{path}'?)"));
    }
    Ok(())
}

/// Validate an HTTP method string. Returns `Ok(())` or a human-readable error.
pub fn validate_method(method: &str) -> Result<(), String> {
    let upper = method.to_uppercase();
    if VALID_METHODS.contains(&upper.as_str()) {
        Ok(())
    } else {
        Err(format!("'{method}' is not a valid HTTP method"))
    }
}

pub fn validate(table: &RouteTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // The base must form a parseable URL once a path is attached.
    let base_probe = format!("{}://{}/", table.base.scheme, table.base.host);
    if Url::parse(&base_probe).is_err() {
        errors.push(ValidationError {
            route: "(root)".into(),
            field: "base".into(),
            message: format!("'{}://{}' is not a valid base URL", table.base.scheme, table.base.host),
            suggestion: None,
        });
    }

    if table.routes.is_empty() {
        errors.push(ValidationError {
            route: "(root)".into(),
            field: "routes".into(),
            message: "at least one route must be defined".into(),
            suggestion: None,
        });
        return Err(errors);
    }

    let mut seen_names = std::collections::HashSet::new();

    for (i, def) in table.routes.iter().enumerate() {
        let route_id = if def.name.is_empty() {
            format!("routes[{i}]")
        } else {
            def.name.clone()
        };

        if def.name.is_empty() {
            errors.push(ValidationError {
                route: route_id.clone(),
                field: "name".into(),
                message: "route name cannot be empty".into(),
                suggestion: None,
            });
        } else if !seen_names.insert(&def.name) {
            errors.push(ValidationError {
                route: route_id.clone(),
                field: "name".into(),
                message: "duplicate route name (the later definition replaces the earlier one)"
                    .into(),
                suggestion: None,
            });
        }

        if let Err(msg) = validate_path(&def.path) {
            errors.push(ValidationError {
                route: route_id.clone(),
                field: "path".into(),
                message: msg,
                suggestion: if !def.path.is_empty() && !def.path.starts_with('/') {
                    Some(format!("did you mean '/{}'?", def.path))
                } else {
                    None
                },
            });
            continue;
        }

        // Compiling exercises the template parser and every requirement.
        match def.compile() {
            Ok(route) => {
                for key in def.requirements.keys() {
                    if !route.has_placeholder(key) {
                        errors.push(ValidationError {
                            route: route_id.clone(),
                            field: "requirements".into(),
                            message: format!("requirement '{key}' has no matching placeholder"),
                            suggestion: Some(format!("add '{{{key}}}' to the path or remove it")),
                        });
                    }
                }
            }
            Err(e) => {
                errors.push(ValidationError {
                    route: route_id.clone(),
                    field: "path".into(),
                    message: e.to_string(),
                    suggestion: None,
                });
            }
        }

        for method in &def.methods {
            if let Err(msg) = validate_method(method) {
                errors.push(ValidationError {
                    route: route_id.clone(),
                    field: "methods".into(),
                    message: msg,
                    suggestion: None,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[must_use]
pub fn format_validation_report(path: &str, table: &RouteTable) -> String {
    let mut lines = vec![format!("  {} routes\n", table.routes.len())];

    for def in &table.routes {
        let methods = if def.methods.is_empty() {
            "any".to_string()
        } else {
            def.methods.join(", ")
        };

        lines.push(format!("  {}  -> {}", def.name, def.path));
        lines.push(format!("    methods: {methods}"));
        if !def.requirements.is_empty() {
            let mut reqs: Vec<String> = def
                .requirements
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect();
            reqs.sort();
            lines.push(format!("    requirements: {}", reqs.join(", ")));
        }
        if !def.defaults.is_empty() {
            let mut defaults: Vec<String> = def
                .defaults
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            defaults.sort();
            lines.push(format!("    defaults: {}", defaults.join(", ")));
        }
    }

    format!("{} is valid\n{}", path, lines.join("\n"))
}
