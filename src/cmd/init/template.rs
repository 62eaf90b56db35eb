//! Static starter templates for each route table format.

use std::path::PathBuf;

use crate::cli::{InitArgs, TableFormat};
use crate::error::WayfinderError;

pub fn run(args: &InitArgs) -> Result<(), WayfinderError> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("wayfinder.{}", args.format.extension())));

    if output.exists() {
        return Err(WayfinderError::FileExists { path: output });
    }

    let content = match (&args.format, args.full) {
        (TableFormat::Yaml, false) => YAML_MINIMAL,
        (TableFormat::Yaml, true) => YAML_FULL,
        (TableFormat::Json, false) => JSON_MINIMAL,
        (TableFormat::Json, true) => JSON_FULL,
        (TableFormat::Toml, false) => TOML_MINIMAL,
        (TableFormat::Toml, true) => TOML_FULL,
    };

    std::fs::write(&output, content)?;
    println!("Created {}", output.display());
    Ok(())
}

const YAML_MINIMAL: &str = r#"# Wayfinder route table

routes:
  - name: home
    path: "/"
"#;

const YAML_FULL: &str = r#"# Wayfinder route table
#
# Each route maps a name to a path template. Placeholders like {id}
# capture one path segment; requirements constrain them with a regex
# fragment; defaults fill them at generation time.

# Scheme and host used when generating absolute URLs (wayfinder url --absolute)
base:
  scheme: "http"
  host: "localhost:3000"

routes:
  # Simple: a literal path, any method
  - name: home
    path: "/"

  # Full: all options shown
  - name: product
    path: "/products/{id}"
    methods: ["GET"]            # Default: any method
    requirements:
      id: '\d+'                 # {id} must be numeric
    defaults:
      format: "html"            # Merged into match results; fills
                                # generation when no value is supplied

  # Two names may share a path with different methods; a request with
  # a third method gets 405 listing GET and POST together.
  - name: order_show
    path: "/orders/{id}"
    methods: ["GET"]
  - name: order_update
    path: "/orders/{id}"
    methods: ["POST"]
"#;

const JSON_MINIMAL: &str = r#"{
  "routes": [
    { "name": "home", "path": "/" }
  ]
}
"#;

const JSON_FULL: &str = r#"{
  "base": {
    "scheme": "http",
    "host": "localhost:3000"
  },
  "routes": [
    { "name": "home", "path": "/" },
    {
      "name": "product",
      "path": "/products/{id}",
      "methods": ["GET"],
      "requirements": { "id": "\\d+" },
      "defaults": { "format": "html" }
    }
  ]
}
"#;

const TOML_MINIMAL: &str = r#"# Wayfinder route table

[[routes]]
name = "home"
path = "/"
"#;

const TOML_FULL: &str = r#"# Wayfinder route table
#
# Each route maps a name to a path template. Placeholders like {id}
# capture one path segment.

[base]
scheme = "http"
host = "localhost:3000"

[[routes]]
name = "home"
path = "/"

[[routes]]
name = "product"
path = "/products/{id}"
methods = ["GET"]

[routes.requirements]
id = '\d+'

[routes.defaults]
format = "html"
"#;
