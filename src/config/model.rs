//! Serde data structures for the wayfinder route table file.
//!
//! Contains [`RouteTable`] (the root), [`RouteDef`], and [`BaseUrl`].
//! All types derive `Serialize` and `Deserialize` with
//! `deny_unknown_fields` for strict parsing. A parsed table is turned
//! into a compiled [`Router`] with [`RouteTable::compile`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::router::{PatternError, RequestContext, Route, RouteCollection, Router};

fn default_scheme() -> String {
    "http".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteTable {
    #[serde(default, skip_serializing_if = "BaseUrl::is_default")]
    pub base: BaseUrl,

    pub routes: Vec<RouteDef>,
}

/// Scheme and host prepended to generated absolute URLs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BaseUrl {
    #[serde(default = "default_scheme")]
    pub scheme: String,

    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
        }
    }
}

impl BaseUrl {
    fn is_default(&self) -> bool {
        self.scheme == default_scheme() && self.host == default_host()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDef {
    /// Unique route name, used for lookup and URL generation.
    pub name: String,

    /// Path template with `{placeholder}` segments.
    pub path: String,

    /// Allowed HTTP methods. Empty means any method.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,

    /// Parameter values used when a placeholder is absent at generation
    /// time (and merged into match results).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub defaults: HashMap<String, String>,

    /// Per-placeholder regex fragments, e.g. `id: '\d+'`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub requirements: HashMap<String, String>,
}

impl RouteDef {
    /// Compile this definition into a [`Route`].
    pub fn compile(&self) -> Result<Route, PatternError> {
        let mut builder = Route::builder(&self.path).methods(&self.methods);
        for (name, value) in &self.defaults {
            builder = builder.default_value(name, value);
        }
        for (name, fragment) in &self.requirements {
            builder = builder.requirement(name, fragment);
        }
        builder.build()
    }
}

impl RouteTable {
    /// Compile every definition, in file order, into a [`Router`].
    pub fn compile(&self) -> Result<Router, PatternError> {
        let mut collection = RouteCollection::new();
        for def in &self.routes {
            collection.add(&def.name, def.compile()?);
        }
        let context = RequestContext::new(&self.base.scheme, &self.base.host);
        Ok(Router::with_context(collection, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_table_compiles() {
        let table: RouteTable = serde_json::from_str(
            r#"{"routes": [{"name": "home", "path": "/"}]}"#,
        )
        .unwrap();
        let router = table.compile().unwrap();
        assert_eq!(router.routes().len(), 1);
        assert_eq!(router.match_request("/", "GET").unwrap().name, "home");
    }

    #[test]
    fn base_url_flows_into_request_context() {
        let table: RouteTable = serde_json::from_str(
            r#"{
                "base": {"scheme": "https", "host": "example.org"},
                "routes": [{"name": "home", "path": "/"}]
            }"#,
        )
        .unwrap();
        let router = table.compile().unwrap();
        let url = router
            .generate("home", &HashMap::new(), true)
            .unwrap();
        assert_eq!(url, "https://example.org/");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<RouteTable, _> = serde_json::from_str(
            r#"{"routes": [{"name": "x", "path": "/x", "target": "oops"}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn bad_requirement_surfaces_as_pattern_error() {
        let table: RouteTable = serde_json::from_str(
            r#"{"routes": [{"name": "p", "path": "/p/{id}", "requirements": {"id": "["}}]}"#,
        )
        .unwrap();
        assert!(table.compile().is_err());
    }
}
