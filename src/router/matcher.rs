//! Linear-scan request matching over a [`RouteCollection`].
//!
//! Routes are tried in registration order and the first one whose path
//! and method both match wins. The matcher distinguishes two failure
//! kinds so the HTTP layer can answer 404 vs 405: if any route's path
//! matched but its method list did not, the result is
//! [`MatchError::MethodNotAllowed`] carrying the union of allowed
//! methods across every path-matching route.

use std::collections::HashMap;

use super::collection::RouteCollection;

/// A successful match: the resolved route name plus the extracted
/// parameters (captures merged over the route's defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: String,
    pub params: HashMap<String, String>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    #[error("no route matches '{path}'")]
    NotFound { path: String },

    #[error("method {method} not allowed for '{path}' (allowed: {})", allowed.join(", "))]
    MethodNotAllowed {
        path: String,
        method: String,
        allowed: Vec<String>,
    },
}

/// Stateless matching service borrowing a read-only collection.
pub struct UrlMatcher<'c> {
    routes: &'c RouteCollection,
}

impl<'c> UrlMatcher<'c> {
    #[must_use]
    pub fn new(routes: &'c RouteCollection) -> Self {
        Self { routes }
    }

    pub fn match_request(&self, path: &str, method: &str) -> Result<RouteMatch, MatchError> {
        // Methods allowed by routes whose path matched but method did not.
        let mut allowed: Vec<String> = Vec::new();

        for (name, route) in self.routes.iter() {
            let Some(params) = route.match_path(path) else {
                continue;
            };

            if route.allows(method) {
                return Ok(RouteMatch {
                    name: name.to_string(),
                    params,
                });
            }

            for m in route.methods() {
                if !allowed.contains(m) {
                    allowed.push(m.clone());
                }
            }
        }

        if allowed.is_empty() {
            Err(MatchError::NotFound {
                path: path.to_string(),
            })
        } else {
            Err(MatchError::MethodNotAllowed {
                path: path.to_string(),
                method: method.to_uppercase(),
                allowed,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route::Route;

    fn collection(routes: &[(&str, &str, &[&str])]) -> RouteCollection {
        let mut collection = RouteCollection::new();
        for (name, path, methods) in routes {
            let route = Route::builder(*path).methods(methods.iter()).build().unwrap();
            collection.add(*name, route);
        }
        collection
    }

    #[test]
    fn first_registered_route_wins_on_identical_paths() {
        let routes = collection(&[("early", "/dup", &[]), ("late", "/dup", &[])]);
        let matched = UrlMatcher::new(&routes).match_request("/dup", "GET").unwrap();
        assert_eq!(matched.name, "early");
    }

    #[test]
    fn scan_continues_past_method_mismatch() {
        let routes = collection(&[
            ("read", "/orders", &["GET"]),
            ("write", "/orders", &["POST"]),
        ]);
        let matcher = UrlMatcher::new(&routes);

        assert_eq!(matcher.match_request("/orders", "GET").unwrap().name, "read");
        assert_eq!(matcher.match_request("/orders", "POST").unwrap().name, "write");
    }

    #[test]
    fn method_not_allowed_aggregates_across_routes() {
        let routes = collection(&[
            ("read", "/x", &["GET"]),
            ("write", "/x", &["POST"]),
            ("other", "/y", &["DELETE"]),
        ]);
        let err = UrlMatcher::new(&routes)
            .match_request("/x", "DELETE")
            .unwrap_err();

        assert_eq!(
            err,
            MatchError::MethodNotAllowed {
                path: "/x".into(),
                method: "DELETE".into(),
                allowed: vec!["GET".into(), "POST".into()],
            }
        );
    }

    #[test]
    fn no_path_match_is_not_found() {
        let routes = collection(&[("orders", "/orders", &["GET"])]);
        let err = UrlMatcher::new(&routes)
            .match_request("/products", "GET")
            .unwrap_err();
        assert_eq!(
            err,
            MatchError::NotFound {
                path: "/products".into()
            }
        );
    }

    #[test]
    fn params_include_route_defaults() {
        let mut routes = RouteCollection::new();
        routes.add(
            "blog",
            Route::builder("/blog/{page}")
                .default_value("format", "html")
                .build()
                .unwrap(),
        );

        let matched = UrlMatcher::new(&routes).match_request("/blog/3", "GET").unwrap();
        assert_eq!(matched.params["page"], "3");
        assert_eq!(matched.params["format"], "html");
    }

    #[test]
    fn requirement_failure_falls_through_to_not_found() {
        let mut routes = RouteCollection::new();
        routes.add(
            "product",
            Route::builder("/products/{id}")
                .requirement("id", r"\d+")
                .build()
                .unwrap(),
        );
        let matcher = UrlMatcher::new(&routes);

        assert_eq!(
            matcher.match_request("/products/42", "GET").unwrap().params["id"],
            "42"
        );
        assert!(matches!(
            matcher.match_request("/products/abc", "GET").unwrap_err(),
            MatchError::NotFound { .. }
        ));
    }

    #[test]
    fn empty_collection_is_not_found() {
        let routes = RouteCollection::new();
        assert!(matches!(
            UrlMatcher::new(&routes).match_request("/anything", "GET").unwrap_err(),
            MatchError::NotFound { .. }
        ));
    }
}
