//! The routing core: compiled routes, the ordered collection, and the
//! matching/generation services.
//!
//! [`Router`] is the facade most callers want: it owns a
//! [`RouteCollection`] and a [`RequestContext`] and exposes
//! [`match_request`](Router::match_request) and
//! [`generate`](Router::generate). The underlying services
//! ([`UrlMatcher`], [`UrlGenerator`]) borrow the collection and can be
//! used standalone.

pub mod collection;
pub mod generator;
pub mod matcher;
pub mod route;

use std::collections::HashMap;

pub use collection::RouteCollection;
pub use generator::{GenerateError, RequestContext, UrlGenerator};
pub use matcher::{MatchError, RouteMatch, UrlMatcher};
pub use route::{PatternError, Route, RouteBuilder};

/// Facade combining a route collection with matching and generation.
#[derive(Debug, Clone)]
pub struct Router {
    routes: RouteCollection,
    context: RequestContext,
}

impl Router {
    #[must_use]
    pub fn new(routes: RouteCollection) -> Self {
        Self::with_context(routes, RequestContext::default())
    }

    #[must_use]
    pub fn with_context(routes: RouteCollection, context: RequestContext) -> Self {
        Self { routes, context }
    }

    /// Resolve a request path and method to a named route and its
    /// extracted parameters.
    pub fn match_request(&self, path: &str, method: &str) -> Result<RouteMatch, MatchError> {
        UrlMatcher::new(&self.routes).match_request(path, method)
    }

    /// Build a URL for a named route from the supplied parameters.
    pub fn generate(
        &self,
        name: &str,
        params: &HashMap<String, String>,
        absolute: bool,
    ) -> Result<String, GenerateError> {
        UrlGenerator::new(&self.routes, &self.context).generate(name, params, absolute)
    }

    #[must_use]
    pub fn routes(&self) -> &RouteCollection {
        &self.routes
    }

    #[must_use]
    pub fn context(&self) -> &RequestContext {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Router {
        let mut routes = RouteCollection::new();
        routes.add(
            "product",
            Route::builder("/products/{id}")
                .requirement("id", r"\d+")
                .methods(["GET"])
                .build()
                .unwrap(),
        );
        Router::new(routes)
    }

    #[test]
    fn facade_matches_and_generates() {
        let router = sample();

        let matched = router.match_request("/products/42", "GET").unwrap();
        assert_eq!(matched.name, "product");

        let url = router.generate("product", &matched.params, false).unwrap();
        assert_eq!(url, "/products/42");
    }

    #[test]
    fn matched_params_round_trip_through_generation() {
        let router = sample();

        let matched = router.match_request("/products/7", "GET").unwrap();
        let url = router.generate("product", &matched.params, false).unwrap();
        let rematched = router.match_request(&url, "GET").unwrap();

        assert_eq!(rematched.params, matched.params);
    }
}
