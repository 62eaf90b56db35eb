//! Reverse routing: build a URL from a route name and parameter values.
//!
//! [`UrlGenerator`] substitutes supplied parameters (falling back to the
//! route's defaults) into the path template. Leftover parameters become
//! a percent-encoded query string with keys in sorted order, so output
//! is a pure function of its inputs. With `absolute`, the URL is
//! prefixed with the scheme and host taken from a [`RequestContext`].

use std::collections::HashMap;
use std::fmt::Write;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::collection::RouteCollection;
use super::route::Token;

// Path segments may not contain separators, query/fragment starters, or
// raw template braces.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

// Query keys and values additionally reserve the pair delimiters.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%');

/// Scheme and host of the current request, used for absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    scheme: String,
    host: String,
}

impl RequestContext {
    #[must_use]
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new("http", "localhost")
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateError {
    #[error("no route named '{name}'")]
    NotFound { name: String },

    #[error("route '{name}' requires parameters that were not supplied: {}", missing.join(", "))]
    MissingParameters { name: String, missing: Vec<String> },
}

/// Stateless generation service borrowing a read-only collection.
pub struct UrlGenerator<'c> {
    routes: &'c RouteCollection,
    context: &'c RequestContext,
}

impl<'c> UrlGenerator<'c> {
    #[must_use]
    pub fn new(routes: &'c RouteCollection, context: &'c RequestContext) -> Self {
        Self { routes, context }
    }

    pub fn generate(
        &self,
        name: &str,
        params: &HashMap<String, String>,
        absolute: bool,
    ) -> Result<String, GenerateError> {
        let route = self.routes.get(name).ok_or_else(|| GenerateError::NotFound {
            name: name.to_string(),
        })?;

        let mut url = String::new();
        if absolute {
            let _ = write!(url, "{}://{}", self.context.scheme(), self.context.host());
        }

        // All-or-nothing: collect every unfilled placeholder, then fail with
        // the complete list rather than the first gap.
        let mut missing: Vec<String> = Vec::new();
        for token in route.tokens() {
            match token {
                Token::Literal(text) => url.push_str(text),
                Token::Placeholder(p) => {
                    match params.get(p).or_else(|| route.defaults().get(p)) {
                        Some(value) => {
                            let _ = write!(url, "{}", utf8_percent_encode(value, PATH_SEGMENT));
                        }
                        None => missing.push(p.clone()),
                    }
                }
            }
        }
        if !missing.is_empty() {
            return Err(GenerateError::MissingParameters {
                name: name.to_string(),
                missing,
            });
        }

        // Supplied parameters not consumed by a placeholder become the
        // query string, sorted for deterministic output.
        let mut extras: Vec<(&String, &String)> = params
            .iter()
            .filter(|(key, _)| !route.has_placeholder(key))
            .collect();
        extras.sort_by_key(|(key, _)| key.as_str());

        for (i, (key, value)) in extras.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            let _ = write!(
                url,
                "{}={}",
                utf8_percent_encode(key, QUERY),
                utf8_percent_encode(value, QUERY)
            );
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route::Route;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn blog_routes() -> RouteCollection {
        let mut routes = RouteCollection::new();
        routes.add(
            "post",
            Route::builder("/blog/{slug}")
                .requirement("slug", r"[a-z0-9-]+")
                .build()
                .unwrap(),
        );
        routes.add(
            "archive",
            Route::builder("/archive/{page}")
                .default_value("page", "1")
                .build()
                .unwrap(),
        );
        routes
    }

    #[test]
    fn substitutes_supplied_parameters() {
        let routes = blog_routes();
        let context = RequestContext::default();
        let url = UrlGenerator::new(&routes, &context)
            .generate("post", &params(&[("slug", "hello-world")]), false)
            .unwrap();
        assert_eq!(url, "/blog/hello-world");
    }

    #[test]
    fn falls_back_to_route_defaults() {
        let routes = blog_routes();
        let context = RequestContext::default();
        let url = UrlGenerator::new(&routes, &context)
            .generate("archive", &HashMap::new(), false)
            .unwrap();
        assert_eq!(url, "/archive/1");
    }

    #[test]
    fn explicit_parameter_overrides_default() {
        let routes = blog_routes();
        let context = RequestContext::default();
        let url = UrlGenerator::new(&routes, &context)
            .generate("archive", &params(&[("page", "9")]), false)
            .unwrap();
        assert_eq!(url, "/archive/9");
    }

    #[test]
    fn unknown_route_name_errors() {
        let routes = blog_routes();
        let context = RequestContext::default();
        let err = UrlGenerator::new(&routes, &context)
            .generate("nope", &HashMap::new(), false)
            .unwrap_err();
        assert_eq!(err, GenerateError::NotFound { name: "nope".into() });
    }

    #[test]
    fn missing_parameters_are_reported_together() {
        let mut routes = RouteCollection::new();
        routes.add("pair", Route::new("/{a}/{b}").unwrap());
        let context = RequestContext::default();

        let err = UrlGenerator::new(&routes, &context)
            .generate("pair", &HashMap::new(), false)
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingParameters {
                name: "pair".into(),
                missing: vec!["a".into(), "b".into()],
            }
        );
    }

    #[test]
    fn extras_become_sorted_query_string() {
        let routes = blog_routes();
        let context = RequestContext::default();
        let url = UrlGenerator::new(&routes, &context)
            .generate(
                "post",
                &params(&[("slug", "x"), ("utm", "mail"), ("page", "2")]),
                false,
            )
            .unwrap();
        assert_eq!(url, "/blog/x?page=2&utm=mail");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let routes = blog_routes();
        let context = RequestContext::default();
        let url = UrlGenerator::new(&routes, &context)
            .generate("post", &params(&[("slug", "x"), ("q", "a b&c")]), false)
            .unwrap();
        assert_eq!(url, "/blog/x?q=a%20b%26c");
    }

    #[test]
    fn path_values_are_percent_encoded() {
        let mut routes = RouteCollection::new();
        routes.add("file", Route::new("/files/{name}").unwrap());
        let context = RequestContext::default();

        let url = UrlGenerator::new(&routes, &context)
            .generate("file", &params(&[("name", "a b/c")]), false)
            .unwrap();
        assert_eq!(url, "/files/a%20b%2Fc");
    }

    #[test]
    fn absolute_url_uses_request_context() {
        let routes = blog_routes();
        let context = RequestContext::new("https", "example.com:8443");
        let url = UrlGenerator::new(&routes, &context)
            .generate("post", &params(&[("slug", "x")]), true)
            .unwrap();
        assert_eq!(url, "https://example.com:8443/blog/x");
    }
}
