//! A single named URL pattern compiled to an anchored regex.
//!
//! [`Route`] holds a path template (`/products/{id}`), optional default
//! parameter values, per-placeholder requirement fragments, and an
//! allowed-method list. The template is compiled once, at construction,
//! into a [`Regex`] with one named capture group per placeholder. A
//! placeholder without a requirement matches one or more non-separator
//! characters (`[^/]+`).

use std::collections::HashMap;

use regex::Regex;

/// Errors raised while compiling a path template.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PatternError {
    #[error("placeholder '{{{name}}}' appears more than once in '{path}'")]
    DuplicatePlaceholder { path: String, name: String },

    #[error("invalid placeholder name '{name}' in '{path}' (expected [A-Za-z_][A-Za-z0-9_]*)")]
    InvalidPlaceholder { path: String, name: String },

    #[error("unbalanced braces in '{path}'")]
    UnbalancedBrace { path: String },

    #[error("requirement for '{name}' is not a valid regex: {source}")]
    BadRequirement {
        name: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("requirement for '{name}' must be an unanchored fragment (no '^' or '$')")]
    AnchoredRequirement { name: String },

    #[error("compiled pattern rejected: {source}")]
    Pattern {
        #[source]
        source: Box<regex::Error>,
    },
}

/// One parsed piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    tokens: Vec<Token>,
    placeholders: Vec<String>,
    defaults: HashMap<String, String>,
    requirements: HashMap<String, String>,
    methods: Vec<String>,
    pattern: Regex,
}

impl Route {
    /// Start building a route for the given path template.
    pub fn builder(path: impl Into<String>) -> RouteBuilder {
        RouteBuilder {
            path: path.into(),
            defaults: HashMap::new(),
            requirements: HashMap::new(),
            methods: Vec::new(),
        }
    }

    /// Compile a bare path template with no defaults, requirements, or
    /// method restrictions.
    pub fn new(path: impl Into<String>) -> Result<Self, PatternError> {
        Self::builder(path).build()
    }

    /// Match a request path against the compiled pattern.
    ///
    /// On success returns the extracted placeholder values merged over the
    /// configured defaults (a captured value wins over a default). Method
    /// filtering is the matcher's job, not handled here.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let captures = self.pattern.captures(path)?;

        let mut params = self.defaults.clone();
        for name in &self.placeholders {
            if let Some(value) = captures.name(name) {
                params.insert(name.clone(), value.as_str().to_string());
            }
        }
        Some(params)
    }

    /// Whether the route accepts the given HTTP method. An empty method
    /// list accepts everything.
    #[must_use]
    pub fn allows(&self, method: &str) -> bool {
        self.methods.is_empty() || self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Placeholder names in the order they appear in the template.
    #[must_use]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    #[must_use]
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders.iter().any(|p| p == name)
    }

    #[must_use]
    pub fn defaults(&self) -> &HashMap<String, String> {
        &self.defaults
    }

    #[must_use]
    pub fn requirements(&self) -> &HashMap<String, String> {
        &self.requirements
    }

    /// Allowed methods, uppercased. Empty means unrestricted.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub(crate) fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

pub struct RouteBuilder {
    path: String,
    defaults: HashMap<String, String>,
    requirements: HashMap<String, String>,
    methods: Vec<String>,
}

impl RouteBuilder {
    /// Set a default value for a placeholder (or an extra parameter).
    #[must_use]
    pub fn default_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    /// Constrain a placeholder with a regex fragment, e.g. `\d+`.
    #[must_use]
    pub fn requirement(mut self, name: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.requirements.insert(name.into(), fragment.into());
        self
    }

    /// Restrict the route to the given HTTP method. May be called multiple
    /// times; methods are stored uppercased.
    #[must_use]
    pub fn method(mut self, method: impl AsRef<str>) -> Self {
        let upper = method.as_ref().to_uppercase();
        if !self.methods.contains(&upper) {
            self.methods.push(upper);
        }
        self
    }

    #[must_use]
    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for method in methods {
            self = self.method(method);
        }
        self
    }

    /// Parse the template and compile the matching regex.
    pub fn build(self) -> Result<Route, PatternError> {
        let tokens = tokenize(&self.path)?;

        let mut placeholders = Vec::new();
        let mut pattern = String::from("^");
        for token in &tokens {
            match token {
                Token::Literal(text) => pattern.push_str(&regex::escape(text)),
                Token::Placeholder(name) => {
                    if placeholders.contains(name) {
                        return Err(PatternError::DuplicatePlaceholder {
                            path: self.path,
                            name: name.clone(),
                        });
                    }
                    let fragment = match self.requirements.get(name) {
                        Some(fragment) => {
                            check_requirement(name, fragment)?;
                            fragment.as_str()
                        }
                        None => "[^/]+",
                    };
                    pattern.push_str(&format!("(?P<{name}>{fragment})"));
                    placeholders.push(name.clone());
                }
            }
        }
        pattern.push('$');

        let pattern = Regex::new(&pattern).map_err(|e| PatternError::Pattern {
            source: Box::new(e),
        })?;

        Ok(Route {
            path: self.path,
            tokens,
            placeholders,
            defaults: self.defaults,
            requirements: self.requirements,
            methods: self.methods,
            pattern,
        })
    }
}

/// Split a path template into literal and placeholder tokens.
fn tokenize(path: &str) -> Result<Vec<Token>, PatternError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = path.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => {
                            return Err(PatternError::UnbalancedBrace {
                                path: path.to_string(),
                            })
                        }
                        Some(c) => name.push(c),
                    }
                }
                if !is_valid_placeholder(&name) {
                    return Err(PatternError::InvalidPlaceholder {
                        path: path.to_string(),
                        name,
                    });
                }
                tokens.push(Token::Placeholder(name));
            }
            '}' => {
                return Err(PatternError::UnbalancedBrace {
                    path: path.to_string(),
                })
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

fn is_valid_placeholder(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A requirement must compile on its own and must not carry anchors,
/// which would break the route-level `^...$` anchoring.
fn check_requirement(name: &str, fragment: &str) -> Result<(), PatternError> {
    if fragment.starts_with('^') || (fragment.ends_with('$') && !fragment.ends_with("\\$")) {
        return Err(PatternError::AnchoredRequirement {
            name: name.to_string(),
        });
    }
    Regex::new(fragment).map_err(|e| PatternError::BadRequirement {
        name: name.to_string(),
        source: Box::new(e),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_path_matches_exactly() {
        let route = Route::new("/orders").unwrap();
        assert!(route.match_path("/orders").is_some());
        assert!(route.match_path("/orders/").is_none());
        assert!(route.match_path("/order").is_none());
    }

    #[test]
    fn placeholder_captures_segment() {
        let route = Route::new("/orders/{id}").unwrap();
        let params = route.match_path("/orders/42").unwrap();
        assert_eq!(params["id"], "42");
        assert!(route.match_path("/orders/42/items").is_none());
    }

    #[test]
    fn requirement_restricts_capture() {
        let route = Route::builder("/products/{id}")
            .requirement("id", r"\d+")
            .build()
            .unwrap();
        assert_eq!(route.match_path("/products/42").unwrap()["id"], "42");
        assert!(route.match_path("/products/abc").is_none());
    }

    #[test]
    fn defaults_merge_under_captures() {
        let route = Route::builder("/blog/{page}")
            .default_value("page", "1")
            .default_value("format", "html")
            .build()
            .unwrap();
        let params = route.match_path("/blog/7").unwrap();
        assert_eq!(params["page"], "7");
        assert_eq!(params["format"], "html");
    }

    #[test]
    fn method_list_is_uppercased_and_deduplicated() {
        let route = Route::builder("/x")
            .method("get")
            .method("GET")
            .method("post")
            .build()
            .unwrap();
        assert_eq!(route.methods(), ["GET", "POST"]);
        assert!(route.allows("get"));
        assert!(route.allows("POST"));
        assert!(!route.allows("DELETE"));
    }

    #[test]
    fn empty_method_list_allows_everything() {
        let route = Route::new("/x").unwrap();
        assert!(route.allows("GET"));
        assert!(route.allows("PATCH"));
    }

    #[test]
    fn duplicate_placeholder_is_rejected() {
        let err = Route::new("/a/{id}/b/{id}").unwrap_err();
        assert!(matches!(err, PatternError::DuplicatePlaceholder { .. }));
    }

    #[test]
    fn unbalanced_braces_are_rejected() {
        assert!(matches!(
            Route::new("/a/{id").unwrap_err(),
            PatternError::UnbalancedBrace { .. }
        ));
        assert!(matches!(
            Route::new("/a/id}").unwrap_err(),
            PatternError::UnbalancedBrace { .. }
        ));
    }

    #[test]
    fn invalid_placeholder_name_is_rejected() {
        assert!(matches!(
            Route::new("/a/{1st}").unwrap_err(),
            PatternError::InvalidPlaceholder { .. }
        ));
        assert!(matches!(
            Route::new("/a/{}").unwrap_err(),
            PatternError::InvalidPlaceholder { .. }
        ));
    }

    #[test]
    fn anchored_requirement_is_rejected() {
        let err = Route::builder("/p/{id}")
            .requirement("id", r"^\d+")
            .build()
            .unwrap_err();
        assert!(matches!(err, PatternError::AnchoredRequirement { .. }));
    }

    #[test]
    fn bad_requirement_regex_is_rejected() {
        let err = Route::builder("/p/{id}")
            .requirement("id", r"[unclosed")
            .build()
            .unwrap_err();
        assert!(matches!(err, PatternError::BadRequirement { .. }));
    }

    #[test]
    fn literal_regex_metacharacters_are_escaped() {
        let route = Route::new("/v1.0/items").unwrap();
        assert!(route.match_path("/v1.0/items").is_some());
        assert!(route.match_path("/v1x0/items").is_none());
    }

    #[test]
    fn multiple_placeholders_in_one_segment() {
        let route = Route::new("/archive/{year}-{month}").unwrap();
        let params = route.match_path("/archive/2024-06").unwrap();
        assert_eq!(params["year"], "2024");
        assert_eq!(params["month"], "06");
    }
}
