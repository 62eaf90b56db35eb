//! Insertion-ordered mapping from route name to [`Route`].
//!
//! Iteration order is registration order, which is what gives the
//! matcher its first-registered-wins tie-break. Re-adding an existing
//! name replaces the route in place without moving it.

use std::collections::HashMap;

use super::route::Route;

#[derive(Debug, Default, Clone)]
pub struct RouteCollection {
    entries: Vec<(String, Route)>,
    index: HashMap<String, usize>,
}

impl RouteCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a named route. New names append; an existing
    /// name keeps its original position.
    pub fn add(&mut self, name: impl Into<String>, route: Route) {
        let name = name.into();
        if let Some(&position) = self.index.get(&name) {
            self.entries[position].1 = route;
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push((name, route));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    /// Ordered `(name, route)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.entries.iter().map(|(name, route)| (name.as_str(), route))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut routes = RouteCollection::new();
        routes.add("c", Route::new("/c").unwrap());
        routes.add("a", Route::new("/a").unwrap());
        routes.add("b", Route::new("/b").unwrap());

        let names: Vec<&str> = routes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut routes = RouteCollection::new();
        routes.add("first", Route::new("/one").unwrap());
        routes.add("second", Route::new("/two").unwrap());
        routes.add("first", Route::new("/replaced").unwrap());

        assert_eq!(routes.len(), 2);
        let names: Vec<&str> = routes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(routes.get("first").unwrap().path(), "/replaced");
    }

    #[test]
    fn get_unknown_name_is_none() {
        let routes = RouteCollection::new();
        assert!(routes.get("missing").is_none());
        assert!(routes.is_empty());
    }
}
