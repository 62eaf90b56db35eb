//! Integration tests for URL generation.

use std::collections::HashMap;

use wayfinder::router::{GenerateError, RequestContext, Route, RouteCollection, Router};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn shop_router() -> Router {
    let mut routes = RouteCollection::new();
    routes.add(
        "product",
        Route::builder("/products/{id}")
            .requirement("id", r"\d+")
            .build()
            .unwrap(),
    );
    routes.add(
        "listing",
        Route::builder("/products/{category}/{page}")
            .default_value("page", "1")
            .build()
            .unwrap(),
    );
    Router::with_context(routes, RequestContext::new("https", "shop.example"))
}

#[test]
fn generates_relative_url_from_parameters() {
    let router = shop_router();
    let url = router.generate("product", &params(&[("id", "42")]), false).unwrap();
    assert_eq!(url, "/products/42");
}

#[test]
fn missing_mandatory_parameter_is_named() {
    let router = shop_router();
    let err = router.generate("product", &HashMap::new(), false).unwrap_err();
    assert_eq!(
        err,
        GenerateError::MissingParameters {
            name: "product".into(),
            missing: vec!["id".into()],
        }
    );
}

#[test]
fn defaults_fill_unsupplied_placeholders() {
    let router = shop_router();
    let url = router
        .generate("listing", &params(&[("category", "books")]), false)
        .unwrap();
    assert_eq!(url, "/products/books/1");
}

#[test]
fn unknown_route_name_is_reported() {
    let router = shop_router();
    assert_eq!(
        router.generate("checkout", &HashMap::new(), false).unwrap_err(),
        GenerateError::NotFound {
            name: "checkout".into()
        }
    );
}

#[test]
fn leftover_parameters_become_query_string() {
    let router = shop_router();
    let url = router
        .generate(
            "product",
            &params(&[("id", "42"), ("ref", "mail"), ("page", "2")]),
            false,
        )
        .unwrap();
    // Extras sorted by key for deterministic output.
    assert_eq!(url, "/products/42?page=2&ref=mail");
}

#[test]
fn absolute_flag_prefixes_scheme_and_host() {
    let router = shop_router();
    let url = router.generate("product", &params(&[("id", "42")]), true).unwrap();
    assert_eq!(url, "https://shop.example/products/42");
}

#[test]
fn generation_is_deterministic() {
    let router = shop_router();
    let input = params(&[("id", "42"), ("b", "2"), ("a", "1"), ("c", "3")]);
    let first = router.generate("product", &input, false).unwrap();
    for _ in 0..10 {
        assert_eq!(router.generate("product", &input, false).unwrap(), first);
    }
}

#[test]
fn all_missing_placeholders_reported_together() {
    let mut routes = RouteCollection::new();
    routes.add("pair", Route::new("/{a}/{b}").unwrap());
    let router = Router::new(routes);
    let err = router.generate("pair", &HashMap::new(), false).unwrap_err();
    assert_eq!(
        err,
        GenerateError::MissingParameters {
            name: "pair".into(),
            missing: vec!["a".into(), "b".into()],
        }
    );
}
