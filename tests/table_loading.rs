//! Integration tests for route table loading across all file formats.

use wayfinder::config::model::RouteTable;
use wayfinder::config::sources::parse_table_str;
use wayfinder::config::validation::validate;

fn load_example(name: &str) -> String {
    let path = format!("example/{name}");
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_example_loads_and_validates() {
    let content = load_example("wayfinder.yaml");
    let table = parse_table_str("yaml", &content, "wayfinder.yaml").unwrap();
    validate(&table).unwrap();
    assert!(!table.routes.is_empty());
    table.compile().unwrap();
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_full_example_loads_and_validates() {
    let content = load_example("full.yaml");
    let table = parse_table_str("yaml", &content, "full.yaml").unwrap();
    validate(&table).unwrap();
    assert!(table.routes.len() >= 5);

    let router = table.compile().unwrap();
    assert_eq!(
        router.match_request("/archive/2024/06", "GET").unwrap().name,
        "archive"
    );
    assert!(router.match_request("/archive/24/6", "GET").is_err());
}

#[cfg(feature = "json")]
#[test]
fn json_example_loads_and_validates() {
    let content = load_example("wayfinder.json");
    let table = parse_table_str("json", &content, "wayfinder.json").unwrap();
    validate(&table).unwrap();
    assert!(!table.routes.is_empty());
    table.compile().unwrap();
}

#[cfg(feature = "toml")]
#[test]
fn toml_example_loads_and_validates() {
    let content = load_example("wayfinder.toml");
    let table = parse_table_str("toml", &content, "wayfinder.toml").unwrap();
    validate(&table).unwrap();
    assert!(!table.routes.is_empty());
    table.compile().unwrap();
}

#[cfg(all(feature = "yaml", feature = "json", feature = "toml"))]
#[test]
fn all_formats_produce_equivalent_tables() {
    let yaml = parse_table_str("yaml", &load_example("wayfinder.yaml"), "yaml").unwrap();
    let json = parse_table_str("json", &load_example("wayfinder.json"), "json").unwrap();
    let toml = parse_table_str("toml", &load_example("wayfinder.toml"), "toml").unwrap();

    assert_eq!(yaml.routes.len(), json.routes.len());
    assert_eq!(yaml.routes.len(), toml.routes.len());

    for (a, b) in yaml.routes.iter().zip(&json.routes) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.path, b.path);
        assert_eq!(a.requirements, b.requirements);
    }
    for (a, b) in yaml.routes.iter().zip(&toml.routes) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.path, b.path);
        assert_eq!(a.requirements, b.requirements);
    }
}

#[test]
fn unsupported_format_returns_error() {
    let result = parse_table_str("xml", "<routes/>", "test.xml");
    assert!(result.is_err());
}

#[test]
fn empty_route_list_fails_validation() {
    let empty = r#"{"routes": []}"#;
    let table: RouteTable = serde_json::from_str(empty).unwrap();
    assert!(validate(&table).is_err());
}

#[test]
fn duplicate_route_names_fail_validation() {
    let json = r#"{
        "routes": [
            {"name": "home", "path": "/"},
            {"name": "home", "path": "/other"}
        ]
    }"#;
    let table: RouteTable = serde_json::from_str(json).unwrap();
    let errors = validate(&table).unwrap_err();
    assert!(errors.iter().any(|e| e.message.contains("duplicate")));
}

#[test]
fn path_without_leading_slash_gets_suggestion() {
    let json = r#"{"routes": [{"name": "home", "path": "home"}]}"#;
    let table: RouteTable = serde_json::from_str(json).unwrap();
    let errors = validate(&table).unwrap_err();
    assert!(errors.iter().any(|e| e.suggestion.is_some()));
}
