use std::fs;
use std::time::Duration;

use civic_core::config::{resolve_with_base, Config};
use civic_core::types::{Category, CategoryAssignment, IssueTopic};
use civic_core::Error;
use tempfile::TempDir;

fn pothole() -> IssueTopic {
    IssueTopic {
        id: "roads-pothole".to_string(),
        title: "Pothole on road".to_string(),
        keywords: vec!["pothole".to_string(), "road".to_string(), "hole".to_string()],
        department: "Roads & Transport".to_string(),
        department_head: "Dana Whitfield".to_string(),
        department_email: "roads@council.example".to_string(),
        category: Category::Roads,
        description: "Holes or broken surface on a public road".to_string(),
    }
}

#[test]
fn category_parses_case_insensitively() {
    assert_eq!("Lighting".parse::<Category>().expect("parse"), Category::Lighting);
    assert_eq!(" graffiti ".parse::<Category>().expect("parse"), Category::Graffiti);
    assert!(matches!("potholes".parse::<Category>(), Err(Error::InvalidCategory(_))));
    for c in Category::ALL {
        assert_eq!(c.to_string().parse::<Category>().expect("round trip"), c);
    }
}

#[test]
fn topic_accepts_camel_and_snake_case_contact_fields() {
    let camel = r#"{"id":"a","title":"A","department":"D","departmentHead":"H","departmentEmail":"e@x","category":"parks"}"#;
    let topic: IssueTopic = serde_json::from_str(camel).expect("camelCase");
    assert_eq!(topic.department_head, "H");
    assert!(topic.keywords.is_empty());
    assert!(topic.description.is_empty());

    let snake = r#"{"id":"a","title":"A","department":"D","department_head":"H","department_email":"e@x","category":"noise"}"#;
    let topic: IssueTopic = serde_json::from_str(snake).expect("snake_case");
    assert_eq!(topic.department_email, "e@x");
    assert_eq!(topic.category, Category::Noise);
}

#[test]
fn assignment_is_a_projection_of_the_topic() {
    let topic = pothole();
    let assignment = CategoryAssignment::from(&topic);
    assert_eq!(assignment.department, topic.department);
    assert_eq!(assignment.department_head, topic.department_head);
    assert_eq!(assignment.department_email, topic.department_email);
    assert_eq!(assignment.category, Category::Roads);

    let json = serde_json::to_value(&assignment).expect("json");
    assert_eq!(json["departmentHead"], "Dana Whitfield");
    assert_eq!(json["category"], "roads");
}

#[test]
fn config_defaults_without_files() {
    let tmp = TempDir::new().expect("tempdir");
    let config = Config::load_from_dir(tmp.path(), "dev").expect("load");
    let settings = config.settings().expect("settings");
    assert_eq!(settings.search.default_limit, 10);
    assert_eq!(settings.search.max_limit, 100);
    assert_eq!(settings.search.timeout(), Some(Duration::from_millis(2000)));
    assert_eq!(settings.ui.min_query_len, 2);
    assert_eq!(config.catalog_path().expect("path"), tmp.path().join("data/topics.toml"));
}

#[test]
fn env_file_overrides_base_file() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(tmp.path().join("config.toml"), "[search]\ndefault_limit = 5\nlatency_ms = 40\n").expect("write");
    fs::write(tmp.path().join("config.prod.toml"), "[search]\nlatency_ms = 0\ntimeout_ms = 0\n").expect("write");

    let dev = Config::load_from_dir(tmp.path(), "dev").expect("dev").settings().expect("settings");
    assert_eq!(dev.search.default_limit, 5);
    assert_eq!(dev.search.latency(), Duration::from_millis(40));

    let prod = Config::load_from_dir(tmp.path(), "prod").expect("prod").settings().expect("settings");
    assert_eq!(prod.search.default_limit, 5);
    assert_eq!(prod.search.latency(), Duration::ZERO);
    assert_eq!(prod.search.timeout(), None);
}

#[test]
fn invalid_limits_are_rejected() {
    let tmp = TempDir::new().expect("tempdir");
    let err = Config::from_toml_str("[search]\ndefault_limit = 50\nmax_limit = 20\n", tmp.path())
        .err()
        .expect("must fail");
    assert!(matches!(err, Error::InvalidConfig(_)));

    let err = Config::from_toml_str("[search]\ndefault_limit = 0\n", tmp.path()).err().expect("must fail");
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn keyed_lookup_reads_nested_values() {
    let tmp = TempDir::new().expect("tempdir");
    let config = Config::from_toml_str("[catalog]\npath = \"/srv/topics\"\n", tmp.path()).expect("config");
    let path: String = config.get("catalog.path").expect("get");
    assert_eq!(path, "/srv/topics");
    assert_eq!(config.catalog_path().expect("path"), std::path::PathBuf::from("/srv/topics"));
}

#[test]
fn resolve_keeps_absolute_and_joins_relative() {
    let base = std::path::Path::new("/etc/civic");
    assert_eq!(resolve_with_base(base, "/abs/x.toml"), std::path::PathBuf::from("/abs/x.toml"));
    assert_eq!(resolve_with_base(base, "rel/x.toml"), base.join("rel/x.toml"));
}
