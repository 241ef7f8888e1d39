// Startup sequencing: consume-list resolution over a loaded config

use conveyor_core::application::{load_from_str, resolve_consumed};
use conveyor_core::AppError;
use serde_json::json;

#[test]
fn test_consume_list_resolves_after_defaulting() {
    let raw = json!({
        "pipelines": {
            "mail": {"priority": 1},
            "events": {}
        },
        "consume": ["events", "mail"]
    });
    let mut config = load_from_str(&raw.to_string()).unwrap();
    config.init_defaults();

    let resolved = resolve_consumed(&config).unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].string("name", ""), "events");
    assert_eq!(resolved[1].string("name", ""), "mail");
    assert_eq!(resolved[1].int("priority", 10), 1);
}

#[test]
fn test_unknown_consume_entry_fails_fast() {
    let raw = json!({
        "pipelines": {"mail": {}},
        "consume": ["mail", "missing"]
    });
    let mut config = load_from_str(&raw.to_string()).unwrap();
    config.init_defaults();

    let err = resolve_consumed(&config).unwrap_err();
    assert!(matches!(err, AppError::UnknownPipeline(ref name) if name == "missing"));
    assert_eq!(
        err.to_string(),
        "Unknown pipeline in consume list: missing"
    );
}
