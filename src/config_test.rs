use super::*;

// =============================================================
// AssistantConfig defaults
// =============================================================

#[test]
fn default_config_points_at_local_backend() {
    let config = AssistantConfig::default();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.endpoint, "http://127.0.0.1:8000/chat");
}

#[test]
fn explicit_endpoint_is_preserved() {
    let config = AssistantConfig {
        endpoint: "https://rover.example/chat".to_owned(),
    };
    assert_eq!(config.endpoint, "https://rover.example/chat");
}
