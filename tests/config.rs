use std::collections::HashMap;

use sift::config::{CredentialSource, DEFAULT_BIND_ADDR, ServerConfig, StaticCredentials};
use sift::dispatch::http::DEFAULT_ENDPOINT;

fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.upstream_url, DEFAULT_ENDPOINT);
}

#[test]
fn port_binds_all_interfaces() {
    let config = config_from(&[("PORT", "8080")]);
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
}

#[test]
fn explicit_bind_addr_wins_over_port() {
    let config = config_from(&[("PORT", "8080"), ("SIFT_BIND_ADDR", "127.0.0.1:9000")]);
    assert_eq!(config.bind_addr, "127.0.0.1:9000");
}

#[test]
fn blank_values_count_as_unset() {
    let config = config_from(&[("SIFT_BIND_ADDR", "  "), ("SIFT_UPSTREAM_URL", "")]);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.upstream_url, DEFAULT_ENDPOINT);
}

#[test]
fn upstream_url_override() {
    let config = config_from(&[("SIFT_UPSTREAM_URL", "http://localhost:4010/v1/chat/completions")]);
    assert_eq!(config.upstream_url, "http://localhost:4010/v1/chat/completions");
}

#[test]
fn static_credentials() {
    assert_eq!(StaticCredentials::new("sk-1").api_key().as_deref(), Some("sk-1"));
    assert_eq!(StaticCredentials::missing().api_key(), None);
}
