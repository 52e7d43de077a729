use std::env;

use crate::dispatch::http::DEFAULT_ENDPOINT;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Full chat-completions URL, overridable for proxies and local mocks.
    pub upstream_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("SIFT_BIND_ADDR")
            .or_else(|| var("PORT").map(|port| format!("0.0.0.0:{}", port.trim())))
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let upstream_url = var("SIFT_UPSTREAM_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        ServerConfig {
            bind_addr,
            upstream_url,
        }
    }
}

/// Source of the upstream bearer credential.
/// Consulted on every request so a rotated key takes effect without a restart.
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

/// Reads `OPENAI_API_KEY` from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        env::var(API_KEY_VAR).ok()
    }
}

/// Fixed credential, or none at all.
#[derive(Debug, Default, Clone)]
pub struct StaticCredentials(pub Option<String>);

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}
