#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Endpoint used when the host does not supply one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/chat";

/// Widget configuration, injected by the host at construction.
///
/// The host passes the backend endpoint explicitly; build-time environment
/// plumbing is its concern, not this crate's. `Default` falls back to the
/// local development backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    /// URL of the assistant chat endpoint.
    pub endpoint: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}
