//! Client configuration.

/// Default registration name to look the service up under.
pub const DEFAULT_SERVICE_NAME: &str = logmux_proto::SERVICE_NAME;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Name the service is registered under in the service directory.
    pub service_name: String,

    /// Client identifier for server-side tracking and log correlation.
    pub client_id: String,
}

impl ClientConfig {
    /// Create a configuration binding the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            client_id: generate_client_id(),
        }
    }

    /// Set the client identifier.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_NAME)
    }
}

/// Generate a unique client identifier.
fn generate_client_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    format!("client-{:x}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
        assert!(config.client_id.starts_with("client-"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("test.LogService").with_client_id("my-client");

        assert_eq!(config.service_name, "test.LogService");
        assert_eq!(config.client_id, "my-client");
    }
}
