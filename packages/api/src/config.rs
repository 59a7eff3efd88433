//! # Client configuration: `studymap.toml`
//!
//! Chooses the base endpoint of the remote study service. A page served from
//! a local development host talks to the local endpoint; anything else talks
//! to production.
//!
//! ```toml
//! local_endpoint = "http://localhost:8080"
//! production_endpoint = "https://api.studymap.app"
//! local_hosts = ["localhost", "127.0.0.1"]
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

/// Endpoint selection for the remote service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint used when the page is served from a local development host.
    #[serde(default = "default_local_endpoint")]
    pub local_endpoint: String,
    /// Endpoint used everywhere else.
    #[serde(default = "default_production_endpoint")]
    pub production_endpoint: String,
    /// Hostnames considered local development hosts.
    #[serde(default = "default_local_hosts")]
    pub local_hosts: Vec<String>,
}

fn default_local_endpoint() -> String {
    "http://localhost:8080".to_string()
}

fn default_production_endpoint() -> String {
    "https://api.studymap.app".to_string()
}

fn default_local_hosts() -> Vec<String> {
    vec!["localhost".to_string(), "127.0.0.1".to_string()]
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            local_endpoint: default_local_endpoint(),
            production_endpoint: default_production_endpoint(),
            local_hosts: default_local_hosts(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "studymap.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn is_local_host(&self, host: &str) -> bool {
        self.local_hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
    }

    /// Endpoint to use for a page served from `host`.
    pub fn endpoint_for_host(&self, host: &str) -> &str {
        if self.is_local_host(host) {
            &self.local_endpoint
        } else {
            &self.production_endpoint
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_endpoint_for_host() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint_for_host("localhost"), "http://localhost:8080");
        assert_eq!(config.endpoint_for_host("127.0.0.1"), "http://localhost:8080");
        assert_eq!(config.endpoint_for_host("studymap.app"), "https://api.studymap.app");
    }

    #[test]
    fn test_partial_override() {
        let config = ClientConfig::from_toml(
            r#"
            production_endpoint = "https://study.example.org"
            local_hosts = ["dev.local"]
            "#,
        )
        .unwrap();
        assert_eq!(config.local_endpoint, "http://localhost:8080");
        assert_eq!(config.endpoint_for_host("DEV.local"), "http://localhost:8080");
        assert_eq!(config.endpoint_for_host("localhost"), "https://study.example.org");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
