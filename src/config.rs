//! Server configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Runtime settings for the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (from TODO_API_HOST)
    pub host: IpAddr,
    /// Listen port (from PORT)
    pub port: u16,
    /// Directory served for paths no route matches (from TODO_API_STATIC_DIR)
    pub static_dir: PathBuf,
    /// Whether `/` returns the built-in todo page (from TODO_API_EMBEDDED_INDEX)
    pub embedded_index: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT value: {}", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        let host = match lookup("TODO_API_HOST") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid TODO_API_HOST value: {}", raw);
                defaults.host
            }),
            None => defaults.host,
        };

        let static_dir = lookup("TODO_API_STATIC_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let embedded_index = lookup("TODO_API_EMBEDDED_INDEX")
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.embedded_index);

        Self {
            host,
            port,
            static_dir,
            embedded_index,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn with_embedded_index(mut self, enabled: bool) -> Self {
        self.embedded_index = enabled;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            embedded_index: true,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_port_from_env() {
        let config = load(&[("PORT", "8080")]);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = load(&[("PORT", "eighty")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn reads_host_and_static_dir() {
        let config = load(&[
            ("TODO_API_HOST", "127.0.0.1"),
            ("TODO_API_STATIC_DIR", "/srv/todo"),
        ]);
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.static_dir, PathBuf::from("/srv/todo"));
    }

    #[test]
    fn embedded_index_can_be_disabled() {
        assert!(!load(&[("TODO_API_EMBEDDED_INDEX", "off")]).embedded_index);
        assert!(!load(&[("TODO_API_EMBEDDED_INDEX", "0")]).embedded_index);
        assert!(load(&[("TODO_API_EMBEDDED_INDEX", "yes")]).embedded_index);
    }

    #[test]
    fn builder_overrides_replace_env_values() {
        let config = load(&[("PORT", "8080")])
            .with_port(9000)
            .with_embedded_index(false);
        assert_eq!(config.port, 9000);
        assert!(!config.embedded_index);
    }
}
