//! Client configuration model, defaults and TOML loading.

use std::path::Path;
use std::time::Duration;

use crate::error::{Result, Ws2Error};

/// Public MusicBrainz WS2 root.
pub const DEFAULT_ROOT_URL: &str = "https://musicbrainz.org/ws/2";

/// Root configuration, usually read from a `mbws2.toml` file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_root_url")]
    pub root_url: String,
    /// Identification sent as `User-Agent`.
    #[serde(default)]
    pub client: ClientInfo,
    /// HTTP agent timeouts.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Application identity sent with every request.
///
/// MusicBrainz asks for a meaningful value here: application name, version and
/// a contact URL or e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ClientInfo {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_io_timeout_secs")]
    pub read_timeout_secs: u64,
    #[serde(default = "default_io_timeout_secs")]
    pub write_timeout_secs: u64,
}

fn default_root_url() -> String {
    DEFAULT_ROOT_URL.to_string()
}

fn default_app_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_io_timeout_secs() -> u64 {
    15
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
            client: ClientInfo::default(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            version: default_app_version(),
            contact: String::new(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_io_timeout_secs(),
            write_timeout_secs: default_io_timeout_secs(),
        }
    }
}

impl ClientInfo {
    pub fn new(
        app_name: impl Into<String>,
        version: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            version: version.into(),
            contact: contact.into(),
        }
    }

    /// `<app>/<version> ( <contact> )`
    pub fn user_agent(&self) -> String {
        format!("{}/{} ( {} )", self.app_name, self.version, self.contact)
    }
}

impl HttpConfig {
    /// Builds the blocking agent used for every search request.
    pub fn build_agent(&self) -> ureq::Agent {
        ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(self.connect_timeout_secs))
            .timeout_read(Duration::from_secs(self.read_timeout_secs))
            .timeout_write(Duration::from_secs(self.write_timeout_secs))
            .build()
    }
}

impl ClientConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| Ws2Error::Config(format!("invalid config: {err}")))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| Ws2Error::Config(format!("failed to read {}: {err}", path.display())))?;
        Self::from_toml_str(&raw)
            .map_err(|err| Ws2Error::Config(format!("{}: {err}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientConfig, ClientInfo, HttpConfig, DEFAULT_ROOT_URL};
    use crate::error::Ws2Error;

    #[test]
    fn test_default_config_has_expected_values() {
        let config = ClientConfig::default();

        assert_eq!(config.root_url, DEFAULT_ROOT_URL);
        assert_eq!(config.client.app_name, "musicbrainz-ws2");
        assert_eq!(config.client.version, env!("CARGO_PKG_VERSION"));
        assert!(config.client.contact.is_empty());
        assert_eq!(config.http.connect_timeout_secs, 5);
        assert_eq!(config.http.read_timeout_secs, 15);
        assert_eq!(config.http.write_timeout_secs, 15);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed = ClientConfig::from_toml_str(
            r#"
[client]
app_name = "testapp"
contact = "test@example.com"

[http]
read_timeout_secs = 30
"#,
        )
        .expect("config should parse");

        assert_eq!(parsed.root_url, DEFAULT_ROOT_URL);
        assert_eq!(parsed.client.app_name, "testapp");
        assert_eq!(parsed.client.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(parsed.http.read_timeout_secs, 30);
        assert_eq!(parsed.http.connect_timeout_secs, 5);
    }

    #[test]
    fn test_empty_config_equals_default() {
        let parsed = ClientConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(parsed, ClientConfig::default());
        assert_eq!(parsed.http, HttpConfig::default());
    }

    #[test]
    fn test_invalid_config_reports_config_error() {
        let error = ClientConfig::from_toml_str("root_url = 5").expect_err("wrong type");
        assert!(matches!(error, Ws2Error::Config(_)));
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let error = ClientConfig::load(std::path::Path::new("/nonexistent/mbws2.toml"))
            .expect_err("file does not exist");
        assert!(error.to_string().contains("/nonexistent/mbws2.toml"));
    }

    #[test]
    fn test_user_agent_format() {
        let info = ClientInfo::new("testapp", "1.0", "test@example.com");
        assert_eq!(info.user_agent(), "testapp/1.0 ( test@example.com )");
    }
}
