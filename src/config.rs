use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the `EMOTION_`
/// prefix. For example: `EMOTION_SERVER__PORT=5000`, `EMOTION_WATSON__URL=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Remote emotion-classification endpoint configuration
    #[serde(default)]
    pub watson: WatsonConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatsonConfig {
    /// Full URL of the EmotionPredict endpoint
    #[serde(default = "default_watson_url")]
    pub url: String,

    /// Model identifier sent in the `grpc-metadata-mm-model-id` header
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
}

impl Default for WatsonConfig {
    fn default() -> Self {
        Self {
            url: default_watson_url(),
            model_id: default_model_id(),
            timeout_s: default_timeout_s(),
        }
    }
}

fn default_watson_url() -> String {
    "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict"
        .to_string()
}

fn default_model_id() -> String {
    "emotion_aggregated-workflow_lang_en_stock".to_string()
}

fn default_timeout_s() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `EMOTION_` and use
    /// double underscores for nested values:
    /// - `EMOTION_WATSON__URL` -> watson.url
    /// - `EMOTION_WATSON__MODEL_ID` -> watson.model_id
    /// - `EMOTION_SERVER__PORT` -> server.port
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("EMOTION")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.watson.url.ends_with("/EmotionPredict"));
        assert_eq!(
            config.watson.model_id,
            "emotion_aggregated-workflow_lang_en_stock"
        );
        assert_eq!(config.watson.timeout_s, 10);
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        let addr = server.socket_addr();
        assert_eq!(addr.port(), 5000);
    }
}
