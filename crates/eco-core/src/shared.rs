//! Shared types used by the gateway and console add-ons.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Error text returned to the caller when a message is empty or whitespace-only.
pub const EMPTY_MESSAGE_ERROR: &str = "Message cannot be empty.";

/// Suggested starter questions offered by the chat surfaces.
pub const QUICK_QUESTIONS: [&str; 6] = [
    "What services does ECO Matrix offer?",
    "How does the platform work?",
    "Tell me about the company",
    "How can I contact ECO Matrix?",
    "What are the benefits of using ECO Matrix?",
    "What is energy modeling?",
];

/// Trims a user message and rejects it when nothing is left.
pub fn validate_message(message: &str) -> Result<&str, CoreError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(EMPTY_MESSAGE_ERROR.to_string()));
    }
    Ok(trimmed)
}

/// Global application configuration (gateway + assistant identity). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Assistant identity shown by the status endpoint and console banner.
    pub app_name: String,
    /// Interface the gateway binds to.
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// When set, greeting/farewell phrasing is drawn from an RNG seeded with this value.
    #[serde(default)]
    pub phrase_seed: Option<u64>,
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `ECO__*` > `ECO_CONFIG` path > `config/gateway.toml` > defaults.
    pub fn load() -> Result<Self, CoreError> {
        let config_path = std::env::var("ECO_CONFIG").unwrap_or_else(|_| "config/gateway.toml".to_string());
        Self::load_from(&config_path)
    }

    /// Same as [`CoreConfig::load`] with an explicit file path. A missing file is skipped.
    pub fn load_from<P: AsRef<Path>>(config_path: P) -> Result<Self, CoreError> {
        Self::load_layered(config_path.as_ref(), "ECO")
    }

    fn load_layered(path: &Path, env_prefix: &str) -> Result<Self, CoreError> {
        let builder = config::Config::builder()
            .set_default("app_name", "ECO Matrix AI Assistant")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000_i64)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
            .build()?;

        Ok(built.try_deserialize()?)
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message_trims() {
        assert_eq!(validate_message("  hello \n").unwrap(), "hello");
    }

    #[test]
    fn test_validate_message_rejects_blank() {
        for input in ["", "   ", "\t\n"] {
            let err = validate_message(input).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
            assert_eq!(err.to_string(), EMPTY_MESSAGE_ERROR);
        }
    }

    #[test]
    fn test_load_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.app_name, "ECO Matrix AI Assistant");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.phrase_seed, None);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_load_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(
            &path,
            "app_name = \"Staging Assistant\"\nport = 8123\nphrase_seed = 42\n",
        )
        .unwrap();

        let config = CoreConfig::load_from(&path).unwrap();
        assert_eq!(config.app_name, "Staging Assistant");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8123);
        assert_eq!(config.phrase_seed, Some(42));
    }

    #[test]
    fn test_load_rejects_bad_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(&path, "port = \"not-a-port\"\n").unwrap();

        let err = CoreConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_load_env_overrides_file() {
        // Own prefix so parallel tests loading with `ECO` never see these variables.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(&path, "app_name = \"From File\"\nport = 8123\nphrase_seed = 1\n").unwrap();

        std::env::set_var("ECOENVTEST__PORT", "8080");
        std::env::set_var("ECOENVTEST__PHRASE_SEED", "42");
        let loaded = CoreConfig::load_layered(&path, "ECOENVTEST");
        std::env::remove_var("ECOENVTEST__PORT");
        std::env::remove_var("ECOENVTEST__PHRASE_SEED");

        let config = loaded.unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.phrase_seed, Some(42));
        assert_eq!(config.app_name, "From File");
        assert_eq!(config.host, "0.0.0.0");
    }
}
