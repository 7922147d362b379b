//! Configuration loading and validation.
//!
//! Action vocabularies and rosters change season to season, so they are
//! injected here rather than hard-coded anywhere near the aggregation
//! engine.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Team configuration: situations, the per-situation action vocabulary,
/// and the active roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Offensive situations (default: half-court and fast-break)
    #[serde(default = "default_situations")]
    pub situations: Vec<String>,

    /// Player ids on the active roster
    #[serde(default)]
    pub roster: Vec<String>,

    /// Action vocabulary keyed by situation
    #[serde(default = "default_actions")]
    pub actions: BTreeMap<String, Vec<String>>,
}

fn default_situations() -> Vec<String> {
    vec!["half-court".to_string(), "fast-break".to_string()]
}

fn default_actions() -> BTreeMap<String, Vec<String>> {
    let mut actions = BTreeMap::new();
    actions.insert(
        "half-court".to_string(),
        vec![
            "horns".to_string(),
            "pick-roll".to_string(),
            "point".to_string(),
            "dho".to_string(),
            "post-entry".to_string(),
        ],
    );
    actions.insert(
        "fast-break".to_string(),
        vec![
            "drag".to_string(),
            "pass-ahead".to_string(),
            "paint-touch".to_string(),
        ],
    );
    actions
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            situations: default_situations(),
            roster: Vec::new(),
            actions: default_actions(),
        }
    }
}

impl TeamConfig {
    /// All actions across every situation, deduplicated, in situation
    /// order then declaration order.
    pub fn action_vocabulary(&self) -> Vec<String> {
        let mut vocabulary = Vec::new();
        for situation in &self.situations {
            let Some(actions) = self.actions.get(situation) else {
                continue;
            };
            for action in actions {
                if !vocabulary.contains(action) {
                    vocabulary.push(action.clone());
                }
            }
        }
        vocabulary
    }

    /// Actions selectable under one situation.
    pub fn actions_for(&self, situation: &str) -> &[String] {
        self.actions.get(situation).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub team: TeamConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            team: TeamConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.team.situations.is_empty() {
            return Err(ConfigError::ValidationError(
                "At least one situation must be configured".to_string(),
            ));
        }

        for situation in self.team.actions.keys() {
            if !self.team.situations.contains(situation) {
                return Err(ConfigError::ValidationError(format!(
                    "Actions configured for unknown situation: {}",
                    situation
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.team.situations, vec!["half-court", "fast-break"]);
    }

    #[test]
    fn test_default_action_vocabulary() {
        let team = TeamConfig::default();
        let vocab = team.action_vocabulary();

        // Half-court actions come first, then fast-break
        assert_eq!(
            vocab,
            vec![
                "horns",
                "pick-roll",
                "point",
                "dho",
                "post-entry",
                "drag",
                "pass-ahead",
                "paint-touch"
            ]
        );
    }

    #[test]
    fn test_actions_for_situation() {
        let team = TeamConfig::default();
        assert_eq!(team.actions_for("fast-break").len(), 3);
        assert!(team.actions_for("zone-press").is_empty());
    }

    #[test]
    fn test_action_vocabulary_dedup() {
        let mut team = TeamConfig::default();
        team.actions
            .get_mut("fast-break")
            .unwrap()
            .push("horns".to_string());

        let vocab = team.action_vocabulary();
        assert_eq!(vocab.iter().filter(|a| *a == "horns").count(), 1);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_no_situations() {
        let mut config = AppConfig::default();
        config.team.situations.clear();
        config.team.actions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_orphan_actions() {
        let mut config = AppConfig::default();
        config
            .team
            .actions
            .insert("zone-press".to_string(), vec!["trap".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_parse_toml() {
        let toml_str = r#"
            data_dir = "/tmp/plays"

            [team]
            situations = ["half-court"]
            roster = ["p1", "p2"]

            [team.actions]
            half-court = ["horns", "flex"]
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/plays"));
        assert_eq!(config.team.roster, vec!["p1", "p2"]);
        assert_eq!(config.team.action_vocabulary(), vec!["horns", "flex"]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.team.situations, parsed.team.situations);
    }
}
