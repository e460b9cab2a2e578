use std::path::Path;

use log::warn;

use crate::ai::Difficulty;
use crate::arena::ArenaConfig;
use crate::error::ConfigError;

/// Search settings shared by every front end.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Fixed seed for the tie-break random source; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            difficulty: Difficulty::Medium,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        if self.arena.log_interval == 0 {
            return Err(ConfigError::Validation(
                "arena.log_interval must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::OpponentKind;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.engine.difficulty, Difficulty::Medium);
        assert_eq!(config.engine.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[engine]
difficulty = "hard"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.difficulty, Difficulty::Hard);
        assert_eq!(config.engine.seed, None);
        assert_eq!(config.arena.games, 20);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.engine.difficulty, default.engine.difficulty);
        assert_eq!(config.arena.games, default.arena.games);
    }

    #[test]
    fn test_unknown_difficulty_fails_to_parse() {
        let toml_str = r#"
[engine]
difficulty = "expert"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.arena.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_log_interval() {
        let mut config = AppConfig::default();
        config.arena.log_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.arena.games, 20);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[engine]
seed = 7

[arena]
games = 50
opponent = "minimax"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.engine.seed, Some(7));
        assert_eq!(config.arena.games, 50);
        assert_eq!(config.arena.opponent, OpponentKind::Minimax);
        // Others are defaults
        assert_eq!(config.engine.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[arena]\ngames = 0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("definitely/missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
