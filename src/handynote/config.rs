use crate::error::{HandyNoteError, Result};
use crate::validation::{
    FieldLimits, ValidationRules, DESCRIPTION_LIMITS, SHORTCUT_LIMITS, TITLE_LIMITS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: &[&str] = &[
    "title-min",
    "title-max",
    "shortcut-min",
    "shortcut-max",
    "description-min",
    "description-max",
    "seed-defaults",
];

/// Configuration for handynote, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandyNoteConfig {
    #[serde(default = "default_title")]
    pub title: FieldLimits,

    #[serde(default = "default_shortcut")]
    pub shortcut: FieldLimits,

    #[serde(default = "default_description")]
    pub description: FieldLimits,

    /// Fill an empty collection with the built-in sections on startup
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
}

fn default_title() -> FieldLimits {
    TITLE_LIMITS
}

fn default_shortcut() -> FieldLimits {
    SHORTCUT_LIMITS
}

fn default_description() -> FieldLimits {
    DESCRIPTION_LIMITS
}

fn default_seed() -> bool {
    true
}

impl Default for HandyNoteConfig {
    fn default() -> Self {
        Self {
            title: TITLE_LIMITS,
            shortcut: SHORTCUT_LIMITS,
            description: DESCRIPTION_LIMITS,
            seed_defaults: true,
        }
    }
}

impl HandyNoteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HandyNoteError::Io)?;
        let config: HandyNoteConfig =
            serde_json::from_str(&content).map_err(HandyNoteError::Serialization)?;
        config
            .check_limits()
            .map_err(|e| HandyNoteError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HandyNoteError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HandyNoteError::Serialization)?;
        fs::write(config_path, content).map_err(HandyNoteError::Io)?;
        Ok(())
    }

    /// Every field's minimum must not exceed its maximum.
    fn check_limits(&self) -> std::result::Result<(), String> {
        for (field, limits) in [
            ("title", self.title),
            ("shortcut", self.shortcut),
            ("description", self.description),
        ] {
            if limits.min_length > limits.max_length {
                return Err(format!(
                    "{}-min ({}) is larger than {}-max ({})",
                    field, limits.min_length, field, limits.max_length
                ));
            }
        }
        Ok(())
    }

    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            title: self.title,
            shortcut: self.shortcut,
            description: self.description,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "title-min" => self.title.min_length.to_string(),
            "title-max" => self.title.max_length.to_string(),
            "shortcut-min" => self.shortcut.min_length.to_string(),
            "shortcut-max" => self.shortcut.max_length.to_string(),
            "description-min" => self.description.min_length.to_string(),
            "description-max" => self.description.max_length.to_string(),
            "seed-defaults" => self.seed_defaults.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Sets a key from its string form. Nothing changes on error.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        if key == "seed-defaults" {
            self.seed_defaults = parse_bool(value)?;
            return Ok(());
        }

        let limits = match key {
            "title-min" | "title-max" => &mut self.title,
            "shortcut-min" | "shortcut-max" => &mut self.shortcut,
            "description-min" | "description-max" => &mut self.description,
            _ => return Err(format!("Unknown config key: {}", key)),
        };

        let number: usize = value
            .trim()
            .parse()
            .map_err(|_| format!("Invalid value for {}: {}", key, value))?;

        let mut updated = *limits;
        if key.ends_with("-min") {
            updated.min_length = number;
        } else {
            updated.max_length = number;
        }

        if updated.min_length > updated.max_length {
            return Err(format!(
                "{} would make the minimum ({}) larger than the maximum ({})",
                key, updated.min_length, updated.max_length
            ));
        }

        *limits = updated;
        Ok(())
    }
}

fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("Invalid value for seed-defaults: {}", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = HandyNoteConfig::default();
        assert_eq!(config.title, FieldLimits::new(1, 30));
        assert_eq!(config.shortcut, FieldLimits::new(1, 20));
        assert_eq!(config.description, FieldLimits::new(1, 50));
        assert!(config.seed_defaults);
        assert_eq!(config.rules(), ValidationRules::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = HandyNoteConfig::load(temp.path().join("nothing")).unwrap();
        assert_eq!(config, HandyNoteConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = HandyNoteConfig::default();
        config.set("title-max", "40").unwrap();
        config.set("seed-defaults", "no").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = HandyNoteConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.title.max_length, 40);
        assert!(!loaded.seed_defaults);
    }

    #[test]
    fn test_load_rejects_inverted_limits() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "shortcut": { "min_length": 10, "max_length": 3 } }"#,
        )
        .unwrap();

        let err = HandyNoteConfig::load(temp.path()).unwrap_err();
        match err {
            HandyNoteError::Config(msg) => {
                assert!(msg.contains("shortcut-min (10) is larger than shortcut-max (3)"));
                assert!(msg.contains(CONFIG_FILENAME));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "shortcut": { "min_length": 2, "max_length": 10 } }"#,
        )
        .unwrap();

        let loaded = HandyNoteConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.shortcut, FieldLimits::new(2, 10));
        assert_eq!(loaded.title, TITLE_LIMITS);
        assert!(loaded.seed_defaults);
    }

    #[test]
    fn test_get_every_key() {
        let config = HandyNoteConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "{}", key);
        }
        assert_eq!(config.get("description-max").as_deref(), Some("50"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = HandyNoteConfig::default();
        let err = config.set("colour", "red").unwrap_err();
        assert_eq!(err, "Unknown config key: colour");
    }

    #[test]
    fn test_set_rejects_bad_number() {
        let mut config = HandyNoteConfig::default();
        assert!(config.set("title-max", "lots").is_err());
        assert_eq!(config.title.max_length, 30);
    }

    #[test]
    fn test_set_rejects_min_over_max() {
        let mut config = HandyNoteConfig::default();
        assert!(config.set("shortcut-min", "21").is_err());
        assert_eq!(config.shortcut, SHORTCUT_LIMITS);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = HandyNoteConfig {
            title: FieldLimits::new(3, 12),
            seed_defaults: false,
            ..HandyNoteConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: HandyNoteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
