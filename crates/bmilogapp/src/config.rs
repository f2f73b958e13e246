//! # Configuration
//!
//! Bmilog reads an optional `bmilog.toml` from its config directory (or from the
//! directory passed with `--data`). A missing file means defaults; a file that does not
//! parse is an error rather than a silent fallback.
//!
//! ## Available Settings
//!
//! | Key          | Default | Description                                   |
//! |--------------|---------|-----------------------------------------------|
//! | `language`   | `en`    | Display language for labels/advice (`en`, `th`) |
//! | `decimals`   | `2`     | Decimal places used when showing a BMI        |
//! | `min-weight` | `20`    | Lowest accepted weight in kg                  |
//! | `max-weight` | `250`   | Highest accepted weight in kg                 |
//! | `min-height` | `100`   | Lowest accepted height in cm                  |
//! | `max-height` | `250`   | Highest accepted height in cm                 |
//!
//! The bounds are inclusive. Another sensible policy is 20–300 kg and 50–220 cm; switch
//! with `bmilog config max-weight 300` and friends, no code change needed.
//!
//! ## File Format
//!
//! ```toml
//! language = "th"
//! decimals = 1
//!
//! [bounds]
//! min_weight = 20.0
//! max_weight = 300.0
//! min_height = 50.0
//! max_height = 220.0
//! ```

use crate::error::{BmiError, Result};
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "bmilog.toml";
const MAX_DECIMALS: u32 = 6;

pub const KEYS: [&str; 6] = [
    "language",
    "decimals",
    "min-weight",
    "max-weight",
    "min-height",
    "max-height",
];

/// Accepted physiological input range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub min_weight: f64,
    pub max_weight: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_weight: 20.0,
            max_weight: 250.0,
            min_height: 100.0,
            max_height: 250.0,
        }
    }
}

impl Bounds {
    pub fn check(&self, weight_kg: f64, height_cm: f64) -> Result<()> {
        if weight_kg < self.min_weight || weight_kg > self.max_weight {
            return Err(BmiError::OutOfRange {
                field: "weight",
                value: weight_kg,
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        if height_cm < self.min_height || height_cm > self.max_height {
            return Err(BmiError::OutOfRange {
                field: "height",
                value: height_cm,
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let all = [
            self.min_weight,
            self.max_weight,
            self.min_height,
            self.max_height,
        ];
        if all.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(BmiError::Config(
                "Bounds must be positive numbers".to_string(),
            ));
        }
        if self.min_weight > self.max_weight {
            return Err(BmiError::Config(format!(
                "min-weight ({}) is above max-weight ({})",
                self.min_weight, self.max_weight
            )));
        }
        if self.min_height > self.max_height {
            return Err(BmiError::Config(format!(
                "min-height ({}) is above max-height ({})",
                self.min_height, self.max_height
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiConfig {
    pub language: Language,
    pub decimals: u32,
    pub bounds: Bounds,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            decimals: 2,
            bounds: Bounds::default(),
        }
    }
}

impl BmiConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BmiConfig = toml::from_str(&content).map_err(|e| {
            BmiError::Config(format!("{}: {}", config_path.display(), e.message()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| BmiError::Config(e.to_string()))?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(BmiError::Config(format!(
                "decimals must be between 0 and {}",
                MAX_DECIMALS
            )));
        }
        self.bounds.validate()
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "language" => self.language.to_string(),
            "decimals" => self.decimals.to_string(),
            "min-weight" => self.bounds.min_weight.to_string(),
            "max-weight" => self.bounds.max_weight.to_string(),
            "min-height" => self.bounds.min_height.to_string(),
            "max-height" => self.bounds.max_height.to_string(),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Set one key from its string form. The whole config is re-validated, so setting
    /// `min-weight` above `max-weight` fails and leaves `self` untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "language" => next.language = value.parse()?,
            "decimals" => {
                next.decimals = value.trim().parse().map_err(|_| {
                    BmiError::Config(format!("decimals must be a whole number, got '{}'", value))
                })?
            }
            "min-weight" => next.bounds.min_weight = parse_bound(key, value)?,
            "max-weight" => next.bounds.max_weight = parse_bound(key, value)?,
            "min-height" => next.bounds.min_height = parse_bound(key, value)?,
            "max-height" => next.bounds.max_height = parse_bound(key, value)?,
            other => return Err(unknown_key(other)),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).ok().map(|v| (*k, v)))
            .collect()
    }
}

fn parse_bound(key: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| BmiError::Config(format!("{} must be a number, got '{}'", key, value)))
}

fn unknown_key(key: &str) -> BmiError {
    BmiError::Config(format!(
        "Unknown config key '{}' (known keys: {})",
        key,
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BmiConfig::default();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.decimals, 2);
        assert_eq!(config.bounds.min_weight, 20.0);
        assert_eq!(config.bounds.max_height, 250.0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = Bounds::default();
        assert!(bounds.check(20.0, 100.0).is_ok());
        assert!(bounds.check(250.0, 250.0).is_ok());
        assert!(matches!(
            bounds.check(19.99, 170.0),
            Err(BmiError::OutOfRange { field: "weight", .. })
        ));
        assert!(matches!(
            bounds.check(70.0, 250.5),
            Err(BmiError::OutOfRange { field: "height", .. })
        ));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = BmiConfig::load(dir.path()).unwrap();
        assert_eq!(config, BmiConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = BmiConfig::default();
        config.set("language", "th").unwrap();
        config.set("max-weight", "300").unwrap();
        config.set("min-height", "50").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = BmiConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.language, Language::Th);
        assert_eq!(loaded.bounds.max_weight, 300.0);
        assert_eq!(loaded.bounds.min_height, 50.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "decimals = 1\n[bounds]\nmax_height = 220.0\n",
        )
        .unwrap();

        let loaded = BmiConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.decimals, 1);
        assert_eq!(loaded.language, Language::En);
        assert_eq!(loaded.bounds.max_height, 220.0);
        assert_eq!(loaded.bounds.min_height, 100.0);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "decimals = \"lots\"").unwrap();
        assert!(matches!(
            BmiConfig::load(dir.path()),
            Err(BmiError::Config(_))
        ));
    }

    #[test]
    fn test_set_rejects_inverted_bounds() {
        let mut config = BmiConfig::default();
        let err = config.set("min-weight", "300").unwrap_err();
        assert!(err.to_string().contains("min-weight"));
        assert_eq!(config.bounds.min_weight, 20.0);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_values() {
        let mut config = BmiConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("decimals", "7").is_err());
        assert!(config.set("max-height", "tall").is_err());
        assert!(config.set("min-height", "-5").is_err());
        assert_eq!(config, BmiConfig::default());
    }

    #[test]
    fn test_entries_lists_every_key() {
        let entries = BmiConfig::default().entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, KEYS.to_vec());
        assert_eq!(entries[0].1, "en");
        assert_eq!(entries[3].1, "250");
    }
}
