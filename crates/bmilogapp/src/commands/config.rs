use crate::config::BmiConfig;
use crate::error::Result;
use std::path::Path;

use super::{CmdMessage, CmdResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Applies `action` to `config`, persisting to `config_dir` on `Set`.
pub fn run(config_dir: &Path, config: &mut BmiConfig, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result.config_entries = config
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.config_entries.push((key, value));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let stored = config.get(&key)?;
            result.add_message(CmdMessage::success(format!("{} = {}", key, stored)));
            result.config_entries.push((key, stored));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use tempfile::TempDir;

    #[test]
    fn show_all_lists_entries() {
        let dir = TempDir::new().unwrap();
        let mut config = BmiConfig::default();
        let result = run(dir.path(), &mut config, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config_entries.len(), 6);
        assert!(!dir.path().join(crate::config::CONFIG_FILENAME).exists());
    }

    #[test]
    fn set_persists_and_updates_in_place() {
        let dir = TempDir::new().unwrap();
        let mut config = BmiConfig::default();
        run(
            dir.path(),
            &mut config,
            ConfigAction::Set("language".into(), "th".into()),
        )
        .unwrap();

        assert_eq!(config.language, Language::Th);
        assert_eq!(BmiConfig::load(dir.path()).unwrap().language, Language::Th);
    }

    #[test]
    fn invalid_set_does_not_write() {
        let dir = TempDir::new().unwrap();
        let mut config = BmiConfig::default();
        let err = run(
            dir.path(),
            &mut config,
            ConfigAction::Set("min-height".into(), "400".into()),
        );
        assert!(err.is_err());
        assert!(!dir.path().join(crate::config::CONFIG_FILENAME).exists());
    }

    #[test]
    fn show_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = BmiConfig::default();
        assert!(run(dir.path(), &mut config, ConfigAction::ShowKey("nope".into())).is_err());
    }
}
