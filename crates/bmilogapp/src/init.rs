//! # Data Locations
//!
//! By default records live in the OS data directory and `bmilog.toml` in the OS config
//! directory, both resolved with the `directories` crate:
//!
//! | OS      | Data                                     | Config                                 |
//! |---------|------------------------------------------|----------------------------------------|
//! | Linux   | `~/.local/share/bmilog`                  | `~/.config/bmilog`                     |
//! | macOS   | `~/Library/Application Support/com.bmilog.bmilog` | same                          |
//! | Windows | `%APPDATA%\bmilog\bmilog\data`           | `%APPDATA%\bmilog\bmilog\config`       |
//!
//! ## Data Path Override
//!
//! Passing a directory (`--data`, or `BMILOG_DATA`) puts both the records and the config
//! file in that one directory. Useful for keeping separate histories, and for tests.

use crate::api::{BmiApi, BmiPaths};
use crate::config::BmiConfig;
use crate::error::{BmiError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub struct BmiContext {
    pub api: BmiApi<FsBackend>,
}

pub fn resolve_paths(data_override: Option<PathBuf>) -> Result<BmiPaths> {
    if let Some(dir) = data_override {
        return Ok(BmiPaths {
            data: dir.clone(),
            config: dir,
        });
    }

    let dirs = ProjectDirs::from("com", "bmilog", "bmilog").ok_or_else(|| {
        BmiError::Store("Could not determine a home directory for bmilog data".to_string())
    })?;
    Ok(BmiPaths {
        data: dirs.data_dir().to_path_buf(),
        config: dirs.config_dir().to_path_buf(),
    })
}

/// Resolve locations, load configuration and build the API over the filesystem store.
pub fn initialize(data_override: Option<PathBuf>) -> Result<BmiContext> {
    let paths = resolve_paths(data_override)?;
    debug!(
        "Using data dir {} and config dir {}",
        paths.data.display(),
        paths.config.display()
    );

    let config = BmiConfig::load(&paths.config)?;
    let backend = FsBackend::new(paths.data.clone());
    Ok(BmiContext {
        api: BmiApi::new(backend, config, paths),
    })
}
