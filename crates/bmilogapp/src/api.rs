//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every user action, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Owns** the record store and the active configuration
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! No business logic lives here (see `commands/*.rs`), and nothing here prints.
//!
//! ## Actions
//!
//! A front end can call the per-action methods directly, or describe what the user did as
//! an [`Action`] and hand it to [`BmiApi::dispatch`]. A history row's delete control, for
//! example, only needs to produce `Action::Delete { id }`; it never needs to know which
//! method that maps to.
//!
//! ## Confirmation
//!
//! Clearing the history asks first. The question is asked through a closure the caller
//! supplies (`FnOnce(&str) -> Result<bool>`), so the core never touches a terminal and
//! tests can answer yes or no directly.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `BmiApi<FsBackend>`
//! - Testing: `BmiApi<MemBackend>`

use crate::commands;
use crate::config::BmiConfig;
use crate::error::Result;
use crate::locale::{texts, Texts};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmiPaths {
    /// Where the record blob lives.
    pub data: PathBuf,
    /// Where `bmilog.toml` lives.
    pub config: PathBuf,
}

/// A user action, as produced by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Compute { weight: String, height: String },
    ClearAll,
    Delete { id: String },
    Refresh,
}

pub struct BmiApi<B: StorageBackend> {
    store: RecordStore<B>,
    config: BmiConfig,
    paths: BmiPaths,
}

impl<B: StorageBackend> BmiApi<B> {
    pub fn new(backend: B, config: BmiConfig, paths: BmiPaths) -> Self {
        Self {
            store: RecordStore::new(backend),
            config,
            paths,
        }
    }

    pub fn compute(&mut self, weight: &str, height: &str) -> Result<commands::CmdResult> {
        commands::compute::run(&mut self.store, &self.config, weight, height)
    }

    pub fn history(&self) -> Result<commands::CmdResult> {
        commands::history::run(&self.store)
    }

    pub fn delete<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let texts = self.texts();
        commands::delete::run(&mut self.store, texts, ids)
    }

    pub fn clear_all<F>(&mut self, confirm: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&str) -> Result<bool>,
    {
        let texts = self.texts();
        commands::clear::run(&mut self.store, texts, confirm)
    }

    pub fn dispatch<F>(&mut self, action: Action, confirm: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&str) -> Result<bool>,
    {
        match action {
            Action::Compute { weight, height } => self.compute(&weight, &height),
            Action::ClearAll => self.clear_all(confirm),
            Action::Delete { id } => self.delete(&[id]),
            Action::Refresh => self.history(),
        }
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths.config, &mut self.config, action)
    }

    pub fn settings(&self) -> &BmiConfig {
        &self.config
    }

    pub fn texts(&self) -> &'static Texts {
        texts(self.config.language)
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{Assessment, CmdMessage, CmdResult, MessageLevel};
