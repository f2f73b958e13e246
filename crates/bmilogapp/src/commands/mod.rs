//! # Command Layer
//!
//! The **business logic** of bmilog. Each user action lives in its own submodule as a
//! plain function over a [`RecordStore`](crate::store::RecordStore).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **Prompting**: confirmation arrives as an injected closure
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. After every action that touches the
//! collection the result carries a freshly loaded [`History`], which is the "refresh" the
//! presentation layer renders from.
//!
//! ## Command Modules
//!
//! - [`compute`]: Validate inputs, compute BMI, record it
//! - [`history`]: Reload and order the collection
//! - [`delete`]: Remove records by id
//! - [`clear`]: Remove everything after confirmation
//! - [`config`]: Show and change settings

use crate::model::{History, Record};
use serde::Serialize;

pub mod clear;
pub mod compute;
pub mod config;
pub mod delete;
pub mod history;

pub use compute::Assessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Result of a compute action.
    pub assessment: Option<Assessment>,
    /// Record created by a compute action.
    pub created: Option<Record>,
    /// Refreshed collection, present after every action that read the store.
    pub history: Option<History>,
    pub config_entries: Vec<(String, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_history(mut self, history: History) -> Self {
        self.history = Some(history);
        self
    }
}
