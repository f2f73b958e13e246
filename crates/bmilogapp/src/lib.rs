//! # Bmilog Architecture
//!
//! Bmilog is a **UI-agnostic body-mass-index tracking library**. The terminal client in
//! `crates/bmilog` is one possible front end; nothing in here knows about stdout, colors
//! or exit codes.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/bmilog)                                  │
//! │  - Parses arguments, renders tables and charts              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, structured `Action` dispatch  │
//! │  - Owns the injected confirmation port contract             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Engine (engine.rs)         │
//! │  - Validation, BMI arithmetic, categorization, advice       │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `RecordStore` over a key-value `StorageBackend`          │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Cache
//!
//! The record collection is never held across operations. Every command re-reads the
//! persisted blob, changes it, and writes it back in full.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each user action
//! - [`engine`]: Pure BMI functions
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `Category`, `History`)
//! - [`config`]: Validation bounds and display preferences
//! - [`locale`]: Display-language strings
//! - [`init`]: Data directory resolution and API construction
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod init;
pub mod locale;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
