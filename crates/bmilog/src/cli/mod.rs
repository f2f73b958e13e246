//! Terminal front end for bmilog.
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch from parsed arguments to the API, and printing
//! - `render`: result panel, history table, messages
//! - `chart`: the trend chart and the view that owns it
//! - `styles`: colors per category and message level

mod chart;
mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
