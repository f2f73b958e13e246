//! # CLI Layer
//!
//! This module is **one possible UI client** for bmilog, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, the confirmation prompt)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging Setup**: `tracing-subscriber` on stderr, level from flags or `RUST_LOG`
//! 3. **Context Setup**: Resolve data locations and build the API
//! 4. **Dispatch**: Turn each command into an `Action` (or config call) on the API
//! 5. **Output**: Feed results through `HistoryView` and the render functions
//!
//! ## Error Slot
//!
//! Validation failures (`MissingInput`, `OutOfRange`) are shown here, in the configured
//! language, and the process then exits non-zero without a second generic message.

use super::chart::HistoryView;
use super::render::{render_assessment, render_error, render_messages};
use super::setup::{Cli, Commands};
use super::styles::paint_message;
use bmilogapp::api::{Action, BmiApi, CmdResult, ConfigAction, MessageLevel};
use bmilogapp::error::Result;
use bmilogapp::init::initialize;
use bmilogapp::store::fs_backend::FsBackend;
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ctx = initialize(cli.data.clone())?;
    tracing::debug!(command = ?cli.command, "dispatching");
    let mut app = AppContext {
        view: HistoryView::new(ctx.api.settings().decimals),
        api: ctx.api,
    };

    match cli.command {
        Some(Commands::Add { weight, height }) => handle_add(&mut app, weight, height),
        Some(Commands::History { chart }) => handle_history(&mut app, chart),
        Some(Commands::Chart) => handle_chart(&mut app),
        Some(Commands::Delete { ids }) => handle_delete(&mut app, ids),
        Some(Commands::Clear { yes }) => handle_clear(&mut app, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut app, key, value),
        None => handle_history(&mut app, false),
    }
}

struct AppContext {
    api: BmiApi<FsBackend>,
    view: HistoryView,
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_add(app: &mut AppContext, weight: String, height: String) -> Result<()> {
    let result = app.api.dispatch(Action::Compute { weight, height }, no_prompt);

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            if e.is_input_error() {
                let slot = render_error(&e, app.api.texts());
                eprintln!("{}", paint_message(&slot, MessageLevel::Error));
            }
            return Err(e);
        }
    };

    if let Some(assessment) = &result.assessment {
        print!(
            "{}",
            render_assessment(assessment, app.api.texts(), app.api.settings().decimals)
        );
        println!();
    }
    print!("{}", render_messages(&result.messages));
    show_history(app, &result, false);
    Ok(())
}

fn handle_history(app: &mut AppContext, with_chart: bool) -> Result<()> {
    let result = app.api.dispatch(Action::Refresh, no_prompt)?;
    show_history(app, &result, with_chart);
    Ok(())
}

fn handle_chart(app: &mut AppContext) -> Result<()> {
    let result = app.api.dispatch(Action::Refresh, no_prompt)?;
    if let Some(history) = &result.history {
        app.view.replace(history);
    }
    if let Some(chart) = app.view.chart() {
        print!("{}", chart.render());
    }
    Ok(())
}

fn handle_delete(app: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let mut last = None;
    for id in ids {
        let result = app.api.dispatch(Action::Delete { id }, no_prompt)?;
        print!("{}", render_messages(&result.messages));
        last = Some(result);
    }
    if let Some(result) = last {
        println!();
        show_history(app, &result, false);
    }
    Ok(())
}

fn handle_clear(app: &mut AppContext, yes: bool) -> Result<()> {
    let result = app.api.dispatch(Action::ClearAll, |prompt| {
        if yes {
            return Ok(true);
        }
        ask(prompt)
    })?;
    print!("{}", render_messages(&result.messages));
    println!();
    show_history(app, &result, false);
    Ok(())
}

fn handle_config(app: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let setting = matches!(action, ConfigAction::Set(..));

    let result = app.api.config(action)?;
    if setting {
        print!("{}", render_messages(&result.messages));
    } else {
        for (key, value) in &result.config_entries {
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}

fn show_history(app: &mut AppContext, result: &CmdResult, with_chart: bool) {
    let Some(history) = &result.history else {
        return;
    };
    app.view.replace(history);
    print!("{}", app.view.table());
    if with_chart {
        if let Some(chart) = app.view.chart() {
            println!();
            print!("{}", chart.render());
        }
    }
}

/// Confirmation port for actions that never ask.
fn no_prompt(_: &str) -> Result<bool> {
    Ok(false)
}

fn ask(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes" | "Yes"))
}
