//! Terminal output for CLI handlers.
//!
//! Every printer honours three global switches set once from the command
//! line: JSON mode (one `{"type", "payload"}` object per line), quiet mode
//! (only warnings and errors) and color. Commands that produce a single
//! result document bypass the line protocol with [`json_output`].

use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::{json, Value};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::command::ColorChoice;

/// Output switches shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
    pub color: bool,
}

impl OutputConfig {
    #[must_use]
    pub fn new(json: bool, quiet: bool, verbose: u8, color: &ColorChoice) -> Self {
        let color = match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };
        Self {
            json,
            quiet,
            verbose,
            color: color && !json,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn current() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from the global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut slot) => *slot = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// Log level forced by `-q` or `-v`, if any.
#[must_use]
pub fn log_level() -> Option<&'static str> {
    let config = current();
    level_for(config.quiet, config.verbose)
}

fn level_for(quiet: bool, verbose: u8) -> Option<&'static str> {
    match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("info"),
        (false, 2) => Some("debug"),
        (false, _) => Some("trace"),
    }
}

/// Route one message: a JSON line in JSON mode, `render` otherwise.
///
/// `always` messages are rendered even in quiet mode.
fn emit(kind: &str, payload: Value, always: bool, render: impl FnOnce(bool)) {
    let config = current();
    if config.json {
        println!("{}", json!({ "type": kind, "payload": payload }));
    } else if always || !config.quiet {
        render(config.color);
    }
}

fn paint(color: bool, text: &str, style: impl FnOnce(&str) -> String) -> String {
    if color {
        style(text)
    } else {
        text.to_string()
    }
}

/// Print the application name and version.
pub fn header(version: &str) {
    emit(
        "header",
        json!({ "app": "outlay", "version": version }),
        false,
        |color| {
            println!(
                "{} {}",
                paint(color, "outlay", |s| s.bold().to_string()),
                paint(color, version, |s| s.dimmed().to_string())
            );
        },
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        json!({ "label": label, "value": value }),
        false,
        |color| {
            let label = format!("{label:<14}");
            println!("  {} {value}", paint(color, &label, |s| s.dimmed().to_string()));
        },
    );
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), false, |color| {
        println!("  {} {message}", paint(color, "✓", |s| s.green().to_string()));
    });
}

pub fn warning(message: &str) {
    emit("warning", json!({ "message": message }), true, |color| {
        println!("  {} {message}", paint(color, "⚠", |s| s.yellow().to_string()));
    });
}

/// Print an error to stderr.
pub fn error(message: &str) {
    let config = current();
    if config.json {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
        return;
    }
    eprintln!("  {} {message}", paint(config.color, "×", |s| s.red().to_string()));
}

/// Print a section title preceded by a blank line.
pub fn section(title: &str) {
    emit("section", json!({ "title": title }), false, |color| {
        println!();
        println!("{}", paint(color, title, |s| s.bold().to_string()));
    });
}

pub fn note(message: &str) {
    emit("note", json!({ "message": message }), false, |color| {
        println!("  {}", paint(color, message, |s| s.dimmed().to_string()));
    });
}

pub fn hint(message: &str) {
    emit("hint", json!({ "message": message }), false, |color| {
        println!(
            "  {}: {}",
            paint(color, "hint", |s| s.cyan().to_string()),
            paint(color, message, |s| s.dimmed().to_string())
        );
    });
}

/// Print multi-line content, each line indented.
pub fn lines(content: &str) {
    emit("lines", json!({ "content": content }), false, |_| {
        for line in content.lines() {
            println!("  {line}");
        }
    });
}

/// Render rows as a table and print them.
pub fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    lines(&table.to_string());
}

/// Format a value in cyan when color is on.
pub fn highlight(value: impl Display) -> String {
    paint(current().color, &value.to_string(), |s| s.cyan().to_string())
}

/// Format a value dimmed when color is on.
pub fn muted(value: impl Display) -> String {
    paint(current().color, &value.to_string(), |s| s.dimmed().to_string())
}

/// Emit one JSON document on stdout.
pub fn json_output(value: &Value) {
    println!("{value}");
}

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a braille spinner; hidden in JSON and quiet mode.
pub fn spinner(message: &str) -> ProgressBar {
    let config = current();
    if config.json || config.quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        pb.set_style(style.tick_strings(BRAILLE_SPINNER));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a spinner with a checkmark.
pub fn spinner_success(pb: &ProgressBar, message: &str) {
    if pb.is_hidden() {
        return;
    }
    let mark = paint(current().color, "✓", |s| s.green().to_string());
    pb.finish_with_message(format!("{mark} {message}"));
}

/// Finish a spinner with a failure mark.
pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    if pb.is_hidden() {
        return;
    }
    let mark = paint(current().color, "×", |s| s.red().to_string());
    pb.finish_with_message(format!("{mark} {message}"));
}
