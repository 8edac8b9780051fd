//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: identifiers, keys, hints
//! - Dimmed: secondary info
//!
//! Status lines that accompany machine-readable stdout (e.g. `resolve`)
//! go to stderr through the `*_err` variants.

use console::{style, StyledObject};
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

fn paint<'a>(
    text: &'a str,
    f: impl FnOnce(StyledObject<&'a str>) -> StyledObject<&'a str>,
) -> String {
    if colors_enabled() {
        f(style(text)).to_string()
    } else {
        text.to_string()
    }
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ wrote .env`
pub fn success(msg: &str) {
    println!("{} {}", paint("✓", |s| s.green()), msg);
}

/// Same as [`success`], on stderr.
pub fn success_err(msg: &str) {
    eprintln!("{} {}", paint("✓", |s| s.green()), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ missing secrets: app1/qa or app1/default`
pub fn error(msg: &str) {
    eprintln!("{} {}", paint("✗", |s| s.red()), msg);
}

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    eprintln!("{} {}", paint("⚠", |s| s.yellow()), msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: stagehand init --app <name>`
pub fn hint(msg: &str) {
    eprintln!("{} {}", paint("→", |s| s.cyan()), paint(msg, |s| s.cyan()));
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", paint(title, |s| s.bold()));
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  source  app1/default`
pub fn kv(label: &str, value: impl Display) {
    let value = value.to_string();
    println!(
        "  {}  {}",
        paint(label, |s| s.dim()),
        paint(&value, |s| s.bold())
    );
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", paint(&"─".repeat(RULE_WIDTH), |s| s.dim()));
}

/// Format a secret identifier or key name in cyan.
pub fn key(k: &str) -> String {
    paint(k, |s| s.cyan())
}

/// Format a path in cyan.
pub fn path(p: &str) -> String {
    paint(p, |s| s.cyan())
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
