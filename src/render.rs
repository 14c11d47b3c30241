//! Terminal output renderer and the injectable rendering contract.
//!
//! `RenderSink` is the UI contract consumed by the dispatcher and the action
//! runner. `Renderer` is the default terminal implementation; tests substitute
//! a capturing sink without coupling to process streams.

use crossterm::style::{Color, Stylize};

// ---------------------------------------------------------------------------
// UI settings
// ---------------------------------------------------------------------------

/// Interactive prompt chrome.
pub const PROMPT: &str = ">> ";

const INDENT_1: &str = "  ";
const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const GLYPH_SECTION_BULLET: &str = "•";
const GLYPH_ITEM: &str = "-";

const COLOR_SECTION: Color = Color::Cyan;
const COLOR_KEY: Color = Color::Grey;
const COLOR_ACTIVITY: Color = Color::DarkGrey;
const COLOR_WARNING: Color = Color::Yellow;
const COLOR_ERROR: Color = Color::Red;

// ---------------------------------------------------------------------------
// RenderSink
// ---------------------------------------------------------------------------

/// Injectable rendering interface used by the session loop and action runner.
pub trait RenderSink: Send + Sync {
    /// Render the interactive prompt chrome.
    fn prompt(&self);
    /// Render a titled section divider.
    fn section(&self, title: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render one unordered list entry.
    fn item(&self, text: &str);
    /// Render one numbered step in an ordered list.
    fn step(&self, index: usize, text: &str);
    /// Render activity/lifecycle text.
    fn activity(&self, text: &str);
    /// Render additional detail text.
    fn detail(&self, text: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Handles all terminal output formatting.
///
/// Catalog content (sections, fields, list entries) goes to stdout so it
/// survives piping; prompt chrome, activity, and diagnostics go to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl RenderSink for Renderer {
    fn prompt(&self) {
        if self.color {
            eprint!("{}", PROMPT.with(COLOR_SECTION).bold());
        } else {
            eprint!("{PROMPT}");
        }
    }

    fn section(&self, title: &str) {
        if self.color {
            println!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(COLOR_SECTION),
                title.with(COLOR_SECTION).bold()
            );
        } else {
            println!("{GLYPH_SECTION_BULLET} {title}");
        }
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            println!("{INDENT_1}{} {value}", key.with(COLOR_KEY));
        } else {
            println!("{INDENT_1}{key} {value}");
        }
    }

    fn item(&self, text: &str) {
        println!("{INDENT_1}{GLYPH_ITEM} {text}");
    }

    fn step(&self, index: usize, text: &str) {
        if self.color {
            println!(
                "{INDENT_1}{} {text}",
                format!("{index}.").with(COLOR_KEY)
            );
        } else {
            println!("{INDENT_1}{index}. {text}");
        }
    }

    fn activity(&self, text: &str) {
        if self.color {
            eprintln!("{}", text.with(COLOR_ACTIVITY));
        } else {
            eprintln!("{text}");
        }
    }

    fn detail(&self, text: &str) {
        if self.color {
            eprintln!("{INDENT_1}{}", text.with(COLOR_ACTIVITY));
        } else {
            eprintln!("{INDENT_1}{text}");
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(COLOR_WARNING).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(COLOR_ERROR).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }
}
