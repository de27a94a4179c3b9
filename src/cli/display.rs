// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for booksearch results.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection tries
//! `BOOKSEARCH_THEME` first ("dark" or "light"), then `COLORFGBG`, then falls
//! back to dark. `NO_COLOR` and non-TTY stdout turn colors off entirely, so
//! piping results into another tool gives plain text.

use std::io::IsTerminal;
use std::sync::OnceLock;

use booksearch::ResultView;

/// Width of the result box, between the borders.
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BOOKSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up is light, except 8 (dark gray)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Apply a theme color with optional modifiers, or nothing without a TTY.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Greedy word wrap to `width` visible columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Undo HTML escaping for terminal output.
pub fn unescape_html(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// ├──────────────────┤
pub fn section_divider() {
    let border = GRAY();
    println!("{}├{}┤{}", border, "─".repeat(BOX_WIDTH), RESET);
}

/// └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Scores are `5000 − position + occurrences × weight`; color by band.
pub fn score_value(score: u64) -> String {
    let text = format!("{:>6}", score);
    let color: fn() -> String = if score >= 5000 {
        GREEN
    } else if score >= 4000 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

pub fn error_mark() -> String {
    themed(RED, &[BOLD], "error:")
}

/// Print a result list inside a box.
pub fn print_results(query: &str, views: &[ResultView]) {
    section_top(&format!("\"{}\" · {} results", query, views.len()));
    for (i, view) in views.iter().enumerate() {
        if i > 0 {
            section_divider();
        }
        let rank = themed(GRAY, &[DIM], &format!("{:>3}.", i + 1));
        let label = themed(BLUE, &[BOLD], &view.label);
        let heading = format!(" {} {} ", rank, label);
        let pad = BOX_WIDTH.saturating_sub(visible_len(&heading) + 7);
        row(&format!("{}{}{} ", heading, " ".repeat(pad), score_value(view.score)));
        row(&format!("      {}", themed(CYAN, &[], &view.url)));
        for line in wrap(&unescape_html(&view.snippet_html), BOX_WIDTH - 8) {
            row(&format!("      {}", line));
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
