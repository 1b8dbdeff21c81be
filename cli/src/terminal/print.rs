use crate::terminal::{banner, colors};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target are user output, written verbatim by the formatter.
pub const PRINT_TARGET: &str = "roster::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    print("");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    let title: String = format!("⟦ ROSTER v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&header_line(&title, false).bright_black().to_string());
    banner::print();
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&header_line(&format!("⟦ {} ⟧", msg.to_uppercase()), true));
}

/// Centers `title` in a rule of [`TOTAL_WIDTH`] columns.
fn header_line(title: &str, colored_title: bool) -> String {
    let dashes: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title));
    let left: String = "─".repeat(dashes / 2);
    let right: String = "─".repeat(dashes - dashes / 2);
    let title: ColoredString = if colored_title {
        title.bright_green()
    } else {
        title.normal()
    };
    format!("{}{}{}", left.bright_black(), title, right.bright_black())
}

pub fn separator(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `key` padded with dots to `key_width`, then the value.
pub fn aligned_line(key: &str, value: &str, key_width: usize) {
    let dots: String = ".".repeat(key_width.saturating_sub(key.len()) + 1);
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.color(colors::TEXT_DEFAULT)
    ));
}

pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Prints `(key, value)` pairs as the leaves of the row above.
pub fn leaves(pairs: &[(String, ColoredString)]) {
    let key_width: usize = pairs
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in pairs.iter().enumerate() {
        let branch: &str = if i + 1 == pairs.len() { "└─" } else { "├─" };
        let dots: usize = key_width.saturating_sub(UnicodeWidthStr::width(key.as_str()));
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(dots).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

/// One-shot notification. Printed once and never redrawn.
pub fn notice(msg: &str) {
    let symbol: ColoredString = "[-]".color(colors::ERROR).bold();
    print(&format!("{} {}", symbol, msg.color(colors::ERROR)));
}
