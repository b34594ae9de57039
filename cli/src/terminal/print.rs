use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;
use hwtree_common::config::Config;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let text_content: String = format!("⟦ HWTREE v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).color(colors::SEPARATOR);
    println!("{}{}{}", sep, text, sep);
}

pub fn header(msg: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    println!("{}", line);
}

pub fn fat_separator(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    println!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
}

/// Writes a rendered tree verbatim. No colouring, the text is the contract.
pub fn tree(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

pub fn check_line(idx: usize, name: &str, lines: usize) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    println!(
        "{} {} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::TEXT_DEFAULT),
        format!("({lines} lines)").color(colors::SEPARATOR)
    );
}
