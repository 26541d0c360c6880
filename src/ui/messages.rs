//! Status lines printed by the CLI and the shell.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn badge(colour: Colour, icon: &str) -> String {
    Style::new().fg(colour).bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", badge(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", badge(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", badge(Colour::Yellow, ICON_WARN), msg);
}

/// Errors go to stderr so stdout stays a clean rendering of the board.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", badge(Colour::Red, ICON_ERR), msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        Style::new()
            .fg(Colour::Blue)
            .bold()
            .paint(format!("====================== {msg}"))
    );
}
