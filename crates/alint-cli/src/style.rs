//! Terminal styling for CLI output. Colors are only used on a terminal.

use std::io::IsTerminal;

use owo_colors::{OwoColorize, Style};

fn paint(text: &str, style: Style) -> String {
    if std::io::stdout().is_terminal() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

pub fn success(text: impl AsRef<str>) -> String {
    paint(text.as_ref(), Style::new().green())
}

pub fn warning(text: impl AsRef<str>) -> String {
    paint(text.as_ref(), Style::new().yellow())
}

pub fn error(text: impl AsRef<str>) -> String {
    paint(text.as_ref(), Style::new().red().bold())
}
