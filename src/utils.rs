use std::io::Write;

use crossterm::style::{style, Attribute, Color, Stylize};

use crate::Result;

/// Writes a `=== title ===` section header, coloured when `colored` is set.
pub fn header(out: &mut dyn Write, title: &str, colored: bool) -> Result<()> {
    let line = format!("=== {title} ===");
    if colored {
        writeln!(out, "{}", style(line).with(Color::Magenta).attribute(Attribute::Bold))?;
    } else {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
