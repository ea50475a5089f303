//! Banner rendering: title, separator, then art lines paired with facts

use crate::config::Config;
use crate::data::FactSet;
use crate::utils::color::ColorSession;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Narrowest art column, so short art still leaves a gap before labels
const MIN_ART_COLUMN: usize = 11;

/// Title shown above the facts, e.g. `sysfetch v0.1.0 (rustc 1.80.1)`
pub fn title(runtime_version: &str) -> String {
    format!(
        "{} v{} (rustc {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        runtime_version
    )
}

pub fn art_column_width(config: &Config) -> usize {
    (config.ascii.width + 2).max(MIN_ART_COLUMN)
}

pub fn render<W: Write>(
    out: &mut W,
    config: &Config,
    title: &str,
    facts: &FactSet,
    art: &[String],
    colors: &ColorSession,
) -> io::Result<()> {
    let format = &config.format;
    let max_width = format.max_width;

    let centered = format!("{:^width$}", title, width = max_width);
    writeln!(out, "{}", colors.paint(&format.title_color, &centered))?;
    writeln!(out, "{}", colors.paint(&format.title_color, &"-".repeat(max_width)))?;

    let column = art_column_width(config);
    let art_color = &config.ascii.color;

    for (i, fact) in facts.iter().enumerate() {
        let art_line = art.get(i).map(String::as_str).unwrap_or("");
        writeln!(
            out,
            "{}{}{} {}",
            colors.paint(art_color, &pad_to_width(art_line, column)),
            format.prefix,
            colors.paint(&format.label_color, &format!("{}:", fact.label())),
            colors.paint(&format.value_color, &fact.value),
        )?;
    }

    out.flush()
}

/// Left-justify by display columns rather than bytes
fn pad_to_width(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}
