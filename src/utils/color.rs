//! Terminal colors and the scoped color session used while rendering

use std::fmt;
use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";

/// A validated color setting: an ANSI name or a `#RRGGBB` hex value.
///
/// Keeps the original spelling for error messages and `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    name: String,
    escape: String,
}

impl Color {
    pub fn parse(value: &str) -> Result<Self, String> {
        let value = value.trim();
        let escape = ansi_code(value)
            .map(str::to_string)
            .or_else(|| hex_to_ansi(value))
            .ok_or_else(|| {
                format!(
                    "unknown color '{}' (use an ANSI name like 'cyan' or 'bright_red', or #RRGGBB)",
                    value
                )
            })?;

        Ok(Color {
            name: value.to_string(),
            escape,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn escape(&self) -> &str {
        &self.escape
    }
}

impl Default for Color {
    fn default() -> Self {
        Color {
            name: "reset".to_string(),
            escape: RESET.to_string(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn hex_to_ansi(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#').filter(|d| d.len() == 6 && d.is_ascii())?;
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(format!("\x1b[38;2;{};{};{}m", r, g, b))
}

fn ansi_code(name: &str) -> Option<&'static str> {
    let code = match name.to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => "\x1b[30m",
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        "white" => "\x1b[37m",

        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => "\x1b[90m",
        "bright_red" | "orange" => "\x1b[91m",
        "bright_green" => "\x1b[92m",
        "bright_yellow" => "\x1b[93m",
        "bright_blue" => "\x1b[94m",
        "bright_magenta" | "violet" => "\x1b[95m",
        "bright_cyan" => "\x1b[96m",
        "bright_white" => "\x1b[97m",

        "purple" => "\x1b[35m",
        "reset" | "default" => RESET,
        _ => return None,
    };
    Some(code)
}

/// Coloring is active only inside a session. Dropping an enabled session
/// writes a final reset so the shell prompt is never left tinted.
#[derive(Debug)]
pub struct ColorSession {
    enabled: bool,
}

impl ColorSession {
    pub fn new(enabled: bool) -> Self {
        ColorSession { enabled }
    }

    /// Colors on when stdout is a terminal and `NO_COLOR` is unset
    pub fn for_stdout() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(io::stdout().is_terminal() && !no_color)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, color: &Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color.escape(), text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl Drop for ColorSession {
    fn drop(&mut self) {
        if self.enabled {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(RESET.as_bytes());
            let _ = stdout.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_hex_parse() {
        assert_eq!(Color::parse("cyan").unwrap().escape(), "\x1b[36m");
        assert_eq!(Color::parse("Bright_Red").unwrap().escape(), "\x1b[91m");
        assert_eq!(
            Color::parse("#FF8000").unwrap().escape(),
            "\x1b[38;2;255;128;0m"
        );
    }

    #[test]
    fn unknown_colors_are_rejected() {
        assert!(Color::parse("chartreuse").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#GGGGGG").is_err());
    }

    #[test]
    fn disabled_session_leaves_text_plain() {
        let color = Color::parse("red").unwrap();
        assert_eq!(ColorSession::new(false).paint(&color, "x"), "x");
    }

    #[test]
    fn enabled_session_wraps_and_resets() {
        let color = Color::parse("red").unwrap();
        let session = ColorSession::new(true);
        assert_eq!(session.paint(&color, "x"), "\x1b[31mx\x1b[0m");
    }
}
