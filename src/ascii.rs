//! ASCII art selection: inline config text, an external file, or a
//! built-in style.

use crate::config::AsciiConfig;
use crate::utils::file::read_file_safe;

pub const DEFAULT_STYLE: &str = "default";

/// Names of the art shipped with the binary
pub const BUILTIN_STYLES: [&str; 5] = ["default", "tux", "ferris", "box", "minimal"];

pub fn builtin(style: &str) -> Option<&'static str> {
    match style.to_lowercase().as_str() {
        "default" => Some(include_str!("../ascii/default.txt")),
        "tux" => Some(include_str!("../ascii/tux.txt")),
        "ferris" => Some(include_str!("../ascii/ferris.txt")),
        "box" => Some(include_str!("../ascii/box.txt")),
        "minimal" => Some(include_str!("../ascii/minimal.txt")),
        _ => None,
    }
}

/// Resolve the art lines for `config`.
///
/// Inline `custom` text wins, then `file`, then the named `style`; anything
/// unresolvable ends at the default style.
pub fn resolve_art(config: &AsciiConfig) -> Vec<String> {
    if let Some(custom) = config
        .custom
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
    {
        return to_lines(custom);
    }

    if let Some(path) = config
        .file
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        let expanded = shellexpand::tilde(path).to_string();
        match read_file_safe(&expanded) {
            Ok(text) => return to_lines(text.trim()),
            Err(err) => tracing::error!(%err, "cannot read ASCII art file, using a built-in style"),
        }
    }

    let art = builtin(&config.style).unwrap_or_else(|| {
        tracing::debug!(style = %config.style, "unknown ASCII style, using default");
        include_str!("../ascii/default.txt")
    });
    to_lines(art)
}

fn to_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim_end_matches('\r').to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CUSTOM_STYLE;
    use std::fs;
    use tempfile::TempDir;

    fn ascii(style: &str) -> AsciiConfig {
        AsciiConfig {
            style: style.to_string(),
            ..AsciiConfig::default()
        }
    }

    #[test]
    fn every_builtin_style_resolves() {
        for style in BUILTIN_STYLES {
            let art = builtin(style).unwrap();
            assert_eq!(resolve_art(&ascii(style)), to_lines(art));
            assert!(!art.trim().is_empty());
        }
    }

    #[test]
    fn unknown_style_falls_back_to_default() {
        let expected = to_lines(builtin(DEFAULT_STYLE).unwrap());
        assert_eq!(resolve_art(&ascii("no-such-style")), expected);
        // The sentinel without inline text has nothing to show either
        assert_eq!(resolve_art(&ascii(CUSTOM_STYLE)), expected);
    }

    #[test]
    fn inline_art_beats_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("art.txt");
        fs::write(&path, "from file\n").unwrap();

        let config = AsciiConfig {
            style: CUSTOM_STYLE.to_string(),
            custom: Some("\n inline\n art \n".to_string()),
            file: Some(path.display().to_string()),
            ..AsciiConfig::default()
        };
        assert_eq!(resolve_art(&config), vec!["inline", " art"]);
    }

    #[test]
    fn file_beats_style_and_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("art.txt");
        fs::write(&path, "\n\n  /\\\n /  \\\n\n").unwrap();

        let config = AsciiConfig {
            file: Some(path.display().to_string()),
            ..ascii("tux")
        };
        assert_eq!(resolve_art(&config), vec!["/\\", " /  \\"]);
    }

    #[test]
    fn unreadable_file_falls_through_to_style() {
        let dir = TempDir::new().unwrap();
        let config = AsciiConfig {
            file: Some(dir.path().join("missing.txt").display().to_string()),
            ..ascii("minimal")
        };
        assert_eq!(resolve_art(&config), to_lines(builtin("minimal").unwrap()));
    }
}
