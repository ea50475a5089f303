//! Configuration loading
//!
//! Search order, first existing file wins:
//! - `$SYSFETCH_CONFIG`
//! - `~/.config/sysfetch/config.ini`
//! - `/etc/sysfetch/config.ini`
//! - `config.ini` next to the executable
//!
//! Missing files are not an error; every key has a default.

use crate::error::{ConfigError, Result, SysfetchError};
use crate::utils::color::Color;
use crate::utils::file::read_file_safe;
use dirs::config_dir;
use ini::Ini;
use std::env;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "sysfetch";
pub const CONFIG_FILE: &str = "config.ini";
pub const CONFIG_ENV: &str = "SYSFETCH_CONFIG";
const SYSTEM_CONFIG: &str = "/etc/sysfetch/config.ini";

pub const DISPLAY_SECTION: &str = "display";
pub const ASCII_SECTION: &str = "ascii";
pub const FORMAT_SECTION: &str = "format";

/// Style value marking that the art lives inline in `ascii.custom`
pub const CUSTOM_STYLE: &str = "custom";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub display: DisplayConfig,
    pub ascii: AsciiConfig,
    pub format: FormatConfig,
}

/// Per-fact toggles
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub show_user: bool,
    pub show_hostname: bool,
    pub show_os: bool,
    pub show_kernel: bool,
    pub show_uptime: bool,
    pub show_shell: bool,
    pub show_cpu: bool,
    pub show_gpu: bool,
    pub show_memory: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_user: true,
            show_hostname: true,
            show_os: true,
            show_kernel: true,
            show_uptime: true,
            show_shell: true,
            show_cpu: true,
            show_gpu: true,
            show_memory: true,
        }
    }
}

impl DisplayConfig {
    fn toggle_mut(&mut self, key: &str) -> Option<&mut bool> {
        let slot = match key {
            "show_user" => &mut self.show_user,
            "show_hostname" => &mut self.show_hostname,
            "show_os" => &mut self.show_os,
            "show_kernel" => &mut self.show_kernel,
            "show_uptime" => &mut self.show_uptime,
            "show_shell" => &mut self.show_shell,
            "show_cpu" => &mut self.show_cpu,
            "show_gpu" => &mut self.show_gpu,
            "show_memory" => &mut self.show_memory,
            _ => return None,
        };
        Some(slot)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsciiConfig {
    /// Built-in style name, or `custom` for inline art
    pub style: String,
    /// Inline art; `\n` escapes separate lines in the file
    pub custom: Option<String>,
    /// External art file, `~` is expanded
    pub file: Option<String>,
    pub color: Color,
    /// Column width reserved for the art block
    pub width: usize,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            style: "default".to_string(),
            custom: None,
            file: None,
            color: named("cyan"),
            width: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    pub title_color: Color,
    pub label_color: Color,
    pub value_color: Color,
    /// Printed before every label
    pub prefix: String,
    /// Width of the title banner and separator
    pub max_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            title_color: named("cyan"),
            label_color: named("blue"),
            value_color: named("white"),
            prefix: String::new(),
            max_width: 40,
        }
    }
}

fn named(name: &str) -> Color {
    Color::parse(name).unwrap_or_default()
}

impl Config {
    /// Load from the standard search path
    pub fn load() -> Result<Self> {
        Self::load_from(&search_paths())
    }

    /// Load the first existing file in `paths`, or defaults when none exist.
    /// A file that exists but fails to read or parse is fatal; later paths are
    /// not tried.
    pub fn load_from(paths: &[PathBuf]) -> Result<Self> {
        match paths.iter().find(|path| path.is_file()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = read_file_safe(path)?;
        Self::from_ini_str(&text).map_err(|source| SysfetchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_ini_str(text: &str) -> std::result::Result<Self, ConfigError> {
        let document = Ini::load_from_str(text)?;
        Self::from_ini(&document)
    }

    /// Apply every key of `document` over the defaults.
    ///
    /// Values that do not convert to the key's type are rejected. Unknown
    /// sections and keys are logged and skipped.
    pub fn from_ini(document: &Ini) -> std::result::Result<Self, ConfigError> {
        let mut config = Self::default();
        for (section, properties) in document.iter() {
            let section = section.unwrap_or_default();
            for (key, value) in properties.iter() {
                config.apply(section, key, value)?;
            }
        }
        Ok(config)
    }

    fn apply(
        &mut self,
        section: &str,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let typed = Typed { section, key, value };

        match (section, key) {
            (DISPLAY_SECTION, _) => match self.display.toggle_mut(key) {
                Some(slot) => *slot = typed.boolean()?,
                None => unknown_key(section, key),
            },

            (ASCII_SECTION, "style") => self.ascii.style = value.to_string(),
            (ASCII_SECTION, "custom") => self.ascii.custom = non_empty(value),
            (ASCII_SECTION, "file") => self.ascii.file = non_empty(value),
            (ASCII_SECTION, "color") => self.ascii.color = typed.color()?,
            (ASCII_SECTION, "width") => self.ascii.width = typed.width()?,

            (FORMAT_SECTION, "title_color") => self.format.title_color = typed.color()?,
            (FORMAT_SECTION, "label_color") => self.format.label_color = typed.color()?,
            (FORMAT_SECTION, "value_color") => self.format.value_color = typed.color()?,
            (FORMAT_SECTION, "prefix") => self.format.prefix = value.to_string(),
            (FORMAT_SECTION, "max_width") => self.format.max_width = typed.width()?,

            _ => unknown_key(section, key),
        }
        Ok(())
    }
}

/// One raw `key = value` entry being converted to its typed field
struct Typed<'a> {
    section: &'a str,
    key: &'a str,
    value: &'a str,
}

impl Typed<'_> {
    fn boolean(&self) -> std::result::Result<bool, ConfigError> {
        match self.value.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(self.invalid("true or false")),
        }
    }

    fn width(&self) -> std::result::Result<usize, ConfigError> {
        self.value
            .trim()
            .parse()
            .map_err(|_| self.invalid("a non-negative integer"))
    }

    fn color(&self) -> std::result::Result<Color, ConfigError> {
        Color::parse(self.value).map_err(|_| self.invalid("an ANSI color name or #RRGGBB"))
    }

    fn invalid(&self, expected: &'static str) -> ConfigError {
        ConfigError::Value {
            section: self.section.to_string(),
            key: self.key.to_string(),
            value: self.value.to_string(),
            expected,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|v| !v.trim().is_empty())
}

fn unknown_key(section: &str, key: &str) {
    tracing::warn!(section, key, "unknown config key ignored");
}

/// Per-user config file, `~/.config/sysfetch/config.ini` on Linux
pub fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Config file shipped next to the executable
pub fn bundled_config_path() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(CONFIG_FILE))
}

/// Where `--import-art` writes: `$SYSFETCH_CONFIG` if set, else the user file
pub fn import_target_path() -> Option<PathBuf> {
    env_config_path().or_else(user_config_path)
}

fn env_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    paths.extend(env_config_path());
    paths.extend(user_config_path());
    paths.push(PathBuf::from(SYSTEM_CONFIG));
    paths.extend(bundled_config_path());

    paths
}
