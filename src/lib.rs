//! sysfetch library
//!
//! A small system information banner: host facts next to ASCII art.

pub mod ascii;
pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod import;
pub mod utils;

pub use config::Config;
pub use data::{Fact, FactKind, FactSet};
pub use error::{ConfigError, Result, SysfetchError};

/// Collect every fact enabled in `config`, in display order
pub fn collect_facts(config: &Config) -> FactSet {
    FactSet::build(&config.display, collectors::collect)
}
