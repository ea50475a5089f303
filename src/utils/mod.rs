//! Shared helpers used by collectors, config and display

pub mod color;
pub mod command;
pub mod file;
pub mod parsing;
pub mod uts;
