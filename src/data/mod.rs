//! Data structures shared between collectors and the renderer

pub mod facts;

pub use facts::{Fact, FactKind, FactSet};
