//! Command implementations for Venvup CLI

pub mod completions;
pub mod doctor;
pub mod setup;
pub mod version;
