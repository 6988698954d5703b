//! Subcommand implementations

pub mod choose;
pub mod rules;
pub mod sample;
