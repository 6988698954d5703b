//! CLI infrastructure for the teacher binary
//!
//! This module provides the command-line interface for asking the teacher
//! for moves and inspecting how its skill level shapes its play.

pub mod commands;
pub mod config;
pub mod output;
