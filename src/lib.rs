//! Rule-based tic-tac-toe teacher
//!
//! This crate provides:
//! - A square board model with line analysis
//! - The heuristic teacher: an ordered rule hierarchy behind a skill gate
//! - A move-policy port so game loops and learners can drive the teacher
//! - A small CLI for querying and sampling the teacher

pub mod adapters;
pub mod cli;
pub mod error;
pub mod ports;
pub mod teacher;
pub mod tictactoe;

pub use adapters::{RandomPolicy, SeededTeacher};
pub use error::{Error, Result};
pub use ports::MovePolicy;
pub use teacher::{Decision, HeuristicTeacher, MoveSource, Rule, TeacherConfig};
pub use tictactoe::{Board, Cell, Coord, Player};
