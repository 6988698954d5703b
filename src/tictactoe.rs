//! Tic-Tac-Toe board model

pub mod board;
pub mod lines;

pub use board::{Board, CLASSIC_SIZE, Cell, Coord, Player};
pub use lines::{Line, LineAnalyzer, LineKind, all_lines};
