//! Winning line analysis

use super::{Board, Cell, Coord, Player};

/// Which family a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    MainDiagonal,
    AntiDiagonal,
    Row(usize),
    Column(usize),
}

/// A full line of cells across the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub cells: Vec<Coord>,
}

impl Line {
    pub fn main_diagonal(size: usize) -> Self {
        Line {
            kind: LineKind::MainDiagonal,
            cells: (0..size).map(|i| Coord::new(i, i)).collect(),
        }
    }

    pub fn anti_diagonal(size: usize) -> Self {
        Line {
            kind: LineKind::AntiDiagonal,
            cells: (0..size).map(|i| Coord::new(i, size - 1 - i)).collect(),
        }
    }

    pub fn row(size: usize, row: usize) -> Self {
        Line {
            kind: LineKind::Row(row),
            cells: (0..size).map(|col| Coord::new(row, col)).collect(),
        }
    }

    pub fn column(size: usize, col: usize) -> Self {
        Line {
            kind: LineKind::Column(col),
            cells: (0..size).map(|row| Coord::new(row, col)).collect(),
        }
    }
}

/// All 2N+2 lines in search order: both diagonals first, then row i
/// followed by column i for increasing i.
pub fn all_lines(size: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * size + 2);
    lines.push(Line::main_diagonal(size));
    lines.push(Line::anti_diagonal(size));
    for i in 0..size {
        lines.push(Line::row(size, i));
        lines.push(Line::column(size, i));
    }
    lines
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has filled a whole line
    pub fn has_won(board: &Board, player: Player) -> bool {
        let target = player.to_cell();
        all_lines(board.size())
            .iter()
            .any(|line| line.cells.iter().all(|&c| board.get(c) == target))
    }

    /// First immediate winning cell for the player, in line search order
    pub fn winning_move(board: &Board, player: Player) -> Option<Coord> {
        all_lines(board.size())
            .iter()
            .find_map(|line| Self::winning_move_in_line(board, player, line))
    }

    /// All distinct cells that would immediately win for the player
    pub fn winning_moves(board: &Board, player: Player) -> Vec<Coord> {
        let mut moves: Vec<Coord> = Vec::new();
        for line in all_lines(board.size()) {
            if let Some(pos) = Self::winning_move_in_line(board, player, &line)
                && !moves.contains(&pos)
            {
                moves.push(pos);
            }
        }
        moves
    }

    /// Check if a player has an immediate winning move available
    pub fn has_immediate_win(board: &Board, player: Player) -> bool {
        Self::winning_move(board, player).is_some()
    }

    /// The single empty cell of a line whose other cells all belong to `player`
    pub fn winning_move_in_line(board: &Board, player: Player, line: &Line) -> Option<Coord> {
        let target = player.to_cell();
        let mut empty_pos = None;

        for &coord in &line.cells {
            match board.get(coord) {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(coord);
                }
                c if c == target => {}
                _ => return None, // opponent piece in line
            }
        }

        empty_pos
    }
}
