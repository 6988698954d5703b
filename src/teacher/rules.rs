//! The individual move heuristics and their priority order
//!
//! Every rule that returns a coordinate returns an empty one. Rules never
//! touch the board; they only read it.

use std::fmt;

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Coord, LineAnalyzer, Player};

/// A single heuristic in the teacher's decision hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Complete a line of our own
    Win,
    /// Complete the opponent's line before they do
    BlockWin,
    /// Set up two threats at once
    Fork,
    /// Take the cell the opponent would fork from
    BlockFork,
    /// Take the middle cell
    Center,
    /// Take a corner, preferring the one facing an opponent's corner
    Corner,
    /// Take a non-corner border cell
    Side,
    /// Any empty cell
    Random,
}

impl Rule {
    /// Rules in the order they are tried; the first one to produce a move wins.
    pub const HIERARCHY: [Rule; 8] = [
        Rule::Win,
        Rule::BlockWin,
        Rule::Fork,
        Rule::BlockFork,
        Rule::Center,
        Rule::Corner,
        Rule::Side,
        Rule::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Win => "win",
            Rule::BlockWin => "block-win",
            Rule::Fork => "fork",
            Rule::BlockFork => "block-fork",
            Rule::Center => "center",
            Rule::Corner => "corner",
            Rule::Side => "side",
            Rule::Random => "random",
        }
    }

    /// Rules whose answer does not depend on a random draw
    pub fn is_deterministic(self) -> bool {
        self != Rule::Random
    }

    /// Evaluate a deterministic rule for `mark`. [`Rule::Random`] yields `None`.
    pub fn evaluate(self, board: &Board, mark: Player) -> Option<Coord> {
        let opponent = mark.opponent();
        match self {
            Rule::Win => win_move(board, mark),
            Rule::BlockWin => win_move(board, opponent),
            Rule::Fork => fork_move(board, mark),
            Rule::BlockFork => fork_move(board, opponent),
            Rule::Center => center_move(board),
            Rule::Corner => corner_move(board, opponent),
            Rule::Side => side_move(board),
            Rule::Random => None,
        }
    }

    /// Evaluate any rule, drawing from `rng` only for [`Rule::Random`]
    pub fn apply<R: Rng + ?Sized>(
        self,
        board: &Board,
        mark: Player,
        rng: &mut R,
    ) -> Option<Coord> {
        match self {
            Rule::Random => random_move(board, rng),
            rule => rule.evaluate(board, mark),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cell completing a line that holds only `mark` and one gap.
///
/// Diagonals are searched before rows and columns.
pub fn win_move(board: &Board, mark: Player) -> Option<Coord> {
    LineAnalyzer::winning_move(board, mark)
}

/// Fork set-up: `mark` on (i, j) and (i+1, j+1) with both cross cells
/// (i, j+1) and (i+1, j) empty. Returns (i, j+1) for the first match
/// scanning rows, then columns.
pub fn fork_move(board: &Board, mark: Player) -> Option<Coord> {
    let n = board.size();
    let target = mark.to_cell();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 {
            if board.get(Coord::new(i, j)) == target
                && board.get(Coord::new(i + 1, j + 1)) == target
                && board.is_empty(Coord::new(i, j + 1))
                && board.is_empty(Coord::new(i + 1, j))
            {
                return Some(Coord::new(i, j + 1));
            }
        }
    }
    None
}

/// The center cell, if the board has one and it is empty
pub fn center_move(board: &Board) -> Option<Coord> {
    let n = board.size();
    if n.is_multiple_of(2) {
        return None;
    }
    let center = Coord::new(n / 2, n / 2);
    board.is_empty(center).then_some(center)
}

/// Corners in scan order: top-left, top-right, bottom-left, bottom-right
pub fn corners(size: usize) -> [Coord; 4] {
    let last = size.saturating_sub(1);
    [
        Coord::new(0, 0),
        Coord::new(0, last),
        Coord::new(last, 0),
        Coord::new(last, last),
    ]
}

fn opposite_corner(size: usize, corner: Coord) -> Coord {
    let last = size.saturating_sub(1);
    Coord::new(last - corner.row, last - corner.col)
}

/// Corner opposite one held by `opponent` if it is free, otherwise the first
/// free corner
pub fn corner_move(board: &Board, opponent: Player) -> Option<Coord> {
    let n = board.size();
    if n == 0 {
        return None;
    }
    let corners = corners(n);
    let theirs = opponent.to_cell();

    corners
        .iter()
        .filter(|&&c| board.get(c) == theirs)
        .map(|&c| opposite_corner(n, c))
        .find(|&opposite| board.is_empty(opposite))
        .or_else(|| corners.iter().copied().find(|&c| board.is_empty(c)))
}

/// Border cells that are not corners, row-major
pub fn sides(size: usize) -> Vec<Coord> {
    let last = size.saturating_sub(1);
    let on_edge = |i: usize| i == 0 || i == last;
    (0..size)
        .flat_map(|row| (0..size).map(move |col| Coord::new(row, col)))
        .filter(|c| on_edge(c.row) != on_edge(c.col))
        .collect()
}

/// First empty side cell
pub fn side_move(board: &Board) -> Option<Coord> {
    sides(board.size()).into_iter().find(|&c| board.is_empty(c))
}

/// Uniform choice among empty cells
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    board.empty_cells().choose(rng).copied()
}
