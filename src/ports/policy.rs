//! Move policy port - the seam a game loop or learner drives

use crate::{
    Result,
    tictactoe::{Board, Coord},
};

/// Anything that can pick a cell on a board.
///
/// A game loop owns the board, hands it to the policy by reference, and
/// applies the returned coordinate itself. Policies do not track turn order.
///
/// # Examples
///
/// ```
/// use ttt_teacher::{
///     adapters::SeededTeacher,
///     ports::MovePolicy,
///     teacher::HeuristicTeacher,
///     tictactoe::{Board, Coord},
/// };
///
/// let mut teacher = SeededTeacher::with_seed("teacher", HeuristicTeacher::default(), 42);
/// let mut board = Board::classic();
/// let coord: Coord = teacher.select_move(&board).unwrap();
/// board.place(coord, teacher.mark()).unwrap();
/// ```
pub trait MovePolicy: Send {
    /// Select a cell for the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no empty cell is available.
    fn select_move(&mut self, board: &Board) -> Result<Coord>;

    /// Name used in reports.
    fn name(&self) -> &str;

    /// Probability of each candidate cell, if the policy can state it.
    ///
    /// # Default Implementation
    ///
    /// Returns `None`.
    fn move_weights(&self, _board: &Board) -> Option<Vec<(Coord, f64)>> {
        None
    }

    /// Reseed the policy's random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
