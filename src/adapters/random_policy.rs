//! Uniform random baseline

use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::MovePolicy,
    teacher::rules,
    tictactoe::{Board, Coord},
};

/// Random policy (baseline)
pub struct RandomPolicy {
    name: String,
    rng: StdRng,
}

impl RandomPolicy {
    /// Create a new random policy
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random policy with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        rules::random_move(board, &mut self.rng).ok_or(Error::NoLegalMove)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn move_weights(&self, board: &Board) -> Option<Vec<(Coord, f64)>> {
        let moves = board.empty_cells();
        if moves.is_empty() {
            return None;
        }
        let weight = 1.0 / moves.len() as f64;
        Some(moves.into_iter().map(|mv| (mv, weight)).collect())
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
