//! Heuristic teacher bundled with its own random number generator

use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::MovePolicy,
    teacher::{Decision, HeuristicTeacher},
    tictactoe::{Board, Coord, Player},
};

/// [`HeuristicTeacher`] driven through the [`MovePolicy`] port.
///
/// The generator is the only thing that changes between calls; the teacher
/// itself stays stateless.
pub struct SeededTeacher {
    name: String,
    teacher: HeuristicTeacher,
    rng: StdRng,
}

impl SeededTeacher {
    /// Create a teacher seeded from system entropy
    pub fn new(name: impl Into<String>, teacher: HeuristicTeacher) -> Self {
        Self::with_seed(name, teacher, random())
    }

    /// Create a teacher with a deterministic seed
    pub fn with_seed(name: impl Into<String>, teacher: HeuristicTeacher, seed: u64) -> Self {
        Self {
            name: name.into(),
            teacher,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn teacher(&self) -> &HeuristicTeacher {
        &self.teacher
    }

    pub fn mark(&self) -> Player {
        self.teacher.mark()
    }

    /// Choose a move and report the rule behind it
    pub fn select_explained(&mut self, board: &Board) -> Result<Decision> {
        self.teacher.choose_move_explained(board, &mut self.rng)
    }
}

impl MovePolicy for SeededTeacher {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        self.teacher.choose_move(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn move_weights(&self, board: &Board) -> Option<Vec<(Coord, f64)>> {
        self.teacher.move_distribution(board).ok()
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
