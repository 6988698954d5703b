//! The heuristic teacher: skill gate in front of the rule hierarchy

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    config::TeacherConfig,
    rules::{self, Rule},
};
use crate::{
    Error, Result,
    tictactoe::{Board, Coord, Player},
};

/// Why a move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    /// The skill draw failed and the move is uniformly random
    SkillGate,
    /// The first rule in the hierarchy that produced a move
    Rule(Rule),
}

/// A chosen move together with its reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub coord: Coord,
    pub source: MoveSource,
}

/// Rule-based opponent that plays near-optimal tic-tac-toe.
///
/// Each call draws `r` uniformly from [0, 1). When `r > skill_level` the
/// teacher plays a random empty cell; otherwise it walks [`Rule::HIERARCHY`]
/// and plays the first move a rule produces.
///
/// The teacher holds no per-game state and never writes to the board.
/// Randomness is supplied by the caller on every call, so one teacher can
/// serve many threads as long as each brings its own generator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeuristicTeacher {
    config: TeacherConfig,
}

impl HeuristicTeacher {
    /// Create a teacher from a validated config
    pub fn new(config: TeacherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Classic 3x3 teacher playing `mark` at the given skill level
    pub fn with_skill(mark: Player, skill_level: f64) -> Result<Self> {
        Self::new(
            TeacherConfig::default()
                .with_mark(mark)
                .with_skill_level(skill_level),
        )
    }

    pub fn config(&self) -> &TeacherConfig {
        &self.config
    }

    pub fn skill_level(&self) -> f64 {
        self.config.skill_level
    }

    pub fn board_size(&self) -> usize {
        self.config.board_size
    }

    pub fn mark(&self) -> Player {
        self.config.mark
    }

    pub fn opponent(&self) -> Player {
        self.config.mark.opponent()
    }

    pub fn win(&self, board: &Board) -> Option<Coord> {
        Rule::Win.evaluate(board, self.mark())
    }

    pub fn block_win(&self, board: &Board) -> Option<Coord> {
        Rule::BlockWin.evaluate(board, self.mark())
    }

    pub fn fork(&self, board: &Board) -> Option<Coord> {
        Rule::Fork.evaluate(board, self.mark())
    }

    pub fn block_fork(&self, board: &Board) -> Option<Coord> {
        Rule::BlockFork.evaluate(board, self.mark())
    }

    pub fn center(&self, board: &Board) -> Option<Coord> {
        Rule::Center.evaluate(board, self.mark())
    }

    pub fn corner(&self, board: &Board) -> Option<Coord> {
        Rule::Corner.evaluate(board, self.mark())
    }

    pub fn side(&self, board: &Board) -> Option<Coord> {
        Rule::Side.evaluate(board, self.mark())
    }

    /// Uniformly random empty cell
    pub fn random_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Result<Coord> {
        rules::random_move(board, rng).ok_or(Error::NoLegalMove)
    }

    fn check_board(&self, board: &Board) -> Result<()> {
        if board.size() != self.board_size() {
            return Err(Error::BoardSizeMismatch {
                expected: self.board_size(),
                got: board.size(),
            });
        }
        if board.is_full() {
            return Err(Error::NoLegalMove);
        }
        Ok(())
    }

    /// First deterministic rule that fires, skipping the random fallback
    pub fn heuristic_move(&self, board: &Board) -> Option<(Rule, Coord)> {
        let mark = self.mark();
        Rule::HIERARCHY
            .iter()
            .filter(|rule| rule.is_deterministic())
            .find_map(|&rule| rule.evaluate(board, mark).map(|c| (rule, c)))
    }

    /// Walk the hierarchy without the skill gate
    pub fn optimal_move_explained<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Decision> {
        self.check_board(board)?;
        Rule::HIERARCHY
            .iter()
            .find_map(|&rule| {
                rule.apply(board, self.mark(), rng).map(|coord| Decision {
                    coord,
                    source: MoveSource::Rule(rule),
                })
            })
            .ok_or(Error::NoLegalMove)
    }

    /// Hierarchy move without the skill gate
    pub fn optimal_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Result<Coord> {
        self.optimal_move_explained(board, rng).map(|d| d.coord)
    }

    /// Choose a move and report which path produced it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] when the board is full and
    /// [`Error::BoardSizeMismatch`] when it does not match the configured size.
    /// No random numbers are drawn in either case.
    pub fn choose_move_explained<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Decision> {
        self.check_board(board)?;

        let draw: f64 = rng.random();
        if draw > self.skill_level() {
            let coord = self.random_move(board, rng)?;
            return Ok(Decision {
                coord,
                source: MoveSource::SkillGate,
            });
        }

        self.optimal_move_explained(board, rng)
    }

    /// Choose a move for the current board
    pub fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Result<Coord> {
        self.choose_move_explained(board, rng).map(|d| d.coord)
    }

    /// Exact probability of each empty cell being chosen, row-major.
    ///
    /// The skill share goes to the heuristic move, or is spread evenly when
    /// only the random fallback applies; the rest is spread evenly over all
    /// empty cells.
    pub fn move_distribution(&self, board: &Board) -> Result<Vec<(Coord, f64)>> {
        self.check_board(board)?;

        let empties = board.empty_cells();
        let uniform = 1.0 / empties.len() as f64;
        let skill = self.skill_level();
        let heuristic = self.heuristic_move(board).map(|(_, coord)| coord);

        Ok(empties
            .into_iter()
            .map(|coord| {
                let greedy = match heuristic {
                    Some(best) if best == coord => skill,
                    Some(_) => 0.0,
                    None => skill * uniform,
                };
                (coord, greedy + (1.0 - skill) * uniform)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::tictactoe::Cell;

    fn expert(mark: Player) -> HeuristicTeacher {
        HeuristicTeacher::with_skill(mark, 1.0).unwrap()
    }

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn new_validates_config() {
        let err = HeuristicTeacher::new(TeacherConfig::default().with_skill_level(2.0));
        assert!(matches!(err, Err(Error::InvalidSkillLevel { .. })));
    }

    #[test]
    fn full_board_is_no_legal_move() {
        let mut rng = StdRng::seed_from_u64(1);
        let full = board("XOX/XOO/OXX");
        for skill in [0.0, 0.5, 1.0] {
            let teacher = HeuristicTeacher::with_skill(Player::X, skill).unwrap();
            assert!(matches!(
                teacher.choose_move(&full, &mut rng),
                Err(Error::NoLegalMove)
            ));
        }
        assert!(matches!(
            expert(Player::X).random_move(&full, &mut rng),
            Err(Error::NoLegalMove)
        ));
    }

    #[test]
    fn size_mismatch_is_reported() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = expert(Player::X)
            .choose_move(&Board::new(4), &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::BoardSizeMismatch {
                expected: 3,
                got: 4
            }
        ));
    }

    #[test]
    fn empty_board_takes_center() {
        let mut rng = StdRng::seed_from_u64(7);
        let decision = expert(Player::X)
            .choose_move_explained(&Board::classic(), &mut rng)
            .unwrap();
        assert_eq!(decision.coord, Coord::new(1, 1));
        assert_eq!(decision.source, MoveSource::Rule(Rule::Center));
    }

    #[test]
    fn win_beats_block() {
        let mut rng = StdRng::seed_from_u64(7);
        // X can win on row 1; O threatens row 0
        let b = board("OO-/XX-/---");
        let decision = expert(Player::X)
            .choose_move_explained(&b, &mut rng)
            .unwrap();
        assert_eq!(decision.coord, Coord::new(1, 2));
        assert_eq!(decision.source, MoveSource::Rule(Rule::Win));
    }

    #[test]
    fn teacher_playing_o() {
        let mut rng = StdRng::seed_from_u64(7);
        let teacher = expert(Player::O);
        let b = board("XX-/-O-/---");
        assert_eq!(teacher.choose_move(&b, &mut rng).unwrap(), Coord::new(0, 2));
        assert_eq!(teacher.block_win(&b), Some(Coord::new(0, 2)));
        assert_eq!(teacher.win(&b), None);
    }

    #[test]
    fn random_fallback_when_no_rule_fires() {
        // 4x4 has no center; fill corners and sides so only inner cells remain
        let b = board("XOOX/O--O/X--X/OXXO");
        let teacher = HeuristicTeacher::new(
            TeacherConfig::default()
                .with_board_size(4)
                .with_skill_level(1.0),
        )
        .unwrap();
        assert_eq!(teacher.heuristic_move(&b), None);

        let mut rng = StdRng::seed_from_u64(3);
        let decision = teacher.choose_move_explained(&b, &mut rng).unwrap();
        assert_eq!(decision.source, MoveSource::Rule(Rule::Random));
        assert!(b.is_empty(decision.coord));
    }

    #[test]
    fn distribution_sums_to_one() {
        let teacher = HeuristicTeacher::with_skill(Player::X, 0.7).unwrap();
        let b = board("X--/-O-/---");
        let dist = teacher.move_distribution(&b).unwrap();
        assert_eq!(dist.len(), 7);
        let total: f64 = dist.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);

        // O took the center, so the expert heads for a corner: (0,2)
        let best = dist
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();
        assert_eq!(best.0, Coord::new(0, 2));
        assert!((best.1 - (0.7 + 0.3 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn one_teacher_many_threads() {
        let teacher = HeuristicTeacher::with_skill(Player::O, 0.5).unwrap();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let mut rng = rand::rng();
                    let mut board = Board::classic();
                    board.set(Coord::new(1, 1), Cell::X);
                    while !board.is_full() {
                        let coord = teacher.choose_move(&board, &mut rng).unwrap();
                        assert!(board.is_empty(coord));
                        board.set(coord, Cell::O);
                    }
                });
            }
        });
    }

    #[test]
    fn zero_skill_distribution_is_uniform() {
        let teacher = HeuristicTeacher::with_skill(Player::X, 0.0).unwrap();
        let dist = teacher.move_distribution(&board("XO-/---/---")).unwrap();
        assert!(dist.iter().all(|(_, p)| (p - 1.0 / 7.0).abs() < 1e-12));
    }
}
