//! Common test utilities for the teacher test suite.
//!
//! Board builders, exhaustive board enumeration, a minimal game loop, and a
//! chi-square helper for the statistical tests.

#![allow(dead_code)]

use rand::{SeedableRng, rngs::StdRng};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use ttt_teacher::{Board, HeuristicTeacher, MovePolicy, Player};

pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test {s}: {e}"))
}

/// Teacher that always follows the hierarchy
pub fn expert(mark: Player) -> HeuristicTeacher {
    HeuristicTeacher::with_skill(mark, 1.0).unwrap()
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Every 3x3 filling of {-, X, O}, legal game position or not
pub fn all_classic_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut text = String::with_capacity(9);
        for _ in 0..9 {
            text.push(['-', 'X', 'O'][code % 3]);
            code /= 3;
        }
        board(&text)
    })
}

/// Play until someone wins or the board fills; X moves first.
pub fn play_game(x: &mut dyn MovePolicy, o: &mut dyn MovePolicy) -> (Board, Option<Player>) {
    let mut board = Board::classic();
    let mut to_move = Player::X;
    while !board.is_terminal() {
        let policy: &mut dyn MovePolicy = match to_move {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let coord = policy.select_move(&board).unwrap();
        board
            .place(coord, to_move)
            .unwrap_or_else(|e| panic!("{} played an illegal move: {e}", policy.name()));
        to_move = to_move.opponent();
    }
    let winner = board.winner();
    (board, winner)
}

/// Upper-tail p-value of Pearson's chi-square statistic
pub fn chi_square_p_value(observed: &[usize], expected_probabilities: &[f64]) -> f64 {
    assert_eq!(observed.len(), expected_probabilities.len());
    let total: usize = observed.iter().sum();
    let statistic: f64 = observed
        .iter()
        .zip(expected_probabilities)
        .map(|(&o, &p)| {
            let expected = p * total as f64;
            (o as f64 - expected).powi(2) / expected
        })
        .sum();
    let dof = (observed.len() - 1) as f64;
    let dist = ChiSquared::new(dof).unwrap();
    1.0 - dist.cdf(statistic)
}
