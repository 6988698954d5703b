//! Teacher options shared across CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use rand::{SeedableRng, random, rngs::StdRng};

use crate::{teacher::TeacherConfig, tictactoe::Player};

/// Flags that build a [`TeacherConfig`]; explicit flags override the config file
#[derive(Args, Debug, Clone, Default)]
pub struct TeacherArgs {
    /// JSON config file with `skill_level`, `board_size` and `mark`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Which mark the teacher plays (`x` or `o`)
    #[arg(long, short = 'm')]
    pub mark: Option<String>,

    /// Probability in [0, 1] of following the heuristics
    #[arg(long, short = 's')]
    pub skill: Option<f64>,

    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print diagnostics to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl TeacherArgs {
    /// Merge the config file (if any) with explicit flags and validate
    pub fn resolve(&self) -> Result<TeacherConfig> {
        let mut config = match &self.config {
            Some(path) => TeacherConfig::load(path)
                .with_context(|| format!("loading teacher config from {}", path.display()))?,
            None => TeacherConfig::default(),
        };

        if let Some(mark) = &self.mark {
            config.mark = parse_player_token(mark, "--mark")?;
        }
        if let Some(skill) = self.skill {
            config.skill_level = skill;
        }
        if let Some(size) = self.size {
            config.board_size = size;
        }

        config.validate()?;
        if self.verbose {
            eprintln!(
                "[teacher] mark={} skill={} size={}",
                config.mark, config.skill_level, config.board_size
            );
        }
        Ok(config)
    }

    /// Generator seeded from `--seed`, or from entropy when absent
    pub fn rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(random);
        if self.verbose {
            eprintln!("[teacher] seed={seed}");
        }
        StdRng::seed_from_u64(seed)
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
