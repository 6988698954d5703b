//! Teacher configuration

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{CLASSIC_SIZE, Player},
};

/// Probability of following the heuristics when none is configured
pub const DEFAULT_SKILL_LEVEL: f64 = 0.9;

/// Construction-time settings of a [`HeuristicTeacher`](super::HeuristicTeacher)
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file may hold only the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeacherConfig {
    /// Probability in [0, 1] of playing the heuristic move instead of a random one
    pub skill_level: f64,

    /// Side length of the board the teacher plays on
    pub board_size: usize,

    /// The teacher's own mark
    pub mark: Player,
}

impl Default for TeacherConfig {
    fn default() -> Self {
        Self {
            skill_level: DEFAULT_SKILL_LEVEL,
            board_size: CLASSIC_SIZE,
            mark: Player::X,
        }
    }
}

impl TeacherConfig {
    pub fn with_skill_level(mut self, skill_level: f64) -> Self {
        self.skill_level = skill_level;
        self
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_mark(mut self, mark: Player) -> Self {
        self.mark = mark;
        self
    }

    /// Check that the values can drive a teacher.
    ///
    /// # Errors
    ///
    /// Returns error if the skill level is not a finite number in [0, 1] or
    /// the board is smaller than 2x2.
    pub fn validate(&self) -> Result<()> {
        if !self.skill_level.is_finite() || !(0.0..=1.0).contains(&self.skill_level) {
            return Err(Error::InvalidSkillLevel {
                value: self.skill_level,
            });
        }
        if self.board_size < 2 {
            return Err(Error::InvalidBoardSize {
                size: self.board_size,
            });
        }
        Ok(())
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file '{}'", path.display()),
            source,
        })?;
        let config: TeacherConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| Error::Io {
            operation: format!("write config file '{}'", path.display()),
            source,
        })
    }
}
