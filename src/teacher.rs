//! Rule-based teacher that produces near-optimal, occasionally random moves
//!
//! The teacher tries, in order: win, block a win, fork, block a fork, center,
//! corner, side, and finally any empty cell. A skill level sets how often it
//! skips the rules and plays at random instead.

pub mod config;
pub mod policy;
pub mod rules;

pub use config::{DEFAULT_SKILL_LEVEL, TeacherConfig};
pub use policy::{Decision, HeuristicTeacher, MoveSource};
pub use rules::Rule;
