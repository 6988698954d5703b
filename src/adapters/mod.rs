//! Adapters implementing domain ports.

pub mod random_policy;
pub mod seeded_teacher;

pub use random_policy::RandomPolicy;
pub use seeded_teacher::SeededTeacher;
