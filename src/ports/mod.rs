//! Ports (trait boundaries) for external collaborators.
//!
//! The game loop and the learning agent live outside this crate; they talk to
//! move policies through the traits defined here.

pub mod policy;

pub use policy::MovePolicy;
