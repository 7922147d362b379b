//! Core data models for the play tracker.

mod outcome;
mod play;

pub use outcome::*;
pub use play::*;
