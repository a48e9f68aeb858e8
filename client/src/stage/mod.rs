//! The three stages of a duel
//!
//! Each stage reads what the previous one stored, so a stage entered on its
//! own fails with [`StageError`](crate::StageError) instead of guessing.

mod battle;
mod selection;
mod versus;

pub use versus::VersusEvent;
