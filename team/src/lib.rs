//! Roster and creature selection for pokeduel.
//!
//! Covers everything before the first turn: the species catalogue, the
//! shiny roll, the player's pick, the random opponent, and the
//! [`Creature`] record that travels between stages before it becomes a
//! [`Combatant`](pokeduel_battle::Combatant).

mod creature;
mod roster;
mod selection;

use thiserror::Error;

pub use creature::{Creature, NORMAL_SPRITE, SHINY_SPRITE, shiny_sprite};
pub use roster::{Roster, Species};
pub use selection::{SHINY_CHANCE, pick_opponent, roll_shiny};

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("No opponent available for {0}")]
    NoOpponent(String),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Invalid roster: {0}")]
    Json(#[from] serde_json::Error),
}
