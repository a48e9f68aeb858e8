//! Shiny rolls and opponent pick

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Creature, Roster, TeamError};

/// Probability that a rolled creature is shiny
pub const SHINY_CHANCE: f64 = 0.1;

pub fn roll_shiny<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(SHINY_CHANCE)
}

/// Pick a random opponent of a different species than the player's
pub fn pick_opponent<R: Rng + ?Sized>(
    roster: &Roster,
    player_name: &str,
    rng: &mut R,
) -> Result<Creature, TeamError> {
    let candidates: Vec<_> = roster.iter().filter(|s| s.name != player_name).collect();
    let species = candidates
        .choose(rng)
        .ok_or_else(|| TeamError::NoOpponent(player_name.to_string()))?;

    Ok(Creature::from_species(species, roll_shiny(rng)))
}
