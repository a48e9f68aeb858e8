//! Win detection

use crate::types::{Combatant, Side};

/// Result of a win check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Ongoing,
    PlayerDefeated,
    OpponentDefeated,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The side that lost, if any
    pub fn defeated(&self) -> Option<Side> {
        match self {
            Outcome::Ongoing => None,
            Outcome::PlayerDefeated => Some(Side::Player),
            Outcome::OpponentDefeated => Some(Side::Opponent),
        }
    }

    /// The side that won, if any
    pub fn winner(&self) -> Option<Side> {
        self.defeated().map(Side::other)
    }

    /// End-of-battle message shown to the player
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Ongoing => None,
            Outcome::PlayerDefeated => Some("You lost! Your Pokémon was defeated."),
            Outcome::OpponentDefeated => Some("You won! You defeated the opponent's Pokémon."),
        }
    }
}

/// Check whether either side has been defeated
///
/// The player is checked first, so a simultaneous knockout counts as a loss.
pub fn check_outcome(player: &Combatant, opponent: &Combatant) -> Outcome {
    if player.is_fainted() {
        Outcome::PlayerDefeated
    } else if opponent.is_fainted() {
        Outcome::OpponentDefeated
    } else {
        Outcome::Ongoing
    }
}
