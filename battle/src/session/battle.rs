//! BattleSession - the two combatants and whose turn it is

use crate::BattleError;
use crate::rules::Outcome;
use crate::types::{Combatant, Side};

/// Where a battle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Waiting for the player's action
    PlayerTurn,
    /// The opponent acts next, without outside input
    OpponentTurn,
    /// A side was defeated; no more turns
    Terminal(Outcome),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::PlayerTurn => write!(f, "player turn"),
            Phase::OpponentTurn => write!(f, "opponent turn"),
            Phase::Terminal(outcome) => write!(f, "finished battle ({:?})", outcome),
        }
    }
}

/// A battle between the player's combatant and an automated opponent
///
/// The session owns both combatants for the whole battle. Callers only get
/// shared references; HP changes go through [`submit`](Self::submit) and
/// [`opponent_turn`](Self::opponent_turn).
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub(crate) player: Combatant,
    pub(crate) opponent: Combatant,
    pub(crate) phase: Phase,

    /// Turns resolved so far, both sides counted
    pub(crate) turn: u32,
}

impl BattleSession {
    /// Start a battle; the player moves first
    ///
    /// Both combatants must have HP left and finite stats.
    pub fn new(player: Combatant, opponent: Combatant) -> Result<Self, BattleError> {
        for pokemon in [&player, &opponent] {
            let stats = [pokemon.attack, pokemon.defense, pokemon.max_hp()];
            if stats.iter().any(|stat| !stat.is_finite()) {
                return Err(BattleError::InvalidCombatant(format!(
                    "{} has a non-finite stat",
                    pokemon.name
                )));
            }
            if pokemon.max_hp() <= 0.0 || pokemon.is_fainted() {
                return Err(BattleError::InvalidCombatant(format!(
                    "{} has no HP",
                    pokemon.name
                )));
            }
        }

        tracing::debug!(
            player = %player.name,
            opponent = %opponent.name,
            "Battle started"
        );

        Ok(Self {
            player,
            opponent,
            phase: Phase::PlayerTurn,
            turn: 0,
        })
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    /// Get a combatant by side
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of turns resolved so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The side expected to act next, `None` once finished
    pub fn active_side(&self) -> Option<Side> {
        match self.phase {
            Phase::PlayerTurn => Some(Side::Player),
            Phase::OpponentTurn => Some(Side::Opponent),
            Phase::Terminal(_) => None,
        }
    }

    /// Whether the player can submit an action right now
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Outcome so far (`Ongoing` until a side is defeated)
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Terminal(outcome) => outcome,
            _ => Outcome::Ongoing,
        }
    }
}
