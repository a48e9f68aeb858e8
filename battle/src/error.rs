use thiserror::Error;

use crate::session::Phase;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Action not accepted during {phase}")]
    InvalidState { phase: Phase },

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid combatant: {0}")]
    InvalidCombatant(String),
}
