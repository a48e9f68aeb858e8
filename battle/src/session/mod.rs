//! Battle session and turn resolution

mod battle;
mod report;
mod resolver;

pub use battle::{BattleSession, Phase};
pub use report::{Effect, PresentationEvent, TurnReport};
pub use resolver::choose_opponent_action;
