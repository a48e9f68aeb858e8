//! What a resolved turn hands back to the caller

use crate::rules::Outcome;
use crate::types::{Action, HpBand, Side};

/// What an action did
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Damage dealt to the other side
    Damage(f64),
    /// HP recovered by the actor
    Healed(f64),
    /// Heal attempted at full HP; nothing happened
    Forfeited,
}

/// Something the presentation layer should show
///
/// Events come in the order they should be played. Timing is entirely up to
/// the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresentationEvent {
    /// Append a line to the combat log
    Log(String),
    /// Redraw a side's HP bar
    HpChanged {
        side: Side,
        hp: f64,
        max_hp: f64,
        band: HpBand,
    },
    /// Lock the action buttons while the opponent plays
    ControlsDisabled,
    /// The opponent's turn is due (after the pacing delay)
    OpponentTurnScheduled,
    /// Unlock the action buttons
    ControlsEnabled,
    /// Stop the battle music
    MusicStopped,
    /// Play the losing side's defeat animation
    DefeatAnimation { side: Side },
    /// Show the end-of-battle notification (after a delay)
    EndNotification { message: String },
}

/// Result of one resolved turn
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// 1-based turn number, both sides counted
    pub turn: u32,

    /// Who acted
    pub actor: Side,

    pub action: Action,

    pub effect: Effect,

    /// Human-readable description of the turn
    pub log: String,

    // === State after the turn ===
    pub player_hp: f64,

    pub opponent_hp: f64,

    pub outcome: Outcome,

    pub events: Vec<PresentationEvent>,
}

impl TurnReport {
    /// HP after the turn for a side
    pub fn hp(&self, side: Side) -> f64 {
        match side {
            Side::Player => self.player_hp,
            Side::Opponent => self.opponent_hp,
        }
    }

    pub fn ended_battle(&self) -> bool {
        self.outcome.is_terminal()
    }
}
