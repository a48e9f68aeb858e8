//! Turn-based combat core for pokeduel.
//!
//! This crate owns everything that decides a battle: damage, healing, win
//! detection and the alternation between the player and the automated
//! opponent. It never renders, sleeps or plays sounds; every turn returns a
//! [`TurnReport`] whose [`PresentationEvent`]s tell the caller what to show.
//!
//! # Overview
//!
//! ```text
//! pokeduel-team (roster, selection)
//!        │  Combatant records
//!        ▼
//! pokeduel-battle (rules + session) ← THIS CRATE
//!        │  TurnReport / PresentationEvent
//!        ▼
//! pokeduel-client (stage driver, pacing, rendering)
//! ```
//!
//! # Main Types
//!
//! - [`Combatant`] - A battling creature's stats and HP
//! - [`Action`] - The three player actions: attack, special, heal
//! - [`BattleSession`] - Both combatants plus the turn [`Phase`]
//! - [`Outcome`] - Result of a win check
//! - [`TurnReport`] - What a resolved turn did
//!
//! # Example Usage
//!
//! ```
//! use pokeduel_battle::{Action, BattleSession, Combatant, Outcome};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let player = Combatant::new("Charmander", 50, 30, 100);
//! let opponent = Combatant::new("Squirtle", 40, 20, 80);
//! let mut battle = BattleSession::new(player, opponent).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let report = battle.submit(Action::Attack, &mut rng).unwrap();
//! assert_eq!(report.opponent_hp, 50.0);
//! assert_eq!(report.outcome, Outcome::Ongoing);
//!
//! let report = battle.opponent_turn(&mut rng).unwrap();
//! println!("{}", report.log);
//! ```

mod error;
pub mod rules;
pub mod session;
pub mod types;

pub use error::BattleError;
pub use rules::{
    DAMAGE_FLOOR, HEAL_RANGE, Outcome, apply_damage, check_outcome, compute_damage, heal,
};
pub use session::{
    BattleSession, Effect, Phase, PresentationEvent, TurnReport, choose_opponent_action,
};
pub use types::{Action, Combatant, HpBand, Side};
