use async_trait::async_trait;
use pokeduel_battle::{Action, BattleSession, PresentationEvent};
use pokeduel_team::Creature;

use crate::stage::VersusEvent;

/// Trait for driving and rendering a duel.
///
/// Implement this trait to plug a front end into [`DuelClient`](crate::DuelClient).
/// Only the two choice methods are required; the rendering callbacks
/// default to no-ops, so you only implement the events you care about.
///
/// # Example
///
/// ```ignore
/// struct AlwaysAttack;
///
/// #[async_trait]
/// impl DuelHandler for AlwaysAttack {
///     async fn choose_creature(
///         &mut self,
///         cards: &[Creature],
///         _previous: Option<&Creature>,
///     ) -> Option<String> {
///         cards.first().map(|c| c.name.clone())
///     }
///
///     async fn choose_action(&mut self, _battle: &BattleSession) -> Option<Action> {
///         Some(Action::Attack)
///     }
/// }
/// ```
#[async_trait]
pub trait DuelHandler: Send {
    /// Pick a creature by name from the selection cards.
    /// `previous` is the selection restored from an earlier visit, if any.
    /// Returning `None` leaves without selecting.
    async fn choose_creature(
        &mut self,
        cards: &[Creature],
        previous: Option<&Creature>,
    ) -> Option<String>;

    /// Pick the player's next action. Returning `None` quits the battle.
    async fn choose_action(&mut self, battle: &BattleSession) -> Option<Action>;

    /// Called for each step of the versus presentation.
    async fn on_versus(&mut self, event: &VersusEvent) {
        let _ = event;
    }

    /// Called when a battle starts, before the first action is requested.
    async fn on_battle_start(&mut self, battle: &BattleSession) {
        let _ = battle;
    }

    /// Called for every presentation event of a resolved turn, in order.
    async fn on_event(&mut self, event: &PresentationEvent) {
        let _ = event;
    }
}
