//! Battle stage: run the turn loop with presentation pacing

use anyhow::Result;
use pokeduel_battle::{BattleSession, Outcome, PresentationEvent, TurnReport};
use pokeduel_protocol::{KeyValueStore, OPPONENT_KEY, PLAYER_KEY, load_record};
use pokeduel_team::Creature;
use rand::Rng;

use crate::{DuelClient, DuelHandler, StageError, pause};

impl<S: KeyValueStore, R: Rng> DuelClient<S, R> {
    /// Fight the stored player and opponent until one is defeated
    ///
    /// Returns the final outcome, or `None` if the handler quit mid-battle.
    pub async fn run_battle<H: DuelHandler>(
        &mut self,
        handler: &mut H,
    ) -> Result<Option<Outcome>> {
        let player: Option<Creature> = load_record(&mut self.store, PLAYER_KEY)?;
        let opponent: Option<Creature> = load_record(&mut self.store, OPPONENT_KEY)?;
        let (Some(player), Some(opponent)) = (player, opponent) else {
            tracing::warn!("Battle stage entered without both combatants");
            return Err(StageError::MissingCombatants.into());
        };

        let mut battle = BattleSession::new(player.into_combatant(), opponent.into_combatant())?;
        handler.on_battle_start(&battle).await;

        loop {
            let Some(action) = handler.choose_action(&battle).await else {
                tracing::info!(turn = battle.turn(), "Player left the battle");
                return Ok(None);
            };

            let report = battle.submit(action, &mut self.rng)?;
            self.deliver(handler, &report).await;
            if report.ended_battle() {
                return Ok(Some(report.outcome));
            }

            pause(self.config.pacing.opponent_delay).await;

            let report = battle.opponent_turn(&mut self.rng)?;
            self.deliver(handler, &report).await;
            if report.ended_battle() {
                return Ok(Some(report.outcome));
            }
        }
    }

    async fn deliver<H: DuelHandler>(&self, handler: &mut H, report: &TurnReport) {
        for event in &report.events {
            if matches!(event, PresentationEvent::EndNotification { .. }) {
                pause(self.config.pacing.notify_delay).await;
            }
            handler.on_event(event).await;
        }
    }
}
