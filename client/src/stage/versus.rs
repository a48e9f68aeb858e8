//! Versus stage: draw an opponent and present the matchup

use std::time::Duration;

use anyhow::Result;
use pokeduel_protocol::{
    KeyValueStore, OPPONENT_KEY, PLAYER_KEY, SELECTED_KEY, load_record, save_record,
};
use pokeduel_team::{Creature, pick_opponent};
use rand::Rng;

use crate::{DuelClient, DuelHandler, StageError, pause};

/// A step of the versus presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersusEvent {
    /// The player's creature slides in
    PlayerIntro(Creature),
    /// "VS" banner and sound
    VersusShown,
    /// The opponent's creature slides in
    OpponentIntro(Creature),
}

impl<S: KeyValueStore, R: Rng> DuelClient<S, R> {
    /// Draw the opponent, play the presentation and store both creatures
    /// for the battle stage
    pub async fn run_versus<H: DuelHandler>(
        &mut self,
        handler: &mut H,
    ) -> Result<(Creature, Creature)> {
        let player: Creature =
            load_record(&mut self.store, SELECTED_KEY)?.ok_or(StageError::MissingSelection)?;
        let opponent = pick_opponent(&self.roster, &player.name, &mut self.rng)?;

        tracing::info!(
            player = %player.name,
            opponent = %opponent.name,
            opponent_shiny = opponent.shiny,
            "Opponent drawn"
        );

        let pacing = self.config.pacing.clone();
        let timeline = [
            (pacing.player_intro, VersusEvent::PlayerIntro(player.clone())),
            (pacing.versus_shown, VersusEvent::VersusShown),
            (pacing.opponent_intro, VersusEvent::OpponentIntro(opponent.clone())),
        ];

        // Offsets are measured from the start of the stage
        let mut elapsed = Duration::ZERO;
        for (at, event) in timeline {
            pause(at.saturating_sub(elapsed)).await;
            elapsed = elapsed.max(at);
            handler.on_versus(&event).await;
        }
        pause(pacing.versus_done.saturating_sub(elapsed)).await;

        save_record(&mut self.store, PLAYER_KEY, &player, self.config.ttl)?;
        save_record(&mut self.store, OPPONENT_KEY, &opponent, self.config.ttl)?;

        Ok((player, opponent))
    }
}

#[cfg(test)]
mod tests {
    use pokeduel_protocol::{OPPONENT_KEY, PLAYER_KEY, load_record};
    use pokeduel_team::{Creature, Roster};

    use super::VersusEvent;
    use crate::stage::testing::ScriptedHandler;
    use crate::{ClientConfig, DuelClient, StageError};

    #[tokio::test]
    async fn test_versus_without_selection() {
        let mut client =
            DuelClient::seeded(ClientConfig::instant(), Roster::builtin().unwrap(), 1);
        let mut handler = ScriptedHandler::default();

        let err = client.run_versus(&mut handler).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<StageError>(),
            Some(&StageError::MissingSelection)
        );
        assert!(handler.versus.is_empty());
    }

    #[tokio::test]
    async fn test_versus_presents_and_stores() {
        let mut client =
            DuelClient::seeded(ClientConfig::instant(), Roster::builtin().unwrap(), 2);
        let mut handler = ScriptedHandler::picking("Charmander");
        client.run_selection(&mut handler).await.unwrap();

        let (player, opponent) = client.run_versus(&mut handler).await.unwrap();
        assert_eq!(player.name, "Charmander");
        assert_ne!(opponent.name, "Charmander");

        assert_eq!(
            handler.versus,
            vec![
                VersusEvent::PlayerIntro(player.clone()),
                VersusEvent::VersusShown,
                VersusEvent::OpponentIntro(opponent.clone()),
            ]
        );

        let stored_player: Option<Creature> =
            load_record(client.store_mut(), PLAYER_KEY).unwrap();
        let stored_opponent: Option<Creature> =
            load_record(client.store_mut(), OPPONENT_KEY).unwrap();
        assert_eq!(stored_player, Some(player));
        assert_eq!(stored_opponent, Some(opponent));
    }
}
