//! Selection stage: pick a creature from the roster

use anyhow::Result;
use pokeduel_protocol::{KeyValueStore, SELECTED_KEY, load_record, save_record};
use pokeduel_team::{Creature, TeamError};
use rand::Rng;

use crate::{DuelClient, DuelHandler};

impl<S: KeyValueStore, R: Rng> DuelClient<S, R> {
    /// One card per species, each with its own shiny roll
    pub fn selection_cards(&mut self) -> Vec<Creature> {
        self.roster.roll_cards(&mut self.rng)
    }

    /// Remember the player's pick for the next stage
    pub fn select(&mut self, creature: &Creature) -> Result<()> {
        tracing::info!(creature = %creature.name, shiny = creature.shiny, "Creature selected");
        save_record(&mut self.store, SELECTED_KEY, creature, self.config.ttl)
    }

    /// The pick from an earlier visit, if it has not expired
    pub fn restore_selection(&mut self) -> Result<Option<Creature>> {
        load_record(&mut self.store, SELECTED_KEY)
    }

    /// Show the cards and store the handler's pick
    ///
    /// Returns `None` when the handler leaves without choosing.
    pub async fn run_selection<H: DuelHandler>(
        &mut self,
        handler: &mut H,
    ) -> Result<Option<Creature>> {
        let cards = self.selection_cards();
        let previous = self.restore_selection()?;

        let Some(name) = handler.choose_creature(&cards, previous.as_ref()).await else {
            return Ok(None);
        };

        let creature = cards
            .into_iter()
            .find(|card| card.name == name)
            .or_else(|| previous.filter(|p| p.name == name))
            .ok_or(TeamError::UnknownSpecies(name))?;

        self.select(&creature)?;
        Ok(Some(creature))
    }
}

#[cfg(test)]
mod tests {
    use pokeduel_team::Roster;

    use crate::stage::testing::ScriptedHandler;
    use crate::{ClientConfig, DuelClient};

    fn client() -> DuelClient {
        DuelClient::seeded(ClientConfig::instant(), Roster::builtin().unwrap(), 17)
    }

    #[tokio::test]
    async fn test_selection_is_stored() {
        let mut client = client();
        let mut handler = ScriptedHandler::picking("Pikachu");

        let creature = client.run_selection(&mut handler).await.unwrap().unwrap();
        assert_eq!(creature.name, "Pikachu");
        assert!(handler.previous.is_none());

        let restored = client.restore_selection().unwrap().unwrap();
        assert_eq!(restored, creature);
    }

    #[tokio::test]
    async fn test_previous_selection_offered() {
        let mut client = client();
        let mut handler = ScriptedHandler::picking("Eevee");
        client.run_selection(&mut handler).await.unwrap();

        let mut handler = ScriptedHandler::picking("Onix");
        client.run_selection(&mut handler).await.unwrap();

        assert_eq!(handler.previous.unwrap().name, "Eevee");
        assert_eq!(client.restore_selection().unwrap().unwrap().name, "Onix");
    }

    #[tokio::test]
    async fn test_unknown_pick_is_rejected() {
        let mut client = client();
        let mut handler = ScriptedHandler::picking("Agumon");

        assert!(client.run_selection(&mut handler).await.is_err());
        assert!(client.restore_selection().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_leaving_without_pick() {
        let mut client = client();
        let mut handler = ScriptedHandler::default();

        assert!(client.run_selection(&mut handler).await.unwrap().is_none());
    }
}
