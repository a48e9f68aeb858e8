mod config;
mod handler;
pub mod stage;

use std::time::Duration;

use anyhow::Result;
use pokeduel_protocol::{KeyValueStore, MemoryStore};
use pokeduel_team::Roster;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

pub use config::{ClientConfig, Pacing};
pub use handler::DuelHandler;
pub use stage::VersusEvent;

pub use pokeduel_battle::{Action, BattleSession, Outcome, PresentationEvent, Side};
pub use pokeduel_team::Creature;

/// A stage was entered without the records it needs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    #[error("No creature selected, return to the selection stage")]
    MissingSelection,

    #[error("Battle data missing, return to the selection stage")]
    MissingCombatants,
}

/// Drives one player through selection, versus and battle
///
/// Records move between stages through a [`KeyValueStore`], the same way
/// separate pages would hand them over.
pub struct DuelClient<S = MemoryStore, R = StdRng> {
    config: ClientConfig,
    roster: Roster,
    store: S,
    rng: R,
}

impl DuelClient<MemoryStore, StdRng> {
    /// In-memory store and an entropy-seeded generator
    pub fn new(config: ClientConfig, roster: Roster) -> Self {
        Self::with_parts(config, roster, MemoryStore::new(), StdRng::from_entropy())
    }

    /// In-memory store and a fixed seed, for reproducible games
    pub fn seeded(config: ClientConfig, roster: Roster, seed: u64) -> Self {
        Self::with_parts(config, roster, MemoryStore::new(), StdRng::seed_from_u64(seed))
    }
}

impl<S: KeyValueStore, R: rand::Rng> DuelClient<S, R> {
    pub fn with_parts(config: ClientConfig, roster: Roster, store: S, rng: R) -> Self {
        Self {
            config,
            roster,
            store,
            rng,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Play every stage in order
    ///
    /// Returns the battle outcome, or `None` if the player left early.
    pub async fn run<H: DuelHandler>(&mut self, handler: &mut H) -> Result<Option<Outcome>> {
        if self.run_selection(handler).await?.is_none() {
            return Ok(None);
        }
        self.run_versus(handler).await?;
        self.run_battle(handler).await
    }
}

/// Sleep unless the delay is zero
pub(crate) async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
