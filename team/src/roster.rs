//! Species catalogue

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::selection::roll_shiny;
use crate::{Creature, TeamError};

const BUILTIN_ROSTER: &str = include_str!("../data/roster.json");

/// A selectable species and its base stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub types: Vec<String>,
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
    /// Normal sprite reference
    pub img: String,
}

/// Ordered list of species to choose from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    species: Vec<Species>,
}

impl Roster {
    pub fn new(species: Vec<Species>) -> Self {
        Self { species }
    }

    /// Parse a JSON array of species
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The roster shipped with the crate
    pub fn builtin() -> Result<Self, TeamError> {
        Self::from_json(BUILTIN_ROSTER)
    }

    /// Find a species by exact name
    pub fn find(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name == name)
    }

    /// Find a species by name, failing if absent
    pub fn get(&self, name: &str) -> Result<&Species, TeamError> {
        self.find(name)
            .ok_or_else(|| TeamError::UnknownSpecies(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Selection cards: every species with its own shiny roll
    pub fn roll_cards<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Creature> {
        self.species
            .iter()
            .map(|species| Creature::from_species(species, roll_shiny(rng)))
            .collect()
    }
}
