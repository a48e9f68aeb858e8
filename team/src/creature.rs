//! The creature record handed between stages

use pokeduel_battle::Combatant;
use serde::{Deserialize, Serialize};

use crate::Species;

/// Path segment of the regular sprite set
pub const NORMAL_SPRITE: &str = "normal-sprite";

/// Path segment of the shiny sprite set
pub const SHINY_SPRITE: &str = "shiny-sprite";

/// Swap a sprite reference to its shiny variant
pub fn shiny_sprite(img: &str) -> String {
    img.replace(NORMAL_SPRITE, SHINY_SPRITE)
}

/// A chosen creature, before battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub types: Vec<String>,
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
    pub img: String,
    #[serde(default)]
    pub shiny: bool,
}

impl Creature {
    /// Build from a species, using the shiny sprite when `shiny` is set
    pub fn from_species(species: &Species, shiny: bool) -> Self {
        let img = if shiny {
            shiny_sprite(&species.img)
        } else {
            species.img.clone()
        };

        Self {
            name: species.name.clone(),
            types: species.types.clone(),
            attack: species.attack,
            defense: species.defense,
            hp: species.hp,
            img,
            shiny,
        }
    }

    /// Enter battle; the current HP becomes max HP
    pub fn into_combatant(self) -> Combatant {
        let img = if self.shiny {
            shiny_sprite(&self.img)
        } else {
            self.img
        };

        Combatant::new(self.name, self.attack, self.defense, self.hp)
            .with_types(self.types)
            .with_image(img)
            .with_shiny(self.shiny)
    }
}
