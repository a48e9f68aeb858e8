//! Domain types for combat

mod action;
mod combatant;
mod side;

pub use action::Action;
pub use combatant::{Combatant, HpBand};
pub use side::Side;
