//! Combat rules
//!
//! Pure calculations plus the two HP mutations. Every randomized rule takes
//! its random source as a parameter so battles can be replayed from a seed.

mod damage;
mod heal;
mod outcome;

pub use damage::{DAMAGE_FLOOR, SPECIAL_MULTIPLIER, apply_damage, compute_damage};
pub use heal::{HEAL_RANGE, heal};
pub use outcome::{Outcome, check_outcome};
