//! Healing

use std::ops::RangeInclusive;

use rand::Rng;

use crate::types::Combatant;

/// Possible heal rolls, inclusive
pub const HEAL_RANGE: RangeInclusive<u32> = 10..=29;

/// Heal a combatant by a random amount, never above its max HP
///
/// Returns the HP actually recovered. A combatant already at full HP cannot
/// heal: nothing changes and 0 is returned (the turn is forfeited).
pub fn heal<R: Rng + ?Sized>(target: &mut Combatant, rng: &mut R) -> f64 {
    if target.is_full_hp() {
        tracing::debug!(
            combatant = %target.name,
            hp = target.hp,
            "Cannot heal at full HP, turn forfeited"
        );
        return 0.0;
    }

    let roll = f64::from(rng.gen_range(HEAL_RANGE));
    let healed = roll.min(target.max_hp - target.hp);
    target.hp += healed;
    healed
}
