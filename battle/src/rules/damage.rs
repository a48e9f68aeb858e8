//! Damage calculation and application

use crate::types::Combatant;

/// Every hit deals at least this much damage
pub const DAMAGE_FLOOR: f64 = 5.0;

/// Special attacks scale the attack stat by this factor
pub const SPECIAL_MULTIPLIER: f64 = 1.5;

/// Damage `attacker` deals to `defender`
///
/// `max(attack - defense, 5)`, with the attack stat scaled by 1.5 first for
/// special attacks. Odd attack stats keep the half point.
pub fn compute_damage(attacker: &Combatant, defender: &Combatant, is_special: bool) -> f64 {
    let base = if is_special {
        attacker.attack * SPECIAL_MULTIPLIER
    } else {
        attacker.attack
    };

    (base - defender.defense).max(DAMAGE_FLOOR)
}

/// Subtract damage from a combatant's HP, stopping at zero
///
/// Negative damage is treated as zero, so HP never rises here.
pub fn apply_damage(target: &mut Combatant, damage: f64) {
    target.hp = (target.hp - damage.max(0.0)).max(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(attack: u32, defense: u32, hp: u32) -> Combatant {
        Combatant::new("Test", attack, defense, hp)
    }

    #[test]
    fn test_normal_damage() {
        let attacker = fighter(50, 30, 100);
        let defender = fighter(40, 20, 80);
        assert_eq!(compute_damage(&attacker, &defender, false), 30.0);
        assert_eq!(compute_damage(&defender, &attacker, false), 10.0);
    }

    #[test]
    fn test_special_damage() {
        let attacker = fighter(20, 0, 100);
        let defender = fighter(0, 20, 100);
        // 20 * 1.5 - 20 = 10, above the floor
        assert_eq!(compute_damage(&attacker, &defender, true), 10.0);

        let attacker = fighter(50, 0, 100);
        let defender = fighter(0, 20, 100);
        assert_eq!(compute_damage(&attacker, &defender, true), 55.0);
    }

    #[test]
    fn test_special_keeps_half_point() {
        // 25 * 1.5 = 37.5
        let attacker = fighter(25, 0, 100);
        let defender = fighter(0, 7, 100);
        assert_eq!(compute_damage(&attacker, &defender, true), 30.5);

        let defender = fighter(0, 0, 100);
        assert_eq!(compute_damage(&attacker, &defender, true), 37.5);
    }

    #[test]
    fn test_half_points_add_up_to_knockout() {
        let attacker = fighter(25, 0, 100);
        let mut defender = fighter(0, 0, 75);

        for _ in 0..2 {
            let damage = compute_damage(&attacker, &defender, true);
            apply_damage(&mut defender, damage);
        }
        assert_eq!(defender.hp(), 0.0);
        assert!(defender.is_fainted());
    }

    #[test]
    fn test_damage_floor() {
        let attacker = fighter(10, 0, 100);
        let wall = fighter(0, 200, 100);
        assert_eq!(compute_damage(&attacker, &wall, false), DAMAGE_FLOOR);
        assert_eq!(compute_damage(&attacker, &wall, true), DAMAGE_FLOOR);

        // Raw damage exactly at the floor
        let defender = fighter(0, 5, 100);
        assert_eq!(compute_damage(&attacker, &defender, false), 5.0);

        // 3 * 1.5 - 0 = 4.5, lifted to the floor
        let weak = fighter(3, 0, 100);
        let defender = fighter(0, 0, 100);
        assert_eq!(compute_damage(&weak, &defender, true), DAMAGE_FLOOR);
    }

    #[test]
    fn test_damage_never_below_floor() {
        for attack in (0..=200).step_by(7) {
            for defense in (0..=200).step_by(11) {
                let attacker = fighter(attack, 0, 1);
                let defender = fighter(0, defense, 1);
                for special in [false, true] {
                    let damage = compute_damage(&attacker, &defender, special);
                    assert!(damage >= DAMAGE_FLOOR);

                    let base = if special {
                        f64::from(attack) * 1.5
                    } else {
                        f64::from(attack)
                    };
                    assert_eq!(damage, (base - f64::from(defense)).max(5.0));
                }
            }
        }
    }

    #[test]
    fn test_apply_damage() {
        let mut target = fighter(40, 20, 80);
        apply_damage(&mut target, 30.0);
        assert_eq!(target.hp(), 50.0);
        assert_eq!(target.max_hp(), 80.0);

        apply_damage(&mut target, 30.5);
        assert_eq!(target.hp(), 19.5);
    }

    #[test]
    fn test_apply_damage_clamps_at_zero() {
        let mut target = fighter(40, 20, 80);
        apply_damage(&mut target, 500.0);
        assert_eq!(target.hp(), 0.0);
        assert!(target.is_fainted());

        apply_damage(&mut target, 5.0);
        assert_eq!(target.hp(), 0.0);
    }

    #[test]
    fn test_apply_damage_stays_in_range() {
        for hp in [0, 1, 5, 50, 100] {
            for damage in [-10.0, 0.0, 1.0, 5.0, 49.5, 100.0, 1000.0] {
                let mut target = fighter(0, 0, hp);
                apply_damage(&mut target, damage);
                assert!(target.hp() >= 0.0);
                assert!(target.hp() <= f64::from(hp));
            }
        }
    }
}
