//! The fixed set of battle actions

use std::str::FromStr;

use crate::BattleError;

/// An action a combatant can take on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    /// Plain attack: attacker's attack minus defender's defense
    Attack,
    /// Attack with the attacker's attack stat boosted by 1.5x
    Special,
    /// Recover a random amount of HP
    Heal,
}

impl Action {
    /// All actions, in menu order
    pub const ALL: [Action; 3] = [Action::Attack, Action::Special, Action::Heal];

    /// Whether this action deals damage
    pub fn is_attack(&self) -> bool {
        !matches!(self, Action::Heal)
    }

    pub fn is_special(&self) -> bool {
        matches!(self, Action::Special)
    }

    /// Name accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Attack => "attack",
            Action::Special => "special",
            Action::Heal => "heal",
        }
    }
}

impl FromStr for Action {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attack" => Ok(Action::Attack),
            "special" => Ok(Action::Special),
            "heal" => Ok(Action::Heal),
            _ => Err(BattleError::UnknownAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("attack".parse::<Action>(), Ok(Action::Attack));
        assert_eq!("Special".parse::<Action>(), Ok(Action::Special));
        assert_eq!(" HEAL ".parse::<Action>(), Ok(Action::Heal));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "run".parse::<Action>(),
            Err(BattleError::UnknownAction("run".to_string()))
        );
    }

    #[test]
    fn test_as_str_parses_back() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_is_attack() {
        assert!(Action::Attack.is_attack());
        assert!(Action::Special.is_attack());
        assert!(!Action::Heal.is_attack());
        assert!(Action::Special.is_special());
        assert!(!Action::Attack.is_special());
    }
}
