//! Combatant state

/// Visual HP band used for bar coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HpBand {
    /// Above 80%
    High,
    /// Above 40%
    Medium,
    /// 40% or below
    Low,
}

impl HpBand {
    /// Band for an HP percentage (0-100)
    pub fn from_percent(percent: f64) -> Self {
        if percent > 80.0 {
            HpBand::High
        } else if percent > 40.0 {
            HpBand::Medium
        } else {
            HpBand::Low
        }
    }
}

/// A creature taking part in a battle
///
/// `max_hp` is captured from the starting HP when the combatant is created
/// and never changes afterwards. `hp` only moves through the combat rules
/// ([`apply_damage`](crate::apply_damage) and [`heal`](crate::heal)) and
/// always stays within `0..=max_hp`.
///
/// Stats are plain `f64` numbers: a special attack scales the attack stat
/// by 1.5, so damage and HP can carry a half point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Combatant {
    /// Species name
    pub name: String,

    /// Types, in display order
    pub types: Vec<String>,

    pub attack: f64,

    pub defense: f64,

    // === HP ===
    pub(crate) hp: f64,

    pub(crate) max_hp: f64,

    // === Cosmetics ===
    /// Sprite reference
    pub image: String,

    /// Whether the shiny sprite is used (no stat effect)
    pub shiny: bool,
}

impl Combatant {
    /// Create a combatant at full HP
    pub fn new(
        name: impl Into<String>,
        attack: impl Into<f64>,
        defense: impl Into<f64>,
        hp: impl Into<f64>,
    ) -> Self {
        let hp = hp.into();
        Self {
            name: name.into(),
            types: Vec::new(),
            attack: attack.into(),
            defense: defense.into(),
            hp,
            max_hp: hp,
            image: String::new(),
            shiny: false,
        }
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_shiny(mut self, shiny: bool) -> Self {
        self.shiny = shiny;
        self
    }

    /// Current HP
    pub fn hp(&self) -> f64 {
        self.hp
    }

    /// HP at the start of the battle
    pub fn max_hp(&self) -> f64 {
        self.max_hp
    }

    /// Get HP as percentage (0-100)
    pub fn hp_percent(&self) -> f64 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        self.hp / self.max_hp * 100.0
    }

    pub fn hp_band(&self) -> HpBand {
        HpBand::from_percent(self.hp_percent())
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0.0
    }

    pub fn is_full_hp(&self) -> bool {
        self.hp >= self.max_hp
    }
}
