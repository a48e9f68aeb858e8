//! Client configuration
use std::env;
use std::time::Duration;

use pokeduel_protocol::DEFAULT_TTL;

/// Delays used to pace the presentation
///
/// None of these affect the battle itself; [`Pacing::instant`] plays a
/// whole game without waiting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Wait before the opponent's automated turn
    pub opponent_delay: Duration,
    /// Wait before the end-of-battle notification
    pub notify_delay: Duration,
    /// Versus stage: player creature slides in
    pub player_intro: Duration,
    /// Versus stage: "VS" banner and sound
    pub versus_shown: Duration,
    /// Versus stage: opponent creature slides in
    pub opponent_intro: Duration,
    /// Versus stage: hand over to the battle
    pub versus_done: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            opponent_delay: Duration::from_millis(2000),
            notify_delay: Duration::from_millis(4000),
            player_intro: Duration::from_millis(500),
            versus_shown: Duration::from_millis(1500),
            opponent_intro: Duration::from_millis(2000),
            versus_done: Duration::from_millis(4000),
        }
    }
}

impl Pacing {
    /// No waiting at all
    pub fn instant() -> Self {
        Self {
            opponent_delay: Duration::ZERO,
            notify_delay: Duration::ZERO,
            player_intro: Duration::ZERO,
            versus_shown: Duration::ZERO,
            opponent_intro: Duration::ZERO,
            versus_done: Duration::ZERO,
        }
    }
}

/// Client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub pacing: Pacing,
    /// Lifetime of records handed between stages
    pub ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            ttl: DEFAULT_TTL,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEDUEL_OPPONENT_DELAY_MS` - Wait before the opponent acts (default: 2000)
    /// - `POKEDUEL_NOTIFY_DELAY_MS` - Wait before the end notification (default: 4000)
    /// - `POKEDUEL_HANDOFF_TTL_SECS` - Hand-off record lifetime (default: 86400)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("POKEDUEL_OPPONENT_DELAY_MS") {
            config.pacing.opponent_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("POKEDUEL_NOTIFY_DELAY_MS") {
            config.pacing.notify_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = read_env::<u64>("POKEDUEL_HANDOFF_TTL_SECS") {
            config.ttl = Duration::from_secs(secs.max(1));
        }

        config
    }

    /// Same configuration without any pacing delay
    pub fn instant() -> Self {
        Self {
            pacing: Pacing::instant(),
            ..Self::default()
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
