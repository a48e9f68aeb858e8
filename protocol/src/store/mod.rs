//! Short-lived key-value storage used to hand records between stages

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ParseError;

mod jar;

pub use jar::CookieJar;

/// Default lifetime of a hand-off record (24 hours)
pub const DEFAULT_TTL: Duration = Duration::from_secs(86_400);

/// Key of the creature chosen on the selection stage
pub const SELECTED_KEY: &str = "selectedPokemon";

/// Key of the player's creature going into battle
pub const PLAYER_KEY: &str = "playerPokemon";

/// Key of the opponent's creature going into battle
pub const OPPONENT_KEY: &str = "opponentPokemon";

/// String storage where every entry expires after a time-to-live
pub trait KeyValueStore {
    /// Store `value` under `key`, replacing any previous entry
    fn put(&mut self, key: &str, value: String, ttl: Duration) -> Result<()>;

    /// Get a live entry
    fn get(&mut self, key: &str) -> Option<String>;

    /// Remove an entry, returning it if it was still live
    fn remove(&mut self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-process store, lives as long as the session that owns it
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entry as if it had been inserted at `now`
    pub fn put_at(&mut self, key: &str, value: String, ttl: Duration, now: Instant) {
        self.entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
    }

    /// Read an entry as seen at `now`; expired entries are purged
    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<String> {
        let expired = self.entries.get(key)?.expires_at <= now;
        if expired {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Number of stored entries, expired ones included until read
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&mut self, key: &str, value: String, ttl: Duration) -> Result<()> {
        self.put_at(key, value, ttl, Instant::now());
        Ok(())
    }

    fn get(&mut self, key: &str) -> Option<String> {
        self.get_at(key, Instant::now())
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        let entry = self.entries.remove(key)?;
        (entry.expires_at > Instant::now()).then_some(entry.value)
    }
}

/// Serialize a record as JSON and store it
pub fn save_record<S, T>(store: &mut S, key: &str, record: &T, ttl: Duration) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(record)?;
    store.put(key, json, ttl)
}

/// Load a JSON record; `Ok(None)` when the key is absent or expired
///
/// A key holding an empty value (`selectedPokemon=`) is an error, not a
/// missing record.
pub fn load_record<S, T>(store: &mut S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(json) = store.get(key) else {
        return Ok(None);
    };
    if json.trim().is_empty() {
        return Err(ParseError::EmptyRecord(key.to_string()).into());
    }

    let record = serde_json::from_str(&json)
        .map_err(|e| ParseError::InvalidFormat(format!("invalid {} record: {}", key, e)))?;
    Ok(Some(record))
}
