//! Browser-style cookie storage

use std::time::{Duration, Instant};

use anyhow::Result;

use super::KeyValueStore;
use crate::cookie::{SetCookie, find_cookie};

#[derive(Debug, Clone)]
struct StoredCookie {
    name: String,
    value: String,
    expires_at: Instant,
}

/// A cookie jar used as a [`KeyValueStore`]
///
/// Writes go out as `Set-Cookie` lines and reads come back through the
/// `Cookie` header, so records travel in the same form they would between
/// pages. Values end at the first `;`, as in a browser.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: Vec<StoredCookie>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a `Set-Cookie` line received at `now`
    ///
    /// A cookie with the same name is replaced. `max-age=0` deletes it.
    pub fn set_cookie_at(&mut self, line: &str, now: Instant) -> Result<()> {
        let cookie = SetCookie::parse(line)?;
        self.cookies.retain(|stored| stored.name != cookie.name);

        if !cookie.max_age.is_zero() {
            self.cookies.push(StoredCookie {
                name: cookie.name,
                value: cookie.value,
                expires_at: now + cookie.max_age,
            });
        }
        Ok(())
    }

    /// The `Cookie` header as it would be sent at `now`
    ///
    /// Live cookies in the order they were first set; expired ones are
    /// dropped from the jar.
    pub fn header_at(&mut self, now: Instant) -> String {
        self.cookies.retain(|stored| stored.expires_at > now);
        self.cookies
            .iter()
            .map(|stored| format!("{}={}", stored.name, stored.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Number of cookies held, expired ones included until the next read
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl KeyValueStore for CookieJar {
    fn put(&mut self, key: &str, value: String, ttl: Duration) -> Result<()> {
        let line = SetCookie::new(key, value, ttl).to_wire_format();
        self.set_cookie_at(&line, Instant::now())
    }

    fn get(&mut self, key: &str) -> Option<String> {
        let header = self.header_at(Instant::now());
        // Every stored name went through the parser, so the header parses
        find_cookie(&header, key).ok().flatten()
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        let value = self.get(key)?;
        self.cookies.retain(|stored| stored.name != key);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_TTL, ParseError, SELECTED_KEY, load_record, save_record};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        hp: u32,
    }

    #[test]
    fn test_put_goes_through_header() {
        let mut jar = CookieJar::new();
        jar.put("a", "1".to_string(), DEFAULT_TTL).unwrap();
        jar.put("b", "2".to_string(), DEFAULT_TTL).unwrap();

        assert_eq!(jar.header_at(Instant::now()), "a=1; b=2");
        assert_eq!(jar.get("b").as_deref(), Some("2"));
        assert_eq!(jar.get("c"), None);
    }

    #[test]
    fn test_set_cookie_replaces() {
        let mut jar = CookieJar::new();
        let now = Instant::now();
        jar.set_cookie_at("a=1; path=/; max-age=60;", now).unwrap();
        jar.set_cookie_at("a=2; path=/; max-age=60;", now).unwrap();

        assert_eq!(jar.len(), 1);
        assert_eq!(jar.header_at(now), "a=2");
    }

    #[test]
    fn test_cookie_expires() {
        let mut jar = CookieJar::new();
        let now = Instant::now();
        jar.set_cookie_at("a=1; path=/; max-age=10;", now).unwrap();

        assert_eq!(jar.header_at(now + Duration::from_secs(9)), "a=1");
        assert_eq!(jar.header_at(now + Duration::from_secs(10)), "");
        assert!(jar.is_empty());
    }

    #[test]
    fn test_zero_max_age_deletes() {
        let mut jar = CookieJar::new();
        let now = Instant::now();
        jar.set_cookie_at("a=1; path=/; max-age=60;", now).unwrap();
        jar.set_cookie_at("a=; path=/; max-age=0;", now).unwrap();

        assert!(jar.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut jar = CookieJar::new();
        jar.put("a", "1".to_string(), DEFAULT_TTL).unwrap();

        assert_eq!(jar.remove("a").as_deref(), Some("1"));
        assert_eq!(jar.remove("a"), None);
    }

    #[test]
    fn test_rejects_bad_line() {
        let mut jar = CookieJar::new();

        assert!(jar.set_cookie_at("no-equals; max-age=10", Instant::now()).is_err());
        assert!(jar.put("", "1".to_string(), DEFAULT_TTL).is_err());
        assert!(jar.is_empty());
    }

    #[test]
    fn test_record_through_cookies() {
        let mut jar = CookieJar::new();
        let record = Record {
            name: "Pikachu".to_string(),
            hp: 35,
        };
        save_record(&mut jar, SELECTED_KEY, &record, DEFAULT_TTL).unwrap();

        let header = jar.header_at(Instant::now());
        assert_eq!(header, r#"selectedPokemon={"name":"Pikachu","hp":35}"#);

        let loaded: Option<Record> = load_record(&mut jar, SELECTED_KEY).unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[test]
    fn test_semicolon_cuts_value() {
        let mut jar = CookieJar::new();
        let record = Record {
            name: "Mr; Mime".to_string(),
            hp: 40,
        };
        save_record(&mut jar, SELECTED_KEY, &record, DEFAULT_TTL).unwrap();

        // Only `{"name":"Mr` survives, which is not a record
        let loaded: Result<Option<Record>> = load_record(&mut jar, SELECTED_KEY);
        assert!(loaded.is_err());
    }

    #[test]
    fn test_empty_cookie_value() {
        let mut jar = CookieJar::new();
        jar.set_cookie_at("selectedPokemon=; path=/; max-age=60;", Instant::now())
            .unwrap();

        let err = load_record::<_, Record>(&mut jar, SELECTED_KEY).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::EmptyRecord(_))
        ));
    }
}
