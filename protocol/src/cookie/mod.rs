mod tests;

use std::time::Duration;

use crate::ParseError;
use anyhow::Result;

/// A `Set-Cookie` style record: `NAME=VALUE; path=PATH; max-age=SECS;`
#[derive(Debug, Clone, PartialEq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub max_age: Duration,
}

impl SetCookie {
    /// Create a record scoped to the site root
    pub fn new(name: impl Into<String>, value: impl Into<String>, max_age: Duration) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            max_age,
        }
    }

    /// Parse a `Set-Cookie` line
    ///
    /// The first pair is the cookie itself. `path` and `max-age` are read
    /// from the attributes, anything else is ignored. Like a browser, the
    /// value ends at the first `;`.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty());
        let first = parts
            .next()
            .ok_or_else(|| ParseError::EmptyRecord("cookie".to_string()))?;
        let (name, value) = parse_pair(first)?;

        let mut path = "/".to_string();
        let mut max_age = None;
        for attribute in parts {
            let (key, val) = attribute.split_once('=').unwrap_or((attribute, ""));
            match key.trim().to_ascii_lowercase().as_str() {
                "path" => path = val.trim().to_string(),
                "max-age" => {
                    let secs = val.trim().parse::<u64>().map_err(|_| {
                        ParseError::InvalidFormat(format!("invalid max-age {:?}", val))
                    })?;
                    max_age = Some(Duration::from_secs(secs));
                }
                _ => {}
            }
        }

        Ok(Self {
            name,
            value,
            path,
            max_age: max_age.ok_or_else(|| ParseError::MissingField("max-age".to_string()))?,
        })
    }

    /// Serialize to wire format
    pub fn to_wire_format(&self) -> String {
        format!(
            "{}={}; path={}; max-age={};",
            self.name,
            self.value,
            self.path,
            self.max_age.as_secs()
        )
    }
}

/// Parse a `Cookie` header (`a=1; b=2`) into name/value pairs
///
/// Each pair is split on its first `=` only, so values may themselves
/// contain `=` (JSON payloads often do).
pub fn parse_cookie_header(header: &str) -> Result<Vec<(String, String)>> {
    header
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(parse_pair)
        .collect()
}

/// Find a single cookie value by name
pub fn find_cookie(header: &str, name: &str) -> Result<Option<String>> {
    let pairs = parse_cookie_header(header)?;
    Ok(pairs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value))
}

fn parse_pair(pair: &str) -> Result<(String, String)> {
    // NAME=VALUE
    let (name, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidFormat(format!("missing '=' in {:?}", pair)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::MissingField("cookie name".to_string()).into());
    }

    Ok((name.to_string(), value.trim().to_string()))
}
