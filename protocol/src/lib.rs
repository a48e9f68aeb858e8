use thiserror::Error;

pub mod cookie;
pub mod store;

pub use cookie::{SetCookie, find_cookie, parse_cookie_header};
pub use store::{
    CookieJar, DEFAULT_TTL, KeyValueStore, MemoryStore, OPPONENT_KEY, PLAYER_KEY, SELECTED_KEY,
    load_record, save_record,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty {0} record")]
    EmptyRecord(String),
}
