use bookmatch_core::{Book, Match, User};
use serde::de::DeserializeOwned;

use crate::{Entity, StoreError};

const BOOKS_JSON: &str = include_str!("../fixtures/books.json");
const USERS_JSON: &str = include_str!("../fixtures/users.json");
const MATCHES_JSON: &str = include_str!("../fixtures/matches.json");

/// Parses an id-keyed JSON array of records.
pub fn parse_records<T>(raw: &str) -> Result<Vec<T>, StoreError>
where
    T: Entity + DeserializeOwned,
{
    serde_json::from_str(raw).map_err(|source| StoreError::Fixture {
        kind: T::KIND,
        source,
    })
}

pub fn bundled_books() -> Result<Vec<Book>, StoreError> {
    parse_records(BOOKS_JSON)
}

pub fn bundled_users() -> Result<Vec<User>, StoreError> {
    parse_records(USERS_JSON)
}

pub fn bundled_matches() -> Result<Vec<Match>, StoreError> {
    parse_records(MATCHES_JSON)
}
