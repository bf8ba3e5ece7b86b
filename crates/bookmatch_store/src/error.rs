use std::fmt;
use std::io;

use bookmatch_core::EntityId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    User,
    Match,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Book => write!(f, "Book"),
            EntityKind::User => write!(f, "User"),
            EntityKind::Match => write!(f, "Match"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found")]
    NotFound { kind: EntityKind, id: EntityId },
    #[error("invalid id {0:?}")]
    InvalidId(String),
    #[error("no {kind} records available")]
    Empty { kind: EntityKind },
    #[error("failed to parse {kind} fixtures: {source}")]
    Fixture {
        kind: EntityKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to start store runtime: {0}")]
    Runtime(#[from] io::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Parses an id the way route parameters arrive: as text.
pub fn parse_id(raw: &str) -> Result<EntityId, StoreError> {
    raw.trim()
        .parse::<EntityId>()
        .map_err(|_| StoreError::InvalidId(raw.to_owned()))
}
