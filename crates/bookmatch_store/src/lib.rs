//! BookMatch store: in-memory mock services with simulated latency.
mod collections;
mod error;
mod fixtures;
mod handle;
mod latency;
mod persist;
mod random;
mod repository;
mod services;

pub use collections::{BookRepository, MatchRepository, UserRepository, DEFAULT_RANDOM_STACK};
pub use error::{parse_id, EntityKind, StoreError};
pub use fixtures::{bundled_books, bundled_matches, bundled_users, parse_records};
pub use handle::{StoreCommand, StoreEvent, StoreHandle};
pub use latency::LatencySettings;
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use random::{InOrder, RandomSource, SeededRandom};
pub use repository::{Entity, MemoryRepository, Repository};
pub use services::{ChatSnapshot, MatchesSnapshot, ReaderSnapshot, Services};
