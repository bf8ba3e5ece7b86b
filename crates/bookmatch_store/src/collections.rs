use bookmatch_core::{Book, Match, User, UserId};

use crate::{MemoryRepository, StoreError};

pub type BookRepository = MemoryRepository<Book>;
pub type UserRepository = MemoryRepository<User>;
pub type MatchRepository = MemoryRepository<Match>;

/// Stack size used when a caller does not ask for a specific count.
pub const DEFAULT_RANDOM_STACK: usize = 10;

impl MemoryRepository<Book> {
    /// `count` books drawn without replacement from a full shuffle.
    pub async fn get_random_stack(&self, count: usize) -> Vec<Book> {
        self.random_sample(count).await
    }

    pub async fn get_by_genre(&self, genre: &str) -> Vec<Book> {
        self.filter(|book| book.has_genre(genre)).await
    }
}

impl MemoryRepository<User> {
    /// The signed-in reader; the first stored user stands in for it.
    pub async fn get_current_user(&self) -> Result<User, StoreError> {
        self.first().await
    }
}

impl MemoryRepository<Match> {
    pub async fn get_user_matches(&self, user_id: UserId) -> Vec<Match> {
        self.filter(|entry| entry.involves(user_id)).await
    }
}
