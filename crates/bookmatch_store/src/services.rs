use std::sync::Arc;

use bookmatch_core::{Book, Match, MatchId, User};
use futures_util::try_join;

use crate::fixtures::{bundled_books, bundled_matches, bundled_users};
use crate::{
    BookRepository, LatencySettings, MatchRepository, RandomSource, Repository, StoreError,
    UserRepository,
};

/// Everything the library and profile screens need.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSnapshot {
    pub books: Vec<Book>,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchesSnapshot {
    pub matches: Vec<Match>,
    pub users: Vec<User>,
    pub current_user: User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSnapshot {
    pub entry: Match,
    pub users: Vec<User>,
    pub books: Vec<Book>,
    pub current_user: User,
}

/// The three mock services, owned together and handed to callers explicitly.
pub struct Services {
    pub books: BookRepository,
    pub users: UserRepository,
    pub matches: MatchRepository,
}

impl Services {
    pub fn new(
        books: Vec<Book>,
        users: Vec<User>,
        matches: Vec<Match>,
        latency: LatencySettings,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            books: BookRepository::new(books, latency, random.clone()),
            users: UserRepository::new(users, latency, random.clone()),
            matches: MatchRepository::new(matches, latency, random),
        }
    }

    /// Loads the bundled JSON fixtures.
    pub fn from_fixtures(
        latency: LatencySettings,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, StoreError> {
        Ok(Self::new(
            bundled_books()?,
            bundled_users()?,
            bundled_matches()?,
            latency,
            random,
        ))
    }

    // Joined loads run their fetches concurrently and fail as a whole when any
    // single fetch fails.

    pub async fn load_reader(&self) -> Result<ReaderSnapshot, StoreError> {
        let (books, user) = try_join!(self.books.get_all(), self.users.get_current_user())?;
        Ok(ReaderSnapshot { books, user })
    }

    pub async fn load_matches(&self) -> Result<MatchesSnapshot, StoreError> {
        let (matches, users, current_user) = try_join!(
            self.matches.get_all(),
            self.users.get_all(),
            self.users.get_current_user()
        )?;
        Ok(MatchesSnapshot {
            matches,
            users,
            current_user,
        })
    }

    pub async fn load_chat(&self, match_id: MatchId) -> Result<ChatSnapshot, StoreError> {
        let (entry, users, books, current_user) = try_join!(
            self.matches.get_by_id(match_id),
            self.users.get_all(),
            self.books.get_all(),
            self.users.get_current_user()
        )?;
        Ok(ChatSnapshot {
            entry,
            users,
            books,
            current_user,
        })
    }
}
