use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type EntityId = u32;
pub type BookId = EntityId;
pub type UserId = EntityId;
pub type MatchId = EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "Id", default)]
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub publish_year: i32,
}

impl Book {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Partial update for a [`Book`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub synopsis: Option<String>,
    pub cover_url: Option<String>,
    pub rating: Option<f32>,
    pub genres: Option<Vec<String>>,
    pub page_count: Option<u32>,
    pub publish_year: Option<i32>,
}

impl BookPatch {
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(synopsis) = self.synopsis {
            book.synopsis = synopsis;
        }
        if let Some(cover_url) = self.cover_url {
            book.cover_url = cover_url;
        }
        if let Some(rating) = self.rating {
            book.rating = rating;
        }
        if let Some(genres) = self.genres {
            book.genres = genres;
        }
        if let Some(page_count) = self.page_count {
            book.page_count = page_count;
        }
        if let Some(publish_year) = self.publish_year {
            book.publish_year = publish_year;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "Id", default)]
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub reading_goal: u32,
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    #[serde(default)]
    pub books_read: Vec<BookId>,
    #[serde(default)]
    pub currently_reading: Vec<BookId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub reading_goal: Option<u32>,
    pub favorite_genres: Option<Vec<String>>,
    pub books_read: Option<Vec<BookId>>,
    pub currently_reading: Option<Vec<BookId>>,
}

impl UserPatch {
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = avatar;
        }
        if let Some(reading_goal) = self.reading_goal {
            user.reading_goal = reading_goal;
        }
        if let Some(favorite_genres) = self.favorite_genres {
            user.favorite_genres = favorite_genres;
        }
        if let Some(books_read) = self.books_read {
            user.books_read = books_read;
        }
        if let Some(currently_reading) = self.currently_reading {
            user.currently_reading = currently_reading;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(rename = "Id", default)]
    pub id: MatchId,
    pub user_id1: UserId,
    pub user_id2: UserId,
    #[serde(default)]
    pub shared_books: Vec<BookId>,
    #[serde(default)]
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
}

impl Match {
    pub fn involves(&self, user_id: UserId) -> bool {
        self.user_id1 == user_id || self.user_id2 == user_id
    }

    /// The participant that is not `user_id`.
    pub fn other_user(&self, user_id: UserId) -> UserId {
        if self.user_id1 == user_id {
            self.user_id2
        } else {
            self.user_id1
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchPatch {
    pub user_id1: Option<UserId>,
    pub user_id2: Option<UserId>,
    pub shared_books: Option<Vec<BookId>>,
    pub last_message: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl MatchPatch {
    pub fn apply(self, entry: &mut Match) {
        if let Some(user_id1) = self.user_id1 {
            entry.user_id1 = user_id1;
        }
        if let Some(user_id2) = self.user_id2 {
            entry.user_id2 = user_id2;
        }
        if let Some(shared_books) = self.shared_books {
            entry.shared_books = shared_books;
        }
        if let Some(last_message) = self.last_message {
            entry.last_message = last_message;
        }
        if let Some(timestamp) = self.timestamp {
            entry.timestamp = timestamp;
        }
    }
}

/// Keeps `books` whose id is in `ids`, in catalogue order.
pub fn books_by_id<'a>(books: &'a [Book], ids: &[BookId]) -> Vec<&'a Book> {
    books.iter().filter(|book| ids.contains(&book.id)).collect()
}
