use thiserror::Error;

use crate::{User, UserPatch};

/// Genres offered by the filter bar and the profile editor, in display order.
pub const ALL_GENRES: [&str; 15] = [
    "Romance",
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Thriller",
    "Historical Fiction",
    "Contemporary Fiction",
    "Self-Help",
    "Biography",
    "Psychology",
    "Adventure",
    "Horror",
    "Comedy",
    "Drama",
    "Philosophy",
];

/// Chips shown while the filter bar is collapsed.
pub const COLLAPSED_GENRE_COUNT: usize = 6;

pub fn visible_genres(expanded: bool) -> &'static [&'static str] {
    if expanded {
        &ALL_GENRES
    } else {
        &ALL_GENRES[..COLLAPSED_GENRE_COUNT]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("reading goal must be a whole number, got {0:?}")]
    InvalidGoal(String),
}

/// Edit buffer behind the profile page's edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileForm {
    pub name: String,
    /// Raw text from the number input.
    pub reading_goal: String,
    pub favorite_genres: Vec<String>,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            reading_goal: user.reading_goal.to_string(),
            favorite_genres: user.favorite_genres.clone(),
        }
    }

    /// Cancel: drop edits and go back to the stored profile.
    pub fn reset(&mut self, user: &User) {
        *self = Self::from_user(user);
    }

    pub fn toggle_genre(&mut self, genre: &str) {
        if let Some(pos) = self.favorite_genres.iter().position(|g| g == genre) {
            self.favorite_genres.remove(pos);
        } else {
            self.favorite_genres.push(genre.to_owned());
        }
    }

    pub fn to_patch(&self) -> Result<UserPatch, ProfileError> {
        let goal_text = self.reading_goal.trim();
        let reading_goal = goal_text
            .parse::<u32>()
            .map_err(|_| ProfileError::InvalidGoal(goal_text.to_owned()))?;
        Ok(UserPatch {
            name: Some(self.name.clone()),
            reading_goal: Some(reading_goal),
            favorite_genres: Some(self.favorite_genres.clone()),
            ..UserPatch::default()
        })
    }
}
