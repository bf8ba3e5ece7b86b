use std::collections::BTreeSet;

use crate::{Book, BookId};

/// Default number of candidates fetched per session.
pub const DEFAULT_STACK_SIZE: usize = 15;
/// Default number of cards rendered as a stack.
pub const DEFAULT_WINDOW_SIZE: usize = 3;
/// Horizontal drag distance, in device-independent pixels, that commits a swipe.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSettings {
    pub stack_size: usize,
    pub window_size: usize,
    pub drag_threshold: f32,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Pass.
    Left,
    /// Like.
    Right,
    SuperLike,
}

impl Direction {
    pub fn is_like(self) -> bool {
        matches!(self, Direction::Right | Direction::SuperLike)
    }
}

/// Maps a released drag to a decision. `None` means the gesture was cancelled
/// and the card snaps back.
pub fn classify_drag(offset_x: f32, threshold: f32) -> Option<Direction> {
    if offset_x > threshold {
        Some(Direction::Right)
    } else if offset_x < -threshold {
        Some(Direction::Left)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LikedBook {
    pub book: Book,
    pub super_liked: bool,
}

/// Outcome of a committed decision, handed back so callers can emit
/// notifications without re-reading the deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub book: Book,
    pub direction: Direction,
    /// False when the book was already in the liked list.
    pub newly_liked: bool,
}

/// Candidate list, genre filter, cursor and liked list of one discover session.
///
/// The filtered view is recomputed on every filter change; the cursor always
/// indexes into it and stays within `0..=filtered.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeDeck {
    candidates: Vec<Book>,
    selected_genres: BTreeSet<String>,
    filtered: Vec<usize>,
    cursor: usize,
    liked: Vec<LikedBook>,
}

impl SwipeDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, candidates: Vec<Book>) {
        self.candidates = candidates;
        self.selected_genres.clear();
        self.liked.clear();
        self.refilter();
    }

    pub fn toggle_genre(&mut self, genre: &str) {
        if !self.selected_genres.remove(genre) {
            self.selected_genres.insert(genre.to_owned());
        }
        self.refilter();
    }

    pub fn clear_genres(&mut self) {
        self.selected_genres.clear();
        self.refilter();
    }

    /// Up to `size` upcoming books, starting at the cursor.
    pub fn current_window(&self, size: usize) -> Vec<&Book> {
        self.filtered
            .iter()
            .skip(self.cursor)
            .take(size)
            .map(|&index| &self.candidates[index])
            .collect()
    }

    pub fn current(&self) -> Option<&Book> {
        self.filtered
            .get(self.cursor)
            .map(|&index| &self.candidates[index])
    }

    /// Applies `direction` to the book under the cursor. Returns `None` when
    /// the deck is exhausted.
    pub fn decide(&mut self, direction: Direction) -> Option<Decision> {
        let book = self.current()?.clone();
        self.cursor += 1;

        let mut newly_liked = false;
        if direction.is_like() {
            let super_liked = direction == Direction::SuperLike;
            match self.liked.iter_mut().find(|entry| entry.book.id == book.id) {
                Some(existing) => existing.super_liked |= super_liked,
                None => {
                    self.liked.push(LikedBook {
                        book: book.clone(),
                        super_liked,
                    });
                    newly_liked = true;
                }
            }
        }

        Some(Decision {
            book,
            direction,
            newly_liked,
        })
    }

    /// Like [`SwipeDeck::decide`], but only when `book_id` is the book under
    /// the cursor.
    pub fn decide_on(&mut self, book_id: BookId, direction: Direction) -> Option<Decision> {
        if self.current()?.id != book_id {
            return None;
        }
        self.decide(direction)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.filtered.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn candidates(&self) -> &[Book] {
        &self.candidates
    }

    pub fn filtered(&self) -> Vec<&Book> {
        self.filtered
            .iter()
            .map(|&index| &self.candidates[index])
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn selected_genres(&self) -> &BTreeSet<String> {
        &self.selected_genres
    }

    pub fn liked(&self) -> &[LikedBook] {
        &self.liked
    }

    // Filter changes reshow the whole filtered view from the top, including
    // books already decided under the previous filter.
    fn refilter(&mut self) {
        let genres = &self.selected_genres;
        self.filtered = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, book)| genres.is_empty() || book.genres.iter().any(|g| genres.contains(g)))
            .map(|(index, _)| index)
            .collect();
        self.cursor = 0;
    }
}
