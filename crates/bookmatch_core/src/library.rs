use crate::{books_by_id, Book, BookId, User};

/// Progress towards a yearly reading goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalProgress {
    pub read: usize,
    pub goal: u32,
    /// Rounded to the nearest whole percent; may exceed 100.
    pub percent: u32,
    /// `percent` capped at 100, for drawing the bar.
    pub bar_percent: u32,
    pub remaining: u32,
}

impl GoalProgress {
    /// `None` when no goal is set.
    pub fn new(read: usize, goal: u32) -> Option<Self> {
        if goal == 0 {
            return None;
        }
        let percent = round_percent(read as u64, u64::from(goal));
        let read_u32 = u32::try_from(read).unwrap_or(u32::MAX);
        Some(Self {
            read,
            goal,
            percent,
            bar_percent: percent.min(100),
            remaining: goal.saturating_sub(read_u32),
        })
    }
}

// Half rounds up, matching how the figure is shown to users.
fn round_percent(part: u64, whole: u64) -> u32 {
    let scaled = (part * 200 + whole) / (2 * whole);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Headline numbers for the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadingStats {
    pub books_read: usize,
    pub currently_reading: usize,
    pub goal_percent: u32,
}

impl ReadingStats {
    pub fn derive(user: &User, books: &[Book]) -> Self {
        let books_read = books_by_id(books, &user.books_read).len();
        Self {
            books_read,
            currently_reading: books_by_id(books, &user.currently_reading).len(),
            goal_percent: GoalProgress::new(books_read, user.reading_goal)
                .map(|goal| goal.percent)
                .unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryView {
    pub currently_reading: Vec<Book>,
    pub want_to_read: Vec<Book>,
    pub finished: Vec<Book>,
    pub goal: Option<GoalProgress>,
    pub total: usize,
}

impl LibraryView {
    /// Builds the shelves. Ids that do not resolve to a catalogue entry are
    /// skipped, and every shelf keeps catalogue order.
    pub fn derive(user: Option<&User>, books: &[Book], saved_ids: &[BookId]) -> Self {
        let owned = |ids: &[BookId]| -> Vec<Book> {
            books_by_id(books, ids).into_iter().cloned().collect()
        };

        let (currently_reading, finished, goal) = match user {
            Some(user) => {
                let finished = owned(&user.books_read);
                let goal = GoalProgress::new(finished.len(), user.reading_goal);
                (owned(&user.currently_reading), finished, goal)
            }
            None => (Vec::new(), Vec::new(), None),
        };
        let want_to_read = owned(saved_ids);
        let total = currently_reading.len() + want_to_read.len() + finished.len();

        Self {
            currently_reading,
            want_to_read,
            finished,
            goal,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn subtitle(&self) -> String {
        format!("{} books in your collection", self.total)
    }
}
