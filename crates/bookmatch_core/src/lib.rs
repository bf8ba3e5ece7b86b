//! BookMatch core: data model, swipe deck and the pure discover-page state machine.
mod deck;
mod effect;
mod library;
mod model;
mod msg;
mod profile;
mod social;
mod state;
mod update;
mod view_model;

pub use deck::{
    classify_drag, Decision, Direction, LikedBook, SwipeDeck, SwipeSettings,
    DEFAULT_DRAG_THRESHOLD, DEFAULT_STACK_SIZE, DEFAULT_WINDOW_SIZE,
};
pub use effect::{Effect, Notice, NoticeLevel};
pub use library::{GoalProgress, LibraryView, ReadingStats};
pub use model::{
    books_by_id, Book, BookId, BookPatch, EntityId, Match, MatchId, MatchPatch, User, UserId,
    UserPatch,
};
pub use msg::Msg;
pub use profile::{visible_genres, ProfileError, ProfileForm, ALL_GENRES, COLLAPSED_GENRE_COUNT};
pub use social::{
    match_summaries, matches_subtitle, user_matches, ChatMessage, ChatView, MatchSummary,
};
pub use state::{DiscoverPage, LoadPhase, LoadToken};
pub use update::update;
pub use view_model::DiscoverView;
