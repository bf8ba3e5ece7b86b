use crate::view_model::DiscoverView;
use crate::{Book, Decision, Direction, SwipeDeck, SwipeSettings};

/// Identifies one stack request. Only the most recent request may populate
/// the deck.
pub type LoadToken = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// State of the discover page: load lifecycle around a [`SwipeDeck`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoverPage {
    settings: SwipeSettings,
    phase: LoadPhase,
    deck: SwipeDeck,
    last_token: LoadToken,
    pending: Option<LoadToken>,
    mounted: bool,
    dirty: bool,
}

impl DiscoverPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SwipeSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &SwipeSettings {
        &self.settings
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn deck(&self) -> &SwipeDeck {
        &self.deck
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn pending_token(&self) -> Option<LoadToken> {
        self.pending
    }

    pub fn view(&self) -> DiscoverView {
        let window = self
            .deck
            .current_window(self.settings.window_size)
            .into_iter()
            .cloned()
            .collect();
        let liked_count = self.deck.liked().len();
        DiscoverView {
            phase: self.phase.clone(),
            window,
            selected_genres: self.deck.selected_genres().iter().cloned().collect(),
            show_clear: !self.deck.selected_genres().is_empty(),
            liked_count,
            subtitle: format!("{liked_count} books in your library"),
            exhausted: self.phase == LoadPhase::Ready && self.deck.is_exhausted(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn mount(&mut self) {
        self.mounted = true;
    }

    pub(crate) fn unmount(&mut self) {
        self.mounted = false;
        self.pending = None;
        if self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Idle;
        }
    }

    /// Starts a new load and returns its token. A previous in-flight request is
    /// not cancelled; its answer will simply be ignored.
    pub(crate) fn begin_load(&mut self) -> LoadToken {
        self.last_token += 1;
        self.pending = Some(self.last_token);
        self.phase = LoadPhase::Loading;
        self.mark_dirty();
        self.last_token
    }

    pub(crate) fn accepts(&self, token: LoadToken) -> bool {
        self.mounted && self.pending == Some(token)
    }

    pub(crate) fn finish_load(&mut self, books: Vec<Book>) {
        self.pending = None;
        self.deck.initialize(books);
        self.phase = LoadPhase::Ready;
        self.mark_dirty();
    }

    pub(crate) fn fail_load(&mut self, message: String) {
        self.pending = None;
        self.phase = LoadPhase::Failed(message);
        self.mark_dirty();
    }

    pub(crate) fn toggle_genre(&mut self, genre: &str) {
        self.deck.toggle_genre(genre);
        self.mark_dirty();
    }

    pub(crate) fn clear_genres(&mut self) {
        if self.deck.selected_genres().is_empty() && self.deck.cursor() == 0 {
            return;
        }
        self.deck.clear_genres();
        self.mark_dirty();
    }

    pub(crate) fn decide(&mut self, direction: Direction) -> Option<Decision> {
        if self.phase != LoadPhase::Ready {
            return None;
        }
        let decision = self.deck.decide(direction)?;
        self.mark_dirty();
        Some(decision)
    }
}
