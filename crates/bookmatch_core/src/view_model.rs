use crate::{Book, LoadPhase};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoverView {
    pub phase: LoadPhase,
    /// Top of the stack first.
    pub window: Vec<Book>,
    pub selected_genres: Vec<String>,
    /// Whether the filter bar offers "Clear all".
    pub show_clear: bool,
    pub liked_count: usize,
    pub subtitle: String,
    /// Loaded, but nothing left to swipe under the current filter.
    pub exhausted: bool,
    pub dirty: bool,
}
