use crate::{Book, LoadToken};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Discover page became visible; triggers the first load.
    Mounted,
    /// User asked to reload after a failed fetch.
    RetryClicked,
    /// Service layer answered a stack request.
    StackLoaded {
        token: LoadToken,
        result: Result<Vec<Book>, String>,
    },
    /// User tapped a genre chip in the filter bar.
    GenreToggled(String),
    /// User clicked "Clear all" or "Reset Filters".
    GenresCleared,
    /// User released a drag on the top card.
    DragReleased { offset_x: f32 },
    PassClicked,
    LikeClicked,
    SuperLikeClicked,
    /// Page navigated away; any in-flight load result must be dropped.
    Unmounted,
    /// Fallback for placeholder wiring.
    NoOp,
}
