use std::path::Path;

use bookmatch_core::BookId;
use bookmatch_logging::{bm_error, bm_info, bm_warn};
use bookmatch_store::AtomicFileWriter;
use serde::{Deserialize, Serialize};

const STATE_FILENAME: &str = ".bookmatch_state.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
struct PersistedState {
    #[serde(default)]
    saved_books: Vec<BookId>,
}

/// Reads the saved-books entry. Missing or unreadable state yields an empty list.
pub(crate) fn load_saved_books(state_dir: &Path) -> Vec<BookId> {
    let writer = AtomicFileWriter::new(state_dir.to_path_buf());
    let content = match writer.read(STATE_FILENAME) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            bm_warn!(
                "Failed to read persisted state from {:?}: {}",
                state_dir,
                err
            );
            return Vec::new();
        }
    };

    let state: PersistedState = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            bm_warn!("Failed to parse persisted state in {:?}: {}", state_dir, err);
            return Vec::new();
        }
    };

    bm_info!(
        "Loaded {} saved books from {:?}",
        state.saved_books.len(),
        state_dir
    );
    state.saved_books
}

pub(crate) fn save_saved_books(state_dir: &Path, saved: &[BookId]) {
    let state = PersistedState {
        saved_books: saved.to_vec(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&state, pretty) {
        Ok(text) => text,
        Err(err) => {
            bm_error!("Failed to serialize persisted state: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(state_dir.to_path_buf());
    if let Err(err) = writer.write(STATE_FILENAME, &content) {
        bm_error!(
            "Failed to write persisted state to {:?}: {}",
            state_dir,
            err
        );
    }
}
