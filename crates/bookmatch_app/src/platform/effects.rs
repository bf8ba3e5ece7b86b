use std::path::PathBuf;

use bookmatch_core::{BookId, Effect, Notice, NoticeLevel};
use bookmatch_logging::{bm_debug, bm_info, bm_warn};
use bookmatch_store::{StoreCommand, StoreHandle};

use super::persistence::save_saved_books;

/// Carries out the side effects requested by the discover page.
pub struct EffectRunner {
    state_dir: PathBuf,
    saved: Vec<BookId>,
}

impl EffectRunner {
    pub fn new(state_dir: PathBuf, saved: Vec<BookId>) -> Self {
        Self { state_dir, saved }
    }

    /// Saved book ids in the order they were first liked.
    pub fn saved(&self) -> &[BookId] {
        &self.saved
    }

    /// Runs `effects` in order and returns the notices to show.
    ///
    /// Returns whether a store request went out alongside the notices, so the
    /// caller knows to wait for a reply.
    pub fn run(&mut self, store: &StoreHandle, effects: Vec<Effect>) -> (bool, Vec<Notice>) {
        let mut requested = false;
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchStack { token, count } => {
                    bm_debug!("FetchStack token={} count={}", token, count);
                    store.enqueue(StoreCommand::FetchStack { token, count });
                    requested = true;
                }
                Effect::SaveBook { book_id } => self.save(book_id),
                Effect::Notify(notice) => {
                    match notice.level {
                        NoticeLevel::Error => bm_warn!("notice: {}", notice.text),
                        _ => bm_info!("notice: {}", notice.text),
                    }
                    notices.push(notice);
                }
            }
        }
        (requested, notices)
    }

    fn save(&mut self, book_id: BookId) {
        if self.saved.contains(&book_id) {
            return;
        }
        self.saved.push(book_id);
        save_saved_books(&self.state_dir, &self.saved);
    }
}
