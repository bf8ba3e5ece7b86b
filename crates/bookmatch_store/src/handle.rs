use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use bookmatch_core::{Book, LoadToken, Match, MatchId, MatchPatch, User, UserId, UserPatch};
use bookmatch_logging::{bm_debug, bm_warn};

use crate::{ChatSnapshot, MatchesSnapshot, ReaderSnapshot, Repository, Services, StoreError};

#[derive(Debug)]
pub enum StoreCommand {
    FetchStack { token: LoadToken, count: usize },
    LoadReader,
    LoadMatches,
    LoadChat { match_id: MatchId },
    UpdateUser { user_id: UserId, patch: UserPatch },
    UpdateMatch { match_id: MatchId, patch: MatchPatch },
}

#[derive(Debug)]
pub enum StoreEvent {
    StackFetched {
        token: LoadToken,
        result: Result<Vec<Book>, StoreError>,
    },
    ReaderLoaded(Result<ReaderSnapshot, StoreError>),
    MatchesLoaded(Result<MatchesSnapshot, StoreError>),
    ChatLoaded(Result<ChatSnapshot, StoreError>),
    UserUpdated(Result<User, StoreError>),
    MatchUpdated(Result<Match, StoreError>),
}

/// Runs store operations on a background runtime for a synchronous caller.
///
/// Every command is spawned independently: two requests for the same data
/// are two unrelated in-flight operations, and nothing can be cancelled once
/// enqueued. Results arrive in completion order.
pub struct StoreHandle {
    cmd_tx: mpsc::Sender<StoreCommand>,
    event_rx: mpsc::Receiver<StoreEvent>,
}

impl StoreHandle {
    pub fn new(services: Services) -> Result<Self, StoreError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let services = Arc::new(services);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let services = services.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(&services, command).await;
                    let _ = event_tx.send(event);
                });
            }
            bm_debug!("store handle closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, command: StoreCommand) {
        if self.cmd_tx.send(command).is_err() {
            bm_warn!("store worker is gone; command dropped");
        }
    }

    pub fn try_recv(&self) -> Option<StoreEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<StoreEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(services: &Services, command: StoreCommand) -> StoreEvent {
    match command {
        StoreCommand::FetchStack { token, count } => {
            let books = services.books.get_random_stack(count).await;
            bm_debug!("stack token={} fetched {} books", token, books.len());
            StoreEvent::StackFetched {
                token,
                result: Ok(books),
            }
        }
        StoreCommand::LoadReader => StoreEvent::ReaderLoaded(services.load_reader().await),
        StoreCommand::LoadMatches => StoreEvent::MatchesLoaded(services.load_matches().await),
        StoreCommand::LoadChat { match_id } => {
            StoreEvent::ChatLoaded(services.load_chat(match_id).await)
        }
        StoreCommand::UpdateUser { user_id, patch } => {
            StoreEvent::UserUpdated(services.users.update(user_id, patch).await)
        }
        StoreCommand::UpdateMatch { match_id, patch } => {
            StoreEvent::MatchUpdated(services.matches.update(match_id, patch).await)
        }
    }
}
