use crate::{classify_drag, DiscoverPage, Direction, Effect, Msg, Notice};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DiscoverPage, msg: Msg) -> (DiscoverPage, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            state.mount();
            start_load(&mut state)
        }
        Msg::RetryClicked => {
            if !state.is_mounted() {
                return (state, Vec::new());
            }
            start_load(&mut state)
        }
        Msg::StackLoaded { token, result } => {
            // Answers for superseded requests, or arriving after the page went
            // away, must not touch the deck.
            if !state.accepts(token) {
                return (state, Vec::new());
            }
            match result {
                Ok(books) => {
                    state.finish_load(books);
                    Vec::new()
                }
                Err(message) => {
                    state.fail_load(message);
                    vec![Effect::Notify(Notice::error("Failed to load books"))]
                }
            }
        }
        Msg::GenreToggled(genre) => {
            state.toggle_genre(&genre);
            Vec::new()
        }
        Msg::GenresCleared => {
            state.clear_genres();
            Vec::new()
        }
        Msg::DragReleased { offset_x } => {
            match classify_drag(offset_x, state.settings().drag_threshold) {
                Some(direction) => decide(&mut state, direction),
                None => Vec::new(),
            }
        }
        Msg::PassClicked => decide(&mut state, Direction::Left),
        Msg::LikeClicked => decide(&mut state, Direction::Right),
        Msg::SuperLikeClicked => decide(&mut state, Direction::SuperLike),
        Msg::Unmounted => {
            state.unmount();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_load(state: &mut DiscoverPage) -> Vec<Effect> {
    let token = state.begin_load();
    vec![Effect::FetchStack {
        token,
        count: state.settings().stack_size,
    }]
}

fn decide(state: &mut DiscoverPage, direction: Direction) -> Vec<Effect> {
    let Some(decision) = state.decide(direction) else {
        return Vec::new();
    };

    let title = &decision.book.title;
    let notice = match direction {
        Direction::Left => return Vec::new(),
        Direction::Right => Notice::success(format!("Added \"{title}\" to your library!")),
        Direction::SuperLike => Notice::success(format!("Super liked \"{title}\"!")),
    };

    let mut effects = Vec::with_capacity(2);
    if decision.newly_liked {
        effects.push(Effect::SaveBook {
            book_id: decision.book.id,
        });
    }
    effects.push(Effect::Notify(notice));
    effects
}
