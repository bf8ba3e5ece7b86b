use std::sync::Once;

use bookmatch_core::{
    update, Book, DiscoverPage, Effect, LoadPhase, Msg, Notice, SwipeSettings,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bookmatch_logging::initialize_for_tests);
}

fn book(id: u32, title: &str, genres: &[&str]) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: "Author".to_string(),
        synopsis: String::new(),
        cover_url: String::new(),
        rating: 4.2,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        page_count: 250,
        publish_year: 1999,
    }
}

fn stack() -> Vec<Book> {
    vec![
        book(1, "Dune", &["Science Fiction"]),
        book(2, "Emma", &["Romance"]),
        book(3, "The Hobbit", &["Fantasy"]),
        book(4, "Gone Girl", &["Thriller", "Mystery"]),
    ]
}

fn mount(state: DiscoverPage) -> (DiscoverPage, u64) {
    let (state, effects) = update(state, Msg::Mounted);
    let token = match effects.as_slice() {
        [Effect::FetchStack { token, .. }] => *token,
        other => panic!("unexpected effects {other:?}"),
    };
    (state, token)
}

fn loaded() -> DiscoverPage {
    let (state, token) = mount(DiscoverPage::new());
    let (state, _) = update(
        state,
        Msg::StackLoaded {
            token,
            result: Ok(stack()),
        },
    );
    state
}

#[test]
fn mount_requests_default_stack() {
    init_logging();
    let (state, effects) = update(DiscoverPage::new(), Msg::Mounted);

    assert_eq!(state.phase(), &LoadPhase::Loading);
    assert_eq!(effects, vec![Effect::FetchStack { token: 1, count: 15 }]);
}

#[test]
fn stack_size_comes_from_settings() {
    init_logging();
    let settings = SwipeSettings {
        stack_size: 4,
        ..SwipeSettings::default()
    };
    let (_state, effects) = update(DiscoverPage::with_settings(settings), Msg::Mounted);
    assert_eq!(effects, vec![Effect::FetchStack { token: 1, count: 4 }]);
}

#[test]
fn loaded_stack_populates_window() {
    init_logging();
    let mut state = loaded();
    let view = state.view();

    assert_eq!(view.phase, LoadPhase::Ready);
    let ids: Vec<u32> = view.window.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(view.subtitle, "0 books in your library");
    assert!(!view.exhausted);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn failed_load_notifies_and_retry_reloads() {
    init_logging();
    let (state, token) = mount(DiscoverPage::new());
    let (state, effects) = update(
        state,
        Msg::StackLoaded {
            token,
            result: Err("Book service unavailable".to_string()),
        },
    );

    assert_eq!(
        state.phase(),
        &LoadPhase::Failed("Book service unavailable".to_string())
    );
    assert_eq!(
        effects,
        vec![Effect::Notify(Notice::error("Failed to load books"))]
    );

    let (state, effects) = update(state, Msg::RetryClicked);
    assert_eq!(state.phase(), &LoadPhase::Loading);
    assert_eq!(effects, vec![Effect::FetchStack { token: 2, count: 15 }]);
}

#[test]
fn stale_load_result_is_ignored() {
    init_logging();
    let (state, first) = mount(DiscoverPage::new());
    let (state, _) = update(state, Msg::RetryClicked);

    let (state, effects) = update(
        state,
        Msg::StackLoaded {
            token: first,
            result: Ok(stack()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.phase(), &LoadPhase::Loading);
    assert!(state.deck().candidates().is_empty());
    assert_eq!(state.pending_token(), Some(first + 1));
}

#[test]
fn load_after_unmount_is_dropped() {
    init_logging();
    let (state, token) = mount(DiscoverPage::new());
    let (state, _) = update(state, Msg::Unmounted);

    let (state, effects) = update(
        state,
        Msg::StackLoaded {
            token,
            result: Ok(stack()),
        },
    );
    assert!(effects.is_empty());
    assert!(state.deck().candidates().is_empty());
    assert_eq!(state.phase(), &LoadPhase::Idle);

    let (_state, effects) = update(state, Msg::RetryClicked);
    assert!(effects.is_empty());
}

#[test]
fn like_saves_book_and_notifies() {
    init_logging();
    let state = loaded();
    let (state, effects) = update(state, Msg::LikeClicked);

    assert_eq!(
        effects,
        vec![
            Effect::SaveBook { book_id: 1 },
            Effect::Notify(Notice::success("Added \"Dune\" to your library!")),
        ]
    );
    let view = state.view();
    assert_eq!(view.liked_count, 1);
    assert_eq!(view.subtitle, "1 books in your library");
    assert_eq!(view.window[0].id, 2);
}

#[test]
fn super_like_marks_book() {
    init_logging();
    let state = loaded();
    let (state, effects) = update(state, Msg::SuperLikeClicked);

    assert_eq!(
        effects,
        vec![
            Effect::SaveBook { book_id: 1 },
            Effect::Notify(Notice::success("Super liked \"Dune\"!")),
        ]
    );
    assert!(state.deck().liked()[0].super_liked);
}

#[test]
fn pass_emits_nothing_but_advances() {
    init_logging();
    let state = loaded();
    let (state, effects) = update(state, Msg::PassClicked);

    assert!(effects.is_empty());
    assert_eq!(state.deck().cursor(), 1);
    assert_eq!(state.view().liked_count, 0);
}

#[test]
fn small_drag_is_cancelled() {
    init_logging();
    let mut state = loaded();
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::DragReleased { offset_x: 60.0 });
    assert!(effects.is_empty());
    assert_eq!(state.deck().cursor(), 0);
    assert!(!state.consume_dirty());
}

#[test]
fn far_drag_commits_decision() {
    init_logging();
    let state = loaded();
    let (state, effects) = update(state, Msg::DragReleased { offset_x: 140.0 });
    assert_eq!(effects.len(), 2);
    assert_eq!(state.deck().liked().len(), 1);

    let (state, effects) = update(state, Msg::DragReleased { offset_x: -140.0 });
    assert!(effects.is_empty());
    assert_eq!(state.deck().cursor(), 2);
    assert_eq!(state.deck().liked().len(), 1);
}

#[test]
fn decisions_before_load_are_ignored() {
    init_logging();
    let (state, _token) = mount(DiscoverPage::new());
    let before = state.clone();

    let (state, effects) = update(state, Msg::LikeClicked);
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn genre_filter_narrows_window_and_shows_clear() {
    init_logging();
    let state = loaded();
    let (state, _) = update(state, Msg::PassClicked);
    let (state, effects) = update(state, Msg::GenreToggled("Fantasy".to_string()));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.selected_genres, vec!["Fantasy".to_string()]);
    assert!(view.show_clear);
    let ids: Vec<u32> = view.window.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![3]);
    assert_eq!(state.deck().cursor(), 0);
}

#[test]
fn exhausted_view_offers_reset() {
    init_logging();
    let state = loaded();
    let (state, _) = update(state, Msg::GenreToggled("Romance".to_string()));
    let (state, _) = update(state, Msg::PassClicked);

    let view = state.view();
    assert!(view.exhausted);
    assert!(view.window.is_empty());

    let (state, effects) = update(state, Msg::LikeClicked);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::GenresCleared);
    let view = state.view();
    assert!(!view.exhausted);
    assert!(!view.show_clear);
    assert_eq!(view.window.len(), 3);
}

#[test]
fn clearing_twice_matches_clearing_once() {
    init_logging();
    let state = loaded();
    let (state, _) = update(state, Msg::GenreToggled("Romance".to_string()));
    let (mut once, _) = update(state, Msg::GenresCleared);
    once.consume_dirty();

    let (mut twice, effects) = update(once.clone(), Msg::GenresCleared);
    assert!(effects.is_empty());
    assert!(!twice.consume_dirty());
    assert_eq!(twice, once);
}
