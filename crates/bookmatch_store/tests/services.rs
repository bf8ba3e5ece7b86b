use std::collections::BTreeSet;
use std::sync::Arc;

use bookmatch_core::{Book, LibraryView, Match, User};
use bookmatch_store::{
    bundled_books, bundled_matches, bundled_users, InOrder, LatencySettings, Repository,
    Services, StoreError,
};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn services() -> Services {
    Services::from_fixtures(LatencySettings::none(), Arc::new(InOrder)).unwrap()
}

#[test]
fn fixtures_have_unique_ids() {
    let books = bundled_books().unwrap();
    let users = bundled_users().unwrap();
    let matches = bundled_matches().unwrap();

    assert!(books.len() >= 15);
    let ids: BTreeSet<u32> = books.iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), books.len());
    assert!(!users.is_empty());
    assert!(matches.iter().all(|m| m.user_id1 != m.user_id2));
}

#[test]
fn fixture_books_only_use_known_genres() {
    for book in bundled_books().unwrap() {
        for genre in &book.genres {
            assert!(
                bookmatch_core::ALL_GENRES.contains(&genre.as_str()),
                "{} has unknown genre {genre}",
                book.title
            );
        }
    }
}

#[tokio::test]
async fn reader_snapshot_feeds_library() {
    let services = services();
    let snapshot = services.load_reader().await.unwrap();

    assert_eq!(snapshot.user.id, 1);
    let view = LibraryView::derive(Some(&snapshot.user), &snapshot.books, &[]);
    assert_eq!(view.finished.len(), snapshot.user.books_read.len());
    assert!(view.goal.is_some());
}

#[tokio::test]
async fn current_user_on_empty_store_fails() {
    let services = Services::new(
        Vec::<Book>::new(),
        Vec::<User>::new(),
        Vec::<Match>::new(),
        LatencySettings::none(),
        Arc::new(InOrder),
    );
    let err = services.load_reader().await.unwrap_err();
    assert!(matches!(err, StoreError::Empty { .. }));
}

#[tokio::test]
async fn chat_load_fails_whole_when_match_missing() {
    let services = services();
    let err = services.load_chat(9999).await.unwrap_err();
    assert!(err.is_not_found());

    let chat = services.load_chat(1).await.unwrap();
    assert_eq!(chat.entry.id, 1);
    assert_eq!(chat.current_user.id, 1);
}

#[tokio::test]
async fn matches_snapshot_and_user_matches_agree() {
    let services = services();
    let snapshot = services.load_matches().await.unwrap();
    let current = snapshot.current_user.id;

    let expected: Vec<u32> = services
        .matches
        .get_user_matches(current)
        .await
        .iter()
        .map(|m| m.id)
        .collect();
    let derived: Vec<u32> = bookmatch_core::user_matches(&snapshot.matches, current)
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(derived, expected);
}

#[tokio::test]
async fn match_create_gets_next_id() {
    let services = services();
    let before = services.matches.get_all().await.unwrap();
    let max_id = before.iter().map(|m| m.id).max().unwrap();

    let created = services
        .matches
        .create(Match {
            id: 0,
            user_id1: 2,
            user_id2: 5,
            shared_books: vec![3],
            last_message: String::new(),
            timestamp: Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, max_id + 1);
}
