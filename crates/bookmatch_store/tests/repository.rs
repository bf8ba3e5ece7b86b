use std::sync::Arc;

use bookmatch_core::{Book, BookPatch};
use bookmatch_store::{
    parse_id, BookRepository, EntityKind, InOrder, LatencySettings, Repository, StoreError,
};
use pretty_assertions::assert_eq;

fn book(id: u32, title: &str, genres: &[&str]) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: "Author".to_string(),
        synopsis: "Synopsis".to_string(),
        cover_url: format!("https://covers.example/{id}.jpg"),
        rating: 4.0,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        page_count: 200,
        publish_year: 2000,
    }
}

fn repo_with_max_id_seven() -> BookRepository {
    BookRepository::new(
        vec![
            book(2, "Two", &["Fantasy"]),
            book(7, "Seven", &["Mystery"]),
            book(5, "Five", &["Fantasy", "Horror"]),
        ],
        LatencySettings::none(),
        Arc::new(InOrder),
    )
}

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
    let repo = repo_with_max_id_seven();
    let err = repo.get_by_id(9999).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(
        err,
        StoreError::NotFound {
            kind: EntityKind::Book,
            id: 9999
        }
    ));
    assert_eq!(err.to_string(), "Book not found");
}

#[tokio::test]
async fn create_assigns_next_id_ignoring_input() {
    let repo = repo_with_max_id_seven();
    let created = repo.create(book(42, "New", &["Drama"])).await.unwrap();

    assert_eq!(created.id, 8);
    assert_eq!(repo.get_by_id(8).await.unwrap().title, "New");
    assert!(repo.get_by_id(42).await.is_err());
    assert_eq!(repo.get_all().await.unwrap().len(), 4);
}

#[tokio::test]
async fn create_in_empty_collection_starts_at_one() {
    let repo = BookRepository::new(Vec::new(), LatencySettings::none(), Arc::new(InOrder));
    let created = repo.create(book(0, "First", &[])).await.unwrap();
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn update_changes_only_patched_fields() {
    let repo = repo_with_max_id_seven();
    let before = repo.get_by_id(5).await.unwrap();

    let patch = BookPatch {
        title: Some("X".to_string()),
        ..BookPatch::default()
    };
    let updated = repo.update(5, patch).await.unwrap();

    let expected = Book {
        title: "X".to_string(),
        ..before
    };
    assert_eq!(updated, expected);
    assert_eq!(repo.get_by_id(5).await.unwrap(), expected);
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let repo = repo_with_max_id_seven();
    let err = repo.update(3, BookPatch::default()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_removes_once() {
    let repo = repo_with_max_id_seven();
    repo.delete(7).await.unwrap();

    let ids: Vec<u32> = repo.get_all().await.unwrap().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, 5]);
    assert!(repo.delete(7).await.unwrap_err().is_not_found());

    // Ids are derived from what is left.
    let created = repo.create(book(0, "After", &[])).await.unwrap();
    assert_eq!(created.id, 6);
}

#[tokio::test]
async fn returned_records_are_copies() {
    let repo = repo_with_max_id_seven();
    let mut all = repo.get_all().await.unwrap();
    all[0].title = "Mutated".to_string();
    all.clear();

    assert_eq!(repo.get_by_id(2).await.unwrap().title, "Two");
    assert_eq!(repo.get_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn get_by_genre_keeps_store_order() {
    let repo = repo_with_max_id_seven();
    let ids: Vec<u32> = repo
        .get_by_genre("Fantasy")
        .await
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec![2, 5]);
    assert!(repo.get_by_genre("Romance").await.is_empty());
}

#[test]
fn parse_id_rejects_malformed_input() {
    assert_eq!(parse_id(" 12 ").unwrap(), 12);
    assert!(matches!(parse_id("abc"), Err(StoreError::InvalidId(raw)) if raw == "abc"));
    assert!(parse_id("-1").is_err());
    assert!(parse_id("").is_err());
}
