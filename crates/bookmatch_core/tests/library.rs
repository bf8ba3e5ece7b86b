use bookmatch_core::{Book, GoalProgress, LibraryView, ReadingStats, User};
use pretty_assertions::assert_eq;

fn book(id: u32) -> Book {
    Book {
        id,
        title: format!("Title {id}"),
        author: "Author".to_string(),
        synopsis: String::new(),
        cover_url: String::new(),
        rating: 3.5,
        genres: vec!["Drama".to_string()],
        page_count: 120,
        publish_year: 2010,
    }
}

fn reader(goal: u32, read: Vec<u32>, reading: Vec<u32>) -> User {
    User {
        id: 1,
        name: "Ada".to_string(),
        avatar: String::new(),
        reading_goal: goal,
        favorite_genres: Vec::new(),
        books_read: read,
        currently_reading: reading,
    }
}

fn ids(books: &[Book]) -> Vec<u32> {
    books.iter().map(|b| b.id).collect()
}

#[test]
fn shelves_follow_catalogue_order() {
    let books: Vec<Book> = (1..=6).map(book).collect();
    let user = reader(12, vec![5, 2], vec![4]);

    let view = LibraryView::derive(Some(&user), &books, &[6, 1]);

    assert_eq!(ids(&view.finished), vec![2, 5]);
    assert_eq!(ids(&view.currently_reading), vec![4]);
    assert_eq!(ids(&view.want_to_read), vec![1, 6]);
    assert_eq!(view.total, 5);
    assert_eq!(view.subtitle(), "5 books in your collection");
}

#[test]
fn unknown_ids_are_skipped() {
    let books: Vec<Book> = (1..=3).map(book).collect();
    let user = reader(10, vec![1, 99], vec![]);

    let view = LibraryView::derive(Some(&user), &books, &[42]);
    assert_eq!(ids(&view.finished), vec![1]);
    assert!(view.want_to_read.is_empty());
    assert_eq!(view.goal.unwrap().read, 1);
}

#[test]
fn empty_library_without_user() {
    let books: Vec<Book> = (1..=3).map(book).collect();
    let view = LibraryView::derive(None, &books, &[]);
    assert!(view.is_empty());
    assert!(view.goal.is_none());
}

#[test]
fn goal_progress_rounds_and_caps() {
    let progress = GoalProgress::new(1, 3).unwrap();
    assert_eq!(progress.percent, 33);
    assert_eq!(progress.remaining, 2);

    let half = GoalProgress::new(1, 8).unwrap();
    assert_eq!(half.percent, 13);

    let over = GoalProgress::new(30, 24).unwrap();
    assert_eq!(over.percent, 125);
    assert_eq!(over.bar_percent, 100);
    assert_eq!(over.remaining, 0);
}

#[test]
fn zero_goal_has_no_progress() {
    assert!(GoalProgress::new(4, 0).is_none());

    let books: Vec<Book> = (1..=3).map(book).collect();
    let stats = ReadingStats::derive(&reader(0, vec![1, 2], vec![3]), &books);
    assert_eq!(
        stats,
        ReadingStats {
            books_read: 2,
            currently_reading: 1,
            goal_percent: 0,
        }
    );
}

#[test]
fn reading_stats_use_goal_percent() {
    let books: Vec<Book> = (1..=4).map(book).collect();
    let stats = ReadingStats::derive(&reader(4, vec![1, 2, 3], vec![4]), &books);
    assert_eq!(stats.goal_percent, 75);
}
