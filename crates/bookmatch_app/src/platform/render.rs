use std::fmt::Write;

use bookmatch_core::{
    visible_genres, Book, ChatView, DiscoverView, LibraryView, LoadPhase, MatchSummary, Notice,
    NoticeLevel, ProfileForm, ReadingStats, User, ALL_GENRES,
};

const BAR_WIDTH: u32 = 20;

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => " ok ",
        NoticeLevel::Error => "fail",
    };
    format!("[{tag}] {}", notice.text)
}

pub fn render_discover(view: &DiscoverView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== BookMatch: {}", view.subtitle);

    let chips: Vec<String> = visible_genres(false)
        .iter()
        .map(|genre| {
            if view.selected_genres.iter().any(|g| g == genre) {
                format!("[{genre}]")
            } else {
                genre.to_string()
            }
        })
        .collect();
    let hidden = ALL_GENRES.len() - chips.len();
    let _ = write!(out, "Filter by genre: {} (+{hidden} more)", chips.join(" · "));
    if view.show_clear {
        let _ = write!(out, "  | clear all");
    }
    out.push('\n');

    match &view.phase {
        LoadPhase::Idle => out.push_str("Not loaded.\n"),
        LoadPhase::Loading => out.push_str("Loading books...\n"),
        LoadPhase::Failed(message) => {
            let _ = writeln!(out, "Something went wrong: {message}\nType `retry` to try again.");
        }
        LoadPhase::Ready if view.exhausted => {
            out.push_str(
                "No more books! You've seen all available books. \
                 Check back later or `clear` your filters.\n",
            );
        }
        LoadPhase::Ready => {
            for (depth, book) in view.window.iter().enumerate() {
                if depth == 0 {
                    out.push_str(&render_card(book));
                } else {
                    let _ = writeln!(out, "  next: {} by {}", book.title, book.author);
                }
            }
            out.push_str("pass | like | super\n");
        }
    }
    out
}

fn render_card(book: &Book) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "+ {} ({})", book.title, book.publish_year);
    let _ = writeln!(out, "| by {}  *{:.1}  {} pages", book.author, book.rating, book.page_count);
    let _ = writeln!(out, "| {}", book.genres.join(", "));
    if !book.synopsis.is_empty() {
        let _ = writeln!(out, "| {}", book.synopsis);
    }
    out
}

fn shelf(out: &mut String, title: &str, books: &[Book]) {
    if books.is_empty() {
        return;
    }
    let _ = writeln!(out, "-- {title} ({})", books.len());
    for book in books {
        let _ = writeln!(out, "   {} by {}", book.title, book.author);
    }
}

fn progress_bar(percent: u32) -> String {
    let filled = percent.min(100) * BAR_WIDTH / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled as usize),
        ".".repeat((BAR_WIDTH - filled) as usize)
    )
}

pub fn render_library(view: &LibraryView) -> String {
    let mut out = String::new();
    if view.is_empty() {
        out.push_str(
            "== My Library\nYour library is empty. Like books while swiping to save them here!\n",
        );
        return out;
    }

    let _ = writeln!(out, "== My Library: {}", view.subtitle());
    if let Some(goal) = view.goal {
        let _ = writeln!(
            out,
            "Reading goal {}/{} {} {}% complete, {} books to go",
            goal.read,
            goal.goal,
            progress_bar(goal.bar_percent),
            goal.percent,
            goal.remaining
        );
    }
    shelf(&mut out, "Currently Reading", &view.currently_reading);
    shelf(&mut out, "Want to Read", &view.want_to_read);
    shelf(&mut out, "Finished Books", &view.finished);
    out
}

pub fn render_profile(user: &User, stats: &ReadingStats, form: Option<&ProfileForm>) -> String {
    let mut out = String::new();
    match form {
        Some(form) => {
            let _ = writeln!(out, "== Profile (editing)");
            let _ = writeln!(out, "name: {}", form.name);
            let _ = writeln!(out, "reading goal: {}", form.reading_goal);
            let _ = writeln!(out, "favorite genres: {}", form.favorite_genres.join(", "));
            out.push_str("save | cancel\n");
        }
        None => {
            let _ = writeln!(out, "== Profile: {}", user.name);
            let _ = writeln!(
                out,
                "{} books read · {} currently reading · {}% of goal",
                stats.books_read, stats.currently_reading, stats.goal_percent
            );
            let _ = writeln!(
                out,
                "Reading goal: {} of {} books {}",
                stats.books_read,
                user.reading_goal,
                progress_bar(stats.goal_percent)
            );
            let _ = writeln!(out, "Favorite genres: {}", user.favorite_genres.join(", "));
        }
    }
    out
}

pub fn render_matches(rows: &[MatchSummary], subtitle: &str) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        out.push_str(
            "== Your Matches\nNo matches yet. Start swiping on books to connect with readers!\n",
        );
        return out;
    }
    let _ = writeln!(out, "== Your Matches: {subtitle}");
    for row in rows {
        let books = if row.shared_count == 1 { "book" } else { "books" };
        let _ = writeln!(
            out,
            "#{} {} · {} shared {books}",
            row.match_id, row.other.name, row.shared_count
        );
        if let Some(last) = &row.last_message {
            let _ = writeln!(out, "    \"{last}\"");
        }
    }
    out.push_str("chat <id> to open a conversation\n");
    out
}

pub fn render_chat(chat: &ChatView) -> String {
    let mut out = String::new();
    let name = chat
        .other
        .as_ref()
        .map(|user| user.name.as_str())
        .unwrap_or("Unknown reader");
    let _ = writeln!(out, "== Chat with {name}");
    if !chat.shared_books.is_empty() {
        let titles: Vec<&str> = chat.shared_books.iter().map(|b| b.title.as_str()).collect();
        let _ = writeln!(out, "Shared books: {}", titles.join(", "));
    }
    for message in &chat.messages {
        let who = if message.sender_id == chat.current_user {
            "you"
        } else {
            name
        };
        let _ = writeln!(
            out,
            "{} {who}: {}",
            message.timestamp.format("%b %d %H:%M"),
            message.text
        );
    }
    out
}
