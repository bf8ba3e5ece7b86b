use chrono::{DateTime, Duration, Utc};

use crate::{books_by_id, Book, Match, MatchId, MatchPatch, User, UserId};

const DEFAULT_OPENER: &str = "Hi! I see we both love the same books!";
const SEEDED_REPLY: &str = "Yes! What did you think about the ending?";

/// Matches the user takes part in, in store order.
pub fn user_matches(matches: &[Match], user_id: UserId) -> Vec<&Match> {
    matches.iter().filter(|m| m.involves(user_id)).collect()
}

/// One row of the matches list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub other: User,
    pub shared_count: usize,
    pub last_message: Option<String>,
}

/// Rows for every match of `current`; matches whose other participant is not
/// among `users` are skipped.
pub fn match_summaries(matches: &[Match], users: &[User], current: &User) -> Vec<MatchSummary> {
    user_matches(matches, current.id)
        .into_iter()
        .filter_map(|entry| {
            let other_id = entry.other_user(current.id);
            let other = users.iter().find(|user| user.id == other_id)?;
            Some(MatchSummary {
                match_id: entry.id,
                other: other.clone(),
                shared_count: entry.shared_books.len(),
                last_message: (!entry.last_message.is_empty()).then(|| entry.last_message.clone()),
            })
        })
        .collect()
}

pub fn matches_subtitle(count: usize) -> String {
    let noun = if count == 1 { "match" } else { "matches" };
    format!("{count} {noun}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: usize,
    pub sender_id: UserId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Conversation screen for one match. The transcript is simulated locally;
/// only the last message is written back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatView {
    pub match_id: MatchId,
    pub current_user: UserId,
    pub other: Option<User>,
    pub shared_books: Vec<Book>,
    pub messages: Vec<ChatMessage>,
}

impl ChatView {
    pub fn derive(
        entry: &Match,
        users: &[User],
        books: &[Book],
        current: &User,
        now: DateTime<Utc>,
    ) -> Self {
        let other_id = entry.other_user(current.id);
        let opener = if entry.last_message.is_empty() {
            DEFAULT_OPENER.to_owned()
        } else {
            entry.last_message.clone()
        };

        Self {
            match_id: entry.id,
            current_user: current.id,
            other: users.iter().find(|user| user.id == other_id).cloned(),
            shared_books: books_by_id(books, &entry.shared_books)
                .into_iter()
                .cloned()
                .collect(),
            messages: vec![
                ChatMessage {
                    id: 1,
                    sender_id: other_id,
                    text: opener,
                    timestamp: entry.timestamp,
                },
                ChatMessage {
                    id: 2,
                    sender_id: current.id,
                    text: SEEDED_REPLY.to_owned(),
                    timestamp: now - Duration::hours(1),
                },
            ],
        }
    }

    /// Appends a message from the current user and returns the patch that
    /// records it as the match's last message and activity time. Blank input is ignored.
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> Option<MatchPatch> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            id: self.messages.len() + 1,
            sender_id: self.current_user,
            text: text.to_owned(),
            timestamp: now,
        });
        Some(MatchPatch {
            last_message: Some(text.to_owned()),
            timestamp: Some(now),
            ..MatchPatch::default()
        })
    }
}
