use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use bookmatch_core::{
    match_summaries, matches_subtitle, update, BookId, ChatView, DiscoverPage, LibraryView, Msg,
    Notice, ProfileForm, ReadingStats,
};
use bookmatch_logging::{bm_debug, bm_info, bm_warn};
use bookmatch_store::{
    parse_id, RandomSource, ReaderSnapshot, SeededRandom, Services, StoreCommand, StoreEvent,
    StoreHandle,
};
use chrono::Utc;

use super::commands::{parse_command, Command, Screen, HELP};
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::{logging, persistence, render};

const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::default();
    logging::initialize(config.log_destination, config.log_level, &config.state_dir);
    bm_info!("bookmatch starting; state dir {:?}", config.state_dir);

    let random: Arc<dyn RandomSource> = match config.seed {
        Some(seed) => Arc::new(SeededRandom::from_seed(seed)),
        None => Arc::new(SeededRandom::from_entropy()),
    };
    let services =
        Services::from_fixtures(config.latency, random).context("loading bundled fixtures")?;
    let store = StoreHandle::new(services).context("starting store worker")?;
    let saved = persistence::load_saved_books(&config.state_dir);

    let mut app = App::new(&config, store, saved);
    println!("Welcome to BookMatch. Type `help` for commands.");
    app.dispatch(Msg::Mounted);

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match parse_command(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => app.handle(command),
            Ok(None) => {}
            Err(err) => println!("{err}"),
        }
        app.drain();
        prompt()?;
    }

    bm_info!("bookmatch exiting");
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

struct App {
    store: StoreHandle,
    effects: EffectRunner,
    discover: DiscoverPage,
    screen: Screen,
    reader: Option<ReaderSnapshot>,
    form: Option<ProfileForm>,
    chat: Option<ChatView>,
}

impl App {
    fn new(config: &AppConfig, store: StoreHandle, saved: Vec<BookId>) -> Self {
        Self {
            store,
            effects: EffectRunner::new(config.state_dir.clone(), saved),
            discover: DiscoverPage::with_settings(config.swipe),
            screen: Screen::Discover,
            reader: None,
            form: None,
            chat: None,
        }
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Discover(msg) => {
                if self.screen == Screen::Discover {
                    self.dispatch(msg);
                } else {
                    println!("Open `discover` to swipe.");
                }
            }
            Command::Open(screen) => self.open(screen),
            Command::OpenChat(raw) => match parse_id(&raw) {
                Ok(match_id) => {
                    self.leave_discover();
                    self.screen = Screen::Matches;
                    self.request(StoreCommand::LoadChat { match_id });
                }
                Err(err) => println!("{err}"),
            },
            Command::Say(text) => self.say(&text),
            Command::EditName(name) => {
                if let Some(form) = self.editing() {
                    form.name = name;
                }
                self.show_profile();
            }
            Command::EditGoal(goal) => {
                if let Some(form) = self.editing() {
                    form.reading_goal = goal;
                }
                self.show_profile();
            }
            Command::EditGenre(genre) => {
                if let Some(form) = self.editing() {
                    form.toggle_genre(genre);
                }
                self.show_profile();
            }
            Command::SaveProfile => self.save_profile(),
            Command::CancelEdit => {
                self.form = None;
                self.show_profile();
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => {}
        }
    }

    /// Runs one message through the discover page and carries out its effects.
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.discover);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.discover = state;

        let (requested, notices) = self.effects.run(&self.store, effects);
        show_notices(&notices);
        if was_dirty && self.screen == Screen::Discover {
            print!("{}", render::render_discover(&view));
        }
        if requested {
            self.await_reply();
        }
    }

    fn open(&mut self, screen: Screen) {
        if screen == Screen::Discover {
            if self.screen != Screen::Discover {
                self.screen = Screen::Discover;
                self.dispatch(Msg::Mounted);
            } else {
                print!("{}", render::render_discover(&self.discover.view()));
            }
            return;
        }

        self.leave_discover();
        self.screen = screen;
        self.chat = None;
        let command = match screen {
            Screen::Matches => StoreCommand::LoadMatches,
            _ => StoreCommand::LoadReader,
        };
        self.request(command);
    }

    fn leave_discover(&mut self) {
        if self.screen == Screen::Discover {
            self.dispatch(Msg::Unmounted);
        }
    }

    fn request(&mut self, command: StoreCommand) {
        bm_debug!("request {:?}", command);
        self.store.enqueue(command);
        self.await_reply();
    }

    /// Blocks until the store answers once, then handles the answer.
    fn await_reply(&mut self) {
        println!("Loading...");
        match self.store.recv_timeout(REPLY_TIMEOUT) {
            Some(event) => self.on_event(event),
            None => {
                bm_warn!("no store reply within {:?}", REPLY_TIMEOUT);
                println!("Still loading; results will appear after your next command.");
            }
        }
    }

    /// Handles replies that arrived late.
    fn drain(&mut self) {
        while let Some(event) = self.store.try_recv() {
            self.on_event(event);
        }
    }

    fn on_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::StackFetched { token, result } => {
                self.dispatch(Msg::StackLoaded {
                    token,
                    result: result.map_err(|err| err.to_string()),
                });
            }
            StoreEvent::ReaderLoaded(Ok(snapshot)) => {
                self.reader = Some(snapshot);
                match self.screen {
                    Screen::Library => self.show_library(),
                    Screen::Profile => self.show_profile(),
                    _ => {}
                }
            }
            StoreEvent::ReaderLoaded(Err(err)) => {
                bm_warn!("reader load failed: {}", err);
                let what = if self.screen == Screen::Profile {
                    "profile"
                } else {
                    "library"
                };
                show_notice(&Notice::error(format!("Failed to load {what}")));
            }
            StoreEvent::MatchesLoaded(Ok(snapshot)) => {
                if self.screen == Screen::Matches {
                    let rows =
                        match_summaries(&snapshot.matches, &snapshot.users, &snapshot.current_user);
                    let subtitle = matches_subtitle(rows.len());
                    print!("{}", render::render_matches(&rows, &subtitle));
                }
            }
            StoreEvent::MatchesLoaded(Err(err)) => {
                bm_warn!("matches load failed: {}", err);
                show_notice(&Notice::error("Failed to load matches"));
            }
            StoreEvent::ChatLoaded(Ok(snapshot)) => {
                let chat = ChatView::derive(
                    &snapshot.entry,
                    &snapshot.users,
                    &snapshot.books,
                    &snapshot.current_user,
                    Utc::now(),
                );
                print!("{}", render::render_chat(&chat));
                self.chat = Some(chat);
            }
            StoreEvent::ChatLoaded(Err(err)) => {
                bm_warn!("chat load failed: {}", err);
                show_notice(&Notice::error("Failed to load chat"));
            }
            StoreEvent::UserUpdated(Ok(user)) => {
                if let Some(reader) = self.reader.as_mut() {
                    reader.user = user;
                }
                self.form = None;
                show_notice(&Notice::success("Profile updated successfully!"));
                self.show_profile();
            }
            StoreEvent::UserUpdated(Err(err)) => {
                bm_warn!("profile update failed: {}", err);
                show_notice(&Notice::error("Failed to update profile"));
            }
            StoreEvent::MatchUpdated(Ok(_)) => {
                show_notice(&Notice::success("Message sent!"));
            }
            StoreEvent::MatchUpdated(Err(err)) => {
                bm_warn!("message send failed: {}", err);
                show_notice(&Notice::error("Failed to send message"));
            }
        }
    }

    fn say(&mut self, text: &str) {
        let Some(chat) = self.chat.as_mut() else {
            println!("Open a conversation with `chat <id>` first.");
            return;
        };
        let Some(patch) = chat.send(text, Utc::now()) else {
            return;
        };
        let match_id = chat.match_id;
        print!("{}", render::render_chat(chat));
        self.request(StoreCommand::UpdateMatch { match_id, patch });
    }

    fn editing(&mut self) -> Option<&mut ProfileForm> {
        if self.screen != Screen::Profile {
            println!("Open `profile` to edit it.");
            return None;
        }
        let user = &self.reader.as_ref()?.user;
        Some(self.form.get_or_insert_with(|| ProfileForm::from_user(user)))
    }

    fn save_profile(&mut self) {
        let (Some(form), Some(reader)) = (self.form.as_ref(), self.reader.as_ref()) else {
            println!("Nothing to save.");
            return;
        };
        match form.to_patch() {
            Ok(patch) => {
                let user_id = reader.user.id;
                self.request(StoreCommand::UpdateUser { user_id, patch });
            }
            Err(err) => show_notice(&Notice::error(err.to_string())),
        }
    }

    fn show_library(&self) {
        let Some(reader) = self.reader.as_ref() else {
            return;
        };
        let view = LibraryView::derive(Some(&reader.user), &reader.books, self.effects.saved());
        print!("{}", render::render_library(&view));
    }

    fn show_profile(&self) {
        if self.screen != Screen::Profile {
            return;
        }
        let Some(reader) = self.reader.as_ref() else {
            return;
        };
        let stats = ReadingStats::derive(&reader.user, &reader.books);
        print!(
            "{}",
            render::render_profile(&reader.user, &stats, self.form.as_ref())
        );
    }
}

fn show_notice(notice: &Notice) {
    println!("{}", render::render_notice(notice));
}

fn show_notices(notices: &[Notice]) {
    for notice in notices {
        show_notice(notice);
    }
}
