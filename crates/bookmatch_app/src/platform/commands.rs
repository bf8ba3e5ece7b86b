use bookmatch_core::{Msg, ALL_GENRES};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Discover,
    Library,
    Profile,
    Matches,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forwarded to the discover page state machine.
    Discover(Msg),
    Open(Screen),
    /// Raw id as typed; validated by the store.
    OpenChat(String),
    Say(String),
    EditName(String),
    EditGoal(String),
    EditGenre(&'static str),
    SaveProfile,
    CancelEdit,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("not a drag distance: {0:?}")]
    BadOffset(String),
    #[error("unknown genre {0:?}")]
    UnknownGenre(String),
}

pub const HELP: &str = "\
discover screen:  like | pass | super | drag <dx> | genre <name> | clear | retry
navigation:       discover | library | profile | matches | chat <match id>
chat:             say <message>
profile editing:  name <text> | goal <number> | fav <genre> | save | cancel
other:            help | quit";

pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "like" | "l" => Command::Discover(Msg::LikeClicked),
        "pass" | "p" => Command::Discover(Msg::PassClicked),
        "super" | "s" => Command::Discover(Msg::SuperLikeClicked),
        "drag" => {
            let raw = required(rest, "drag")?;
            let offset_x = raw
                .parse::<f32>()
                .map_err(|_| CommandError::BadOffset(raw.to_owned()))?;
            Command::Discover(Msg::DragReleased { offset_x })
        }
        "genre" | "g" => Command::Discover(Msg::GenreToggled(
            canonical_genre(required(rest, "genre")?)?.to_owned(),
        )),
        "clear" => Command::Discover(Msg::GenresCleared),
        "retry" => Command::Discover(Msg::RetryClicked),
        "discover" => Command::Open(Screen::Discover),
        "library" => Command::Open(Screen::Library),
        "profile" => Command::Open(Screen::Profile),
        "matches" => Command::Open(Screen::Matches),
        "chat" => Command::OpenChat(required(rest, "chat")?.to_owned()),
        "say" => Command::Say(required(rest, "say")?.to_owned()),
        "name" => Command::EditName(required(rest, "name")?.to_owned()),
        "goal" => Command::EditGoal(required(rest, "goal")?.to_owned()),
        "fav" => Command::EditGenre(canonical_genre(required(rest, "fav")?)?),
        "save" => Command::SaveProfile,
        "cancel" => Command::CancelEdit,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(verb.to_owned())),
    };
    Ok(Some(command))
}

fn required<'a>(rest: &'a str, verb: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(verb))
    } else {
        Ok(rest)
    }
}

fn canonical_genre(raw: &str) -> Result<&'static str, CommandError> {
    ALL_GENRES
        .iter()
        .copied()
        .find(|genre| genre.eq_ignore_ascii_case(raw))
        .ok_or_else(|| CommandError::UnknownGenre(raw.to_owned()))
}
