//! Command-line token parser.
//!
//! # Responsibility
//! - Turn one whitespace-split token list (process args or a REPL line)
//!   into a CRUD command plus its named values.
//!
//! # Invariants
//! - Selectors are evaluated in Create, Read, Update, Delete order with
//!   sequential overwrite, so the last selector in that order wins when a
//!   line carries more than one.
//! - Named values stay raw strings here; each command interprets them at
//!   dispatch time.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const EXIT_TOKEN: &str = "-exit";
pub const RESET_TOKEN: &str = "-dbreset";
pub const CLEAR_SCREEN_TOKEN: &str = "cls";

const CREATE_SHORT: &str = "-c";
const CREATE_LONG: &str = "-create";
const READ_SHORT: &str = "-r";
const READ_LONG: &str = "-read";
const UPDATE_SHORT: &str = "-u";
const UPDATE_LONG: &str = "-update";
const DELETE_SHORT: &str = "-d";
const DELETE_LONG: &str = "-delete";

const ID_KEY: &str = "id";
const NAME_KEY: &str = "name";
const BIRTH_KEY: &str = "birth";
const ROWCOUNT_KEY: &str = "rowcount";

/// The four supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Read,
    Update,
    Delete,
}

/// One parsed input line: the selected command plus raw named values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: Command,
    pub id: Option<String>,
    pub name: Option<String>,
    pub birth: Option<String>,
    pub rowcount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No selector token was present in the input.
    NoSelector,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSelector => write!(f, "no valid CRUD argument found"),
        }
    }
}

impl Error for CommandError {}

/// Returns whether any CRUD selector token is present.
pub fn has_selector(tokens: &[&str]) -> bool {
    tokens.iter().any(|token| {
        matches!(
            *token,
            CREATE_SHORT
                | CREATE_LONG
                | READ_SHORT
                | READ_LONG
                | UPDATE_SHORT
                | UPDATE_LONG
                | DELETE_SHORT
                | DELETE_LONG
        )
    })
}

/// Parses one token list into a [`CommandLine`].
///
/// # Errors
/// - `NoSelector` when none of the eight selector tokens is present.
pub fn parse_tokens(tokens: &[&str]) -> Result<CommandLine, CommandError> {
    let mut command = None;

    if contains_either(tokens, CREATE_SHORT, CREATE_LONG) {
        command = Some(Command::Create);
    }
    if contains_either(tokens, READ_SHORT, READ_LONG) {
        command = Some(Command::Read);
    }
    if contains_either(tokens, UPDATE_SHORT, UPDATE_LONG) {
        command = Some(Command::Update);
    }
    if contains_either(tokens, DELETE_SHORT, DELETE_LONG) {
        command = Some(Command::Delete);
    }

    let command = command.ok_or(CommandError::NoSelector)?;

    let mut line = CommandLine {
        command,
        id: None,
        name: None,
        birth: None,
        rowcount: None,
    };

    for token in tokens {
        let Some(pair) = token.strip_prefix("--") else {
            continue;
        };
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        // Later occurrences of the same key overwrite earlier ones.
        match key {
            ID_KEY => line.id = Some(value.to_string()),
            NAME_KEY => line.name = Some(value.to_string()),
            BIRTH_KEY => line.birth = Some(value.to_string()),
            ROWCOUNT_KEY => line.rowcount = Some(value.to_string()),
            _ => {}
        }
    }

    Ok(line)
}

fn contains_either(tokens: &[&str], short: &str, long: &str) -> bool {
    tokens.iter().any(|token| *token == short || *token == long)
}
