use chrono::NaiveDate;
use contactbook_core::{CoreError, CoreErrorKind, Directory};
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::util::local_today;

pub mod birthdays;
pub mod contacts;

/// State shared by every command of one interactive session.
#[derive(Debug)]
pub struct Session {
    pub directory: Directory,
    pub window_days: i64,
    pub json: bool,
    today_override: Option<NaiveDate>,
}

impl Session {
    pub fn new(window_days: i64, json: bool, today_override: Option<NaiveDate>) -> Self {
        Self {
            directory: Directory::new(),
            window_days,
            json,
            today_override,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today_override.unwrap_or_else(local_today)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Exit(String),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("usage for {command:?}: {usage}")]
    Usage {
        command: ReplCommand,
        usage: &'static str,
    },
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

pub const COMMANDS: [ReplCommand; 10] = [
    ReplCommand::Hello,
    ReplCommand::Add,
    ReplCommand::Change,
    ReplCommand::Phone,
    ReplCommand::All,
    ReplCommand::AddBirthday,
    ReplCommand::ShowBirthday,
    ReplCommand::Birthdays,
    ReplCommand::Help,
    ReplCommand::Exit,
];

impl ReplCommand {
    pub fn usage(self) -> &'static str {
        match self {
            ReplCommand::Hello => "hello",
            ReplCommand::Add => "add <name> <phone>",
            ReplCommand::Change => "change <name> <old-phone> <new-phone>",
            ReplCommand::Phone => "phone <name>",
            ReplCommand::All => "all",
            ReplCommand::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            ReplCommand::ShowBirthday => "show-birthday <name>",
            ReplCommand::Birthdays => "birthdays [days]",
            ReplCommand::Help => "help",
            ReplCommand::Exit => "exit | close",
        }
    }

    fn usage_error(self) -> CommandError {
        CommandError::Usage {
            command: self,
            usage: self.usage(),
        }
    }
}

impl FromStr for ReplCommand {
    type Err = CommandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "hello" => Ok(ReplCommand::Hello),
            "add" => Ok(ReplCommand::Add),
            "change" => Ok(ReplCommand::Change),
            "phone" => Ok(ReplCommand::Phone),
            "all" => Ok(ReplCommand::All),
            "add-birthday" => Ok(ReplCommand::AddBirthday),
            "show-birthday" => Ok(ReplCommand::ShowBirthday),
            "birthdays" => Ok(ReplCommand::Birthdays),
            "help" => Ok(ReplCommand::Help),
            "exit" | "close" => Ok(ReplCommand::Exit),
            _ => Err(CommandError::UnknownCommand(raw.to_string())),
        }
    }
}

/// Splits a line into a command name and its whitespace separated arguments.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}

pub fn dispatch(
    session: &mut Session,
    name: &str,
    args: &[&str],
) -> Result<Outcome, CommandError> {
    let command = ReplCommand::from_str(name)?;
    debug!(?command, args = args.len(), "dispatching command");

    let reply = match command {
        ReplCommand::Hello => {
            expect_args::<0>(command, args)?;
            "How can I help you?".to_string()
        }
        ReplCommand::Add => {
            let [name, phone] = expect_args::<2>(command, args)?;
            contacts::add_contact(session, name, phone)?
        }
        ReplCommand::Change => {
            let [name, old, new] = expect_args::<3>(command, args)?;
            contacts::change_contact(session, name, old, new)?
        }
        ReplCommand::Phone => {
            let [name] = expect_args::<1>(command, args)?;
            contacts::show_phone(session, name)?
        }
        ReplCommand::All => {
            expect_args::<0>(command, args)?;
            contacts::show_all(session)?
        }
        ReplCommand::AddBirthday => {
            let [name, date] = expect_args::<2>(command, args)?;
            birthdays::add_birthday(session, name, date)?
        }
        ReplCommand::ShowBirthday => {
            let [name] = expect_args::<1>(command, args)?;
            birthdays::show_birthday(session, name)?
        }
        ReplCommand::Birthdays => match args {
            [] => birthdays::list_upcoming(session, None)?,
            [days] => birthdays::list_upcoming(session, Some(*days))?,
            _ => return Err(command.usage_error()),
        },
        ReplCommand::Help => help_text(),
        ReplCommand::Exit => return Ok(Outcome::Exit("Good bye".to_string())),
    };

    Ok(Outcome::Continue(reply))
}

/// The only place command errors become user-facing text.
pub fn message_for(err: &CommandError) -> String {
    match err {
        CommandError::UnknownCommand(_) => "Invalid command".to_string(),
        CommandError::Usage { usage, .. } => format!("Usage: {}", usage),
        CommandError::Core(core) => match core {
            CoreError::ContactNotFound(_) => "Contact not found".to_string(),
            CoreError::PhoneNotFound(_) => "Phone number not found".to_string(),
            CoreError::BirthdayNotSet(_) => "Birthday not set".to_string(),
            CoreError::InvalidPhone(_) => "Phone number should have 10 digits".to_string(),
            CoreError::InvalidBirthday(_) => "Invalid date format. Use DD.MM.YYYY".to_string(),
            other => match other.kind() {
                CoreErrorKind::NotFound => "Not found".to_string(),
                CoreErrorKind::InvalidFormat => capitalize(&other.to_string()),
            },
        },
        CommandError::Json(err) => format!("Internal error: {}", err),
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn expect_args<'a, const N: usize>(
    command: ReplCommand,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| command.usage_error())
}

fn help_text() -> String {
    let lines: Vec<String> = COMMANDS
        .iter()
        .map(|command| format!("  {}", command.usage()))
        .collect();
    format!("Commands:\n{}", lines.join("\n"))
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
