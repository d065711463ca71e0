//! Text commands typed by the user, translated into messages.

use checklist_core::{ChecklistViewModel, HeaderMsg, Msg};
use thiserror::Error;

pub const HELP: &str = "commands: toggle N | button | add | star | confirm | dismiss | modal | icon NAME | refresh | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("{0:?} is not a row number")]
    InvalidIndex(String),
    #[error("no row {0}")]
    NoSuchRow(usize),
}

/// Parses one input line. Row numbers are 1-based positions in `view`.
pub fn parse_command(line: &str, view: &ChecklistViewModel) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Err(CommandError::Empty);
    };
    let argument = words.next();

    let msg = match name.to_ascii_lowercase().as_str() {
        "toggle" | "t" => {
            let raw = argument.ok_or(CommandError::MissingArgument("toggle"))?;
            let position: usize = raw
                .parse()
                .map_err(|_| CommandError::InvalidIndex(raw.to_string()))?;
            let id = position
                .checked_sub(1)
                .and_then(|index| view.row_id(index))
                .ok_or(CommandError::NoSuchRow(position))?;
            Msg::ToggleCheck(id)
        }
        "button" | "b" => Msg::ActionButtonPressed,
        "add" => Msg::AddTapped,
        "star" => Msg::StarTapped,
        "confirm" => Msg::ConfirmAdd,
        "dismiss" => Msg::ConfirmationDismissed,
        "modal" => Msg::Header(HeaderMsg::ShowModal),
        "icon" => {
            let icon = argument.ok_or(CommandError::MissingArgument("icon"))?;
            Msg::Header(HeaderMsg::UserIconChanged(icon.to_string()))
        }
        "refresh" => Msg::Appear,
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Command::Send(msg))
}
