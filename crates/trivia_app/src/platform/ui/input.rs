//! Line commands typed at the prompt.

use thiserror::Error;
use trivia_core::Msg;

pub const HELP: &str = "\
commands:
  categories         show all questions
  category <id>      show questions in one category
  search <term>      search question text
  page <n>           go to page n
  delete <id>        delete a question
  help               show this text
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

/// Parses one input line. While a delete awaits confirmation every line is an
/// answer to the prompt, and anything but yes cancels.
pub fn parse_command(line: &str, awaiting_confirmation: bool) -> Result<Command, InputError> {
    let line = line.trim();
    if awaiting_confirmation {
        let confirmed = matches!(line.to_ascii_lowercase().as_str(), "y" | "yes");
        return Ok(Command::Dispatch(if confirmed {
            Msg::DeleteConfirmed
        } else {
            Msg::DeleteCancelled
        }));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let msg = match word.to_ascii_lowercase().as_str() {
        "" => Msg::NoOp,
        "categories" => Msg::CategoriesClicked,
        "category" => Msg::CategorySelected(number(rest, "category")?),
        "search" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("search"));
            }
            Msg::SearchSubmitted(rest.to_string())
        }
        "page" => Msg::PageSelected(number(rest, "page")?),
        "delete" => Msg::DeleteClicked(number(rest, "delete")?),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

fn number<T: std::str::FromStr>(raw: &str, command: &'static str) -> Result<T, InputError> {
    if raw.is_empty() {
        return Err(InputError::MissingArgument(command));
    }
    raw.parse().map_err(|_| InputError::NotANumber(raw.to_string()))
}
