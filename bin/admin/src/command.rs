use std::str::FromStr;

use qz_client::TopicId;
use qz_ui::admin::{Answer, Field, form::UnknownField};
use thiserror::Error;

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Set(Field, String),
    Edit(TopicId),
    Submit,
    Delete(TopicId),
    Answer(Answer),
    Show,
    Reload,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a topic id")]
    InvalidId(String),
    #[error(transparent)]
    Field(#[from] UnknownField),
}

pub const HELP: &str = "\
commands:
  list                       show the topic table
  set <field> <value>        type into the form (code, name, description)
  edit <id>                  load a topic into the form
  submit                     add or update the topic in the form
  delete <id>                ask to delete a topic
  yes | no                   answer the open confirmation
  show                       print the form and any open confirmation
  reload                     fetch the topic list again
  quit";

fn parse_id(arg: Option<&str>, command: &'static str) -> Result<TopicId, ParseError> {
    let arg = arg.ok_or(ParseError::MissingArgument(command))?;
    arg.parse()
        .map_err(|_| ParseError::InvalidId(arg.to_string()))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let arg = (!rest.is_empty()).then_some(rest);

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "set" => {
                let arg = arg.ok_or(ParseError::MissingArgument("set"))?;
                let (field, value) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
                Ok(Self::Set(field.parse()?, value.trim().to_string()))
            }
            "edit" => Ok(Self::Edit(parse_id(arg, "edit")?)),
            "submit" => Ok(Self::Submit),
            "delete" | "rm" => Ok(Self::Delete(parse_id(arg, "delete")?)),
            "yes" | "y" => Ok(Self::Answer(Answer::Yes)),
            "no" | "n" => Ok(Self::Answer(Answer::No)),
            "show" => Ok(Self::Show),
            "reload" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}
