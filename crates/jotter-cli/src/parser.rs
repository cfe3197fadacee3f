//! Builds use-case messages from REPL lines.
//!
//! A line is a `;`-separated token list with each token trimmed:
//!
//! ```text
//! CREATE;<name>;<content>
//! READ;<id>
//! READALL
//! UPDATE;<id>;<name>;<content>     empty name/content = unchanged
//! DELETE;<id>
//! ```
//!
//! Token 0 is the command keyword and is consumed by the REPL loop; the
//! [`FromRepl`] impls only look at the arguments after it.

use std::str::FromStr;

use jotter_core::{CreateMessage, DeleteMessage, ReadAllMessage, ReadMessage, UpdateMessage};
use jotter_store::{NoteChanges, NoteId};

use crate::error::ReplError;

/// Split a line on `;` and trim every token.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(';').map(|token| token.trim().to_owned()).collect()
}

/// The command keyword in token 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Create,
    Read,
    ReadAll,
    Update,
    Delete,
}

impl FromStr for ReplCommand {
    type Err = ReplError;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword {
            "CREATE" => Ok(Self::Create),
            "READ" => Ok(Self::Read),
            "READALL" => Ok(Self::ReadAll),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(ReplError::UnknownCommand(other.to_owned())),
        }
    }
}

/// Conversion from a tokenized REPL line.
pub trait FromRepl: Sized {
    fn from_repl(tokens: &[String]) -> Result<Self, ReplError>;
}

impl FromRepl for ReadAllMessage {
    fn from_repl(_tokens: &[String]) -> Result<Self, ReplError> {
        Ok(Self)
    }
}

impl FromRepl for ReadMessage {
    fn from_repl(tokens: &[String]) -> Result<Self, ReplError> {
        Ok(Self {
            id: id_arg(tokens, "READ")?,
        })
    }
}

impl FromRepl for CreateMessage {
    fn from_repl(tokens: &[String]) -> Result<Self, ReplError> {
        Ok(Self {
            name: required(tokens, 1, "CREATE", "name")?.to_owned(),
            content: required(tokens, 2, "CREATE", "content")?.to_owned(),
        })
    }
}

impl FromRepl for UpdateMessage {
    fn from_repl(tokens: &[String]) -> Result<Self, ReplError> {
        let id = id_arg(tokens, "UPDATE")?;
        let name = optional(tokens, 2);
        let content = optional(tokens, 3);
        Ok(Self {
            id,
            changes: NoteChanges::from_fields(name, content),
        })
    }
}

impl FromRepl for DeleteMessage {
    fn from_repl(tokens: &[String]) -> Result<Self, ReplError> {
        Ok(Self {
            id: id_arg(tokens, "DELETE")?,
        })
    }
}

fn required<'a>(
    tokens: &'a [String],
    index: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ReplError> {
    tokens
        .get(index)
        .map(String::as_str)
        .ok_or(ReplError::MissingArgument { command, argument })
}

// A trailing token that was left off reads the same as an empty one.
fn optional(tokens: &[String], index: usize) -> &str {
    tokens.get(index).map(String::as_str).unwrap_or_default()
}

fn id_arg(tokens: &[String], command: &'static str) -> Result<NoteId, ReplError> {
    let raw = required(tokens, 1, command, "id")?;
    if raw.is_empty() {
        return Err(ReplError::MissingArgument {
            command,
            argument: "id",
        });
    }
    raw.parse()
        .map_err(|_| ReplError::InvalidId(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_and_trims() {
        assert_eq!(
            tokenize("  CREATE ; foo ;bar baz \n"),
            vec!["CREATE", "foo", "bar baz"]
        );
        assert_eq!(tokenize("READALL"), vec!["READALL"]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!("READALL".parse::<ReplCommand>().unwrap(), ReplCommand::ReadAll);
        assert!(matches!(
            "read".parse::<ReplCommand>(),
            Err(ReplError::UnknownCommand(keyword)) if keyword == "read"
        ));
    }

    #[test]
    fn create_takes_name_and_content_verbatim() {
        let message = CreateMessage::from_repl(&tokenize("CREATE;foo;bar")).unwrap();
        assert_eq!(message.name, "foo");
        assert_eq!(message.content, "bar");
    }

    #[test]
    fn create_without_content_is_missing_argument() {
        assert!(matches!(
            CreateMessage::from_repl(&tokenize("CREATE;foo")),
            Err(ReplError::MissingArgument {
                command: "CREATE",
                argument: "content"
            })
        ));
    }

    #[test]
    fn read_with_non_numeric_id_is_invalid() {
        assert!(matches!(
            ReadMessage::from_repl(&tokenize("READ;notanumber")),
            Err(ReplError::InvalidId(raw)) if raw == "notanumber"
        ));
    }

    #[test]
    fn delete_parses_its_id() {
        assert_eq!(
            DeleteMessage::from_repl(&tokenize("DELETE; 4")).unwrap(),
            DeleteMessage { id: 4 }
        );
        assert!(matches!(
            DeleteMessage::from_repl(&tokenize("DELETE")),
            Err(ReplError::MissingArgument { argument: "id", .. })
        ));
    }

    #[test]
    fn update_with_empty_and_missing_fields() {
        let message = UpdateMessage::from_repl(&tokenize("UPDATE;1;;C")).unwrap();
        assert_eq!(message.id, 1);
        assert_eq!(message.changes, NoteChanges::from_fields("", "C"));

        let message = UpdateMessage::from_repl(&tokenize("UPDATE;2;renamed")).unwrap();
        assert_eq!(message.changes, NoteChanges::from_fields("renamed", ""));
    }
}
