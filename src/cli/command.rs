//! Parsing of prompt lines into commands.

use crate::error::{CommandError, CommandResult};
use std::path::PathBuf;

/// A phone replacement requested by `change <name> phone=OLD,NEW`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEdit {
    pub old: String,
    pub new: String,
}

/// One parsed prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phones: Vec<String>,
        birthday: Option<String>,
    },
    Change {
        name: String,
        phone_edits: Vec<PhoneEdit>,
        birthday: Option<String>,
    },
    Phone {
        name: String,
    },
    Birthday {
        name: String,
    },
    Delete {
        name: String,
    },
    Search {
        term: String,
    },
    Show,
    Pages {
        size: Option<usize>,
    },
    Save {
        path: PathBuf,
    },
    Load {
        path: PathBuf,
    },
    Exit,
}

impl Command {
    /// Parse a non-empty prompt line.
    ///
    /// The command word is case-insensitive; names, terms and paths are kept
    /// as typed.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "hello" => Ok(Self::Hello),
            "add" => Self::parse_add(rest),
            "change" => Self::parse_change(rest),
            "phone" => Ok(Self::Phone {
                name: required(rest, "contact name")?,
            }),
            "birthday" => Ok(Self::Birthday {
                name: required(rest, "contact name")?,
            }),
            "delete" => Ok(Self::Delete {
                name: required(rest, "contact name")?,
            }),
            "search" => Ok(Self::Search {
                term: required(rest, "search term")?,
            }),
            "show" => match rest.to_lowercase().as_str() {
                "" | "all" => Ok(Self::Show),
                other => Err(CommandError::InvalidArgument(format!(
                    "show accepts only 'all', got '{}'",
                    other
                ))),
            },
            "pages" => Self::parse_pages(rest),
            "save" => Ok(Self::Save {
                path: PathBuf::from(required(rest, "file name")?),
            }),
            "load" => Ok(Self::Load {
                path: PathBuf::from(required(rest, "file name")?),
            }),
            "exit" | "close" | "quit" => Ok(Self::Exit),
            _ => Err(CommandError::UnknownCommand(keyword.to_string())),
        }
    }

    fn parse_add(rest: &str) -> CommandResult<Self> {
        let mut words = rest.split_whitespace();
        let name = words
            .next()
            .ok_or(CommandError::MissingArgument("contact name"))?
            .to_string();

        let mut phones = Vec::new();
        let mut birthday = None;
        for word in words {
            if let Some(phone) = word.strip_prefix("phone=") {
                phones.push(phone.to_string());
            } else if let Some(date) = word.strip_prefix("birthday=") {
                birthday = Some(date.to_string());
            } else {
                return Err(CommandError::InvalidArgument(word.to_string()));
            }
        }

        Ok(Self::Add {
            name,
            phones,
            birthday,
        })
    }

    fn parse_change(rest: &str) -> CommandResult<Self> {
        let mut words = rest.split_whitespace();
        let name = words
            .next()
            .ok_or(CommandError::MissingArgument("contact name"))?
            .to_string();

        let mut phone_edits = Vec::new();
        let mut birthday = None;
        for word in words {
            if let Some(pair) = word.strip_prefix("phone=") {
                let (old, new) = pair.split_once(',').ok_or_else(|| {
                    CommandError::InvalidArgument(format!("expected phone=OLD,NEW, got '{}'", word))
                })?;
                phone_edits.push(PhoneEdit {
                    old: old.to_string(),
                    new: new.to_string(),
                });
            } else if let Some(date) = word.strip_prefix("birthday=") {
                birthday = Some(date.to_string());
            } else {
                return Err(CommandError::InvalidArgument(word.to_string()));
            }
        }

        if phone_edits.is_empty() && birthday.is_none() {
            return Err(CommandError::MissingArgument("phone=OLD,NEW"));
        }

        Ok(Self::Change {
            name,
            phone_edits,
            birthday,
        })
    }

    fn parse_pages(rest: &str) -> CommandResult<Self> {
        if rest.is_empty() {
            return Ok(Self::Pages { size: None });
        }
        let size = rest
            .parse::<usize>()
            .map_err(|_| CommandError::InvalidArgument(format!("invalid page size '{}'", rest)))?;
        Ok(Self::Pages { size: Some(size) })
    }
}

fn required(rest: &str, what: &'static str) -> CommandResult<String> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(what))
    } else {
        Ok(rest.to_string())
    }
}
