use std::fmt;

use crate::board::{Position, PositionError, Snapshot, SnapshotError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Moves(Position),
    Move { from: Position, to: Position },
    Undo(usize),
    Show,
    Snapshot,
    Load(Snapshot),
    Set { name: String, value: Option<String> },
    Quit,
}

/// Error type for unparseable command lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown { command: String },
    MissingArgument { command: &'static str, argument: &'static str },
    InvalidSquare(PositionError),
    InvalidCount { found: String },
    InvalidSnapshot(SnapshotError),
    UnknownOption { name: String },
    InvalidOptionValue { name: String, value: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown { command } => write!(f, "Unknown command '{command}'"),
            CommandError::MissingArgument { command, argument } => {
                write!(f, "'{command}' needs <{argument}>")
            }
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::InvalidCount { found } => {
                write!(f, "Invalid move count '{found}', expected a positive number")
            }
            CommandError::InvalidSnapshot(e) => write!(f, "{e}"),
            CommandError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            CommandError::InvalidOptionValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidSquare(e) => Some(e),
            CommandError::InvalidSnapshot(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PositionError> for CommandError {
    fn from(e: PositionError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

impl From<SnapshotError> for CommandError {
    fn from(e: SnapshotError) -> Self {
        CommandError::InvalidSnapshot(e)
    }
}

fn square(
    parts: &[&str],
    idx: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<Position, CommandError> {
    let text = parts
        .get(idx)
        .ok_or(CommandError::MissingArgument { command, argument })?;
    Ok(text.parse()?)
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&name) = parts.first() else {
        return Ok(None);
    };

    let cmd = match name {
        "new" => Command::New,
        "moves" => Command::Moves(square(&parts, 1, "moves", "square")?),
        "move" => Command::Move {
            from: square(&parts, 1, "move", "from")?,
            to: square(&parts, 2, "move", "to")?,
        },
        "undo" => {
            let plies = match parts.get(1) {
                None => 1,
                Some(text) => text
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| CommandError::InvalidCount {
                        found: (*text).to_string(),
                    })?,
            };
            Command::Undo(plies)
        }
        "show" => Command::Show,
        "snapshot" => Command::Snapshot,
        "load" => {
            if parts.len() < 2 {
                return Err(CommandError::MissingArgument {
                    command: "load",
                    argument: "cells",
                });
            }
            Command::Load(parts[1..].join(" ").parse()?)
        }
        "set" => {
            let name = parts.get(1).ok_or(CommandError::MissingArgument {
                command: "set",
                argument: "name",
            })?;
            let value = (parts.len() > 2).then(|| parts[2..].join(" "));
            Command::Set {
                name: (*name).to_string(),
                value,
            }
        }
        "quit" => Command::Quit,
        other => {
            return Err(CommandError::Unknown {
                command: other.to_string(),
            })
        }
    };

    Ok(Some(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_move_commands() {
        assert_eq!(
            parse_command("move e2 e4"),
            Ok(Some(Command::Move {
                from: sq("e2"),
                to: sq("e4")
            }))
        );
        assert_eq!(parse_command("moves g1"), Ok(Some(Command::Moves(sq("g1")))));
        assert_eq!(
            parse_command("move e2"),
            Err(CommandError::MissingArgument {
                command: "move",
                argument: "to"
            })
        );
        assert!(matches!(
            parse_command("move e9 e4"),
            Err(CommandError::InvalidSquare(_))
        ));
    }

    #[test]
    fn test_undo_count() {
        assert_eq!(parse_command("undo"), Ok(Some(Command::Undo(1))));
        assert_eq!(parse_command("undo 3"), Ok(Some(Command::Undo(3))));
        assert_eq!(
            parse_command("undo 0"),
            Err(CommandError::InvalidCount {
                found: "0".to_string()
            })
        );
    }

    #[test]
    fn test_set_and_unknown() {
        assert_eq!(
            parse_command("set board true"),
            Ok(Some(Command::Set {
                name: "board".to_string(),
                value: Some("true".to_string())
            }))
        );
        assert_eq!(
            parse_command("castle"),
            Err(CommandError::Unknown {
                command: "castle".to_string()
            })
        );
    }

    #[test]
    fn test_load_needs_side_to_move() {
        let cells = "x".repeat(64);
        assert_eq!(
            parse_command(&format!("load {cells}")),
            Err(CommandError::InvalidSnapshot(SnapshotError::MissingSideToMove))
        );
    }
}
