use super::command::CommandError;

/// Session options, changed with `set <name> <value>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Print the board after every committed move
    pub show_board: bool,
    /// Print the snapshot after every committed move
    pub show_snapshot: bool,
}

fn parse_flag(name: &str, value: Option<&str>) -> Result<bool, CommandError> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("true" | "1" | "on") => Ok(true),
        Some("false" | "0" | "off") => Ok(false),
        Some(other) => Err(CommandError::InvalidOptionValue {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}

impl CliOptions {
    /// Applies one option; a missing value switches a flag on.
    pub fn apply(&mut self, name: &str, value: Option<&str>) -> Result<(), CommandError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "board" | "showboard" => self.show_board = parse_flag(name, value)?,
            "snapshot" | "showsnapshot" => self.show_snapshot = parse_flag(name, value)?,
            _ => {
                return Err(CommandError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// `option <name> <value>` lines describing the current settings
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("option board {}", self.show_board),
            format!("option snapshot {}", self.show_snapshot),
        ]
    }
}
