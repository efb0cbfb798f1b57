//! Line-oriented text protocol for playing a game from a terminal or a
//! driving process.
//!
//! One command per input line; every reply line is either an event, a query
//! answer or `error: <message>`.

use std::io::{self, BufRead, Write};

use crate::board::{Position, SpecialMove};
use crate::game::{Game, GameError, GameEvent, SharedGame};

pub mod command;
pub mod options;

pub use command::{parse_command, Command, CommandError};
pub use options::CliOptions;

/// A game plus the options of the session driving it.
pub struct Session {
    game: SharedGame,
    options: CliOptions,
}

/// What the loop should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(Vec<String>),
    Quit,
}

impl Session {
    /// Starts setting up the game in the background.
    #[must_use]
    pub fn new() -> Self {
        Session {
            game: SharedGame::initialize(),
            options: CliOptions::default(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &CliOptions {
        &self.options
    }

    /// Parses and executes one input line.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        match parse_command(line) {
            Ok(None) => Flow::Continue(Vec::new()),
            Ok(Some(Command::Quit)) => Flow::Quit,
            Ok(Some(cmd)) => Flow::Continue(self.execute(cmd)),
            Err(e) => {
                log::warn!("rejected input '{}': {e}", line.trim());
                Flow::Continue(vec![format!("error: {e}")])
            }
        }
    }

    fn execute(&mut self, cmd: Command) -> Vec<String> {
        match cmd {
            Command::New => {
                self.game.replace(Game::new());
                self.status()
            }
            Command::Moves(pos) => vec![self.describe_moves(pos)],
            Command::Move { from, to } => match self.game.with(|game| game.play(from, to)) {
                Ok(report) => {
                    let mut lines: Vec<String> =
                        report.events.iter().map(GameEvent::to_string).collect();
                    lines.extend(self.after_move());
                    lines
                }
                Err(e) => reject(&e),
            },
            Command::Undo(plies) => match self.game.with(|game| game.rollback(plies)) {
                Ok(report) => {
                    let mut lines = vec![format!("undone {}", report.undone.join(" "))];
                    lines.extend(report.events.iter().map(GameEvent::to_string));
                    lines
                }
                Err(e) => reject(&e),
            },
            Command::Show => {
                let mut lines: Vec<String> = self
                    .game
                    .with(|game| game.board().to_string())
                    .lines()
                    .map(str::to_string)
                    .collect();
                lines.extend(self.status());
                lines
            }
            Command::Snapshot => vec![self.game.with(|game| game.snapshot().to_string())],
            Command::Load(snapshot) => match Game::from_snapshot(&snapshot) {
                Ok(game) => {
                    self.game.replace(game);
                    self.status()
                }
                Err(e) => reject(&e),
            },
            Command::Set { name, value } => match self.options.apply(&name, value.as_deref()) {
                Ok(()) => self.options.describe(),
                Err(e) => {
                    log::warn!("rejected option: {e}");
                    vec![format!("error: {e}")]
                }
            },
            Command::Quit => Vec::new(),
        }
    }

    /// `moves <sq>: <dest...>` with ordinary and special destinations in
    /// square order.
    fn describe_moves(&self, pos: Position) -> String {
        let mut targets: Vec<Position> = self.game.with(|game| {
            game.possible_moves(pos)
                .iter()
                .copied()
                .chain(game.special_moves(pos).iter().map(|mv: &SpecialMove| mv.to))
                .collect()
        });
        targets.sort_by_key(|p| p.index());
        targets.dedup();

        let mut line = format!("moves {pos}:");
        for target in targets {
            line.push(' ');
            line.push_str(&target.to_string());
        }
        line
    }

    fn status(&self) -> Vec<String> {
        self.game.with(|game| {
            vec![
                GameEvent::NextPlayer(game.next_player()).to_string(),
                GameEvent::StateChanged(game.state()).to_string(),
            ]
        })
    }

    fn after_move(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.options.show_board {
            let board = self.game.with(|game| game.board().to_string());
            lines.extend(board.lines().map(str::to_string));
        }
        if self.options.show_snapshot {
            lines.push(self.game.with(|game| game.snapshot().to_string()));
        }
        lines
    }
}

fn reject(e: &GameError) -> Vec<String> {
    log::warn!("rejected command: {e}");
    vec![format!("error: {e}")]
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// Runs the protocol until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<()> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        match session.handle_line(&line) {
            Flow::Continue(lines) => {
                for reply in lines {
                    writeln!(output, "{reply}")?;
                }
            }
            Flow::Quit => break,
        }
        output.flush()?;
    }
    Ok(())
}

/// Runs the protocol on stdin and stdout.
pub fn run_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout)
}
