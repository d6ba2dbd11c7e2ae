//! Line-oriented terminal front end.
//!
//! Binds the engine to a reader and a writer: renders the board, turns typed
//! lines into moves, and reports engine events.

use crate::config::PlayConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{
    COMPUTER_NAME, ComputerPlayer, EventReceiver, GameEngine, GameError, GameEvent, Outcome,
    Position,
};
use tracing::{debug, info, instrument};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a marker.
    Move(Position),
    /// Clear the board and start over.
    Restart,
    /// Leave.
    Quit,
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parses a typed line.
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Command::Quit,
            "r" | "restart" => Command::Restart,
            other => Position::parse_input(other)
                .map(Command::Move)
                .unwrap_or(Command::Unknown),
        }
    }
}

/// Terminal session around one engine.
pub struct Terminal<R, W> {
    engine: GameEngine,
    events: EventReceiver,
    config: PlayConfig,
    json_events: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a session. Players are seated when [`Terminal::run`] starts.
    pub fn new(config: PlayConfig, json_events: bool, input: R, output: W) -> Self {
        let computer = match config.seed() {
            Some(seed) => ComputerPlayer::seeded(*seed),
            None => ComputerPlayer::new(),
        };
        let mut engine = GameEngine::with_computer(computer);
        let events = engine.subscribe();
        Self {
            engine,
            events,
            config,
            json_events,
            input,
            output,
        }
    }

    /// The engine driving this session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Plays until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Fails when the configured players are refused by the engine, when the
    /// engine hits an internal invariant violation, or on I/O errors.
    #[instrument(skip(self), fields(player = %self.config.name()))]
    pub fn run(&mut self) -> Result<()> {
        self.seat_players()?;
        self.render()?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                debug!("Input closed");
                return Ok(());
            }

            match Command::parse(&line) {
                Command::Quit => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(());
                }
                Command::Restart => {
                    self.engine.restart();
                    self.seat_players()?;
                    self.render()?;
                }
                Command::Move(position) => {
                    self.submit(position)?;
                }
                Command::Unknown => self.help()?,
            }
        }
    }

    fn seat_players(&mut self) -> Result<()> {
        self.engine
            .initialize_players(
                self.config.name(),
                *self.config.marker(),
                self.config.to_opponent(),
            )
            .context("Could not start the game")?;
        self.drain_events()
    }

    fn submit(&mut self, position: Position) -> Result<()> {
        match self.engine.submit_move(position.to_index()) {
            Ok(outcome) => {
                info!(%position, %outcome, "Move accepted");
                self.drain_events()?;
                self.render()
            }
            Err(GameError::RejectedMove(reason)) => {
                writeln!(self.output, "Can't play {}: {}.", position, reason)?;
                Ok(())
            }
            Err(err) => Err(err).context("Engine failure"),
        }
    }

    fn drain_events(&mut self) -> Result<()> {
        while let Ok(event) = self.events.try_recv() {
            if self.json_events {
                let line = serde_json::to_string(&event).context("Failed to encode event")?;
                writeln!(self.output, "{}", line)?;
                continue;
            }
            match event {
                GameEvent::PlayersReady { first, second } => {
                    writeln!(self.output, "{} vs {}. {} goes first.", first, second, first)?;
                }
                GameEvent::MoveApplied {
                    name,
                    marker,
                    index,
                } if name == COMPUTER_NAME => {
                    let label = Position::from_index(index)
                        .map(|p| p.label())
                        .unwrap_or("?");
                    writeln!(self.output, "{} plays {} at {}.", name, marker, label)?;
                }
                GameEvent::MoveApplied { .. } | GameEvent::Restarted => {}
                GameEvent::OutcomeChanged { outcome } if outcome.is_over() => {
                    writeln!(self.output, "{}", outcome)?;
                }
                GameEvent::OutcomeChanged { .. } => {}
            }
        }
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Type a cell number (1-9) or a name like 'center', 'r' to restart, 'q' to quit."
        )?;
        if self.engine.current_outcome().is_over() {
            return Ok(());
        }
        let open: Vec<&str> = Position::valid_moves(self.engine.board())
            .into_iter()
            .map(|position| position.label())
            .collect();
        writeln!(self.output, "Open cells: {}.", open.join(", "))?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.engine.board().display())?;
        writeln!(self.output)?;

        let outcome = self.engine.current_outcome();
        if outcome != Outcome::InProgress {
            writeln!(self.output, "Game over. 'r' to play again, 'q' to quit.")?;
        } else if let Some(player) = self.engine.current_player() {
            writeln!(
                self.output,
                "{} ({}), your move:",
                player.name(),
                player.marker()
            )?;
        }
        self.output.flush()?;
        Ok(())
    }
}
