use crate::command::{parse_command, Command, HELP};
use crate::view::{prompt_hint, render_result, render_table};
use anyhow::Result;
use std::io::{BufRead, Write};
use taboo_core::{DrawOutcome, Event, EventBus, Game, Seat, TurnError};
use tracing::debug;

/// Why a shell command did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Turn(TurnError),
    NoCardAt(usize),
}

impl From<TurnError> for Rejection {
    fn from(err: TurnError) -> Self {
        Self::Turn(err)
    }
}

pub struct Shell {
    game: Game,
    events: EventBus,
}

impl Shell {
    /// Takes a freshly dealt game together with the events its setup emitted.
    pub fn new(game: Game, events: EventBus) -> Self {
        Self { game, events }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(out, "seed: {}", self.game.seed())?;
        self.flush_log(out)?;
        writeln!(out, "{}", render_table(&self.game.snapshot()))?;
        writeln!(out, "type 'help' for commands")?;
        let mut line = String::new();
        loop {
            if self.print_result_if_over(out)? {
                return Ok(());
            }
            write!(out, "[{}] > ", prompt_hint(&self.game.snapshot()))?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            debug!(?command, "shell command");
            match command {
                Command::Quit => return Ok(()),
                Command::Help => writeln!(out, "{HELP}")?,
                Command::State => writeln!(out, "{}", render_table(&self.game.snapshot()))?,
                Command::Draw => {
                    let result = self
                        .game
                        .draw(Seat::Human, &mut self.events)
                        .map(|outcome| match outcome {
                            DrawOutcome::Exhausted => Some("nothing left to draw"),
                            _ => None,
                        })
                        .map_err(Rejection::from);
                    self.report(out, result)?;
                }
                Command::Play(position) => {
                    let result = self.card_at(position).and_then(|id| {
                        self.game
                            .play_card(Seat::Human, id, &mut self.events)
                            .map(|_| None)
                            .map_err(Rejection::from)
                    });
                    self.report(out, result)?;
                }
                Command::Place(position) => {
                    let result = self.card_at(position).and_then(|id| {
                        self.game
                            .place_forced(Seat::Human, id, &mut self.events)
                            .map(|_| None)
                            .map_err(Rejection::from)
                    });
                    self.report(out, result)?;
                }
            }
        }
    }

    fn card_at(&self, position: usize) -> Result<u32, Rejection> {
        position
            .checked_sub(1)
            .and_then(|index| self.game.human.hand.get(index))
            .map(|card| card.id)
            .ok_or(Rejection::NoCardAt(position))
    }

    fn report<W: Write>(
        &mut self,
        out: &mut W,
        result: Result<Option<&'static str>, Rejection>,
    ) -> Result<()> {
        self.flush_log(out)?;
        match result {
            Ok(note) => {
                if let Some(note) = note {
                    writeln!(out, "{note}")?;
                }
                if !self.game.is_game_over() {
                    writeln!(out, "{}", render_table(&self.game.snapshot()))?;
                }
            }
            Err(Rejection::NoCardAt(position)) => {
                writeln!(out, "no card at hand position {position}")?;
            }
            Err(Rejection::Turn(err)) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    fn flush_log<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let human = self.game.human.name.clone();
        let computer = self.game.computer.name.clone();
        for event in self.events.drain() {
            // the final result is printed once, by print_result_if_over
            if matches!(event, Event::GameOver { .. }) {
                continue;
            }
            writeln!(out, "  {}", event.describe(&human, &computer))?;
        }
        Ok(())
    }

    fn print_result_if_over<W: Write>(&self, out: &mut W) -> Result<bool> {
        let Some(scores) = self.game.final_scores() else {
            return Ok(false);
        };
        writeln!(
            out,
            "{}",
            render_result(&scores, &self.game.human.name, &self.game.computer.name)
        )?;
        Ok(true)
    }
}
