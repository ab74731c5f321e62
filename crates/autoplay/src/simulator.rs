use crate::{
    choose_action, AutoAction, AutoplayConfig, AutoplayError, GameRecord, GameStatus, StepRecord,
};
use taboo_core::{Event, EventBus, Game, SessionConfig};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Simulator {
    pub game: Game,
    pub events: EventBus,
    log: Vec<Event>,
}

impl Simulator {
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        let mut events = EventBus::default();
        let game = Game::new(config, seed, &mut events);
        let log = events.drain().collect();
        Self { game, events, log }
    }

    pub fn describe_action(&self, action: &AutoAction) -> String {
        let name = |id: u32| {
            self.game
                .human
                .hand
                .iter()
                .find(|card| card.id == id)
                .map(|card| card.to_string())
                .unwrap_or_else(|| format!("card #{id}"))
        };
        match action {
            AutoAction::Draw => "draw a card".to_string(),
            AutoAction::Play { card } => format!("play {}", name(*card)),
            AutoAction::Place { card } => format!("place {} in the center", name(*card)),
        }
    }

    /// Applies one human-seat action and returns the events it produced,
    /// including the computer's reply.
    pub fn apply_action(&mut self, action: &AutoAction) -> Result<Vec<Event>, AutoplayError> {
        let seat = taboo_core::Seat::Human;
        match action {
            AutoAction::Draw => {
                self.game.draw(seat, &mut self.events)?;
            }
            AutoAction::Play { card } => {
                self.game.play_card(seat, *card, &mut self.events)?;
            }
            AutoAction::Place { card } => {
                self.game.place_forced(seat, *card, &mut self.events)?;
            }
        }
        let produced: Vec<Event> = self.events.drain().collect();
        self.log.extend(produced.iter().cloned());
        Ok(produced)
    }

    pub fn log(&self) -> &[Event] {
        &self.log
    }

    /// Plays until the game ends or `max_turns` is reached.
    pub fn run(
        &mut self,
        max_turns: u32,
        record_steps: bool,
    ) -> Result<GameRecord, AutoplayError> {
        let mut steps = Vec::new();
        let mut step = 0u32;
        let status = loop {
            if self.game.is_game_over() {
                break GameStatus::Finished;
            }
            if self.game.turn.turn > max_turns {
                break GameStatus::TurnLimit;
            }
            let action = choose_action(&self.game).ok_or_else(|| {
                let phase = self.game.turn.phase;
                AutoplayError::InvalidAction(format!("no action in phase {phase:?}"))
            })?;
            let detail = self.describe_action(&action);
            let turn_before = self.game.turn.turn;
            debug!(step, key = %action.stable_key(), "autoplay step");
            let events = self.apply_action(&action)?;
            if record_steps {
                let snapshot = self.game.snapshot();
                steps.push(StepRecord {
                    step,
                    turn_before,
                    action,
                    action_detail: detail,
                    turn_after: snapshot.turn,
                    row_after: snapshot.row.len(),
                    stock_after: snapshot.stock_count,
                    discard_after: snapshot.discard_count,
                    human_hand_after: snapshot.human_hand.len(),
                    computer_hand_after: snapshot.computer_hand_count,
                    events,
                });
            }
            step += 1;
        };
        let record = GameRecord {
            seed: self.game.seed(),
            human_name: self.game.human.name.clone(),
            computer_name: self.game.computer.name.clone(),
            status,
            turns: self.game.turn.turn,
            steps: step,
            scores: self.game.final_scores(),
            event_count: self.log.len(),
            trace: steps,
        };
        info!(seed = record.seed, status = ?record.status, turns = record.turns, "autoplay game done");
        Ok(record)
    }
}

/// Plays one game with `session`'s names; the seed comes from the batch, not the session.
pub fn run_game(
    config: &AutoplayConfig,
    session: &SessionConfig,
    seed: u64,
) -> Result<GameRecord, AutoplayError> {
    let mut sim = Simulator::new(session.clone().with_seed(seed), seed);
    sim.run(config.max_turns, config.record_steps)
}

pub fn run_batch(
    config: &AutoplayConfig,
    session: &SessionConfig,
) -> Result<Vec<GameRecord>, AutoplayError> {
    (0..config.games)
        .map(|index| run_game(config, session, config.game_seed(index)))
        .collect()
}
