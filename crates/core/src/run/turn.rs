use super::*;
use crate::*;
use tracing::{debug, info};

impl Game {
    /// Closes the current turn and hands control over. The computer's turn
    /// runs to completion here, so this returns with the human to act or the
    /// game finished.
    pub(super) fn end_turn(&mut self, events: &mut EventBus) {
        loop {
            if self.check_game_over(events) {
                return;
            }
            let next = self.turn.current.opponent();
            self.turn.current = next;
            self.turn.has_drawn = false;
            self.turn.turn += 1;
            events.push(Event::TurnStarted {
                seat: next,
                turn: self.turn.turn,
            });
            match next {
                Seat::Human => {
                    self.turn.phase = Phase::AwaitingHuman(HumanStep::Idle);
                    return;
                }
                Seat::Computer => {
                    self.turn.phase = Phase::ComputerTurn;
                    self.play_computer_turn(events);
                }
            }
        }
    }

    fn play_computer_turn(&mut self, events: &mut EventBus) {
        let seat = Seat::Computer;
        let chosen = play_automated_move(&mut self.computer, &mut self.row, &mut self.deck);
        debug!(?chosen, "computer move");
        match chosen {
            ComputerMove::Matched {
                card,
                captured,
                cleared,
            } => events.push(Event::Matched {
                seat,
                card,
                captured,
                cleared,
            }),
            ComputerMove::DrewAndMatched {
                card,
                captured,
                cleared,
            } => {
                events.push(Event::CardDrawn { seat, card });
                events.push(Event::Matched {
                    seat,
                    card,
                    captured,
                    cleared,
                });
            }
            ComputerMove::DrewAndPlaced { card } => {
                events.push(Event::CardDrawn { seat, card });
                events.push(Event::CardPlaced { seat, card });
            }
            ComputerMove::NoAction => {
                if self.draw_into(seat, events).card().is_none() {
                    events.push(Event::TurnPassed { seat });
                }
            }
        }
    }

    fn check_game_over(&mut self, events: &mut EventBus) -> bool {
        if self.scores.is_some() {
            return true;
        }
        if !self.human.hand.is_empty() && !self.computer.hand.is_empty() {
            return false;
        }
        let scores = score_game(&self.human, &self.computer);
        self.human.score = Some(scores.human);
        self.computer.score = Some(scores.computer);
        self.scores = Some(scores);
        self.turn.phase = Phase::GameOver;
        self.turn.has_drawn = false;
        info!(
            human = scores.human,
            computer = scores.computer,
            finisher = %scores.finisher,
            outcome = ?scores.outcome,
            "game over"
        );
        events.push(Event::GameOver { scores });
        true
    }
}
