use super::*;
use crate::*;
use tracing::debug;

impl Game {
    fn human_step(&self, seat: Seat) -> Result<HumanStep, TurnError> {
        if self.is_game_over() {
            return Err(TurnError::GameOver);
        }
        match self.turn.phase {
            Phase::GameOver => Err(TurnError::GameOver),
            Phase::AwaitingHuman(step) if seat == Seat::Human => Ok(step),
            _ => Err(TurnError::NotYourTurn(seat)),
        }
    }

    /// Draws one card for the human. Only one draw per turn; afterwards a
    /// card must be placed in the row with [`Game::place_forced`].
    pub fn draw(&mut self, seat: Seat, events: &mut EventBus) -> Result<DrawOutcome, TurnError> {
        let step = self.human_step(seat)?;
        if step == HumanStep::MustPlaceDrawnCard || self.turn.has_drawn {
            return Err(TurnError::AlreadyDrawn);
        }
        match self.draw_into(seat, events) {
            DrawResult::Drawn(card) => {
                self.await_placement();
                Ok(DrawOutcome::Drew(card))
            }
            DrawResult::Reshuffled { card, returned } => {
                self.await_placement();
                Ok(DrawOutcome::DrewAfterReshuffle { card, returned })
            }
            DrawResult::Exhausted => {
                events.push(Event::TurnPassed { seat });
                self.end_turn(events);
                Ok(DrawOutcome::Exhausted)
            }
        }
    }

    fn await_placement(&mut self) {
        self.turn.has_drawn = true;
        self.turn.phase = Phase::AwaitingHuman(HumanStep::MustPlaceDrawnCard);
    }

    /// Plays a hand card: Jacks and Jokers trigger their effect, anything
    /// else must match the row. A card that matches nothing is rejected
    /// and the human tries again.
    pub fn play_card(
        &mut self,
        seat: Seat,
        card_id: u32,
        events: &mut EventBus,
    ) -> Result<PlayOutcome, TurnError> {
        let step = self.human_step(seat)?;
        if step == HumanStep::MustPlaceDrawnCard {
            return Err(TurnError::MustPlaceFirst);
        }
        let card = self
            .player(seat)
            .hand
            .iter()
            .find(|card| card.id == card_id)
            .copied()
            .ok_or(TurnError::CardNotInHand(card_id))?;

        let outcome = if card.is_special() {
            let played = take_card(&mut self.player_mut(seat).hand, card_id)
                .ok_or(TurnError::CardNotInHand(card_id))?;
            if played.is_jack() {
                self.play_jack(seat, played, events);
                PlayOutcome::Special(SpecialKind::Jack)
            } else {
                self.play_joker(seat, played, events);
                PlayOutcome::Special(SpecialKind::Joker)
            }
        } else {
            let player = match seat {
                Seat::Human => &mut self.human,
                Seat::Computer => &mut self.computer,
            };
            match attempt_match(
                &mut self.row,
                &mut player.hand,
                card_id,
                &mut self.deck.discard,
                &mut player.score_pile,
            ) {
                MatchResult::NoMatch => {
                    debug!(%seat, %card, "rejected non-matching card");
                    events.push(Event::IllegalMove { seat, card });
                    return Err(TurnError::IllegalMove);
                }
                MatchResult::Matched { captured, cleared } => {
                    debug!(%seat, %card, captured, cleared, "card matched");
                    events.push(Event::Matched {
                        seat,
                        card,
                        captured,
                        cleared,
                    });
                    PlayOutcome::Matched { captured, cleared }
                }
            }
        };
        self.end_turn(events);
        Ok(outcome)
    }

    /// Places any hand card face up in the row after a draw. Ends the turn.
    pub fn place_forced(
        &mut self,
        seat: Seat,
        card_id: u32,
        events: &mut EventBus,
    ) -> Result<(), TurnError> {
        let step = self.human_step(seat)?;
        if step != HumanStep::MustPlaceDrawnCard {
            return Err(TurnError::NothingToPlace);
        }
        let card = take_card(&mut self.player_mut(seat).hand, card_id)
            .ok_or(TurnError::CardNotInHand(card_id))?;
        debug!(%seat, %card, "card placed in the row");
        self.row.push(card);
        self.turn.has_drawn = false;
        events.push(Event::CardPlaced { seat, card });
        self.end_turn(events);
        Ok(())
    }

    /// Hand cards `seat` could play right now: specials and anything that
    /// matches the row.
    pub fn playable_cards(&self, seat: Seat) -> Vec<Card> {
        self.player(seat)
            .hand
            .iter()
            .filter(|card| card.is_special() || can_match(&self.row, card))
            .copied()
            .collect()
    }
}
