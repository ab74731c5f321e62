use super::*;
use crate::*;
use tracing::{debug, warn};

impl Game {
    /// Draws for `seat`, reshuffling the discard pile into an empty stock.
    pub(super) fn draw_into(&mut self, seat: Seat, events: &mut EventBus) -> DrawResult {
        let result = self.deck.draw_or_reshuffle(&mut self.rng);
        if let DrawResult::Reshuffled { returned, .. } = result {
            debug!(returned, "reshuffled discard pile into stock");
            events.push(Event::Reshuffled { returned });
        }
        match result.card() {
            Some(card) => {
                debug!(%seat, %card, "card drawn");
                self.player_mut(seat).hand.push(card);
                events.push(Event::CardDrawn { seat, card });
            }
            None => {
                warn!(%seat, "stock and discard pile are both empty");
                events.push(Event::StockExhausted { seat });
            }
        }
        result
    }

    /// The opponent of whoever played a special card draws one card.
    pub(super) fn force_draw(&mut self, seat: Seat, events: &mut EventBus) {
        let drew = self.draw_into(seat, events).card().is_some();
        events.push(Event::ForcedDraw { seat, drew });
    }

    /// Clears the whole row and the Jack into the discard pile, refills the
    /// row from the stock (no filter, no reshuffle) and makes the opponent draw.
    pub(super) fn play_jack(&mut self, seat: Seat, jack: Card, events: &mut EventBus) {
        let cleared: Vec<Card> = self.row.drain(..).collect();
        let discarded = cleared.len();
        self.deck.discard_cards(cleared);
        self.deck.discard_card(jack);

        while self.row.len() < ROW_SIZE {
            match self.deck.draw_card() {
                Some(card) => self.row.push(card),
                None => break,
            }
        }
        let refilled = self.row.len();
        debug!(%seat, discarded, refilled, "jack cleared the row");
        events.push(Event::JackPlayed {
            seat,
            discarded,
            refilled,
        });
        self.force_draw(seat.opponent(), events);
    }

    pub(super) fn play_joker(&mut self, seat: Seat, joker: Card, events: &mut EventBus) {
        self.deck.discard_card(joker);
        debug!(%seat, "joker played");
        events.push(Event::JokerPlayed { seat });
        self.force_draw(seat.opponent(), events);
    }
}
