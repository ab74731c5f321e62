use crate::{Card, Rank, RngState, Suit, DECK_SIZE};
use serde::{Deserialize, Serialize};

/// Stock (`draw`) and discard pile. The top of each pile is the end of its `Vec`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawResult {
    Drawn(Card),
    /// The stock was empty; `returned` discard cards were shuffled back first.
    Reshuffled { card: Card, returned: usize },
    /// Stock and discard pile are both empty.
    Exhausted,
}

impl DrawResult {
    pub fn card(&self) -> Option<Card> {
        match self {
            Self::Drawn(card) | Self::Reshuffled { card, .. } => Some(*card),
            Self::Exhausted => None,
        }
    }
}

impl Deck {
    /// 52 suited cards plus two Jokers, unshuffled, ids 1..=54.
    pub fn standard54() -> Self {
        let mut draw = Vec::with_capacity(DECK_SIZE);
        let mut next_id = 1u32;
        for suit in Suit::ALL {
            for rank in Rank::SUITED {
                draw.push(Card::suited(next_id, rank, suit));
                next_id += 1;
            }
        }
        draw.push(Card::joker(next_id));
        draw.push(Card::joker(next_id + 1));
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    /// Pops the top of the stock. `None` means the stock is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    pub fn discard_card(&mut self, card: Card) {
        self.discard.push(card);
    }

    pub fn discard_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Moves the whole discard pile onto the stock and shuffles it.
    /// Returns how many cards came back; zero when the discard pile was empty.
    pub fn reshuffle_discard(&mut self, rng: &mut RngState) -> usize {
        if self.discard.is_empty() {
            return 0;
        }
        let returned = self.discard.len();
        while let Some(card) = self.discard.pop() {
            self.draw.push(card);
        }
        self.shuffle(rng);
        returned
    }

    pub fn draw_or_reshuffle(&mut self, rng: &mut RngState) -> DrawResult {
        if let Some(card) = self.draw_card() {
            return DrawResult::Drawn(card);
        }
        let returned = self.reshuffle_discard(rng);
        match self.draw_card() {
            Some(card) => DrawResult::Reshuffled { card, returned },
            None => DrawResult::Exhausted,
        }
    }

    pub fn stock_count(&self) -> usize {
        self.draw.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }
}
