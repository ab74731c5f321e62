use super::*;
use crate::*;
use tracing::info;

impl Game {
    /// Builds and shuffles the deck, deals five cards each and seeds a
    /// four-card row with no Jacks or Jokers. The human moves first.
    pub fn new(config: SessionConfig, seed: u64, events: &mut EventBus) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard54();
        deck.shuffle(&mut rng);
        let mut game = Self {
            human: Player::new(config.human_name.clone(), Seat::Human),
            computer: Player::new(config.computer_name.clone(), Seat::Computer),
            config,
            rng,
            deck,
            row: Vec::with_capacity(ROW_SIZE),
            turn: TurnState::new(),
            scores: None,
        };
        game.deal_hands();
        game.seed_row();
        info!(seed, stock = game.deck.stock_count(), "game started");
        events.push(Event::GameStarted {
            seed,
            row: game.row.clone(),
        });
        events.push(Event::TurnStarted {
            seat: Seat::Human,
            turn: game.turn.turn,
        });
        game
    }

    /// Uses the configured seed, or fresh entropy when there is none.
    pub fn from_config(config: SessionConfig, events: &mut EventBus) -> Self {
        let seed = config
            .seed
            .unwrap_or_else(|| RngState::from_entropy().seed());
        Self::new(config, seed, events)
    }

    fn deal_hands(&mut self) {
        for _ in 0..HAND_SIZE {
            for seat in [Seat::Human, Seat::Computer] {
                if let Some(card) = self.deck.draw_card() {
                    self.player_mut(seat).hand.push(card);
                }
            }
        }
    }

    // Skipped specials go to the discard pile so no card leaves the game.
    fn seed_row(&mut self) {
        while self.row.len() < ROW_SIZE {
            let Some(card) = self.deck.draw_card() else {
                break;
            };
            if card.is_special() {
                self.deck.discard_card(card);
            } else {
                self.row.push(card);
            }
        }
    }
}
