use crate::{Card, Deck, FinalScores, Player, RngState, Seat, SessionConfig, TurnState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod effects;
mod intents;
mod setup;
mod snapshot;
mod turn;

pub use snapshot::Snapshot;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TurnError {
    #[error("invalid move: card matches nothing in the center row")]
    IllegalMove,
    #[error("you can only draw one card per turn")]
    AlreadyDrawn,
    #[error("place a card in the center row before doing anything else")]
    MustPlaceFirst,
    #[error("you must draw a card before placing one in the center")]
    NothingToPlace,
    #[error("it is not the {0}'s turn")]
    NotYourTurn(Seat),
    #[error("card {0} is not in hand")]
    CardNotInHand(u32),
    #[error("the game is over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpecialKind {
    Jack,
    Joker,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayOutcome {
    Matched { captured: usize, cleared: bool },
    Special(SpecialKind),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawOutcome {
    Drew(Card),
    DrewAfterReshuffle { card: Card, returned: usize },
    /// Nothing left to draw; the turn passed without a placement.
    Exhausted,
}

/// One session: the single owner of every pile, both players and the turn.
#[derive(Debug, Clone)]
pub struct Game {
    pub config: SessionConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub row: Vec<Card>,
    pub human: Player,
    pub computer: Player,
    pub turn: TurnState,
    pub scores: Option<FinalScores>,
}

impl Game {
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Computer => &self.computer,
        }
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Computer => &mut self.computer,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_game_over(&self) -> bool {
        self.scores.is_some()
    }

    pub fn final_scores(&self) -> Option<FinalScores> {
        self.scores
    }

    /// Every card the game knows about, wherever it sits.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(crate::DECK_SIZE);
        cards.extend_from_slice(&self.deck.draw);
        cards.extend_from_slice(&self.deck.discard);
        cards.extend_from_slice(&self.row);
        for player in [&self.human, &self.computer] {
            cards.extend_from_slice(&player.hand);
            cards.extend_from_slice(&player.score_pile);
        }
        cards
    }
}
