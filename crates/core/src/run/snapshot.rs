use super::*;
use crate::*;
use serde::{Deserialize, Serialize};

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub human_name: String,
    pub computer_name: String,
    pub human_hand: Vec<Card>,
    /// Hand cards the human may play right now; empty outside an idle human turn.
    pub human_playable: Vec<Card>,
    pub computer_hand: Vec<Card>,
    pub computer_hand_count: usize,
    pub row: Vec<Card>,
    pub stock_count: usize,
    pub discard_count: usize,
    pub human_score_pile: usize,
    pub computer_score_pile: usize,
    pub current: Seat,
    pub phase: Phase,
    pub has_drawn: bool,
    pub turn: u32,
    pub scores: Option<FinalScores>,
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            human_name: self.human.name.clone(),
            computer_name: self.computer.name.clone(),
            human_hand: self.human.hand.clone(),
            human_playable: match self.turn.phase {
                Phase::AwaitingHuman(HumanStep::Idle) => self.playable_cards(Seat::Human),
                _ => Vec::new(),
            },
            computer_hand: self.computer.hand.clone(),
            computer_hand_count: self.computer.hand.len(),
            row: self.row.clone(),
            stock_count: self.deck.stock_count(),
            discard_count: self.deck.discard_count(),
            human_score_pile: self.human.score_pile.len(),
            computer_score_pile: self.computer.score_pile.len(),
            current: self.turn.current,
            phase: self.turn.phase,
            has_drawn: self.turn.has_drawn,
            turn: self.turn.turn,
            scores: self.scores,
        }
    }
}
