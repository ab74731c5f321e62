use crate::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    pub fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    pub fn is_computer(self) -> bool {
        self == Self::Computer
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Computer => "computer",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HumanStep {
    Idle,
    MustPlaceDrawnCard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman(HumanStep),
    ComputerTurn,
    GameOver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub score_pile: Vec<Card>,
    #[serde(default)]
    pub score: Option<i64>,
}

impl Player {
    pub fn new(name: impl Into<String>, seat: Seat) -> Self {
        Self {
            name: name.into(),
            seat,
            hand: Vec::new(),
            score_pile: Vec::new(),
            score: None,
        }
    }

    pub fn is_computer(&self) -> bool {
        self.seat.is_computer()
    }

    pub fn holds(&self, id: u32) -> bool {
        self.hand.iter().any(|card| card.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnState {
    pub current: Seat,
    pub phase: Phase,
    pub has_drawn: bool,
    pub turn: u32,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            current: Seat::Human,
            phase: Phase::AwaitingHuman(HumanStep::Idle),
            has_drawn: false,
            turn: 1,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
