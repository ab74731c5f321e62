use crate::{Card, FinalScores, Seat};
use serde::{Deserialize, Serialize};

/// Game log entries, in the order things happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    GameStarted {
        seed: u64,
        row: Vec<Card>,
    },
    TurnStarted {
        seat: Seat,
        turn: u32,
    },
    CardDrawn {
        seat: Seat,
        card: Card,
    },
    Reshuffled {
        returned: usize,
    },
    StockExhausted {
        seat: Seat,
    },
    Matched {
        seat: Seat,
        card: Card,
        captured: usize,
        cleared: bool,
    },
    IllegalMove {
        seat: Seat,
        card: Card,
    },
    JackPlayed {
        seat: Seat,
        discarded: usize,
        refilled: usize,
    },
    JokerPlayed {
        seat: Seat,
    },
    ForcedDraw {
        seat: Seat,
        drew: bool,
    },
    CardPlaced {
        seat: Seat,
        card: Card,
    },
    TurnPassed {
        seat: Seat,
    },
    GameOver {
        scores: FinalScores,
    },
}

impl Event {
    /// One log line, phrased for the human at the table. The computer's
    /// drawn cards stay hidden.
    pub fn describe(&self, human: &str, computer: &str) -> String {
        let name = |seat: &Seat| match seat {
            Seat::Human => human,
            Seat::Computer => computer,
        };
        match self {
            Self::GameStarted { row, .. } => {
                format!("Game started! {} cards face up in the center.", row.len())
            }
            Self::TurnStarted { seat: Seat::Human, .. } => "It's your turn!".to_string(),
            Self::TurnStarted { seat, .. } => format!("{}'s turn.", name(seat)),
            Self::CardDrawn { seat: Seat::Human, card } => format!("{human} drew {card}."),
            Self::CardDrawn { seat, .. } => format!("{} drew a card.", name(seat)),
            Self::Reshuffled { returned } => {
                format!("Stock pile is empty. Reshuffled {returned} discarded cards.")
            }
            Self::StockExhausted { seat } => {
                format!("Stock and discard piles are empty; {} cannot draw.", name(seat))
            }
            Self::Matched {
                seat,
                card,
                captured,
                cleared,
            } => {
                let mut line = format!("{} played {card}, taking {captured} cards.", name(seat));
                if *cleared {
                    line.push_str(" Cleared center row! Gaining points.");
                }
                line
            }
            Self::IllegalMove { .. } => "Invalid move! Try again.".to_string(),
            Self::JackPlayed {
                seat,
                discarded,
                refilled,
            } => format!(
                "{} played a Jack! Cleared {discarded} face-up cards, dealt {refilled} new ones.",
                name(seat)
            ),
            Self::JokerPlayed { seat } => {
                format!("{} played a Joker! Opponent draws a card.", name(seat))
            }
            Self::ForcedDraw { seat, drew: true } => format!("{} is forced to draw.", name(seat)),
            Self::ForcedDraw { seat, drew: false } => {
                format!("{} is forced to draw, but nothing is left.", name(seat))
            }
            Self::CardPlaced { seat, card } => {
                format!("{} placed {card} in the center.", name(seat))
            }
            Self::TurnPassed { seat } => format!("{} passes.", name(seat)),
            Self::GameOver { scores } => {
                let verdict = match scores.outcome {
                    crate::Outcome::HumanWins => format!("{human} wins!"),
                    crate::Outcome::ComputerWins => format!("{computer} wins!"),
                    crate::Outcome::Draw => "It's a draw!".to_string(),
                };
                format!(
                    "{} finished all cards! Final Scores: {human}: {} {computer}: {}. {verdict}",
                    name(&scores.finisher),
                    scores.human,
                    scores.computer
                )
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.queue.iter()
    }
}
