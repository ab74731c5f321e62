use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    /// The thirteen suited ranks, in deck-building order.
    pub const SUITED: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Matching value of the rank. Jack and Joker are 0 and never match.
    pub fn value(self) -> i64 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Queen => 11,
            Self::King => 12,
            Self::Jack | Self::Joker => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
            Self::Joker => "Joker",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        match text.to_ascii_lowercase().as_str() {
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            "4" => Some(Self::Four),
            "5" => Some(Self::Five),
            "6" => Some(Self::Six),
            "7" => Some(Self::Seven),
            "8" => Some(Self::Eight),
            "9" => Some(Self::Nine),
            "10" => Some(Self::Ten),
            "j" | "jack" => Some(Self::Jack),
            "q" | "queen" => Some(Self::Queen),
            "k" | "king" => Some(Self::King),
            "a" | "ace" => Some(Self::Ace),
            "joker" => Some(Self::Joker),
            _ => None,
        }
    }

    pub fn is_special(self) -> bool {
        matches!(self, Self::Jack | Self::Joker)
    }
}

/// Value of a rank given as text; anything unrecognised counts as 0.
pub fn rank_value_from_text(text: &str) -> i64 {
    Rank::parse(text).map(Rank::value).unwrap_or(0)
}

/// A physical card. `id` is unique within one game and is what removal keys on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: u32,
    pub rank: Rank,
    #[serde(default)]
    pub suit: Option<Suit>,
}

impl Card {
    pub fn suited(id: u32, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit: Some(suit),
        }
    }

    pub fn joker(id: u32) -> Self {
        Self {
            id,
            rank: Rank::Joker,
            suit: None,
        }
    }

    pub fn value(&self) -> i64 {
        self.rank.value()
    }

    pub fn is_special(&self) -> bool {
        self.rank.is_special()
    }

    pub fn is_jack(&self) -> bool {
        self.rank == Rank::Jack
    }

    pub fn is_joker(&self) -> bool {
        self.rank == Rank::Joker
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{} of {}", self.rank.label(), suit.name()),
            None => f.write_str(self.rank.label()),
        }
    }
}

pub fn sum_values(cards: &[Card]) -> i64 {
    cards.iter().map(Card::value).sum()
}

/// Removes the card with `id` from `cards`, keeping the order of the rest.
pub fn take_card(cards: &mut Vec<Card>, id: u32) -> Option<Card> {
    let index = cards.iter().position(|card| card.id == id)?;
    Some(cards.remove(index))
}
