use crate::{attempt_match, take_card, Card, Deck, MatchResult, Player};
use serde::{Deserialize, Serialize};

/// What the computer did with its turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ComputerMove {
    Matched {
        card: Card,
        captured: usize,
        cleared: bool,
    },
    DrewAndMatched {
        card: Card,
        captured: usize,
        cleared: bool,
    },
    DrewAndPlaced {
        card: Card,
    },
    /// No hand card matched and the stock was empty.
    NoAction,
}

/// Greedy move: the first hand card that matches, otherwise draw one card
/// from the stock and either match it or place it in the row. Never plays
/// Jacks or Jokers and never reshuffles.
pub fn play_automated_move(
    player: &mut Player,
    row: &mut Vec<Card>,
    deck: &mut Deck,
) -> ComputerMove {
    let order: Vec<Card> = player.hand.clone();
    for card in order {
        if let MatchResult::Matched { captured, cleared } = attempt_match(
            row,
            &mut player.hand,
            card.id,
            &mut deck.discard,
            &mut player.score_pile,
        ) {
            return ComputerMove::Matched {
                card,
                captured,
                cleared,
            };
        }
    }

    let Some(drawn) = deck.draw_card() else {
        return ComputerMove::NoAction;
    };
    player.hand.push(drawn);
    match attempt_match(
        row,
        &mut player.hand,
        drawn.id,
        &mut deck.discard,
        &mut player.score_pile,
    ) {
        MatchResult::Matched { captured, cleared } => ComputerMove::DrewAndMatched {
            card: drawn,
            captured,
            cleared,
        },
        MatchResult::NoMatch => {
            if let Some(card) = take_card(&mut player.hand, drawn.id) {
                row.push(card);
            }
            ComputerMove::DrewAndPlaced { card: drawn }
        }
    }
}
