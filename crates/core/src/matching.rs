use crate::{take_card, Card};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    /// `captured` counts the matched row cards plus the played card.
    Matched { captured: usize, cleared: bool },
}

/// Row cards the played card would take. Jacks and Jokers take nothing and
/// are never taken.
pub fn matching_ids(row: &[Card], played: &Card) -> Vec<u32> {
    if played.is_special() {
        return Vec::new();
    }
    let value = played.value();
    row.iter()
        .filter(|card| !card.is_special() && card.value() == value)
        .map(|card| card.id)
        .collect()
}

pub fn can_match(row: &[Card], played: &Card) -> bool {
    !matching_ids(row, played).is_empty()
}

/// Plays `card_id` from `hand` against `row`. On a match the captured cards
/// go to `score_pile` if the row ends up empty, otherwise to `discard`.
/// Nothing is touched on `NoMatch`.
pub fn attempt_match(
    row: &mut Vec<Card>,
    hand: &mut Vec<Card>,
    card_id: u32,
    discard: &mut Vec<Card>,
    score_pile: &mut Vec<Card>,
) -> MatchResult {
    let Some(played) = hand.iter().find(|card| card.id == card_id).copied() else {
        return MatchResult::NoMatch;
    };
    let ids = matching_ids(row, &played);
    if ids.is_empty() {
        return MatchResult::NoMatch;
    }

    let mut captured: Vec<Card> = ids.iter().filter_map(|id| take_card(row, *id)).collect();
    if let Some(card) = take_card(hand, card_id) {
        captured.push(card);
    }
    let cleared = row.is_empty();
    let count = captured.len();
    if cleared {
        score_pile.append(&mut captured);
    } else {
        discard.append(&mut captured);
    }
    MatchResult::Matched {
        captured: count,
        cleared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn special_cards_never_match_each_other() {
        let row = vec![Card::joker(53), Card::suited(10, Rank::Jack, Suit::Hearts)];
        let jack = Card::suited(23, Rank::Jack, Suit::Diamonds);
        assert!(!can_match(&row, &jack));
        assert!(!can_match(&row, &Card::joker(54)));
    }

    #[test]
    fn missing_card_is_no_match() {
        let mut row = vec![Card::suited(1, Rank::Two, Suit::Hearts)];
        let mut hand = vec![];
        let mut discard = vec![];
        let mut pile = vec![];
        let result = attempt_match(&mut row, &mut hand, 14, &mut discard, &mut pile);
        assert_eq!(result, MatchResult::NoMatch);
        assert_eq!(row.len(), 1);
    }
}
