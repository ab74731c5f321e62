#![allow(dead_code)]

use std::collections::HashSet;
use taboo_core::{Card, Deck, EventBus, Game, Rank, SessionConfig, Suit};

pub fn card(rank: Rank, suit: Suit) -> Card {
    Deck::standard54()
        .draw
        .into_iter()
        .find(|card| card.rank == rank && card.suit == Some(suit))
        .expect("standard card")
}

pub fn jokers() -> (Card, Card) {
    let deck = Deck::standard54();
    let mut jokers = deck.draw.into_iter().filter(Card::is_joker);
    (jokers.next().unwrap(), jokers.next().unwrap())
}

/// Explicit table for a rigged game. `stock_top` is popped from its end,
/// so the last entry is drawn first.
#[derive(Default)]
pub struct Layout {
    pub row: Vec<Card>,
    pub human: Vec<Card>,
    pub computer: Vec<Card>,
    pub discard: Vec<Card>,
    pub stock_top: Vec<Card>,
    /// Put every card not named above underneath `stock_top`.
    pub fill_stock: bool,
}

pub fn rigged(layout: Layout) -> Game {
    let mut events = EventBus::default();
    let mut game = Game::new(SessionConfig::default(), 7, &mut events);
    let named: HashSet<u32> = layout
        .row
        .iter()
        .chain(&layout.human)
        .chain(&layout.computer)
        .chain(&layout.discard)
        .chain(&layout.stock_top)
        .map(|card| card.id)
        .collect();
    let mut stock: Vec<Card> = if layout.fill_stock {
        Deck::standard54()
            .draw
            .into_iter()
            .filter(|card| !named.contains(&card.id))
            .collect()
    } else {
        Vec::new()
    };
    stock.extend(layout.stock_top);
    game.deck.draw = stock;
    game.deck.discard = layout.discard;
    game.row = layout.row;
    game.human.hand = layout.human;
    game.computer.hand = layout.computer;
    game
}

pub fn assert_conserved(game: &Game) {
    let cards = game.all_cards();
    assert_eq!(cards.len(), 54, "card count drifted");
    let ids: HashSet<u32> = cards.iter().map(|card| card.id).collect();
    assert_eq!(ids.len(), 54, "a card is duplicated");
}

pub fn ids(cards: &[Card]) -> Vec<u32> {
    let mut ids: Vec<u32> = cards.iter().map(|card| card.id).collect();
    ids.sort_unstable();
    ids
}
