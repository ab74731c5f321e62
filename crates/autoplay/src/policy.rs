use crate::AutoAction;
use taboo_core::{Card, Game, HumanStep, Phase, Seat};

/// Scripted human seat: the first matching card, then a Jack, then a Joker,
/// otherwise draw. After drawing it places its lowest plain card.
pub fn choose_action(game: &Game) -> Option<AutoAction> {
    let hand = &game.human.hand;
    match game.turn.phase {
        Phase::AwaitingHuman(HumanStep::Idle) => {
            let playable = game.playable_cards(Seat::Human);
            let plain = playable.iter().find(|card| !card.is_special());
            let jack = playable
                .iter()
                .find(|card| card.is_jack())
                .filter(|_| !game.row.is_empty());
            let joker = playable.iter().find(|card| card.is_joker());
            let choice = plain.or(jack).or(joker);
            Some(choice.map_or(AutoAction::Draw, |card| AutoAction::Play { card: card.id }))
        }
        Phase::AwaitingHuman(HumanStep::MustPlaceDrawnCard) => {
            placement_choice(hand).map(|card| AutoAction::Place { card: card.id })
        }
        Phase::ComputerTurn | Phase::GameOver => None,
    }
}

// Lowest plain card; a special only when the hand holds nothing else.
fn placement_choice(hand: &[Card]) -> Option<&Card> {
    hand.iter()
        .filter(|card| !card.is_special())
        .min_by_key(|card| card.value())
        .or_else(|| hand.first())
}
