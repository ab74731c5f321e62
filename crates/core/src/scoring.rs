use crate::{sum_values, Player, Seat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    HumanWins,
    ComputerWins,
    Draw,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalScores {
    pub human: i64,
    pub computer: i64,
    pub human_raw: i64,
    pub computer_raw: i64,
    pub finisher: Seat,
    pub outcome: Outcome,
}

/// Score pile value, minus the value still in hand unless this player
/// finished first. May be negative.
pub fn raw_score(player: &Player, is_final_scorer: bool) -> i64 {
    let mut score = sum_values(&player.score_pile);
    if !is_final_scorer {
        score -= sum_values(&player.hand);
    }
    score
}

pub fn final_score(player: &Player, is_final_scorer: bool) -> i64 {
    raw_score(player, is_final_scorer).max(0)
}

/// Compares clamped scores; equal scores are a draw.
pub fn decide_outcome(human: i64, computer: i64) -> Outcome {
    match human.cmp(&computer) {
        std::cmp::Ordering::Greater => Outcome::HumanWins,
        std::cmp::Ordering::Less => Outcome::ComputerWins,
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

pub fn score_game(human: &Player, computer: &Player) -> FinalScores {
    let finisher = if human.hand.is_empty() {
        Seat::Human
    } else {
        Seat::Computer
    };
    let human_raw = raw_score(human, finisher == Seat::Human);
    let computer_raw = raw_score(computer, finisher == Seat::Computer);
    let human_score = human_raw.max(0);
    let computer_score = computer_raw.max(0);
    FinalScores {
        human: human_score,
        computer: computer_score,
        human_raw,
        computer_raw,
        finisher,
        outcome: decide_outcome(human_score, computer_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Rank, Suit};

    fn player_with(seat: Seat, pile: Vec<Card>, hand: Vec<Card>) -> Player {
        let mut player = Player::new("p", seat);
        player.score_pile = pile;
        player.hand = hand;
        player
    }

    #[test]
    fn finisher_keeps_hand_value() {
        let player = player_with(
            Seat::Human,
            vec![Card::suited(1, Rank::King, Suit::Hearts)],
            vec![Card::suited(2, Rank::Ten, Suit::Hearts)],
        );
        assert_eq!(raw_score(&player, true), 12);
        assert_eq!(raw_score(&player, false), 2);
    }

    #[test]
    fn negative_scores_clamp_and_draw() {
        let human = player_with(Seat::Human, vec![], vec![]);
        let computer = player_with(
            Seat::Computer,
            vec![],
            vec![Card::suited(5, Rank::Six, Suit::Clubs)],
        );
        let scores = score_game(&human, &computer);
        assert_eq!(scores.finisher, Seat::Human);
        assert_eq!(scores.computer_raw, -6);
        assert_eq!(scores.computer, 0);
        assert_eq!(scores.human, 0);
        assert_eq!(scores.outcome, Outcome::Draw);
    }
}
