use taboo_core::{Card, FinalScores, HumanStep, Outcome, Phase, Snapshot};

pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Numbered hand listing; cards in `playable` get a `*`.
pub fn format_hand(cards: &[Card], playable: &[Card]) -> String {
    if cards.is_empty() {
        return "  (empty)".to_string();
    }
    cards
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let mark = if playable.contains(card) { "*" } else { " " };
            format!(" {mark}{}: {}", idx + 1, card)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_table(snapshot: &Snapshot) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "turn {} | stock {} | discard {} | {} holds {} card(s)",
        snapshot.turn,
        snapshot.stock_count,
        snapshot.discard_count,
        snapshot.computer_name,
        snapshot.computer_hand_count
    ));
    out.push(format!("row: {}", format_cards(&snapshot.row)));
    out.push(format!(
        "score piles: {} {} | {} {}",
        snapshot.human_name,
        snapshot.human_score_pile,
        snapshot.computer_name,
        snapshot.computer_score_pile
    ));
    out.push(format!("{}'s hand:", snapshot.human_name));
    out.push(format_hand(&snapshot.human_hand, &snapshot.human_playable));
    out.join("\n")
}

pub fn prompt_hint(snapshot: &Snapshot) -> &'static str {
    match snapshot.phase {
        Phase::AwaitingHuman(HumanStep::Idle) => "play <n> or draw",
        Phase::AwaitingHuman(HumanStep::MustPlaceDrawnCard) => "place <n>",
        Phase::ComputerTurn => "waiting",
        Phase::GameOver => "game over",
    }
}

pub fn render_result(scores: &FinalScores, human: &str, computer: &str) -> String {
    let headline = match scores.outcome {
        Outcome::HumanWins => format!("{human} wins!"),
        Outcome::ComputerWins => format!("{computer} wins!"),
        Outcome::Draw => "It's a draw.".to_string(),
    };
    format!(
        "{headline}\nfinal score: {human} {} ({}), {computer} {} ({})",
        scores.human, scores.human_raw, scores.computer, scores.computer_raw
    )
}
