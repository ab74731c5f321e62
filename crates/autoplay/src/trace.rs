use crate::{AutoAction, AutoplayError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use taboo_core::{Event, FinalScores, Outcome};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Finished,
    TurnLimit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u32,
    pub turn_before: u32,
    pub action: AutoAction,
    pub action_detail: String,
    pub turn_after: u32,
    pub row_after: usize,
    pub stock_after: usize,
    pub discard_after: usize,
    pub human_hand_after: usize,
    pub computer_hand_after: usize,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub human_name: String,
    pub computer_name: String,
    pub status: GameStatus,
    pub turns: u32,
    pub steps: u32,
    pub scores: Option<FinalScores>,
    pub event_count: usize,
    #[serde(default)]
    pub trace: Vec<StepRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchSummary {
    pub games: u32,
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
    pub turn_limited: u32,
    pub mean_human_score: f64,
    pub mean_computer_score: f64,
    pub mean_turns: f64,
}

impl BatchSummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut summary = Self {
            games: records.len() as u32,
            ..Self::default()
        };
        let mut human_total = 0i64;
        let mut computer_total = 0i64;
        let mut finished = 0u32;
        let mut turns = 0u64;
        for record in records {
            turns += u64::from(record.turns);
            let Some(scores) = record.scores else {
                summary.turn_limited += 1;
                continue;
            };
            finished += 1;
            human_total += scores.human;
            computer_total += scores.computer;
            match scores.outcome {
                Outcome::HumanWins => summary.human_wins += 1,
                Outcome::ComputerWins => summary.computer_wins += 1,
                Outcome::Draw => summary.draws += 1,
            }
        }
        if finished > 0 {
            summary.mean_human_score = human_total as f64 / f64::from(finished);
            summary.mean_computer_score = computer_total as f64 / f64::from(finished);
        }
        if summary.games > 0 {
            summary.mean_turns = turns as f64 / f64::from(summary.games);
        }
        summary
    }

    pub fn to_text_report(&self) -> String {
        [
            format!("games: {}", self.games),
            format!(
                "human wins: {}  computer wins: {}  draws: {}  turn limit: {}",
                self.human_wins, self.computer_wins, self.draws, self.turn_limited
            ),
            format!(
                "mean score: human {:.2}  computer {:.2}",
                self.mean_human_score, self.mean_computer_score
            ),
            format!("mean turns: {:.1}", self.mean_turns),
        ]
        .join("\n")
    }
}

pub fn write_json(path: &Path, records: &[GameRecord]) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(records)?;
    fs::write(path, body)?;
    Ok(())
}
