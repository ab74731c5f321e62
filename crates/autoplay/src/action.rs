use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutoAction {
    Draw,
    Play { card: u32 },
    Place { card: u32 },
}

impl AutoAction {
    pub fn stable_key(&self) -> String {
        match self {
            Self::Draw => "draw".to_string(),
            Self::Play { card } => format!("play:{card}"),
            Self::Place { card } => format!("place:{card}"),
        }
    }
}
