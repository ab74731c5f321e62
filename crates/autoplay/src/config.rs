use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub games: u32,
    /// A game still running after this many turns is stopped.
    pub max_turns: u32,
    pub record_steps: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            games: 1,
            max_turns: 400,
            record_steps: false,
        }
    }
}

impl AutoplayConfig {
    /// Seed for the `index`-th game of a batch.
    pub fn game_seed(&self, index: u32) -> u64 {
        self.seed.wrapping_add(u64::from(index))
    }
}
