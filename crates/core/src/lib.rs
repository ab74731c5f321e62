//! Rules engine for Taboo. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod matching;
pub mod rng;
pub mod run;
pub mod scoring;
pub mod state;
pub mod strategy;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use matching::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
pub use state::*;
pub use strategy::*;
