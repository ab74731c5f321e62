//! Seeded autoplay: drives whole games through the core turn API with a
//! scripted player in the human seat.

mod action;
mod config;
mod error;
mod policy;
mod simulator;
mod trace;

pub use action::*;
pub use config::*;
pub use error::*;
pub use policy::*;
pub use simulator::*;
pub use trace::*;
