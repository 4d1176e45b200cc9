//! Core engine: tuning constants, turn events, and the encounter loop.

pub mod constants;
pub mod events;
pub mod game_loop;

pub use constants::*;
pub use events::TurnEvent;
pub use game_loop::{Encounter, LoopState, RunSummary};
