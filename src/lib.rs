//! Skirmish - Turn-Based Encounter Simulation Library
//!
//! This module exposes the engine and entity model for testing and external
//! use. The binary in main.rs is a thin presentation layer over it.

pub mod core;
pub mod entities;

pub use crate::core::constants::DEFAULT_TURNS;
pub use crate::core::events::TurnEvent;
pub use crate::core::game_loop::{Encounter, LoopState, RunSummary};
pub use crate::entities::{Boss, Combatant, Enemy, GameObject, Hostile, Item, Movable, Player, Position};
