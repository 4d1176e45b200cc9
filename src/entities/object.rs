//! Base capabilities shared by everything on the field.
//!
//! Identity/position ([`GameObject`]), locomotion ([`Movable`]) and combat
//! state ([`Combatant`]) are three independent traits rather than a base-class
//! chain, so a type opts into exactly the capabilities it has: items have
//! identity but never move, characters have all three.

use serde::{Deserialize, Serialize};

/// Integer grid coordinates. No bounds are enforced anywhere; the field is
/// conceptually unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identity and observation. `report()` is a pure observer: it describes the
/// object's current state as text and mutates nothing. The engine forwards
/// these lines to the presentation layer as events instead of printing.
pub trait GameObject {
    fn name(&self) -> &str;

    fn position(&self) -> Position;

    /// Status lines for the update phase.
    fn report(&self) -> Vec<String>;
}

/// Locomotion. Translation is unchecked and touches only the mover's own
/// position.
pub trait Movable {
    fn translate(&mut self, dx: i32, dy: i32);
}

/// Combat state. Health is deliberately unclamped: damage can push it
/// negative and heals can push it past any nominal maximum.
pub trait Combatant: GameObject {
    fn health(&self) -> f64;

    fn health_mut(&mut self) -> &mut f64;

    fn is_alive(&self) -> bool {
        self.health() > 0.0
    }
}
