//! Events produced by the encounter engine.
//!
//! The engine never prints. Each turn it returns a sequence of [`TurnEvent`]s
//! carrying structured fields plus a preformatted `message`, and the
//! presentation layer (main.rs) decides what to do with them.

/// A single event produced during one turn of an encounter.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnEvent {
    /// A new turn began.
    TurnStarted { turn: u32 },

    /// One status line from the update phase (pure observation).
    Status { line: String },

    /// A living hostile struck the player.
    HostileAttacked {
        attacker: String,
        damage: f64,
        player_health: f64,
        message: String,
    },

    /// The player picked up an item standing on their tile. The item has
    /// already been removed from the active collection.
    ItemCollected {
        item: String,
        value: u64,
        score: u64,
        message: String,
    },

    /// The player's health dropped to zero or below; the encounter is over
    /// and no movement phase ran this turn.
    PlayerDied { message: String },

    /// The player wandered. Emitted only when the turn survived the
    /// termination check.
    PlayerMoved {
        dx: i32,
        dy: i32,
        x: i32,
        y: i32,
        message: String,
    },
}

impl TurnEvent {
    /// Human-readable line for this event, if it carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            TurnEvent::TurnStarted { .. } => None,
            TurnEvent::Status { line } => Some(line),
            TurnEvent::HostileAttacked { message, .. }
            | TurnEvent::ItemCollected { message, .. }
            | TurnEvent::PlayerDied { message }
            | TurnEvent::PlayerMoved { message, .. } => Some(message),
        }
    }
}
