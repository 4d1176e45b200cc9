//! Collectible items. Items have identity and position but never move, so
//! they implement [`GameObject`] only.

use serde::{Deserialize, Serialize};

use crate::entities::object::{GameObject, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub position: Position,
    pub value: u64,
}

impl Item {
    pub fn new(x: i32, y: i32, name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
            value,
        }
    }
}

impl GameObject for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Position {
        self.position
    }

    fn report(&self) -> Vec<String> {
        vec![format!("Item {} waiting to be collected", self.name)]
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.name, self.position)
    }
}
