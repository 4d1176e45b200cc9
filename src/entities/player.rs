//! The player character: a combatant with a score.

use serde::{Deserialize, Serialize};

use crate::entities::item::Item;
use crate::entities::object::{Combatant, GameObject, Movable, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Position,
    pub health: f64,
    pub score: u64,
}

impl Player {
    pub fn new(x: i32, y: i32, name: impl Into<String>, health: f64) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
            health,
            score: 0,
        }
    }

    /// Adds the item's value to the score. Removing the item from whatever
    /// collection holds it is the caller's job; collection and removal are
    /// not atomic.
    pub fn collect_item(&mut self, item: &Item) {
        self.score += item.value;
    }
}

impl GameObject for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Position {
        self.position
    }

    fn report(&self) -> Vec<String> {
        vec![
            format!("{} updated, health: {}", self.name, self.health),
            format!("Player score: {}", self.score),
        ]
    }
}

impl Movable for Player {
    fn translate(&mut self, dx: i32, dy: i32) {
        self.position.x += dx;
        self.position.y += dy;
    }
}

impl Combatant for Player {
    fn health(&self) -> f64 {
        self.health
    }

    fn health_mut(&mut self) -> &mut f64 {
        &mut self.health
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.name, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(10, 10, "Steel warrior", 100.0);
        assert_eq!(player.name, "Steel warrior");
        assert_eq!(player.position, Position::new(10, 10));
        assert_eq!(player.health, 100.0);
        assert_eq!(player.score, 0);
        assert!(player.is_alive());
    }

    #[test]
    fn test_translate_is_pure_translation() {
        let mut player = Player::new(3, -2, "Walker", 50.0);
        player.translate(-1, 1);
        assert_eq!(player.position, Position::new(2, -1));
        player.translate(0, 0);
        assert_eq!(player.position, Position::new(2, -1));
        // Health and score are untouched by movement
        assert_eq!(player.health, 50.0);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_collect_item_adds_value() {
        let mut player = Player::new(0, 0, "Collector", 10.0);
        let sword = Item::new(0, 0, "Blackmetal greatsword", 25);
        let potion = Item::new(0, 0, "Healing potion", 8);

        player.collect_item(&sword);
        assert_eq!(player.score, 25);
        player.collect_item(&potion);
        assert_eq!(player.score, 33);
    }

    #[test]
    fn test_report_includes_score_line() {
        let player = Player::new(1, 2, "Hero", 42.0);
        let lines = player.report();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Hero updated, health: 42");
        assert_eq!(lines[1], "Player score: 0");
    }
}
