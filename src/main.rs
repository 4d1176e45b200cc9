//! Runs the fixed demo encounter and prints every event.
//!
//! No flags, no configuration: one player, three enemies of two kinds, two
//! items, five turns. All game behavior lives in the library; this binary
//! only maps [`TurnEvent`]s to stdout lines.

use rand::thread_rng;
use skirmish::{Encounter, Enemy, Hostile, Item, LoopState, Player, TurnEvent};

fn main() {
    let player = Player::new(10, 10, "Steel warrior", 100.0);

    let items = vec![
        Item::new(70, 88, "Blackmetal greatsword", 25),
        Item::new(66, 88, "Healing potion", 8),
    ];

    let hostiles = vec![
        Hostile::Grunt(Enemy::new(10, 40, "Skeleton", 10.0, 3.0)),
        Hostile::Grunt(Enemy::new(24, 52, "Skeleton", 10.0, 3.0)),
        Hostile::Grunt(Enemy::new(12, 63, "Slime", 20.0, 5.0)),
    ];

    let mut encounter = Encounter::new(player, hostiles, items);
    let mut rng = thread_rng();

    println!("\n=== GAME START ===");

    while encounter.state() == LoopState::Running {
        for event in encounter.play_turn(&mut rng) {
            match event {
                TurnEvent::TurnStarted { turn } => println!("\n--- Turn {} ---", turn),
                other => {
                    if let Some(message) = other.message() {
                        println!("{}", message);
                    }
                }
            }
        }
    }

    let summary = encounter.summary();
    println!("\n=== GAME END ===");
    println!("Final score: {}", summary.final_score);
    println!("Player health: {}", summary.final_health);
}
