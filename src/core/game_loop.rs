//! The turn-based encounter engine.
//!
//! `Encounter` owns one player, a collection of hostiles and a collection of
//! items, and advances them one turn at a time through a fixed phase order:
//! update, attack, collect, termination check, movement. All randomness comes
//! through the injected `Rng`, so a seeded generator replays an encounter
//! exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_TURNS, STEP_MAX, STEP_MIN};
use crate::core::events::TurnEvent;
use crate::entities::hostile::{Enemy, Hostile};
use crate::entities::item::Item;
use crate::entities::object::{Combatant, GameObject, Movable};
use crate::entities::player::Player;

/// Encounter state machine. `PlayerDead` and `TurnsExhausted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopState {
    Running,
    PlayerDead,
    TurnsExhausted,
}

/// Final report for a finished (or abandoned) encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub outcome: LoopState,
    pub turns_played: u32,
    pub final_score: u64,
    /// May be negative; health is never clamped.
    pub final_health: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    player: Player,
    hostiles: Vec<Hostile>,
    items: Vec<Item>,
    turns_played: u32,
    max_turns: u32,
    state: LoopState,
}

impl Encounter {
    pub fn new(player: Player, hostiles: Vec<Hostile>, items: Vec<Item>) -> Self {
        Self::with_turns(player, hostiles, items, DEFAULT_TURNS)
    }

    pub fn with_turns(
        player: Player,
        hostiles: Vec<Hostile>,
        items: Vec<Item>,
        max_turns: u32,
    ) -> Self {
        Self {
            player,
            hostiles,
            items,
            turns_played: 0,
            max_turns,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn hostiles(&self) -> &[Hostile] {
        &self.hostiles
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Merges summoned allies into the active hostile collection. The engine
    /// itself never summons; a boss's `summon_allies` only returns allies,
    /// and this is the seam through which a caller feeds them back in.
    pub fn reinforce(&mut self, allies: Vec<Enemy>) {
        self.hostiles.extend(allies.into_iter().map(Hostile::Grunt));
    }

    /// Plays one turn through the fixed phase order. Returns the events of
    /// that turn; returns nothing if the encounter already finished.
    pub fn play_turn(&mut self, rng: &mut impl Rng) -> Vec<TurnEvent> {
        if self.state != LoopState::Running {
            return Vec::new();
        }

        self.turns_played += 1;
        let mut events = vec![TurnEvent::TurnStarted {
            turn: self.turns_played,
        }];

        self.update_phase(&mut events);
        self.attack_phase(&mut events);
        self.collect_phase(&mut events);

        // Termination check: a dead player ends the turn before movement.
        if !self.player.is_alive() {
            self.state = LoopState::PlayerDead;
            events.push(TurnEvent::PlayerDied {
                message: "Player has fallen! Game over.".to_string(),
            });
            return events;
        }

        self.movement_phase(rng, &mut events);

        if self.turns_played >= self.max_turns {
            self.state = LoopState::TurnsExhausted;
        }

        events
    }

    /// Drives the encounter to a terminal state, discarding per-turn events.
    pub fn run(&mut self, rng: &mut impl Rng) -> RunSummary {
        while self.state == LoopState::Running {
            self.play_turn(rng);
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            outcome: self.state,
            turns_played: self.turns_played,
            final_score: self.player.score,
            final_health: self.player.health,
        }
    }

    // Phase 1: pure observation of player, hostiles, items, in that order.
    fn update_phase(&self, events: &mut Vec<TurnEvent>) {
        let lines = self
            .player
            .report()
            .into_iter()
            .chain(self.hostiles.iter().flat_map(|h| h.report()))
            .chain(self.items.iter().flat_map(|i| i.report()));
        events.extend(lines.map(|line| TurnEvent::Status { line }));
    }

    // Phase 2: every living hostile strikes the player. Dead hostiles stay
    // in the collection and merely skip their strike.
    fn attack_phase(&mut self, events: &mut Vec<TurnEvent>) {
        for hostile in &self.hostiles {
            if !hostile.is_alive() {
                continue;
            }
            hostile.attack(&mut self.player);
            events.push(TurnEvent::HostileAttacked {
                attacker: hostile.name().to_string(),
                damage: hostile.damage(),
                player_health: self.player.health,
                message: format!(
                    "{} attacked {} for {} damage",
                    hostile.name(),
                    self.player.name,
                    hostile.damage()
                ),
            });
        }
    }

    // Phase 3: items on the player's tile are collected and removed.
    // Iterates over a snapshot of the collection so removal is safe.
    fn collect_phase(&mut self, events: &mut Vec<TurnEvent>) {
        let snapshot = std::mem::take(&mut self.items);
        for item in snapshot {
            if item.position == self.player.position {
                self.player.collect_item(&item);
                events.push(TurnEvent::ItemCollected {
                    item: item.name.clone(),
                    value: item.value,
                    score: self.player.score,
                    message: format!("Collected {}, score: {}", item.name, self.player.score),
                });
            } else {
                self.items.push(item);
            }
        }
    }

    // Phase 5: the player wanders one step, each component uniform in
    // {-1, 0, 1}.
    fn movement_phase(&mut self, rng: &mut impl Rng, events: &mut Vec<TurnEvent>) {
        let dx = rng.gen_range(STEP_MIN..=STEP_MAX);
        let dy = rng.gen_range(STEP_MIN..=STEP_MAX);
        self.player.translate(dx, dy);
        events.push(TurnEvent::PlayerMoved {
            dx,
            dy,
            x: self.player.position.x,
            y: self.player.position.y,
            message: format!("{} moved to {}", self.player.name, self.player.position),
        });
    }
}
