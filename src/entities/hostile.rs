//! Hostile combatants: regular enemies, bosses, and the closed [`Hostile`]
//! variant the simulation stores them in.
//!
//! `Boss` wraps an `Enemy` by composition and delegates the capability
//! traits, so there is no inheritance chain to linearize; boss-only moves
//! (`super_attack`, `heal`, `summon_allies`) live on `Boss` alone.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::{
    BOSS_HEAL_FRACTION, BOSS_HEALTH_SCALE, SUMMON_COUNT_MAX, SUMMON_COUNT_MIN, SUMMON_DAMAGE_MAX,
    SUMMON_DAMAGE_MIN, SUMMON_HEALTH_MAX, SUMMON_HEALTH_MIN, SUMMON_SPAWN_MAX, SUPER_ATTACK_SCALE,
};
use crate::entities::object::{Combatant, GameObject, Movable, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub position: Position,
    pub health: f64,
    pub damage: f64,
}

impl Enemy {
    pub fn new(x: i32, y: i32, name: impl Into<String>, health: f64, damage: f64) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
            health,
            damage,
        }
    }

    /// Subtracts `damage` from the target. No aliveness or overkill guard;
    /// the target's health goes wherever the arithmetic takes it.
    pub fn attack(&self, target: &mut dyn Combatant) {
        *target.health_mut() -= self.damage;
    }
}

impl GameObject for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Position {
        self.position
    }

    fn report(&self) -> Vec<String> {
        vec![
            format!("{} updated, health: {}", self.name, self.health),
            format!("Enemy ready to attack with damage: {}", self.damage),
        ]
    }
}

impl Movable for Enemy {
    fn translate(&mut self, dx: i32, dy: i32) {
        self.position.x += dx;
        self.position.y += dy;
    }
}

impl Combatant for Enemy {
    fn health(&self) -> f64 {
        self.health
    }

    fn health_mut(&mut self) -> &mut f64 {
        &mut self.health
    }
}

impl std::fmt::Display for Enemy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.name, self.position)
    }
}

/// An enemy with boss moves. Construction scales the supplied health by
/// `BOSS_HEALTH_SCALE` exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    inner: Enemy,
}

impl Boss {
    pub fn new(x: i32, y: i32, name: impl Into<String>, health: f64, damage: f64) -> Self {
        let mut inner = Enemy::new(x, y, name, health, damage);
        inner.health *= BOSS_HEALTH_SCALE;
        Self { inner }
    }

    pub fn damage(&self) -> f64 {
        self.inner.damage
    }

    /// Plain attack, inherited unchanged from the wrapped enemy.
    pub fn attack(&self, target: &mut dyn Combatant) {
        self.inner.attack(target);
    }

    /// Heavier strike: `damage * SUPER_ATTACK_SCALE`. Never chosen
    /// automatically; the caller decides when to use it over `attack`.
    pub fn super_attack(&self, target: &mut dyn Combatant) {
        *target.health_mut() -= self.inner.damage * SUPER_ATTACK_SCALE;
    }

    /// Regains a fifth of current health. Repeated calls compound; there is
    /// no cap.
    pub fn heal(&mut self) {
        self.inner.health += self.inner.health * BOSS_HEAL_FRACTION;
    }

    /// Produces 1..=3 fresh allies with randomized position and stats. The
    /// allies are only returned; feeding them into an active encounter is
    /// the caller's decision (see `Encounter::reinforce`).
    pub fn summon_allies(&self, rng: &mut impl Rng) -> Vec<Enemy> {
        let count = rng.gen_range(SUMMON_COUNT_MIN..=SUMMON_COUNT_MAX);
        (0..count).map(|_| self.rand_ally(rng)).collect()
    }

    fn rand_ally(&self, rng: &mut impl Rng) -> Enemy {
        Enemy::new(
            rng.gen_range(0..=SUMMON_SPAWN_MAX),
            rng.gen_range(0..=SUMMON_SPAWN_MAX),
            format!("{}'s summon", self.inner.name),
            rng.gen_range(SUMMON_HEALTH_MIN..=SUMMON_HEALTH_MAX) as f64,
            rng.gen_range(SUMMON_DAMAGE_MIN..=SUMMON_DAMAGE_MAX) as f64,
        )
    }
}

impl GameObject for Boss {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn position(&self) -> Position {
        self.inner.position()
    }

    fn report(&self) -> Vec<String> {
        self.inner.report()
    }
}

impl Movable for Boss {
    fn translate(&mut self, dx: i32, dy: i32) {
        self.inner.translate(dx, dy);
    }
}

impl Combatant for Boss {
    fn health(&self) -> f64 {
        self.inner.health
    }

    fn health_mut(&mut self) -> &mut f64 {
        &mut self.inner.health
    }
}

impl std::fmt::Display for Boss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

/// Closed variant over everything that can occupy an enemy slot in the loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Hostile {
    Grunt(Enemy),
    Boss(Boss),
}

impl Hostile {
    pub fn name(&self) -> &str {
        match self {
            Hostile::Grunt(e) => e.name(),
            Hostile::Boss(b) => b.name(),
        }
    }

    pub fn damage(&self) -> f64 {
        match self {
            Hostile::Grunt(e) => e.damage,
            Hostile::Boss(b) => b.damage(),
        }
    }

    pub fn is_alive(&self) -> bool {
        match self {
            Hostile::Grunt(e) => e.is_alive(),
            Hostile::Boss(b) => b.is_alive(),
        }
    }

    pub fn report(&self) -> Vec<String> {
        match self {
            Hostile::Grunt(e) => e.report(),
            Hostile::Boss(b) => b.report(),
        }
    }

    /// Plain attack for both variants; the loop never auto-selects a boss's
    /// `super_attack`.
    pub fn attack(&self, target: &mut dyn Combatant) {
        match self {
            Hostile::Grunt(e) => e.attack(target),
            Hostile::Boss(b) => b.attack(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::player::Player;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_enemy_attack_subtracts_exact_damage() {
        let enemy = Enemy::new(0, 0, "Skeleton", 10.0, 3.0);
        let mut player = Player::new(0, 0, "Target", 100.0);

        enemy.attack(&mut player);
        assert_eq!(player.health, 97.0);
        // Repeated attacks are additive
        enemy.attack(&mut player);
        enemy.attack(&mut player);
        assert_eq!(player.health, 91.0);
    }

    #[test]
    fn test_attack_has_no_overkill_guard() {
        let enemy = Enemy::new(0, 0, "Slime", 20.0, 5.0);
        let mut player = Player::new(0, 0, "Target", 3.0);

        enemy.attack(&mut player);
        assert_eq!(player.health, -2.0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_enemies_can_attack_each_other() {
        let enemy = Enemy::new(0, 0, "Skeleton", 10.0, 3.0);
        let mut other = Enemy::new(1, 1, "Slime", 20.0, 5.0);

        enemy.attack(&mut other);
        assert_eq!(other.health, 17.0);
    }

    #[test]
    fn test_boss_health_scaled_at_construction() {
        let boss = Boss::new(0, 0, "Bone Lord", 100.0, 10.0);
        assert_eq!(boss.health(), 130.0);
        // Damage is not scaled
        assert_eq!(boss.damage(), 10.0);
    }

    #[test]
    fn test_boss_super_attack_scales_damage() {
        let boss = Boss::new(0, 0, "Bone Lord", 100.0, 10.0);
        let mut player = Player::new(0, 0, "Target", 100.0);

        boss.super_attack(&mut player);
        assert_eq!(player.health, 88.0);

        // Plain attack still deals base damage
        boss.attack(&mut player);
        assert_eq!(player.health, 78.0);
    }

    #[test]
    fn test_boss_heal_compounds_without_cap() {
        let mut boss = Boss::new(0, 0, "Bone Lord", 100.0, 10.0);
        boss.heal();
        assert_eq!(boss.health(), 156.0); // 130 * 1.2
        boss.heal();
        assert_eq!(boss.health(), 187.2); // 156 * 1.2
    }

    #[test]
    fn test_summon_allies_bounds() {
        let boss = Boss::new(0, 0, "Bone Lord", 100.0, 10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..200 {
            let allies = boss.summon_allies(&mut rng);
            assert!((1..=3).contains(&allies.len()));
            for ally in &allies {
                assert_eq!(ally.name, "Bone Lord's summon");
                assert!((8.0..=12.0).contains(&ally.health));
                assert!((3.0..=5.0).contains(&ally.damage));
                assert!((0..=500).contains(&ally.position.x));
                assert!((0..=500).contains(&ally.position.y));
            }
        }
    }

    #[test]
    fn test_dead_hostile_reports_not_alive() {
        let mut enemy = Enemy::new(0, 0, "Skeleton", 10.0, 3.0);
        enemy.health = 0.0;
        let hostile = Hostile::Grunt(enemy);
        assert!(!hostile.is_alive());
    }
}
