// Encounter pacing
pub const DEFAULT_TURNS: u32 = 5;

// Player movement: each step component is drawn uniformly from this range
pub const STEP_MIN: i32 = -1;
pub const STEP_MAX: i32 = 1;

// Boss tuning
pub const BOSS_HEALTH_SCALE: f64 = 1.3;
pub const SUPER_ATTACK_SCALE: f64 = 1.2;
pub const BOSS_HEAL_FRACTION: f64 = 0.2;

// Summoned allies: count, spawn area and stat ranges (inclusive)
pub const SUMMON_COUNT_MIN: u32 = 1;
pub const SUMMON_COUNT_MAX: u32 = 3;
pub const SUMMON_SPAWN_MAX: i32 = 500;
pub const SUMMON_HEALTH_MIN: i32 = 8;
pub const SUMMON_HEALTH_MAX: i32 = 12;
pub const SUMMON_DAMAGE_MIN: i32 = 3;
pub const SUMMON_DAMAGE_MAX: i32 = 5;
