// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;

// Player baseline
pub const BASE_MAX_HP: u32 = 100;
pub const BASE_ATTACK_BONUS: u32 = 5;
pub const BASE_DODGE_BONUS: u32 = 10;
pub const DODGE_RATE_CAP: u32 = 50;
pub const MAX_HP_PER_VITALITY: u32 = 2;
pub const STARTING_GOLD: u32 = 100;

// Experience thresholds per level. The last entry repeats for levels past
// the end of the table.
pub const EXP_TABLE: [u32; 10] = [100, 150, 220, 320, 450, 600, 800, 1050, 1350, 1700];

// Adventure combat rolls
pub const PLAYER_DAMAGE_VARIANCE: i32 = 5; // attack + uniform(-5..=4)
pub const ENEMY_DAMAGE_VARIANCE: i32 = 3; // attack + uniform(-3..=2)
pub const PERFECT_DODGE_CHANCE: u32 = 15; // percent, rolled after a successful dodge
pub const PERFECT_DODGE_MULTIPLIER: f64 = 1.5;
pub const FLEE_SUCCESS_CHANCE: f64 = 0.8;
pub const GOLD_REWARD_VARIANCE: u32 = 10; // gold + uniform(0..10)
pub const DEFEAT_HP_FLOOR: u32 = 1;

// Inventory
pub const INVENTORY_CAPACITY: usize = 20;

// Arena pacing: gauges fill per 100ms tick, actions unlock at the threshold
pub const ACTION_GAUGE_THRESHOLD: f64 = 100.0;
pub const GAUGE_BASE_RATE: f64 = 2.0;
pub const GAUGE_AGILITY_RATE: f64 = 0.1;
pub const GAUGE_MONSTER_LEVEL_RATE: f64 = 0.05;

// Arena combat
pub const ARENA_BASE_ATTACK: u32 = 5;
pub const ARENA_CRIT_BASE_CHANCE: f64 = 0.1;
pub const ARENA_CRIT_AGILITY_CHANCE: f64 = 0.01;
pub const ARENA_CRIT_MULTIPLIER: f64 = 1.5;
pub const ARENA_MONSTER_DAMAGE_MIN: f64 = 0.8;
pub const ARENA_MONSTER_DAMAGE_MAX: f64 = 1.2;
pub const DEFEND_DAMAGE_MULTIPLIER: f64 = 0.3;
pub const SKILL_BASE_ATTACK: u32 = 15;
pub const SKILL_COOLDOWN_TICKS: u32 = 50;
pub const POTION_HEAL_AMOUNT: u32 = 50;
pub const POTION_PRICE: u32 = 20;
pub const STARTING_POTIONS: u32 = 3;

// Arena progression
pub const ARENA_STARTING_GOLD: u32 = 50;
pub const ARENA_BASE_EXP_MAX: u32 = 100;
pub const ARENA_EXP_CURVE: f64 = 1.2;
pub const ARENA_LEVEL_UP_HP: u32 = 10;
pub const ARENA_ROSTER_LEVEL_WINDOW: u32 = 2; // monsters up to player level + 2
pub const ARENA_DEFEAT_HP_FRACTION: f64 = 0.1;
pub const ARENA_DEFEAT_GOLD_FRACTION: f64 = 0.8;
pub const ARENA_GEAR_DROP_CHANCE: f64 = 0.15;
pub const ARENA_POTION_DROP_CHANCE: f64 = 0.25;
pub const ARENA_GEAR_PRICE_PER_LEVEL: u32 = 100;

// Save slots
pub const ADVENTURE_SAVE_KEY: &str = "adventure";
pub const ARENA_SAVE_KEY: &str = "arena";
