//! Gauge-paced combat resolution for the arena.
//!
//! Both sides fill an action gauge on a fixed tick; an actor may act only
//! with a full gauge, and acting drains it. The monster acts automatically
//! inside [`advance_tick`]; the player acts through the intent functions,
//! which report what happened as an event list.

use super::state::Gladiator;
use crate::core::constants::*;
use crate::items::arena_gear;
use crate::monsters::MonsterInstance;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Transient state for one arena bout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaCombat {
    pub monster: MonsterInstance,
    pub player_gauge: f64,
    pub monster_gauge: f64,
    /// Set by a defend action; consumed by the next monster hit.
    pub defending: bool,
}

impl ArenaCombat {
    pub fn new(monster: MonsterInstance) -> Self {
        Self {
            monster,
            player_gauge: 0.0,
            monster_gauge: 0.0,
            defending: false,
        }
    }

    pub fn player_ready(&self) -> bool {
        self.player_gauge >= ACTION_GAUGE_THRESHOLD
    }

    fn spend_player_gauge(&mut self) {
        self.player_gauge = 0.0;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArenaEvent {
    PlayerHit { damage: u32, critical: bool },
    SkillHit { damage: u32 },
    Defended,
    PotionUsed { healed: u32 },
    MonsterHit { damage: u32, blocked: bool },
    Victory(ArenaRewards),
    Defeat { gold_lost: u32 },
}

/// What winning a bout paid out.
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaRewards {
    pub exp: u32,
    pub gold: u32,
    /// Dropped gear id; `None` when the roll failed, nothing at this
    /// level qualifies, or the bag was full.
    pub gear: Option<String>,
    pub potion_dropped: bool,
    /// Banked exp crossed the threshold; the level-up screen is next.
    pub level_up_ready: bool,
    pub champion_defeated: bool,
}

/// Advances combat by one tick: fills both gauges, burns skill cooldown,
/// and lets the monster act when its gauge is full.
pub fn advance_tick(
    gladiator: &mut Gladiator,
    combat: &mut ArenaCombat,
    rng: &mut impl Rng,
) -> Vec<ArenaEvent> {
    let player_rate = GAUGE_BASE_RATE + gladiator.agility as f64 * GAUGE_AGILITY_RATE;
    let monster_rate = GAUGE_BASE_RATE + combat.monster.level as f64 * GAUGE_MONSTER_LEVEL_RATE;
    combat.player_gauge = (combat.player_gauge + player_rate).min(ACTION_GAUGE_THRESHOLD);
    combat.monster_gauge += monster_rate;
    gladiator.skill_cooldown = gladiator.skill_cooldown.saturating_sub(1);

    let mut events = Vec::new();
    if combat.monster_gauge >= ACTION_GAUGE_THRESHOLD {
        combat.monster_gauge = 0.0;
        events.extend(monster_attack(gladiator, combat, rng));
    }
    events
}

/// Basic attack. Needs a full gauge; returns nothing otherwise.
pub fn player_attack(
    gladiator: &mut Gladiator,
    combat: &mut ArenaCombat,
    rng: &mut impl Rng,
) -> Vec<ArenaEvent> {
    if !combat.player_ready() {
        return Vec::new();
    }
    let mut damage = gladiator.attack_power();
    let critical = rng.gen_bool(gladiator.crit_chance().min(1.0));
    if critical {
        damage = (damage as f64 * ARENA_CRIT_MULTIPLIER) as u32;
    }
    combat.monster.take_damage(damage);
    combat.spend_player_gauge();
    combat.defending = false;

    let mut events = vec![ArenaEvent::PlayerHit { damage, critical }];
    check_victory(gladiator, combat, rng, &mut events);
    events
}

/// Brace for the next hit, cutting its damage. Needs a full gauge.
pub fn player_defend(combat: &mut ArenaCombat) -> Vec<ArenaEvent> {
    if !combat.player_ready() {
        return Vec::new();
    }
    combat.defending = true;
    combat.spend_player_gauge();
    vec![ArenaEvent::Defended]
}

/// Shadow Strike. Needs a full gauge and an expired cooldown; never crits.
pub fn player_skill(
    gladiator: &mut Gladiator,
    combat: &mut ArenaCombat,
    rng: &mut impl Rng,
) -> Vec<ArenaEvent> {
    if !combat.player_ready() || gladiator.skill_cooldown > 0 {
        return Vec::new();
    }
    let damage = gladiator.skill_power();
    combat.monster.take_damage(damage);
    gladiator.skill_cooldown = SKILL_COOLDOWN_TICKS;
    combat.spend_player_gauge();
    combat.defending = false;

    let mut events = vec![ArenaEvent::SkillHit { damage }];
    check_victory(gladiator, combat, rng, &mut events);
    events
}

/// Drink a potion. Costs a full gauge like any other action, and
/// refuses at full HP so no potion is wasted.
pub fn use_potion(gladiator: &mut Gladiator, combat: &mut ArenaCombat) -> Vec<ArenaEvent> {
    if !combat.player_ready() || gladiator.potions == 0 || gladiator.hp >= gladiator.max_hp {
        return Vec::new();
    }
    gladiator.potions -= 1;
    let healed = gladiator.heal(POTION_HEAL_AMOUNT);
    combat.spend_player_gauge();
    vec![ArenaEvent::PotionUsed { healed }]
}

fn monster_attack(
    gladiator: &mut Gladiator,
    combat: &mut ArenaCombat,
    rng: &mut impl Rng,
) -> Vec<ArenaEvent> {
    let mut raw = (combat.monster.attack as f64
        * rng.gen_range(ARENA_MONSTER_DAMAGE_MIN..ARENA_MONSTER_DAMAGE_MAX))
        as i64;

    // Guard cuts the raw roll before armor applies; one floor at the end.
    let blocked = combat.defending;
    if blocked {
        raw = (raw as f64 * DEFEND_DAMAGE_MULTIPLIER) as i64;
        combat.defending = false;
    }
    let damage = (raw - gladiator.armor_defense() as i64).max(1) as u32;
    gladiator.take_damage(damage);

    let mut events = vec![ArenaEvent::MonsterHit { damage, blocked }];
    if !gladiator.is_alive() {
        let kept = (gladiator.gold as f64 * ARENA_DEFEAT_GOLD_FRACTION) as u32;
        let gold_lost = gladiator.gold - kept;
        gladiator.gold = kept;
        gladiator.hp = ((gladiator.max_hp as f64 * ARENA_DEFEAT_HP_FRACTION) as u32).max(1);
        events.push(ArenaEvent::Defeat { gold_lost });
    }
    events
}

fn check_victory(
    gladiator: &mut Gladiator,
    combat: &ArenaCombat,
    rng: &mut impl Rng,
    events: &mut Vec<ArenaEvent>,
) {
    if combat.monster.is_alive() {
        return;
    }
    events.push(ArenaEvent::Victory(grant_victory(
        gladiator,
        &combat.monster,
        rng,
    )));
}

/// Pays out a won bout: exp, gold, drop rolls, and the level-up flag.
fn grant_victory(
    gladiator: &mut Gladiator,
    monster: &MonsterInstance,
    rng: &mut impl Rng,
) -> ArenaRewards {
    gladiator.exp += monster.exp;
    gladiator.gold += monster.gold;

    let gear = roll_gear_drop(gladiator, rng).filter(|_| !gladiator.inventory.is_full());
    if let Some(id) = &gear {
        gladiator.inventory.add(id);
    }

    let potion_dropped = rng.gen_bool(ARENA_POTION_DROP_CHANCE);
    if potion_dropped {
        gladiator.potions += 1;
    }

    if gladiator.exp >= gladiator.exp_max {
        gladiator.pending_level_up = true;
    }
    if monster.boss {
        gladiator.champion_defeated = true;
    }

    ArenaRewards {
        exp: monster.exp,
        gold: monster.gold,
        gear,
        potion_dropped,
        level_up_ready: gladiator.pending_level_up,
        champion_defeated: monster.boss,
    }
}

/// One gear drop roll, uniform over pieces priced within the fighter's
/// level budget.
fn roll_gear_drop(gladiator: &Gladiator, rng: &mut impl Rng) -> Option<String> {
    if !rng.gen_bool(ARENA_GEAR_DROP_CHANCE) {
        return None;
    }
    let budget = gladiator.level * ARENA_GEAR_PRICE_PER_LEVEL;
    let pool: Vec<_> = arena_gear()
        .filter(|item| item.price <= budget)
        .collect();
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())].id.to_string())
}
