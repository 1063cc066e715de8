//! Alternating-turn combat resolution for the adventure game.
//!
//! Each entry point resolves one full exchange: the player's action plus
//! any immediate retaliation, reported as an event list for the UI layer.

use super::rewards::{grant_rewards, RewardSummary};
use super::session::CombatSession;
use crate::character::{Player, PlayerStats};
use crate::core::constants::*;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    PlayerHit {
        damage: u32,
        /// Carried-over perfect-dodge bonus was applied.
        boosted: bool,
    },
    EnemyHit {
        damage: u32,
    },
    DodgeSucceeded {
        perfect: bool,
    },
    DodgeFailed,
    FleeSucceeded,
    FleeFailed,
    Victory(RewardSummary),
    /// Player HP hit zero; clamped to the floor. The controller returns
    /// the player to the hub and restores HP.
    Defeat,
}

/// Player attacks. On a kill the rewards are granted immediately;
/// otherwise the enemy retaliates.
pub fn player_attack(
    player: &mut Player,
    session: &mut CombatSession,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let stats = PlayerStats::calculate(player);
    let base = (stats.attack + session.buff_bonus()) as i32
        + rng.gen_range(-PLAYER_DAMAGE_VARIANCE..PLAYER_DAMAGE_VARIANCE);

    let boosted = session.perfect_dodge_next;
    let mut damage = base;
    if boosted {
        damage = (damage as f64 * PERFECT_DODGE_MULTIPLIER) as i32;
        session.perfect_dodge_next = false;
    }
    let damage = damage.max(1) as u32;

    session.monster.take_damage(damage);
    session.tick_buff();
    session.turn += 1;

    let mut events = vec![CombatEvent::PlayerHit { damage, boosted }];
    if !session.monster.is_alive() {
        let rewards = grant_rewards(player, &session.monster, rng);
        events.push(CombatEvent::Victory(rewards));
    } else {
        events.extend(enemy_retaliate(player, session, rng));
    }
    events
}

/// Player attempts a dodge. Success may roll into a perfect dodge that
/// boosts the next attack; failure lets the enemy strike.
pub fn player_dodge(
    player: &mut Player,
    session: &mut CombatSession,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let stats = PlayerStats::calculate(player);
    let success = rng.gen_range(0..100) < stats.dodge_rate;

    if success {
        let perfect = rng.gen_range(0..100) < PERFECT_DODGE_CHANCE;
        if perfect {
            session.perfect_dodge_next = true;
        }
        session.turn += 1;
        vec![CombatEvent::DodgeSucceeded { perfect }]
    } else {
        let mut events = vec![CombatEvent::DodgeFailed];
        events.extend(enemy_retaliate(player, session, rng));
        events
    }
}

/// Flee attempt at a fixed success rate. Failure costs a retaliation.
/// On success the caller discards the session.
pub fn attempt_flee(
    player: &mut Player,
    session: &mut CombatSession,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    if rng.gen_bool(FLEE_SUCCESS_CHANCE) {
        vec![CombatEvent::FleeSucceeded]
    } else {
        let mut events = vec![CombatEvent::FleeFailed];
        events.extend(enemy_retaliate(player, session, rng));
        events
    }
}

/// One enemy strike: attack with variance, reduced by the player's
/// defense, floor 1. HP zero means defeat; HP is clamped to the floor so
/// the player never observes zero externally.
fn enemy_retaliate(
    player: &mut Player,
    session: &mut CombatSession,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let stats = PlayerStats::calculate(player);
    let raw = session.monster.attack as i32
        + rng.gen_range(-ENEMY_DAMAGE_VARIANCE..ENEMY_DAMAGE_VARIANCE);
    let damage = (raw - stats.defense as i32).max(1) as u32;

    player.take_damage(damage);

    let mut events = vec![CombatEvent::EnemyHit { damage }];
    if !player.is_alive() {
        player.hp = DEFEAT_HP_FLOOR;
        events.push(CombatEvent::Defeat);
    }
    events
}
