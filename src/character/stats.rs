use super::player::Player;
use crate::core::constants::*;
use crate::items::{get_item, EquipSlot};

/// Stats derived from base attributes plus equipment. Recomputed on
/// demand; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub attack: u32,
    pub defense: u32,
    /// Dodge success chance in percent, capped.
    pub dodge_rate: u32,
}

impl PlayerStats {
    pub fn calculate(player: &Player) -> Self {
        let mut attack = player.strength + BASE_ATTACK_BONUS;
        let mut defense = player.vitality / 2;
        let dodge_rate = (player.agility + BASE_DODGE_BONUS).min(DODGE_RATE_CAP);

        if let Some(item) = player.equipment.get(EquipSlot::Weapon).and_then(get_item) {
            attack += item.attack;
        }
        if let Some(item) = player.equipment.get(EquipSlot::Armor).and_then(get_item) {
            defense += item.defense;
        }
        if let Some(item) = player.equipment.get(EquipSlot::Shield).and_then(get_item) {
            defense += item.defense;
        }

        Self {
            attack,
            defense,
            dodge_rate,
        }
    }
}
