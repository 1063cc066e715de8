use crate::core::constants::*;
use crate::items::{get_item, Inventory, ItemKind};
use serde::{Deserialize, Serialize};

/// Which stat a deferred level-up buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelUpChoice {
    Strength,
    Agility,
    MaxHp,
}

/// Persistent state for the arena fighter.
///
/// IMPORTANT: When adding new fields, use `#[serde(default)]` so older
/// save payloads still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gladiator {
    pub level: u32,
    pub exp: u32,
    pub exp_max: u32,
    pub gold: u32,
    pub strength: u32,
    pub agility: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub inventory: Inventory,
    pub potions: u32,
    /// Shadow Strike cooldown in ticks; persists between fights.
    pub skill_cooldown: u32,
    /// Set when a victory banks enough exp; spent on the level-up screen.
    pub pending_level_up: bool,
    #[serde(default)]
    pub champion_defeated: bool,
}

impl Default for Gladiator {
    fn default() -> Self {
        Self::new()
    }
}

impl Gladiator {
    pub fn new() -> Self {
        Self {
            level: 1,
            exp: 0,
            exp_max: ARENA_BASE_EXP_MAX,
            gold: ARENA_STARTING_GOLD,
            strength: 10,
            agility: 10,
            hp: BASE_MAX_HP,
            max_hp: BASE_MAX_HP,
            weapon: None,
            armor: None,
            inventory: Inventory::new(),
            potions: STARTING_POTIONS,
            skill_cooldown: 0,
            pending_level_up: false,
            champion_defeated: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    pub fn restore_full_hp(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn weapon_attack(&self) -> u32 {
        self.weapon
            .as_deref()
            .and_then(get_item)
            .map_or(0, |item| item.attack)
    }

    pub fn armor_defense(&self) -> u32 {
        self.armor
            .as_deref()
            .and_then(get_item)
            .map_or(0, |item| item.defense)
    }

    /// Basic attack power: base plus strength plus weapon.
    pub fn attack_power(&self) -> u32 {
        ARENA_BASE_ATTACK + self.strength + self.weapon_attack()
    }

    /// Shadow Strike power: double-scaled strength and weapon.
    pub fn skill_power(&self) -> u32 {
        SKILL_BASE_ATTACK + self.strength * 2 + self.weapon_attack() * 2
    }

    pub fn crit_chance(&self) -> f64 {
        ARENA_CRIT_BASE_CHANCE + self.agility as f64 * ARENA_CRIT_AGILITY_CHANCE
    }

    /// Equips a weapon or armor piece from the bag; the displaced piece
    /// returns to the bag. Atomic, so the bag never overflows.
    pub fn equip_item(&mut self, item_id: &str) -> bool {
        let Some(item) = get_item(item_id) else {
            return false;
        };
        let slot = match item.kind {
            ItemKind::Weapon => &mut self.weapon,
            ItemKind::Armor => &mut self.armor,
            _ => return false,
        };
        // Borrow dance: validate membership before mutating anything.
        if !self.inventory.contains(item_id) {
            return false;
        }
        let old = std::mem::replace(slot, Some(item_id.to_string()));
        self.inventory.remove(item_id);
        if let Some(old_id) = old {
            self.inventory.add(&old_id);
        }
        true
    }

    /// Returns the equipped weapon to the bag, if there is room.
    pub fn unequip_weapon(&mut self) -> bool {
        Self::unequip_slot(&mut self.weapon, &mut self.inventory)
    }

    /// Returns the equipped armor to the bag, if there is room.
    pub fn unequip_armor(&mut self) -> bool {
        Self::unequip_slot(&mut self.armor, &mut self.inventory)
    }

    fn unequip_slot(slot: &mut Option<String>, inventory: &mut Inventory) -> bool {
        if slot.is_none() || inventory.is_full() {
            return false;
        }
        if let Some(old) = slot.take() {
            inventory.add(&old);
        }
        true
    }

    /// Buys gear into the bag; needs gold and bag room.
    pub fn buy_gear(&mut self, item_id: &str) -> bool {
        let Some(item) = get_item(item_id) else {
            return false;
        };
        if !matches!(item.kind, ItemKind::Weapon | ItemKind::Armor) {
            return false;
        }
        if self.gold < item.price || self.inventory.is_full() {
            return false;
        }
        self.gold -= item.price;
        self.inventory.add(item_id);
        true
    }

    pub fn buy_potion(&mut self) -> bool {
        if self.gold < POTION_PRICE {
            return false;
        }
        self.gold -= POTION_PRICE;
        self.potions += 1;
        true
    }

    /// Spends the banked level-up on one stat. Max-HP picks also heal by
    /// the same amount.
    pub fn apply_level_up(&mut self, choice: LevelUpChoice) -> bool {
        if !self.pending_level_up {
            return false;
        }
        match choice {
            LevelUpChoice::Strength => self.strength += 1,
            LevelUpChoice::Agility => self.agility += 1,
            LevelUpChoice::MaxHp => {
                self.max_hp += ARENA_LEVEL_UP_HP;
                self.hp += ARENA_LEVEL_UP_HP;
            }
        }
        self.level += 1;
        self.exp = self.exp.saturating_sub(self.exp_max);
        self.exp_max = (self.exp_max as f64 * ARENA_EXP_CURVE) as u32;
        self.pending_level_up = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::INVENTORY_CAPACITY;

    #[test]
    fn test_new_gladiator_defaults() {
        let g = Gladiator::new();
        assert_eq!(g.level, 1);
        assert_eq!(g.gold, 50);
        assert_eq!(g.potions, 3);
        assert_eq!(g.exp_max, 100);
        assert_eq!(g.attack_power(), 15); // 5 + 10 STR
        assert_eq!(g.skill_power(), 35); // 15 + 20
        assert!((g.crit_chance() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_weapon_scales_attack_and_skill() {
        let mut g = Gladiator::new();
        g.inventory.add("silver_sword"); // +12
        assert!(g.equip_item("silver_sword"));
        assert_eq!(g.attack_power(), 27);
        assert_eq!(g.skill_power(), 59); // 15 + 20 + 24
    }

    #[test]
    fn test_equip_swaps_old_gear_back() {
        let mut g = Gladiator::new();
        g.inventory.add("rusty_sword");
        g.inventory.add("magic_sword");
        assert!(g.equip_item("rusty_sword"));
        assert!(g.equip_item("magic_sword"));
        assert_eq!(g.weapon.as_deref(), Some("magic_sword"));
        assert!(g.inventory.contains("rusty_sword"));
        assert_eq!(g.inventory.len(), 1);
    }

    #[test]
    fn test_equip_rejects_missing_and_potions() {
        let mut g = Gladiator::new();
        assert!(!g.equip_item("rusty_sword"));
        g.inventory.add("healing_potion");
        assert!(!g.equip_item("healing_potion"));
    }

    #[test]
    fn test_unequip_needs_room() {
        let mut g = Gladiator::new();
        g.inventory.add("rusty_sword");
        g.equip_item("rusty_sword");
        for _ in 0..INVENTORY_CAPACITY {
            g.inventory.add("chain_armor");
        }
        assert!(!g.unequip_weapon());
        g.inventory.remove("chain_armor");
        assert!(g.unequip_weapon());
        assert!(g.weapon.is_none());
        assert!(g.inventory.contains("rusty_sword"));
    }

    #[test]
    fn test_buy_gear_and_potion() {
        let mut g = Gladiator::new();
        assert!(g.buy_gear("arena_leather_armor")); // 40
        assert_eq!(g.gold, 10);
        assert!(!g.buy_gear("rusty_sword")); // 50, can't afford
        assert_eq!(g.gold, 10);
        assert!(!g.buy_potion()); // 20, can't afford
        g.gold = 25;
        assert!(g.buy_potion());
        assert_eq!(g.potions, 4);
        assert_eq!(g.gold, 5);
    }

    #[test]
    fn test_buy_gear_rejects_consumables() {
        let mut g = Gladiator::new();
        g.gold = 1000;
        assert!(!g.buy_gear("healing_potion"));
        assert_eq!(g.gold, 1000);
    }

    #[test]
    fn test_apply_level_up_requires_pending_flag() {
        let mut g = Gladiator::new();
        assert!(!g.apply_level_up(LevelUpChoice::Strength));
        g.exp = 120;
        g.pending_level_up = true;
        assert!(g.apply_level_up(LevelUpChoice::Strength));
        assert_eq!(g.level, 2);
        assert_eq!(g.strength, 11);
        assert_eq!(g.exp, 20);
        assert_eq!(g.exp_max, 120); // 100 * 1.2
        assert!(!g.pending_level_up);
    }

    #[test]
    fn test_level_up_max_hp_heals_too() {
        let mut g = Gladiator::new();
        g.hp = 50;
        g.exp = 100;
        g.pending_level_up = true;
        g.apply_level_up(LevelUpChoice::MaxHp);
        assert_eq!(g.max_hp, 110);
        assert_eq!(g.hp, 60);
    }

    #[test]
    fn test_serde_round_trip_with_default_field() {
        let mut g = Gladiator::new();
        g.champion_defeated = true;
        let json = serde_json::to_string(&g).unwrap();
        let loaded: Gladiator = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, g);

        // Older payloads without the champion flag still load.
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value.as_object_mut().unwrap().remove("champion_defeated");
        let old: Gladiator = serde_json::from_value(value).unwrap();
        assert!(!old.champion_defeated);
    }
}
