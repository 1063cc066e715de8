use crate::core::constants::*;
use crate::items::{get_item, EquipSlot, Equipment, Inventory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    Strength,
    Agility,
    Vitality,
}

/// Persistent player state for the adventure game.
///
/// IMPORTANT: When adding new fields, use `#[serde(default)]` so older
/// save payloads still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub level: u32,
    pub exp: u32,
    /// Experience threshold for the next level.
    pub max_exp: u32,
    pub gold: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub strength: u32,
    pub agility: u32,
    pub vitality: u32,
    pub stat_points: u32,
    pub equipment: Equipment,
    pub inventory: Inventory,
    pub current_area: String,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            level: 1,
            exp: 0,
            max_exp: EXP_TABLE[0],
            gold: STARTING_GOLD,
            hp: BASE_MAX_HP,
            max_hp: BASE_MAX_HP,
            strength: 10,
            agility: 10,
            vitality: 10,
            stat_points: 0,
            equipment: Equipment::new(),
            inventory: Inventory::new(),
            current_area: "shelter".to_string(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Heals up to max HP, returning the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    pub fn restore_full_hp(&mut self) {
        self.hp = self.max_hp;
    }

    fn recompute_max_hp(&mut self) {
        self.max_hp = BASE_MAX_HP + self.vitality * MAX_HP_PER_VITALITY;
    }

    /// Grants experience and applies any level-ups. Each level-up carries
    /// excess exp over, advances the threshold along the table, grants a
    /// stat point, and fully restores HP. Returns the number of levels
    /// gained.
    pub fn gain_exp(&mut self, amount: u32) -> u32 {
        self.exp += amount;
        let mut levels = 0;
        while self.exp >= self.max_exp {
            self.exp -= self.max_exp;
            self.level += 1;
            let index = ((self.level - 1) as usize).min(EXP_TABLE.len() - 1);
            self.max_exp = EXP_TABLE[index];
            self.stat_points += 1;
            self.recompute_max_hp();
            self.hp = self.max_hp;
            levels += 1;
        }
        levels
    }

    /// Spends one unspent stat point. Raising vitality grows max HP and
    /// current HP by the same amount.
    pub fn allocate_stat(&mut self, stat: StatKind) -> bool {
        if self.stat_points == 0 {
            return false;
        }
        self.stat_points -= 1;
        match stat {
            StatKind::Strength => self.strength += 1,
            StatKind::Agility => self.agility += 1,
            StatKind::Vitality => {
                self.vitality += 1;
                let old_max = self.max_hp;
                self.recompute_max_hp();
                self.hp += self.max_hp - old_max;
            }
        }
        true
    }

    /// Buys an item from the catalog: needs the gold and a free bag slot.
    /// Fails without any partial mutation.
    pub fn buy_item(&mut self, item_id: &str) -> bool {
        let Some(item) = get_item(item_id) else {
            return false;
        };
        if self.gold < item.price || self.inventory.is_full() {
            return false;
        }
        self.gold -= item.price;
        self.inventory.add(item_id);
        true
    }

    /// Equips an item out of the inventory. Any previous occupant of the
    /// slot returns to the bag; the swap is atomic so the bag never
    /// overflows and no item is lost.
    pub fn equip_item(&mut self, item_id: &str) -> bool {
        let Some(item) = get_item(item_id) else {
            return false;
        };
        let Some(slot) = EquipSlot::for_kind(item.kind) else {
            return false;
        };
        if !self.inventory.remove(item_id) {
            return false;
        }
        // The removal above freed a slot, so the displaced item always fits.
        if let Some(old) = self.equipment.swap(slot, Some(item_id.to_string())) {
            self.inventory.add(&old);
        }
        true
    }

    /// Moves the slot's occupant back into the bag; needs a free slot.
    pub fn unequip(&mut self, slot: EquipSlot) -> bool {
        if self.equipment.get(slot).is_none() || self.inventory.is_full() {
            return false;
        }
        if let Some(old) = self.equipment.swap(slot, None) {
            self.inventory.add(&old);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::INVENTORY_CAPACITY;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new();
        assert_eq!(player.level, 1);
        assert_eq!(player.exp, 0);
        assert_eq!(player.max_exp, 100);
        assert_eq!(player.gold, 100);
        assert_eq!(player.hp, 100);
        assert_eq!(player.max_hp, 100);
        assert_eq!(player.strength, 10);
        assert_eq!(player.current_area, "shelter");
    }

    #[test]
    fn test_gain_exp_single_level() {
        let mut player = Player::new();
        player.hp = 40;
        let levels = player.gain_exp(120);
        assert_eq!(levels, 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.exp, 20); // 120 - 100 carried over
        assert_eq!(player.max_exp, EXP_TABLE[1]);
        assert_eq!(player.stat_points, 1);
        assert_eq!(player.hp, player.max_hp); // full restore
    }

    #[test]
    fn test_gain_exp_multi_level() {
        let mut player = Player::new();
        // 100 + 150 = 250 to reach level 3
        let levels = player.gain_exp(260);
        assert_eq!(levels, 2);
        assert_eq!(player.level, 3);
        assert_eq!(player.exp, 10);
        assert_eq!(player.stat_points, 2);
    }

    #[test]
    fn test_exp_table_clamps_at_end() {
        let mut player = Player::new();
        player.level = 30;
        player.max_exp = *EXP_TABLE.last().unwrap();
        player.gain_exp(player.max_exp);
        assert_eq!(player.max_exp, *EXP_TABLE.last().unwrap());
    }

    #[test]
    fn test_allocate_stat_requires_points() {
        let mut player = Player::new();
        assert!(!player.allocate_stat(StatKind::Strength));
        player.stat_points = 1;
        assert!(player.allocate_stat(StatKind::Strength));
        assert_eq!(player.strength, 11);
        assert_eq!(player.stat_points, 0);
    }

    #[test]
    fn test_allocate_vitality_grows_hp() {
        let mut player = Player::new();
        player.stat_points = 1;
        player.hp = 50;
        assert!(player.allocate_stat(StatKind::Vitality));
        assert_eq!(player.vitality, 11);
        assert_eq!(player.max_hp, BASE_MAX_HP + 11 * MAX_HP_PER_VITALITY);
        // The starting max HP of 100 does not count base vitality, so the
        // first recompute jumps 100 -> 122 and current HP gains the full
        // delta of 22, not a full heal.
        assert_eq!(player.hp, 72);
    }

    #[test]
    fn test_buy_item_deducts_gold() {
        let mut player = Player::new();
        assert!(player.buy_item("iron_sword")); // 50 gold
        assert_eq!(player.gold, 50);
        assert!(player.inventory.contains("iron_sword"));
    }

    #[test]
    fn test_buy_item_insufficient_gold_is_noop() {
        let mut player = Player::new();
        player.gold = 10;
        assert!(!player.buy_item("iron_sword"));
        assert_eq!(player.gold, 10);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_buy_item_full_inventory_is_noop() {
        let mut player = Player::new();
        player.gold = 10_000;
        for _ in 0..INVENTORY_CAPACITY {
            player.inventory.add("antidote");
        }
        let gold_before = player.gold;
        assert!(!player.buy_item("iron_sword"));
        assert_eq!(player.gold, gold_before);
        assert_eq!(player.inventory.len(), INVENTORY_CAPACITY);
    }

    #[test]
    fn test_buy_unknown_item_fails() {
        let mut player = Player::new();
        assert!(!player.buy_item("excalibur"));
        assert_eq!(player.gold, 100);
    }

    #[test]
    fn test_equip_swaps_old_weapon_back() {
        let mut player = Player::new();
        player.inventory.add("iron_sword");
        player.inventory.add("steel_sword");

        assert!(player.equip_item("iron_sword"));
        assert_eq!(player.equipment.get(EquipSlot::Weapon), Some("iron_sword"));
        assert_eq!(player.inventory.len(), 1);

        assert!(player.equip_item("steel_sword"));
        assert_eq!(player.equipment.get(EquipSlot::Weapon), Some("steel_sword"));
        // Old weapon returned to the bag; nothing lost.
        assert!(player.inventory.contains("iron_sword"));
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_equip_swap_works_with_full_inventory() {
        let mut player = Player::new();
        player.inventory.add("steel_sword");
        for _ in 0..INVENTORY_CAPACITY - 1 {
            player.inventory.add("antidote");
        }
        player.equipment.swap(EquipSlot::Weapon, Some("iron_sword".into()));

        assert!(player.inventory.is_full());
        assert!(player.equip_item("steel_sword"));
        assert!(player.inventory.contains("iron_sword"));
        assert_eq!(player.inventory.len(), INVENTORY_CAPACITY);
    }

    #[test]
    fn test_equip_requires_item_in_inventory() {
        let mut player = Player::new();
        assert!(!player.equip_item("iron_sword"));
    }

    #[test]
    fn test_equip_rejects_consumables() {
        let mut player = Player::new();
        player.inventory.add("healing_potion");
        assert!(!player.equip_item("healing_potion"));
        assert!(player.inventory.contains("healing_potion"));
    }

    #[test]
    fn test_unequip_needs_room() {
        let mut player = Player::new();
        player.equipment.swap(EquipSlot::Weapon, Some("iron_sword".into()));
        for _ in 0..INVENTORY_CAPACITY {
            player.inventory.add("antidote");
        }
        assert!(!player.unequip(EquipSlot::Weapon));
        assert_eq!(player.equipment.get(EquipSlot::Weapon), Some("iron_sword"));

        player.inventory.remove("antidote");
        assert!(player.unequip(EquipSlot::Weapon));
        assert!(player.inventory.contains("iron_sword"));
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut player = Player::new();
        player.hp = 80;
        assert_eq!(player.heal(50), 20);
        assert_eq!(player.hp, player.max_hp);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut player = Player::new();
        player.gain_exp(150);
        player.inventory.add("healing_potion");
        player.equipment.swap(EquipSlot::Weapon, Some("iron_sword".into()));

        let json = serde_json::to_string(&player).unwrap();
        let loaded: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, player);
    }
}
