use super::types::ItemKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Shield,
}

impl EquipSlot {
    /// The slot an item kind equips into, if any.
    pub fn for_kind(kind: ItemKind) -> Option<EquipSlot> {
        match kind {
            ItemKind::Weapon => Some(EquipSlot::Weapon),
            ItemKind::Armor => Some(EquipSlot::Armor),
            ItemKind::Shield => Some(EquipSlot::Shield),
            ItemKind::Consumable => None,
        }
    }
}

/// Equipped item ids by slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub shield: Option<String>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&str> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_deref(),
            EquipSlot::Armor => self.armor.as_deref(),
            EquipSlot::Shield => self.shield.as_deref(),
        }
    }

    /// Replaces the slot's occupant, returning the previous item id.
    pub fn swap(&mut self, slot: EquipSlot, item_id: Option<String>) -> Option<String> {
        match slot {
            EquipSlot::Weapon => std::mem::replace(&mut self.weapon, item_id),
            EquipSlot::Armor => std::mem::replace(&mut self.armor, item_id),
            EquipSlot::Shield => std::mem::replace(&mut self.shield, item_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_for_kind() {
        assert_eq!(
            EquipSlot::for_kind(ItemKind::Weapon),
            Some(EquipSlot::Weapon)
        );
        assert_eq!(EquipSlot::for_kind(ItemKind::Armor), Some(EquipSlot::Armor));
        assert_eq!(
            EquipSlot::for_kind(ItemKind::Shield),
            Some(EquipSlot::Shield)
        );
        assert_eq!(EquipSlot::for_kind(ItemKind::Consumable), None);
    }

    #[test]
    fn test_swap_returns_previous() {
        let mut eq = Equipment::new();
        assert_eq!(eq.swap(EquipSlot::Weapon, Some("iron_sword".into())), None);
        let old = eq.swap(EquipSlot::Weapon, Some("steel_sword".into()));
        assert_eq!(old.as_deref(), Some("iron_sword"));
        assert_eq!(eq.get(EquipSlot::Weapon), Some("steel_sword"));
    }

    #[test]
    fn test_swap_to_empty_unequips() {
        let mut eq = Equipment::new();
        eq.swap(EquipSlot::Shield, Some("bone_shield".into()));
        let old = eq.swap(EquipSlot::Shield, None);
        assert_eq!(old.as_deref(), Some("bone_shield"));
        assert_eq!(eq.get(EquipSlot::Shield), None);
    }
}
