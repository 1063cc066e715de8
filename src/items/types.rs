use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Shield,
    Consumable,
}

/// Effect applied when a consumable is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsumableEffect {
    /// Restore up to this much HP, clamped to max HP.
    Heal(u32),
    /// Flat attack bonus for a number of the player's combat turns.
    StrengthBuff { amount: u32, duration: u32 },
}

/// Static item definition. Player state references items by id; the
/// definitions themselves never change at runtime.
#[derive(Debug, Clone)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
    /// Weapon attack bonus (0 for everything else).
    pub attack: u32,
    /// Armor/shield defense bonus (0 for everything else).
    pub defense: u32,
    pub price: u32,
    pub effect: Option<ConsumableEffect>,
    pub description: &'static str,
}

impl ItemDef {
    pub fn is_equippable(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::Weapon | ItemKind::Armor | ItemKind::Shield
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equippable_kinds() {
        let mut item = ItemDef {
            id: "x",
            name: "X",
            kind: ItemKind::Weapon,
            attack: 1,
            defense: 0,
            price: 1,
            effect: None,
            description: "",
        };
        assert!(item.is_equippable());
        item.kind = ItemKind::Armor;
        assert!(item.is_equippable());
        item.kind = ItemKind::Shield;
        assert!(item.is_equippable());
        item.kind = ItemKind::Consumable;
        assert!(!item.is_equippable());
    }
}
