//! Static item catalog covering both the adventure hub and the arena.

use super::types::{ConsumableEffect, ItemDef, ItemKind};

/// Returns every item definition in the game.
pub fn all_items() -> &'static [ItemDef] {
    &CATALOG
}

/// Looks up an item definition by id.
pub fn get_item(id: &str) -> Option<&'static ItemDef> {
    CATALOG.iter().find(|item| item.id == id)
}

/// Items stocked by the hub merchant.
pub fn shop_stock() -> impl Iterator<Item = &'static ItemDef> {
    SHOP_STOCK.iter().filter_map(|id| get_item(id))
}

/// Gear sold (and dropped) in the arena. The arena has its own gear
/// ladder, cheaper and flatter than the adventure loot.
pub fn arena_gear() -> impl Iterator<Item = &'static ItemDef> {
    ARENA_GEAR.iter().filter_map(|id| get_item(id))
}

const SHOP_STOCK: [&str; 8] = [
    "iron_sword",
    "steel_sword",
    "leather_armor",
    "steel_armor",
    "magic_robe",
    "bone_shield",
    "healing_potion",
    "strength_elixir",
];

const ARENA_GEAR: [&str; 8] = [
    "rusty_sword",
    "arena_iron_sword",
    "silver_sword",
    "magic_sword",
    "arena_leather_armor",
    "chain_armor",
    "plate_armor",
    "magic_armor",
];

static CATALOG: [ItemDef; 23] = [
    // Adventure weapons
    ItemDef {
        id: "iron_sword",
        name: "Iron Sword",
        kind: ItemKind::Weapon,
        attack: 10,
        defense: 0,
        price: 50,
        effect: None,
        description: "A basic iron blade.",
    },
    ItemDef {
        id: "steel_sword",
        name: "Steel Sword",
        kind: ItemKind::Weapon,
        attack: 20,
        defense: 0,
        price: 100,
        effect: None,
        description: "A sturdy sword of tempered steel.",
    },
    ItemDef {
        id: "guardian_sword",
        name: "Guardian's Sword",
        kind: ItemKind::Weapon,
        attack: 35,
        defense: 0,
        price: 200,
        effect: None,
        description: "A sacred blade carried by the forest guardian.",
    },
    ItemDef {
        id: "ancient_sword",
        name: "Ancient Sword",
        kind: ItemKind::Weapon,
        attack: 50,
        defense: 0,
        price: 500,
        effect: None,
        description: "A legendary sword forged by a lost civilization.",
    },
    // Adventure armor
    ItemDef {
        id: "leather_armor",
        name: "Leather Armor",
        kind: ItemKind::Armor,
        attack: 0,
        defense: 8,
        price: 40,
        effect: None,
        description: "Light and flexible leather armor.",
    },
    ItemDef {
        id: "steel_armor",
        name: "Steel Armor",
        kind: ItemKind::Armor,
        attack: 0,
        defense: 15,
        price: 80,
        effect: None,
        description: "Solid plate of forged steel.",
    },
    ItemDef {
        id: "forest_cloak",
        name: "Forest Cloak",
        kind: ItemKind::Armor,
        attack: 0,
        defense: 20,
        price: 150,
        effect: None,
        description: "A mysterious cloak imbued with nature's strength.",
    },
    ItemDef {
        id: "ruins_armor",
        name: "Ruins Armor",
        kind: ItemKind::Armor,
        attack: 0,
        defense: 30,
        price: 300,
        effect: None,
        description: "Enchanted armor unearthed from the ancient ruins.",
    },
    ItemDef {
        id: "magic_robe",
        name: "Magic Robe",
        kind: ItemKind::Armor,
        attack: 0,
        defense: 12,
        price: 90,
        effect: None,
        description: "A robe once worn by a court mage.",
    },
    // Shields
    ItemDef {
        id: "bone_shield",
        name: "Bone Shield",
        kind: ItemKind::Shield,
        attack: 0,
        defense: 10,
        price: 60,
        effect: None,
        description: "A shield of hardened bone.",
    },
    ItemDef {
        id: "magic_orb",
        name: "Magic Orb",
        kind: ItemKind::Shield,
        attack: 0,
        defense: 25,
        price: 400,
        effect: None,
        description: "An orb that deflects blows with a shimmering ward.",
    },
    // Consumables
    ItemDef {
        id: "healing_potion",
        name: "Healing Potion",
        kind: ItemKind::Consumable,
        attack: 0,
        defense: 0,
        price: 30,
        effect: Some(ConsumableEffect::Heal(50)),
        description: "Restores 50 HP.",
    },
    ItemDef {
        id: "antidote",
        name: "Antidote",
        kind: ItemKind::Consumable,
        attack: 0,
        defense: 0,
        price: 15,
        effect: Some(ConsumableEffect::Heal(20)),
        description: "Neutralizes venom and mends 20 HP.",
    },
    ItemDef {
        id: "mana_potion",
        name: "Mana Potion",
        kind: ItemKind::Consumable,
        attack: 0,
        defense: 0,
        price: 25,
        effect: Some(ConsumableEffect::Heal(30)),
        description: "A restorative draught. Mends 30 HP.",
    },
    ItemDef {
        id: "strength_elixir",
        name: "Strength Elixir",
        kind: ItemKind::Consumable,
        attack: 0,
        defense: 0,
        price: 45,
        effect: Some(ConsumableEffect::StrengthBuff {
            amount: 10,
            duration: 3,
        }),
        description: "+10 attack for the next 3 turns.",
    },
    // Arena gear ladder
    ItemDef {
        id: "rusty_sword",
        name: "Rusty Sword",
        kind: ItemKind::Weapon,
        attack: 3,
        defense: 0,
        price: 50,
        effect: None,
        description: "Better than bare fists. Barely.",
    },
    ItemDef {
        id: "arena_iron_sword",
        name: "Arena Iron Sword",
        kind: ItemKind::Weapon,
        attack: 7,
        defense: 0,
        price: 150,
        effect: None,
        description: "Standard-issue gladiator steel.",
    },
    ItemDef {
        id: "silver_sword",
        name: "Silver Sword",
        kind: ItemKind::Weapon,
        attack: 12,
        defense: 0,
        price: 300,
        effect: None,
        description: "A polished blade favored by champions.",
    },
    ItemDef {
        id: "magic_sword",
        name: "Magic Sword",
        kind: ItemKind::Weapon,
        attack: 18,
        defense: 0,
        price: 500,
        effect: None,
        description: "A blade humming with arcane power.",
    },
    ItemDef {
        id: "arena_leather_armor",
        name: "Arena Leather Armor",
        kind: ItemKind::Armor,
        attack: 0,
        defense: 2,
        price: 40,
        effect: None,
        description: "Light padding for quick fighters.",
    },
    ItemDef {
        id: "chain_armor",
        name: "Chain Armor",
        kind: ItemKind::Armor,
        attack: 0,
        defense: 5,
        price: 120,
        effect: None,
        description: "Linked rings that turn aside glancing blows.",
    },
    ItemDef {
        id: "plate_armor",
        name: "Plate Armor",
        kind: ItemKind::Armor,
        attack: 0,
        defense: 10,
        price: 250,
        effect: None,
        description: "Heavy plates for those who stand and fight.",
    },
    ItemDef {
        id: "magic_armor",
        name: "Magic Armor",
        kind: ItemKind::Armor,
        attack: 0,
        defense: 15,
        price: 400,
        effect: None,
        description: "Enchanted mail, light as cloth and hard as stone.",
    },
];
