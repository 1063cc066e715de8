//! Monster templates and bestiaries.
//!
//! Templates are immutable static data; combat always runs against a
//! spawned [`MonsterInstance`] copy so repeated fights never mutate the
//! template.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct MonsterDef {
    pub id: &'static str,
    pub name: &'static str,
    pub max_hp: u32,
    pub attack: u32,
    pub exp: u32,
    pub gold: u32,
    /// Difficulty tier; gates the arena roster.
    pub level: u32,
    /// Chance a drop roll succeeds on defeat.
    pub drop_rate: f64,
    /// Item ids; one is picked uniformly when the drop roll succeeds.
    pub drops: &'static [&'static str],
    pub boss: bool,
}

impl MonsterDef {
    pub fn spawn(&self) -> MonsterInstance {
        MonsterInstance {
            id: self.id.to_string(),
            name: self.name.to_string(),
            max_hp: self.max_hp,
            current_hp: self.max_hp,
            attack: self.attack,
            exp: self.exp,
            gold: self.gold,
            level: self.level,
            boss: self.boss,
        }
    }
}

/// A live combat copy of a monster template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterInstance {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    pub current_hp: u32,
    pub attack: u32,
    pub exp: u32,
    pub gold: u32,
    pub level: u32,
    pub boss: bool,
}

impl MonsterInstance {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}

/// Looks up a template in either bestiary.
pub fn get_monster(id: &str) -> Option<&'static MonsterDef> {
    ADVENTURE_BESTIARY
        .iter()
        .chain(ARENA_ROSTER.iter())
        .find(|m| m.id == id)
}

/// Monsters roaming the adventure wilds.
pub fn adventure_bestiary() -> &'static [MonsterDef] {
    &ADVENTURE_BESTIARY
}

/// The arena's fixed ladder of opponents, weakest first.
pub fn arena_roster() -> &'static [MonsterDef] {
    &ARENA_ROSTER
}

static ADVENTURE_BESTIARY: [MonsterDef; 8] = [
    MonsterDef {
        id: "slime",
        name: "Slime",
        max_hp: 50,
        attack: 8,
        exp: 15,
        gold: 10,
        level: 1,
        drop_rate: 0.3,
        drops: &["healing_potion"],
        boss: false,
    },
    MonsterDef {
        id: "wolf",
        name: "Wolf",
        max_hp: 80,
        attack: 12,
        exp: 25,
        gold: 15,
        level: 2,
        drop_rate: 0.4,
        drops: &["iron_sword", "leather_armor"],
        boss: false,
    },
    MonsterDef {
        id: "spider",
        name: "Venom Spider",
        max_hp: 60,
        attack: 15,
        exp: 30,
        gold: 20,
        level: 2,
        drop_rate: 0.3,
        drops: &["antidote", "healing_potion"],
        boss: false,
    },
    MonsterDef {
        id: "skeleton",
        name: "Skeleton Soldier",
        max_hp: 120,
        attack: 20,
        exp: 50,
        gold: 30,
        level: 4,
        drop_rate: 0.5,
        drops: &["steel_sword", "bone_shield"],
        boss: false,
    },
    MonsterDef {
        id: "ghost",
        name: "Ghost",
        max_hp: 100,
        attack: 25,
        exp: 60,
        gold: 35,
        level: 5,
        drop_rate: 0.4,
        drops: &["magic_robe", "mana_potion"],
        boss: false,
    },
    MonsterDef {
        id: "golem",
        name: "Stone Golem",
        max_hp: 200,
        attack: 30,
        exp: 80,
        gold: 50,
        level: 6,
        drop_rate: 0.6,
        drops: &["steel_armor", "strength_elixir"],
        boss: false,
    },
    MonsterDef {
        id: "forest_guardian",
        name: "Forest Guardian",
        max_hp: 300,
        attack: 35,
        exp: 150,
        gold: 100,
        level: 5,
        drop_rate: 0.8,
        drops: &["guardian_sword", "forest_cloak"],
        boss: true,
    },
    MonsterDef {
        id: "ruins_guardian",
        name: "Ruins Guardian",
        max_hp: 500,
        attack: 50,
        exp: 250,
        gold: 200,
        level: 8,
        drop_rate: 0.9,
        drops: &["ancient_sword", "ruins_armor", "magic_orb"],
        boss: true,
    },
];

static ARENA_ROSTER: [MonsterDef; 5] = [
    MonsterDef {
        id: "goblin",
        name: "Goblin",
        max_hp: 50,
        attack: 8,
        exp: 25,
        gold: 10,
        level: 1,
        drop_rate: 0.0,
        drops: &[],
        boss: false,
    },
    MonsterDef {
        id: "orc",
        name: "Orc",
        max_hp: 80,
        attack: 12,
        exp: 40,
        gold: 18,
        level: 2,
        drop_rate: 0.0,
        drops: &[],
        boss: false,
    },
    MonsterDef {
        id: "skeleton_warrior",
        name: "Skeleton Warrior",
        max_hp: 120,
        attack: 15,
        exp: 60,
        gold: 25,
        level: 3,
        drop_rate: 0.0,
        drops: &[],
        boss: false,
    },
    MonsterDef {
        id: "dark_knight",
        name: "Dark Knight",
        max_hp: 200,
        attack: 25,
        exp: 100,
        gold: 50,
        level: 5,
        drop_rate: 0.0,
        drops: &[],
        boss: false,
    },
    MonsterDef {
        id: "shadow_champion",
        name: "Shadow Champion",
        max_hp: 500,
        attack: 40,
        exp: 300,
        gold: 200,
        level: 10,
        drop_rate: 0.0,
        drops: &[],
        boss: true,
    },
];
