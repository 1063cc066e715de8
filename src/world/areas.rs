//! Area definitions and the requirement gate.

use crate::character::Player;
use serde::{Deserialize, Serialize};

/// Progress flags shared by area gating and the quest line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub unlocked_areas: Vec<String>,
    pub defeated_bosses: Vec<String>,
    pub found_artifact: bool,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            unlocked_areas: vec!["shelter".to_string(), "forest".to_string()],
            defeated_bosses: Vec::new(),
            found_artifact: false,
        }
    }

    pub fn record_boss(&mut self, monster_id: &str) {
        if !self.defeated_bosses.iter().any(|b| b == monster_id) {
            self.defeated_bosses.push(monster_id.to_string());
        }
    }

    pub fn has_defeated(&self, monster_id: &str) -> bool {
        self.defeated_bosses.iter().any(|b| b == monster_id)
    }
}

/// Gate on an area action. A pure predicate over player and progress
/// state; a failed gate hides the action rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    MinLevel(u32),
    HasItem(&'static str),
    BossDefeated(&'static str),
}

impl Requirement {
    pub fn is_met(&self, player: &Player, progress: &Progress) -> bool {
        match self {
            Requirement::MinLevel(level) => player.level >= *level,
            Requirement::HasItem(item_id) => player.inventory.contains(item_id),
            Requirement::BossDefeated(monster_id) => progress.has_defeated(monster_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionKind {
    Shop,
    Rest,
    Travel { target: &'static str },
    Explore,
    Combat { enemies: &'static [&'static str] },
    Quest,
}

#[derive(Debug, Clone)]
pub struct AreaAction {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ActionKind,
    pub requirement: Option<Requirement>,
}

#[derive(Debug, Clone)]
pub struct Area {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub actions: &'static [AreaAction],
}

impl Area {
    /// Actions whose gates pass for this player. Hidden, not disabled.
    pub fn available_actions<'a>(
        &'a self,
        player: &'a Player,
        progress: &'a Progress,
    ) -> impl Iterator<Item = &'a AreaAction> {
        self.actions.iter().filter(move |action| {
            action
                .requirement
                .map_or(true, |req| req.is_met(player, progress))
        })
    }

    pub fn action(&self, action_id: &str) -> Option<&'static AreaAction> {
        self.actions.iter().find(|a| a.id == action_id)
    }
}

pub fn get_area(id: &str) -> Option<&'static Area> {
    AREAS.iter().find(|area| area.id == id)
}

pub fn get_all_areas() -> &'static [Area] {
    &AREAS
}

static AREAS: [Area; 3] = [
    Area {
        id: "shelter",
        name: "Quiet Shelter",
        description: "The last safe settlement. Trade with the merchant or set out for the wilds.",
        actions: &[
            AreaAction {
                id: "shop",
                label: "Trade with the merchant",
                kind: ActionKind::Shop,
                requirement: None,
            },
            AreaAction {
                id: "rest",
                label: "Rest (restore HP)",
                kind: ActionKind::Rest,
                requirement: None,
            },
            AreaAction {
                id: "forest",
                label: "Head to the Forsaken Forest",
                kind: ActionKind::Travel { target: "forest" },
                requirement: None,
            },
            AreaAction {
                id: "ruins",
                label: "Head to the Ancient Ruins",
                kind: ActionKind::Travel { target: "ruins" },
                requirement: Some(Requirement::MinLevel(3)),
            },
        ],
    },
    Area {
        id: "forest",
        name: "Forsaken Forest",
        description: "Once beautiful, now crawling with monsters. Experience and loot await.",
        actions: &[
            AreaAction {
                id: "explore",
                label: "Explore the forest",
                kind: ActionKind::Explore,
                requirement: None,
            },
            AreaAction {
                id: "hunt",
                label: "Hunt monsters",
                kind: ActionKind::Combat {
                    enemies: &["slime", "wolf", "spider"],
                },
                requirement: None,
            },
            AreaAction {
                id: "boss",
                label: "Challenge the Forest Guardian",
                kind: ActionKind::Combat {
                    enemies: &["forest_guardian"],
                },
                requirement: Some(Requirement::MinLevel(5)),
            },
            AreaAction {
                id: "return",
                label: "Return to the Quiet Shelter",
                kind: ActionKind::Travel { target: "shelter" },
                requirement: None,
            },
        ],
    },
    Area {
        id: "ruins",
        name: "Ancient Ruins",
        description: "A mysterious site of a forgotten civilization. Strong monsters guard its treasures.",
        actions: &[
            AreaAction {
                id: "explore",
                label: "Survey the ruins",
                kind: ActionKind::Explore,
                requirement: None,
            },
            AreaAction {
                id: "hunt",
                label: "Fight the ruins' monsters",
                kind: ActionKind::Combat {
                    enemies: &["skeleton", "ghost", "golem"],
                },
                requirement: None,
            },
            AreaAction {
                id: "boss",
                label: "Challenge the Ruins Guardian",
                kind: ActionKind::Combat {
                    enemies: &["ruins_guardian"],
                },
                requirement: Some(Requirement::MinLevel(8)),
            },
            AreaAction {
                id: "artifact",
                label: "Search for the magic artifact",
                kind: ActionKind::Quest,
                requirement: Some(Requirement::MinLevel(10)),
            },
            AreaAction {
                id: "return",
                label: "Return to the Quiet Shelter",
                kind: ActionKind::Travel { target: "shelter" },
                requirement: None,
            },
        ],
    },
];
