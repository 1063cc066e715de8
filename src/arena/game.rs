//! The arena game loop: screen navigation, bout scheduling, and the
//! wall-clock-to-tick bridge.

use super::combat::{
    advance_tick, player_attack, player_defend, player_skill, use_potion, ArenaCombat, ArenaEvent,
};
use super::state::{Gladiator, LevelUpChoice};
use crate::core::constants::*;
use crate::monsters::{arena_roster, MonsterDef};
use crate::save::SaveStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

/// Where the player currently is in the arena UI flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Lobby,
    MonsterSelect,
    Equipment,
    Shop,
    Combat,
    /// A won bout banked enough exp; a stat must be chosen before
    /// anything else.
    LevelUp,
}

/// Rough danger estimate shown next to each opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

#[derive(Debug, Clone, Copy)]
pub struct OpponentChoice {
    pub monster: &'static MonsterDef,
    pub difficulty: Difficulty,
}

/// Owns all arena state and drives it from player intents plus elapsed
/// wall-clock time.
pub struct ArenaGame {
    gladiator: Gladiator,
    screen: Screen,
    combat: Option<ArenaCombat>,
    rng: StdRng,
    tick_accumulator: f64,
}

impl ArenaGame {
    pub fn new() -> Self {
        Self::from_state(Gladiator::new(), StdRng::from_entropy())
    }

    pub fn from_state(gladiator: Gladiator, rng: StdRng) -> Self {
        let screen = if gladiator.pending_level_up {
            Screen::LevelUp
        } else {
            Screen::Lobby
        };
        Self {
            gladiator,
            screen,
            combat: None,
            rng,
            tick_accumulator: 0.0,
        }
    }

    pub fn gladiator(&self) -> &Gladiator {
        &self.gladiator
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn combat(&self) -> Option<&ArenaCombat> {
        self.combat.as_ref()
    }

    // Lobby navigation. Combat and the level-up choice cannot be walked
    // away from.

    pub fn open_monster_select(&mut self) -> bool {
        self.navigate(Screen::MonsterSelect)
    }

    pub fn open_equipment(&mut self) -> bool {
        self.navigate(Screen::Equipment)
    }

    pub fn open_shop(&mut self) -> bool {
        self.navigate(Screen::Shop)
    }

    pub fn back_to_lobby(&mut self) -> bool {
        if matches!(
            self.screen,
            Screen::MonsterSelect | Screen::Equipment | Screen::Shop
        ) {
            self.screen = Screen::Lobby;
            true
        } else {
            false
        }
    }

    fn navigate(&mut self, target: Screen) -> bool {
        if self.screen == Screen::Lobby {
            self.screen = target;
            true
        } else {
            false
        }
    }

    /// Opponents the fighter may challenge, capped at two levels above
    /// their own.
    pub fn available_opponents(&self) -> Vec<OpponentChoice> {
        let level = self.gladiator.level;
        arena_roster()
            .iter()
            .filter(|m| m.level <= level + ARENA_ROSTER_LEVEL_WINDOW)
            .map(|monster| OpponentChoice {
                monster,
                difficulty: if monster.level <= level {
                    Difficulty::Easy
                } else if monster.level == level + 1 {
                    Difficulty::Normal
                } else {
                    Difficulty::Hard
                },
            })
            .collect()
    }

    /// Starts a bout against a selected opponent.
    pub fn start_fight(&mut self, monster_id: &str) -> bool {
        if self.screen != Screen::MonsterSelect {
            return false;
        }
        let Some(choice) = self
            .available_opponents()
            .into_iter()
            .find(|c| c.monster.id == monster_id)
        else {
            return false;
        };
        // Every bout starts fresh; the defeat penalty is the gold tax.
        self.gladiator.restore_full_hp();
        self.combat = Some(ArenaCombat::new(choice.monster.spawn()));
        self.tick_accumulator = 0.0;
        self.screen = Screen::Combat;
        true
    }

    /// Advances combat by `dt` seconds of wall-clock time, stepping the
    /// fixed-rate tick as many times as fit. Leftover time carries over
    /// to the next call. Stops early if the bout ends mid-window.
    pub fn advance(&mut self, dt: f64) -> Vec<ArenaEvent> {
        if self.screen != Screen::Combat {
            return Vec::new();
        }
        self.tick_accumulator += dt;
        let tick_seconds = TICK_INTERVAL_MS as f64 / 1000.0;

        let mut events = Vec::new();
        while self.tick_accumulator >= tick_seconds {
            self.tick_accumulator -= tick_seconds;
            let Some(combat) = self.combat.as_mut() else {
                break;
            };
            let batch = advance_tick(&mut self.gladiator, combat, &mut self.rng);
            let ended = batch
                .iter()
                .any(|e| matches!(e, ArenaEvent::Victory(_) | ArenaEvent::Defeat { .. }));
            events.extend(batch);
            if ended {
                break;
            }
        }
        self.settle(&events);
        events
    }

    pub fn attack(&mut self) -> Vec<ArenaEvent> {
        let Some(combat) = self.combat.as_mut() else {
            return Vec::new();
        };
        let events = player_attack(&mut self.gladiator, combat, &mut self.rng);
        self.settle(&events);
        events
    }

    pub fn defend(&mut self) -> Vec<ArenaEvent> {
        let Some(combat) = self.combat.as_mut() else {
            return Vec::new();
        };
        player_defend(combat)
    }

    pub fn skill(&mut self) -> Vec<ArenaEvent> {
        let Some(combat) = self.combat.as_mut() else {
            return Vec::new();
        };
        let events = player_skill(&mut self.gladiator, combat, &mut self.rng);
        self.settle(&events);
        events
    }

    pub fn drink_potion(&mut self) -> Vec<ArenaEvent> {
        let Some(combat) = self.combat.as_mut() else {
            return Vec::new();
        };
        use_potion(&mut self.gladiator, combat)
    }

    /// Tears down a finished bout and routes to the next screen.
    fn settle(&mut self, events: &[ArenaEvent]) {
        for event in events {
            match event {
                ArenaEvent::Victory(_) => {
                    self.combat = None;
                    self.screen = if self.gladiator.pending_level_up {
                        Screen::LevelUp
                    } else {
                        Screen::Lobby
                    };
                }
                ArenaEvent::Defeat { .. } => {
                    self.combat = None;
                    self.screen = Screen::Lobby;
                }
                _ => {}
            }
        }
    }

    // Shop screen.

    pub fn buy_gear(&mut self, item_id: &str) -> bool {
        self.screen == Screen::Shop && self.gladiator.buy_gear(item_id)
    }

    pub fn buy_potion(&mut self) -> bool {
        self.screen == Screen::Shop && self.gladiator.buy_potion()
    }

    // Equipment screen.

    pub fn equip(&mut self, item_id: &str) -> bool {
        self.screen == Screen::Equipment && self.gladiator.equip_item(item_id)
    }

    pub fn unequip_weapon(&mut self) -> bool {
        self.screen == Screen::Equipment && self.gladiator.unequip_weapon()
    }

    pub fn unequip_armor(&mut self) -> bool {
        self.screen == Screen::Equipment && self.gladiator.unequip_armor()
    }

    /// Spends the banked level-up and returns to the lobby.
    pub fn choose_level_up(&mut self, choice: LevelUpChoice) -> bool {
        if self.screen != Screen::LevelUp {
            return false;
        }
        if self.gladiator.apply_level_up(choice) {
            self.screen = Screen::Lobby;
            true
        } else {
            false
        }
    }

    pub fn save_to(&self, store: &impl SaveStore) -> io::Result<()> {
        store.save(ARENA_SAVE_KEY, &self.gladiator)
    }

    /// Loads a saved fighter, or `None` when no valid save exists.
    pub fn load_from(store: &impl SaveStore) -> Option<Self> {
        let gladiator: Gladiator = store.load(ARENA_SAVE_KEY)?;
        Some(Self::from_state(gladiator, StdRng::from_entropy()))
    }
}

impl Default for ArenaGame {
    fn default() -> Self {
        Self::new()
    }
}
