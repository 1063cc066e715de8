//! The adventure game loop: menu-driven travel, shopping, exploration,
//! and the combat mode switch.

use super::state::GameState;
use crate::combat::{
    attempt_flee, player_attack, player_dodge, CombatEvent, CombatSession,
};
use crate::core::constants::ADVENTURE_SAVE_KEY;
use crate::items::{get_item, shop_stock, ConsumableEffect, EquipSlot};
use crate::monsters::get_monster;
use crate::save::SaveStore;
use crate::character::StatKind;
use crate::world::{get_area, roll_exploration, ActionKind, Area, AreaAction, ExploreEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;

const HUB_AREA: &str = "shelter";

/// What the player is currently doing. Gates which intents are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Exploring,
    ShopBrowsing,
    InCombat,
}

/// Owns all adventure state and drives it from player intents.
pub struct Game {
    state: GameState,
    mode: Mode,
    session: Option<CombatSession>,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Self {
        Self::from_state(GameState::new(), StdRng::from_entropy())
    }

    pub fn from_state(state: GameState, rng: StdRng) -> Self {
        Self {
            state,
            mode: Mode::Exploring,
            session: None,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> Option<&CombatSession> {
        self.session.as_ref()
    }

    pub fn current_area(&self) -> &'static Area {
        // The current area id only ever comes from the static area table.
        get_area(&self.state.player.current_area).unwrap_or_else(|| {
            get_area(HUB_AREA).expect("hub area must exist")
        })
    }

    /// Menu entries legal right now: the current area's actions whose
    /// gates pass.
    pub fn available_actions(&self) -> Vec<&AreaAction> {
        self.current_area()
            .available_actions(&self.state.player, &self.state.progress)
            .collect()
    }

    fn available_action(&self, action_id: &str) -> Option<&'static AreaAction> {
        let action = self.current_area().action(action_id)?;
        let met = action
            .requirement
            .map_or(true, |req| req.is_met(&self.state.player, &self.state.progress));
        met.then_some(action)
    }

    /// Travels along one of the current area's exits.
    pub fn travel(&mut self, action_id: &str) -> bool {
        if self.mode != Mode::Exploring {
            return false;
        }
        let Some(action) = self.available_action(action_id) else {
            return false;
        };
        let ActionKind::Travel { target } = action.kind else {
            return false;
        };
        self.state.player.current_area = target.to_string();
        if !self.state.progress.unlocked_areas.iter().any(|a| a == target) {
            self.state.progress.unlocked_areas.push(target.to_string());
        }
        true
    }

    /// Rests at the hub, restoring full HP.
    pub fn rest(&mut self) -> bool {
        if self.mode != Mode::Exploring {
            return false;
        }
        let Some(action) = self.available_action("rest") else {
            return false;
        };
        if action.kind != ActionKind::Rest {
            return false;
        }
        self.state.player.restore_full_hp();
        true
    }

    pub fn enter_shop(&mut self) -> bool {
        if self.mode != Mode::Exploring {
            return false;
        }
        let Some(action) = self.available_action("shop") else {
            return false;
        };
        if action.kind != ActionKind::Shop {
            return false;
        }
        self.mode = Mode::ShopBrowsing;
        true
    }

    pub fn leave_shop(&mut self) -> bool {
        if self.mode != Mode::ShopBrowsing {
            return false;
        }
        self.mode = Mode::Exploring;
        true
    }

    /// Buys one of the merchant's stocked items.
    pub fn buy(&mut self, item_id: &str) -> bool {
        if self.mode != Mode::ShopBrowsing {
            return false;
        }
        if !shop_stock().any(|item| item.id == item_id) {
            return false;
        }
        self.state.player.buy_item(item_id)
    }

    /// Equips gear from the bag. Not allowed mid-fight.
    pub fn equip(&mut self, item_id: &str) -> bool {
        self.mode != Mode::InCombat && self.state.player.equip_item(item_id)
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> bool {
        self.mode != Mode::InCombat && self.state.player.unequip(slot)
    }

    pub fn allocate_stat(&mut self, stat: StatKind) -> bool {
        self.state.player.allocate_stat(stat)
    }

    /// Uses a consumable from the bag. Healing works anywhere; a combat
    /// elixir needs an active fight, and an illegal use consumes nothing.
    pub fn use_item(&mut self, item_id: &str) -> bool {
        let Some(item) = get_item(item_id) else {
            return false;
        };
        let Some(effect) = item.effect else {
            return false;
        };
        if !self.state.player.inventory.contains(item_id) {
            return false;
        }
        match effect {
            ConsumableEffect::Heal(amount) => {
                self.state.player.inventory.remove(item_id);
                self.state.player.heal(amount);
                true
            }
            ConsumableEffect::StrengthBuff { amount, duration } => {
                let Some(session) = self.session.as_mut() else {
                    return false;
                };
                session.apply_buff(amount, duration);
                self.state.player.inventory.remove(item_id);
                true
            }
        }
    }

    /// Rolls the area's exploration table and applies the outcome: loot
    /// is collected (a full bag forfeits items), an ambush starts combat.
    pub fn explore(&mut self) -> Option<ExploreEvent> {
        if self.mode != Mode::Exploring {
            return None;
        }
        let action = self.available_action("explore")?;
        if action.kind != ActionKind::Explore {
            return None;
        }
        let event = roll_exploration(&self.state.player.current_area, &mut self.rng)?;
        match event {
            ExploreEvent::Treasure { gold, items, .. } => {
                self.state.player.gold += gold;
                for id in items {
                    self.state.player.inventory.add(id);
                }
            }
            ExploreEvent::Encounter { enemy, .. } => {
                if let Some(template) = get_monster(enemy) {
                    self.session = Some(CombatSession::new(template.spawn()));
                    self.mode = Mode::InCombat;
                }
            }
            ExploreEvent::Nothing { .. } => {}
        }
        Some(event)
    }

    /// Starts a fight from one of the area's combat actions, picking the
    /// enemy uniformly from the action's pool.
    pub fn start_hunt(&mut self, action_id: &str) -> bool {
        if self.mode != Mode::Exploring {
            return false;
        }
        let Some(action) = self.available_action(action_id) else {
            return false;
        };
        let ActionKind::Combat { enemies } = action.kind else {
            return false;
        };
        if enemies.is_empty() {
            return false;
        }
        let enemy = enemies[self.rng.gen_range(0..enemies.len())];
        let Some(template) = get_monster(enemy) else {
            return false;
        };
        self.session = Some(CombatSession::new(template.spawn()));
        self.mode = Mode::InCombat;
        true
    }

    pub fn attack(&mut self) -> Vec<CombatEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let events = player_attack(&mut self.state.player, session, &mut self.rng);
        self.settle(&events);
        events
    }

    pub fn dodge(&mut self) -> Vec<CombatEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let events = player_dodge(&mut self.state.player, session, &mut self.rng);
        self.settle(&events);
        events
    }

    pub fn flee(&mut self) -> Vec<CombatEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let events = attempt_flee(&mut self.state.player, session, &mut self.rng);
        self.settle(&events);
        events
    }

    /// Searches for the artifact that ends the quest line.
    pub fn search_artifact(&mut self) -> bool {
        if self.mode != Mode::Exploring || self.state.progress.found_artifact {
            return false;
        }
        let Some(action) = self.available_action("artifact") else {
            return false;
        };
        if action.kind != ActionKind::Quest {
            return false;
        }
        self.state.progress.found_artifact = true;
        true
    }

    /// Routes combat endings back to exploration. Defeat sends the
    /// player home and restores them; bosses are recorded on victory.
    fn settle(&mut self, events: &[CombatEvent]) {
        for event in events {
            match event {
                CombatEvent::Victory(_) => {
                    if let Some(session) = self.session.take() {
                        if session.monster.boss {
                            self.state.progress.record_boss(&session.monster.id);
                        }
                    }
                    self.mode = Mode::Exploring;
                }
                CombatEvent::Defeat => {
                    self.session = None;
                    self.state.player.current_area = HUB_AREA.to_string();
                    self.state.player.restore_full_hp();
                    self.mode = Mode::Exploring;
                }
                CombatEvent::FleeSucceeded => {
                    self.session = None;
                    self.mode = Mode::Exploring;
                }
                _ => {}
            }
        }
    }

    pub fn save_to(&self, store: &impl SaveStore) -> io::Result<()> {
        store.save(ADVENTURE_SAVE_KEY, &self.state)
    }

    /// Loads a saved game, or `None` when no valid save exists.
    pub fn load_from(store: &impl SaveStore) -> Option<Self> {
        let state: GameState = store.load(ADVENTURE_SAVE_KEY)?;
        Some(Self::from_state(state, StdRng::from_entropy()))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
