use crate::monsters::MonsterInstance;
use serde::{Deserialize, Serialize};

/// Temporary attack bonus from a consumable, counted in player turns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveBuff {
    pub amount: u32,
    pub remaining_turns: u32,
}

/// Transient state for one adventure fight. Created at combat start and
/// discarded on victory, defeat, or a successful flee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatSession {
    pub monster: MonsterInstance,
    pub turn: u32,
    /// Set by a perfect dodge; the next attack deals 1.5x damage.
    pub perfect_dodge_next: bool,
    pub buff: Option<ActiveBuff>,
}

impl CombatSession {
    pub fn new(monster: MonsterInstance) -> Self {
        Self {
            monster,
            turn: 1,
            perfect_dodge_next: false,
            buff: None,
        }
    }

    /// Flat attack bonus from the active buff, if any.
    pub fn buff_bonus(&self) -> u32 {
        self.buff.map_or(0, |b| b.amount)
    }

    pub fn apply_buff(&mut self, amount: u32, duration: u32) {
        self.buff = Some(ActiveBuff {
            amount,
            remaining_turns: duration,
        });
    }

    /// Burns one turn off the active buff, clearing it at zero.
    pub fn tick_buff(&mut self) {
        if let Some(buff) = &mut self.buff {
            buff.remaining_turns = buff.remaining_turns.saturating_sub(1);
            if buff.remaining_turns == 0 {
                self.buff = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monsters::get_monster;

    fn session() -> CombatSession {
        CombatSession::new(get_monster("slime").unwrap().spawn())
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session();
        assert_eq!(s.turn, 1);
        assert!(!s.perfect_dodge_next);
        assert!(s.buff.is_none());
        assert_eq!(s.buff_bonus(), 0);
    }

    #[test]
    fn test_buff_expires_after_duration() {
        let mut s = session();
        s.apply_buff(10, 2);
        assert_eq!(s.buff_bonus(), 10);
        s.tick_buff();
        assert_eq!(s.buff_bonus(), 10);
        s.tick_buff();
        assert_eq!(s.buff_bonus(), 0);
        assert!(s.buff.is_none());
    }

    #[test]
    fn test_reapplying_buff_resets_duration() {
        let mut s = session();
        s.apply_buff(10, 3);
        s.tick_buff();
        s.apply_buff(10, 3);
        assert_eq!(s.buff.unwrap().remaining_turns, 3);
    }
}
