//! # Hero State & Progression
//!
//! The mutable hero record shared by the live session and the editor's
//! initial-hero template, plus the progression calculator that converts
//! accumulated experience into levels and stat growth.

use crate::config::{LEVEL_UP_ATK, LEVEL_UP_DEF, LEVEL_UP_HP, XP_LEVEL_THRESHOLD};
use crate::{Direction, KeyColor};
use serde::{Deserialize, Serialize};

/// Counts of each key color held by the hero.
///
/// Counts are signed: custom-item deltas may be negative, and the engine
/// applies them without validation (caller responsibility).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRing {
    pub yellow: i64,
    pub blue: i64,
    pub red: i64,
}

impl KeyRing {
    /// Returns the count for one color.
    pub fn count(&self, color: KeyColor) -> i64 {
        match color {
            KeyColor::Yellow => self.yellow,
            KeyColor::Blue => self.blue,
            KeyColor::Red => self.red,
        }
    }

    /// Returns a mutable reference to the count for one color.
    pub fn count_mut(&mut self, color: KeyColor) -> &mut i64 {
        match color {
            KeyColor::Yellow => &mut self.yellow,
            KeyColor::Blue => &mut self.blue,
            KeyColor::Red => &mut self.red,
        }
    }
}

/// The hero's full mutable state.
///
/// Mutated on every engine step. `max_floor_visited` is a monotonic
/// high-water mark: it only ever increases, and only when ascending to a
/// floor index not yet seen. `floor` is always a valid index into the
/// session's floor list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroState {
    pub floor: usize,
    pub max_floor_visited: usize,
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
    pub hp: i64,
    pub atk: i64,
    pub def: i64,
    pub gold: i64,
    pub exp: i64,
    pub level: u32,
    pub keys: KeyRing,
    pub pickaxes: i64,
}

impl Default for HeroState {
    fn default() -> Self {
        Self {
            floor: 0,
            max_floor_visited: 0,
            x: 0,
            y: 0,
            facing: Direction::Up,
            hp: 1,
            atk: 0,
            def: 0,
            gold: 0,
            exp: 0,
            level: 1,
            keys: KeyRing::default(),
            pickaxes: 0,
        }
    }
}

/// Grants experience to the hero and applies any resulting level-ups.
///
/// While `exp >= XP_LEVEL_THRESHOLD * level` the threshold is subtracted and
/// the hero gains a level, +2 atk, +2 def, and +100 hp. The hp bonus raises
/// *current* hp, not a capacity; there is no hp ceiling and no level cap.
/// A single large gain may trigger several level-ups. Returns one log
/// message per level gained.
///
/// # Examples
///
/// ```
/// use magetower::{grant_exp, HeroState};
///
/// let mut hero = HeroState { level: 1, exp: 0, ..HeroState::default() };
/// let messages = grant_exp(&mut hero, 120);
/// // 120 - 50*1 = 70 (level 2); 70 < 50*2, loop stops.
/// assert_eq!(hero.level, 2);
/// assert_eq!(hero.exp, 70);
/// assert_eq!(messages.len(), 1);
/// ```
pub fn grant_exp(hero: &mut HeroState, gained: i64) -> Vec<String> {
    hero.exp += gained;

    let mut messages = Vec::new();
    while hero.exp >= XP_LEVEL_THRESHOLD * i64::from(hero.level) {
        hero.exp -= XP_LEVEL_THRESHOLD * i64::from(hero.level);
        hero.level += 1;
        hero.atk += LEVEL_UP_ATK;
        hero.def += LEVEL_UP_DEF;
        hero.hp += LEVEL_UP_HP;
        messages.push(format!("Level Up! You are now level {}.", hero.level));
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_hero() -> HeroState {
        HeroState {
            hp: 1000,
            atk: 10,
            def: 10,
            level: 1,
            exp: 0,
            ..HeroState::default()
        }
    }

    #[test]
    fn test_literal_threshold_scenario() {
        // level=1, exp=0, threshold=50; gaining 120 exp:
        // 120 -> subtract 50*1 -> 70, level 2; 70 < 50*2, stop.
        let mut hero = fresh_hero();
        let messages = grant_exp(&mut hero, 120);

        assert_eq!(hero.level, 2);
        assert_eq!(hero.exp, 70);
        assert_eq!(hero.atk, 12);
        assert_eq!(hero.def, 12);
        assert_eq!(hero.hp, 1100);
        assert_eq!(messages, vec!["Level Up! You are now level 2.".to_string()]);
    }

    #[test]
    fn test_multiple_level_ups_from_one_gain() {
        // 50*1 + 50*2 + 50*3 = 300 reaches level 4 exactly.
        let mut hero = fresh_hero();
        let messages = grant_exp(&mut hero, 300);

        assert_eq!(hero.level, 4);
        assert_eq!(hero.exp, 0);
        assert_eq!(hero.atk, 16);
        assert_eq!(hero.def, 16);
        assert_eq!(hero.hp, 1300);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2], "Level Up! You are now level 4.");
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut hero = fresh_hero();
        let messages = grant_exp(&mut hero, 49);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.exp, 49);
        assert!(messages.is_empty());
        assert_eq!(hero.hp, 1000);
    }

    #[test]
    fn test_key_ring_accessors() {
        let mut keys = KeyRing {
            yellow: 1,
            blue: 2,
            red: 3,
        };
        assert_eq!(keys.count(KeyColor::Yellow), 1);
        assert_eq!(keys.count(KeyColor::Blue), 2);
        *keys.count_mut(KeyColor::Red) -= 1;
        assert_eq!(keys.red, 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Leveling conserves experience: total exp in equals exp spent
            /// on thresholds plus the leftover.
            #[test]
            fn exp_is_conserved(gained in 0i64..100_000) {
                let mut hero = fresh_hero();
                grant_exp(&mut hero, gained);

                let spent: i64 = (1..hero.level)
                    .map(|l| crate::config::XP_LEVEL_THRESHOLD * i64::from(l))
                    .sum();
                prop_assert_eq!(spent + hero.exp, gained);
                prop_assert!(
                    hero.exp < crate::config::XP_LEVEL_THRESHOLD * i64::from(hero.level)
                );
            }

            /// Stat growth is exactly linear in levels gained.
            #[test]
            fn growth_matches_levels(gained in 0i64..100_000) {
                let mut hero = fresh_hero();
                grant_exp(&mut hero, gained);

                let ups = i64::from(hero.level - 1);
                prop_assert_eq!(hero.atk, 10 + 2 * ups);
                prop_assert_eq!(hero.def, 10 + 2 * ups);
                prop_assert_eq!(hero.hp, 1000 + 100 * ups);
            }
        }
    }
}
