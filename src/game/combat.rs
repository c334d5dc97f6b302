//! # Combat Resolver
//!
//! Deterministic one-shot battle resolution. There is no randomness, no
//! multi-turn input, and no retreat: a single call decides the entire
//! encounter from the hero's and monster's stats.

use crate::hero::HeroState;
use serde::{Deserialize, Serialize};

/// Immutable stat template for a monster.
///
/// One instance exists per tile id meaning "this square currently holds this
/// monster"; defeating it clears the tile and it does not respawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterStats {
    pub name: String,
    pub hp: i64,
    pub atk: i64,
    pub def: i64,
    /// Gold granted on victory
    pub gold: i64,
    /// Experience granted on victory
    pub exp: i64,
    /// Display color, opaque to the engine
    pub color: String,
}

/// Outcome of one resolved encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The hero's attack cannot exceed the monster's defense; nothing
    /// happens on either side and the tile stays occupied.
    CannotHurt,
    /// The monster's retaliation exhausts the hero's hp before it dies.
    Defeat { damage_taken: i64 },
    /// The hero wins, taking `damage_taken` and earning the rewards.
    Victory {
        rounds: i64,
        damage_taken: i64,
        gold: i64,
        exp: i64,
    },
}

/// Resolves an encounter between the hero and a monster.
///
/// The hero always strikes first and the monster dies the instant its hp is
/// exhausted, so the hero only suffers `rounds - 1` retaliation hits:
/// `damage_taken = (ceil(hp / (h.atk - m.def)) - 1) * max(0, m.atk - h.def)`.
///
/// # Examples
///
/// ```
/// use magetower::{resolve, CombatOutcome, HeroState, MonsterStats};
///
/// let mut hero = HeroState::default();
/// hero.hp = 100;
/// hero.atk = 10;
/// hero.def = 5;
/// let slime = MonsterStats {
///     name: "Slime".into(), hp: 25, atk: 8, def: 2,
///     gold: 3, exp: 2, color: "#4ade80".into(),
/// };
/// // 25 hp / 8 damage per round = 4 rounds; 3 retaliations at 3 damage.
/// assert_eq!(
///     resolve(&hero, &slime),
///     CombatOutcome::Victory { rounds: 4, damage_taken: 9, gold: 3, exp: 2 }
/// );
/// ```
pub fn resolve(hero: &HeroState, monster: &MonsterStats) -> CombatOutcome {
    let hero_damage = hero.atk - monster.def;
    if hero_damage <= 0 {
        return CombatOutcome::CannotHurt;
    }

    let monster_damage = (monster.atk - hero.def).max(0);
    let rounds = div_ceil(monster.hp, hero_damage);
    let damage_taken = (rounds - 1) * monster_damage;

    if hero.hp <= damage_taken {
        CombatOutcome::Defeat { damage_taken }
    } else {
        CombatOutcome::Victory {
            rounds,
            damage_taken,
            gold: monster.gold,
            exp: monster.exp,
        }
    }
}

/// Ceiling division for positive divisors.
fn div_ceil(numerator: i64, divisor: i64) -> i64 {
    (numerator + divisor - 1) / divisor
}
