//! Default campaign content: the standard monster table, the starting hero,
//! and the stock three-floor map set.

use crate::combat::MonsterStats;
use crate::hero::{HeroState, KeyRing};
use crate::tiles::{tile, TileId};
use crate::world::FloorGrid;
use crate::{CampaignConfig, Direction};
use std::collections::BTreeMap;

fn monster(name: &str, hp: i64, atk: i64, def: i64, gold: i64, exp: i64, color: &str) -> MonsterStats {
    MonsterStats {
        name: name.to_string(),
        hp,
        atk,
        def,
        gold,
        exp,
        color: color.to_string(),
    }
}

/// The standard monster table, keyed by tile id.
pub fn default_monsters() -> BTreeMap<TileId, MonsterStats> {
    let mut defs = BTreeMap::new();
    defs.insert(
        tile::MONSTER_SLIME_GREEN,
        monster("Green Slime", 40, 18, 1, 1, 1, "#4ade80"),
    );
    defs.insert(
        tile::MONSTER_SLIME_RED,
        monster("Red Slime", 60, 25, 2, 2, 2, "#f87171"),
    );
    defs.insert(tile::MONSTER_BAT, monster("Bat", 80, 35, 5, 4, 3, "#a78bfa"));
    defs.insert(
        tile::MONSTER_SKELETON,
        monster("Skeleton", 150, 50, 10, 8, 6, "#e5e7eb"),
    );
    defs.insert(
        tile::MONSTER_MAGE,
        monster("Mage", 200, 80, 15, 15, 10, "#60a5fa"),
    );
    defs.insert(
        tile::MONSTER_ORC,
        monster("Orc", 450, 150, 40, 30, 25, "#15803d"),
    );
    defs.insert(
        tile::MONSTER_GOLEM,
        monster("Golem", 100, 220, 120, 40, 40, "#78716c"),
    );
    defs.insert(
        tile::MONSTER_VAMPIRE,
        monster("Vampire", 800, 300, 80, 60, 60, "#9f1239"),
    );
    defs.insert(
        tile::MONSTER_DRAGON,
        monster("Dragon King", 9999, 600, 350, 0, 0, "#ef4444"),
    );
    defs
}

/// The default starting hero: bottom-center of floor 0, one yellow key.
pub fn default_hero() -> HeroState {
    HeroState {
        floor: 0,
        max_floor_visited: 0,
        x: 5,
        y: 10,
        facing: Direction::Up,
        hp: 1000,
        atk: 10,
        def: 10,
        gold: 0,
        exp: 0,
        level: 1,
        keys: KeyRing {
            yellow: 1,
            blue: 0,
            red: 0,
        },
        pickaxes: 0,
    }
}

/// The authored ground floor of the stock campaign.
pub fn default_ground_floor() -> FloorGrid {
    FloorGrid([
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 30, 0, 0, 0, 10, 0, 0, 0, 31, 1],
        [1, 2, 1, 1, 1, 2, 1, 1, 1, 2, 1],
        [1, 50, 1, 32, 1, 0, 1, 33, 1, 50, 1],
        [1, 0, 1, 0, 1, 2, 1, 0, 1, 0, 1],
        [1, 0, 2, 0, 50, 0, 50, 0, 2, 0, 1],
        [1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1],
        [1, 0, 50, 0, 0, 0, 0, 0, 50, 0, 1],
        [1, 1, 1, 2, 1, 20, 1, 2, 1, 1, 1],
        [1, 20, 0, 0, 0, 100, 0, 0, 0, 20, 1],
        [1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    ])
}

/// The stock campaign configuration: the authored ground floor plus two
/// blank floors, no custom tiles.
pub fn default_config() -> CampaignConfig {
    CampaignConfig {
        initial_hero: default_hero(),
        monster_defs: default_monsters(),
        custom_tiles: BTreeMap::new(),
        floors: vec![default_ground_floor(), FloorGrid::blank(), FloorGrid::blank()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_monsters_cover_standard_ids() {
        let defs = default_monsters();
        assert_eq!(defs.len(), 9);
        assert_eq!(defs[&tile::MONSTER_SLIME_GREEN].name, "Green Slime");
        assert_eq!(defs[&tile::MONSTER_DRAGON].hp, 9999);
        // The boss drops nothing; winning is its own reward.
        assert_eq!(defs[&tile::MONSTER_DRAGON].gold, 0);
        assert_eq!(defs[&tile::MONSTER_DRAGON].exp, 0);
    }

    #[test]
    fn test_default_hero_start() {
        let hero = default_hero();
        assert_eq!((hero.x, hero.y), (5, 10));
        assert_eq!(hero.keys.yellow, 1);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.max_floor_visited, 0);
    }

    #[test]
    fn test_ground_floor_content() {
        let floor = default_ground_floor();
        // The hero's starting cell is the gap in the bottom wall.
        assert_eq!(floor.get(5, 10), Some(tile::EMPTY));
        // Stairs up sit in the top corridor.
        assert_eq!(floor.get(5, 1), Some(tile::STAIRS_UP));
        assert_eq!(floor.get(1, 9), Some(tile::KEY_YELLOW));
        assert_eq!(floor.get(1, 3), Some(tile::MONSTER_SLIME_GREEN));
    }

    #[test]
    fn test_default_config_shape() {
        let config = default_config();
        assert_eq!(config.floors.len(), 3);
        assert!(config.custom_tiles.is_empty());
        assert!(config.validate().is_ok());
    }
}
