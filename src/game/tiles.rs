//! # Tile Registry
//!
//! Static mapping from tile identifiers to gameplay meaning, plus the dynamic
//! overlay of user-defined tiles (ids >= 1000).
//!
//! Tile ids are otherwise meaningless integers; all behavior is attached
//! externally by the session engine via [`classify`]. The registry itself
//! performs no mutation.

use crate::campaign::{CustomTileDef, CustomTileKind};
use crate::combat::MonsterStats;
use crate::config::CUSTOM_TILE_BASE;
use crate::KeyColor;
use std::collections::BTreeMap;

/// A tile identifier occupying one grid cell.
pub type TileId = u32;

/// Reserved tile ids for the standard tile set.
pub mod tile {
    use super::TileId;

    pub const EMPTY: TileId = 0;
    pub const WALL: TileId = 1;

    // Doors
    pub const DOOR_YELLOW: TileId = 2;
    pub const DOOR_BLUE: TileId = 3;
    pub const DOOR_RED: TileId = 4;

    // Stairs
    pub const STAIRS_UP: TileId = 10;
    pub const STAIRS_DOWN: TileId = 11;

    // Keys
    pub const KEY_YELLOW: TileId = 20;
    pub const KEY_BLUE: TileId = 21;
    pub const KEY_RED: TileId = 22;

    // Potions
    pub const POTION_RED: TileId = 30;
    pub const POTION_BLUE: TileId = 31;

    // Gems
    pub const GEM_RED: TileId = 32;
    pub const GEM_BLUE: TileId = 33;
    pub const GEM_SUPER_RED: TileId = 34;
    pub const GEM_SUPER_BLUE: TileId = 35;

    // Equipment
    pub const SWORD_IRON: TileId = 40;
    pub const SHIELD_IRON: TileId = 41;
    pub const SWORD_SILVER: TileId = 42;
    pub const SHIELD_SILVER: TileId = 43;
    pub const SWORD_KNIGHT: TileId = 44;
    pub const SHIELD_KNIGHT: TileId = 45;
    pub const ITEM_PICKAXE: TileId = 48;

    // Standard monsters
    pub const MONSTER_SLIME_GREEN: TileId = 50;
    pub const MONSTER_SLIME_RED: TileId = 51;
    pub const MONSTER_BAT: TileId = 52;
    pub const MONSTER_SKELETON: TileId = 53;
    pub const MONSTER_MAGE: TileId = 54;
    pub const MONSTER_ORC: TileId = 60;
    pub const MONSTER_GOLEM: TileId = 61;
    pub const MONSTER_VAMPIRE: TileId = 62;
    pub const MONSTER_DRAGON: TileId = 99; // Final boss

    // NPCs / shops
    pub const NPC_WISEMAN: TileId = 100;
    pub const NPC_SHOP: TileId = 101;
    pub const NPC_MERCHANT_KEY: TileId = 102;
    pub const NPC_MERCHANT_EXP: TileId = 103;
}

/// Which hero stat a gem raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GemStat {
    Attack,
    Defense,
}

/// Which way a staircase leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StairKind {
    Up,
    Down,
}

/// The gameplay meaning of a tile id, resolved against a campaign's monster
/// and custom-tile tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileKind<'a> {
    Empty,
    Wall,
    Door(KeyColor),
    Stairs(StairKind),
    Key(KeyColor),
    /// Heals the hero by the given amount on pickup
    Heal(i64),
    /// Raises the given stat by the given amount on pickup
    StatGem(GemStat, i64),
    /// Swords and shields; walkable, no engine effect
    Equipment,
    Pickaxe,
    /// A standard monster from the campaign's monster table
    Monster(&'a MonsterStats),
    /// Walkable, no engine effect
    Npc,
    /// A user-defined item tile (fields are deltas applied on pickup)
    CustomItem(&'a CustomTileDef),
    /// A user-defined monster tile (fields are absolute monster stats)
    CustomMonster(&'a CustomTileDef),
    /// Unrecognized id; renders as a placeholder, no gameplay effect
    Unknown,
}

/// Classifies a tile id into its gameplay meaning.
///
/// Lookup order: ids at or above [`CUSTOM_TILE_BASE`] consult the custom-tile
/// table; otherwise any id present in the monster table is a monster; only
/// then does the static reserved-range table apply. Unrecognized ids classify
/// as [`TileKind::Unknown`].
///
/// # Examples
///
/// ```
/// use magetower::{classify, tile, TileKind};
/// use std::collections::BTreeMap;
///
/// let monsters = BTreeMap::new();
/// let customs = BTreeMap::new();
/// assert_eq!(classify(tile::WALL, &monsters, &customs), TileKind::Wall);
/// assert_eq!(classify(777, &monsters, &customs), TileKind::Unknown);
/// ```
pub fn classify<'a>(
    id: TileId,
    monster_defs: &'a BTreeMap<TileId, MonsterStats>,
    custom_tiles: &'a BTreeMap<TileId, CustomTileDef>,
) -> TileKind<'a> {
    if id >= CUSTOM_TILE_BASE {
        return match custom_tiles.get(&id) {
            Some(def) => match def.kind {
                CustomTileKind::Monster { .. } => TileKind::CustomMonster(def),
                CustomTileKind::Item { .. } => TileKind::CustomItem(def),
            },
            None => TileKind::Unknown,
        };
    }

    if let Some(monster) = monster_defs.get(&id) {
        return TileKind::Monster(monster);
    }

    match id {
        tile::EMPTY => TileKind::Empty,
        tile::WALL => TileKind::Wall,
        tile::DOOR_YELLOW => TileKind::Door(KeyColor::Yellow),
        tile::DOOR_BLUE => TileKind::Door(KeyColor::Blue),
        tile::DOOR_RED => TileKind::Door(KeyColor::Red),
        tile::STAIRS_UP => TileKind::Stairs(StairKind::Up),
        tile::STAIRS_DOWN => TileKind::Stairs(StairKind::Down),
        tile::KEY_YELLOW => TileKind::Key(KeyColor::Yellow),
        tile::KEY_BLUE => TileKind::Key(KeyColor::Blue),
        tile::KEY_RED => TileKind::Key(KeyColor::Red),
        tile::POTION_RED => TileKind::Heal(50),
        tile::POTION_BLUE => TileKind::Heal(200),
        tile::GEM_RED => TileKind::StatGem(GemStat::Attack, 1),
        tile::GEM_BLUE => TileKind::StatGem(GemStat::Defense, 1),
        tile::GEM_SUPER_RED => TileKind::StatGem(GemStat::Attack, 5),
        tile::GEM_SUPER_BLUE => TileKind::StatGem(GemStat::Defense, 5),
        tile::SWORD_IRON..=tile::SHIELD_KNIGHT => TileKind::Equipment,
        tile::ITEM_PICKAXE => TileKind::Pickaxe,
        tile::NPC_WISEMAN..=tile::NPC_MERCHANT_EXP => TileKind::Npc,
        _ => TileKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::default_monsters;
    use crate::KeyRing;

    fn custom_item(id: TileId) -> CustomTileDef {
        CustomTileDef {
            id,
            name: "Lucky Charm".to_string(),
            icon_id: "Star".to_string(),
            color: "#ffffff".to_string(),
            kind: CustomTileKind::Item {
                hp: 10,
                atk: 0,
                def: 0,
                gold: 0,
                exp: 0,
                keys: KeyRing::default(),
                pickaxes: 0,
            },
        }
    }

    fn custom_monster(id: TileId) -> CustomTileDef {
        CustomTileDef {
            id,
            name: "Gloom".to_string(),
            icon_id: "Ghost".to_string(),
            color: "#333333".to_string(),
            kind: CustomTileKind::Monster {
                hp: 30,
                atk: 12,
                def: 2,
                gold: 5,
                exp: 3,
            },
        }
    }

    #[test]
    fn test_static_classification() {
        let monsters = BTreeMap::new();
        let customs = BTreeMap::new();

        assert_eq!(classify(tile::EMPTY, &monsters, &customs), TileKind::Empty);
        assert_eq!(classify(tile::WALL, &monsters, &customs), TileKind::Wall);
        assert_eq!(
            classify(tile::DOOR_BLUE, &monsters, &customs),
            TileKind::Door(KeyColor::Blue)
        );
        assert_eq!(
            classify(tile::STAIRS_UP, &monsters, &customs),
            TileKind::Stairs(StairKind::Up)
        );
        assert_eq!(
            classify(tile::KEY_RED, &monsters, &customs),
            TileKind::Key(KeyColor::Red)
        );
        assert_eq!(
            classify(tile::POTION_BLUE, &monsters, &customs),
            TileKind::Heal(200)
        );
        assert_eq!(
            classify(tile::GEM_SUPER_RED, &monsters, &customs),
            TileKind::StatGem(GemStat::Attack, 5)
        );
        assert_eq!(
            classify(tile::SWORD_SILVER, &monsters, &customs),
            TileKind::Equipment
        );
        assert_eq!(
            classify(tile::ITEM_PICKAXE, &monsters, &customs),
            TileKind::Pickaxe
        );
        assert_eq!(classify(tile::NPC_SHOP, &monsters, &customs), TileKind::Npc);
    }

    #[test]
    fn test_monster_table_lookup() {
        let monsters = default_monsters();
        let customs = BTreeMap::new();

        match classify(tile::MONSTER_BAT, &monsters, &customs) {
            TileKind::Monster(stats) => assert_eq!(stats.name, "Bat"),
            other => panic!("expected monster, got {:?}", other),
        }

        // An id the monster table does not define falls through to Unknown.
        assert_eq!(classify(55, &monsters, &customs), TileKind::Unknown);
    }

    #[test]
    fn test_custom_overlay_takes_priority() {
        let monsters = default_monsters();
        let mut customs = BTreeMap::new();
        customs.insert(1000, custom_item(1000));
        customs.insert(1001, custom_monster(1001));

        assert!(matches!(
            classify(1000, &monsters, &customs),
            TileKind::CustomItem(_)
        ));
        assert!(matches!(
            classify(1001, &monsters, &customs),
            TileKind::CustomMonster(_)
        ));
        // A custom-range id with no definition is Unknown, never a standard tile.
        assert_eq!(classify(1002, &monsters, &customs), TileKind::Unknown);
    }

    #[test]
    fn test_unrecognized_ids() {
        let monsters = BTreeMap::new();
        let customs = BTreeMap::new();
        for id in [5, 12, 23, 36, 46, 49, 98, 104, 500] {
            assert_eq!(classify(id, &monsters, &customs), TileKind::Unknown);
        }
    }
}
