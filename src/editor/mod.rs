//! # Editor Operations
//!
//! Offline mutation of a [`CampaignConfig`]. These operate on a working copy
//! of the stored configuration and never touch a live session; a session
//! picks up edits only when restarted from the updated configuration.

use crate::campaign::{CampaignConfig, CustomTileDef, CustomTileKind};
use crate::combat::MonsterStats;
use crate::config::{CUSTOM_TILE_BASE, MAP_SIZE};
use crate::hero::HeroState;
use crate::tiles::TileId;
use crate::world::FloorGrid;
use crate::{TowerError, TowerResult};

impl CampaignConfig {
    /// Paints a tile id at (x, y) on the given floor.
    pub fn paint_tile(&mut self, floor: usize, x: i32, y: i32, id: TileId) -> TowerResult<()> {
        let grid = self
            .floors
            .get_mut(floor)
            .ok_or_else(|| TowerError::InvalidEdit(format!("no floor {floor}")))?;
        if !FloorGrid::in_bounds(x, y) {
            return Err(TowerError::InvalidEdit(format!(
                "({x}, {y}) outside the {MAP_SIZE}x{MAP_SIZE} grid"
            )));
        }
        grid.set(x, y, id);
        Ok(())
    }

    /// Appends a blank, wall-bordered floor and returns its index.
    pub fn add_floor(&mut self) -> usize {
        self.floors.push(FloorGrid::blank());
        self.floors.len() - 1
    }

    /// Removes a floor. The last remaining floor cannot be removed.
    pub fn remove_floor(&mut self, floor: usize) -> TowerResult<()> {
        if floor >= self.floors.len() {
            return Err(TowerError::InvalidEdit(format!("no floor {floor}")));
        }
        if self.floors.len() <= 1 {
            return Err(TowerError::InvalidEdit(
                "cannot remove the only floor".to_string(),
            ));
        }
        self.floors.remove(floor);
        Ok(())
    }

    /// Replaces a standard monster's stats in place.
    pub fn set_monster(&mut self, id: TileId, stats: MonsterStats) -> TowerResult<()> {
        match self.monster_defs.get_mut(&id) {
            Some(entry) => {
                *entry = stats;
                Ok(())
            }
            None => Err(TowerError::InvalidEdit(format!(
                "no standard monster with tile id {id}"
            ))),
        }
    }

    /// Creates a new custom tile and returns its assigned id.
    ///
    /// Ids are allocated as `max(999, existing custom ids) + 1`, so they can
    /// never collide with the standard range (< 1000) or each other.
    pub fn create_custom_tile(
        &mut self,
        name: impl Into<String>,
        icon_id: impl Into<String>,
        color: impl Into<String>,
        kind: CustomTileKind,
    ) -> TileId {
        let max_existing = self
            .custom_tiles
            .keys()
            .copied()
            .max()
            .unwrap_or(CUSTOM_TILE_BASE - 1)
            .max(CUSTOM_TILE_BASE - 1);
        let id = max_existing + 1;

        self.custom_tiles.insert(
            id,
            CustomTileDef {
                id,
                name: name.into(),
                icon_id: icon_id.into(),
                color: color.into(),
                kind,
            },
        );
        id
    }

    /// Replaces an existing custom tile definition in place. The definition's
    /// `kind` tag is fixed at creation; replacing it with a different kind is
    /// rejected.
    pub fn set_custom_tile(&mut self, def: CustomTileDef) -> TowerResult<()> {
        match self.custom_tiles.get_mut(&def.id) {
            Some(entry) => {
                let same_kind = matches!(
                    (&entry.kind, &def.kind),
                    (CustomTileKind::Item { .. }, CustomTileKind::Item { .. })
                        | (CustomTileKind::Monster { .. }, CustomTileKind::Monster { .. })
                );
                if !same_kind {
                    return Err(TowerError::InvalidEdit(format!(
                        "custom tile {} cannot change kind",
                        def.id
                    )));
                }
                *entry = def;
                Ok(())
            }
            None => Err(TowerError::InvalidEdit(format!(
                "no custom tile with id {}",
                def.id
            ))),
        }
    }

    /// Replaces the stored initial-hero template.
    pub fn set_initial_hero(&mut self, hero: HeroState) {
        self.initial_hero = hero;
    }
}
