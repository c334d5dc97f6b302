//! # Campaign Configuration
//!
//! The externally persisted bundle a session is created from: initial hero,
//! standard monster table, custom tile table, and floor list. The editor
//! mutates working copies of this shape; the live engine only ever consumes
//! it (deep-copying at session start) and the persistence collaborator
//! serializes it opaquely.

pub mod content;
pub mod store;

pub use content::*;
pub use store::*;

use crate::combat::MonsterStats;
use crate::hero::{HeroState, KeyRing};
use crate::tiles::TileId;
use crate::world::FloorGrid;
use crate::{TowerError, TowerResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined tile: either an item or a monster, merged into the same
/// gameplay rules as the standard tile set. Ids start at 1000.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTileDef {
    pub id: TileId,
    pub name: String,
    /// Key into the rendering collaborator's icon library; opaque here
    pub icon_id: String,
    /// Display color, opaque to the engine
    pub color: String,
    #[serde(flatten)]
    pub kind: CustomTileKind,
}

/// The two shapes a custom tile can take.
///
/// The same field names carry different meanings per variant: for a monster
/// they are absolute combat stats, for an item they are deltas applied to
/// the hero on pickup. Modeling them as distinct variants removes the
/// ambiguity. No validation prevents nonsensical values such as negative
/// deltas; that is the author's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum CustomTileKind {
    Monster {
        #[serde(default)]
        hp: i64,
        #[serde(default)]
        atk: i64,
        #[serde(default)]
        def: i64,
        #[serde(default)]
        gold: i64,
        #[serde(default)]
        exp: i64,
    },
    Item {
        #[serde(default)]
        hp: i64,
        #[serde(default)]
        atk: i64,
        #[serde(default)]
        def: i64,
        #[serde(default)]
        gold: i64,
        #[serde(default)]
        exp: i64,
        #[serde(default)]
        keys: KeyRing,
        #[serde(default)]
        pickaxes: i64,
    },
}

impl CustomTileDef {
    /// Assembles full monster stats from a MONSTER-kind definition, or
    /// `None` for items.
    pub fn monster_stats(&self) -> Option<MonsterStats> {
        match self.kind {
            CustomTileKind::Monster {
                hp,
                atk,
                def,
                gold,
                exp,
            } => Some(MonsterStats {
                name: self.name.clone(),
                hp,
                atk,
                def,
                gold,
                exp,
                color: self.color.clone(),
            }),
            CustomTileKind::Item { .. } => None,
        }
    }
}

/// The authorable definition of a full playable tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub initial_hero: HeroState,
    pub monster_defs: std::collections::BTreeMap<TileId, MonsterStats>,
    pub custom_tiles: std::collections::BTreeMap<TileId, CustomTileDef>,
    pub floors: Vec<FloorGrid>,
}

impl CampaignConfig {
    /// Checks the world-model invariants a session depends on: a non-empty
    /// floor list and an in-range starting floor.
    pub fn validate(&self) -> TowerResult<()> {
        if self.floors.is_empty() {
            return Err(TowerError::InvalidConfig(
                "campaign has no floors".to_string(),
            ));
        }
        if self.initial_hero.floor >= self.floors.len() {
            return Err(TowerError::InvalidConfig(format!(
                "initial hero floor {} out of range (0..{})",
                self.initial_hero.floor,
                self.floors.len()
            )));
        }
        Ok(())
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> TowerResult<String> {
        serde_json::to_string_pretty(self).map_err(TowerError::from)
    }

    /// Loads a configuration from JSON.
    pub fn from_json(json: &str) -> TowerResult<Self> {
        serde_json::from_str(json).map_err(TowerError::from)
    }
}

impl Default for CampaignConfig {
    fn default() -> Self {
        content::default_config()
    }
}

/// A named, persisted campaign: one configuration plus menu metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub config: CampaignConfig,
    /// Unix milliseconds of the last save or play
    pub last_played: u64,
}

impl Campaign {
    /// Creates a new campaign around the default configuration.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            config: CampaignConfig::default(),
            last_played: store::now_millis(),
        }
    }
}
