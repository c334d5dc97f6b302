//! # Magetower
//!
//! The game-state transition engine of a tile-grid "tower climb" RPG with an
//! integrated level editor.
//!
//! ## Architecture Overview
//!
//! The engine is organized around a handful of cooperating components:
//!
//! - **Tile Registry**: classifies tile ids into gameplay meanings, merging a
//!   static table with user-defined custom tiles (ids >= 1000)
//! - **Combat Resolver**: deterministic one-shot battle resolution
//! - **Progression Calculator**: experience thresholds and level-up growth
//! - **World Model**: an ordered list of fixed-size floor grids
//! - **Session Engine**: movement, interaction, and floor-travel over a live
//!   hero + world snapshot derived from a campaign configuration
//! - **Editor**: offline mutation of campaign configurations
//!
//! Rendering, input devices, menus, and storage media are external
//! collaborators; they consume plain values from this crate and call the
//! session/editor operations, nothing more.

pub mod campaign;
pub mod editor;
pub mod game;

// Core module re-exports
pub use campaign::*;
pub use game::*;

/// Core error type for the Magetower engine.
///
/// Expected gameplay outcomes (blocked movement, locked doors, undamageable
/// monsters) are never errors; they are policy results carried by ordinary
/// return values and the session log. This enum covers genuine faults:
/// malformed configurations, rejected editor edits, and I/O failures from the
/// persistence layer.
#[derive(thiserror::Error, Debug)]
pub enum TowerError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Campaign configuration violates a world-model invariant
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Editor edit cannot be applied
    #[error("Invalid edit: {0}")]
    InvalidEdit(String),
}

/// Result type used throughout the Magetower codebase.
pub type TowerResult<T> = Result<T, TowerError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game rule constants.
pub mod config {
    /// Side length of every floor grid, in tiles
    pub const MAP_SIZE: usize = 11;

    /// Experience required per level is `XP_LEVEL_THRESHOLD * current level`
    pub const XP_LEVEL_THRESHOLD: i64 = 50;

    /// Attack gained per level-up
    pub const LEVEL_UP_ATK: i64 = 2;

    /// Defense gained per level-up
    pub const LEVEL_UP_DEF: i64 = 2;

    /// Hit points gained per level-up (added to current hp, uncapped)
    pub const LEVEL_UP_HP: i64 = 100;

    /// First tile id reserved for user-defined custom tiles
    pub const CUSTOM_TILE_BASE: u32 = 1000;

    /// Maximum number of retained session log messages
    pub const MESSAGE_LOG_CAP: usize = 5;
}
