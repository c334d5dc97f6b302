//! # Game Module
//!
//! The runtime half of the engine: tile classification, combat resolution,
//! hero progression, the world model, and the live session state machine.

pub mod combat;
pub mod hero;
pub mod session;
pub mod tiles;
pub mod world;

pub use combat::*;
pub use hero::*;
pub use session::*;
pub use tiles::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate on a floor grid.
///
/// # Examples
///
/// ```
/// use magetower::Position;
///
/// let pos = Position::new(5, 10);
/// assert_eq!(pos.x, 5);
/// assert_eq!(pos.y, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }
}

/// Facing directions for the hero.
///
/// Movement is strictly 4-way; the facing direction is presentation state
/// that updates on every movement intent, even rejected ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts a direction to an (dx, dy) movement delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use magetower::Direction;
    ///
    /// assert_eq!(Direction::Up.to_delta(), (0, -1));
    /// assert_eq!(Direction::Right.to_delta(), (1, 0));
    /// ```
    pub fn to_delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Converts a movement delta to a facing direction.
    ///
    /// Horizontal movement wins when both components are nonzero; returns
    /// `None` for the zero delta.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        if dx > 0 {
            Some(Direction::Right)
        } else if dx < 0 {
            Some(Direction::Left)
        } else if dy > 0 {
            Some(Direction::Down)
        } else if dy < 0 {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

/// Door and key colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyColor {
    Yellow,
    Blue,
    Red,
}

impl KeyColor {
    /// Display name used in pickup messages.
    pub fn name(self) -> &'static str {
        match self {
            KeyColor::Yellow => "Yellow",
            KeyColor::Blue => "Blue",
            KeyColor::Red => "Red",
        }
    }
}
