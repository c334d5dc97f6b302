//! # World Model
//!
//! An ordered list of floors, each a fixed 11x11 grid of tile ids. Grids are
//! mutated in place at runtime (a consumed tile becomes EMPTY) but only ever
//! by the session engine; the editor mutates campaign copies offline.

use crate::config::MAP_SIZE;
use crate::tiles::{tile, TileId};
use crate::Position;
use serde::{Deserialize, Serialize};

/// One floor of the tower: an 11x11 grid of tile ids, row-major.
///
/// The fixed dimensions are a hard invariant; the serde representation is a
/// nested array, so deserializing a grid of any other size fails. Border
/// cells are conventionally walls, but that is authored content, not an
/// enforced rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorGrid(pub [[TileId; MAP_SIZE]; MAP_SIZE]);

impl FloorGrid {
    /// Creates an all-empty floor with a wall border.
    ///
    /// # Examples
    ///
    /// ```
    /// use magetower::{tile, FloorGrid};
    ///
    /// let floor = FloorGrid::blank();
    /// assert_eq!(floor.get(0, 0), Some(tile::WALL));
    /// assert_eq!(floor.get(5, 5), Some(tile::EMPTY));
    /// ```
    pub fn blank() -> Self {
        let mut cells = [[tile::EMPTY; MAP_SIZE]; MAP_SIZE];
        for i in 0..MAP_SIZE {
            cells[0][i] = tile::WALL;
            cells[MAP_SIZE - 1][i] = tile::WALL;
            cells[i][0] = tile::WALL;
            cells[i][MAP_SIZE - 1] = tile::WALL;
        }
        Self(cells)
    }

    /// Whether (x, y) lies inside the grid.
    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < MAP_SIZE && (y as usize) < MAP_SIZE
    }

    /// Returns the tile id at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<TileId> {
        if Self::in_bounds(x, y) {
            Some(self.0[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Sets the tile id at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, id: TileId) {
        if Self::in_bounds(x, y) {
            self.0[y as usize][x as usize] = id;
        }
    }

    /// Finds the first cell holding any of the given tile ids, scanning
    /// row-major from the top-left. Stair relocation and floor travel both
    /// rely on this scan order.
    pub fn find_first(&self, ids: &[TileId]) -> Option<Position> {
        for (row, cells) in self.0.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if ids.contains(&cell) {
                    return Some(Position::new(col as i32, row as i32));
                }
            }
        }
        None
    }
}

impl Default for FloorGrid {
    fn default() -> Self {
        Self::blank()
    }
}
