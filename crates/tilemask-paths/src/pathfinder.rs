//! [`TilePathfinder`] — a grid bundled with its own path buffer.
//!
//! This is the surface an editor or game layer talks to: it paints tile
//! types, asks for a path, then walks the result from the start outward.

use tilemask_core::{Point, TileMap, TileMapError};

use crate::Grid;
use crate::path::{PathData, SearchOutcome};

/// Owns a [`Grid`] and the buffer its searches write into.
#[derive(Debug, Clone)]
pub struct TilePathfinder {
    grid: Grid,
    path: Vec<PathData>,
    path_len: usize,
}

impl TilePathfinder {
    /// Create a `width`×`height` pathfinder with every tile set to `type_mask`.
    pub fn new(width: i32, height: i32, type_mask: u32) -> Result<Self, TileMapError> {
        Ok(Self::with_grid(Grid::filled(width, height, type_mask)?))
    }

    /// Create a pathfinder from a persisted classification.
    pub fn from_tilemap(map: &TileMap) -> Result<Self, TileMapError> {
        Ok(Self::with_grid(Grid::from_tilemap(map)?))
    }

    pub fn with_grid(grid: Grid) -> Self {
        let path = vec![PathData::default(); grid.size()];
        Self {
            grid,
            path,
            path_len: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Snapshot the classification for persistence.
    pub fn to_tilemap(&self) -> TileMap {
        self.grid.to_tilemap()
    }

    /// Search for a path and keep it for [`path_data`](Self::path_data).
    /// Returns the number of steps, 0 if there is none.
    pub fn find_path(&mut self, from: Point, to: Point, mask: u32) -> usize {
        self.path_len = self.grid.find(from, to, mask, &mut self.path);
        self.path_len
    }

    /// Like [`find_path`](Self::find_path), with the zero-length cases told apart.
    pub fn search(&mut self, from: Point, to: Point, mask: u32) -> SearchOutcome {
        let outcome = self.grid.search(from, to, mask, &mut self.path);
        self.path_len = outcome.steps();
        outcome
    }

    pub fn set_type(&mut self, x: i32, y: i32, type_mask: u32) {
        self.grid.set_type(Point::new(x, y), type_mask);
    }

    pub fn get_type(&self, x: i32, y: i32) -> u32 {
        self.grid.get_type(Point::new(x, y))
    }

    /// Length of the last path found.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path_len
    }

    /// Step `n` of the last path, counted from the start (0 is the first
    /// tile after the start, `path_len() - 1` is the goal).
    ///
    /// # Panics
    ///
    /// Panics if `n >= path_len()`.
    pub fn path_data(&self, n: usize) -> PathData {
        assert!(
            n < self.path_len,
            "path step {n} out of range (length {})",
            self.path_len
        );
        self.path[self.path_len - 1 - n]
    }

    /// Steps of the last path from the start toward the goal.
    pub fn path(&self) -> impl DoubleEndedIterator<Item = PathData> + ExactSizeIterator + '_ {
        self.path[..self.path_len].iter().rev().copied()
    }
}
