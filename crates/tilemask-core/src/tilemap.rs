//! The [`TileMap`] type — a row-major array of per-tile type masks.
//!
//! This is the shape in which map editors persist a classification and from
//! which pathfinding grids are built. Index `i` holds the tile at
//! `(i % width, i / width)`. A value of 0 is an open tile; any other value is
//! a bitset of obstacle categories.

use std::fmt;

use crate::geom::{Point, Range};

/// A row-major classification array with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<u32>,
}

impl TileMap {
    /// Create a `width`×`height` map with every tile set to `fill`.
    pub fn new(width: i32, height: i32, fill: u32) -> Result<Self, TileMapError> {
        check_size(width, height)?;
        Ok(Self {
            width,
            height,
            tiles: vec![fill; (width as usize) * (height as usize)],
        })
    }

    /// Wrap an existing classification array.
    ///
    /// `tiles.len()` must equal `width * height`.
    pub fn from_tiles(width: i32, height: i32, tiles: Vec<u32>) -> Result<Self, TileMapError> {
        let map = Self {
            width,
            height,
            tiles,
        };
        map.validate()?;
        Ok(map)
    }

    /// Check the dimensions against the array length.
    ///
    /// Useful after deserializing a map from an untrusted source.
    pub fn validate(&self) -> Result<(), TileMapError> {
        let expected = check_size(self.width, self.height)?;
        if self.tiles.len() != expected {
            return Err(TileMapError::SizeMismatch {
                expected,
                got: self.tiles.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The rectangle covered by the map, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat index of `p`, or `None` if it is outside the map.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + p.x as usize)
    }

    /// Point at flat index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Point {
        let w = self.width as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }

    /// Type mask at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the map.
    pub fn get_type(&self, p: Point) -> u32 {
        self.tiles[self.expect_index(p)]
    }

    /// Set the type mask at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the map.
    pub fn set_type(&mut self, p: Point, mask: u32) {
        let i = self.expect_index(p);
        self.tiles[i] = mask;
    }

    /// The raw row-major array.
    #[inline]
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Consume the map, returning the raw array.
    #[inline]
    pub fn into_tiles(self) -> Vec<u32> {
        self.tiles
    }

    fn expect_index(&self, p: Point) -> usize {
        match self.index(p) {
            Some(i) => i,
            None => panic!(
                "point {p} outside {}x{} tile map",
                self.width, self.height
            ),
        }
    }
}

fn check_size(width: i32, height: i32) -> Result<usize, TileMapError> {
    if width <= 0 || height <= 0 {
        return Err(TileMapError::InvalidSize { width, height });
    }
    Ok((width as usize) * (height as usize))
}

/// Errors raised when building a [`TileMap`] from raw parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileMapError {
    /// Width or height is not strictly positive.
    InvalidSize { width: i32, height: i32 },
    /// The array length does not match `width * height`.
    SizeMismatch { expected: usize, got: usize },
}

impl fmt::Display for TileMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "tile map: invalid size {width}x{height}")
            }
            Self::SizeMismatch { expected, got } => {
                write!(f, "tile map: expected {expected} tiles, got {got}")
            }
        }
    }
}

impl std::error::Error for TileMapError {}
