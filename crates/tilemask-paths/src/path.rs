//! Search results.

use tilemask_core::Point;

/// One step of a found path: the tile coordinates and its type mask at the
/// time the path was traced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathData {
    pub x: i32,
    pub y: i32,
    pub t: u32,
}

impl PathData {
    #[inline]
    pub const fn new(x: i32, y: i32, t: u32) -> Self {
        Self { x, y, t }
    }

    #[inline]
    pub const fn pos(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Result of [`Grid::search`](crate::Grid::search).
///
/// Separates the two cases that [`Grid::find`](crate::Grid::find) reports as
/// a zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path of the given number of steps was written to the buffer.
    Found(usize),
    /// Start and goal are the same tile.
    AlreadyThere,
    /// No path avoids the masked categories.
    Unreachable,
}

impl SearchOutcome {
    /// Steps written to the buffer (0 unless `Found`).
    #[inline]
    pub fn steps(self) -> usize {
        match self {
            Self::Found(n) => n,
            Self::AlreadyThere | Self::Unreachable => 0,
        }
    }

    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}
