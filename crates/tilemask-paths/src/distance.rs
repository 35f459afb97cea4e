//! Step cost and heuristic.

use tilemask_core::Point;

/// Cost of one orthogonal step.
pub const STRAIGHT_COST: i32 = 10;
/// Cost of one diagonal step.
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two points, in tenths of a tile.
///
/// Used both as the step cost between neighbors and as the A* heuristic.
/// Under 4-way movement only the straight term applies to a single step, and
/// the diagonal term keeps the estimate below the true walking cost, so the
/// heuristic stays admissible. Supporting 8-way movement would also need
/// diagonal entries in `Grid::update_neighbors`.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    if dx > dy {
        DIAGONAL_COST * dy + STRAIGHT_COST * (dx - dy)
    } else {
        DIAGONAL_COST * dx + STRAIGHT_COST * (dy - dx)
    }
}
