//! A* pathfinding on fixed-size tile grids with obstacle masks.
//!
//! Every tile carries a type mask, a bitset of obstacle categories (0 is
//! open ground). Each search supplies its own mask of *forbidden* categories:
//! a tile can be entered when `mask & type == 0`. The same map can therefore
//! be searched as a walker (blocked by walls and water) or a swimmer (blocked
//! by walls only) without rebuilding anything.
//!
//! - [`Grid`] owns the tiles and every buffer a search needs, so repeated
//!   queries do not allocate.
//! - [`Grid::find`] runs A* over 4-connected tiles and writes the path into a
//!   caller buffer, goal first.
//! - [`TilePathfinder`] bundles a grid with its path buffer for editor and
//!   game code.
//! - [`IndexedHeap`] is the frontier: a binary heap whose items know their
//!   own slot.

mod astar;
mod distance;
mod grid;
mod heap;
mod node;
mod path;
mod pathfinder;

pub use distance::{DIAGONAL_COST, STRAIGHT_COST, octile};
pub use grid::{Grid, SOLID};
pub use heap::{HeapItem, HeapOrder, IndexedHeap};
pub use node::{Node, NodeOrder};
pub use path::{PathData, SearchOutcome};
pub use pathfinder::TilePathfinder;
pub use tilemask_core::{Point, Range, TileMap, TileMapError};
