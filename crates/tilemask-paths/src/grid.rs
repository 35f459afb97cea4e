//! The [`Grid`] type — tiles, parent links and reusable search buffers.
//!
//! A `Grid` is built once per map and reused for every search on that map.
//! The frontier heap, visited set, neighbor scratch and parent links are
//! allocated up front and recycled, so a search performs no allocations.
//! Because those buffers are shared, only one search can run against a grid
//! at a time; [`Grid::find`](crate::Grid::find) takes `&mut self`.

use tilemask_core::{Point, Range, TileMap, TileMapError};

use crate::heap::IndexedHeap;
use crate::node::{Node, NodeOrder};

/// Type mask written by [`Grid::set_walkable`] for a non-walkable tile.
/// Every category bit is set, so any non-zero search mask rejects it.
pub const SOLID: u32 = u32::MAX;

/// A fixed-size tile grid with its pathfinding buffers.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    pub(crate) nodes: Vec<Node>,
    parent: Vec<usize>,
    pub(crate) frontier: IndexedHeap<Node, NodeOrder>,
    // A tile is visited when its stamp equals the current generation.
    visited: Vec<u32>,
    generation: u32,
    pub(crate) neighbors: [usize; 4],
    neighbor_count: usize,
}

impl Grid {
    /// Build a grid from a row-major array of type masks.
    ///
    /// `types.len()` must equal `width * height`.
    pub fn new(width: i32, height: i32, types: &[u32]) -> Result<Self, TileMapError> {
        Self::from_tilemap(&TileMap::from_tiles(width, height, types.to_vec())?)
    }

    /// Build a grid with every tile set to `type_mask`.
    pub fn filled(width: i32, height: i32, type_mask: u32) -> Result<Self, TileMapError> {
        Self::from_tilemap(&TileMap::new(width, height, type_mask)?)
    }

    /// Build a grid from a [`TileMap`].
    ///
    /// The map is validated first, since a deserialized map may carry a
    /// tile array that does not match its dimensions.
    pub fn from_tilemap(map: &TileMap) -> Result<Self, TileMapError> {
        map.validate()?;
        let size = map.len();
        let nodes = map
            .tiles()
            .iter()
            .enumerate()
            .map(|(i, &t)| Node::new(map.point(i), t))
            .collect();
        Ok(Self {
            width: map.width(),
            height: map.height(),
            nodes,
            parent: vec![0; size],
            frontier: IndexedHeap::new(size, NodeOrder),
            visited: vec![0; size],
            generation: 1,
            neighbors: [0; 4],
            neighbor_count: 0,
        })
    }

    /// Snapshot the current classification as a [`TileMap`].
    pub fn to_tilemap(&self) -> TileMap {
        let tiles = self.nodes.iter().map(Node::type_mask).collect();
        // `from_tilemap` validated the dimensions.
        match TileMap::from_tiles(self.width, self.height, tiles) {
            Ok(map) => map,
            Err(e) => unreachable!("grid dimensions out of sync: {e}"),
        }
    }

    // -----------------------------------------------------------------------
    // Dimensions and indexing
    // -----------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of tiles (`width * height`).
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat index of `p`, or `None` if it is outside the grid.
    #[inline]
    pub fn try_index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + p.x as usize)
    }

    /// Flat index of `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> usize {
        match self.try_index(p) {
            Some(i) => i,
            None => panic!("point {p} outside {}x{} grid", self.width, self.height),
        }
    }

    /// Point at flat index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Point {
        self.nodes[i].pos()
    }

    #[inline]
    pub fn node(&self, i: usize) -> &Node {
        &self.nodes[i]
    }

    #[inline]
    pub fn node_at(&self, p: Point) -> &Node {
        &self.nodes[self.index(p)]
    }

    // -----------------------------------------------------------------------
    // Classification
    // -----------------------------------------------------------------------

    /// Replace the obstacle categories of the tile at `p`.
    pub fn set_type(&mut self, p: Point, mask: u32) {
        let i = self.index(p);
        log::trace!("tile {p}: type {} -> {mask}", self.nodes[i].type_mask());
        self.nodes[i].set_type_mask(mask);
    }

    pub fn get_type(&self, p: Point) -> u32 {
        self.node_at(p).type_mask()
    }

    /// Mark `p` open (type 0) or [`SOLID`].
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        self.set_type(p, if walkable { 0 } else { SOLID });
    }

    /// Whether `p` carries no obstacle category at all.
    pub fn is_walkable(&self, p: Point) -> bool {
        self.get_type(p) == 0
    }

    /// Whether a search forbidding `mask` may enter `p`.
    pub fn is_passable(&self, p: Point, mask: u32) -> bool {
        self.node_at(p).is_passable(mask)
    }

    // -----------------------------------------------------------------------
    // Search buffers
    // -----------------------------------------------------------------------

    /// Fill the neighbor scratch with the orthogonal neighbors of tile
    /// `index`, in the order south, west, east, north, skipping those that
    /// would leave the grid. Returns how many were written.
    pub fn update_neighbors(&mut self, index: usize) -> usize {
        let width = self.width as usize;
        let size = self.size();
        let col = index % width;
        let mut n = 0;
        if index >= width {
            self.neighbors[n] = index - width;
            n += 1;
        }
        if col > 0 {
            self.neighbors[n] = index - 1;
            n += 1;
        }
        if col < width - 1 {
            self.neighbors[n] = index + 1;
            n += 1;
        }
        if index + width < size {
            self.neighbors[n] = index + width;
            n += 1;
        }
        self.neighbor_count = n;
        n
    }

    /// The neighbors written by the last [`update_neighbors`](Self::update_neighbors).
    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors[..self.neighbor_count]
    }

    /// Record `parent` as the predecessor of `child` in the search tree.
    #[inline]
    pub fn link_parent(&mut self, child: usize, parent: usize) {
        self.parent[child] = parent;
    }

    /// Predecessor of `child` in the most recent search tree.
    ///
    /// Meaningless for tiles that search did not reach.
    #[inline]
    pub fn parent_of(&self, child: usize) -> usize {
        self.parent[child]
    }

    /// Empty the frontier and the visited set.
    ///
    /// Node costs are deliberately left alone: the search only reads the
    /// costs of nodes it has queued itself.
    pub fn clear_buffer(&mut self) {
        self.frontier.clear();
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.visited.fill(0);
            self.generation = 1;
        }
    }

    #[inline]
    pub(crate) fn mark_visited(&mut self, i: usize) {
        self.visited[i] = self.generation;
    }

    #[inline]
    pub(crate) fn is_visited(&self, i: usize) -> bool {
        self.visited[i] == self.generation
    }
}
