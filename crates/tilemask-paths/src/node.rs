//! [`Node`], the per-tile record the search works on, and its frontier order.

use std::cmp::Ordering;

use tilemask_core::Point;

use crate::heap::{HeapItem, HeapOrder};

/// A grid tile as seen by the search.
///
/// `g_cost`, `h_cost` and `f_cost` are scratch values. They are only
/// meaningful for nodes written by the search currently running (or the one
/// that just finished) and are never reset between searches.
#[derive(Debug, Clone)]
pub struct Node {
    pos: Point,
    type_mask: u32,
    g_cost: i32,
    h_cost: i32,
    f_cost: i32,
    heap_slot: usize,
}

impl Node {
    pub(crate) fn new(pos: Point, type_mask: u32) -> Self {
        Self {
            pos,
            type_mask,
            g_cost: 0,
            h_cost: 0,
            f_cost: 0,
            heap_slot: 0,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Obstacle categories occupying this tile. 0 is fully open.
    #[inline]
    pub fn type_mask(&self) -> u32 {
        self.type_mask
    }

    #[inline]
    pub(crate) fn set_type_mask(&mut self, mask: u32) {
        self.type_mask = mask;
    }

    /// Whether a search forbidding the categories in `mask` may enter this tile.
    #[inline]
    pub fn is_passable(&self, mask: u32) -> bool {
        mask & self.type_mask == 0
    }

    #[inline]
    pub fn g_cost(&self) -> i32 {
        self.g_cost
    }

    #[inline]
    pub fn h_cost(&self) -> i32 {
        self.h_cost
    }

    #[inline]
    pub fn f_cost(&self) -> i32 {
        self.f_cost
    }

    pub(crate) fn set_costs(&mut self, g: i32, h: i32) {
        self.g_cost = g;
        self.h_cost = h;
        self.f_cost = g + h;
    }
}

impl PartialEq for Node {
    /// Nodes are the same tile when their coordinates match.
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Node {}

impl HeapItem for Node {
    #[inline]
    fn heap_slot(&self) -> usize {
        self.heap_slot
    }

    #[inline]
    fn set_heap_slot(&mut self, slot: usize) {
        self.heap_slot = slot;
    }
}

/// Frontier ranking: lowest `f_cost` first, then lowest `h_cost`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeOrder;

impl HeapOrder<Node> for NodeOrder {
    #[inline]
    fn compare(&self, a: &Node, b: &Node) -> Ordering {
        a.f_cost
            .cmp(&b.f_cost)
            .then_with(|| a.h_cost.cmp(&b.h_cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(f: i32, h: i32) -> Node {
        let mut n = Node::new(Point::ZERO, 0);
        n.set_costs(f - h, h);
        n
    }

    #[test]
    fn order_prefers_low_f_then_low_h() {
        let o = NodeOrder;
        assert_eq!(o.compare(&node(30, 10), &node(40, 0)), Ordering::Less);
        assert_eq!(o.compare(&node(40, 10), &node(40, 20)), Ordering::Less);
        assert_eq!(o.compare(&node(40, 20), &node(40, 20)), Ordering::Equal);
        assert_eq!(o.compare(&node(50, 0), &node(40, 20)), Ordering::Greater);
    }

    #[test]
    fn passability_uses_forbidden_mask() {
        let open = Node::new(Point::new(0, 0), 0);
        let water = Node::new(Point::new(1, 0), 0b010);
        assert!(open.is_passable(0));
        assert!(open.is_passable(u32::MAX));
        assert!(water.is_passable(0));
        assert!(water.is_passable(0b101));
        assert!(!water.is_passable(0b010));
        assert!(!water.is_passable(0b011));
    }

    #[test]
    fn equality_is_by_position() {
        let mut a = Node::new(Point::new(2, 3), 1);
        let b = Node::new(Point::new(2, 3), 4);
        a.set_costs(10, 20);
        assert_eq!(a, b);
        assert_eq!(a.f_cost(), 30);
        assert_ne!(a, Node::new(Point::new(3, 2), 1));
    }
}
