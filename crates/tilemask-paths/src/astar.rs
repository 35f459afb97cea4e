use tilemask_core::Point;

use crate::Grid;
use crate::distance::octile;
use crate::path::{PathData, SearchOutcome};

impl Grid {
    /// Compute the shortest 4-way path from `start` to `goal` with A*,
    /// treating every tile whose type shares a bit with `mask` as an
    /// obstacle.
    ///
    /// The path is written to `path` from the goal back to the first step
    /// after `start` (the start tile itself is not included) and its length
    /// is returned. A length of 0 means either that no path exists or that
    /// `start == goal`; use [`search`](Self::search) to tell them apart.
    ///
    /// Ties between equally promising tiles are resolved by the lower
    /// heuristic and then by the heap's insertion order, with neighbors
    /// expanded south, west, east, north. The same inputs on an unchanged
    /// grid always produce the same path.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `goal` is outside the grid, or if `path` is
    /// shorter than [`size`](Self::size).
    pub fn find(&mut self, start: Point, goal: Point, mask: u32, path: &mut [PathData]) -> usize {
        assert!(
            path.len() >= self.size(),
            "path buffer holds {} steps, grid needs {}",
            path.len(),
            self.size()
        );
        let start_idx = self.index(start);
        let goal_idx = self.index(goal);
        log::trace!("find {start} -> {goal} mask={mask:#x}");

        self.clear_buffer();
        // Costs left over from earlier searches are never read: a node's
        // costs are only compared while it sits in this search's frontier,
        // and every node is rewritten before it is queued.
        self.nodes[start_idx].set_costs(0, 0);
        self.frontier.add(&mut self.nodes, start_idx);

        let mut expanded = 0usize;
        while let Some(ci) = self.frontier.remove_best(&mut self.nodes) {
            self.mark_visited(ci);
            expanded += 1;

            if ci == goal_idx {
                let len = self.retrace(start_idx, goal_idx, path);
                log::debug!("find {start} -> {goal}: {len} steps, {expanded} expanded");
                return len;
            }

            let current_pos = self.nodes[ci].pos();
            let current_g = self.nodes[ci].g_cost();
            let count = self.update_neighbors(ci);
            let neighbors = self.neighbors;

            for &ni in &neighbors[..count] {
                if !self.nodes[ni].is_passable(mask) || self.is_visited(ni) {
                    continue;
                }

                let neighbor_pos = self.nodes[ni].pos();
                let tentative_g = current_g + octile(current_pos, neighbor_pos);
                let queued = self.frontier.contains(&self.nodes, ni);
                if queued && tentative_g >= self.nodes[ni].g_cost() {
                    continue;
                }

                self.nodes[ni].set_costs(tentative_g, octile(neighbor_pos, goal));
                self.link_parent(ni, ci);

                if queued {
                    self.frontier.update_item(&mut self.nodes, ni);
                } else {
                    self.frontier.add(&mut self.nodes, ni);
                }
            }
        }

        log::debug!("find {start} -> {goal}: unreachable, {expanded} expanded");
        0
    }

    /// Like [`find`](Self::find), but reports why no steps were written.
    pub fn search(
        &mut self,
        start: Point,
        goal: Point,
        mask: u32,
        path: &mut [PathData],
    ) -> SearchOutcome {
        match self.find(start, goal, mask, path) {
            0 if start == goal => SearchOutcome::AlreadyThere,
            0 => SearchOutcome::Unreachable,
            n => SearchOutcome::Found(n),
        }
    }

    fn retrace(&self, start_idx: usize, goal_idx: usize, path: &mut [PathData]) -> usize {
        let mut len = 0;
        let mut ci = goal_idx;
        while ci != start_idx {
            let node = &self.nodes[ci];
            let p = node.pos();
            path[len] = PathData::new(p.x, p.y, node.type_mask());
            len += 1;
            ci = self.parent_of(ci);
        }
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngExt, SeedableRng};

    fn buffer(g: &Grid) -> Vec<PathData> {
        vec![PathData::default(); g.size()]
    }

    fn steps(path: &[PathData], len: usize) -> Vec<Point> {
        path[..len].iter().map(|d| d.pos()).collect()
    }

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn assert_valid_path(g: &Grid, start: Point, goal: Point, mask: u32, path: &[Point]) {
        assert_eq!(path.first(), Some(&goal));
        assert!(path.last().is_some_and(|p| p.is_adjacent_4(start)));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent_4(w[1]), "{} -> {} is not one step", w[0], w[1]);
        }
        for &p in path {
            assert!(g.is_passable(p, mask), "{p} is blocked");
        }
    }

    #[test]
    fn start_equals_goal_is_zero() {
        let mut g = Grid::filled(4, 4, 0).unwrap();
        let mut buf = buffer(&g);
        for p in g.bounds() {
            assert_eq!(g.find(p, p, 0, &mut buf), 0);
        }
        assert_eq!(
            g.search(Point::new(1, 1), Point::new(1, 1), 0, &mut buf),
            SearchOutcome::AlreadyThere
        );
    }

    #[test]
    fn open_3x3_takes_staircase() {
        let mut g = Grid::filled(3, 3, 0).unwrap();
        let mut buf = buffer(&g);
        let len = g.find(Point::new(0, 0), Point::new(2, 2), 0, &mut buf);
        assert_eq!(len, 4);
        // The octile heuristic favours tiles near the diagonal.
        assert_eq!(steps(&buf, len), pts(&[(2, 2), (1, 2), (1, 1), (1, 0)]));
        assert!(buf[..len].iter().all(|d| d.t == 0));
    }

    #[test]
    fn masked_middle_row_blocks_path() {
        let mut g = Grid::new(3, 3, &[0, 0, 0, 1, 1, 1, 0, 0, 0]).unwrap();
        let mut buf = buffer(&g);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        assert_eq!(g.find(start, goal, 1, &mut buf), 0);
        assert_eq!(g.search(start, goal, 1, &mut buf), SearchOutcome::Unreachable);

        // Without the mask bit the row is passable.
        let len = g.find(start, goal, 0, &mut buf);
        assert_eq!(len, 4);
        assert_valid_path(&g, start, goal, 0, &steps(&buf, len));
        // Other category bits do not block either.
        assert_eq!(g.find(start, goal, 0b110, &mut buf), 4);
    }

    #[test]
    fn routes_around_blocked_neighbor() {
        let mut g = Grid::filled(3, 3, 0).unwrap();
        g.set_type(Point::new(1, 0), 1);
        let mut buf = buffer(&g);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 0);
        let len = g.find(start, goal, 1, &mut buf);
        assert_eq!(len, 4);
        assert_eq!(steps(&buf, len), pts(&[(2, 0), (2, 1), (1, 1), (0, 1)]));
    }

    #[test]
    fn path_records_tile_types() {
        // Type 2 tiles are passable under mask 1.
        let mut g = Grid::new(3, 1, &[0, 2, 4]).unwrap();
        let mut buf = buffer(&g);
        let len = g.find(Point::new(0, 0), Point::new(2, 0), 1, &mut buf);
        assert_eq!(len, 2);
        assert_eq!(buf[0], PathData::new(2, 0, 4));
        assert_eq!(buf[1], PathData::new(1, 0, 2));
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let mut g = Grid::filled(3, 3, 0).unwrap();
        g.set_type(Point::new(2, 2), 4);
        let mut buf = buffer(&g);
        assert_eq!(g.find(Point::new(0, 0), Point::new(2, 2), 4, &mut buf), 0);
        assert_eq!(g.find(Point::new(0, 0), Point::new(2, 2), 3, &mut buf), 4);
    }

    #[test]
    fn adjacent_goal_is_one_step() {
        let mut g = Grid::filled(5, 5, 0).unwrap();
        let mut buf = buffer(&g);
        let len = g.find(Point::new(2, 2), Point::new(2, 3), 0, &mut buf);
        assert_eq!(len, 1);
        assert_eq!(buf[0].pos(), Point::new(2, 3));
    }

    #[test]
    fn detour_through_corridor() {
        // y=1 is a wall with a single gap at x=4.
        let mut g = Grid::filled(5, 3, 0).unwrap();
        for x in 0..4 {
            g.set_type(Point::new(x, 1), 1);
        }
        let mut buf = buffer(&g);
        let start = Point::new(0, 0);
        let goal = Point::new(0, 2);
        let len = g.find(start, goal, 1, &mut buf);
        assert_eq!(len, 10);
        let path = steps(&buf, len);
        assert_valid_path(&g, start, goal, 1, &path);
        assert!(path.contains(&Point::new(4, 1)));
    }

    #[test]
    fn repeated_search_is_identical() {
        let mut g = Grid::filled(8, 8, 0).unwrap();
        for y in 1..7 {
            g.set_type(Point::new(3, y), 2);
        }
        let mut a = buffer(&g);
        let mut b = buffer(&g);
        let start = Point::new(0, 4);
        let goal = Point::new(7, 3);
        let la = g.find(start, goal, 2, &mut a);
        // An unrelated search in between leaves stale costs behind.
        let mut scratch = buffer(&g);
        g.find(Point::new(7, 7), Point::new(0, 0), 0, &mut scratch);
        let lb = g.find(start, goal, 2, &mut b);
        assert_eq!(la, lb);
        assert_eq!(a[..la], b[..lb]);
    }

    #[test]
    #[should_panic(expected = "path buffer holds 3 steps")]
    fn undersized_buffer_panics() {
        let mut g = Grid::filled(2, 2, 0).unwrap();
        let mut buf = vec![PathData::default(); 3];
        g.find(Point::new(0, 0), Point::new(1, 1), 0, &mut buf);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 grid")]
    fn out_of_range_goal_panics() {
        let mut g = Grid::filled(2, 2, 0).unwrap();
        let mut buf = buffer(&g);
        g.find(Point::new(0, 0), Point::new(2, 0), 0, &mut buf);
    }

    /// Reference breadth-first distance in steps, or `None` if unreachable.
    fn bfs_len(g: &Grid, start: Point, goal: Point, mask: u32) -> Option<usize> {
        let mut dist = vec![usize::MAX; g.size()];
        let mut queue = std::collections::VecDeque::new();
        dist[g.index(start)] = 0;
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            if p == goal {
                return Some(dist[g.index(p)]);
            }
            let d = dist[g.index(p)];
            for n in [p.shift(0, -1), p.shift(-1, 0), p.shift(1, 0), p.shift(0, 1)] {
                let Some(ni) = g.try_index(n) else { continue };
                if dist[ni] != usize::MAX || !g.is_passable(n, mask) {
                    continue;
                }
                dist[ni] = d + 1;
                queue.push_back(n);
            }
        }
        None
    }

    #[test]
    fn random_maps_match_breadth_first_lengths() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let (w, h) = (12, 9);
        for _ in 0..40 {
            let types: Vec<u32> = (0..w * h)
                .map(|_| match rng.random_range(0..10u32) {
                    0..=1 => 1,
                    2 => 2,
                    _ => 0,
                })
                .collect();
            let mut g = Grid::new(w, h, &types).unwrap();
            let mut buf = buffer(&g);
            for _ in 0..10 {
                let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
                let goal = Point::new(rng.random_range(0..w), rng.random_range(0..h));
                let mask = rng.random_range(0..4u32);
                if start == goal || !g.is_passable(goal, mask) {
                    continue;
                }
                let len = g.find(start, goal, mask, &mut buf);
                match bfs_len(&g, start, goal, mask) {
                    Some(expected) => {
                        assert_eq!(len, expected, "{start} -> {goal} mask {mask}");
                        assert_valid_path(&g, start, goal, mask, &steps(&buf, len));
                    }
                    None => assert_eq!(len, 0, "{start} -> {goal} mask {mask}"),
                }
            }
        }
    }
}
