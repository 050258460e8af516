//! A rectangular grid of [`Node`]s with wall/start/end mutation and
//! neighbor enumeration.

use std::ops::{Index, IndexMut};

use crate::geom::Point;
use crate::node::Node;

/// Flat row-major index into a grid's node storage (`y * width + x`).
pub type NodeId = usize;

/// Owns every [`Node`] of a `width × height` rectangle, plus the cached
/// start/end designation.
///
/// Layout (walls, start, end) is mutated by the caller between searches;
/// the transient search fields on each node are written by the engine and
/// cleared with [`reset`](Self::reset). Only one engine may operate on a
/// grid at a time — the engine borrows the grid mutably for its lifetime,
/// so the compiler enforces this.
#[derive(Debug, Clone)]
pub struct Grid {
    nodes: Vec<Node>,
    width: i32,
    height: i32,
    start: Option<NodeId>,
    end: Option<NodeId>,
}

impl Grid {
    /// Create a wall-free grid with no start/end designated.
    ///
    /// Dimensions are clamped to be non-negative.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut nodes = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                nodes.push(Node::new(Point::new(x, y)));
            }
        }
        Self {
            nodes,
            width,
            height,
            start: None,
            end: None,
        }
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has zero cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `p` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<NodeId> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, id: NodeId) -> Point {
        Point::new(
            (id % self.width as usize) as i32,
            (id / self.width as usize) as i32,
        )
    }

    /// The node at `p`, or `None` out of bounds. Never panics.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to the node at `p`, or `None` out of bounds.
    #[inline]
    pub fn node_mut(&mut self, p: Point) -> Option<&mut Node> {
        self.idx(p).map(|i| &mut self.nodes[i])
    }

    // -----------------------------------------------------------------------
    // Layout mutation
    // -----------------------------------------------------------------------

    /// The current start cell, if designated.
    pub fn start(&self) -> Option<Point> {
        self.start.map(|i| self.nodes[i].pos)
    }

    /// The current end cell, if designated.
    pub fn end(&self) -> Option<Point> {
        self.end.map(|i| self.nodes[i].pos)
    }

    /// Flat index of the start cell, if designated.
    pub fn start_id(&self) -> Option<NodeId> {
        self.start
    }

    /// Flat index of the end cell, if designated.
    pub fn end_id(&self) -> Option<NodeId> {
        self.end
    }

    /// Designate `p` as the start cell, clearing the previous holder.
    ///
    /// No-op when `p` is out of bounds, a wall, or the current end cell.
    pub fn set_start(&mut self, p: Point) {
        let Some(i) = self.idx(p) else {
            return;
        };
        if self.nodes[i].wall || self.end == Some(i) {
            return;
        }
        if let Some(prev) = self.start.take() {
            self.nodes[prev].start = false;
        }
        self.nodes[i].start = true;
        self.start = Some(i);
    }

    /// Designate `p` as the end cell, clearing the previous holder.
    ///
    /// No-op when `p` is out of bounds, a wall, or the current start cell.
    pub fn set_end(&mut self, p: Point) {
        let Some(i) = self.idx(p) else {
            return;
        };
        if self.nodes[i].wall || self.start == Some(i) {
            return;
        }
        if let Some(prev) = self.end.take() {
            self.nodes[prev].end = false;
        }
        self.nodes[i].end = true;
        self.end = Some(i);
    }

    /// Flip the wall flag at `p`. No-op on start/end cells or out of bounds.
    pub fn toggle_wall(&mut self, p: Point) {
        let Some(i) = self.idx(p) else {
            return;
        };
        if self.nodes[i].start || self.nodes[i].end {
            return;
        }
        self.nodes[i].wall = !self.nodes[i].wall;
    }

    /// Set the wall flag at `p` directly. Same no-op rules as
    /// [`toggle_wall`](Self::toggle_wall).
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        let Some(i) = self.idx(p) else {
            return;
        };
        if self.nodes[i].start || self.nodes[i].end {
            return;
        }
        self.nodes[i].wall = wall;
    }

    /// Set every non-start/end cell's wall flag to `wall`.
    pub fn fill_walls(&mut self, wall: bool) {
        for node in &mut self.nodes {
            if !node.start && !node.end {
                node.wall = wall;
            }
        }
    }

    /// Clear all transient per-run search state, preserving walls and the
    /// start/end designation. Idempotent; must run between searches on the
    /// same grid.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.clear_search_state();
        }
    }

    // -----------------------------------------------------------------------
    // Neighbor enumeration
    // -----------------------------------------------------------------------

    /// Append the walkable neighbors of `p` into `buf` (up to 4, or 8 with
    /// `diagonals`). The caller clears `buf` beforehand.
    ///
    /// Off-grid and wall cells are excluded. A diagonal candidate is also
    /// excluded when either orthogonal cell adjacent to the move is a wall:
    /// a path may never cut between two wall corners.
    pub fn neighbors(&self, p: Point, diagonals: bool, buf: &mut Vec<Point>) {
        let passable = |q: Point| self.node(q).is_some_and(|n| !n.wall);

        for n in p.neighbors_4() {
            if passable(n) {
                buf.push(n);
            }
        }
        if !diagonals {
            return;
        }
        for (dx, dy) in [(1, -1), (1, 1), (-1, 1), (-1, -1)] {
            let n = p.shift(dx, dy);
            if !passable(n) {
                continue;
            }
            // No corner-cutting: both orthogonal corners must be clear.
            if passable(p.shift(dx, 0)) && passable(p.shift(0, dy)) {
                buf.push(n);
            }
        }
    }
}

impl Index<NodeId> for Grid {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl IndexMut<NodeId> for Grid {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }
}
