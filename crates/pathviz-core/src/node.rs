//! Per-cell search record: [`Node`].

use crate::geom::Point;
use crate::grid::NodeId;

/// One node per grid cell.
///
/// `wall`, `start` and `end` describe the grid layout and survive
/// [`reset`](crate::Grid::reset); everything else is transient per-run
/// search state owned conceptually by the engine but stored here so a
/// rendering layer can poll it directly.
///
/// `parent` is a flat index into the grid's node storage, never a
/// reference: the grid exclusively owns all nodes, and the parent link is
/// only a lookup key recording the predecessor on the best known path.
#[derive(Debug, Clone)]
pub struct Node {
    pub pos: Point,
    /// Accumulated cost from start along the best known path.
    pub g: f64,
    /// Weighted heuristic estimate of remaining cost to the end.
    pub h: f64,
    /// Priority key: `f = g + h` whenever the node is or has been open.
    pub f: f64,
    pub parent: Option<NodeId>,
    pub wall: bool,
    pub start: bool,
    pub end: bool,
    /// Closed-set membership. Once set for a run, never cleared or revisited.
    pub visited: bool,
    /// Open-set membership: true iff the node currently sits in the queue.
    pub open: bool,
    /// Member of the final reconstructed path.
    pub in_path: bool,
}

impl Node {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: None,
            wall: false,
            start: false,
            end: false,
            visited: false,
            open: false,
            in_path: false,
        }
    }

    /// Clear the transient per-run fields, preserving layout flags.
    pub(crate) fn clear_search_state(&mut self) {
        self.g = 0.0;
        self.h = 0.0;
        self.f = 0.0;
        self.parent = None;
        self.visited = false;
        self.open = false;
        self.in_path = false;
    }
}
