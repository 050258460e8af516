//! **pathviz-core** — grid and node data model for pathfinding visualization.
//!
//! This crate owns the mutable world a search runs over: a rectangular
//! [`Grid`] of [`Node`]s carrying walls, the start/end designation, and the
//! transient per-run search fields (`g`/`h`/`f`, parent links, open/closed
//! flags) that the search engine in `pathviz-search` reads and writes in
//! place. Layout (walls, start, end) and per-run state are deliberately
//! separate: [`Grid::reset`] clears only the latter, so the same grid can be
//! searched repeatedly under different configurations.

pub mod geom;
pub mod grid;
pub mod mazegen;
pub mod node;

pub use geom::Point;
pub use grid::{Grid, NodeId};
pub use node::Node;
