//! Best-first search over a `pathviz_core` grid.
//!
//! The engine runs a priority-queue-driven A* variant with a configurable
//! heuristic, optional diagonal movement (with a no-corner-cutting rule),
//! and a heuristic weight:
//!
//! - `weight == 1.0` with a consistent heuristic is standard, optimal A*;
//! - `weight > 1.0` biases greedy (faster, possibly suboptimal);
//! - `weight < 1.0` biases toward Dijkstra-like exhaustiveness.
//!
//! Two execution modes share one code path: [`Search::run`] drives the loop
//! to completion, while [`Search::step`] performs exactly one iteration
//! (one pop plus its neighbor relaxations) and suspends, so an animation
//! loop can render each frame. The per-node state machine is
//! *unseen → open → closed*; closed nodes are final and never reconsidered,
//! which is correct for admissible heuristics and a deliberate inexactness
//! under `weight != 1.0`.

mod distance;
mod engine;
mod error;
mod heap;
mod path;
mod stats;

pub use distance::{DIAG_COST, Heuristic, ORTHO_COST, chebyshev, euclidean, manhattan, move_cost};
pub use engine::{Search, SearchConfig, Step};
pub use error::SearchError;
pub use heap::MinHeap;
pub use stats::{SearchResult, SearchStats};
