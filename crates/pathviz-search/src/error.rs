//! Error taxonomy for search construction and reconstruction.

use pathviz_core::Point;
use thiserror::Error;

/// A configuration or corrupted-state failure.
///
/// "No path exists" is *not* an error — it is a normal outcome reported
/// through [`SearchResult`](crate::SearchResult) with `path == None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No start cell has been designated on the grid.
    #[error("no start cell designated")]
    StartUnset,

    /// No end cell has been designated on the grid.
    #[error("no end cell designated")]
    EndUnset,

    /// The designated start cell is a wall.
    #[error("start cell {0} is a wall")]
    StartIsWall(Point),

    /// The designated end cell is a wall.
    #[error("end cell {0} is a wall")]
    EndIsWall(Point),

    /// Path reconstruction walked more steps than the grid has cells,
    /// which can only happen if a parent link forms a cycle.
    #[error("parent chain exceeded {0} steps, cycle suspected")]
    ParentCycle(usize),
}
