//! Search outcome and accumulated counters.

use std::time::{Duration, Instant};

use pathviz_core::Point;

/// Counters and timing for one completed run.
///
/// `visited` is the closed-set size; `expanded` counts main-loop iterations
/// that closed a node (the two coincide here because every pop either
/// terminates the search or closes exactly one node). On a no-path outcome
/// `path_len` is 0 and `path_cost` is 0.0 while the exploration counters
/// still describe how much of the grid was covered.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Node count of the reconstructed path, including both endpoints.
    pub path_len: usize,
    /// Accumulated movement cost of the path (the goal's `g` at termination).
    pub path_cost: f64,
    /// Nodes moved to the closed set.
    pub visited: usize,
    /// Main-loop iterations that expanded a node.
    pub expanded: usize,
    /// Wall-clock time from engine construction to termination.
    pub elapsed: Duration,
}

/// Outcome of a completed run: the ordered start→end path, or `None` when
/// the open set drained without reaching the goal, plus [`SearchStats`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Option<Vec<Point>>,
    pub stats: SearchStats,
}

/// Accumulates counters during a run; purely observational.
pub(crate) struct StatsCollector {
    visited: usize,
    expanded: usize,
    started: Instant,
}

impl StatsCollector {
    pub(crate) fn new() -> Self {
        Self {
            visited: 0,
            expanded: 0,
            started: Instant::now(),
        }
    }

    pub(crate) fn record_closed(&mut self) {
        self.visited += 1;
    }

    pub(crate) fn record_expansion(&mut self) {
        self.expanded += 1;
    }

    pub(crate) fn finish(&self, path_len: usize, path_cost: f64) -> SearchStats {
        SearchStats {
            path_len,
            path_cost,
            visited: self.visited,
            expanded: self.expanded,
            elapsed: self.started.elapsed(),
        }
    }
}
