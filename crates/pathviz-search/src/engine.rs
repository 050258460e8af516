//! The best-first search engine.

use std::hash::{Hash, Hasher};

use pathviz_core::{Grid, NodeId, Point};

use crate::distance::{Heuristic, move_cost};
use crate::error::SearchError;
use crate::heap::MinHeap;
use crate::path::reconstruct;
use crate::stats::{SearchResult, StatsCollector};

/// Search configuration: heuristic kind, connectivity, heuristic weight.
///
/// `weight == 1.0` with an admissible heuristic gives optimal A*; larger
/// weights trade optimality for speed, smaller ones push toward Dijkstra.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// Allow 8-way movement (diagonals cost √2, corner-cutting forbidden).
    pub diagonals: bool,
    /// Multiplier applied to the heuristic before it enters `f`.
    pub weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            diagonals: false,
            weight: 1.0,
        }
    }
}

/// One open-set entry. Identity (for removal and membership) is the node
/// id alone; `f` and `h` ride along as the frozen priority at push time.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    id: NodeId,
    f: f64,
    h: f64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OpenEntry {}

impl Hash for OpenEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Priority key for the open heap.
///
/// Tie-break policy: equal `f` is broken by smaller `h` (prefer nodes
/// closer to the goal), then by smaller node id (row-major order), so path
/// output is reproducible bit-for-bit.
#[derive(Clone, Copy, PartialEq)]
struct Score {
    f: f64,
    h: f64,
    id: NodeId,
}

impl Eq for Score {}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.h.total_cmp(&other.h))
            .then(self.id.cmp(&other.id))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

fn entry_score(e: &OpenEntry) -> Score {
    Score {
        f: e.f,
        h: e.h,
        id: e.id,
    }
}

/// Result of one [`Search::step`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// One node was expanded; the search can be resumed with another call.
    InProgress {
        /// The node expanded on this step.
        current: Point,
        /// Snapshot of all nodes closed so far, in closure order.
        visited: Vec<Point>,
    },
    /// The search terminated on this step (or already had).
    Done(SearchResult),
}

/// A suspendable best-first search over a [`Grid`].
///
/// The engine borrows the grid mutably for its whole lifetime, so exactly
/// one search can operate on a grid at a time. The grid must carry no stale
/// search state: use a fresh grid or call [`Grid::reset`] before
/// constructing the engine.
///
/// Per-node states move *unseen → open → closed*; closed is terminal for
/// the run. Construction fails fast on an unset or walled start/end rather
/// than running a meaningless search. Cancellation is dropping the engine;
/// there is no internal timeout — callers cap `step` invocations if bounded
/// run time matters.
pub struct Search<'g> {
    grid: &'g mut Grid,
    config: SearchConfig,
    open: MinHeap<OpenEntry, Score, fn(&OpenEntry) -> Score>,
    goal: NodeId,
    goal_pos: Point,
    stats: StatsCollector,
    visited_log: Vec<Point>,
    nbuf: Vec<Point>,
    result: Option<SearchResult>,
}

impl<'g> Search<'g> {
    /// Validate the grid's start/end designation and seed the open set.
    pub fn new(grid: &'g mut Grid, config: SearchConfig) -> Result<Self, SearchError> {
        let start = grid.start_id().ok_or(SearchError::StartUnset)?;
        let goal = grid.end_id().ok_or(SearchError::EndUnset)?;
        if grid[start].wall {
            return Err(SearchError::StartIsWall(grid.point(start)));
        }
        if grid[goal].wall {
            return Err(SearchError::EndIsWall(grid.point(goal)));
        }

        let start_pos = grid.point(start);
        let goal_pos = grid.point(goal);
        let h = config.heuristic.distance(start_pos, goal_pos) * config.weight;
        {
            let node = &mut grid[start];
            node.g = 0.0;
            node.h = h;
            node.f = h;
            node.parent = None;
            node.open = true;
        }

        let mut open: MinHeap<OpenEntry, Score, fn(&OpenEntry) -> Score> =
            MinHeap::new(entry_score);
        open.push(OpenEntry { id: start, f: h, h });

        log::debug!(
            "search {start_pos} -> {goal_pos} ({:?}, diagonals: {}, weight: {})",
            config.heuristic,
            config.diagonals,
            config.weight,
        );

        Ok(Self {
            grid,
            config,
            open,
            goal,
            goal_pos,
            stats: StatsCollector::new(),
            visited_log: Vec::new(),
            nbuf: Vec::with_capacity(8),
            result: None,
        })
    }

    /// The configuration this search runs under.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes closed so far, in closure order.
    pub fn visited_so_far(&self) -> &[Point] {
        &self.visited_log
    }

    /// Perform exactly one main-loop iteration: pop the minimum-`f` node,
    /// test it against the goal, otherwise close it and relax its
    /// neighbors. Returns control to the caller after bounded work.
    ///
    /// Calling `step` again after termination returns the same
    /// [`Step::Done`] result.
    pub fn step(&mut self) -> Result<Step, SearchError> {
        if let Some(result) = &self.result {
            return Ok(Step::Done(result.clone()));
        }

        let Some(entry) = self.open.pop() else {
            // Open set drained without reaching the goal: a normal no-path
            // outcome, with stats describing the explored region.
            return Ok(Step::Done(self.finish(None)));
        };
        let current = entry.id;

        if current == self.goal {
            self.grid[current].open = false;
            let path = reconstruct(self.grid, self.goal)?;
            return Ok(Step::Done(self.finish(Some(path))));
        }

        // Close the node.
        let current_pos = self.grid.point(current);
        {
            let node = &mut self.grid[current];
            node.open = false;
            node.visited = true;
        }
        self.stats.record_closed();
        self.stats.record_expansion();
        self.visited_log.push(current_pos);

        let current_g = self.grid[current].g;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.grid.neighbors(current_pos, self.config.diagonals, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = self.grid.idx(np) else {
                continue;
            };
            if self.grid[ni].visited {
                // Closed is final; its g was committed at closure time.
                continue;
            }
            let tentative = current_g + move_cost(current_pos, np);

            if !self.grid[ni].open {
                let h = self.config.heuristic.distance(np, self.goal_pos) * self.config.weight;
                let node = &mut self.grid[ni];
                node.g = tentative;
                node.h = h;
                node.f = tentative + h;
                node.parent = Some(current);
                node.open = true;
                self.open.push(OpenEntry { id: ni, f: node.f, h });
            } else if tentative < self.grid[ni].g {
                // Cheaper path found. The heap has no decrease-key, so
                // drop the stale entry and re-push at the new priority.
                let node = &mut self.grid[ni];
                node.g = tentative;
                node.f = tentative + node.h;
                node.parent = Some(current);
                let refreshed = OpenEntry {
                    id: ni,
                    f: node.f,
                    h: node.h,
                };
                self.open.remove(&refreshed);
                self.open.push(refreshed);
            }
        }
        self.nbuf = nbuf;

        Ok(Step::InProgress {
            current: current_pos,
            visited: self.visited_log.clone(),
        })
    }

    /// Drive [`step`](Self::step) to completion.
    pub fn run(mut self) -> Result<SearchResult, SearchError> {
        loop {
            if let Step::Done(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    fn finish(&mut self, path: Option<Vec<Point>>) -> SearchResult {
        let (path_len, path_cost) = match &path {
            Some(p) => (p.len(), self.grid[self.goal].g),
            None => (0, 0.0),
        };
        let stats = self.stats.finish(path_len, path_cost);
        log::debug!(
            "search finished: path: {}, visited: {}, elapsed: {:?}",
            if path.is_some() { "found" } else { "none" },
            stats.visited,
            stats.elapsed,
        );
        let result = SearchResult { path, stats };
        self.result = Some(result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DIAG_COST;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPS: f64 = 1e-6;

    fn open_grid(w: i32, h: i32, start: Point, end: Point) -> Grid {
        let mut g = Grid::new(w, h);
        g.set_start(start);
        g.set_end(end);
        g
    }

    fn config(heuristic: Heuristic, diagonals: bool, weight: f64) -> SearchConfig {
        SearchConfig {
            heuristic,
            diagonals,
            weight,
        }
    }

    /// O(n²) selection-based Dijkstra, independent of the engine and heap.
    fn reference_shortest_cost(grid: &Grid, diagonals: bool) -> Option<f64> {
        let start = grid.start_id()?;
        let goal = grid.end_id()?;
        let n = grid.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut done = vec![false; n];
        dist[start] = 0.0;
        let mut buf = Vec::new();
        loop {
            let mut best: Option<usize> = None;
            for i in 0..n {
                if !done[i]
                    && dist[i].is_finite()
                    && best.is_none_or(|b| dist[i] < dist[b])
                {
                    best = Some(i);
                }
            }
            let i = best?;
            if i == goal {
                return Some(dist[i]);
            }
            done[i] = true;
            let p = grid.point(i);
            buf.clear();
            grid.neighbors(p, diagonals, &mut buf);
            for &np in &buf {
                let j = grid.idx(np).unwrap();
                let nd = dist[i] + move_cost(p, np);
                if nd < dist[j] {
                    dist[j] = nd;
                }
            }
        }
    }

    #[test]
    fn empty_5x5_diagonal_path() {
        let mut g = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
        let result = Search::new(&mut g, config(Heuristic::Manhattan, true, 1.0))
            .unwrap()
            .run()
            .unwrap();
        let path = result.path.unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Point::new(0, 0));
        assert_eq!(path[4], Point::new(4, 4));
        assert!((result.stats.path_cost - 4.0 * DIAG_COST).abs() < EPS);
        assert_eq!(result.stats.path_len, 5);
    }

    #[test]
    fn empty_5x5_cardinal_path() {
        let mut g = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
        let result = Search::new(&mut g, config(Heuristic::Manhattan, false, 1.0))
            .unwrap()
            .run()
            .unwrap();
        let path = result.path.unwrap();
        assert_eq!(path.len(), 9);
        assert!((result.stats.path_cost - 8.0).abs() < EPS);
    }

    #[test]
    fn full_barrier_yields_no_path() {
        let mut g = open_grid(5, 5, Point::new(0, 2), Point::new(4, 2));
        for y in 0..5 {
            g.toggle_wall(Point::new(2, y));
        }
        let result = Search::new(&mut g, config(Heuristic::Manhattan, true, 1.0))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(result.path, None);
        assert_eq!(result.stats.path_len, 0);
        assert_eq!(result.stats.path_cost, 0.0);
        assert!(result.stats.visited > 0);
    }

    #[test]
    fn enclosed_start_visits_whole_reachable_region() {
        // An L of walls encloses the 2x2 region around the start.
        let mut g = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
        for p in [(2, 0), (2, 1), (2, 2), (1, 2), (0, 2)] {
            g.set_wall(Point::new(p.0, p.1), true);
        }
        let result = Search::new(&mut g, config(Heuristic::Manhattan, false, 1.0))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(result.path, None);
        assert_eq!(result.stats.visited, 4);
        assert_eq!(result.stats.expanded, 4);
    }

    #[test]
    fn fails_fast_on_missing_configuration() {
        let mut g = Grid::new(3, 3);
        let err = Search::new(&mut g, SearchConfig::default()).err();
        assert_eq!(err, Some(SearchError::StartUnset));

        g.set_start(Point::new(0, 0));
        let err = Search::new(&mut g, SearchConfig::default()).err();
        assert_eq!(err, Some(SearchError::EndUnset));

        g.set_end(Point::new(2, 2));
        assert!(Search::new(&mut g, SearchConfig::default()).is_ok());
    }

    #[test]
    fn fails_fast_on_walled_endpoint() {
        // The grid API refuses to wall a start cell, so corrupt it directly
        // to exercise the defensive check.
        let mut g = open_grid(3, 3, Point::new(0, 0), Point::new(2, 2));
        g.node_mut(Point::new(0, 0)).unwrap().wall = true;
        let err = Search::new(&mut g, SearchConfig::default()).err();
        assert_eq!(err, Some(SearchError::StartIsWall(Point::new(0, 0))));
    }

    #[test]
    fn optimal_on_random_grids_cardinal() {
        for seed in 0..8u64 {
            let mut g = open_grid(12, 12, Point::new(0, 0), Point::new(11, 11));
            g.generate_maze(0.25, &mut StdRng::seed_from_u64(seed));
            let expected = reference_shortest_cost(&g, false);
            let result = Search::new(&mut g, config(Heuristic::Manhattan, false, 1.0))
                .unwrap()
                .run()
                .unwrap();
            match expected {
                Some(cost) => {
                    let got = result.stats.path_cost;
                    assert!(
                        (got - cost).abs() < EPS,
                        "seed {seed}: got {got}, expected {cost}"
                    );
                }
                None => assert_eq!(result.path, None, "seed {seed}"),
            }
        }
    }

    #[test]
    fn optimal_on_random_grids_diagonal() {
        for seed in 0..8u64 {
            let mut g = open_grid(12, 12, Point::new(0, 0), Point::new(11, 11));
            g.generate_maze(0.3, &mut StdRng::seed_from_u64(100 + seed));
            let expected = reference_shortest_cost(&g, true);
            let result = Search::new(&mut g, config(Heuristic::Chebyshev, true, 1.0))
                .unwrap()
                .run()
                .unwrap();
            match expected {
                Some(cost) => {
                    let got = result.stats.path_cost;
                    assert!(
                        (got - cost).abs() < EPS,
                        "seed {seed}: got {got}, expected {cost}"
                    );
                }
                None => assert_eq!(result.path, None, "seed {seed}"),
            }
        }
    }

    #[test]
    fn returned_paths_never_cut_corners() {
        for seed in 0..8u64 {
            let mut g = open_grid(14, 14, Point::new(0, 0), Point::new(13, 13));
            g.generate_maze(0.3, &mut StdRng::seed_from_u64(200 + seed));
            let walls: Vec<Point> = (0..g.len()).filter(|&i| g[i].wall).map(|i| g.point(i)).collect();
            let result = Search::new(&mut g, config(Heuristic::Euclidean, true, 1.0))
                .unwrap()
                .run()
                .unwrap();
            let Some(path) = result.path else { continue };
            for pair in path.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a.is_diagonal_to(b) {
                    let c1 = Point::new(b.x, a.y);
                    let c2 = Point::new(a.x, b.y);
                    assert!(
                        !walls.contains(&c1) && !walls.contains(&c2),
                        "seed {seed}: diagonal {a} -> {b} cuts a wall corner"
                    );
                }
            }
        }
    }

    #[test]
    fn weighted_search_finds_path_at_or_above_optimal_cost() {
        let mut g = open_grid(12, 12, Point::new(0, 0), Point::new(11, 11));
        g.generate_maze(0.2, &mut StdRng::seed_from_u64(7));
        let optimal = reference_shortest_cost(&g, true).unwrap();
        let result = Search::new(&mut g, config(Heuristic::Manhattan, true, 2.5))
            .unwrap()
            .run()
            .unwrap();
        assert!(result.path.is_some());
        assert!(result.stats.path_cost >= optimal - EPS);
    }

    #[test]
    fn step_and_run_agree() {
        for seed in 0..4u64 {
            let mut g = open_grid(15, 15, Point::new(1, 1), Point::new(13, 13));
            g.generate_maze(0.3, &mut StdRng::seed_from_u64(300 + seed));
            let mut g2 = g.clone();

            let full = Search::new(&mut g, config(Heuristic::Manhattan, true, 1.0))
                .unwrap()
                .run()
                .unwrap();

            let mut search = Search::new(&mut g2, config(Heuristic::Manhattan, true, 1.0)).unwrap();
            let stepped = loop {
                if let Step::Done(result) = search.step().unwrap() {
                    break result;
                }
            };

            assert_eq!(full.path, stepped.path, "seed {seed}");
            assert_eq!(full.stats.visited, stepped.stats.visited, "seed {seed}");
            assert_eq!(full.stats.expanded, stepped.stats.expanded, "seed {seed}");
            assert_eq!(full.stats.path_len, stepped.stats.path_len, "seed {seed}");
        }
    }

    #[test]
    fn step_reports_progress_and_repeats_done() {
        let mut g = open_grid(4, 4, Point::new(0, 0), Point::new(3, 3));
        let mut search = Search::new(&mut g, config(Heuristic::Manhattan, true, 1.0)).unwrap();

        // First step must expand the start node.
        match search.step().unwrap() {
            Step::InProgress { current, visited } => {
                assert_eq!(current, Point::new(0, 0));
                assert_eq!(visited, vec![Point::new(0, 0)]);
            }
            Step::Done(_) => panic!("terminated on first step"),
        }

        let done = loop {
            if let Step::Done(result) = search.step().unwrap() {
                break result;
            }
        };
        // Stepping a finished search hands back the same result.
        match search.step().unwrap() {
            Step::Done(again) => assert_eq!(again.path, done.path),
            Step::InProgress { .. } => panic!("resumed after termination"),
        }
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let mut g = open_grid(12, 12, Point::new(0, 0), Point::new(11, 11));
        g.generate_maze(0.25, &mut StdRng::seed_from_u64(9));
        let mut g2 = g.clone();
        let a = Search::new(&mut g, config(Heuristic::Manhattan, true, 1.0))
            .unwrap()
            .run()
            .unwrap();
        let b = Search::new(&mut g2, config(Heuristic::Manhattan, true, 1.0))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.stats.visited, b.stats.visited);
    }

    #[test]
    fn node_flags_reflect_search_outcome() {
        let mut g = open_grid(6, 6, Point::new(0, 0), Point::new(5, 5));
        let result = Search::new(&mut g, config(Heuristic::Manhattan, false, 1.0))
            .unwrap()
            .run()
            .unwrap();
        let path = result.path.unwrap();
        for p in &path {
            assert!(g.node(*p).unwrap().in_path, "{p} not flagged in_path");
        }
        // visited flags match the closed-set count.
        let flagged = (0..g.len()).filter(|&i| g[i].visited).count();
        assert_eq!(flagged, result.stats.visited);
    }

    #[test]
    fn grid_is_reusable_after_reset() {
        let mut g = open_grid(8, 8, Point::new(0, 0), Point::new(7, 7));
        let first = Search::new(&mut g, config(Heuristic::Manhattan, true, 1.0))
            .unwrap()
            .run()
            .unwrap();
        g.reset();
        let second = Search::new(&mut g, config(Heuristic::Manhattan, true, 1.0))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(first.path, second.path);
        assert_eq!(first.stats.visited, second.stats.visited);
    }

    #[test]
    fn visited_equals_expanded() {
        let mut g = open_grid(10, 10, Point::new(0, 0), Point::new(9, 9));
        g.generate_maze(0.2, &mut StdRng::seed_from_u64(3));
        let result = Search::new(&mut g, config(Heuristic::Manhattan, false, 1.0))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(result.stats.visited, result.stats.expanded);
    }
}
