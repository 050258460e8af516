//! Path reconstruction from parent back-references.

use pathviz_core::{Grid, NodeId, Point};

use crate::error::SearchError;

/// Walk `parent` links from `goal` back to the parentless start, marking
/// each node's `in_path` flag, and return the path in start→goal order.
///
/// Correct relaxation never re-parents a closed node, so the chain cannot
/// cycle; the walk is still bounded by the cell count and reports
/// [`SearchError::ParentCycle`] rather than looping forever on corrupted
/// state.
pub(crate) fn reconstruct(grid: &mut Grid, goal: NodeId) -> Result<Vec<Point>, SearchError> {
    let limit = grid.len();
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(id) = cursor {
        if path.len() == limit {
            return Err(SearchError::ParentCycle(limit));
        }
        let node = &mut grid[id];
        node.in_path = true;
        path.push(node.pos);
        cursor = node.parent;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_and_marks_chain() {
        let mut g = Grid::new(4, 1);
        // 0 <- 1 <- 2 along the row.
        g[1].parent = Some(0);
        g[2].parent = Some(1);
        let path = reconstruct(&mut g, 2).unwrap();
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        assert!(g[0].in_path && g[1].in_path && g[2].in_path);
        assert!(!g[3].in_path);
    }

    #[test]
    fn single_node_chain() {
        let mut g = Grid::new(2, 2);
        let path = reconstruct(&mut g, 3).unwrap();
        assert_eq!(path, vec![Point::new(1, 1)]);
    }

    #[test]
    fn detects_parent_cycle() {
        let mut g = Grid::new(3, 3);
        g[0].parent = Some(1);
        g[1].parent = Some(0);
        assert_eq!(reconstruct(&mut g, 0), Err(SearchError::ParentCycle(9)));
    }
}
