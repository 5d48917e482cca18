//! Pathfinding algorithms
//!
//! Unweighted shortest paths via breadth-first search, following edges either
//! along their direction or in both directions.

use super::common::{GraphView, NodeId};
use std::collections::VecDeque;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: f64,
}

impl PathResult {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// How edges may be traversed during a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Only from source to target of each edge
    Directed,
    /// In either direction
    Undirected,
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Returns `None` when either endpoint is missing from the view or no path exists.
/// A node is never enqueued twice, so cycles and self-loops are harmless.
pub fn bfs(
    view: &GraphView,
    source: NodeId,
    target: NodeId,
    traversal: Traversal,
) -> Option<PathResult> {
    let source_idx = *view.node_to_index.get(&source)?;
    let target_idx = *view.node_to_index.get(&target)?;

    let mut queue = VecDeque::new();
    let mut visited = vec![false; view.node_count];
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];

    queue.push_back(source_idx);
    visited[source_idx] = true;

    while let Some(current_idx) = queue.pop_front() {
        if current_idx == target_idx {
            // Reconstruct path
            let mut path = vec![view.index_to_node[target_idx]];
            let mut curr = target_idx;
            while let Some(prev) = parent[curr] {
                path.push(view.index_to_node[prev]);
                curr = prev;
            }
            path.reverse();
            return Some(PathResult {
                source,
                target,
                cost: (path.len() - 1) as f64,
                path,
            });
        }

        let mut visit = |next_idx: usize| {
            if !visited[next_idx] {
                visited[next_idx] = true;
                parent[next_idx] = Some(current_idx);
                queue.push_back(next_idx);
            }
        };

        match traversal {
            Traversal::Directed => view.successors(current_idx).iter().copied().for_each(&mut visit),
            Traversal::Undirected => view.neighbors(current_idx).for_each(&mut visit),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs() {
        // 0 -> 1 -> 2
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2)]);

        let result = bfs(&view, 0, 2, Traversal::Directed).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.cost, 2.0);
        assert_eq!(result.hops(), 2);
    }

    #[test]
    fn test_bfs_directed_does_not_walk_backwards() {
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2)]);

        assert!(bfs(&view, 2, 0, Traversal::Directed).is_none());
    }

    #[test]
    fn test_bfs_undirected_walks_backwards() {
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2)]);

        let result = bfs(&view, 2, 0, Traversal::Undirected).unwrap();
        assert_eq!(result.path, vec![2, 1, 0]);
    }

    #[test]
    fn test_bfs_same_node() {
        let view = GraphView::from_edges(1, &[(0, 0)]);

        let result = bfs(&view, 0, 0, Traversal::Undirected).unwrap();
        assert_eq!(result.path, vec![0]);
        assert_eq!(result.hops(), 0);
    }

    #[test]
    fn test_bfs_prefers_shortest_through_cycle() {
        // 0 -> 2, 2 -> 3, 2 -> 4, 3 -> 0, 4 -> 1
        let view = GraphView::from_edges(5, &[(0, 2), (2, 3), (2, 4), (3, 0), (4, 1)]);

        let result = bfs(&view, 0, 1, Traversal::Undirected).unwrap();
        assert_eq!(result.path, vec![0, 2, 4, 1]);
    }

    #[test]
    fn test_bfs_unknown_or_unreachable() {
        let view = GraphView::from_edges(2, &[]);

        assert!(bfs(&view, 0, 1, Traversal::Undirected).is_none());
        assert!(bfs(&view, 0, 9, Traversal::Undirected).is_none());
    }
}
