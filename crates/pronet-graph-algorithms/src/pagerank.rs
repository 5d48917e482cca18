//! PageRank algorithm implementation
//!
//! Fixed-round relaxation: every round recomputes all scores from the
//! previous round's buffer, so the result depends only on the topology and
//! the round count, never on node order.

use super::common::GraphView;

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of relaxation rounds
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 20,
        }
    }
}

/// Calculate PageRank scores indexed by dense node index
///
/// Each score is `(1 - d) + d * sum(score(r) / out_degree(r))` over the
/// distinct predecessors `r`. A source with no outgoing edges contributes nothing.
pub fn page_rank_scores(view: &GraphView, config: PageRankConfig) -> Vec<f64> {
    let n = view.node_count;

    // Initial score is 1.0 for all nodes
    let mut scores = vec![1.0; n];
    let mut next_scores = vec![0.0; n];

    let d = config.damping_factor;
    let base_score = 1.0 - d;

    for _ in 0..config.iterations {
        for (i, next) in next_scores.iter_mut().enumerate() {
            let mut sum_incoming = 0.0;

            for &source_idx in view.predecessors(i) {
                let out_degree = view.out_degree(source_idx);
                if out_degree > 0 {
                    sum_incoming += scores[source_idx] / out_degree as f64;
                }
            }

            *next = base_score + d * sum_incoming;
        }

        // Swap buffers
        std::mem::swap(&mut scores, &mut next_scores);
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_pagerank_star() {
        // Center (0) points to leaves (1, 2), leaves point back to center
        let view = GraphView::from_edges(3, &[(0, 1), (0, 2), (1, 0), (2, 0)]);

        let scores = page_rank_scores(&view, PageRankConfig::default());

        assert!(scores[0] > scores[1]);
        assert!((scores[1] - scores[2]).abs() < EPSILON);
    }

    #[test]
    fn test_isolated_node_keeps_base_score() {
        let view = GraphView::from_edges(2, &[(0, 0)]);

        let scores = page_rank_scores(&view, PageRankConfig::default());

        assert!((scores[1] - 0.15).abs() < EPSILON);
    }

    #[test]
    fn test_self_loop_terminates() {
        let view = GraphView::from_edges(1, &[(0, 0)]);

        let scores = page_rank_scores(&view, PageRankConfig::default());

        // 20 rounds of x -> 0.15 + 0.85x from 1.0 stays at the fixed point 1.0
        assert!((scores[0] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_chain_values_after_fixed_rounds() {
        // 0 -> 1: node 0 never gains, node 1 settles at 0.15 + 0.85 * 0.15
        let view = GraphView::from_edges(2, &[(0, 1)]);

        let scores = page_rank_scores(&view, PageRankConfig::default());

        assert!((scores[0] - 0.15).abs() < EPSILON);
        assert!((scores[1] - (0.15 + 0.85 * 0.15)).abs() < EPSILON);
    }

    #[test]
    fn test_zero_iterations_returns_initial_scores() {
        let view = GraphView::from_edges(2, &[(0, 1)]);
        let config = PageRankConfig {
            iterations: 0,
            ..PageRankConfig::default()
        };

        assert_eq!(page_rank_scores(&view, config), vec![1.0, 1.0]);
    }

    #[test]
    fn test_empty_view() {
        let view = GraphView::from_edges(0, &[]);
        assert!(page_rank_scores(&view, PageRankConfig::default()).is_empty());
    }
}
