//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the recommendation topology for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Outgoing rows keep every edge, duplicates included, so `out_degree` counts
/// each recommendation. Incoming rows list each source at most once.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of distinct source node indices
    pub in_sources: Vec<usize>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the number of distinct predecessors of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Neighbors reachable in one hop when edge direction is ignored.
    ///
    /// May yield the same index twice (a node that is both successor and predecessor).
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.successors(idx)
            .iter()
            .chain(self.predecessors(idx).iter())
            .copied()
    }

    /// Total number of stored outgoing edges
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Helper to create GraphView from adjacency lists
    ///
    /// `incoming` rows are deduplicated while keeping first-seen order.
    pub fn from_adjacency_list(
        node_count: usize,
        index_to_node: Vec<NodeId>,
        node_to_index: HashMap<NodeId, usize>,
        outgoing: Vec<Vec<usize>>,
        incoming: Vec<Vec<usize>>,
    ) -> Self {
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();

        out_offsets.push(0);
        for neighbors in outgoing {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());
        }

        in_offsets.push(0);
        for sources in incoming {
            let start = in_sources.len();
            for source in sources {
                if !in_sources[start..].contains(&source) {
                    in_sources.push(source);
                }
            }
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }

    /// Build a view whose NodeIds are the dense indices themselves (test support)
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let index_to_node: Vec<NodeId> = (0..node_count as NodeId).collect();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut outgoing = vec![Vec::new(); node_count];
        let mut incoming = vec![Vec::new(); node_count];
        for &(source, target) in edges {
            outgoing[source].push(target);
            incoming[target].push(source);
        }

        Self::from_adjacency_list(node_count, index_to_node, node_to_index, outgoing, incoming)
    }
}
