//! Graph algorithms module
//!
//! Algorithms are implemented in the `pronet-graph-algorithms` crate.
//! This module provides the integration/adapter layer: it projects a network
//! snapshot onto a dense `GraphView` and maps results back to programmer ids.

use crate::network::{NetworkError, NetworkRepository, NetworkResult, ProgrammerId};
use pronet_graph_algorithms::{GraphView, NodeId};
use rustc_hash::FxHashMap;
use std::collections::HashMap;

// Re-export algorithms
pub use pronet_graph_algorithms::{bfs, page_rank_scores, PageRankConfig, PathResult, Traversal};

/// A network snapshot projected onto a `GraphView`
///
/// NodeIds are the programmers' positions in `get_all()` order.
#[derive(Debug, Clone)]
pub struct ProjectedNetwork {
    pub view: GraphView,
    ids: Vec<ProgrammerId>,
    positions: FxHashMap<ProgrammerId, usize>,
}

impl ProjectedNetwork {
    /// NodeId of a programmer in the view
    pub fn node_id(&self, id: &ProgrammerId) -> NetworkResult<NodeId> {
        self.positions
            .get(id)
            .map(|&pos| pos as NodeId)
            .ok_or_else(|| NetworkError::ProgrammerNotFound(id.clone()))
    }

    /// Programmer behind a NodeId of the view
    pub fn programmer_id(&self, node: NodeId) -> &ProgrammerId {
        &self.ids[node as usize]
    }

    /// Programmer ids in view order
    pub fn ids(&self) -> &[ProgrammerId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Build a GraphView from the network for algorithm execution
///
/// Recommendations naming a programmer outside the snapshot are skipped.
pub fn project(network: &dyn NetworkRepository) -> ProjectedNetwork {
    let programmers = network.get_all();

    // 1. Build index mappings
    let ids: Vec<ProgrammerId> = programmers.iter().map(|p| p.id.clone()).collect();
    let mut positions = FxHashMap::default();
    positions.reserve(ids.len());
    for (idx, id) in ids.iter().enumerate() {
        positions.insert(id.clone(), idx);
    }

    let node_count = ids.len();
    let index_to_node: Vec<NodeId> = (0..node_count as NodeId).collect();
    let node_to_index: HashMap<NodeId, usize> = index_to_node
        .iter()
        .enumerate()
        .map(|(idx, &node)| (node, idx))
        .collect();

    // 2. Build adjacency lists
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];

    for (u_idx, programmer) in programmers.iter().enumerate() {
        for target in &programmer.recommendations {
            if let Some(&v_idx) = positions.get(target) {
                outgoing[u_idx].push(v_idx);
                incoming[v_idx].push(u_idx);
            }
        }
    }

    // 3. Convert to CSR
    let view = GraphView::from_adjacency_list(
        node_count,
        index_to_node,
        node_to_index,
        outgoing,
        incoming,
    );

    ProjectedNetwork { view, ids, positions }
}
