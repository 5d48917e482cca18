//! Degrees of separation
//!
//! A recommendation connects two programmers whichever way it points, so the
//! search walks edges in both directions and the distance is symmetric.

use super::DegreesOfSeparation;
use crate::algo::{bfs, project, PathResult, ProjectedNetwork, Traversal};
use crate::network::{NetworkRepository, NetworkResult, ProgrammerId};
use tracing::trace;

/// Separation reported for programmers with no path between them.
///
/// Collapses onto the distance of a programmer to themself.
pub const NO_CONNECTION: usize = 0;

/// Breadth-first separation over one network snapshot
pub struct SeparationService {
    network: ProjectedNetwork,
}

impl SeparationService {
    pub fn new(network: &dyn NetworkRepository) -> Self {
        Self {
            network: project(network),
        }
    }

    /// Shortest chain of programmers from `a` to `b`, both included
    ///
    /// `None` when the two are not connected.
    pub fn path_between(
        &self,
        a: &ProgrammerId,
        b: &ProgrammerId,
    ) -> NetworkResult<Option<Vec<ProgrammerId>>> {
        Ok(self.search(a, b)?.map(|result| {
            result
                .path
                .into_iter()
                .map(|node| self.network.programmer_id(node).clone())
                .collect()
        }))
    }

    fn search(&self, a: &ProgrammerId, b: &ProgrammerId) -> NetworkResult<Option<PathResult>> {
        let source = self.network.node_id(a)?;
        let target = self.network.node_id(b)?;

        let result = bfs(&self.network.view, source, target, Traversal::Undirected);
        trace!(from = %a, to = %b, hops = ?result.as_ref().map(PathResult::hops), "separation search");
        Ok(result)
    }
}

impl DegreesOfSeparation for SeparationService {
    fn degrees_between(&self, a: &ProgrammerId, b: &ProgrammerId) -> NetworkResult<usize> {
        Ok(self
            .search(a, b)?
            .map_or(NO_CONNECTION, |result| result.hops()))
    }
}
