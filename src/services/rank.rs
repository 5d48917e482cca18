//! Programmer rank
//!
//! A programmer's rank is `(1 - d) + d * sum(rank(r) / recommendations(r))`
//! over the distinct programmers `r` recommending them. Rather than chasing
//! that recursive definition through cycles, the whole rank table is relaxed
//! for a fixed number of rounds, each round reading only the previous one.

use super::RankSource;
use crate::algo::{page_rank_scores, project, PageRankConfig, ProjectedNetwork};
use crate::config::RankConfig;
use crate::network::{NetworkRepository, NetworkResult, ProgrammerId};
use indexmap::IndexMap;
use std::sync::OnceLock;
use tracing::debug;

/// Rank engine bound to one network snapshot
///
/// The rank table is computed on the first query and reused afterwards.
pub struct RankService {
    network: ProjectedNetwork,
    config: PageRankConfig,
    scores: OnceLock<Vec<f64>>,
}

impl RankService {
    pub fn new(network: &dyn NetworkRepository) -> Self {
        Self::with_config(network, RankConfig::default())
    }

    pub fn with_config(network: &dyn NetworkRepository, config: RankConfig) -> Self {
        Self {
            network: project(network),
            config: config.into(),
            scores: OnceLock::new(),
        }
    }

    fn scores(&self) -> &[f64] {
        self.scores.get_or_init(|| {
            let scores = page_rank_scores(&self.network.view, self.config);
            debug!(
                programmers = self.network.len(),
                recommendations = self.network.view.edge_count(),
                rounds = self.config.iterations,
                damping_factor = self.config.damping_factor,
                "rank relaxation complete"
            );
            scores
        })
    }

    /// Ranks of every programmer, in network order
    pub fn ranks(&self) -> IndexMap<ProgrammerId, f64> {
        self.network
            .ids()
            .iter()
            .cloned()
            .zip(self.scores().iter().copied())
            .collect()
    }
}

impl RankSource for RankService {
    fn rank(&self, id: &ProgrammerId) -> NetworkResult<f64> {
        let node = self.network.node_id(id)?;
        Ok(self.scores()[node as usize])
    }
}
