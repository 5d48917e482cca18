//! ProNet: a recommendation network of programmers
//!
//! Programmers recommend one another. Over that directed graph ProNet answers:
//!
//! - how many hops separate two programmers (edges walk both ways),
//! - how much authority each programmer has (fixed-round PageRank),
//! - which programmers with a given skill form the strongest team, and who leads it.
//!
//! # Architecture
//!
//! - [`network`]: programmer records, the in-memory store, document loading
//! - [`algo`]: projection of a network onto the `pronet-graph-algorithms` CSR view
//! - [`services`]: separation, rank, skills, team strength and team search
//! - [`config`]: rank settings and configuration errors
//!
//! ## Example Usage
//!
//! ```rust
//! use pronet::network::{NetworkStore, Programmer};
//! use pronet::services::{
//!     DegreesOfSeparation, RankService, SeparationService, SkillsService,
//!     StrongestTeamService, TeamStrengthService,
//! };
//!
//! let store = NetworkStore::from_programmers([
//!     Programmer::new("Bill", ["Jill"], ["Ruby", "Perl"]),
//!     Programmer::new("Jill", ["Nick"], ["Perl"]),
//!     Programmer::new("Nick", ["Bill"], ["Ruby"]),
//! ]);
//!
//! let separation = SeparationService::new(&store);
//! assert_eq!(separation.degrees_between(&"Bill".into(), &"Nick".into()).unwrap(), 1);
//!
//! let ranks = RankService::new(&store);
//! let skills = SkillsService::new(&store);
//! let strength = TeamStrengthService::new(&separation, &skills, &ranks);
//! let search = StrongestTeamService::new(&store, &skills, &ranks, &separation, &strength);
//!
//! let team = search.find_strongest_team("Ruby", 2).unwrap();
//! assert_eq!(team.len(), 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod network;
pub mod services;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, ProNetConfig, RankConfig};

pub use network::{
    load_network, parse_network, DocumentFormat, NetworkError, NetworkRepository, NetworkResult,
    NetworkStore, Programmer, ProgrammerId, SkillIndex,
};

pub use services::{
    DegreesOfSeparation, RankService, RankSource, SeparationService, SkillLookup, SkillsService,
    StrongestTeamService, TeamError, TeamResult, TeamStrength, TeamStrengthService, NO_CONNECTION,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
