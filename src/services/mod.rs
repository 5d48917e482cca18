//! Query services over a network snapshot
//!
//! Each engine sits behind a small trait so the team engines can be driven
//! by any source of ranks, skills and separations:
//!
//! - [`DegreesOfSeparation`]: hop distance, edges traversed in both directions
//! - [`RankSource`]: authority score from fixed-round PageRank relaxation
//! - [`SkillLookup`]: per-programmer skill proficiency
//! - [`TeamStrength`]: composite strength of an ordered team (leader first)
//!
//! [`StrongestTeamService`] combines them to pick the best team for a skill.

pub mod rank;
pub mod separation;
pub mod skills;
pub mod strongest_team;
pub mod team_strength;

#[cfg(test)]
pub(crate) mod testing;

use crate::network::{NetworkResult, ProgrammerId, SkillIndex};

pub use rank::RankService;
pub use separation::{SeparationService, NO_CONNECTION};
pub use skills::SkillsService;
pub use strongest_team::{StrongestTeamService, TeamError, TeamResult};
pub use team_strength::TeamStrengthService;

/// Shortest hop count between two programmers
pub trait DegreesOfSeparation {
    /// `0` for the same programmer and for programmers with no connection
    fn degrees_between(&self, a: &ProgrammerId, b: &ProgrammerId) -> NetworkResult<usize>;
}

/// Authority score of a programmer
pub trait RankSource {
    fn rank(&self, id: &ProgrammerId) -> NetworkResult<f64>;
}

/// Skill proficiency of a programmer
pub trait SkillLookup {
    /// 1-based proficiency (lower is better), `None` when the programmer lacks the skill
    fn skill_index(&self, id: &ProgrammerId, skill: &str) -> NetworkResult<Option<SkillIndex>>;

    /// All skills of a programmer, strongest first
    fn skills(&self, id: &ProgrammerId) -> NetworkResult<Vec<String>>;
}

/// Strength of a team for a skill
pub trait TeamStrength {
    /// Strength of an ordered team whose first member leads
    fn team_strength(&self, skill: &str, team: &[ProgrammerId]) -> NetworkResult<f64>;

    /// Strength of a single programmer: rank over skill index
    fn individual_strength(&self, skill: &str, id: &ProgrammerId) -> NetworkResult<f64>;
}
