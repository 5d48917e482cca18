//! Hand-written stand-ins for the service traits
//!
//! Values are looked up per programmer and fall back to a default, so a test
//! only states what it cares about.

use super::{DegreesOfSeparation, RankSource, SkillLookup, TeamStrength};
use crate::network::{NetworkResult, ProgrammerId, SkillIndex};
use std::collections::HashMap;

/// Ranks, skill indices and separations set directly by a test
#[derive(Debug, Default)]
pub struct FakeMetrics {
    skill_indices: HashMap<(ProgrammerId, String), Option<SkillIndex>>,
    any_skill_index: Option<SkillIndex>,
    ranks: HashMap<ProgrammerId, f64>,
    any_rank: f64,
    degrees: HashMap<(ProgrammerId, ProgrammerId), usize>,
    any_degrees: usize,
}

impl FakeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill_index(mut self, id: &str, skill: &str, index: Option<SkillIndex>) -> Self {
        self.skill_indices
            .insert((id.into(), skill.to_string()), index);
        self
    }

    pub fn any_skill_index(mut self, index: SkillIndex) -> Self {
        self.any_skill_index = Some(index);
        self
    }

    pub fn rank(mut self, id: &str, rank: f64) -> Self {
        self.ranks.insert(id.into(), rank);
        self
    }

    pub fn any_rank(mut self, rank: f64) -> Self {
        self.any_rank = rank;
        self
    }

    /// Separation between `a` and `b`, in either argument order
    pub fn degrees(mut self, a: &str, b: &str, degrees: usize) -> Self {
        self.degrees.insert((a.into(), b.into()), degrees);
        self.degrees.insert((b.into(), a.into()), degrees);
        self
    }

    pub fn any_degrees(mut self, degrees: usize) -> Self {
        self.any_degrees = degrees;
        self
    }
}

impl SkillLookup for FakeMetrics {
    fn skill_index(&self, id: &ProgrammerId, skill: &str) -> NetworkResult<Option<SkillIndex>> {
        Ok(self
            .skill_indices
            .get(&(id.clone(), skill.to_string()))
            .copied()
            .unwrap_or(self.any_skill_index))
    }

    fn skills(&self, id: &ProgrammerId) -> NetworkResult<Vec<String>> {
        Ok(self
            .skill_indices
            .iter()
            .filter(|((owner, _), index)| owner == id && index.is_some())
            .map(|((_, skill), _)| skill.clone())
            .collect())
    }
}

impl RankSource for FakeMetrics {
    fn rank(&self, id: &ProgrammerId) -> NetworkResult<f64> {
        Ok(self.ranks.get(id).copied().unwrap_or(self.any_rank))
    }
}

impl DegreesOfSeparation for FakeMetrics {
    fn degrees_between(&self, a: &ProgrammerId, b: &ProgrammerId) -> NetworkResult<usize> {
        Ok(self
            .degrees
            .get(&(a.clone(), b.clone()))
            .copied()
            .unwrap_or(self.any_degrees))
    }
}

/// Team strengths set directly by a test; unknown teams score zero
#[derive(Debug, Default)]
pub struct FakeStrength {
    teams: HashMap<Vec<ProgrammerId>, f64>,
}

impl FakeStrength {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, members: &[&str], strength: f64) -> Self {
        let team = members.iter().map(|&m| ProgrammerId::new(m)).collect();
        self.teams.insert(team, strength);
        self
    }
}

impl TeamStrength for FakeStrength {
    fn team_strength(&self, _skill: &str, team: &[ProgrammerId]) -> NetworkResult<f64> {
        Ok(self.teams.get(team).copied().unwrap_or(0.0))
    }

    fn individual_strength(&self, skill: &str, id: &ProgrammerId) -> NetworkResult<f64> {
        self.team_strength(skill, std::slice::from_ref(id))
    }
}
