//! Team strength
//!
//! A team is an ordered list of programmers whose first member leads. Every
//! member contributes `rank / skill_index`; members other than the leader are
//! further divided by their separation from the leader. The team's strength
//! is the mean contribution.
//!
//! A member lacking the skill, or one with no connection to the leader,
//! brings the whole team down to zero.

use super::{DegreesOfSeparation, RankSource, SkillLookup, TeamStrength, NO_CONNECTION};
use crate::network::{NetworkResult, ProgrammerId};
use tracing::trace;

pub struct TeamStrengthService<'a> {
    separation: &'a dyn DegreesOfSeparation,
    skills: &'a dyn SkillLookup,
    ranks: &'a dyn RankSource,
}

impl<'a> TeamStrengthService<'a> {
    pub fn new(
        separation: &'a dyn DegreesOfSeparation,
        skills: &'a dyn SkillLookup,
        ranks: &'a dyn RankSource,
    ) -> Self {
        Self {
            separation,
            skills,
            ranks,
        }
    }
}

impl TeamStrength for TeamStrengthService<'_> {
    fn team_strength(&self, skill: &str, team: &[ProgrammerId]) -> NetworkResult<f64> {
        let Some((leader, members)) = team.split_first() else {
            return Ok(0.0);
        };

        let mut skill_indices = Vec::with_capacity(team.len());
        for id in team {
            match self.skills.skill_index(id, skill)? {
                Some(index) => skill_indices.push(index),
                None => {
                    trace!(programmer = %id, skill, "team member lacks skill");
                    return Ok(0.0);
                }
            }
        }

        let mut total = self.ranks.rank(leader)? / skill_indices[0] as f64;

        for (member, &skill_index) in members.iter().zip(&skill_indices[1..]) {
            let degrees = self.separation.degrees_between(leader, member)?;
            if degrees == NO_CONNECTION {
                trace!(leader = %leader, programmer = %member, "team member not connected to leader");
                return Ok(0.0);
            }
            total += self.ranks.rank(member)? / (skill_index * degrees) as f64;
        }

        Ok(total / team.len() as f64)
    }

    fn individual_strength(&self, skill: &str, id: &ProgrammerId) -> NetworkResult<f64> {
        match self.skills.skill_index(id, skill)? {
            Some(index) => Ok(self.ranks.rank(id)? / index as f64),
            None => Ok(0.0),
        }
    }
}
