//! Strongest team search
//!
//! Every programmer with the skill is a candidate. Within a subset of
//! candidates the leader is the member with the lowest skill index, ties going
//! to the higher rank, and members with no connection to that leader are left
//! out. Teams compare first by how many connected members remain, then by
//! strength; the first one found wins ties.
//!
//! Subsets of the requested size are tried first. Smaller subsets are only
//! tried while they could still beat the best team so far, so an unconnected
//! expert leading every full-size subset cannot hide a connected smaller team.

use super::{DegreesOfSeparation, RankSource, SkillLookup, TeamStrength, NO_CONNECTION};
use crate::network::{NetworkError, NetworkRepository, Programmer, ProgrammerId, SkillIndex};
use itertools::Itertools;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while searching for a team
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TeamError {
    #[error("Team size must be greater than zero")]
    InvalidTeamSize,

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type TeamResult<T> = Result<T, TeamError>;

/// A programmer eligible for a team, with the figures used to pick a leader
#[derive(Debug, Clone)]
struct Candidate<'n> {
    id: &'n ProgrammerId,
    skill_index: SkillIndex,
    rank: f64,
}

impl Candidate<'_> {
    /// Lower skill index first, then higher rank
    fn leadership_order(&self, other: &Self) -> Ordering {
        self.skill_index
            .cmp(&other.skill_index)
            .then_with(|| other.rank.total_cmp(&self.rank))
    }
}

pub struct StrongestTeamService<'a> {
    network: &'a dyn NetworkRepository,
    skills: &'a dyn SkillLookup,
    ranks: &'a dyn RankSource,
    separation: &'a dyn DegreesOfSeparation,
    strength: &'a dyn TeamStrength,
}

impl<'a> StrongestTeamService<'a> {
    pub fn new(
        network: &'a dyn NetworkRepository,
        skills: &'a dyn SkillLookup,
        ranks: &'a dyn RankSource,
        separation: &'a dyn DegreesOfSeparation,
        strength: &'a dyn TeamStrength,
    ) -> Self {
        Self {
            network,
            skills,
            ranks,
            separation,
            strength,
        }
    }

    /// Find the strongest team of `size` programmers for `skill`, leader first
    ///
    /// The team is shorter than `size` when fewer connected programmers have the skill.
    /// A larger `size` never yields fewer members.
    pub fn find_strongest_team(&self, skill: &str, size: usize) -> TeamResult<Vec<ProgrammerId>> {
        if size == 0 {
            return Err(TeamError::InvalidTeamSize);
        }

        let programmers = self.network.get_all();
        let candidates = self.candidates(&programmers, skill)?;
        let largest = size.min(candidates.len());

        let mut best: Option<(f64, Vec<ProgrammerId>)> = None;
        let mut evaluated = 0usize;

        for subset_size in (1..=largest).rev() {
            if best.as_ref().is_some_and(|(_, team)| team.len() >= subset_size) {
                break;
            }

            for combination in candidates.iter().combinations(subset_size) {
                let team = self.drop_unconnected(leader_first(&combination))?;
                let strength = self.strength.team_strength(skill, &team)?;
                evaluated += 1;
                trace!(team = ?team, strength, "evaluated team");

                let better = best.as_ref().map_or(true, |(top, members)| {
                    team.len() > members.len() || (team.len() == members.len() && strength > *top)
                });
                if better {
                    best = Some((strength, team));
                }
            }
        }

        let Some((strength, team)) = best else {
            debug!(skill, candidates = candidates.len(), "no programmer has the skill");
            return Ok(Vec::new());
        };

        debug!(
            skill,
            requested = size,
            selected = team.len(),
            evaluated,
            strength,
            "strongest team found"
        );
        Ok(team)
    }

    fn candidates<'n>(
        &self,
        programmers: &[&'n Programmer],
        skill: &str,
    ) -> TeamResult<Vec<Candidate<'n>>> {
        let mut candidates = Vec::new();
        for programmer in programmers {
            if let Some(skill_index) = self.skills.skill_index(&programmer.id, skill)? {
                candidates.push(Candidate {
                    id: &programmer.id,
                    skill_index,
                    rank: self.ranks.rank(&programmer.id)?,
                });
            }
        }
        Ok(candidates)
    }

    fn drop_unconnected(&self, team: Vec<ProgrammerId>) -> TeamResult<Vec<ProgrammerId>> {
        let mut members = team.into_iter();
        let Some(leader) = members.next() else {
            return Ok(Vec::new());
        };

        let mut connected = vec![leader];
        for member in members {
            if self.separation.degrees_between(&connected[0], &member)? == NO_CONNECTION {
                trace!(leader = %connected[0], programmer = %member, "dropping unconnected member");
                continue;
            }
            connected.push(member);
        }
        Ok(connected)
    }
}

/// Order a subset for scoring: leader first, everyone else in candidate order
fn leader_first(combination: &[&Candidate<'_>]) -> Vec<ProgrammerId> {
    let leader = combination
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.leadership_order(b))
        .map_or(0, |(pos, _)| pos);

    let mut team = Vec::with_capacity(combination.len());
    team.push(combination[leader].id.clone());
    team.extend(
        combination
            .iter()
            .enumerate()
            .filter(|&(pos, _)| pos != leader)
            .map(|(_, candidate)| candidate.id.clone()),
    );
    team
}
