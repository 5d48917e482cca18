//! Programmer record
//!
//! A programmer is a node in the recommendation network: an identifier, the
//! programmers they recommend (outgoing edges, in document order) and their
//! skills ordered from strongest to weakest.

use super::types::{ProgrammerId, SkillIndex};

/// A node in the recommendation network
#[derive(Debug, Clone, PartialEq)]
pub struct Programmer {
    /// Unique identifier (the programmer's name)
    pub id: ProgrammerId,

    /// Programmers this one recommends; duplicates and self-references are kept
    pub recommendations: Vec<ProgrammerId>,

    /// Skills, strongest first
    pub skills: Vec<String>,
}

impl Programmer {
    /// Create a new programmer
    pub fn new<I, R, S>(id: I, recommendations: R, skills: S) -> Self
    where
        I: Into<ProgrammerId>,
        R: IntoIterator,
        R::Item: Into<ProgrammerId>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Programmer {
            id: id.into(),
            recommendations: recommendations.into_iter().map(Into::into).collect(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of outgoing recommendations
    pub fn recommendation_count(&self) -> usize {
        self.recommendations.len()
    }

    /// 1-based position of `skill` in the skill list, `None` if absent
    pub fn skill_index(&self, skill: &str) -> Option<SkillIndex> {
        self.skills.iter().position(|s| s == skill).map(|pos| pos + 1)
    }
}
