use super::SkillLookup;
use crate::network::{NetworkRepository, NetworkResult, ProgrammerId, SkillIndex};

/// Skill lookups straight from the programmers' skill lists
pub struct SkillsService<'a> {
    network: &'a dyn NetworkRepository,
}

impl<'a> SkillsService<'a> {
    pub fn new(network: &'a dyn NetworkRepository) -> Self {
        Self { network }
    }
}

impl SkillLookup for SkillsService<'_> {
    fn skill_index(&self, id: &ProgrammerId, skill: &str) -> NetworkResult<Option<SkillIndex>> {
        Ok(self.network.get_by_id(id)?.skill_index(skill))
    }

    fn skills(&self, id: &ProgrammerId) -> NetworkResult<Vec<String>> {
        Ok(self.network.get_by_id(id)?.skills.clone())
    }
}
