//! Core type definitions for the recommendation network

use std::fmt;

/// Unique identifier for a programmer (their name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgrammerId(String);

impl ProgrammerId {
    pub fn new(id: impl Into<String>) -> Self {
        ProgrammerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgrammerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProgrammerId {
    fn from(s: String) -> Self {
        ProgrammerId(s)
    }
}

impl From<&str> for ProgrammerId {
    fn from(s: &str) -> Self {
        ProgrammerId(s.to_string())
    }
}

/// 1-based proficiency ordinal of a skill; lower is more skilled
pub type SkillIndex = usize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programmer_id() {
        let id = ProgrammerId::new("Bill");
        assert_eq!(id.as_str(), "Bill");
        assert_eq!(format!("{}", id), "Bill");

        let id2: ProgrammerId = "Jill".into();
        assert_eq!(id2.as_str(), "Jill");
    }

    #[test]
    fn test_id_ordering() {
        assert!(ProgrammerId::new("a") < ProgrammerId::new("b"));
    }
}
