//! In-memory network storage
//!
//! The store is an immutable snapshot once built. Every query service borrows
//! it through the [`NetworkRepository`] trait.

use super::programmer::Programmer;
use super::types::ProgrammerId;
use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur while querying the network
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Programmer {0} not found")]
    ProgrammerNotFound(ProgrammerId),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Read-only access to the programmers of one network snapshot
pub trait NetworkRepository {
    /// Look up one programmer
    fn get_by_id(&self, id: &ProgrammerId) -> NetworkResult<&Programmer>;

    /// All programmers, in a stable order for the lifetime of the snapshot
    fn get_all(&self) -> Vec<&Programmer>;
}

/// In-memory network storage
///
/// Programmers are kept in insertion order so `get_all` is deterministic.
#[derive(Debug, Clone, Default)]
pub struct NetworkStore {
    programmers: IndexMap<ProgrammerId, Programmer>,
}

impl NetworkStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from programmers; a later duplicate id replaces the earlier record
    pub fn from_programmers(programmers: impl IntoIterator<Item = Programmer>) -> Self {
        let mut store = Self::new();
        for programmer in programmers {
            store.insert(programmer);
        }
        store
    }

    /// Insert a programmer, returning the record it replaced
    pub fn insert(&mut self, programmer: Programmer) -> Option<Programmer> {
        self.programmers.insert(programmer.id.clone(), programmer)
    }

    pub fn contains(&self, id: &ProgrammerId) -> bool {
        self.programmers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.programmers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programmers.is_empty()
    }

    /// Total number of recommendations across all programmers
    pub fn recommendation_count(&self) -> usize {
        self.programmers
            .values()
            .map(Programmer::recommendation_count)
            .sum()
    }

    /// Iterate programmers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Programmer> {
        self.programmers.values()
    }
}

impl NetworkRepository for NetworkStore {
    fn get_by_id(&self, id: &ProgrammerId) -> NetworkResult<&Programmer> {
        self.programmers
            .get(id)
            .ok_or_else(|| NetworkError::ProgrammerNotFound(id.clone()))
    }

    fn get_all(&self) -> Vec<&Programmer> {
        self.programmers.values().collect()
    }
}
