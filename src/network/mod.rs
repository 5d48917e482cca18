//! Recommendation network data model
//!
//! This module holds the programmers of one network snapshot:
//! - Programmer records with ordered recommendations and skills
//! - The in-memory store behind the read-only `NetworkRepository` accessor
//! - Loading and validation of JSON/YAML network documents

pub mod loader;
pub mod programmer;
pub mod store;
pub mod types;

// Re-export main types
pub use loader::{load_network, parse_network, DocumentFormat, NetworkDocument, NetworkValidator};
pub use programmer::Programmer;
pub use store::{NetworkError, NetworkRepository, NetworkResult, NetworkStore};
pub use types::{ProgrammerId, SkillIndex};
