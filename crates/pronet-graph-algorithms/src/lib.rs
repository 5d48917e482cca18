pub mod common;
pub mod pagerank;
pub mod pathfinding;

pub use common::{GraphView, NodeId};
pub use pagerank::{page_rank_scores, PageRankConfig};
pub use pathfinding::{bfs, PathResult, Traversal};
