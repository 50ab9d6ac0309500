//! Single-vertex-flip local search with cached per-vertex gain sums.
//!
//! Given a graph and a complete initial cut, repeatedly flips vertices
//! whose move to the opposite side strictly increases the cut weight,
//! until no such vertex remains. Gains are maintained incrementally: a
//! flip updates only the flipped vertex and its neighbors, so a commit is
//! O(degree) instead of O(E).
//!
//! Termination is guaranteed because every committed flip strictly
//! increases a bounded integer objective; the flip count can never exceed
//! the total edge weight.

mod config;
mod runner;

pub use config::{ImprovementRule, LocalSearchConfig};
pub use runner::{LocalSearch, LocalSearchResult};
