//! Heuristic solvers for the MAX-CUT problem on weighted undirected graphs.
//!
//! MAX-CUT asks for a partition of the vertices into two sides X and Y that
//! maximizes the total weight of edges crossing the partition. The problem is
//! NP-hard; this crate provides a suite of heuristics with distinct
//! quality/complexity tradeoffs rather than an exact solver:
//!
//! - **Random construction**: unbiased coin-flip assignment, O(V). A quality
//!   baseline, nothing more.
//! - **Greedy construction**: seeds the cut with the heaviest edge split
//!   across the two sides, then places each remaining vertex on its
//!   higher-gain side. Simple single-pass variant (O(V + E)) and a
//!   priority-queue variant with lazy stale-entry deletion (O(E log V)).
//! - **Semi-greedy construction**: GRASP-style randomized greedy with a
//!   Restricted Candidate List controlled by `alpha` in `[0, 1]`.
//! - **Local search**: single-vertex-flip improvement with incrementally
//!   maintained per-vertex gain sums; first-improvement (randomized scan
//!   order) and best-improvement rules.
//! - **GRASP**: repeated semi-greedy construction + local search, keeping
//!   the best cut over a fixed iteration budget. Iterations are independent
//!   and run in parallel under the `parallel` feature.
//!
//! # Architecture
//!
//! The crate is pure algorithm code: no file parsing, no benchmark harness,
//! no CLI. Callers build a [`graph::Graph`] (e.g. from a loader) and consume
//! cuts through [`cut::Cut::weight`]. Randomness is always an explicitly
//! passed [`rand::Rng`], so every heuristic is reproducible from a seed and
//! safe to run concurrently with per-invocation generators.

pub mod construct;
pub mod cut;
pub mod error;
pub mod graph;
pub mod grasp;
pub mod local_search;
pub mod stats;

pub use cut::{Cut, Side};
pub use error::{CutResult, MaxCutError};
pub use graph::{Edge, Graph};
