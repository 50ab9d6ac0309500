//! GRASP: Greedy Randomized Adaptive Search Procedure.
//!
//! A multi-start metaheuristic: every iteration builds a fresh cut with
//! randomized greedy construction and refines it with local search; the
//! best cut over the iteration budget is returned. Iterations share
//! nothing but the read-only graph, which makes them embarrassingly
//! parallel (`parallel` feature).
//!
//! # References
//!
//! - Feo, T. & Resende, M. (1995). "Greedy Randomized Adaptive Search
//!   Procedures", *Journal of Global Optimization* 6, 109-133.
//! - Festa, P., Pardalos, P., Resende, M. & Ribeiro, C. (2002). "Randomized
//!   heuristics for the MAX-CUT problem", *Optimization Methods and
//!   Software* 17(6), 1033-1058.

mod config;
mod runner;

pub use config::GraspConfig;
pub use runner::{GraspResult, GraspRunner};
