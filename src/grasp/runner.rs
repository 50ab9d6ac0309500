//! GRASP execution loop.
//!
//! # Algorithm
//!
//! Repeat `max_iterations` times:
//! 1. **Construct**: build a cut with semi-greedy RCL selection.
//! 2. **Improve**: refine it to a flip local optimum with local search.
//! 3. **Select**: keep the cut if its canonical weight strictly beats the
//!    best seen so far (the first best wins ties).
//!
//! Iterations are independent, so a failing construction or search aborts
//! the whole run instead of being skipped: dropping iterations silently
//! would bias the best-of-N result.

use super::config::GraspConfig;
use crate::construct::semi_greedy_cut;
use crate::cut::Cut;
use crate::error::CutResult;
use crate::graph::Graph;
use crate::local_search::LocalSearch;
use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GRASP run.
#[derive(Debug, Clone)]
pub struct GraspResult {
    /// Best cut found across all iterations.
    pub best: Cut,
    /// Canonical weight of the best cut.
    pub best_weight: i64,
    /// Iteration at which the best cut was first found.
    pub best_iteration: usize,
    /// Iterations executed (always the configured budget).
    pub iterations: usize,
    /// Best weight so far at the end of each iteration.
    pub weight_history: Vec<i64>,
}

/// Executes the GRASP metaheuristic.
pub struct GraspRunner;

impl GraspRunner {
    /// Runs GRASP on the given graph.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::MaxCutError::EmptyGraph`] from construction and
    /// [`crate::MaxCutError::InconsistentCache`] from a verifying local
    /// search.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails [`GraspConfig::validate`].
    pub fn run(g: &Graph, config: &GraspConfig) -> CutResult<GraspResult> {
        config.validate().expect("invalid GraspConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut best_cut: Option<Cut> = None;
        let mut best_weight = 0;
        let mut best_iteration = 0;
        let mut weight_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            let constructed = semi_greedy_cut(g, config.alpha, &mut rng)?;
            let searched = LocalSearch::run(g, constructed, &config.local_search, &mut rng)?;

            let weight = searched.cut.weight(g);
            if best_cut.is_none() || weight > best_weight {
                best_cut = Some(searched.cut);
                best_weight = weight;
                best_iteration = iteration;
            }
            weight_history.push(best_weight);
        }

        let best = best_cut.expect("max_iterations >= 1 yields at least one cut");
        Ok(GraspResult {
            best,
            best_weight,
            best_iteration,
            iterations: config.max_iterations,
            weight_history,
        })
    }

    /// Runs GRASP with iterations spread across the rayon thread pool.
    ///
    /// Each iteration derives its own RNG from the base seed and its
    /// iteration index, so the graph is the only shared state (read-only)
    /// and no two workers ever touch the same cut or gain cache. Ties on
    /// weight are broken toward the lowest iteration index, preserving the
    /// sequential first-wins rule, so the outcome for a fixed seed does
    /// not depend on the thread count. Note the per-iteration streams
    /// differ from [`run`](Self::run)'s single sequential stream.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(g: &Graph, config: &GraspConfig) -> CutResult<GraspResult> {
        config.validate().expect("invalid GraspConfig");

        let base_seed = match config.seed {
            Some(seed) => seed,
            None => rand::random(),
        };

        let outcomes: CutResult<Vec<(usize, Cut, i64)>> = (0..config.max_iterations)
            .into_par_iter()
            .map(|iteration| {
                let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(iteration as u64));
                let constructed = semi_greedy_cut(g, config.alpha, &mut rng)?;
                let searched =
                    LocalSearch::run(g, constructed, &config.local_search, &mut rng)?;
                let weight = searched.cut.weight(g);
                Ok((iteration, searched.cut, weight))
            })
            .collect();
        let mut outcomes = outcomes?;
        outcomes.sort_by_key(|&(iteration, _, _)| iteration);

        let mut best_cut: Option<Cut> = None;
        let mut best_weight = 0;
        let mut best_iteration = 0;
        let mut weight_history = Vec::with_capacity(config.max_iterations);
        for (iteration, cut, weight) in outcomes {
            if best_cut.is_none() || weight > best_weight {
                best_cut = Some(cut);
                best_weight = weight;
                best_iteration = iteration;
            }
            weight_history.push(best_weight);
        }

        let best = best_cut.expect("max_iterations >= 1 yields at least one cut");
        Ok(GraspResult {
            best,
            best_weight,
            best_iteration,
            iterations: config.max_iterations,
            weight_history,
        })
    }
}
