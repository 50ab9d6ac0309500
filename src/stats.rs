//! Repeated-trial statistics for empirical evaluation.
//!
//! These helpers drive a single heuristic many times and report means.
//! They exist for benchmarking and calibration (e.g. how much local search
//! buys over a random cut) and play no part in GRASP's own decisions.

use crate::construct::random_cut;
use crate::error::CutResult;
use crate::graph::Graph;
use crate::local_search::{LocalSearch, LocalSearchConfig};
use rand::Rng;

/// Mean outcome of repeated local-search runs from random starting cuts.
#[derive(Debug, Clone, Copy)]
pub struct RandomStartStats {
    /// Mean refined cut weight across trials.
    pub mean_weight: f64,
    /// Mean number of improvement rounds per trial.
    pub mean_rounds: f64,
}

/// Mean weight of `trials` independent random cuts. O(trials × (V + E)).
///
/// For graphs without isolated vertices this converges on half the total
/// edge weight, since each edge crosses an unbiased random partition with
/// probability 1/2.
pub fn average_random_cut_weight<R: Rng>(g: &Graph, trials: usize, rng: &mut R) -> f64 {
    assert!(trials > 0, "trials must be at least 1");
    let mut total = 0;
    for _ in 0..trials {
        total += random_cut(g, rng).weight(g);
    }
    total as f64 / trials as f64
}

/// Runs local search from `trials` independent random cuts and reports the
/// mean refined weight and mean round count.
///
/// # Errors
///
/// Propagates [`crate::MaxCutError::InconsistentCache`] if the config has
/// weight verification enabled and a run detects a cache bug.
pub fn average_local_search_from_random<R: Rng>(
    g: &Graph,
    trials: usize,
    config: &LocalSearchConfig,
    rng: &mut R,
) -> CutResult<RandomStartStats> {
    assert!(trials > 0, "trials must be at least 1");
    let mut total_weight = 0;
    let mut total_rounds = 0;
    for _ in 0..trials {
        let initial = random_cut(g, rng);
        let result = LocalSearch::run(g, initial, config, rng)?;
        total_weight += result.weight;
        total_rounds += result.rounds;
    }
    Ok(RandomStartStats {
        mean_weight: total_weight as f64 / trials as f64,
        mean_rounds: total_rounds as f64 / trials as f64,
    })
}
