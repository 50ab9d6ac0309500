//! Semi-greedy (GRASP) construction with a restricted candidate list.

use super::{gains, seed_heaviest};
use crate::cut::{Cut, Side};
use crate::error::{CutResult, MaxCutError};
use crate::graph::Graph;
use rand::Rng;

/// One placement candidate for the current construction step.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// Better of the two side gains.
    max_gain: i64,
    /// Position of the vertex in the remaining-vertex list.
    pos: usize,
    vertex: usize,
    /// Preferred side has the greater gain; ties prefer X.
    to_x: bool,
}

/// Picks a candidate uniformly at random from the restricted candidate
/// list: every candidate whose `max_gain` reaches
/// `worst + floor(alpha * (best - worst))`. Falls back to the full
/// candidate list if the threshold admits nobody.
///
/// # Errors
///
/// [`MaxCutError::NoCandidates`] if `candidates` is empty. Unreachable from
/// [`semi_greedy_cut`]'s loop, which stops once every vertex is assigned;
/// kept as a safety net rather than asserted away.
fn select_from_rcl<R: Rng>(
    candidates: &[Candidate],
    worst_gain: i64,
    best_gain: i64,
    alpha: f64,
    rng: &mut R,
) -> CutResult<Candidate> {
    if candidates.is_empty() {
        return Err(MaxCutError::NoCandidates);
    }

    let threshold = worst_gain + (alpha * (best_gain - worst_gain) as f64) as i64;
    let rcl: Vec<Candidate> = candidates
        .iter()
        .copied()
        .filter(|c| c.max_gain >= threshold)
        .collect();

    // Degenerate thresholds (e.g. all gains equal) fall back to everyone.
    let pool = if rcl.is_empty() { candidates } else { &rcl };
    Ok(pool[rng.random_range(0..pool.len())])
}

/// GRASP-style randomized greedy construction, O(V² + E) per call.
///
/// Seeds with the heaviest edge, then repeatedly scores every remaining
/// vertex by its better-side gain, builds the restricted candidate list
/// from `alpha` in `[0, 1]`, and commits a uniformly chosen candidate to
/// its preferred side. `alpha = 1` degenerates to pure greedy selection,
/// `alpha = 0` to uniform selection over all remaining vertices.
///
/// The `worst` end of the RCL threshold range is taken over both sides'
/// gains of every candidate, not only the preferred side.
///
/// # Errors
///
/// [`MaxCutError::EmptyGraph`] if the graph has no edges to seed from.
pub fn semi_greedy_cut<R: Rng>(g: &Graph, alpha: f64, rng: &mut R) -> CutResult<Cut> {
    let (mut cut, su, sv) = seed_heaviest(g)?;
    let mut remaining: Vec<usize> = (0..g.vertex_count())
        .filter(|&v| v != su && v != sv)
        .collect();

    while !remaining.is_empty() {
        let mut candidates = Vec::with_capacity(remaining.len());
        let mut best_gain = i64::MIN;
        let mut worst_gain = i64::MAX;

        for (pos, &v) in remaining.iter().enumerate() {
            let (gain_x, gain_y) = gains(g, &cut, v);
            let max_gain = gain_x.max(gain_y);
            candidates.push(Candidate {
                max_gain,
                pos,
                vertex: v,
                to_x: gain_x >= gain_y,
            });
            best_gain = best_gain.max(max_gain);
            worst_gain = worst_gain.min(gain_x.min(gain_y));
        }

        let chosen = select_from_rcl(&candidates, worst_gain, best_gain, alpha, rng)?;
        let side = if chosen.to_x { Side::X } else { Side::Y };
        cut.assign(chosen.vertex, side);
        remaining.swap_remove(chosen.pos);
    }
    Ok(cut)
}
