//! Greedy construction: simple single-pass and priority-queue variants.

use super::{gains, seed_heaviest};
use crate::cut::{Cut, Side};
use crate::error::CutResult;
use crate::graph::Graph;
use std::collections::BinaryHeap;

/// Single-pass greedy construction, O(V + E).
///
/// Seeds with the heaviest edge, then visits the remaining vertices in
/// index order and places each on the side with the greater gain (ties to
/// X). Each vertex is assigned exactly once.
///
/// # Errors
///
/// [`crate::MaxCutError::EmptyGraph`] if the graph has no edges to seed from.
pub fn greedy_cut(g: &Graph) -> CutResult<Cut> {
    let (mut cut, su, sv) = seed_heaviest(g)?;

    for v in 0..g.vertex_count() {
        if v == su || v == sv {
            continue;
        }
        let (gain_x, gain_y) = gains(g, &cut, v);
        let side = if gain_x >= gain_y { Side::X } else { Side::Y };
        cut.assign(v, side);
    }
    Ok(cut)
}

/// Max-heap entry carrying the gains as computed at push time. Field order
/// drives the derived ordering: `max_gain` first, so the heap pops the
/// highest-gain vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct GainEntry {
    max_gain: i64,
    gain_x: i64,
    gain_y: i64,
    vertex: usize,
}

/// Priority-queue greedy construction, O(E log V).
///
/// Instead of a fixed visit order, repeatedly extracts the unassigned
/// vertex with the highest `max(gain_x, gain_y)` under the current partial
/// assignment, places it on its better side (ties to X), and re-pushes all
/// its unassigned neighbors with freshly recomputed gains.
///
/// Entries go stale whenever a later push supersedes an earlier one for the
/// same vertex; a stale entry is simply discarded when popped. This lazy
/// deletion trades duplicate heap entries for not needing decrease-key.
///
/// # Errors
///
/// [`crate::MaxCutError::EmptyGraph`] if the graph has no edges to seed from.
pub fn improved_greedy_cut(g: &Graph) -> CutResult<Cut> {
    let n = g.vertex_count();
    let (mut cut, su, sv) = seed_heaviest(g)?;
    let mut assigned = vec![false; n];
    assigned[su] = true;
    assigned[sv] = true;

    let mut heap = BinaryHeap::with_capacity(n);
    for v in 0..n {
        if assigned[v] {
            continue;
        }
        let (gain_x, gain_y) = gains(g, &cut, v);
        heap.push(GainEntry {
            max_gain: gain_x.max(gain_y),
            gain_x,
            gain_y,
            vertex: v,
        });
    }

    while let Some(entry) = heap.pop() {
        let v = entry.vertex;
        if assigned[v] {
            continue; // stale entry
        }

        let side = if entry.gain_x >= entry.gain_y {
            Side::X
        } else {
            Side::Y
        };
        cut.assign(v, side);
        assigned[v] = true;

        for &(u, _) in g.neighbors(v) {
            if assigned[u] {
                continue;
            }
            let (gain_x, gain_y) = gains(g, &cut, u);
            heap.push(GainEntry {
                max_gain: gain_x.max(gain_y),
                gain_x,
                gain_y,
                vertex: u,
            });
        }
    }
    Ok(cut)
}
