//! Uniformly random cut construction.

use crate::cut::{Cut, Side};
use crate::graph::Graph;
use rand::Rng;

/// Assigns every vertex to X or Y by an independent fair coin flip. O(V).
///
/// Used as a quality baseline and as the starting point for local-search
/// trials; in expectation it cuts half the total edge weight.
pub fn random_cut<R: Rng>(g: &Graph, rng: &mut R) -> Cut {
    let mut cut = Cut::new(g.vertex_count());
    for v in 0..g.vertex_count() {
        let side = if rng.random_bool(0.5) { Side::X } else { Side::Y };
        cut.assign(v, side);
    }
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_cut_is_complete_partition() {
        let g = Graph::from_edges(6, [(0, 1, 1), (2, 3, 1), (4, 5, 1)]);
        let mut rng = StdRng::seed_from_u64(42);

        let cut = random_cut(&g, &mut rng);

        assert!(cut.is_complete());
        assert_eq!(cut.side_len(Side::X) + cut.side_len(Side::Y), 6);
    }

    #[test]
    fn test_random_cut_reproducible_from_seed() {
        let g = Graph::from_edges(8, [(0, 1, 1), (2, 3, 1), (4, 5, 1), (6, 7, 1)]);

        let a = random_cut(&g, &mut StdRng::seed_from_u64(7));
        let b = random_cut(&g, &mut StdRng::seed_from_u64(7));

        for v in 0..8 {
            assert_eq!(a.side_of(v), b.side_of(v), "vertex {v} diverged");
        }
    }

    #[test]
    fn test_random_cut_on_edgeless_graph() {
        let g = Graph::new(3);
        let mut rng = StdRng::seed_from_u64(0);

        let cut = random_cut(&g, &mut rng);

        assert!(cut.is_complete());
        assert_eq!(cut.weight(&g), 0);
    }
}
