//! Property tests over randomly generated graphs: every heuristic must
//! return a complete two-sided partition, incremental weights must agree
//! with the canonical evaluation, and improvement must be monotone.

use maxcut_grasp::construct::{greedy_cut, improved_greedy_cut, random_cut, semi_greedy_cut};
use maxcut_grasp::grasp::{GraspConfig, GraspRunner};
use maxcut_grasp::local_search::{ImprovementRule, LocalSearch, LocalSearchConfig};
use maxcut_grasp::{Graph, Side};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Small graphs with at least one edge and positive weights.
fn graph_strategy() -> impl Strategy<Value = Graph> {
    (2usize..=12)
        .prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((0..n, 0..n, 1i64..=20), 1..=24),
            )
        })
        .prop_map(|(n, raw)| {
            let mut g = Graph::new(n);
            for (u, v, w) in raw {
                if u != v {
                    g.add_edge(u, v, w);
                }
            }
            if g.edge_count() == 0 {
                g.add_edge(0, 1, 1);
            }
            g
        })
}

fn assert_complete_partition(g: &Graph, cut: &maxcut_grasp::Cut) {
    assert!(cut.is_complete(), "some vertex is unassigned");
    assert_eq!(
        cut.side_len(Side::X) + cut.side_len(Side::Y),
        g.vertex_count(),
        "sides must partition the vertex set"
    );
}

proptest! {
    #[test]
    fn construction_yields_complete_partitions(g in graph_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);

        assert_complete_partition(&g, &random_cut(&g, &mut rng));
        assert_complete_partition(&g, &greedy_cut(&g).unwrap());
        assert_complete_partition(&g, &improved_greedy_cut(&g).unwrap());
        assert_complete_partition(&g, &semi_greedy_cut(&g, 0.5, &mut rng).unwrap());
    }

    #[test]
    fn gain_seeded_constructions_keep_heaviest_edge_crossing(
        g in graph_strategy(),
        seed in any::<u64>(),
        alpha in 0.0f64..=1.0,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let e = g.heaviest_edge().unwrap();

        for cut in [
            greedy_cut(&g).unwrap(),
            improved_greedy_cut(&g).unwrap(),
            semi_greedy_cut(&g, alpha, &mut rng).unwrap(),
        ] {
            prop_assert_ne!(cut.side_of(e.u), cut.side_of(e.v));
            prop_assert!(cut.weight(&g) >= e.w);
        }
    }

    #[test]
    fn local_search_never_degrades_and_stays_consistent(
        g in graph_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = random_cut(&g, &mut rng);
        let initial_weight = initial.weight(&g);

        // verify_weight cross-checks the gain cache after every flip.
        let config = LocalSearchConfig::default().with_verify_weight(true);
        let result = LocalSearch::run(&g, initial, &config, &mut rng).unwrap();

        assert_complete_partition(&g, &result.cut);
        prop_assert!(result.weight >= initial_weight);
        prop_assert_eq!(result.weight, result.cut.weight(&g));
        prop_assert!((result.flips as i64) <= g.total_weight());
    }

    #[test]
    fn best_improvement_agrees_on_invariants(g in graph_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = random_cut(&g, &mut rng);
        let initial_weight = initial.weight(&g);

        let config = LocalSearchConfig::default()
            .with_rule(ImprovementRule::BestImprovement)
            .with_verify_weight(true);
        let result = LocalSearch::run(&g, initial, &config, &mut rng).unwrap();

        prop_assert!(result.weight >= initial_weight);
        prop_assert_eq!(result.weight, result.cut.weight(&g));
        prop_assert_eq!(result.rounds, result.flips);
    }

    #[test]
    fn grasp_returns_the_best_iteration(g in graph_strategy(), seed in any::<u64>()) {
        let config = GraspConfig::default()
            .with_alpha(0.5)
            .with_max_iterations(8)
            .with_seed(seed);

        let result = GraspRunner::run(&g, &config).unwrap();

        assert_complete_partition(&g, &result.best);
        prop_assert_eq!(result.best_weight, result.best.weight(&g));
        prop_assert_eq!(
            result.best_weight,
            *result.weight_history.iter().max().unwrap()
        );
        prop_assert_eq!(
            result.weight_history[result.best_iteration],
            result.best_weight
        );
    }

    #[test]
    fn heaviest_edge_is_stable_across_calls(g in graph_strategy()) {
        let first = g.heaviest_edge().unwrap();
        for _ in 0..3 {
            let again = g.heaviest_edge().unwrap();
            prop_assert_eq!((again.u, again.v, again.w), (first.u, first.v, first.w));
        }
    }
}
