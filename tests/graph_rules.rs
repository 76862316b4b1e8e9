mod common;

use common::{diamond, pentastar, tetrahedron_with_double_first, triangle};
use std::collections::BTreeSet;
use zkp_three_coloring::utils::random_graph::{plant_collision, random_colorable_graph};
use zkp_three_coloring::{all_relabelings, is_proper, Color, ColorPermutation, Graph, GraphError};

#[test]
fn named_graphs_validate_as_expected() {
    assert!(is_proper(&triangle()));
    assert!(is_proper(&diamond()));
    assert!(is_proper(&pentastar()));
    assert!(!is_proper(&tetrahedron_with_double_first()));
}

#[test]
fn two_color_graph_is_not_proper() {
    // properly separated but only two colors in use
    let graph = Graph::build([
        (1, Color::First, vec![2]),
        (2, Color::Second, vec![1, 3]),
        (3, Color::First, vec![2]),
    ])
    .expect("path is well formed");
    assert!(!is_proper(&graph));
}

#[test]
fn asymmetric_adjacency_is_rejected() {
    let result = Graph::build([
        (1, Color::First, vec![2]),
        (2, Color::Second, vec![]),
        (3, Color::Third, vec![]),
    ]);
    assert_eq!(
        result.unwrap_err(),
        GraphError::AsymmetricAdjacency { vertex: 1, neighbor: 2 }
    );
}

#[test]
fn unknown_neighbor_is_rejected() {
    let result = Graph::build([(1, Color::First, vec![9])]);
    assert_eq!(
        result.unwrap_err(),
        GraphError::UnknownNeighbor { vertex: 1, neighbor: 9 }
    );
}

#[test]
fn self_loop_is_rejected() {
    let result = Graph::build([(1, Color::First, vec![1])]);
    assert_eq!(result.unwrap_err(), GraphError::SelfLoop(1));
}

#[test]
fn edges_are_canonical_and_deduplicated() {
    assert_eq!(triangle().edges(), vec![(1, 2), (1, 3), (2, 3)]);
    assert_eq!(diamond().edges(), vec![(1, 2), (1, 3), (1, 4), (2, 3), (3, 4)]);
}

#[test]
fn six_relabelings_stay_proper_and_preserve_structure() {
    for graph in [triangle(), diamond(), pentastar()] {
        let relabelings = all_relabelings(&graph);
        assert_eq!(relabelings.len(), 6);
        for relabeled in &relabelings {
            assert!(is_proper(relabeled));
            assert_eq!(relabeled.edges(), graph.edges());
        }
    }
}

#[test]
fn relabelings_are_pairwise_distinct_colorings() {
    let graph = triangle();
    let colorings: BTreeSet<Vec<Color>> = all_relabelings(&graph)
        .iter()
        .map(|relabeled| relabeled.iter().map(|(_, vertex)| vertex.color).collect())
        .collect();
    assert_eq!(colorings.len(), 6);
}

#[test]
fn permutation_bijections_cover_the_palette() {
    for permutation in ColorPermutation::all() {
        let image: BTreeSet<Color> = Color::ALL
            .iter()
            .map(|&color| permutation.apply(color))
            .collect();
        assert_eq!(image.len(), 3);
    }
}

#[test]
fn random_instances_are_proper_with_edges() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let graph = random_colorable_graph(12, 0.3, &mut rng);
        assert!(is_proper(&graph));
        assert!(!graph.edges().is_empty());
    }
}

#[test]
fn planted_collision_breaks_properness_only() {
    let mut rng = rand::rng();
    let graph = random_colorable_graph(10, 0.5, &mut rng);
    let dishonest = plant_collision(&graph);
    assert!(!is_proper(&dishonest));
    assert_eq!(dishonest.edges(), graph.edges());
}
