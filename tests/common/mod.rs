#![allow(dead_code)] // not every test crate uses every fixture

use zkp_three_coloring::{Color, Graph};

pub fn triangle() -> Graph {
    Graph::build([
        (1, Color::First, vec![2, 3]),
        (2, Color::Second, vec![1, 3]),
        (3, Color::Third, vec![1, 2]),
    ])
    .expect("triangle is well formed")
}

pub fn diamond() -> Graph {
    Graph::build([
        (1, Color::First, vec![2, 3, 4]),
        (2, Color::Second, vec![1, 3]),
        (3, Color::Third, vec![1, 2, 4]),
        (4, Color::Second, vec![1, 3]),
    ])
    .expect("diamond is well formed")
}

/// K4 with two `First` vertices: structurally fine, improperly colored.
pub fn tetrahedron_with_double_first() -> Graph {
    Graph::build([
        (1, Color::First, vec![2, 3, 4]),
        (2, Color::Second, vec![1, 3, 4]),
        (3, Color::Third, vec![1, 2, 4]),
        (4, Color::First, vec![1, 2, 3]),
    ])
    .expect("tetrahedron is well formed")
}

pub fn pentastar() -> Graph {
    Graph::build([
        (1, Color::First, vec![6, 7]),
        (2, Color::Second, vec![7, 8]),
        (3, Color::Third, vec![8, 9]),
        (4, Color::First, vec![9, 10]),
        (5, Color::First, vec![6, 10]),
        (6, Color::Second, vec![1, 5, 7, 10]),
        (7, Color::Third, vec![1, 2, 6, 8]),
        (8, Color::First, vec![2, 3, 7, 9]),
        (9, Color::Second, vec![3, 4, 8, 10]),
        (10, Color::Third, vec![4, 5, 6, 9]),
    ])
    .expect("pentastar is well formed")
}

/// Four vertices, four edges, exactly one same-colored edge (1, 3). A
/// dishonest prover committing to this survives a single round with
/// probability 3/4.
pub fn four_vertex_collision() -> Graph {
    Graph::build([
        (1, Color::First, vec![2, 3, 4]),
        (2, Color::Second, vec![1, 3]),
        (3, Color::First, vec![1, 2]),
        (4, Color::Third, vec![1]),
    ])
    .expect("collision graph is well formed")
}
