use crate::graph::{Color, Graph};
use rand::Rng;
use std::collections::BTreeMap;

/// One bijection of the 3-color palette, indexed by `Color::to_u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPermutation {
    map: [Color; 3],
}

impl ColorPermutation {
    pub const fn new(map: [Color; 3]) -> Self {
        ColorPermutation { map }
    }

    /// The six bijections of {First, Second, Third}.
    pub const fn all() -> [ColorPermutation; 6] {
        use Color::{First, Second, Third};
        [
            ColorPermutation::new([First, Second, Third]),
            ColorPermutation::new([First, Third, Second]),
            ColorPermutation::new([Second, First, Third]),
            ColorPermutation::new([Second, Third, First]),
            ColorPermutation::new([Third, First, Second]),
            ColorPermutation::new([Third, Second, First]),
        ]
    }

    /// Uniform draw over the six bijections. Fresh per round: reusing the
    /// literal coloring across rounds would let repeated challenges on the
    /// same edge leak the true colors.
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self::all()[rng.random_range(0..6)]
    }

    pub fn apply(&self, color: Color) -> Color {
        self.map[color.to_u8() as usize]
    }

    /// Recolors every vertex through the bijection. Adjacency is untouched and
    /// a bijection cannot introduce a color collision, so properness survives.
    pub fn relabel(&self, graph: &Graph) -> Graph {
        let vertices: BTreeMap<_, _> = graph
            .iter()
            .map(|(id, vertex)| {
                let mut relabeled = vertex.clone();
                relabeled.color = self.apply(vertex.color);
                (id, relabeled)
            })
            .collect();
        Graph::from_validated(vertices)
    }
}

/// All six relabelings of a graph, one per palette bijection. Only meaningful
/// for colorings that already passed `is_proper`.
pub fn all_relabelings(graph: &Graph) -> Vec<Graph> {
    ColorPermutation::all()
        .iter()
        .map(|permutation| permutation.relabel(graph))
        .collect()
}
