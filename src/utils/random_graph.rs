use crate::graph::{Color, Graph, Vertex, VertexId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

pub const EDGE_PROBABILITY: f64 = 0.5;

/// Generates a properly 3-colored instance: vertices are split across the
/// three color classes (all non-empty) and edges are drawn only between
/// differently colored vertices, so `is_proper` always holds. At least one
/// edge is guaranteed so a verifier can always challenge.
pub fn random_colorable_graph(n: u32, edge_probability: f64, rng: &mut impl Rng) -> Graph {
    assert!(n >= 3, "a 3-colored instance needs at least three vertices");

    let mut colors: Vec<Color> = (0..n).map(|i| Color::ALL[(i % 3) as usize]).collect();
    colors.shuffle(rng);

    let mut neighbors: Vec<Vec<VertexId>> = vec![Vec::new(); n as usize];
    let mut edge_count = 0usize;
    for a in 0..n as usize {
        for b in (a + 1)..n as usize {
            if colors[a] != colors[b] && rng.random::<f64>() < edge_probability {
                neighbors[a].push(b as VertexId);
                neighbors[b].push(a as VertexId);
                edge_count += 1;
            }
        }
    }

    if edge_count == 0 {
        // every color class is non-empty, so a differently colored pair exists
        'outer: for a in 0..n as usize {
            for b in (a + 1)..n as usize {
                if colors[a] != colors[b] {
                    neighbors[a].push(b as VertexId);
                    neighbors[b].push(a as VertexId);
                    break 'outer;
                }
            }
        }
    }

    let vertices: BTreeMap<VertexId, Vertex> = colors
        .into_iter()
        .zip(neighbors)
        .enumerate()
        .map(|(id, (color, neighbors))| (id as VertexId, Vertex { color, neighbors }))
        .collect();

    // symmetric by construction
    Graph::from_validated(vertices)
}

/// Dishonest-prover material: recolors one endpoint of the first edge so the
/// pair shares a color. The result fails `is_proper` but is structurally well
/// formed, which is exactly what a cheating prover would commit to.
pub fn plant_collision(graph: &Graph) -> Graph {
    let (a, b) = graph.edges()[0];
    let shared = graph.color(b).expect("edge endpoint exists");

    let vertices: BTreeMap<VertexId, Vertex> = graph
        .iter()
        .map(|(id, vertex)| {
            let mut vertex = vertex.clone();
            if id == a {
                vertex.color = shared;
            }
            (id, vertex)
        })
        .collect();
    Graph::from_validated(vertices)
}
