use crate::graph::graph::Graph;

/// Checks that a coloring is a proper 3-coloring: no adjacent pair shares a
/// color and exactly three distinct colors appear. This is the precondition
/// gate for the protocol; the prover must never open a session over a graph
/// that fails it.
pub fn is_proper(graph: &Graph) -> bool {
    let mut seen = [false; 3];

    for (_, vertex) in graph.iter() {
        seen[vertex.color.to_u8() as usize] = true;

        for &neighbor in &vertex.neighbors {
            if graph.color(neighbor) == Some(vertex.color) {
                return false;
            }
        }
    }

    seen.iter().all(|&used| used)
}
