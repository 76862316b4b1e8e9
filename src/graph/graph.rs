use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub type VertexId = u32;

/// The three-color palette. Identity matters, ordering does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    First,
    Second,
    Third,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::First, Color::Second, Color::Third];

    pub fn to_u8(self) -> u8 {
        match self {
            Color::First => 0,
            Color::Second => 1,
            Color::Third => 2,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Color::First),
            1 => Some(Color::Second),
            2 => Some(Color::Third),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} lists unknown neighbour {neighbor}")]
    UnknownNeighbor { vertex: VertexId, neighbor: VertexId },

    #[error("vertex {vertex} lists {neighbor} but {neighbor} does not list {vertex}")]
    AsymmetricAdjacency { vertex: VertexId, neighbor: VertexId },

    #[error("vertex {0} lists itself as a neighbour")]
    SelfLoop(VertexId),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub color: Color,
    pub neighbors: Vec<VertexId>,
}

/// A vertex-colored undirected graph. Adjacency symmetry is checked at
/// construction; instances are immutable afterwards, so a `Graph` handed to
/// the protocol can never become malformed mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    vertices: BTreeMap<VertexId, Vertex>,
}

impl Graph {
    pub fn new(vertices: BTreeMap<VertexId, Vertex>) -> Result<Self, GraphError> {
        for (&id, vertex) in &vertices {
            for &neighbor in &vertex.neighbors {
                if neighbor == id {
                    return Err(GraphError::SelfLoop(id));
                }
                let other = vertices
                    .get(&neighbor)
                    .ok_or(GraphError::UnknownNeighbor { vertex: id, neighbor })?;
                if !other.neighbors.contains(&id) {
                    return Err(GraphError::AsymmetricAdjacency { vertex: id, neighbor });
                }
            }
        }
        Ok(Graph { vertices })
    }

    pub fn build<I>(entries: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, Color, Vec<VertexId>)>,
    {
        let vertices = entries
            .into_iter()
            .map(|(id, color, neighbors)| (id, Vertex { color, neighbors }))
            .collect();
        Graph::new(vertices)
    }

    /// Constructor for graphs derived from an already-validated one, e.g. a
    /// palette relabeling, which cannot disturb adjacency.
    pub(crate) fn from_validated(vertices: BTreeMap<VertexId, Vertex>) -> Self {
        Graph { vertices }
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn color(&self, id: VertexId) -> Option<Color> {
        self.vertices.get(&id).map(|vertex| vertex.color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter().map(|(&id, vertex)| (id, vertex))
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.vertices
            .get(&a)
            .map(|vertex| vertex.neighbors.contains(&b))
            .unwrap_or(false)
    }

    /// Canonical undirected edge list: each edge appears once as (low, high),
    /// sorted. The verifier samples challenges uniformly from this list.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::new();
        for (&id, vertex) in &self.vertices {
            for &neighbor in &vertex.neighbors {
                if id < neighbor {
                    edges.push((id, neighbor));
                }
            }
        }
        edges.sort_unstable();
        edges.dedup();
        edges
    }
}
