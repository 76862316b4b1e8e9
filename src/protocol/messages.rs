use crate::crypto::commitment::{self, CommitError, Commitment, Secret, VertexSecrets};
use crate::crypto::hash::CommitmentHash;
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommittedVertex {
    pub commitment: Commitment,
    pub neighbors: Vec<VertexId>,
}

/// The prover's opening message for a round: one commitment per vertex plus
/// the adjacency structure. Carries no color information in the clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommittedGraph {
    vertices: BTreeMap<VertexId, CommittedVertex>,
}

impl CommittedGraph {
    /// Commits every vertex independently. Any single commitment failure
    /// fails the whole call; no partial committed graph is ever produced.
    pub fn commit(
        graph: &Graph,
        hasher: &dyn CommitmentHash,
    ) -> Result<(Self, VertexSecrets), CommitError> {
        let mut vertices = BTreeMap::new();
        let mut secrets = VertexSecrets::new();

        for (id, vertex) in graph.iter() {
            let (secret, commitment) = commitment::commit(vertex.color, hasher)?;
            vertices.insert(
                id,
                CommittedVertex {
                    commitment,
                    neighbors: vertex.neighbors.clone(),
                },
            );
            secrets.insert(id, secret);
        }

        Ok((CommittedGraph { vertices }, secrets))
    }

    pub fn commitment(&self, id: VertexId) -> Option<&Commitment> {
        self.vertices.get(&id).map(|vertex| &vertex.commitment)
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

    /// Canonical edge list, same shape as `Graph::edges`. The verifier only
    /// ever sees commitments and this adjacency.
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

/// An unordered adjacent pair, stored smaller-id-first so reveal and verify
/// agree on which endpoint is which regardless of how it was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    low: VertexId,
    high: VertexId,
}

impl Challenge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Challenge {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> VertexId {
        self.low
    }

    pub fn high(&self) -> VertexId {
        self.high
    }
}

/// The two secrets for a challenged edge, in challenge-canonical order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reveal {
    pub low: Secret,
    pub high: Secret,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    #[error("revealed secret for vertex {0} does not match its commitment")]
    CommitmentMismatch(VertexId),

    #[error("revealed secret for vertex {0} carries no valid color tag")]
    InvalidColorTag(VertexId),

    #[error("challenged vertices {0} and {1} revealed the same color")]
    ColorCollision(VertexId, VertexId),

    #[error("prover holds no secret for vertex {0}")]
    MissingSecret(VertexId),

    #[error("challenged pair ({0}, {1}) is not an edge of the committed graph")]
    NotAnEdge(VertexId, VertexId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundVerdict {
    Accepted,
    Rejected(RejectReason),
}

/// Everything a round produced, kept for diagnostics and transcript files. A
/// production verifier only needs the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTranscript {
    pub committed: CommittedGraph,
    pub challenge: Challenge,
    pub reveal: Option<Reveal>,
    pub verdict: RoundVerdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionVerdict {
    Accepted { rounds: u32 },
    Rejected { round: u32, reason: RejectReason },
}
