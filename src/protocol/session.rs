use crate::crypto::commitment::CommitError;
use crate::crypto::hash::{default_commitment_hash, CommitmentHash};
use crate::graph::{is_proper, Graph};
use crate::protocol::messages::{RoundTranscript, RoundVerdict, SessionVerdict};
use crate::protocol::prover::RoundProver;
use crate::protocol::verifier::{choose_challenge, verdict_for};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    pub rounds: u32,
    /// Rounds are mutually independent, so they may run across rayon workers.
    /// Parallel runs aggregate by conjunction instead of stopping early.
    pub parallel: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            rounds: 20,
            parallel: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("coloring is not a proper 3-coloring")]
    InvalidColoring,

    #[error("graph has no edges to challenge")]
    NoEdges,

    #[error(transparent)]
    Commit(#[from] CommitError),
}

/// One full commit/challenge/reveal/verify cycle. Does not re-run the
/// coloring gate; the session checked it once at construction, and a
/// relabeling cannot break it. Dishonest-prover tests call this directly to
/// commit to an improper coloring.
pub fn execute_round(
    graph: &Graph,
    hasher: &dyn CommitmentHash,
    rng: &mut impl Rng,
) -> Result<RoundTranscript, SessionError> {
    let (prover, committed) = RoundProver::commit(graph, hasher, rng)?;
    let challenge = choose_challenge(&committed, rng).ok_or(SessionError::NoEdges)?;

    let reveal = prover.reveal(challenge).ok();
    let verdict = verdict_for(&committed, challenge, reveal.as_ref(), hasher);

    Ok(RoundTranscript {
        committed,
        challenge,
        reveal,
        verdict,
    })
}

/// Drives N independent rounds over one graph and aggregates the verdicts.
/// Construction is the single point where `InvalidColoring` and the edgeless
/// degenerate case abort; a constructed session can only fail on the secure
/// random source.
pub struct ProofSession {
    graph: Graph,
    config: SessionConfig,
    hasher: Box<dyn CommitmentHash>,
}

impl ProofSession {
    pub fn new(graph: Graph, config: SessionConfig) -> Result<Self, SessionError> {
        if !is_proper(&graph) {
            return Err(SessionError::InvalidColoring);
        }
        if graph.edges().is_empty() {
            return Err(SessionError::NoEdges);
        }
        Ok(ProofSession {
            graph,
            config,
            hasher: Box::new(default_commitment_hash()),
        })
    }

    pub fn with_hasher(mut self, hasher: Box<dyn CommitmentHash>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edges().len()
    }

    /// Probability that a prover without any valid coloring survives all
    /// rounds: each round catches it with probability at least 1/|E|.
    pub fn soundness_error(&self) -> f64 {
        let edges = self.edge_count() as f64;
        (1.0 - 1.0 / edges).powi(self.config.rounds as i32)
    }

    pub fn run(&self) -> Result<SessionVerdict, SessionError> {
        if self.config.parallel {
            self.run_parallel()
        } else {
            self.run_sequential()
        }
    }

    /// A single rejection rejects the session and stops immediately; a caught
    /// cheater makes further rounds pointless.
    fn run_sequential(&self) -> Result<SessionVerdict, SessionError> {
        let mut rng = rand::rng();
        for round in 0..self.config.rounds {
            let transcript = execute_round(&self.graph, &*self.hasher, &mut rng)?;
            if let RoundVerdict::Rejected(reason) = transcript.verdict {
                return Ok(SessionVerdict::Rejected { round, reason });
            }
        }
        Ok(SessionVerdict::Accepted {
            rounds: self.config.rounds,
        })
    }

    /// All rounds run to completion with their own rng, then the verdicts are
    /// conjoined. No round ever sees another round's challenge or reveal.
    fn run_parallel(&self) -> Result<SessionVerdict, SessionError> {
        let transcripts: Result<Vec<RoundTranscript>, SessionError> = (0..self.config.rounds)
            .into_par_iter()
            .map(|_| {
                let mut rng = rand::rng();
                execute_round(&self.graph, &*self.hasher, &mut rng)
            })
            .collect();

        let rejection = transcripts?
            .into_iter()
            .enumerate()
            .find_map(|(round, transcript)| match transcript.verdict {
                RoundVerdict::Rejected(reason) => Some(SessionVerdict::Rejected {
                    round: round as u32,
                    reason,
                }),
                RoundVerdict::Accepted => None,
            });

        Ok(rejection.unwrap_or(SessionVerdict::Accepted {
            rounds: self.config.rounds,
        }))
    }
}
