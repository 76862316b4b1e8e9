use crate::crypto::commitment::{CommitError, VertexSecrets};
use crate::crypto::hash::CommitmentHash;
use crate::graph::Graph;
use crate::protocol::messages::{Challenge, CommittedGraph, RejectReason, Reveal};
use crate::utils::permutation::ColorPermutation;
use rand::Rng;

/// Prover-side state for a single round: the vertex secrets behind the
/// published committed graph. The relabeling itself is not retained; nothing
/// outside the secrets is needed to answer a challenge.
pub struct RoundProver {
    secrets: VertexSecrets,
}

impl RoundProver {
    /// Relabels the coloring through a fresh uniformly drawn palette
    /// bijection, commits every vertex, and publishes the committed graph.
    /// The caller is responsible for having run the `is_proper` gate.
    pub fn commit(
        graph: &Graph,
        hasher: &dyn CommitmentHash,
        rng: &mut impl Rng,
    ) -> Result<(Self, CommittedGraph), CommitError> {
        let relabeled = ColorPermutation::sample(rng).relabel(graph);
        let (committed, secrets) = CommittedGraph::commit(&relabeled, hasher)?;
        Ok((RoundProver { secrets }, committed))
    }

    /// Discloses exactly the two secrets for the challenged pair. Consumes the
    /// prover: a round's secrets and relabeling are single-use and must never
    /// survive into a later round.
    pub fn reveal(mut self, challenge: Challenge) -> Result<Reveal, RejectReason> {
        let low = self
            .secrets
            .remove(&challenge.low())
            .ok_or(RejectReason::MissingSecret(challenge.low()))?;
        let high = self
            .secrets
            .remove(&challenge.high())
            .ok_or(RejectReason::MissingSecret(challenge.high()))?;
        Ok(Reveal { low, high })
    }
}
