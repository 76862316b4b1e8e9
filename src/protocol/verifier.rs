use crate::crypto::commitment::open;
use crate::crypto::hash::CommitmentHash;
use crate::protocol::messages::{Challenge, CommittedGraph, RejectReason, Reveal, RoundVerdict};
use rand::Rng;
use std::env;

/// Picks one edge uniformly at random from the committed graph's canonical
/// edge list. `None` only for an edgeless graph, which the session rejects
/// up front.
pub fn choose_challenge(committed: &CommittedGraph, rng: &mut impl Rng) -> Option<Challenge> {
    let edges = committed.edges();
    if edges.is_empty() {
        return None;
    }
    let (a, b) = edges[rng.random_range(0..edges.len())];
    Some(Challenge::new(a, b))
}

/// Verifier-side check of a reveal: both digests must match the stored
/// commitments and the two embedded color tags must decode and differ.
/// Failures here are legitimate protocol outcomes (cheating detected), not
/// faults.
pub fn check_reveal(
    committed: &CommittedGraph,
    challenge: Challenge,
    reveal: &Reveal,
    hasher: &dyn CommitmentHash,
) -> Result<(), RejectReason> {
    let (low, high) = (challenge.low(), challenge.high());

    if !committed.is_adjacent(low, high) || !committed.is_adjacent(high, low) {
        debug_log(&format!("reveal rejected: ({low}, {high}) is not an edge"));
        return Err(RejectReason::NotAnEdge(low, high));
    }

    for (vertex, secret) in [(low, &reveal.low), (high, &reveal.high)] {
        let commitment = committed
            .commitment(vertex)
            .ok_or(RejectReason::NotAnEdge(low, high))?;
        if !open(secret, commitment, hasher) {
            debug_log(&format!("reveal rejected: digest mismatch at vertex {vertex}"));
            return Err(RejectReason::CommitmentMismatch(vertex));
        }
    }

    let low_color = reveal
        .low
        .color_tag()
        .ok_or(RejectReason::InvalidColorTag(low))?;
    let high_color = reveal
        .high
        .color_tag()
        .ok_or(RejectReason::InvalidColorTag(high))?;

    if low_color == high_color {
        debug_log(&format!(
            "reveal rejected: vertices {low} and {high} share a color"
        ));
        return Err(RejectReason::ColorCollision(low, high));
    }

    Ok(())
}

/// `check_reveal` folded into a verdict, treating an absent reveal as a
/// failure to answer the challenge.
pub fn verdict_for(
    committed: &CommittedGraph,
    challenge: Challenge,
    reveal: Option<&Reveal>,
    hasher: &dyn CommitmentHash,
) -> RoundVerdict {
    match reveal {
        Some(reveal) => match check_reveal(committed, challenge, reveal, hasher) {
            Ok(()) => RoundVerdict::Accepted,
            Err(reason) => RoundVerdict::Rejected(reason),
        },
        None => RoundVerdict::Rejected(RejectReason::MissingSecret(challenge.low())),
    }
}

fn debug_log(msg: &str) {
    if env::var("ZKP3_DEBUG").is_ok() {
        eprintln!("{}", msg);
    }
}
