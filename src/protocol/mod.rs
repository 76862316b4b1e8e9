pub mod messages;
pub mod prover;
pub mod session;
pub mod verifier;

pub use messages::{
    Challenge, CommittedGraph, CommittedVertex, RejectReason, Reveal, RoundTranscript,
    RoundVerdict, SessionVerdict,
};
pub use prover::RoundProver;
pub use session::{execute_round, ProofSession, SessionConfig, SessionError};
pub use verifier::{check_reveal, choose_challenge, verdict_for};
