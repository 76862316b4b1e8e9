pub mod crypto;
pub mod graph;
pub mod protocol;
pub mod utils;

pub use crypto::{
    commit, default_commitment_hash, open, Blake3CommitmentHash, CommitError, Commitment,
    CommitmentHash, Secret, Sha3CommitmentHash, VertexSecrets, SECRET_LEN,
};
pub use graph::{is_proper, Color, Graph, GraphError, Vertex, VertexId};
pub use protocol::{
    check_reveal, choose_challenge, execute_round, verdict_for, Challenge, CommittedGraph,
    CommittedVertex, ProofSession, RejectReason, Reveal, RoundProver, RoundTranscript,
    RoundVerdict, SessionConfig, SessionError, SessionVerdict,
};
pub use utils::{all_relabelings, ColorPermutation};
