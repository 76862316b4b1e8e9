pub mod commitment;
pub mod hash;

pub use commitment::{commit, open, CommitError, Commitment, Secret, VertexSecrets, SECRET_LEN};
pub use hash::{default_commitment_hash, Blake3CommitmentHash, CommitmentHash, Sha3CommitmentHash};
