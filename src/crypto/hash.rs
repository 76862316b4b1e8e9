use blake3::Hasher as Blake3Hasher;
use sha3::{Digest, Sha3_256};

/// Black-box commitment hash: collision and preimage resistance assumed.
pub trait CommitmentHash: Send + Sync {
    fn hash(&self, data: &[u8]) -> [u8; 32];
}

#[derive(Clone, Default)]
pub struct Blake3CommitmentHash;

impl CommitmentHash for Blake3CommitmentHash {
    fn hash(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = Blake3Hasher::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

#[derive(Clone, Default)]
pub struct Sha3CommitmentHash;

impl CommitmentHash for Sha3CommitmentHash {
    fn hash(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha3_256::new();
        hasher.update(data);
        let digest = hasher.finalize();
        digest[..].try_into().expect("sha3-256 output length")
    }
}

pub fn default_commitment_hash() -> Blake3CommitmentHash {
    Blake3CommitmentHash
}
