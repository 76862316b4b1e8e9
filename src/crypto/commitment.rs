use crate::crypto::hash::CommitmentHash;
use crate::graph::{Color, VertexId};
use rand::rngs::OsRng;
use rand::TryRngCore;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// 32 random bytes followed by one color-tag byte. The random prefix carries
/// 256 bits of entropy, so a commitment cannot be brute-forced by hashing the
/// three possible color plaintexts.
pub const SECRET_LEN: usize = 33;

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("secure random source unavailable: {0}")]
    RandomSource(#[from] rand::rand_core::OsError),
}

/// Prover-private opening for one vertex commitment. Never leaves the prover
/// except through a controlled reveal of a challenged edge.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret([u8; SECRET_LEN]);

impl Secret {
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Secret(bytes)
    }

    pub fn bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }

    /// Decodes the trailing tag byte. `None` means the secret was not produced
    /// by `commit`, which a verifier treats as cheating.
    pub fn color_tag(&self) -> Option<Color> {
        Color::from_u8(self.0[SECRET_LEN - 1])
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep secrets out of logs.
        write!(f, "Secret({} bytes)", SECRET_LEN)
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = hex::decode(&text).map_err(D::Error::custom)?;
        let bytes: [u8; SECRET_LEN] = bytes
            .try_into()
            .map_err(|_| D::Error::custom("secret must be exactly 33 bytes"))?;
        Ok(Secret(bytes))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(self.0))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

pub type VertexSecrets = BTreeMap<VertexId, Secret>;

/// Binds a color inside a fresh tagged secret and returns the secret with the
/// digest of the whole secret. Failure of the OS random source is fatal to
/// this commitment attempt; there is no fallback source.
pub fn commit(
    color: Color,
    hasher: &dyn CommitmentHash,
) -> Result<(Secret, Commitment), CommitError> {
    let mut bytes = [0u8; SECRET_LEN];
    OsRng.try_fill_bytes(&mut bytes[..SECRET_LEN - 1])?;
    bytes[SECRET_LEN - 1] = color.to_u8();

    let commitment = Commitment(hasher.hash(&bytes));
    Ok((Secret(bytes), commitment))
}

/// True only on exact digest equality of the recomputed hash.
pub fn open(secret: &Secret, commitment: &Commitment, hasher: &dyn CommitmentHash) -> bool {
    hasher.hash(secret.bytes()) == *commitment.as_bytes()
}
