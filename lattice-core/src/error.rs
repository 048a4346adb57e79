//! Error types surfaced by the arithmetic core.

/// Failure to obtain OS-quality entropy. The core itself never draws
/// entropy directly — this exists so the sampling layer's seed-expansion
/// helpers and `kyber-ml-kem`'s key generation can report the same failure
/// kind through one type.
#[derive(Debug, thiserror::Error)]
#[error("failed to read OS entropy: {0}")]
pub struct EntropyError(#[from] pub rand::Error);
