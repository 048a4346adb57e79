//! Errors surfaced by the public KEM API.

use lattice_core::error::EntropyError;

/// The only fatal failure mode of the KEM layer: the OS entropy source was
/// unavailable when `keypair` or `encapsulate` needed fresh randomness.
/// `decapsulate` never returns this — it draws no entropy, and a ciphertext
/// that fails to re-encrypt is not an error (spec section on error
/// handling): it silently yields the implicit-rejection key instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum KemError {
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
