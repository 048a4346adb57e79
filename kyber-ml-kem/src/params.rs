//! Re-exports of the active parameter set from `lattice-core`, plus the
//! byte-layout constants for the FO-wrapped KEM (the IND-CPA sizes live in
//! `lattice-core::params`; the three extra 32-byte fields — `H(ek)`, `z`,
//! and the shared secret — are this crate's own addition on top).

pub use lattice_core::params::{
    CIPHERTEXT_BYTES, HASH_BYTES, INDCPA_BYTES, INDCPA_PUBLICKEY_BYTES, INDCPA_SECRETKEY_BYTES,
    K, MSG_BYTES, POLYVEC_BYTES, PUBLICKEY_BYTES, Q, SEED_BYTES, SECRETKEY_BYTES,
    SHARED_SECRET_BYTES,
};
