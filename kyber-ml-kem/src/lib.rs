//! ML-KEM (FIPS 203) post-quantum key encapsulation mechanism.
//!
//! Wraps the IND-CPA scheme in `cpa` with the Fujisaki-Okamoto transform in
//! `kem` to get an IND-CCA KEM with implicit rejection. The active
//! parameter set (512/768/1024) is selected at compile time via the
//! `kyber512` (default) / `kyber768` / `kyber1024` Cargo features,
//! forwarded to `lattice-core`.
//!
//! ```
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//! let (ek, dk) = kyber_ml_kem::keypair(&mut rng).unwrap();
//! let (c, ss_enc) = kyber_ml_kem::encapsulate(&ek, &mut rng).unwrap();
//! let ss_dec = kyber_ml_kem::decapsulate(&dk, &c);
//! assert_eq!(ss_enc.0, ss_dec.0);
//! ```

pub mod cpa;
pub mod error;
pub mod kem;
pub mod params;

pub use error::KemError;
pub use kem::{decapsulate, encapsulate, keypair, Ciphertext, PublicKey, SecretKey, SharedSecret};
