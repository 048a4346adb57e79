//! Pure, deterministic arithmetic core for ML-KEM: the ring, vector,
//! serialization and sampling layers. No I/O, no OS entropy — callers
//! supply randomness explicitly via the sampling layer's XOF-seeded
//! functions.

pub mod cbd;
pub mod ct;
pub mod error;
pub mod hashing;
pub mod ntt;
pub mod params;
pub mod poly;
pub mod polyvec;
pub mod reduce;
pub mod sampling;
