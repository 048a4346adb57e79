//! Hash and XOF collaborators backing matrix generation, noise sampling
//! and the Fujisaki-Okamoto transform. Implemented with the `sha3` crate
//! rather than stubbed — every function here does real work.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Sha3_512, Shake128, Shake256};

use crate::params::SHAKE128_RATE;

/// `H(m) = SHA3-256(m)`.
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    Digest::update(&mut hasher, input);
    hasher.finalize().into()
}

/// `G(m) = SHA3-512(m)`, split into two 32-byte halves by the caller.
pub fn sha3_512(input: &[u8]) -> [u8; 64] {
    let mut hasher = Sha3_512::new();
    Digest::update(&mut hasher, input);
    hasher.finalize().into()
}

/// A live SHAKE128 squeeze state, continued across repeated
/// [`shake128_squeeze_blocks`] calls — mirrors the reference's
/// `keccak_ctx` that `shake128_absorb` initializes and
/// `shake128_squeeze_blocks` drains incrementally.
pub struct Shake128Reader(<Shake128 as ExtendableOutput>::Reader);

/// Absorb `seed || i || j` and finalize into a squeezable XOF state, used
/// to derive one entry of the public matrix `A`.
pub fn shake128_absorb(seed: &[u8; 32], i: u8, j: u8) -> Shake128Reader {
    let mut hasher = Shake128::default();
    Update::update(&mut hasher, seed);
    Update::update(&mut hasher, &[i, j]);
    Shake128Reader(hasher.finalize_xof())
}

/// Squeeze `nblocks * 168` bytes out of a live XOF state. Calling this
/// repeatedly on the same reader continues the stream rather than
/// restarting it, matching the reference's block-at-a-time rejection
/// sampling loop.
pub fn shake128_squeeze_blocks(reader: &mut Shake128Reader, nblocks: usize, out: &mut [u8]) {
    debug_assert_eq!(out.len(), nblocks * SHAKE128_RATE);
    reader.0.read(out);
}

/// `shake256_prf(seed, nonce) -> outlen bytes`: absorb `seed || nonce`,
/// squeeze `out.len()` bytes. Used to derive CBD noise-sampling input.
pub fn shake256_prf(seed: &[u8; 32], nonce: u8, out: &mut [u8]) {
    let mut hasher = Shake256::default();
    Update::update(&mut hasher, seed);
    Update::update(&mut hasher, &[nonce]);
    let mut reader = hasher.finalize_xof();
    reader.read(out);
}

/// `shake256_rkprf(key, ciphertext) -> [u8; 32]`: absorb `key || c`,
/// squeeze 32 bytes. Drives the FO transform's implicit-rejection shared
/// secret on a failed decapsulation.
pub fn shake256_rkprf(key: &[u8; 32], ciphertext: &[u8]) -> [u8; 32] {
    let mut hasher = Shake256::default();
    Update::update(&mut hasher, key);
    Update::update(&mut hasher, ciphertext);
    let mut reader = hasher.finalize_xof();
    let mut out = [0u8; 32];
    reader.read(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha3_256_is_deterministic_and_input_sensitive() {
        assert_eq!(sha3_256(b"abc"), sha3_256(b"abc"));
        assert_ne!(sha3_256(b"abc"), sha3_256(b"abd"));
    }

    #[test]
    fn sha3_512_produces_distinct_output_for_distinct_input() {
        assert_ne!(sha3_512(b"one"), sha3_512(b"two"));
    }

    #[test]
    fn shake128_squeeze_is_continuable_across_calls() {
        let seed = [7u8; 32];
        let mut one_shot = shake128_absorb(&seed, 0, 1);
        let mut whole = [0u8; 336];
        shake128_squeeze_blocks(&mut one_shot, 2, &mut whole);

        let mut split = shake128_absorb(&seed, 0, 1);
        let mut first = [0u8; 168];
        let mut second = [0u8; 168];
        shake128_squeeze_blocks(&mut split, 1, &mut first);
        shake128_squeeze_blocks(&mut split, 1, &mut second);

        assert_eq!(&whole[..168], &first[..]);
        assert_eq!(&whole[168..], &second[..]);
    }

    #[test]
    fn shake128_absorb_is_sensitive_to_indices() {
        let seed = [3u8; 32];
        let mut a = shake128_absorb(&seed, 0, 1);
        let mut b = shake128_absorb(&seed, 1, 0);
        let mut out_a = [0u8; 168];
        let mut out_b = [0u8; 168];
        shake128_squeeze_blocks(&mut a, 1, &mut out_a);
        shake128_squeeze_blocks(&mut b, 1, &mut out_b);
        assert_ne!(out_a, out_b);
    }

    #[test]
    fn shake256_prf_depends_on_nonce() {
        let seed = [1u8; 32];
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        shake256_prf(&seed, 0, &mut a);
        shake256_prf(&seed, 1, &mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn shake256_rkprf_depends_on_ciphertext() {
        let key = [2u8; 32];
        let a = shake256_rkprf(&key, b"ciphertext-one");
        let b = shake256_rkprf(&key, b"ciphertext-two");
        assert_ne!(a, b);
    }
}
