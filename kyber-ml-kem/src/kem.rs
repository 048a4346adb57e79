//! FO-wrapped IND-CCA key encapsulation mechanism with implicit rejection:
//! `keypair` / `encapsulate` / `decapsulate`. Grounded on
//! `examples/original_source/src/fips/mlkem.h`'s `key_gen`/`encap`/`decap`.
//!
//! This is the only module in the workspace that touches OS entropy — the
//! `lattice-core` crate and `cpa.rs` are pure functions of their inputs.

use std::fmt;

use rand::RngCore;
use zeroize::ZeroizeOnDrop;

use lattice_core::ct::{ccmp, cmov};
use lattice_core::error::EntropyError;
use lattice_core::hashing::{sha3_256, sha3_512, shake256_rkprf};
use lattice_core::params::{
    CIPHERTEXT_BYTES, HASH_BYTES, INDCPA_PUBLICKEY_BYTES, INDCPA_SECRETKEY_BYTES, MSG_BYTES,
    PUBLICKEY_BYTES, SECRETKEY_BYTES, SEED_BYTES, SHARED_SECRET_BYTES,
};

use crate::cpa::{indcpa_dec, indcpa_enc, indcpa_keypair};
use crate::error::KemError;

/// Encapsulation key: `pack(t_hat) || rho`. Public, so ordinary `Debug`/
/// `Eq` are fine.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(pub [u8; PUBLICKEY_BYTES]);

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&hex::encode(self.0)).finish()
    }
}

/// Decapsulation key: `pack(s_hat) || ek || H(ek) || z`. Carries the
/// long-term secret, so it is zeroized on drop and its `Debug` impl never
/// prints key material.
#[derive(Clone, ZeroizeOnDrop)]
pub struct SecretKey(pub [u8; SECRETKEY_BYTES]);

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Ciphertext: `compress_du(u) || compress_dv(v)`. Public.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ciphertext(pub [u8; CIPHERTEXT_BYTES]);

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ciphertext").field(&hex::encode(self.0)).finish()
    }
}

/// The 32-byte output of `encapsulate`/`decapsulate`. Zeroized on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct SharedSecret(pub [u8; SHARED_SECRET_BYTES]);

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// `KEM.KeyGen`: draw `d || z` from `rng`, run IND-CPA key generation on
/// `d`, and assemble the decapsulation key with `H(ek)` and the implicit
/// rejection seed `z`.
pub fn keypair(rng: &mut impl RngCore) -> Result<(PublicKey, SecretKey), KemError> {
    log::trace!("kem::keypair: drawing {} bytes of entropy", 2 * SEED_BYTES);
    let mut dz = [0u8; 2 * SEED_BYTES];
    rng.try_fill_bytes(&mut dz).map_err(EntropyError::from)?;
    let mut d = [0u8; SEED_BYTES];
    let mut z = [0u8; SEED_BYTES];
    d.copy_from_slice(&dz[..SEED_BYTES]);
    z.copy_from_slice(&dz[SEED_BYTES..]);

    let (ek, dk_cpa) = indcpa_keypair(&d);
    let h_ek = sha3_256(&ek);

    let mut dk = [0u8; SECRETKEY_BYTES];
    let mut off = 0;
    dk[off..off + INDCPA_SECRETKEY_BYTES].copy_from_slice(&dk_cpa);
    off += INDCPA_SECRETKEY_BYTES;
    dk[off..off + INDCPA_PUBLICKEY_BYTES].copy_from_slice(&ek);
    off += INDCPA_PUBLICKEY_BYTES;
    dk[off..off + HASH_BYTES].copy_from_slice(&h_ek);
    off += HASH_BYTES;
    dk[off..off + SEED_BYTES].copy_from_slice(&z);

    log::trace!("kem::keypair: ek/dk pair ready ({} / {} bytes)", PUBLICKEY_BYTES, SECRETKEY_BYTES);
    Ok((PublicKey(ek), SecretKey(dk)))
}

/// `KEM.Encaps`: draw a fresh message `m` from `rng`, derive `(K_bar, r)`
/// from `m` and `H(ek)`, and IND-CPA-encrypt `m` under `r`.
pub fn encapsulate(ek: &PublicKey, rng: &mut impl RngCore) -> Result<(Ciphertext, SharedSecret), KemError> {
    log::trace!("kem::encapsulate: drawing {} bytes of entropy", MSG_BYTES);
    let mut m = [0u8; MSG_BYTES];
    rng.try_fill_bytes(&mut m).map_err(EntropyError::from)?;

    let h_ek = sha3_256(&ek.0);
    let mut kr_input = [0u8; MSG_BYTES + HASH_BYTES];
    kr_input[..MSG_BYTES].copy_from_slice(&m);
    kr_input[MSG_BYTES..].copy_from_slice(&h_ek);
    let kr = sha3_512(&kr_input);
    let mut k_bar = [0u8; SHARED_SECRET_BYTES];
    let mut r = [0u8; SEED_BYTES];
    k_bar.copy_from_slice(&kr[..32]);
    r.copy_from_slice(&kr[32..]);

    let c = indcpa_enc(&ek.0, &m, &r);

    log::trace!("kem::encapsulate: produced {}-byte ciphertext", CIPHERTEXT_BYTES);
    Ok((Ciphertext(c), SharedSecret(k_bar)))
}

/// `KEM.Decaps`: re-derive and re-encrypt, constant-time compare against
/// the supplied ciphertext, and select between the re-derived shared
/// secret and the implicit-rejection PRF output without branching on the
/// comparison result. Never fails — a malformed ciphertext silently
/// yields a pseudorandom key instead of an error.
pub fn decapsulate(dk: &SecretKey, c: &Ciphertext) -> SharedSecret {
    log::trace!("kem::decapsulate");
    let mut off = 0;
    let mut dk_cpa = [0u8; INDCPA_SECRETKEY_BYTES];
    dk_cpa.copy_from_slice(&dk.0[off..off + INDCPA_SECRETKEY_BYTES]);
    off += INDCPA_SECRETKEY_BYTES;
    let mut ek = [0u8; INDCPA_PUBLICKEY_BYTES];
    ek.copy_from_slice(&dk.0[off..off + INDCPA_PUBLICKEY_BYTES]);
    off += INDCPA_PUBLICKEY_BYTES;
    let h_ek = &dk.0[off..off + HASH_BYTES];
    off += HASH_BYTES;
    let mut z = [0u8; SEED_BYTES];
    z.copy_from_slice(&dk.0[off..off + SEED_BYTES]);

    let m_prime = indcpa_dec(&dk_cpa, &c.0);

    let mut kr_input = [0u8; MSG_BYTES + HASH_BYTES];
    kr_input[..MSG_BYTES].copy_from_slice(&m_prime);
    kr_input[MSG_BYTES..].copy_from_slice(h_ek);
    let kr_prime = sha3_512(&kr_input);
    let mut k_bar_prime = [0u8; SHARED_SECRET_BYTES];
    let mut r_prime = [0u8; SEED_BYTES];
    k_bar_prime.copy_from_slice(&kr_prime[..32]);
    r_prime.copy_from_slice(&kr_prime[32..]);

    let c_prime = indcpa_enc(&ek, &m_prime, &r_prime);
    let k_rej = shake256_rkprf(&z, &c.0);

    let fail = ccmp(&c.0, &c_prime);
    let mut ss = k_rej;
    cmov(&mut ss, &k_bar_prime, 1 - fail);

    SharedSecret(ss)
}

#[cfg(test)]
pub(crate) struct ReplayRng<'a> {
    bytes: &'a [u8],
    pos: usize,
}

#[cfg(test)]
impl<'a> ReplayRng<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        assert!(!bytes.is_empty());
        Self { bytes, pos: 0 }
    }
}

#[cfg(test)]
impl<'a> RngCore for ReplayRng<'a> {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.fill_bytes(&mut b);
        u32::from_le_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0u8; 8];
        self.fill_bytes(&mut b);
        u64::from_le_bytes(b)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for b in dest.iter_mut() {
            *b = self.bytes[self.pos % self.bytes.len()];
            self.pos += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(start: u8, len: usize) -> Vec<u8> {
        (0..len).map(|i| start.wrapping_add(i as u8)).collect()
    }

    #[test]
    fn roundtrip_recovers_the_encapsulated_secret() {
        let keygen_bytes = seq(1, 64);
        let mut rng = ReplayRng::new(&keygen_bytes);
        let (ek, dk) = keypair(&mut rng).unwrap();

        let encap_bytes = seq(0, 32);
        let mut enc_rng = ReplayRng::new(&encap_bytes);
        let (c, ss_enc) = encapsulate(&ek, &mut enc_rng).unwrap();

        let ss_dec = decapsulate(&dk, &c);
        assert_eq!(ss_enc.0, ss_dec.0);
    }

    #[test]
    fn keypair_is_deterministic_given_fixed_entropy() {
        let seed_bytes = seq(5, 64);
        let mut rng1 = ReplayRng::new(&seed_bytes);
        let mut rng2 = ReplayRng::new(&seed_bytes);
        let (ek1, dk1) = keypair(&mut rng1).unwrap();
        let (ek2, dk2) = keypair(&mut rng2).unwrap();
        assert_eq!(ek1.0, ek2.0);
        assert_eq!(dk1.0, dk2.0);
    }

    #[test]
    fn encapsulate_is_deterministic_given_fixed_entropy() {
        let keygen_bytes = seq(2, 64);
        let mut rng = ReplayRng::new(&keygen_bytes);
        let (ek, _dk) = keypair(&mut rng).unwrap();

        let encap_bytes = seq(9, 32);
        let mut rng_a = ReplayRng::new(&encap_bytes);
        let mut rng_b = ReplayRng::new(&encap_bytes);
        let (c1, ss1) = encapsulate(&ek, &mut rng_a).unwrap();
        let (c2, ss2) = encapsulate(&ek, &mut rng_b).unwrap();
        assert_eq!(c1.0, c2.0);
        assert_eq!(ss1.0, ss2.0);
    }

    #[test]
    fn tampered_ciphertext_triggers_implicit_rejection() {
        let keygen_bytes = seq(3, 64);
        let mut rng = ReplayRng::new(&keygen_bytes);
        let (ek, dk) = keypair(&mut rng).unwrap();

        let encap_bytes = seq(0, 32);
        let mut enc_rng = ReplayRng::new(&encap_bytes);
        let (c, ss_enc) = encapsulate(&ek, &mut enc_rng).unwrap();

        let mut tampered = c;
        tampered.0[0] ^= 1;

        let ss_dec = decapsulate(&dk, &tampered);
        assert_ne!(ss_enc.0, ss_dec.0);

        // The rejection branch's output is exactly shake256_rkprf(z, c),
        // computable independently from the same secret key bytes.
        let z_offset = INDCPA_SECRETKEY_BYTES + INDCPA_PUBLICKEY_BYTES + HASH_BYTES;
        let mut z = [0u8; SEED_BYTES];
        z.copy_from_slice(&dk.0[z_offset..z_offset + SEED_BYTES]);
        let expected = shake256_rkprf(&z, &tampered.0);
        assert_eq!(ss_dec.0, expected);
    }

    #[test]
    fn two_decaps_on_the_same_ciphertext_agree() {
        let keygen_bytes = seq(4, 64);
        let mut rng = ReplayRng::new(&keygen_bytes);
        let (ek, dk) = keypair(&mut rng).unwrap();

        let encap_bytes = seq(1, 32);
        let mut enc_rng = ReplayRng::new(&encap_bytes);
        let (c, _ss) = encapsulate(&ek, &mut enc_rng).unwrap();

        let a = decapsulate(&dk, &c);
        let b = decapsulate(&dk, &c);
        assert_eq!(a.0, b.0);
    }
}
