//! Seed-to-structure expansion: the uniform public matrix `A` via
//! rejection-sampled SHAKE128 output, and the secret/error noise vectors
//! via SHAKE256-driven CBD sampling. Everything here is a pure function of
//! its seed bytes — no OS entropy is touched in this crate.
//!
//! Grounded on `examples/original_source/src/fips/rand.h`.

use crate::cbd::cbd;
use crate::hashing::{shake128_absorb, shake128_squeeze_blocks, shake256_prf};
use crate::params::{ETA1, ETA2, GEN_MATRIX_NBLOCKS, K, N, Q, SEED_BYTES, SHAKE128_RATE};
use crate::poly::Poly;
use crate::polyvec::PolyVec;

/// Scan `buf` for 12-bit little-endian candidates, keeping those `< Q` and
/// writing up to `coeffs.len() - already` of them starting at `already`.
/// Returns the new fill count.
fn rej_sample_uniform(coeffs: &mut [i16; N], already: usize, buf: &[u8]) -> usize {
    let mut cnt = already;
    let mut pos = 0usize;
    while cnt < N && pos + 3 <= buf.len() {
        let v0 = ((buf[pos] as u16) | ((buf[pos + 1] as u16) << 8)) & 0xfff;
        let v1 = ((buf[pos + 1] as u16) >> 4 | ((buf[pos + 2] as u16) << 4)) & 0xfff;
        pos += 3;
        if (v0 as i16) < Q {
            coeffs[cnt] = v0 as i16;
            cnt += 1;
        }
        if cnt < N && (v1 as i16) < Q {
            coeffs[cnt] = v1 as i16;
            cnt += 1;
        }
    }
    cnt
}

/// Expand a 32-byte seed into the `K x K` uniform public matrix `A` (or its
/// transpose) via SHAKE128 rejection sampling, one XOF stream per entry.
///
/// `transposed` selects whether entry `(i, j)` absorbs `seed || i || j` or
/// `seed || j || i`, matching encryption's need for `A` versus key
/// generation's need for `A^T`.
pub fn gen_matrix(seed: &[u8; SEED_BYTES], transposed: bool) -> [PolyVec; K] {
    let mut a = [PolyVec::ZERO; K];
    let mut buf = vec![0u8; GEN_MATRIX_NBLOCKS * SHAKE128_RATE];
    for i in 0..K {
        for j in 0..K {
            let (x, y) = if transposed { (i as u8, j as u8) } else { (j as u8, i as u8) };
            let mut reader = shake128_absorb(seed, x, y);
            shake128_squeeze_blocks(&mut reader, GEN_MATRIX_NBLOCKS, &mut buf);

            let mut coeffs = [0i16; N];
            let mut cnt = rej_sample_uniform(&mut coeffs, 0, &buf);

            let mut extra = [0u8; SHAKE128_RATE];
            while cnt < N {
                shake128_squeeze_blocks(&mut reader, 1, &mut extra);
                cnt = rej_sample_uniform(&mut coeffs, cnt, &extra);
            }
            a[i].vecs[j] = Poly { coeffs };
        }
    }
    a
}

/// Derive one `eta1`-width noise polynomial from `seed || nonce` via
/// SHAKE256 then CBD.
pub fn gen_noise_poly_eta1(seed: &[u8; SEED_BYTES], nonce: u8) -> Poly {
    let mut buf = vec![0u8; ETA1 * N / 4];
    shake256_prf(seed, nonce, &mut buf);
    cbd(ETA1, &buf)
}

/// Derive one `eta2`-width noise polynomial from `seed || nonce` via
/// SHAKE256 then CBD.
pub fn gen_noise_poly_eta2(seed: &[u8; SEED_BYTES], nonce: u8) -> Poly {
    let mut buf = vec![0u8; ETA2 * N / 4];
    shake256_prf(seed, nonce, &mut buf);
    cbd(ETA2, &buf)
}
