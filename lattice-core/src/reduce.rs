//! Montgomery and Barrett modular reduction, fixed to the ML-KEM modulus
//! `Q = 3329`. Grounded on `examples/original_source/src/fips/opt.h`.
//!
//! Both reductions operate purely on machine integers with shifts and
//! multiplies — no division, no secret-dependent branch — so they carry the
//! crate's constant-time discipline (spec invariant 5) by construction.

use crate::params::{Q, QINV};

/// Montgomery reduction: given `a` with `|a| < Q * 2^15`, returns a 16-bit
/// signed value in `(-Q, Q)` congruent to `a * 2^-16 mod Q`.
#[inline]
pub fn montgomery_reduce(a: i32) -> i16 {
    let t = (a as i16).wrapping_mul(QINV as i16);
    ((a - (t as i32) * (Q as i32)) >> 16) as i16
}

/// Barrett reduction: given 16-bit signed `a`, returns a value in
/// `(-Q/2, Q/2]` congruent to `a mod Q`.
#[inline]
pub fn barrett_reduce(a: i16) -> i16 {
    const V: i16 = (((1i32 << 26) + (Q as i32) / 2) / (Q as i32)) as i16;
    let mut t = (((V as i32) * (a as i32) + (1 << 25)) >> 26) as i16;
    t = t.wrapping_mul(Q);
    a.wrapping_sub(t)
}

/// `montgomery_reduce(a * b)`.
#[inline]
pub fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce((a as i32) * (b as i32))
}
