//! Constant-time selection and comparison primitives. Grounded on
//! `examples/original_source/src/fips/common.h`'s `cmov`/`cmov_int16`/`ccmp`.
//!
//! None of these branch or index on their `cond`/data arguments — each is a
//! straight-line sequence of bitwise operations, so their timing is
//! independent of the secret values they move or compare.

/// Overwrite `out` with `inp` when `cond == 1`, leave `out` untouched when
/// `cond == 0`. `cond` must be exactly 0 or 1.
#[inline]
pub fn cmov_i16(out: &mut i16, inp: i16, cond: u16) {
    let mask = (cond as i16).wrapping_neg();
    *out ^= mask & (*out ^ inp);
}

/// Byte-buffer form of [`cmov_i16`]: copies `inp` into `out` when
/// `cond == 1`.
#[inline]
pub fn cmov(out: &mut [u8], inp: &[u8], cond: u8) {
    debug_assert_eq!(out.len(), inp.len());
    let mask = cond.wrapping_neg();
    for (o, i) in out.iter_mut().zip(inp.iter()) {
        *o ^= mask & (*o ^ i);
    }
}

/// Constant-time equality over two equal-length byte slices. Convenience
/// wrapper over [`ccmp`] for call sites that aren't selecting secret data
/// based on the result (tests, logging decisions).
#[inline]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    ccmp(a, b) == 0
}

/// The `ccmp` primitive from the design notes: 1 iff `a` and `b` differ in
/// any byte, 0 iff they're identical. Never short-circuits on the first
/// differing byte, and the final fold to a 0/1 result is a shift, not a
/// comparison branch, so callers can use it to drive [`cmov`] without
/// reintroducing a secret-dependent branch.
#[inline]
pub fn ccmp(a: &[u8], b: &[u8]) -> u8 {
    debug_assert_eq!(a.len(), b.len());
    let mut r: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        r |= x ^ y;
    }
    (((-(r as i64)) >> 63) & 1) as u8
}
