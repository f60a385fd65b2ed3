// Copyright 2015-2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

//! Double-limb arithmetic.
//!
//! The multiply and divide engines are built on a double-width helper type:
//! `u128` on 64-bit targets, `u64` on 32-bit targets. The narrowing
//! divisions here require the quotient to fit in the narrow type; that
//! precondition is checked, not merely documented.

use crate::limb::{Limb, LIMB_BITS};

match_target_word_bits! {
    64 => {
        pub(crate) type DoubleLimb = u128;
    },
    32 => {
        pub(crate) type DoubleLimb = u64;
    },
    _ => {
        compile_error!("unsupported target word size");
    }
}

/// `(hi << LIMB_BITS) | lo` as a double limb.
#[inline(always)]
pub(crate) fn widen(lo: Limb, hi: Limb) -> DoubleLimb {
    ((hi as DoubleLimb) << LIMB_BITS) | (lo as DoubleLimb)
}

/// `a * b` as `(lo, hi)`.
#[inline(always)]
pub(crate) fn widening_mul(a: Limb, b: Limb) -> (Limb, Limb) {
    let p = (a as DoubleLimb) * (b as DoubleLimb);
    (p as Limb, (p >> LIMB_BITS) as Limb)
}

/// `(hi:lo) / d` and `(hi:lo) % d`.
///
/// The quotient must fit in a single limb, i.e. `hi < d`; violating that
/// is a caller defect and fails loudly in debug builds.
#[inline]
pub(crate) fn div_two_limbs_by_one(lo: Limb, hi: Limb, d: Limb) -> (Limb, Limb) {
    debug_assert!(hi < d);
    let n = widen(lo, hi);
    let d = d as DoubleLimb;
    ((n / d) as Limb, (n % d) as Limb)
}

/// Divides the three-limb value in `a` (little-endian) by `(b1:b0)`.
///
/// Requires the quotient to fit in one limb, i.e. `(a[2]:a[1]) < (b1:b0)`.
/// On return `a[0..2]` holds the remainder, `a[2]` is zero, and the
/// quotient is returned. The initial estimate divides the top two limbs by
/// `b1 + 1` so it never overshoots; for a normalized divisor the correction
/// loop runs at most twice.
pub(crate) fn divide_three_limbs_by_two(a: &mut [Limb], b0: Limb, b1: Limb) -> Limb {
    assert_eq!(a.len(), 3);
    debug_assert!(widen(a[1], a[2]) < widen(b0, b1));

    let mut q = if b1 == Limb::MAX {
        a[2]
    } else {
        (widen(a[1], a[2]) / ((b1 as DoubleLimb) + 1)) as Limb
    };

    // a -= q * (b1:b0)
    let (m0_lo, m0_hi) = widening_mul(q, b0);
    let (m1_lo, m1_hi) = widening_mul(q, b1);
    let (p1, c) = m0_hi.overflowing_add(m1_lo);
    let p2 = m1_hi + Limb::from(c);

    let (r0, borrow) = a[0].overflowing_sub(m0_lo);
    let (r1, b1a) = a[1].overflowing_sub(p1);
    let (r1, b1b) = r1.overflowing_sub(Limb::from(borrow));
    let r2 = a[2]
        .wrapping_sub(p2)
        .wrapping_sub(Limb::from(b1a) | Limb::from(b1b));
    a[0] = r0;
    a[1] = r1;
    a[2] = r2;

    // The estimate is never too large, so the remainder is nonnegative and
    // at most two corrective subtractions remain.
    let mut corrections = 0;
    while a[2] != 0 || widen(a[0], a[1]) >= widen(b0, b1) {
        let (r0, borrow) = a[0].overflowing_sub(b0);
        let (r1, b1a) = a[1].overflowing_sub(b1);
        let (r1, b1b) = r1.overflowing_sub(Limb::from(borrow));
        a[2] = a[2].wrapping_sub(Limb::from(b1a) | Limb::from(b1b));
        a[0] = r0;
        a[1] = r1;
        q += 1;
        corrections += 1;
        debug_assert!(corrections <= 2);
    }

    q
}

/// Divides the four-limb value `a` (little-endian) by the two-limb value
/// `b`, returning the two-limb quotient.
///
/// A `b` of zero means the divisor wrapped around from `2^(2*LIMB_BITS)`
/// when the caller added one to a two-limb value of all ones; the quotient
/// of that division is just the top two limbs.
pub(crate) fn divide_four_limbs_by_two(a: [Limb; 4], b: [Limb; 2]) -> [Limb; 2] {
    if b == [0, 0] {
        return [a[2], a[3]];
    }
    let mut t = a;
    let q1 = divide_three_limbs_by_two(&mut t[1..4], b[0], b[1]);
    let q0 = divide_three_limbs_by_two(&mut t[0..3], b[0], b[1]);
    [q0, q1]
}
