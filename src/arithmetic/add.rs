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

//! Word-wise addition, subtraction, comparison, shifting, and selection.

use crate::limb::{Limb, LimbMask, LIMB_BITS};
use core::cmp::Ordering;

#[inline]
fn check_even_len(r: &[Limb], a: &[Limb], b: &[Limb]) {
    assert_eq!(r.len(), a.len());
    assert_eq!(r.len(), b.len());
    debug_assert!(r.len() % 2 == 0);
}

/// `r = a + b`, returning the final carry (0 or 1).
pub(crate) fn limbs_add(r: &mut [Limb], a: &[Limb], b: &[Limb]) -> Limb {
    check_even_len(r, a, b);
    let mut carry = 0;
    for i in 0..r.len() {
        let (s, c1) = a[i].overflowing_add(b[i]);
        let (s, c2) = s.overflowing_add(carry);
        r[i] = s;
        carry = Limb::from(c1) | Limb::from(c2);
    }
    carry
}

/// `r += b`, returning the final carry (0 or 1).
pub(crate) fn limbs_add_assign(r: &mut [Limb], b: &[Limb]) -> Limb {
    debug_assert!(r.len() % 2 == 0);
    assert_eq!(r.len(), b.len());
    let mut carry = 0;
    for i in 0..r.len() {
        let (s, c1) = r[i].overflowing_add(b[i]);
        let (s, c2) = s.overflowing_add(carry);
        r[i] = s;
        carry = Limb::from(c1) | Limb::from(c2);
    }
    carry
}

/// `r = a - b`, returning the final borrow (0 or 1).
pub(crate) fn limbs_sub(r: &mut [Limb], a: &[Limb], b: &[Limb]) -> Limb {
    check_even_len(r, a, b);
    let mut borrow = 0;
    for i in 0..r.len() {
        let (d, b1) = a[i].overflowing_sub(b[i]);
        let (d, b2) = d.overflowing_sub(borrow);
        r[i] = d;
        borrow = Limb::from(b1) | Limb::from(b2);
    }
    borrow
}

/// `r -= b`, returning the final borrow (0 or 1).
pub(crate) fn limbs_sub_assign(r: &mut [Limb], b: &[Limb]) -> Limb {
    debug_assert!(r.len() % 2 == 0);
    assert_eq!(r.len(), b.len());
    let mut borrow = 0;
    for i in 0..r.len() {
        let (d, b1) = r[i].overflowing_sub(b[i]);
        let (d, b2) = d.overflowing_sub(borrow);
        r[i] = d;
        borrow = Limb::from(b1) | Limb::from(b2);
    }
    borrow
}

/// `r += x`, propagating the carry through all of `r`; returns the carry
/// out of the top limb.
pub(crate) fn limbs_increment(r: &mut [Limb], x: Limb) -> Limb {
    let mut carry = x;
    for limb in r.iter_mut() {
        if carry == 0 {
            return 0;
        }
        let (s, c) = limb.overflowing_add(carry);
        *limb = s;
        carry = Limb::from(c);
    }
    carry
}

/// `r -= x`, propagating the borrow through all of `r`; returns the borrow
/// out of the top limb.
pub(crate) fn limbs_decrement(r: &mut [Limb], x: Limb) -> Limb {
    let mut borrow = x;
    for limb in r.iter_mut() {
        if borrow == 0 {
            return 0;
        }
        let (d, b) = limb.overflowing_sub(borrow);
        *limb = d;
        borrow = Limb::from(b);
    }
    borrow
}

/// Compares equal-length magnitudes, most significant limb first.
pub(crate) fn limbs_cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    assert_eq!(a.len(), b.len());
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

#[inline]
pub(crate) fn limbs_are_zero(a: &[Limb]) -> bool {
    a.iter().all(|limb| *limb == 0)
}

/// `if cond { r = a; }`, expressed as masked selection so both inputs are
/// always read.
pub(crate) fn limbs_cmov(r: &mut [Limb], a: &[Limb], cond: LimbMask) {
    assert_eq!(r.len(), a.len());
    let mask = cond.limb();
    for (r, a) in r.iter_mut().zip(a.iter()) {
        *r = (*a & mask) | (*r & !mask);
    }
}

/// `r <<= n_bits` for `n_bits < LIMB_BITS`; returns the limb shifted out
/// of the top.
pub(crate) fn limbs_shift_left_bits(r: &mut [Limb], n_bits: usize) -> Limb {
    debug_assert!(n_bits < LIMB_BITS);
    if n_bits == 0 {
        return 0;
    }
    let mut carry = 0;
    for limb in r.iter_mut() {
        let new_carry = *limb >> (LIMB_BITS - n_bits);
        *limb = (*limb << n_bits) | carry;
        carry = new_carry;
    }
    carry
}

/// `r >>= n_bits` for `n_bits < LIMB_BITS`.
pub(crate) fn limbs_shift_right_bits(r: &mut [Limb], n_bits: usize) {
    debug_assert!(n_bits < LIMB_BITS);
    if n_bits == 0 {
        return;
    }
    let mut carry = 0;
    for limb in r.iter_mut().rev() {
        let new_carry = *limb << (LIMB_BITS - n_bits);
        *limb = (*limb >> n_bits) | carry;
        carry = new_carry;
    }
}

/// `r = -r mod 2^(LIMB_BITS * r.len())`.
pub(crate) fn limbs_twos_complement(r: &mut [Limb]) {
    for limb in r.iter_mut() {
        *limb = !*limb;
    }
    let _ = limbs_increment(r, 1);
}
