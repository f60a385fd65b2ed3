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

//! Multiplication and squaring.
//!
//! Schoolbook kernels handle operands up to [`RECURSION_LIMIT`] limbs;
//! everything larger is a Karatsuba-style recursion over aligned halves.
//! The half-product routines (`recursive_multiply_bottom`,
//! `recursive_multiply_top`) exist for Montgomery reduction, which never
//! needs the full double-width product.

use super::{
    add::{
        limbs_add, limbs_add_assign, limbs_cmp, limbs_increment, limbs_sub, limbs_sub_assign,
    },
    dword::DoubleLimb,
};
use crate::limb::{Limb, LIMB_BITS};
use core::cmp::Ordering;

/// Operands at or below this limb count are multiplied by the schoolbook
/// kernel; the cutover is a tuning constant, not a correctness choice.
pub(crate) const RECURSION_LIMIT: usize = 8;

/// `r += a * b`, returning the carry out of the top limb of `r`.
pub(crate) fn limbs_mul_add_limb(r: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
    assert_eq!(r.len(), a.len());
    let mut carry: Limb = 0;
    for (r, a) in r.iter_mut().zip(a.iter()) {
        // r + a*b + carry <= (B-1) + (B-1)^2 + (B-1) == B^2 - 1, so the
        // sum cannot overflow a double limb.
        let t = (*r as DoubleLimb) + (*a as DoubleLimb) * (b as DoubleLimb) + (carry as DoubleLimb);
        *r = t as Limb;
        carry = (t >> LIMB_BITS) as Limb;
    }
    carry
}

/// `r = a * b` by rows; `r` is the full `2n`-limb product.
fn schoolbook_multiply(r: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let n = a.len();
    assert_eq!(b.len(), n);
    assert_eq!(r.len(), 2 * n);

    r[..n].fill(0);
    for (i, &b_limb) in b.iter().enumerate() {
        r[n + i] = limbs_mul_add_limb(&mut r[i..][..n], a, b_limb);
    }
}

/// `r = a * b mod B^n`; only the low `n` limbs of the product.
fn schoolbook_multiply_bottom(r: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let n = a.len();
    assert_eq!(b.len(), n);
    assert_eq!(r.len(), n);

    r.fill(0);
    for (i, &b_limb) in b.iter().enumerate() {
        let _ = limbs_mul_add_limb(&mut r[i..], &a[..n - i], b_limb);
    }
}

fn check_recursive_lens(r: &[Limb], t: &[Limb], a: &[Limb], b: &[Limb]) -> usize {
    let n = a.len();
    assert!(n >= 2 && n % 2 == 0);
    assert_eq!(b.len(), n);
    assert_eq!(r.len(), 2 * n);
    assert!(t.len() >= 2 * n);
    n
}

/// `r = a * b` for equal even lengths, recursing via Karatsuba above the
/// schoolbook cutover. `t` is scratch of at least `2n` limbs.
pub(crate) fn recursive_multiply(r: &mut [Limb], t: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let n = check_recursive_lens(r, t, a, b);
    if n <= RECURSION_LIMIT {
        schoolbook_multiply(r, a, b);
        return;
    }
    let n2 = n / 2;
    assert!(n2 % 2 == 0);
    let (a0, a1) = a.split_at(n2);
    let (b0, b1) = b.split_at(n2);

    // The cross term is (A1-A0)*(B0-B1); pick the subtraction order that
    // keeps both differences non-negative and track the product's sign.
    let a_cmp = limbs_cmp(a0, a1);
    let b_cmp = limbs_cmp(b0, b1);
    let mid_is_zero = a_cmp == Ordering::Equal || b_cmp == Ordering::Equal;
    let mid_is_negative = a_cmp == b_cmp;

    let (tm, tc) = t.split_at_mut(n);
    if mid_is_zero {
        tm.fill(0);
    } else {
        {
            let (da, db) = r[..n].split_at_mut(n2);
            let borrow = match a_cmp {
                Ordering::Greater => limbs_sub(da, a0, a1),
                _ => limbs_sub(da, a1, a0),
            };
            debug_assert_eq!(borrow, 0);
            let borrow = match b_cmp {
                Ordering::Less => limbs_sub(db, b1, b0),
                _ => limbs_sub(db, b0, b1),
            };
            debug_assert_eq!(borrow, 0);
        }
        {
            let (d, _) = r.split_at(n);
            recursive_multiply(tm, tc, &d[..n2], &d[n2..]);
        }
    }

    recursive_multiply(&mut r[n..], tc, a1, b1);
    recursive_multiply(&mut r[..n], tc, a0, b0);

    // Three length-n additions combine the pieces; the running carry must
    // stay within {0, 1, 2} or the recursion invariants were broken.
    let (lo, hi) = r.split_at(n);
    let mut carry = limbs_add(&mut tc[..n], lo, hi);
    if !mid_is_zero {
        if mid_is_negative {
            let borrow = limbs_sub_assign(&mut tc[..n], tm);
            debug_assert!(carry >= borrow);
            carry = carry.wrapping_sub(borrow);
        } else {
            carry += limbs_add_assign(&mut tc[..n], tm);
        }
    }
    debug_assert!(carry <= 2);
    let c2 = limbs_add_assign(&mut r[n2..n2 + n], &tc[..n]);
    let top_carry = limbs_increment(&mut r[n2 + n..], carry + c2);
    debug_assert_eq!(top_carry, 0);
}

/// `r = a * a`; the `a == b` specialization, one recursive multiply plus
/// two full-length additions instead of three multiplies.
pub(crate) fn recursive_square(r: &mut [Limb], t: &mut [Limb], a: &[Limb]) {
    let n = check_recursive_lens(r, t, a, a);
    if n <= RECURSION_LIMIT {
        schoolbook_multiply(r, a, a);
        return;
    }
    let n2 = n / 2;
    assert!(n2 % 2 == 0);
    let (a0, a1) = a.split_at(n2);

    let (tm, tc) = t.split_at_mut(n);
    recursive_square(&mut r[..n], tc, a0);
    recursive_square(&mut r[n..], tc, a1);
    recursive_multiply(tm, tc, a0, a1);

    let c1 = limbs_add_assign(&mut r[n2..n2 + n], tm);
    let c2 = limbs_add_assign(&mut r[n2..n2 + n], tm);
    let top_carry = limbs_increment(&mut r[n2 + n..], c1 + c2);
    debug_assert_eq!(top_carry, 0);
}

/// `r = a * b mod B^n`; the low half of the product.
pub(crate) fn recursive_multiply_bottom(r: &mut [Limb], t: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let n = a.len();
    assert!(n >= 2 && n % 2 == 0);
    assert_eq!(b.len(), n);
    assert_eq!(r.len(), n);
    assert!(t.len() >= 2 * n);
    if n <= RECURSION_LIMIT {
        schoolbook_multiply_bottom(r, a, b);
        return;
    }
    let n2 = n / 2;
    let (a0, a1) = a.split_at(n2);
    let (b0, b1) = b.split_at(n2);

    recursive_multiply(r, t, a0, b0);
    let (tb, tc) = t.split_at_mut(n2);
    recursive_multiply_bottom(tb, tc, a1, b0);
    let _ = limbs_add_assign(&mut r[n2..], tb);
    recursive_multiply_bottom(tb, tc, a0, b1);
    let _ = limbs_add_assign(&mut r[n2..], tb);
}

/// `r = floor(a * b / B^n)`; the high half of the product, given `l`, the
/// (caller-known) low half.
///
/// `l` pins down the carries out of the unseen `A0*B0` term: with
/// `mid = A0*B1 + A1*B0`, the product's low half satisfies
/// `l_hi == (u1 + mid) mod B^(n/2)` where `u1` is the high half of `A0*B0`,
/// so `u1` is recovered by subtraction and the full top half is
/// `A1*B1 + floor((u1 + mid) / B^(n/2))`. `t` is scratch of at least `3n`
/// limbs.
pub(crate) fn recursive_multiply_top(
    r: &mut [Limb],
    t: &mut [Limb],
    l: &[Limb],
    a: &[Limb],
    b: &[Limb],
) {
    let n = a.len();
    assert!(n >= 2 && n % 2 == 0);
    assert_eq!(b.len(), n);
    assert_eq!(l.len(), n);
    assert_eq!(r.len(), n);
    assert!(t.len() >= 3 * n);
    if n <= RECURSION_LIMIT {
        let (prod, _) = t.split_at_mut(2 * n);
        schoolbook_multiply(prod, a, b);
        debug_assert_eq!(&prod[..n], l);
        r.copy_from_slice(&prod[n..]);
        return;
    }
    let n2 = n / 2;
    assert!(n2 % 2 == 0);
    let (a0, a1) = a.split_at(n2);
    let (b0, b1) = b.split_at(n2);

    let (m, rest) = t.split_at_mut(n);
    let (h, tc) = rest.split_at_mut(n);

    // m = mid = A0*B1 + A1*B0
    recursive_multiply(m, tc, a0, b1);
    recursive_multiply(h, tc, a1, b0);
    let mut mid_carry = limbs_add_assign(m, h);

    // u1 = (l_hi - mid_lo) mod B^(n/2), reusing `h` as the staging buffer.
    let _ = limbs_sub(&mut h[..n2], &l[n2..], &m[..n2]);

    // m = mid + u1; its low half must reproduce l_hi.
    let c = limbs_add_assign(&mut m[..n2], &h[..n2]);
    mid_carry += limbs_increment(&mut m[n2..], c);
    debug_assert!(mid_carry <= 1);
    debug_assert_eq!(&m[..n2], &l[n2..]);

    // r = A1*B1 + floor((mid + u1) / B^(n/2))
    recursive_multiply(h, tc, a1, b1);
    r.copy_from_slice(h);
    let c2 = limbs_add_assign(&mut r[..n2], &m[n2..]);
    let top_carry = limbs_increment(&mut r[n2..], c2 + mid_carry);
    debug_assert_eq!(top_carry, 0);
}

/// `r = a * b` for operands of unequal even lengths, where the shorter
/// length evenly divides the longer. Decomposes into aligned equal-size
/// sub-multiplications; a single-limb multiplier is special-cased.
/// `t` is scratch of at least `4 * min(a.len(), b.len())` limbs.
pub(crate) fn asymmetric_multiply(r: &mut [Limb], t: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let (a, b) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let (na, nb) = (a.len(), b.len());
    assert!(na >= 2 && na % 2 == 0);
    assert_eq!(nb % na, 0);
    assert_eq!(r.len(), na + nb);

    if na == 2 && a[1] == 0 {
        match a[0] {
            0 => {
                r.fill(0);
            }
            1 => {
                r[..nb].copy_from_slice(b);
                r[nb..].fill(0);
            }
            w => {
                r.fill(0);
                r[nb] = limbs_mul_add_limb(&mut r[..nb], b, w);
            }
        }
        return;
    }

    if na == nb {
        recursive_multiply(r, t, a, b);
        return;
    }

    assert!(t.len() >= 4 * na);
    r.fill(0);
    let (prod, tc) = t.split_at_mut(2 * na);
    for (i, chunk) in b.chunks_exact(na).enumerate() {
        recursive_multiply(prod, tc, a, chunk);
        let c = limbs_add_assign(&mut r[i * na..][..2 * na], prod);
        let top_carry = limbs_increment(&mut r[i * na + 2 * na..], c);
        debug_assert_eq!(top_carry, 0);
    }
}
