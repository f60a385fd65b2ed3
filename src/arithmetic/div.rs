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

//! Long division.
//!
//! Knuth's Algorithm D over two-limb quotient digits: normalize the divisor
//! so its top bit is set, estimate each digit with a four-by-two narrowing
//! division against the top of the divisor plus one, then multiply back and
//! fix the (never overshooting, at most twice-low) estimate by bounded
//! corrective subtraction.

use super::{
    add::{
        limbs_cmp, limbs_shift_left_bits, limbs_shift_right_bits, limbs_sub_assign,
    },
    dword::{div_two_limbs_by_one, divide_four_limbs_by_two, widen},
    mul::asymmetric_multiply,
};
use crate::limb::Limb;
use alloc::vec;
use core::cmp::Ordering;

/// `q, r = a / b, a % b` for even-length magnitudes.
///
/// Requires `a.len() >= b.len()`, both even, at least one of the top two
/// limbs of `b` nonzero, `q.len() == a.len() - b.len() + 2`, and
/// `r.len() == b.len()`. A zero divisor is rejected by the caller
/// (`integer::Integer::div_rem`) before reaching this engine.
pub(crate) fn divide(q: &mut [Limb], r: &mut [Limb], a: &[Limb], b: &[Limb]) {
    let na = a.len();
    let nb = b.len();
    assert!(na >= 2 && na % 2 == 0);
    assert!(nb >= 2 && nb % 2 == 0);
    assert!(na >= nb);
    assert!(b[nb - 1] != 0 || b[nb - 2] != 0);
    assert_eq!(q.len(), na - nb + 2);
    assert_eq!(r.len(), nb);

    // Normalized copies. `ta` carries two extra limbs so the digit loop can
    // always read a full four-limb window.
    let mut ta = vec![0 as Limb; na + 2];
    let mut tb = vec![0 as Limb; nb];
    let mut tp = vec![0 as Limb; nb + 2];
    let mut tm = [0 as Limb; 8];

    let shift_words = usize::from(b[nb - 1] == 0);
    tb[shift_words..].copy_from_slice(&b[..nb - shift_words]);
    let shift_bits = tb[nb - 1].leading_zeros() as usize;
    let _ = limbs_shift_left_bits(&mut tb, shift_bits);
    debug_assert!(tb[nb - 1] >> (crate::limb::LIMB_BITS - 1) == 1);

    ta[shift_words..][..na].copy_from_slice(a);
    let _ = limbs_shift_left_bits(&mut ta, shift_bits);

    q.fill(0);

    let na_eff = if ta[na + 1] == 0 && ta[na] <= 1 {
        // The two extra limbs are (nearly) empty: produce the top quotient
        // digit by repeated subtraction, which runs at most a few times
        // because the divisor is normalized.
        while ta[na] != 0 || limbs_cmp(&ta[na - nb..na], &tb) != Ordering::Less {
            let borrow = limbs_sub_assign(&mut ta[na - nb..na], &tb);
            ta[na] = ta[na].wrapping_sub(borrow);
            q[na - nb] += 1;
        }
        na
    } else {
        debug_assert!(limbs_cmp(&ta[na + 2 - nb..], &tb) == Ordering::Less);
        na + 2
    };

    // The divisor estimate: the top two limbs of the normalized divisor
    // plus one, so digit estimates never overshoot. All-ones wraps to zero,
    // which the four-by-two division treats as 2^(2*LIMB_BITS).
    let mut bt = [0 as Limb; 2];
    bt[0] = tb[nb - 2].wrapping_add(1);
    bt[1] = tb[nb - 1].wrapping_add(Limb::from(bt[0] == 0));

    // Reduce `ta` mod `tb`, two limbs at a time.
    if na_eff >= nb + 2 {
        let mut i = na_eff - 2;
        loop {
            let window = [ta[i - 2], ta[i - 1], ta[i], ta[i + 1]];
            let digit = divide_four_limbs_by_two(window, bt);
            q[i - nb] = digit[0];
            q[i - nb + 1] = digit[1];

            correct_quotient_estimate(
                &mut ta[i - nb..i + 2],
                &mut tp,
                &mut tm,
                &mut q[i - nb..i - nb + 2],
                &tb,
            );

            if i == nb {
                break;
            }
            i -= 2;
        }
    }

    // Denormalize the remainder.
    r.copy_from_slice(&ta[shift_words..][..nb]);
    limbs_shift_right_bits(r, shift_bits);
}

/// Corrects the underestimated two-limb quotient digit `qd` in place,
/// reducing the `b.len() + 2` limb window `rw` by `qd * b` plus at most two
/// corrective subtractions of `b`.
fn correct_quotient_estimate(
    rw: &mut [Limb],
    tp: &mut [Limb],
    tm: &mut [Limb],
    qd: &mut [Limb],
    b: &[Limb],
) {
    let nb = b.len();
    assert_eq!(rw.len(), nb + 2);
    assert_eq!(tp.len(), nb + 2);
    assert_eq!(qd.len(), 2);

    asymmetric_multiply(tp, tm, qd, b);
    let borrow = limbs_sub_assign(rw, tp);
    debug_assert_eq!(borrow, 0);
    debug_assert_eq!(rw[nb + 1], 0);

    let mut corrections = 0;
    while rw[nb] != 0 || limbs_cmp(&rw[..nb], b) != Ordering::Less {
        let borrow = limbs_sub_assign(&mut rw[..nb], b);
        rw[nb] = rw[nb].wrapping_sub(borrow);
        let (d0, overflow) = qd[0].overflowing_add(1);
        qd[0] = d0;
        qd[1] = qd[1].wrapping_add(Limb::from(overflow));
        corrections += 1;
        debug_assert!(corrections <= 2);
    }
}

/// One-pass division by a single limb; returns the remainder.
///
/// `q.len() == a.len()`; `d` must be nonzero (checked by the caller's
/// `DivideByZero` path before dispatching here).
pub(crate) fn divide_by_limb(q: &mut [Limb], a: &[Limb], d: Limb) -> Limb {
    assert!(d != 0);
    assert_eq!(q.len(), a.len());
    let mut rem: Limb = 0;
    for i in (0..a.len()).rev() {
        let (digit, r) = div_two_limbs_by_one(a[i], rem, d);
        q[i] = digit;
        rem = r;
    }
    rem
}

/// The remainder of `a` divided by the single limb `d`.
pub(crate) fn mod_limb(a: &[Limb], d: Limb) -> Limb {
    assert!(d != 0);
    let mut rem: Limb = 0;
    for i in (0..a.len()).rev() {
        rem = (widen(a[i], rem) % (d as super::dword::DoubleLimb)) as Limb;
    }
    rem
}
