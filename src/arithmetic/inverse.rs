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

//! Inversion modulo a power of two.
//!
//! The inverse of an odd value mod `2^k` is built by Hensel lifting: a
//! single-limb seed whose precision doubles with each Newton step, a
//! two-limb atomic case, then a recursive doubling construction that grows
//! a half-width inverse to full width with half-width multiplies. This is
//! what makes Montgomery reduction divisionless.

use super::{
    add::{limbs_add_assign, limbs_twos_complement},
    dword::widening_mul,
    mul::{recursive_multiply, recursive_multiply_bottom},
};
use crate::limb::{Limb, LIMB_BITS};

/// The inverse of the odd limb `a` mod `2^LIMB_BITS`.
///
/// Seeded with `a` itself, which is its own inverse mod 8; each Newton
/// step `r = r * (2 - r*a)` doubles the number of correct low bits.
pub(crate) fn atomic_inverse_limb(a: Limb) -> Limb {
    debug_assert!(a & 1 == 1);
    let mut r = a;
    let mut good_bits = 3;
    while good_bits < LIMB_BITS {
        r = r.wrapping_mul((2 as Limb).wrapping_sub(r.wrapping_mul(a)));
        good_bits *= 2;
    }
    debug_assert!(r.wrapping_mul(a) == 1);
    r
}

/// `c = (a1:a0)^-1 mod 2^(2*LIMB_BITS)` for odd `a0`.
pub(crate) fn atomic_inverse_mod_power2(c: &mut [Limb], a0: Limb, a1: Limb) {
    assert_eq!(c.len(), 2);
    let c0 = atomic_inverse_limb(a0);
    // c0*a0 == 1 + k*2^LIMB_BITS; the top limb of the product is k.
    let (_, k) = widening_mul(c0, a0);
    // (c1*2^w + c0)(a1*2^w + a0) == 1 requires k + c0*a1 + c1*a0 == 0
    // mod 2^w.
    let c1 = c0
        .wrapping_mul(k.wrapping_add(c0.wrapping_mul(a1)))
        .wrapping_neg();
    c[0] = c0;
    c[1] = c1;
}

/// `r = a^-1 mod 2^(LIMB_BITS * n)` for odd `a`, where `n = a.len()` is a
/// power of two. `t` is scratch of at least `2n` limbs.
///
/// Each recursive step doubles the precision: with `r_half` inverting the
/// low half, `a * r_half = 1 + 2^(w*n/2) * e`, and the top half of the
/// inverse is `-r_half * e mod 2^(w*n/2)`.
pub(crate) fn recursive_inverse_mod_power2(r: &mut [Limb], t: &mut [Limb], a: &[Limb]) {
    let n = a.len();
    assert!(n >= 2 && n.is_power_of_two());
    assert_eq!(r.len(), n);
    assert!(t.len() >= 2 * n);
    assert!(a[0] & 1 == 1);

    if n == 2 {
        atomic_inverse_mod_power2(r, a[0], a[1]);
        return;
    }

    let n2 = n / 2;
    let (a0, a1) = a.split_at(n2);
    {
        let (r0, _) = r.split_at_mut(n2);
        recursive_inverse_mod_power2(r0, t, a0);
    }

    // t[..n] = a0 * r0; the low half is 1 by construction and the high
    // half is the error term e1.
    {
        let (prod, tc) = t.split_at_mut(n);
        recursive_multiply(prod, tc, a0, &r[..n2]);
        debug_assert!(prod[0] == 1 && prod[1..n2].iter().all(|&l| l == 0));
    }

    // e = e1 + (a1 * r0 mod 2^(w*n/2)), then r_hi = r0 * -e.
    {
        let (e1_region, tc) = t.split_at_mut(n);
        let (e2, e1) = e1_region.split_at_mut(n2);
        recursive_multiply_bottom(e2, tc, a1, &r[..n2]);
        let _ = limbs_add_assign(e2, e1);
        limbs_twos_complement(e2);
    }
    {
        let (e2_and_rest, tc) = t.split_at_mut(n);
        let (r0, r1) = r.split_at_mut(n2);
        recursive_multiply_bottom(r1, tc, r0, &e2_and_rest[..n2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::mul::recursive_multiply_bottom;
    use alloc::vec;
    use alloc::vec::Vec;

    struct Rng(u64);

    impl Rng {
        fn next_limb(&mut self) -> Limb {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = self.0 ^ (self.0 >> 31);
            x as Limb
        }

        fn odd_limbs(&mut self, n: usize) -> Vec<Limb> {
            let mut a: Vec<Limb> = (0..n).map(|_| self.next_limb()).collect();
            a[0] |= 1;
            a
        }
    }

    #[test]
    fn test_atomic_inverse_limb() {
        for a in [1 as Limb, 3, 5, 7, 0x12345679, Limb::MAX] {
            assert_eq!(atomic_inverse_limb(a).wrapping_mul(a), 1);
        }
    }

    #[test]
    fn test_atomic_inverse_mod_power2() {
        let mut rng = Rng(7);
        for _ in 0..16 {
            let a = rng.odd_limbs(2);
            let mut c = [0; 2];
            atomic_inverse_mod_power2(&mut c, a[0], a[1]);

            let mut product = [0; 2];
            let mut t = [0; 4];
            recursive_multiply_bottom(&mut product, &mut t, &c, &a);
            assert_eq!(product, [1, 0]);
        }
    }

    #[test]
    fn test_recursive_inverse_mod_power2() {
        let mut rng = Rng(8);
        for &n in &[2usize, 4, 8, 16, 32] {
            for _ in 0..4 {
                let a = rng.odd_limbs(n);
                let mut r = vec![0; n];
                let mut t = vec![0; 2 * n];
                recursive_inverse_mod_power2(&mut r, &mut t, &a);

                // r * a mod 2^(w*n) == 1
                let mut product = vec![0; n];
                recursive_multiply_bottom(&mut product, &mut t, &r, &a);
                assert_eq!(product[0], 1);
                assert!(product[1..].iter().all(|&l| l == 0));
            }
        }
    }
}
