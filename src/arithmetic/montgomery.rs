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

//! Montgomery reduction (REDC).
//!
//! With `u = m^-1 mod 2^(w*n)` precomputed, reduction never divides: the
//! quotient is one multiply-bottom, the subtrahend's high half is one
//! multiply-top, and the final correction is computed unconditionally with
//! the result chosen by masked selection, so the correction's timing does
//! not depend on the value being reduced.

use super::{
    add::{limbs_add, limbs_cmov, limbs_sub},
    mul::{recursive_multiply, recursive_multiply_bottom, recursive_multiply_top, recursive_square},
};
use crate::limb::{Limb, LimbMask};

/// Workspace limbs `montgomery_reduce` needs for an `n`-limb modulus.
pub(crate) const fn reduce_scratch_limbs(n: usize) -> usize {
    5 * n
}

/// Workspace limbs `montgomery_multiply`/`montgomery_square` need for an
/// `n`-limb modulus: a double-width product plus the reduction scratch.
pub(crate) const fn mul_scratch_limbs(n: usize) -> usize {
    2 * n + reduce_scratch_limbs(n)
}

/// `r = x / 2^(LIMB_BITS*n) mod m` for an odd `m` of `n` limbs, given
/// `u = m^-1 mod 2^(LIMB_BITS*n)` and `x < m * 2^(LIMB_BITS*n)` of `2n`
/// limbs. `ws` is scratch of at least [`reduce_scratch_limbs`]`(n)`.
pub(crate) fn montgomery_reduce(
    r: &mut [Limb],
    ws: &mut [Limb],
    x: &[Limb],
    m: &[Limb],
    u: &[Limb],
) {
    let n = m.len();
    assert!(n >= 2 && n % 2 == 0);
    assert_eq!(x.len(), 2 * n);
    assert_eq!(r.len(), n);
    assert_eq!(u.len(), n);
    assert!(ws.len() >= reduce_scratch_limbs(n));
    debug_assert!(m[0] & 1 == 1);

    let (q, rest) = ws.split_at_mut(n);
    let (h, tc) = rest.split_at_mut(n);

    // q = x * u mod B^n, so q*m == x (mod B^n) and x - q*m is an exact
    // multiple of B^n.
    recursive_multiply_bottom(q, tc, &x[..n], u);

    // h = floor(q*m / B^n); the known low half of q*m is x's low half.
    recursive_multiply_top(h, tc, &x[..n], q, m);

    // (x - q*m) / B^n = x_hi - h, in (-m, m). The correcting addition of m
    // is always computed; the final value is selected by the borrow mask.
    let (t_lo, rest2) = tc.split_at_mut(n);
    let (t_hi, _) = rest2.split_at_mut(n);
    let borrow = limbs_sub(t_lo, &x[n..], h);
    let carry = limbs_add(t_hi, t_lo, m);
    debug_assert!(carry == 1 || borrow == 0);
    r.copy_from_slice(t_lo);
    limbs_cmov(r, t_hi, LimbMask::from_bool(borrow != 0));
}

/// `r = a * b / 2^(LIMB_BITS*n) mod m` for `a, b < m`. `ws` is scratch of
/// at least [`mul_scratch_limbs`]`(n)`.
pub(crate) fn montgomery_multiply(
    r: &mut [Limb],
    ws: &mut [Limb],
    a: &[Limb],
    b: &[Limb],
    m: &[Limb],
    u: &[Limb],
) {
    let n = m.len();
    assert!(ws.len() >= mul_scratch_limbs(n));
    let (x, rest) = ws.split_at_mut(2 * n);
    recursive_multiply(x, rest, a, b);
    montgomery_reduce(r, rest, x, m, u);
}

/// The squaring specialization of [`montgomery_multiply`].
pub(crate) fn montgomery_square(
    r: &mut [Limb],
    ws: &mut [Limb],
    a: &[Limb],
    m: &[Limb],
    u: &[Limb],
) {
    let n = m.len();
    assert!(ws.len() >= mul_scratch_limbs(n));
    let (x, rest) = ws.split_at_mut(2 * n);
    recursive_square(x, rest, a);
    montgomery_reduce(r, rest, x, m, u);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::{div::divide, inverse::recursive_inverse_mod_power2};
    use alloc::vec;
    use alloc::vec::Vec;

    struct Rng(u64);

    impl Rng {
        fn next_limb(&mut self) -> Limb {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = self.0 ^ (self.0 >> 31);
            x as Limb
        }

        fn limbs(&mut self, n: usize) -> Vec<Limb> {
            (0..n).map(|_| self.next_limb()).collect()
        }
    }

    fn reduce_mod(value: &[Limb], m: &[Limb]) -> Vec<Limb> {
        let mut q = vec![0; value.len() - m.len() + 2];
        let mut r = vec![0; m.len()];
        divide(&mut q, &mut r, value, m);
        r
    }

    #[test]
    fn test_montgomery_reduce() {
        let mut rng = Rng(9);
        for &n in &[2usize, 4, 8, 16] {
            for _ in 0..4 {
                let mut m = rng.limbs(n);
                m[0] |= 1;
                m[n - 1] |= 1 << (crate::limb::LIMB_BITS - 1);

                let mut u = vec![0; n];
                let mut t = vec![0; 2 * n];
                recursive_inverse_mod_power2(&mut u, &mut t, &m);

                // x = (random mod m) * (random mod m) < m * B^n.
                let a = reduce_mod(&rng.limbs(2 * n), &m);
                let b = reduce_mod(&rng.limbs(2 * n), &m);
                let mut x = vec![0; 2 * n];
                let mut t = vec![0; 2 * n];
                crate::arithmetic::mul::recursive_multiply(&mut x, &mut t, &a, &b);

                let mut r = vec![0; n];
                let mut ws = vec![0; reduce_scratch_limbs(n)];
                montgomery_reduce(&mut r, &mut ws, &x, &m, &u);

                // r * B^n == x (mod m)
                let mut shifted = vec![0; 2 * n];
                shifted[n..].copy_from_slice(&r);
                assert_eq!(reduce_mod(&shifted, &m), reduce_mod(&x, &m), "n={}", n);
            }
        }
    }

    #[test]
    fn test_montgomery_multiply_and_square_agree() {
        let mut rng = Rng(10);
        let n = 8;
        let mut m = rng.limbs(n);
        m[0] |= 1;
        m[n - 1] |= 1;

        let mut u = vec![0; n];
        let mut t = vec![0; 2 * n];
        recursive_inverse_mod_power2(&mut u, &mut t, &m);

        let a = reduce_mod(&rng.limbs(2 * n), &m);
        let mut by_mul = vec![0; n];
        let mut by_sq = vec![0; n];
        let mut ws = vec![0; mul_scratch_limbs(n)];
        montgomery_multiply(&mut by_mul, &mut ws, &a, &a, &m, &u);
        montgomery_square(&mut by_sq, &mut ws, &a, &m, &u);
        assert_eq!(by_mul, by_sq);
    }
}
