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

//! Modular arithmetic contexts.
//!
//! [`ModularArithmetic`] works over any positive modulus, reducing by
//! division. [`MontgomeryRepresentation`] requires an odd modulus and is
//! built for repeated work with that one modulus: it precomputes the
//! modulus inverse mod a power of two once at construction and reuses it
//! (plus a scratch workspace) across every multiply, square, and
//! exponentiation. That reuse is the whole point—reconstructing the
//! context per operation forfeits the Montgomery advantage.
//!
//! Values produced by `convert_in` are in the Montgomery domain: opaque,
//! never meaningfully compared or serialized, only fed back into the same
//! context and eventually converted out.

use crate::{
    arithmetic::montgomery::{
        montgomery_multiply, montgomery_reduce, montgomery_square, mul_scratch_limbs,
    },
    arithmetic::inverse::recursive_inverse_mod_power2,
    error::InvalidArgument,
    integer::Integer,
    limb::{Limb, LIMB_BITS},
};
use alloc::{vec, vec::Vec};

/// Ring operations modulo an arbitrary positive modulus.
pub struct ModularArithmetic {
    modulus: Integer,
}

impl ModularArithmetic {
    /// Constructs the ring ℤ/mℤ. The modulus must be positive.
    pub fn new(modulus: Integer) -> Result<Self, InvalidArgument> {
        if modulus.is_zero() || modulus.is_negative() {
            return Err(InvalidArgument::zero_modulus());
        }
        Ok(Self { modulus })
    }

    /// The modulus this context was built for.
    #[inline]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// `a mod m`, into `[0, m)`.
    pub fn reduce(&self, a: &Integer) -> Integer {
        a.modulo(&self.modulus).unwrap_or_else(|_| unreachable!())
    }

    /// `a + b mod m` for reduced inputs.
    pub fn add(&self, a: &Integer, b: &Integer) -> Integer {
        let sum = a + b;
        if sum >= self.modulus {
            &sum - &self.modulus
        } else {
            sum
        }
    }

    /// `a - b mod m` for reduced inputs.
    pub fn subtract(&self, a: &Integer, b: &Integer) -> Integer {
        if a >= b {
            a - b
        } else {
            &(a + &self.modulus) - b
        }
    }

    /// `a / 2 mod m` for a reduced input; an odd `a` requires an odd
    /// modulus (otherwise no half exists).
    pub fn half(&self, a: &Integer) -> Integer {
        if a.is_even() {
            a >> 1
        } else {
            debug_assert!(self.modulus.is_odd());
            (a + &self.modulus) >> 1
        }
    }

    /// `a * b mod m`.
    pub fn multiply(&self, a: &Integer, b: &Integer) -> Integer {
        self.reduce(&(a * b))
    }

    /// `a * a mod m`.
    pub fn square(&self, a: &Integer) -> Integer {
        self.reduce(&a.squared())
    }

    /// `a^-1 mod m`, or zero when `gcd(a, m) != 1`.
    pub fn multiplicative_inverse(&self, a: &Integer) -> Integer {
        a.inverse_mod(&self.modulus)
            .unwrap_or_else(|_| unreachable!())
    }

    /// `base^e mod m` by left-to-right square-and-multiply. The run time
    /// depends on `e`'s bit length and Hamming weight; `e` must be
    /// non-negative.
    pub fn exponentiate(&self, base: &Integer, e: &Integer) -> Integer {
        debug_assert!(!e.is_negative());
        let base = self.reduce(base);
        if e.is_zero() {
            return self.reduce(&Integer::one());
        }
        let mut acc = base.clone();
        for i in (0..e.bit_count() - 1).rev() {
            acc = self.square(&acc);
            if e.get_bit(i) {
                acc = self.multiply(&acc, &base);
            }
        }
        acc
    }

    /// `x^e1 * y^e2 mod m` via Shamir's trick: one shared
    /// square-and-multiply pass scanning both exponents together.
    pub fn cascade_exponentiate(
        &self,
        x: &Integer,
        e1: &Integer,
        y: &Integer,
        e2: &Integer,
    ) -> Integer {
        debug_assert!(!e1.is_negative() && !e2.is_negative());
        let x = self.reduce(x);
        let y = self.reduce(y);
        let xy = self.multiply(&x, &y);
        let bits = e1.bit_count().max(e2.bit_count());
        let mut acc = self.reduce(&Integer::one());
        for i in (0..bits).rev() {
            acc = self.square(&acc);
            match (e1.get_bit(i), e2.get_bit(i)) {
                (true, true) => acc = self.multiply(&acc, &xy),
                (true, false) => acc = self.multiply(&acc, &x),
                (false, true) => acc = self.multiply(&acc, &y),
                (false, false) => {}
            }
        }
        acc
    }
}

/// Montgomery-domain arithmetic for an odd modulus.
///
/// Construct once per modulus and reuse across operations; the
/// precomputed `u = m^-1 mod 2^(LIMB_BITS*n)` and the workspace are the
/// amortized cost. Operations take `&mut self` because the workspace is
/// explicit state of the context, not hidden scratch.
pub struct MontgomeryRepresentation {
    modulus: Integer,
    /// `modulus^-1 mod 2^(LIMB_BITS * n)`.
    u: Vec<Limb>,
    workspace: Vec<Limb>,
    n: usize,
}

impl MontgomeryRepresentation {
    /// Constructs the context. Fails on an even (or non-positive)
    /// modulus—Montgomery reduction requires odd.
    pub fn new(modulus: Integer) -> Result<Self, InvalidArgument> {
        if modulus.is_zero() || modulus.is_negative() {
            return Err(InvalidArgument::zero_modulus());
        }
        if modulus.is_even() {
            return Err(InvalidArgument::even_modulus());
        }
        let m_limbs = modulus.limbs_rounded();
        let n = m_limbs.len();
        let mut u = vec![0; n];
        let mut t = vec![0; 2 * n];
        recursive_inverse_mod_power2(&mut u, &mut t, m_limbs);
        Ok(Self {
            modulus,
            u,
            workspace: vec![0; mul_scratch_limbs(n)],
            n,
        })
    }

    /// The modulus this context was built for.
    #[inline]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    fn padded(&self, a: &Integer) -> Vec<Limb> {
        let mut p = vec![0; self.n];
        let limbs = a.limbs();
        let take = limbs.len().min(self.n);
        p[..take].copy_from_slice(&limbs[..take]);
        debug_assert!(limbs[take..].iter().all(|&l| l == 0));
        p
    }

    /// Converts a value into the Montgomery domain:
    /// `a * 2^(LIMB_BITS*n) mod m`.
    pub fn convert_in(&self, a: &Integer) -> Integer {
        let reduced = a.modulo(&self.modulus).unwrap_or_else(|_| unreachable!());
        (reduced << (LIMB_BITS * self.n))
            .modulo(&self.modulus)
            .unwrap_or_else(|_| unreachable!())
    }

    /// Converts a Montgomery-domain value back out.
    pub fn convert_out(&mut self, a: &Integer) -> Integer {
        let mut x = vec![0; 2 * self.n];
        x[..self.n].copy_from_slice(&self.padded(a));
        let mut r = vec![0; self.n];
        montgomery_reduce(
            &mut r,
            &mut self.workspace,
            &x,
            self.modulus.limbs_rounded(),
            &self.u,
        );
        Integer::from_limbs(crate::integer::Sign::Positive, r)
    }

    /// The product of two Montgomery-domain values, still in the domain.
    pub fn multiply(&mut self, a: &Integer, b: &Integer) -> Integer {
        let a = self.padded(a);
        let b = self.padded(b);
        let mut r = vec![0; self.n];
        montgomery_multiply(
            &mut r,
            &mut self.workspace,
            &a,
            &b,
            self.modulus.limbs_rounded(),
            &self.u,
        );
        Integer::from_limbs(crate::integer::Sign::Positive, r)
    }

    /// The square of a Montgomery-domain value, still in the domain.
    pub fn square(&mut self, a: &Integer) -> Integer {
        let a = self.padded(a);
        let mut r = vec![0; self.n];
        montgomery_square(
            &mut r,
            &mut self.workspace,
            &a,
            self.modulus.limbs_rounded(),
            &self.u,
        );
        Integer::from_limbs(crate::integer::Sign::Positive, r)
    }

    /// `a^-1 mod m` for a Montgomery-domain `a`, returned in the domain;
    /// zero when no inverse exists.
    pub fn multiplicative_inverse(&mut self, a: &Integer) -> Integer {
        let plain = self.convert_out(a);
        let inv = plain
            .inverse_mod(&self.modulus)
            .unwrap_or_else(|_| unreachable!());
        if inv.is_zero() {
            return inv;
        }
        self.convert_in(&inv)
    }

    /// `base^e mod m` for a *plain* base: converted into the domain once,
    /// squared-and-multiplied there, converted out once.
    pub fn exponentiate(&mut self, base: &Integer, e: &Integer) -> Integer {
        debug_assert!(!e.is_negative());
        if e.is_zero() {
            return Integer::one()
                .modulo(&self.modulus)
                .unwrap_or_else(|_| unreachable!());
        }
        let base_dom = self.convert_in(base);
        let mut acc = base_dom.clone();
        for i in (0..e.bit_count() - 1).rev() {
            acc = self.square(&acc);
            if e.get_bit(i) {
                acc = self.multiply(&acc, &base_dom);
            }
        }
        self.convert_out(&acc)
    }

    /// `x^e1 * y^e2 mod m` for plain `x`, `y`, via Shamir's trick in the
    /// Montgomery domain.
    pub fn cascade_exponentiate(
        &mut self,
        x: &Integer,
        e1: &Integer,
        y: &Integer,
        e2: &Integer,
    ) -> Integer {
        debug_assert!(!e1.is_negative() && !e2.is_negative());
        let x = self.convert_in(x);
        let y = self.convert_in(y);
        let xy = self.multiply(&x, &y);
        let one = self.convert_in(&Integer::one());
        let bits = e1.bit_count().max(e2.bit_count());
        let mut acc = one;
        for i in (0..bits).rev() {
            acc = self.square(&acc);
            match (e1.get_bit(i), e2.get_bit(i)) {
                (true, true) => acc = self.multiply(&acc, &xy),
                (true, false) => acc = self.multiply(&acc, &x),
                (false, true) => acc = self.multiply(&acc, &y),
                (false, false) => {}
            }
        }
        self.convert_out(&acc)
    }

    /// `base^e mod m` for each exponent, sharing this context's
    /// precomputation across all of them.
    pub fn simultaneous_exponentiate(
        &mut self,
        base: &Integer,
        exponents: &[Integer],
    ) -> Vec<Integer> {
        exponents
            .iter()
            .map(|e| self.exponentiate(base, e))
            .collect()
    }
}
