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

//! Signed arbitrary-precision integers.
//!
//! An [`Integer`] owns a sign and a little-endian limb magnitude. The
//! magnitude's length is the *capacity*: always even and rounded up to a
//! power of two (2, 4, 8, 16, ...), so the recursive multiply/divide
//! engines always see aligned operand sizes. Trailing zero limbs are not
//! significant; [`Integer::word_count`] strips them on demand. Zero is
//! always positive—negative zero cannot be constructed.

use crate::{
    arithmetic::{
        add::{
            limbs_add_assign, limbs_are_zero, limbs_cmp, limbs_decrement, limbs_increment,
            limbs_shift_left_bits, limbs_shift_right_bits, limbs_sub_assign,
            limbs_twos_complement,
        },
        div::{divide, divide_by_limb, mod_limb},
        dword::DoubleLimb,
        mul::{asymmetric_multiply, recursive_square},
        MAX_LIMBS,
    },
    bits::BitLength,
    error::{DivideByZero, InvalidArgument, RandomNumberNotFound},
    limb::{
        self, limbs_for_bits, limbs_minimal_bits, limbs_significant, Limb, LIMB_BITS, LIMB_BYTES,
    },
    rand,
};
use alloc::{string::String, vec, vec::Vec};
use core::cmp::Ordering;

/// The sign of an [`Integer`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sign {
    /// Zero or greater. Zero is always `Positive`.
    Positive,
    /// Strictly less than zero.
    Negative,
}

/// Whether a byte encoding carries a two's-complement sign.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Signedness {
    /// A pure big-endian magnitude.
    Unsigned,
    /// Two's-complement big-endian; the top bit of the first byte is the
    /// sign.
    Signed,
}

/// The kind of value [`Integer::random_with`] searches for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RandomNumberType {
    /// Any integer in the constrained range.
    Any,
    /// A prime in the constrained range.
    Prime,
}

/// Why [`Integer::random_with`] failed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenerationError {
    /// The constraints were malformed (e.g. `min > max`, or an `equiv`
    /// outside `[0, modulus)`).
    Invalid(InvalidArgument),
    /// The constraints admit no value, or the bounded search gave up.
    NotFound(RandomNumberNotFound),
}

impl From<InvalidArgument> for GenerationError {
    fn from(e: InvalidArgument) -> Self {
        Self::Invalid(e)
    }
}

impl From<RandomNumberNotFound> for GenerationError {
    fn from(e: RandomNumberNotFound) -> Self {
        Self::NotFound(e)
    }
}

impl core::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Invalid(e) => e.fmt(f),
            Self::NotFound(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GenerationError {}

/// A signed arbitrary-precision integer.
#[derive(Clone)]
pub struct Integer {
    sign: Sign,
    limbs: Vec<Limb>,
}

/// Rounds a limb count up to the capacity policy: at least 2, and a power
/// of two.
fn round_up_size(n: usize) -> usize {
    n.next_power_of_two().max(2)
}

/// Rounds a limb count up to an even count, the divide engine's operand
/// shape.
fn round_up_even(n: usize) -> usize {
    n + n % 2
}

impl Integer {
    // Construction.

    /// Zero.
    #[inline]
    pub fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            limbs: vec![0; 2],
        }
    }

    /// One.
    #[inline]
    pub fn one() -> Self {
        Self::from_limb(1)
    }

    /// Two.
    #[inline]
    pub fn two() -> Self {
        Self::from_limb(2)
    }

    /// `2^e`.
    pub fn power2(e: usize) -> Result<Self, InvalidArgument> {
        let n_limbs = limbs_for_bits(e + 1);
        if n_limbs > MAX_LIMBS {
            return Err(InvalidArgument::too_large());
        }
        let mut r = Self {
            sign: Sign::Positive,
            limbs: vec![0; round_up_size(n_limbs)],
        };
        r.limbs[e / LIMB_BITS] = 1 << (e % LIMB_BITS);
        Ok(r)
    }

    pub(crate) fn from_limb(w: Limb) -> Self {
        Self {
            sign: Sign::Positive,
            limbs: vec![w, 0],
        }
    }

    /// Takes ownership of a magnitude, normalizing the capacity and the
    /// sign of zero.
    pub(crate) fn from_limbs(sign: Sign, mut limbs: Vec<Limb>) -> Self {
        limbs.resize(round_up_size(limbs.len()), 0);
        let mut r = Self { sign, limbs };
        r.normalize();
        r
    }

    /// Decodes a fixed-width big-endian value.
    ///
    /// With [`Signedness::Signed`], a set top bit means the bytes are the
    /// two's complement of the magnitude; a leading run of sign-extension
    /// bytes is handled by the width arithmetic rather than stored.
    pub fn from_be_bytes(
        input: untrusted::Input,
        signedness: Signedness,
    ) -> Result<Self, InvalidArgument> {
        let n_limbs = (input.len() + LIMB_BYTES - 1) / LIMB_BYTES;
        if n_limbs > MAX_LIMBS {
            return Err(InvalidArgument::too_large());
        }
        let negative = signedness == Signedness::Signed
            && input
                .clone()
                .read_all((), |r| {
                    let first = r.read_byte().map_err(|untrusted::EndOfInput| ())?;
                    let _ = r.skip_to_end();
                    Ok(first & 0x80 != 0)
                })
                .unwrap_or(false);

        let mut limbs = vec![0; round_up_size(n_limbs)];
        limb::parse_big_endian_and_pad(input, &mut limbs[..n_limbs.max(1)])?;

        if negative {
            // magnitude = 2^(8*len) - raw, confined to the encoded width.
            let bits = input.len() * 8;
            limbs_twos_complement(&mut limbs[..limbs_for_bits(bits)]);
            let partial = bits % LIMB_BITS;
            if partial != 0 {
                limbs[bits / LIMB_BITS] &= (1 << partial) - 1;
            }
        }
        Ok(Self::from_limbs(
            if negative { Sign::Negative } else { Sign::Positive },
            limbs,
        ))
    }

    /// The minimal `encode` width for this value, in bytes; at least 1.
    pub fn min_encoded_size(&self, signedness: Signedness) -> usize {
        let mut len = self.byte_count().max(1);
        if signedness == Signedness::Unsigned {
            return len;
        }
        match self.sign {
            Sign::Positive => {
                if self.get_byte(len - 1) & 0x80 != 0 {
                    len += 1;
                }
            }
            Sign::Negative => {
                // Representable down to -2^(8*len - 1).
                let limit_bit = 8 * len - 1;
                let is_power = self.bit_count() == limit_bit + 1
                    && (0..limit_bit).all(|i| !self.get_bit(i));
                if self.bit_count() > limit_bit && !is_power {
                    len += 1;
                }
            }
        }
        len
    }

    /// Encodes exactly `out.len()` big-endian bytes.
    ///
    /// Values wider than `out` lose their high-order bytes, as with any
    /// fixed-width store; size with [`Integer::min_encoded_size`] when
    /// truncation must not happen.
    pub fn encode(&self, out: &mut [u8], signedness: Signedness) {
        match (signedness, self.sign) {
            (Signedness::Unsigned, _) | (Signedness::Signed, Sign::Positive) => {
                limb::big_endian_from_limbs(&self.limbs, out);
            }
            (Signedness::Signed, Sign::Negative) => {
                let bits = out.len() * 8;
                let n = limbs_for_bits(bits).max(1);
                let mut tmp = vec![0; round_up_size(n)];
                let take = self.limbs.len().min(tmp.len());
                tmp[..take].copy_from_slice(&self.limbs[..take]);
                limbs_twos_complement(&mut tmp[..n]);
                let partial = bits % LIMB_BITS;
                if partial != 0 {
                    tmp[bits / LIMB_BITS] &= (1 << partial) - 1;
                }
                limb::big_endian_from_limbs(&tmp[..n], out);
            }
        }
    }

    /// A uniformly random value in `[0, 2^bits)`.
    pub fn random_bits(
        rng: &dyn rand::SecureRandom,
        bits: BitLength,
    ) -> Result<Self, InvalidArgument> {
        let n_bytes = bits.as_bytes_rounded_up();
        if limbs_for_bits(bits.as_bits()) > MAX_LIMBS {
            return Err(InvalidArgument::too_large());
        }
        let mut bytes = vec![0u8; n_bytes];
        rng.fill(&mut bytes)
            .map_err(|crate::error::Unspecified| InvalidArgument::rng_failed())?;
        let partial = bits.as_bits() % 8;
        if partial != 0 {
            bytes[0] &= (1 << partial) - 1;
        }
        Self::from_be_bytes(untrusted::Input::from(&bytes), Signedness::Unsigned)
    }

    /// A uniformly random value in `[min, max]` (both inclusive).
    pub fn random_in_range(
        rng: &dyn rand::SecureRandom,
        min: &Integer,
        max: &Integer,
    ) -> Result<Self, GenerationError> {
        if min > max {
            return Err(InvalidArgument::empty_range().into());
        }
        let range = max - min;
        let bits = BitLength::from_bits(range.bit_count());
        // Rejection sampling halves the miss probability per extra
        // attempt; the budget failing is a (2^-BUDGET)-probability event,
        // reported rather than looped on forever.
        const BUDGET: usize = 256;
        for _ in 0..BUDGET {
            let candidate = Self::random_bits(rng, bits)?;
            if candidate <= range {
                return Ok(min + &candidate);
            }
        }
        Err(RandomNumberNotFound::new().into())
    }

    /// A random value in `[min, max]` congruent to `equiv` mod `modulus`,
    /// optionally required to be prime.
    ///
    /// With [`RandomNumberType::Prime`], random starting points are sieved
    /// forward a bounded number of times, then the whole range is searched
    /// once; exhaustion returns
    /// [`GenerationError::NotFound`] rather than looping forever.
    pub fn random_with(
        rng: &dyn rand::SecureRandom,
        min: &Integer,
        max: &Integer,
        kind: RandomNumberType,
        equiv: &Integer,
        modulus: &Integer,
    ) -> Result<Self, GenerationError> {
        if min > max {
            return Err(InvalidArgument::empty_range().into());
        }
        if modulus.is_zero() {
            return Err(InvalidArgument::zero_modulus().into());
        }
        if equiv.is_negative() || *equiv >= *modulus {
            return Err(InvalidArgument::out_of_range_equivalence().into());
        }

        match kind {
            RandomNumberType::Any => {
                // The k-th admissible value is equiv + k*modulus; pick k
                // uniformly.
                let k_min = {
                    let diff = min - equiv;
                    let (q, r) = diff.div_rem(modulus).unwrap_or_else(|_| unreachable!());
                    if r.is_zero() {
                        q
                    } else {
                        q + &Integer::one()
                    }
                };
                let k_max = {
                    let diff = max - equiv;
                    let (q, _) = diff.div_rem(modulus).unwrap_or_else(|_| unreachable!());
                    q
                };
                if k_max < k_min {
                    return Err(RandomNumberNotFound::new().into());
                }
                let k = Self::random_in_range(rng, &k_min, &k_max)?;
                Ok(equiv + &(&k * modulus))
            }
            RandomNumberType::Prime => {
                crate::prime::random_prime(rng, min, max, equiv, modulus)
            }
        }
    }

    // Accessors.

    /// Whether this is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        limbs_are_zero(&self.limbs)
    }

    /// Whether the low bit is clear. Zero is even.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    /// Whether the low bit is set.
    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Whether this is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// The sign; zero is [`Sign::Positive`].
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The number of significant bits in the magnitude; zero for zero.
    #[inline]
    pub fn bit_count(&self) -> usize {
        limbs_minimal_bits(&self.limbs).as_bits()
    }

    /// The number of significant bytes in the magnitude.
    #[inline]
    pub fn byte_count(&self) -> usize {
        BitLength::from_bits(self.bit_count()).as_bytes_rounded_up()
    }

    /// The number of significant limbs in the magnitude.
    #[inline]
    pub fn word_count(&self) -> usize {
        limbs_significant(&self.limbs)
    }

    /// Bit `i` of the magnitude (bit 0 is least significant).
    pub fn get_bit(&self, i: usize) -> bool {
        match self.limbs.get(i / LIMB_BITS) {
            Some(limb) => (limb >> (i % LIMB_BITS)) & 1 == 1,
            None => false,
        }
    }

    /// Sets bit `i` of the magnitude, growing the capacity as needed.
    pub fn set_bit(&mut self, i: usize, value: bool) {
        if value {
            self.grow_to(i / LIMB_BITS + 1);
            self.limbs[i / LIMB_BITS] |= 1 << (i % LIMB_BITS);
        } else if let Some(limb) = self.limbs.get_mut(i / LIMB_BITS) {
            *limb &= !(1 << (i % LIMB_BITS));
            self.normalize();
        }
    }

    /// Byte `i` of the magnitude (byte 0 is least significant).
    pub fn get_byte(&self, i: usize) -> u8 {
        match self.limbs.get(i / LIMB_BYTES) {
            Some(limb) => (limb >> ((i % LIMB_BYTES) * 8)) as u8,
            None => 0,
        }
    }

    /// Sets byte `i` of the magnitude, growing the capacity as needed.
    pub fn set_byte(&mut self, i: usize, value: u8) {
        self.grow_to(i / LIMB_BYTES + 1);
        let shift = (i % LIMB_BYTES) * 8;
        let limb = &mut self.limbs[i / LIMB_BYTES];
        *limb = (*limb & !((0xff as Limb) << shift)) | ((value as Limb) << shift);
        self.normalize();
    }

    /// The absolute value.
    pub fn abs(&self) -> Integer {
        Integer {
            sign: Sign::Positive,
            limbs: self.limbs.clone(),
        }
    }

    // Arithmetic.

    /// `self * self`, via the squaring kernel rather than the general
    /// multiplier.
    pub fn squared(&self) -> Integer {
        let n = round_up_size(self.word_count());
        let mut r = vec![0; round_up_size(2 * n)];
        let mut t = vec![0; 2 * n];
        recursive_square(&mut r[..2 * n], &mut t, &self.limbs[..n]);
        Integer::from_limbs(Sign::Positive, r)
    }

    /// The quotient and remainder of `self / divisor`.
    ///
    /// The remainder is always in `[0, |divisor|)` and the quotient is
    /// adjusted to match: `-7 / 2` is `(-4, 1)`, not `(-3, -1)`. This is
    /// floor division toward negative infinity for positive divisors, and
    /// the identity `q*divisor + r == self` always holds.
    pub fn div_rem(&self, divisor: &Integer) -> Result<(Integer, Integer), DivideByZero> {
        if divisor.is_zero() {
            return Err(DivideByZero::new());
        }
        let (q_mag, r_mag) = positive_div_rem(&self.limbs, &divisor.limbs);
        let mut q = Integer::from_limbs(Sign::Positive, q_mag);
        let mut r = Integer::from_limbs(Sign::Positive, r_mag);
        if self.is_negative() && !r.is_zero() {
            q += &Integer::one();
            r = &divisor.abs() - &r;
        }
        if self.sign != divisor.sign && !q.is_zero() {
            q.sign = Sign::Negative;
        }
        Ok((q, r))
    }

    /// `self mod m`, always in `[0, |m|)`.
    pub fn modulo(&self, m: &Integer) -> Result<Integer, DivideByZero> {
        self.div_rem(m).map(|(_, r)| r)
    }

    /// The quotient and remainder of `self / d` for a single-limb divisor,
    /// in one pass without normalization.
    pub fn div_rem_limb(&self, d: Limb) -> Result<(Integer, Limb), DivideByZero> {
        if d == 0 {
            return Err(DivideByZero::new());
        }
        let mut q_mag = vec![0; self.limbs.len()];
        let mut r = divide_by_limb(&mut q_mag, &self.limbs, d);
        let mut q = Integer::from_limbs(Sign::Positive, q_mag);
        if self.is_negative() && r != 0 {
            q += &Integer::one();
            r = d - r;
        }
        if self.is_negative() && !q.is_zero() {
            q.sign = Sign::Negative;
        }
        Ok((q, r))
    }

    /// `self mod d` for a single-limb divisor, always in `[0, d)`.
    pub fn mod_limb(&self, d: Limb) -> Result<Limb, DivideByZero> {
        if d == 0 {
            return Err(DivideByZero::new());
        }
        let r = mod_limb(&self.limbs, d);
        Ok(if self.is_negative() && r != 0 {
            d - r
        } else {
            r
        })
    }

    /// The greatest common divisor of the absolute values.
    pub fn gcd(&self, other: &Integer) -> Integer {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let r = a.modulo(&b).unwrap_or_else(|_| unreachable!());
            a = b;
            b = r;
        }
        a
    }

    /// `self^-1 mod m` by the extended Euclidean algorithm, or zero when
    /// no inverse exists (`gcd(self, m) != 1`); callers like CRT rely on
    /// the zero convention rather than an optional result.
    pub fn inverse_mod(&self, m: &Integer) -> Result<Integer, InvalidArgument> {
        if m.is_zero() || m.is_negative() {
            return Err(InvalidArgument::zero_modulus());
        }
        let a = self
            .modulo(m)
            .unwrap_or_else(|_| unreachable!());

        // Invariants: old_r == old_s * self (mod m), r == s * self (mod m).
        let mut old_r = a;
        let mut r = m.clone();
        let mut old_s = Integer::one();
        let mut s = Integer::zero();
        while !r.is_zero() {
            let (q, rem) = old_r.div_rem(&r).unwrap_or_else(|_| unreachable!());
            let new_s = &old_s - &(&q * &s);
            old_r = r;
            r = rem;
            old_s = s;
            s = new_s;
        }
        if old_r != Integer::one() {
            return Ok(Integer::zero());
        }
        old_s.modulo(m).map_err(|_| unreachable!())
    }

    /// `self^-1 mod m` for a single-limb modulus, or zero when no inverse
    /// exists.
    pub fn inverse_mod_limb(&self, m: Limb) -> Result<Limb, InvalidArgument> {
        if m == 0 {
            return Err(InvalidArgument::zero_modulus());
        }
        if m == 1 {
            return Ok(0);
        }
        let a = self.mod_limb(m).unwrap_or_else(|_| unreachable!());
        // Signed extended Euclid over double-width accumulators.
        let mut old_r = a as DoubleLimb;
        let mut r = m as DoubleLimb;
        let mut old_s: DoubleLimb = 1;
        let mut s: DoubleLimb = 0;
        let mut old_s_neg = false;
        let mut s_neg = false;
        while r != 0 {
            let q = old_r / r;
            let (new_s, new_s_neg) = {
                // old_s - q*s with explicit signs.
                let qs = q * s;
                if old_s_neg == s_neg {
                    if old_s >= qs {
                        (old_s - qs, old_s_neg)
                    } else {
                        (qs - old_s, !old_s_neg)
                    }
                } else {
                    (old_s + qs, old_s_neg)
                }
            };
            let new_r = old_r - q * r;
            old_r = r;
            r = new_r;
            old_s = s;
            old_s_neg = s_neg;
            s = new_s;
            s_neg = new_s_neg;
        }
        if old_r != 1 {
            return Ok(0);
        }
        let inv = (old_s % (m as DoubleLimb)) as Limb;
        Ok(if old_s_neg && inv != 0 { m - inv } else { inv })
    }

    // Internals shared with `modular` and `prime`.

    #[inline]
    pub(crate) fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// The magnitude, sliced to its rounded power-of-two operand size.
    pub(crate) fn limbs_rounded(&self) -> &[Limb] {
        &self.limbs[..round_up_size(self.word_count())]
    }

    fn normalize(&mut self) {
        if self.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    /// Grows the capacity to hold at least `n_limbs` limbs.
    fn grow_to(&mut self, n_limbs: usize) {
        if n_limbs > self.limbs.len() {
            assert!(n_limbs <= MAX_LIMBS);
            self.limbs.resize(round_up_size(n_limbs), 0);
        }
    }

    fn shl_assign_bits(&mut self, n: usize) {
        if self.is_zero() || n == 0 {
            return;
        }
        let word_shift = n / LIMB_BITS;
        let bit_shift = n % LIMB_BITS;
        self.grow_to(limbs_for_bits(self.bit_count() + n));
        for i in (0..self.limbs.len()).rev() {
            self.limbs[i] = if i >= word_shift {
                self.limbs[i - word_shift]
            } else {
                0
            };
        }
        let carry = limbs_shift_left_bits(&mut self.limbs, bit_shift);
        debug_assert_eq!(carry, 0);
    }

    fn shr_assign_bits(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let word_shift = n / LIMB_BITS;
        let bit_shift = n % LIMB_BITS;
        let len = self.limbs.len();
        for i in 0..len {
            self.limbs[i] = if i + word_shift < len {
                self.limbs[i + word_shift]
            } else {
                0
            };
        }
        limbs_shift_right_bits(&mut self.limbs, bit_shift);
        self.normalize();
    }

    /// Sign-aware addition of `b` scaled by `b_sign` into a fresh value.
    fn signed_add(&self, b: &Integer, flip_b: bool) -> Integer {
        let b_sign = match (b.sign, flip_b) {
            (Sign::Positive, false) | (Sign::Negative, true) => Sign::Positive,
            _ => Sign::Negative,
        };
        if b.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return Integer {
                sign: b_sign,
                limbs: b.limbs.clone(),
            };
        }
        if self.sign == b_sign {
            let limbs = add_magnitudes(&self.limbs, &b.limbs);
            return Integer::from_limbs(self.sign, limbs);
        }
        // Differing signs: subtract the smaller magnitude from the larger;
        // the result takes the larger's sign.
        match compare_magnitudes(&self.limbs, &b.limbs) {
            Ordering::Equal => Integer::zero(),
            Ordering::Greater => {
                let limbs = sub_magnitudes(&self.limbs, &b.limbs);
                Integer::from_limbs(self.sign, limbs)
            }
            Ordering::Less => {
                let limbs = sub_magnitudes(&b.limbs, &self.limbs);
                Integer::from_limbs(b_sign, limbs)
            }
        }
    }

    fn multiply(&self, b: &Integer) -> Integer {
        if self.is_zero() || b.is_zero() {
            return Integer::zero();
        }
        let na = round_up_size(self.word_count());
        let nb = round_up_size(b.word_count());
        let mut r = vec![0; round_up_size(na + nb)];
        let mut t = vec![0; 4 * na.min(nb)];
        asymmetric_multiply(
            &mut r[..na + nb],
            &mut t,
            &self.limbs[..na],
            &b.limbs[..nb],
        );
        let sign = if self.sign == b.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        Integer::from_limbs(sign, r)
    }
}

/// Magnitude addition with the doubling growth policy: a carry out of the
/// shared capacity doubles the capacity and sets the new top limb to 1.
fn add_magnitudes(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = a.len();
    let mut r = vec![0; n];
    r.copy_from_slice(a);
    let carry = limbs_add_assign(&mut r[..b.len()], b);
    let carry = limbs_increment(&mut r[b.len()..], carry);
    if carry != 0 {
        r.resize(round_up_size(n + 1), 0);
        r[n] = 1;
    }
    r
}

/// Magnitude subtraction; requires `|a| >= |b|`.
fn sub_magnitudes(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert!(compare_magnitudes(a, b) != Ordering::Less);
    let mut r = vec![0; a.len().max(b.len())];
    r[..a.len()].copy_from_slice(a);
    let borrow = limbs_sub_assign(&mut r[..b.len()], b);
    let borrow = limbs_decrement(&mut r[b.len()..], borrow);
    debug_assert_eq!(borrow, 0);
    r
}

fn compare_magnitudes(a: &[Limb], b: &[Limb]) -> Ordering {
    let sig_a = limbs_significant(a);
    let sig_b = limbs_significant(b);
    if sig_a != sig_b {
        return sig_a.cmp(&sig_b);
    }
    limbs_cmp(&a[..sig_a], &b[..sig_a])
}

/// Unsigned division dispatch: compare-and-skip, the single-limb fast
/// path, or the full normalized engine on even-rounded operand sizes.
fn positive_div_rem(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let sig_b = limbs_significant(b);
    debug_assert!(sig_b != 0);

    if compare_magnitudes(a, b) == Ordering::Less {
        return (vec![0; 2], a.to_vec());
    }
    if sig_b == 1 {
        let mut q = vec![0; a.len()];
        let r = divide_by_limb(&mut q, a, b[0]);
        return (q, vec![r, 0]);
    }

    let na = round_up_even(limbs_significant(a));
    let nb = round_up_even(sig_b);
    let mut q = vec![0; na - nb + 2];
    let mut r = vec![0; nb];
    divide(&mut q, &mut r, &a[..na], &b[..nb]);
    (q, r)
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer {}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => compare_magnitudes(&self.limbs, &other.limbs),
            (Sign::Negative, Sign::Negative) => {
                compare_magnitudes(&other.limbs, &self.limbs)
            }
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::ops::Add for &Integer {
    type Output = Integer;
    fn add(self, rhs: &Integer) -> Integer {
        self.signed_add(rhs, false)
    }
}

impl core::ops::Sub for &Integer {
    type Output = Integer;
    fn sub(self, rhs: &Integer) -> Integer {
        self.signed_add(rhs, true)
    }
}

impl core::ops::Mul for &Integer {
    type Output = Integer;
    fn mul(self, rhs: &Integer) -> Integer {
        self.multiply(rhs)
    }
}

impl core::ops::Div for &Integer {
    type Output = Integer;
    /// Panics on a zero divisor, as the primitive integer operators do;
    /// [`Integer::div_rem`] is the checked seam.
    fn div(self, rhs: &Integer) -> Integer {
        match self.div_rem(rhs) {
            Ok((q, _)) => q,
            Err(DivideByZero { .. }) => panic!("attempt to divide by zero"),
        }
    }
}

impl core::ops::Rem for &Integer {
    type Output = Integer;
    /// Panics on a zero divisor, as the primitive integer operators do;
    /// [`Integer::modulo`] is the checked seam. The result is always in
    /// `[0, |rhs|)`.
    fn rem(self, rhs: &Integer) -> Integer {
        match self.modulo(rhs) {
            Ok(r) => r,
            Err(DivideByZero { .. }) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

macro_rules! forward_value_binops {
    ($($Imp:ident :: $method:ident),+) => {
        $(
            impl core::ops::$Imp<Integer> for Integer {
                type Output = Integer;
                fn $method(self, rhs: Integer) -> Integer {
                    core::ops::$Imp::$method(&self, &rhs)
                }
            }

            impl core::ops::$Imp<&Integer> for Integer {
                type Output = Integer;
                fn $method(self, rhs: &Integer) -> Integer {
                    core::ops::$Imp::$method(&self, rhs)
                }
            }

            impl core::ops::$Imp<Integer> for &Integer {
                type Output = Integer;
                fn $method(self, rhs: Integer) -> Integer {
                    core::ops::$Imp::$method(self, &rhs)
                }
            }
        )+
    };
}

forward_value_binops!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

impl core::ops::AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        *self = &*self + rhs;
    }
}

impl core::ops::SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        *self = &*self - rhs;
    }
}

impl core::ops::MulAssign<&Integer> for Integer {
    fn mul_assign(&mut self, rhs: &Integer) {
        *self = &*self * rhs;
    }
}

impl core::ops::Neg for Integer {
    type Output = Integer;
    fn neg(mut self) -> Integer {
        if !self.is_zero() {
            self.sign = match self.sign {
                Sign::Positive => Sign::Negative,
                Sign::Negative => Sign::Positive,
            };
        }
        self
    }
}

impl core::ops::Neg for &Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        -self.clone()
    }
}

impl core::ops::Shl<usize> for Integer {
    type Output = Integer;
    fn shl(mut self, n: usize) -> Integer {
        self.shl_assign_bits(n);
        self
    }
}

impl core::ops::Shl<usize> for &Integer {
    type Output = Integer;
    fn shl(self, n: usize) -> Integer {
        self.clone() << n
    }
}

impl core::ops::Shr<usize> for Integer {
    type Output = Integer;
    /// Shifts the magnitude; the sign is unchanged (unless the result is
    /// zero, which is always positive).
    fn shr(mut self, n: usize) -> Integer {
        self.shr_assign_bits(n);
        self
    }
}

impl core::ops::Shr<usize> for &Integer {
    type Output = Integer;
    fn shr(self, n: usize) -> Integer {
        self.clone() >> n
    }
}

impl core::ops::ShlAssign<usize> for Integer {
    fn shl_assign(&mut self, n: usize) {
        self.shl_assign_bits(n);
    }
}

impl core::ops::ShrAssign<usize> for Integer {
    fn shr_assign(&mut self, n: usize) {
        self.shr_assign_bits(n);
    }
}

macro_rules! limb_binops {
    ($($Imp:ident :: $method:ident),+) => {
        $(
            impl core::ops::$Imp<Limb> for &Integer {
                type Output = Integer;
                fn $method(self, rhs: Limb) -> Integer {
                    core::ops::$Imp::$method(self, &Integer::from_limb(rhs))
                }
            }

            impl core::ops::$Imp<Limb> for Integer {
                type Output = Integer;
                fn $method(self, rhs: Limb) -> Integer {
                    core::ops::$Imp::$method(&self, &Integer::from_limb(rhs))
                }
            }
        )+
    };
}

limb_binops!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

impl From<u64> for Integer {
    fn from(v: u64) -> Self {
        let mut limbs = vec![0; (64 / LIMB_BITS).max(2)];
        for (i, limb) in limbs.iter_mut().enumerate().take(64 / LIMB_BITS) {
            *limb = (v >> (i * LIMB_BITS)) as Limb;
        }
        Self::from_limbs(Sign::Positive, limbs)
    }
}

impl From<u32> for Integer {
    fn from(v: u32) -> Self {
        Self::from_limb(v as Limb)
    }
}

impl From<i64> for Integer {
    fn from(v: i64) -> Self {
        let mut r = Self::from(v.unsigned_abs());
        if v < 0 {
            r.sign = Sign::Negative;
        }
        r
    }
}

impl From<i32> for Integer {
    fn from(v: i32) -> Self {
        Self::from(v as i64)
    }
}

impl core::str::FromStr for Integer {
    type Err = InvalidArgument;

    /// Parses an optional `-`, then decimal digits or `0x`-prefixed hex
    /// digits.
    fn from_str(s: &str) -> Result<Self, InvalidArgument> {
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (radix, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(rest) => (16u32, rest),
            None => (10u32, s),
        };
        if digits.is_empty() {
            return Err(InvalidArgument::invalid_encoding());
        }
        let mut r = Integer::zero();
        for c in digits.chars() {
            let d = c
                .to_digit(radix)
                .ok_or_else(InvalidArgument::invalid_encoding)?;
            r = r.scaled_up(radix as Limb, d as Limb);
        }
        if negative && !r.is_zero() {
            r.sign = Sign::Negative;
        }
        Ok(r)
    }
}

impl Integer {
    /// `|self| * scale + digit`, the string-parsing step.
    fn scaled_up(mut self, scale: Limb, digit: Limb) -> Integer {
        let n = self.limbs.len();
        let mut carry = 0;
        for limb in self.limbs.iter_mut() {
            let t = (*limb as DoubleLimb) * (scale as DoubleLimb) + (carry as DoubleLimb);
            *limb = t as Limb;
            carry = (t >> LIMB_BITS) as Limb;
        }
        if carry != 0 {
            self.limbs.resize(round_up_size(n + 1), 0);
            self.limbs[n] = carry;
        }
        let carry = limbs_increment(&mut self.limbs, digit);
        if carry != 0 {
            let n = self.limbs.len();
            self.limbs.resize(round_up_size(n + 1), 0);
            self.limbs[n] = carry;
        }
        self
    }
}

match_target_word_bits! {
    64 => {
        // The largest power of ten in a limb, for decimal conversion.
        const DECIMAL_CHUNK: Limb = 10_000_000_000_000_000_000;
        const DECIMAL_CHUNK_DIGITS: usize = 19;
    },
    32 => {
        const DECIMAL_CHUNK: Limb = 1_000_000_000;
        const DECIMAL_CHUNK_DIGITS: usize = 9;
    },
}

impl core::fmt::Display for Integer {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut chunks: Vec<Limb> = Vec::new();
        let mut v = self.abs();
        while !v.is_zero() {
            let (q, r) = v
                .div_rem_limb(DECIMAL_CHUNK)
                .unwrap_or_else(|_| unreachable!());
            chunks.push(r);
            v = q;
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        let mut s = String::new();
        for (i, chunk) in chunks.iter().rev().enumerate() {
            if i == 0 {
                s.push_str(&alloc::format!("{}", chunk));
            } else {
                s.push_str(&alloc::format!(
                    "{:0width$}",
                    chunk,
                    width = DECIMAL_CHUNK_DIGITS
                ));
            }
        }
        f.write_str(&s)
    }
}

impl core::fmt::LowerHex for Integer {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        let sig = self.word_count();
        for (i, limb) in self.limbs[..sig].iter().rev().enumerate() {
            if i == 0 {
                write!(f, "{:x}", limb)?;
            } else {
                write!(f, "{:0width$x}", limb, width = LIMB_BYTES * 2)?;
            }
        }
        Ok(())
    }
}

impl core::fmt::UpperHex for Integer {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        let sig = self.word_count();
        for (i, limb) in self.limbs[..sig].iter().rev().enumerate() {
            if i == 0 {
                write!(f, "{:X}", limb)?;
            } else {
                write!(f, "{:0width$X}", limb, width = LIMB_BYTES * 2)?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Integer {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::SystemRandom;
    use alloc::string::ToString;

    fn int(s: &str) -> Integer {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_str_and_display() {
        for s in [
            "0",
            "1",
            "-1",
            "323",
            "18446744073709551615",
            "18446744073709551616",
            "340282366920938463463374607431768211457",
            "-340282366920938463463374607431768211457",
        ] {
            assert_eq!(int(s).to_string(), s);
        }
        assert_eq!(int("0x10"), int("16"));
        assert_eq!(int("-0xff"), int("-255"));
        assert_eq!(int("-0"), int("0"));
        assert!("".parse::<Integer>().is_err());
        assert!("12a".parse::<Integer>().is_err());
    }

    #[test]
    fn test_known_products() {
        assert_eq!(int("17") * int("19"), int("323"));
        assert_eq!(
            int("18446744073709551616") * int("18446744073709551616"),
            int("340282366920938463463374607431768211456")
        );
        assert_eq!(int("-3") * int("7"), int("-21"));
        assert_eq!(int("-3") * int("-7"), int("21"));
        assert_eq!(int("0") * int("-7"), int("0"));
    }

    #[test]
    fn test_add_sub_round_trip() {
        let values = [
            int("0"),
            int("1"),
            int("-1"),
            int("18446744073709551615"),
            int("-340282366920938463463374607431768211457"),
            int("99999999999999999999999999999999"),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(&(a + b) - b, *a, "a={} b={}", a, b);
                assert_eq!(&(a - b) + b, *a, "a={} b={}", a, b);
            }
        }
    }

    #[test]
    fn test_division_sign_convention() {
        // The remainder always lands in [0, |divisor|).
        let cases = [
            ("7", "2", "3", "1"),
            ("-7", "2", "-4", "1"),
            ("7", "-2", "-3", "1"),
            ("-7", "-2", "4", "1"),
            ("-6", "2", "-3", "0"),
            ("6", "-2", "-3", "0"),
        ];
        for (a, b, q, r) in cases {
            let (a, b, q, r) = (int(a), int(b), int(q), int(r));
            let (got_q, got_r) = a.div_rem(&b).unwrap();
            assert_eq!(got_q, q, "{}/{}", a, b);
            assert_eq!(got_r, r, "{}%{}", a, b);
            assert_eq!(&(&got_q * &b) + &got_r, a);
        }
    }

    #[test]
    fn test_division_property_large() {
        let a = int("123456789012345678901234567890123456789012345678901234567890");
        let b = int("98765432109876543210987654321");
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&(&q * &b) + &r, a);
        assert!(r < b);
        assert!(!r.is_negative());

        // Exact multiple: a * b / b == a.
        let prod = &a * &b;
        assert_eq!(&prod / &b, a);
        assert_eq!(&prod % &b, Integer::zero());
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(int("7").div_rem(&Integer::zero()), Err(DivideByZero::new()));
        assert_eq!(int("7").mod_limb(0), Err(DivideByZero::new()));
        assert!(int("7").div_rem_limb(0).is_err());
    }

    #[test]
    fn test_div_rem_limb() {
        let (q, r) = int("1000000000000000000000000007").div_rem_limb(10).unwrap();
        assert_eq!(q, int("100000000000000000000000000"));
        assert_eq!(r, 7);

        let (q, r) = int("-7").div_rem_limb(2).unwrap();
        assert_eq!(q, int("-4"));
        assert_eq!(r, 1);

        assert_eq!(int("-7").mod_limb(2).unwrap(), 1);
    }

    #[test]
    fn test_squared() {
        for s in ["0", "1", "255", "18446744073709551615", "123456789123456789"] {
            let a = int(s);
            assert_eq!(a.squared(), &a * &a);
        }
    }

    #[test]
    fn test_shifts() {
        assert_eq!(int("1") << 200, Integer::power2(200).unwrap());
        assert_eq!(&int("5") << 3, int("40"));
        assert_eq!(int("40") >> 3, int("5"));
        assert_eq!(int("41") >> 3, int("5"));
        let mut v = int("1");
        v <<= 130;
        v >>= 2;
        assert_eq!(v, Integer::power2(128).unwrap());
        // The shift is a magnitude shift; the sign sticks.
        assert_eq!(int("-40") >> 3, int("-5"));
    }

    #[test]
    fn test_cmp() {
        assert!(int("-2") < int("1"));
        assert!(int("-2") < int("-1"));
        assert!(int("2") > int("1"));
        assert!(int("18446744073709551616") > int("18446744073709551615"));
        assert_eq!(int("0"), -Integer::zero());
    }

    #[test]
    fn test_decrement_through_zero() {
        let mut v = Integer::zero();
        v -= &Integer::one();
        assert_eq!(v, int("-1"));
        v += &Integer::two();
        assert_eq!(v, int("1"));
    }

    #[test]
    fn test_bit_and_byte_accessors() {
        let mut v = int("0");
        v.set_bit(200, true);
        assert_eq!(v, Integer::power2(200).unwrap());
        assert!(v.get_bit(200));
        assert!(!v.get_bit(199));
        v.set_bit(200, false);
        assert!(v.is_zero());

        let mut v = int("0");
        v.set_byte(3, 0xab);
        assert_eq!(v, int("0xab000000"));
        assert_eq!(v.get_byte(3), 0xab);
        assert_eq!(v.get_byte(2), 0);
        assert_eq!(v.get_byte(1000), 0);
    }

    #[test]
    fn test_counts() {
        assert_eq!(int("0").bit_count(), 0);
        assert_eq!(int("0").word_count(), 0);
        assert_eq!(int("1").bit_count(), 1);
        assert_eq!(int("255").byte_count(), 1);
        assert_eq!(int("256").byte_count(), 2);
        assert_eq!(Integer::power2(LIMB_BITS).unwrap().word_count(), 2);
    }

    #[test]
    fn test_capacity_growth_policy() {
        // Filling the capacity then adding reallocates to double capacity
        // with the new top limb set to 1.
        let a = Integer::from_limbs(Sign::Positive, vec![Limb::MAX, Limb::MAX]);
        let sum = &a + &Integer::one();
        assert_eq!(sum.limbs.len(), 4);
        assert_eq!(sum.limbs[2], 1);
        assert_eq!(sum.word_count(), 3);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let values = [
            int("0"),
            int("1"),
            int("127"),
            int("128"),
            int("255"),
            int("256"),
            int("-1"),
            int("-127"),
            int("-128"),
            int("-129"),
            int("123456789012345678901234567890"),
            int("-123456789012345678901234567890"),
        ];
        for v in &values {
            for extra in [0usize, 1, 7] {
                let n = v.min_encoded_size(Signedness::Signed) + extra;
                let mut buf = vec![0u8; n];
                v.encode(&mut buf, Signedness::Signed);
                let decoded =
                    Integer::from_be_bytes(untrusted::Input::from(&buf), Signedness::Signed)
                        .unwrap();
                assert_eq!(decoded, *v, "signed width {}", n);
            }
            if !v.is_negative() {
                let n = v.min_encoded_size(Signedness::Unsigned) + 2;
                let mut buf = vec![0u8; n];
                v.encode(&mut buf, Signedness::Unsigned);
                let decoded =
                    Integer::from_be_bytes(untrusted::Input::from(&buf), Signedness::Unsigned)
                        .unwrap();
                assert_eq!(decoded, *v, "unsigned width {}", n);
            }
        }
    }

    #[test]
    fn test_min_encoded_size() {
        assert_eq!(int("0").min_encoded_size(Signedness::Unsigned), 1);
        assert_eq!(int("0").min_encoded_size(Signedness::Signed), 1);
        assert_eq!(int("127").min_encoded_size(Signedness::Signed), 1);
        assert_eq!(int("128").min_encoded_size(Signedness::Unsigned), 1);
        assert_eq!(int("128").min_encoded_size(Signedness::Signed), 2);
        assert_eq!(int("-128").min_encoded_size(Signedness::Signed), 1);
        assert_eq!(int("-129").min_encoded_size(Signedness::Signed), 2);
        assert_eq!(int("65535").min_encoded_size(Signedness::Unsigned), 2);
    }

    #[test]
    fn test_signed_encoding_known_bytes() {
        let mut buf = [0u8; 2];
        int("-1").encode(&mut buf, Signedness::Signed);
        assert_eq!(buf, [0xff, 0xff]);
        int("-128").encode(&mut buf, Signedness::Signed);
        assert_eq!(buf, [0xff, 0x80]);
        int("127").encode(&mut buf, Signedness::Signed);
        assert_eq!(buf, [0x00, 0x7f]);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(int("12").gcd(&int("18")), int("6"));
        assert_eq!(int("-12").gcd(&int("18")), int("6"));
        assert_eq!(int("17").gcd(&int("19")), int("1"));
        assert_eq!(int("0").gcd(&int("5")), int("5"));
        assert_eq!(int("5").gcd(&int("0")), int("5"));
    }

    #[test]
    fn test_inverse_mod() {
        assert_eq!(int("3").inverse_mod(&int("11")).unwrap(), int("4"));
        assert_eq!(int("100").inverse_mod(&int("23")).unwrap(), int("3"));
        // No inverse when gcd != 1: the zero convention.
        assert_eq!(int("6").inverse_mod(&int("9")).unwrap(), Integer::zero());
        // Negative and oversized inputs are reduced first.
        let m = int("97");
        for a in ["-5", "5", "102", "-102"] {
            let a = int(a);
            let inv = a.inverse_mod(&m).unwrap();
            assert_eq!((&a * &inv).modulo(&m).unwrap(), Integer::one(), "a={}", a);
        }
        assert!(int("3").inverse_mod(&Integer::zero()).is_err());
    }

    #[test]
    fn test_inverse_mod_limb() {
        assert_eq!(int("3").inverse_mod_limb(11).unwrap(), 4);
        assert_eq!(int("6").inverse_mod_limb(9).unwrap(), 0);
        let m: Limb = 1000003;
        for a in 1..40 as Limb {
            let inv = Integer::from_limb(a).inverse_mod_limb(m).unwrap();
            assert_eq!((a as DoubleLimb * inv as DoubleLimb) % m as DoubleLimb, 1);
        }
        assert!(int("3").inverse_mod_limb(0).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Integer::from(0u64), Integer::zero());
        assert_eq!(Integer::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Integer::from(-2i64), int("-2"));
        assert_eq!(Integer::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(Integer::from(7u32), int("7"));
        assert_eq!(Integer::from(-7i32), int("-7"));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(alloc::format!("{:x}", int("0")), "0");
        assert_eq!(alloc::format!("{:x}", int("255")), "ff");
        assert_eq!(
            alloc::format!("{:x}", int("340282366920938463463374607431768211455")),
            "ffffffffffffffffffffffffffffffff"
        );
        assert_eq!(alloc::format!("{:x}", int("-16")), "-10");
    }

    #[test]
    fn test_random_bits() {
        let rng = SystemRandom::new();
        for bits in [0usize, 1, 7, 8, 9, 64, 65, 256] {
            let v = Integer::random_bits(&rng, BitLength::from_bits(bits)).unwrap();
            assert!(v.bit_count() <= bits);
            assert!(!v.is_negative());
        }
        // 256 random bits are never all zero in practice.
        let v = Integer::random_bits(&rng, BitLength::from_bits(256)).unwrap();
        assert!(!v.is_zero());
    }

    #[test]
    fn test_random_in_range() {
        let rng = SystemRandom::new();
        let min = int("1000");
        let max = int("1015");
        for _ in 0..64 {
            let v = Integer::random_in_range(&rng, &min, &max).unwrap();
            assert!(v >= min && v <= max);
        }
        // Degenerate single-point range.
        let v = Integer::random_in_range(&rng, &min, &min).unwrap();
        assert_eq!(v, min);
        // Inverted range is a malformed argument.
        assert!(matches!(
            Integer::random_in_range(&rng, &max, &min),
            Err(GenerationError::Invalid(_))
        ));
    }

    #[test]
    fn test_random_with_congruence() {
        let rng = SystemRandom::new();
        let min = int("100");
        let max = int("1000");
        let equiv = int("3");
        let modulus = int("7");
        for _ in 0..16 {
            let v = Integer::random_with(
                &rng,
                &min,
                &max,
                RandomNumberType::Any,
                &equiv,
                &modulus,
            )
            .unwrap();
            assert!(v >= min && v <= max);
            assert_eq!(v.modulo(&modulus).unwrap(), equiv);
        }
        // No admissible value: empty congruence intersection.
        assert!(matches!(
            Integer::random_with(
                &rng,
                &int("4"),
                &int("5"),
                RandomNumberType::Any,
                &int("3"),
                &int("7"),
            ),
            Err(GenerationError::NotFound(_))
        ));
        // equiv out of range.
        assert!(matches!(
            Integer::random_with(
                &rng,
                &min,
                &max,
                RandomNumberType::Any,
                &int("9"),
                &int("7"),
            ),
            Err(GenerationError::Invalid(_))
        ));
    }
}
