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

//! Number theory: primality, prime search, and the modular toolbox around
//! them.
//!
//! [`is_prime`] is exact below `2^15` (table lookup) and below `2^30`-ish
//! (trial division by the whole table); above that it is the BPSW-style
//! composite of trial division, a strong base-3 probable-prime test, and a
//! strong Lucas probable-prime test—no known counterexample, but not a
//! proof. [`rabin_miller_test`] adds independently-random-base confidence
//! on top for callers that need a tunable error bound.
//!
//! Prime *search* never promises success: [`first_prime`] reports when a
//! range holds no prime, and [`Integer::random_with`] gives up with an
//! error after its bounded retry budget.

use crate::{
    arithmetic::dword::DoubleLimb,
    error::InvalidArgument,
    integer::{GenerationError, Integer},
    limb::Limb,
    modular::{ModularArithmetic, MontgomeryRepresentation},
    polyfill::u64_from_usize,
    rand,
};
use alloc::vec::Vec;

mod small_primes;
use small_primes::SMALL_PRIMES;

/// The largest prime in the lookup table.
pub const LAST_SMALL_PRIME: u16 = 32749;

/// `a * b mod c`.
pub fn a_times_b_mod_c(a: &Integer, b: &Integer, c: &Integer) -> Integer {
    (a * b).modulo(c).unwrap_or_else(|_| panic!("zero modulus"))
}

/// `a^b mod c` for `b >= 0`, through a Montgomery context when `c` is odd.
pub fn a_exp_b_mod_c(a: &Integer, b: &Integer, c: &Integer) -> Integer {
    if c.is_odd() {
        let mut mr =
            MontgomeryRepresentation::new(c.clone()).unwrap_or_else(|_| panic!("zero modulus"));
        mr.exponentiate(a, b)
    } else {
        let ma = ModularArithmetic::new(c.clone()).unwrap_or_else(|_| panic!("zero modulus"));
        ma.exponentiate(a, b)
    }
}

/// Whether any prime `<= bound` divides `n` (without being `n` itself).
pub fn trial_division(n: &Integer, bound: u16) -> bool {
    for &p in SMALL_PRIMES.iter() {
        if p > bound {
            break;
        }
        let p = p as Limb;
        if n.mod_limb(p).unwrap_or_else(|_| unreachable!()) == 0 {
            return *n != Integer::from_limb(p);
        }
    }
    false
}

fn small_prime_table_contains(v: u16) -> bool {
    SMALL_PRIMES.binary_search(&v).is_ok()
}

/// `base^(n-1) == 1 (mod n)`, Fermat's probable-prime filter.
pub fn is_fermat_probable_prime(n: &Integer, base: &Integer) -> bool {
    debug_assert!(n.is_odd() && *n > Integer::one());
    let n_minus_1 = n - &Integer::one();
    a_exp_b_mod_c(base, &n_minus_1, n) == Integer::one()
}

/// The Miller–Rabin strong probable-prime test for a single base.
pub fn is_strong_probable_prime(n: &Integer, base: &Integer) -> bool {
    debug_assert!(n.is_odd() && *n > Integer::two());
    let n_minus_1 = n - &Integer::one();
    let s = trailing_zeros(&n_minus_1);
    let m = &n_minus_1 >> s;

    let mut x = a_exp_b_mod_c(base, &m, n);
    if x == Integer::one() || x == n_minus_1 {
        return true;
    }
    let ma = ModularArithmetic::new(n.clone()).unwrap_or_else(|_| unreachable!());
    for _ in 1..s {
        x = ma.square(&x);
        if x == n_minus_1 {
            return true;
        }
        if x == Integer::one() {
            return false;
        }
    }
    false
}

/// Miller–Rabin with `rounds` independent random bases from `[2, n-2]`.
///
/// A composite survives each round with probability at most 1/4, so the
/// false-positive bound is `4^-rounds`.
pub fn rabin_miller_test(
    rng: &dyn rand::SecureRandom,
    n: &Integer,
    rounds: u32,
) -> Result<bool, InvalidArgument> {
    if *n <= Integer::one() {
        return Ok(false);
    }
    if n.is_even() {
        return Ok(*n == Integer::two());
    }
    if *n == Integer::from_limb(3) {
        return Ok(true);
    }
    let min = Integer::two();
    let max = n - &Integer::two();
    for _ in 0..rounds {
        let base = Integer::random_in_range(rng, &min, &max)
            .map_err(|_| InvalidArgument::rng_failed())?;
        if !is_strong_probable_prime(n, &base) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// The Lucas probable-prime test: `V_{n+1}(b, 1) == 2 (mod n)` for the
/// first `b` whose discriminant `b^2 - 4` is a non-residue.
pub fn is_lucas_probable_prime(n: &Integer) -> bool {
    if *n <= Integer::one() {
        return false;
    }
    if n.is_even() {
        return *n == Integer::two();
    }
    let b = match lucas_parameter(n) {
        Ok(b) => b,
        Err(answer) => return answer,
    };
    let n_plus_1 = n + &Integer::one();
    lucas(&n_plus_1, &Integer::from_limb(b), n) == Integer::two().modulo(n).unwrap_or_else(|_| unreachable!())
}

/// The strong Lucas probable-prime test; combined with
/// [`is_strong_probable_prime`] base 3, this is the BPSW-style filter with
/// no known composite passing both.
pub fn is_strong_lucas_probable_prime(n: &Integer) -> bool {
    if *n <= Integer::one() {
        return false;
    }
    if n.is_even() {
        return *n == Integer::two();
    }
    let b = match lucas_parameter(n) {
        Ok(b) => b,
        Err(answer) => return answer,
    };

    // n+1 = d * 2^a with d odd; a prime divides U_d or one of the
    // V_{d*2^r}, because U_{n+1} = U_d * V_d * V_{2d} * ... * V_{(n+1)/2}.
    let n_plus_1 = n + &Integer::one();
    let a = trailing_zeros(&n_plus_1);
    let d = &n_plus_1 >> a;

    let mut v = lucas(&d, &Integer::from_limb(b), n);
    // V_d == +-2 signals U_d == 0 via V^2 - D*U^2 == 4.
    if v == Integer::two() || v == n - &Integer::two() {
        return true;
    }
    let ma = ModularArithmetic::new(n.clone()).unwrap_or_else(|_| unreachable!());
    let two = Integer::two().modulo(n).unwrap_or_else(|_| unreachable!());
    for _ in 0..a {
        if v.is_zero() {
            return true;
        }
        v = ma.subtract(&ma.square(&v), &two);
    }
    false
}

/// Finds the smallest `b >= 3` with `jacobi(b^2 - 4, n) == -1`.
///
/// `Err(answer)` short-circuits the caller: a zero Jacobi symbol exposes a
/// shared factor, and a perfect square can never produce -1, so it is
/// detected and rejected rather than looped on.
fn lucas_parameter(n: &Integer) -> Result<Limb, bool> {
    let mut b: Limb = 3;
    loop {
        let d = Integer::from_limb(b * b - 4);
        match jacobi(&d, n) {
            -1 => return Ok(b),
            0 => return Err(*n == Integer::from_limb(b + 2)),
            _ => {
                b += 1;
                if b == 64 {
                    let root = integer_sqrt(n);
                    if root.squared() == *n {
                        return Err(false);
                    }
                }
            }
        }
    }
}

/// Primality: exact for `n` below the squared table bound, BPSW-style
/// probabilistic above it. Never panics, never loops forever; `n <= 1` is
/// composite by definition.
pub fn is_prime(n: &Integer) -> bool {
    if n.is_negative() || *n <= Integer::one() {
        return false;
    }
    let last_small = Integer::from_limb(LAST_SMALL_PRIME as Limb);
    if *n <= last_small {
        // Exactly one limb; the table decides.
        return small_prime_table_contains(n.limbs()[0] as u16);
    }
    if *n <= &last_small * &last_small {
        // A composite this small has a factor in the table.
        return !trial_division(n, LAST_SMALL_PRIME);
    }
    !trial_division(n, LAST_SMALL_PRIME)
        && is_strong_probable_prime(n, &Integer::from_limb(3))
        && is_strong_lucas_probable_prime(n)
}

/// [`is_prime`] plus `rounds` of random-base Miller–Rabin for callers that
/// want an explicit error bound on top of BPSW.
pub fn verify_prime(
    rng: &dyn rand::SecureRandom,
    n: &Integer,
    rounds: u32,
) -> Result<bool, InvalidArgument> {
    Ok(is_prime(n) && (rounds == 0 || rabin_miller_test(rng, n, rounds)?))
}

/// The Jacobi symbol `(a/b)` for odd positive `b`: 0, 1, or -1.
pub fn jacobi(a: &Integer, b: &Integer) -> i32 {
    assert!(b.is_odd() && !b.is_negative());
    let mut a = a.modulo(b).unwrap_or_else(|_| unreachable!());
    let mut b = b.clone();
    let mut result = 1;
    while !a.is_zero() {
        while a.is_even() {
            a >>= 1;
            let r = b.mod_limb(8).unwrap_or_else(|_| unreachable!());
            if r == 3 || r == 5 {
                result = -result;
            }
        }
        core::mem::swap(&mut a, &mut b);
        if a.mod_limb(4).unwrap_or_else(|_| unreachable!()) == 3
            && b.mod_limb(4).unwrap_or_else(|_| unreachable!()) == 3
        {
            result = -result;
        }
        a = a.modulo(&b).unwrap_or_else(|_| unreachable!());
    }
    if b == Integer::one() {
        result
    } else {
        0
    }
}

/// `V_e(p, 1) mod n`, the Lucas sequence evaluated by a binary ladder
/// over the pair `(V_k, V_{k+1})`.
pub fn lucas(e: &Integer, p: &Integer, n: &Integer) -> Integer {
    let ma = ModularArithmetic::new(n.clone()).unwrap_or_else(|_| panic!("zero modulus"));
    let two = ma.reduce(&Integer::two());
    if e.is_zero() {
        return two;
    }
    let p = ma.reduce(p);
    let mut v0 = two.clone(); // V_0
    let mut v1 = p.clone(); // V_1
    for i in (0..e.bit_count()).rev() {
        if e.get_bit(i) {
            v0 = ma.subtract(&ma.multiply(&v0, &v1), &p);
            v1 = ma.subtract(&ma.square(&v1), &two);
        } else {
            v1 = ma.subtract(&ma.multiply(&v0, &v1), &p);
            v0 = ma.subtract(&ma.square(&v0), &two);
        }
    }
    v0
}

/// A square root of `a` mod an odd prime `p`, when one exists.
///
/// Returns `r` with `r*r == a (mod p)`; the other root is `p - r`. When
/// `a` is a non-residue the result is meaningless—check with [`jacobi`]
/// first if in doubt.
pub fn modular_square_root(a: &Integer, p: &Integer) -> Integer {
    let a = a.modulo(p).unwrap_or_else(|_| panic!("zero modulus"));
    if a.is_zero() {
        return a;
    }
    if p.mod_limb(4).unwrap_or_else(|_| unreachable!()) == 3 {
        let e = &(p + &Integer::one()) >> 2;
        return a_exp_b_mod_c(&a, &e, p);
    }

    // Tonelli-Shanks. p-1 = q * 2^s with q odd.
    let p_minus_1 = p - &Integer::one();
    let s = trailing_zeros(&p_minus_1);
    let q = &p_minus_1 >> s;

    // Any non-residue works as the generator of the 2-Sylow subgroup.
    let mut z = Integer::two();
    while jacobi(&z, p) != -1 {
        z += &Integer::one();
    }

    let ma = ModularArithmetic::new(p.clone()).unwrap_or_else(|_| unreachable!());
    let mut m = s;
    let mut c = a_exp_b_mod_c(&z, &q, p);
    let mut t = a_exp_b_mod_c(&a, &q, p);
    let mut r = a_exp_b_mod_c(&a, &(&(&q + &Integer::one()) >> 1), p);

    while t != Integer::one() {
        let mut i = 0;
        let mut t2i = t.clone();
        while t2i != Integer::one() {
            t2i = ma.square(&t2i);
            i += 1;
            if i >= m {
                // Only reachable for a non-residue input.
                return Integer::zero();
            }
        }
        let mut b = c;
        for _ in 0..m - i - 1 {
            b = ma.square(&b);
        }
        m = i;
        c = ma.square(&b);
        t = ma.multiply(&t, &c);
        r = ma.multiply(&r, &b);
    }
    r
}

/// Chinese Remainder combination: the unique value in `[0, p*q)` congruent
/// to `xp` mod `p` and `xq` mod `q`, given `u = p^-1 mod q`.
pub fn crt(xp: &Integer, p: &Integer, xq: &Integer, q: &Integer, u: &Integer) -> Integer {
    let t = a_times_b_mod_c(&(xq - xp), u, q);
    xp + &(p * &t)
}

fn trailing_zeros(n: &Integer) -> usize {
    debug_assert!(!n.is_zero());
    let mut i = 0;
    while !n.get_bit(i) {
        i += 1;
    }
    i
}

/// Floor square root by Newton's iteration.
fn integer_sqrt(n: &Integer) -> Integer {
    if n.is_zero() {
        return Integer::zero();
    }
    let mut x = Integer::power2(n.bit_count() / 2 + 1).unwrap_or_else(|_| unreachable!());
    loop {
        let y = &(&x + &(n / &x)) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// The maximum number of candidates a sieve window covers before being
/// re-derived further along the progression.
const MAX_SIEVE_SIZE: usize = 16384;

/// A transient sieve over the arithmetic progression `first + k*step`.
///
/// Composite positions are struck by computing, for each table prime, the
/// first window index the prime divides (a modular-inverse stride) and
/// marking every `p`-th position from there. With `delta` of ±1 the sieve
/// additionally strikes positions whose `q = (candidate - delta) / 2` is
/// composite, the shape wanted for safe-prime-style generation (requires
/// an even `step` and candidates congruent to `delta` mod 2).
pub struct PrimeSieve {
    first: Integer,
    last: Integer,
    step: Integer,
    delta: i8,
    next: usize,
    sieve: Vec<bool>,
}

impl PrimeSieve {
    /// Builds the sieve for `first + k*step` in `[first, last]`.
    pub fn new(
        first: Integer,
        last: Integer,
        step: Integer,
        delta: i8,
    ) -> Result<Self, InvalidArgument> {
        if step.is_zero() || step.is_negative() {
            return Err(InvalidArgument::zero_modulus());
        }
        if delta != 0 && (!step.is_even() || first.is_even() != (delta % 2 == 0)) {
            // The halved progression must stay integral.
            return Err(InvalidArgument::out_of_range_equivalence());
        }
        let mut sieve = Self {
            first,
            last,
            step,
            delta,
            next: 0,
            sieve: Vec::new(),
        };
        sieve.do_sieve();
        Ok(sieve)
    }

    /// Writes the next unstruck candidate into `c`; false when the
    /// progression is exhausted past `last`.
    pub fn next_candidate(&mut self, c: &mut Integer) -> bool {
        loop {
            if let Some(offset) = self.sieve[self.next..].iter().position(|&m| !m) {
                let i = self.next + offset;
                *c = &self.first + &(&self.step * Integer::from(u64_from_usize(i)));
                self.next = i + 1;
                return true;
            }
            // Window exhausted; re-derive the next one.
            let window = &self.step * Integer::from(u64_from_usize(self.sieve.len()));
            self.first = &self.first + &window;
            if self.first > self.last {
                return false;
            }
            self.next = 0;
            self.do_sieve();
        }
    }

    fn do_sieve(&mut self) {
        let size = if self.first > self.last {
            0
        } else {
            let span = &(&self.last - &self.first) / &self.step;
            if span >= Integer::from(u64_from_usize(MAX_SIEVE_SIZE)) {
                MAX_SIEVE_SIZE
            } else {
                // span < MAX_SIEVE_SIZE fits a single limb.
                (span.limbs()[0] as usize) + 1
            }
        };
        self.sieve.clear();
        self.sieve.resize(size, false);
        if size == 0 {
            return;
        }
        for &p in SMALL_PRIMES.iter() {
            let p = p as Limb;
            sieve_single(&mut self.sieve, p, &self.first, &self.step);
            if self.delta != 0 {
                // Also require q = (candidate - delta)/2 to survive.
                let shifted_first =
                    &(&self.first - &Integer::from(self.delta as i64)) >> 1;
                let half_step = &self.step >> 1;
                sieve_single(&mut self.sieve, p, &shifted_first, &half_step);
            }
        }
    }
}

/// Strikes every window index whose progression value `first + i*step` is
/// a proper multiple of `p`: the first hit is `-first * step^-1 mod p`,
/// then every `p`-th index after it. A position whose value is `p` itself
/// is left unstruck.
fn sieve_single(sieve: &mut [bool], p: Limb, first: &Integer, step: &Integer) {
    let p_int = Integer::from_limb(p);
    let step_mod = step.mod_limb(p).unwrap_or_else(|_| unreachable!());
    let first_mod = first.mod_limb(p).unwrap_or_else(|_| unreachable!());
    // Marking can hit the prime itself only when the window starts at or
    // below it; compare values individually only in that rare case.
    let may_contain_p = *first <= p_int;
    let keep = |i: usize| may_contain_p && &(first + &(step * Integer::from(u64_from_usize(i)))) == &p_int;

    if step_mod == 0 {
        if first_mod == 0 {
            for i in 0..sieve.len() {
                if !keep(i) {
                    sieve[i] = true;
                }
            }
        }
        return;
    }

    let step_inv = Integer::from_limb(step_mod)
        .inverse_mod_limb(p)
        .unwrap_or_else(|_| unreachable!());
    debug_assert!(step_inv != 0);
    let j = (((p - first_mod) % p) as DoubleLimb * step_inv as DoubleLimb % p as DoubleLimb)
        as usize;
    let mut i = j;
    while i < sieve.len() {
        if !keep(i) {
            sieve[i] = true;
        }
        i += p as usize;
    }
}

/// The first prime `>= start`, at most `max`, congruent to `equiv` mod
/// `modulus`; `Ok(None)` when the range holds none. Candidates pass a
/// fast Fermat base-2 pretest before the full [`is_prime`] is spent on
/// them.
pub fn first_prime(
    start: &Integer,
    max: &Integer,
    equiv: &Integer,
    modulus: &Integer,
) -> Result<Option<Integer>, InvalidArgument> {
    if modulus.is_zero() || modulus.is_negative() {
        return Err(InvalidArgument::zero_modulus());
    }
    if equiv.is_negative() || *equiv >= *modulus {
        return Err(InvalidArgument::out_of_range_equivalence());
    }
    let mut p = start.clone();
    if p < Integer::two() {
        p = Integer::two();
    }
    if p > *max {
        return Ok(None);
    }

    // The small region is answered straight from the table.
    let last_small = Integer::from_limb(LAST_SMALL_PRIME as Limb);
    if p <= last_small {
        for &candidate in SMALL_PRIMES.iter() {
            let candidate = Integer::from_limb(candidate as Limb);
            if candidate < p {
                continue;
            }
            if candidate > *max {
                return Ok(None);
            }
            if candidate.modulo(modulus).unwrap_or_else(|_| unreachable!()) == *equiv {
                return Ok(Some(candidate));
            }
        }
        p = &last_small + &Integer::one();
        if p > *max {
            return Ok(None);
        }
    }

    // Align p upward onto the progression.
    let p_mod = p.modulo(modulus).unwrap_or_else(|_| unreachable!());
    if p_mod != *equiv {
        let adjust = (&(equiv + modulus) - &p_mod)
            .modulo(modulus)
            .unwrap_or_else(|_| unreachable!());
        p = &p + &adjust;
        if p > *max {
            return Ok(None);
        }
    }

    let mut sieve = PrimeSieve::new(p.clone(), max.clone(), modulus.clone(), 0)?;
    while sieve.next_candidate(&mut p) {
        // Everything here is past the table, so candidates are odd
        // whenever they can be prime at all.
        if p.is_odd()
            && is_fermat_probable_prime(&p, &Integer::two())
            && is_prime(&p)
        {
            return Ok(Some(p));
        }
    }
    Ok(None)
}

/// Searches for a random prime in `[min, max]` congruent to `equiv` mod
/// `modulus`: bounded sieved probes from random starting points, then one
/// deterministic full-range sweep before giving up.
pub(crate) fn random_prime(
    rng: &dyn rand::SecureRandom,
    min: &Integer,
    max: &Integer,
    equiv: &Integer,
    modulus: &Integer,
) -> Result<Integer, GenerationError> {
    let min = if *min < Integer::two() {
        Integer::two()
    } else {
        min.clone()
    };
    if min > *max {
        return Err(crate::error::RandomNumberNotFound::new().into());
    }

    // A window several times the expected prime gap makes a miss rare;
    // sixteen independent windows make it negligible.
    let interval = 4 * max.bit_count() + 64;
    let window = modulus * Integer::from(u64_from_usize(interval));

    for _ in 0..16 {
        let start = Integer::random_in_range(rng, &min, max)?;
        let end = {
            let candidate_end = &start + &window;
            if candidate_end > *max {
                max.clone()
            } else {
                candidate_end
            }
        };
        if let Some(p) = first_prime(&start, &end, equiv, modulus)? {
            return Ok(p);
        }
    }

    // The random probes all missed; decide definitively.
    match first_prime(&min, max, equiv, modulus)? {
        Some(p) => Ok(p),
        None => Err(crate::error::RandomNumberNotFound::new().into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::RandomNumberType;
    use crate::rand::SystemRandom;

    fn int(s: &str) -> Integer {
        s.parse().unwrap()
    }

    #[test]
    fn test_is_prime_small_values() {
        assert!(!is_prime(&int("-7")));
        assert!(!is_prime(&int("0")));
        assert!(!is_prime(&int("1")));
        assert!(is_prime(&int("2")));
        assert!(is_prime(&int("3")));
        assert!(!is_prime(&int("4")));
        assert!(is_prime(&int("32749")));
        assert!(!is_prime(&int("32751")));
        // Above the table, below its square: trial division decides.
        assert!(is_prime(&int("32771")));
        assert!(!is_prime(&int("32773"))); // 13 * 2521
        assert!(is_prime(&int("1000003")));
        // Above the table's square, with a small factor.
        assert!(!is_prime(&int("1000033001089"))); // 103 * 9709058263
    }

    #[test]
    fn test_is_prime_below_10000() {
        // Exhaustive against a locally computed sieve.
        let mut composite = [false; 10000];
        let mut i = 2;
        while i * i < 10000 {
            if !composite[i] {
                let mut j = i * i;
                while j < 10000 {
                    composite[j] = true;
                    j += i;
                }
            }
            i += 1;
        }
        for n in 0..10000usize {
            let expected = n >= 2 && !composite[n];
            assert_eq!(
                is_prime(&Integer::from(n as u64)),
                expected,
                "n={}",
                n
            );
        }
    }

    #[test]
    fn test_is_prime_large() {
        let p256 = int(
            "16157387885063800092468972531095442600227637936690303362357377535130907802167",
        );
        let q256 = int(
            "68374361576449959379811878238702970795767227995234058958640265755013581201943",
        );
        assert!(is_prime(&p256));
        assert!(is_prime(&q256));
        // Their product is a hard composite: no small factors.
        assert!(!is_prime(&(&p256 * &q256)));
        // A safe prime and its Sophie Germain partner.
        let q = int("198897516834780434497265999673403897979");
        let p = int("397795033669560868994531999346807795959");
        assert!(is_prime(&q));
        assert!(is_prime(&p));
    }

    #[test]
    fn test_probable_prime_components() {
        let p = int("1000000000039");
        assert!(is_fermat_probable_prime(&p, &Integer::two()));
        assert!(is_strong_probable_prime(&p, &Integer::from_limb(3)));
        assert!(is_lucas_probable_prime(&p));
        assert!(is_strong_lucas_probable_prime(&p));

        // 341 = 11*31 is a Fermat base-2 pseudoprime; the strong test
        // catches it.
        let c = int("341");
        assert!(is_fermat_probable_prime(&c, &Integer::two()));
        assert!(!is_strong_probable_prime(&c, &Integer::two()));

        let big_composite = int("1000000000039") * int("1000000000061");
        assert!(!is_strong_probable_prime(&big_composite, &Integer::from_limb(3)));
        assert!(!is_strong_lucas_probable_prime(&big_composite));
        // Perfect squares can never satisfy the Lucas parameter search;
        // the square guard rejects them.
        assert!(!is_strong_lucas_probable_prime(&int("1000000000039").squared()));
    }

    #[test]
    fn test_rabin_miller() {
        let rng = SystemRandom::new();
        assert!(rabin_miller_test(&rng, &int("1000000000039"), 10).unwrap());
        assert!(!rabin_miller_test(&rng, &int("1000000000041"), 10).unwrap());
        assert!(!rabin_miller_test(&rng, &int("1"), 10).unwrap());
        assert!(rabin_miller_test(&rng, &int("2"), 10).unwrap());
        assert!(rabin_miller_test(&rng, &int("5"), 10).unwrap());
        assert!(verify_prime(&rng, &int("1000003"), 4).unwrap());
        assert!(!verify_prime(&rng, &int("1000033001089"), 4).unwrap());
    }

    #[test]
    fn test_jacobi() {
        let cases: &[(&str, &str, i32)] = &[
            ("0", "3", 0),
            ("1", "3", 1),
            ("2", "3", -1),
            ("5", "9", 1),
            ("2", "15", 1),
            ("1001", "9907", -1),
            ("219", "383", 1),
            ("-1", "7", -1),
            ("3", "7", -1),
            ("7", "15", -1),
            ("30", "59", -1),
            ("1234567", "7654321", -1),
        ];
        for &(a, b, expected) in cases {
            assert_eq!(jacobi(&int(a), &int(b)), expected, "({}/{})", a, b);
        }
        // Quadratic residues always give 1 for prime moduli.
        let p = int("1000003");
        for a in ["4", "9", "16", "1000002000001"] {
            assert_eq!(jacobi(&int(a), &p), 1, "residue {}", a);
        }
    }

    #[test]
    fn test_lucas_sequence() {
        // V_e(3, 1): 2, 3, 7, 18, 47, 123, 322, ...
        assert_eq!(lucas(&int("0"), &int("3"), &int("1000000000")), int("2"));
        assert_eq!(lucas(&int("1"), &int("3"), &int("1000000000")), int("3"));
        assert_eq!(lucas(&int("6"), &int("3"), &int("1000000000")), int("322"));
        assert_eq!(lucas(&int("10"), &int("3"), &int("1000")), int("127"));
        assert_eq!(lucas(&int("1"), &int("5"), &int("97")), int("5"));
        assert_eq!(
            lucas(&int("123456789"), &int("7"), &int("1000003")),
            int("856024")
        );
    }

    #[test]
    fn test_modular_square_root() {
        // p == 3 (mod 4): the exponentiation shortcut.
        let p = int("1000003");
        let r = modular_square_root(&int("4"), &p);
        assert!(r == int("2") || r == &p - &int("2"));

        // p == 1 (mod 4): full Tonelli-Shanks.
        let p = int("1000033");
        let r = modular_square_root(&int("2"), &p);
        assert_eq!((&r * &r).modulo(&p).unwrap(), int("2"));
        assert!(r == int("95913") || r == &p - &int("95913"));

        let p = int("1208925819614629174706189");
        let a = int("1234567891");
        let r = modular_square_root(&a, &p);
        assert_eq!((&r * &r).modulo(&p).unwrap(), a);

        assert_eq!(modular_square_root(&Integer::zero(), &p), Integer::zero());
    }

    #[test]
    fn test_crt() {
        let p = int("10007");
        let q = int("10009");
        let u = p.inverse_mod(&q).unwrap();
        let xp = int("1234");
        let xq = int("5678");
        let x = crt(&xp, &p, &xq, &q, &u);
        assert_eq!(x.modulo(&p).unwrap(), xp);
        assert_eq!(x.modulo(&q).unwrap(), xq);
        assert!(x < &p * &q);
    }

    #[test]
    fn test_a_exp_b_mod_c_dispatch() {
        // Odd modulus goes through Montgomery, even through the generic
        // ring; both must agree with small known values.
        assert_eq!(a_exp_b_mod_c(&int("2"), &int("10"), &int("1001")), int("23"));
        assert_eq!(a_exp_b_mod_c(&int("2"), &int("10"), &int("1000")), int("24"));
        assert_eq!(
            a_times_b_mod_c(&int("17"), &int("19"), &int("100")),
            int("23")
        );
    }

    #[test]
    fn test_first_prime() {
        // Deterministic next-prime searches.
        let one = Integer::one();
        let p = first_prime(&int("1000000000000"), &int("1000000000100"), &Integer::zero(), &one)
            .unwrap()
            .unwrap();
        assert_eq!(p, int("1000000000039"));

        // Congruence-constrained: first prime >= 10^12 that is 1 mod 4.
        let p = first_prime(&int("1000000000000"), &int("1000000000100"), &int("1"), &int("4"))
            .unwrap()
            .unwrap();
        assert_eq!(p, int("1000000000061"));

        // A small range: the table path.
        let p = first_prime(&int("10"), &int("30"), &Integer::zero(), &one)
            .unwrap()
            .unwrap();
        assert_eq!(p, int("11"));

        // A range with no primes at all.
        assert_eq!(
            first_prime(&int("114"), &int("126"), &Integer::zero(), &one).unwrap(),
            None
        );

        // Invalid congruence parameters are rejected up front.
        assert!(first_prime(&int("10"), &int("30"), &int("5"), &int("4")).is_err());
    }

    #[test]
    fn test_prime_sieve_plain() {
        // Sieve [2, 200] with step 1 and collect survivors that are real
        // primes; the sieve itself strikes only proper multiples, so every
        // prime must survive.
        let mut sieve =
            PrimeSieve::new(int("2"), int("200"), Integer::one(), 0).unwrap();
        let mut survivors = Vec::new();
        let mut c = Integer::zero();
        while sieve.next_candidate(&mut c) {
            survivors.push(c.clone());
        }
        for p in ["2", "3", "5", "7", "97", "199"] {
            assert!(survivors.contains(&int(p)), "{} struck", p);
        }
        for composite in ["4", "100", "200", "121"] {
            assert!(!survivors.contains(&int(composite)), "{} kept", composite);
        }
    }

    #[test]
    fn test_prime_sieve_dual() {
        // Candidates c == 3 (mod 4) whose q = (c-1)/2 must also survive:
        // the safe-prime shape. 2q+1 with both prime in range: c=7 (q=3),
        // c=11 (q=5), c=23 (q=11), c=47 (q=23).
        let mut sieve = PrimeSieve::new(int("7"), int("60"), int("4"), 1).unwrap();
        let mut survivors = Vec::new();
        let mut c = Integer::zero();
        while sieve.next_candidate(&mut c) {
            survivors.push(c.clone());
        }
        for good in ["7", "11", "23", "47"] {
            assert!(survivors.contains(&int(good)), "{} struck", good);
        }
        // 15 == 3 (mod 4) but is composite; 19 is prime but q = 9 is not.
        assert!(!survivors.contains(&int("15")));
        assert!(!survivors.contains(&int("19")));
    }

    #[test]
    fn test_random_prime_generation() {
        let rng = SystemRandom::new();
        let min = Integer::power2(127).unwrap();
        let max = Integer::power2(128).unwrap();
        let p = Integer::random_with(
            &rng,
            &min,
            &max,
            RandomNumberType::Prime,
            &Integer::zero(),
            &Integer::one(),
        )
        .unwrap();
        assert!(p >= min && p <= max);
        assert!(is_prime(&p));

        // Congruence-constrained prime: p == 3 (mod 4).
        let p = Integer::random_with(
            &rng,
            &int("1000"),
            &int("100000"),
            RandomNumberType::Prime,
            &int("3"),
            &int("4"),
        )
        .unwrap();
        assert!(is_prime(&p));
        assert_eq!(p.mod_limb(4).unwrap(), 3);

        // An exhausted search reports failure instead of spinning: no
        // prime in [114, 126].
        assert!(matches!(
            Integer::random_with(
                &rng,
                &int("114"),
                &int("126"),
                RandomNumberType::Prime,
                &Integer::zero(),
                &Integer::one(),
            ),
            Err(GenerationError::NotFound(_))
        ));
    }

    #[test]
    fn test_trial_division() {
        assert!(trial_division(&int("1000033001089"), LAST_SMALL_PRIME));
        assert!(!trial_division(&int("1000000000039"), LAST_SMALL_PRIME));
        // A table prime is not "divisible" by itself.
        assert!(!trial_division(&int("32749"), LAST_SMALL_PRIME));
        assert!(trial_division(&int("32749").squared(), LAST_SMALL_PRIME));
    }
}
