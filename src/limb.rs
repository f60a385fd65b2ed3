// Copyright 2016 David Judd.
// Copyright 2016-2025 Brian Smith.
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

//! Unsigned multi-precision integer arithmetic.
//!
//! Limbs ordered least-significant-limb to most-significant-limb. The bits
//! of the limbs use the native endianness.

use crate::{bits::BitLength, error::InvalidArgument};

match_target_word_bits! {
    64 => {
        /// The machine word the magnitude of an integer is built from.
        pub type Limb = u64;
        /// The width of [`Limb`] in bits.
        pub const LIMB_BITS: usize = 64;
    },
    32 => {
        /// The machine word the magnitude of an integer is built from.
        pub type Limb = u32;
        /// The width of [`Limb`] in bits.
        pub const LIMB_BITS: usize = 32;
    },
    _ => {
        compile_error!("unsupported target word size");
    }
}

/// The width of [`Limb`] in bytes.
pub const LIMB_BYTES: usize = LIMB_BITS / 8;

/// An all-zeros/all-ones mask for constant-time-shaped selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum LimbMask {
    True,
    False,
}

impl LimbMask {
    #[inline]
    pub fn limb(self) -> Limb {
        match self {
            LimbMask::True => Limb::MAX,
            LimbMask::False => 0,
        }
    }

    #[inline]
    pub fn from_bool(cond: bool) -> Self {
        if cond {
            LimbMask::True
        } else {
            LimbMask::False
        }
    }
}

/// The number of limbs needed to hold `bits` bits.
#[inline]
pub(crate) fn limbs_for_bits(bits: usize) -> usize {
    (bits + LIMB_BITS - 1) / LIMB_BITS
}

/// The number of significant limbs in `a`, i.e. `a`'s length with trailing
/// zero limbs stripped.
#[inline]
pub(crate) fn limbs_significant(a: &[Limb]) -> usize {
    let mut n = a.len();
    while n > 0 && a[n - 1] == 0 {
        n -= 1;
    }
    n
}

/// The minimal number of bits needed to represent the value of `a`.
pub(crate) fn limbs_minimal_bits(a: &[Limb]) -> BitLength {
    let n = limbs_significant(a);
    if n == 0 {
        return BitLength::from_bits(0);
    }
    let high_bits = LIMB_BITS - (a[n - 1].leading_zeros() as usize);
    BitLength::from_bits((n - 1) * LIMB_BITS + high_bits)
}

/// Parses `input` into `result`, padding `result` with zeros to its length.
///
/// The bytes are interpreted as a big-endian unsigned magnitude; an empty
/// input parses as zero. Fails if the value doesn't fit in `result`.
pub(crate) fn parse_big_endian_and_pad(
    input: untrusted::Input,
    result: &mut [Limb],
) -> Result<(), InvalidArgument> {
    // `bytes_in_current_limb` is the number of bytes in the current limb.
    // It will be `LIMB_BYTES` for all limbs except maybe the highest-order
    // limb.
    let mut bytes_in_current_limb = input.len() % LIMB_BYTES;
    if bytes_in_current_limb == 0 {
        bytes_in_current_limb = LIMB_BYTES;
    }

    let num_encoded_limbs = if input.is_empty() {
        0
    } else {
        (input.len() / LIMB_BYTES)
            + (if bytes_in_current_limb == LIMB_BYTES {
                0
            } else {
                1
            })
    };
    if num_encoded_limbs > result.len() {
        return Err(InvalidArgument::too_large());
    }

    result.fill(0);
    input.read_all(InvalidArgument::invalid_encoding(), |input| {
        for i in 0..num_encoded_limbs {
            let mut limb: Limb = 0;
            for _ in 0..bytes_in_current_limb {
                let b = input
                    .read_byte()
                    .map_err(|untrusted::EndOfInput| InvalidArgument::invalid_encoding())?;
                limb = (limb << 8) | (b as Limb);
            }
            result[num_encoded_limbs - i - 1] = limb;
            bytes_in_current_limb = LIMB_BYTES;
        }
        Ok(())
    })
}

/// Writes the value of `limbs` into `out` as a big-endian magnitude of
/// exactly `out.len()` bytes, zero-padding on the left.
///
/// High-order bytes that don't fit are silently dropped; use
/// [`limbs_minimal_bits`] first when truncation must be prevented.
pub(crate) fn big_endian_from_limbs(limbs: &[Limb], out: &mut [u8]) {
    for (i, byte) in out.iter_mut().rev().enumerate() {
        let limb = i / LIMB_BYTES;
        *byte = if limb < limbs.len() {
            (limbs[limb] >> ((i % LIMB_BYTES) * 8)) as u8
        } else {
            0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_big_endian() {
        let mut limbs = [0; 2];
        parse_big_endian_and_pad(untrusted::Input::from(&[0x01, 0x02]), &mut limbs).unwrap();
        assert_eq!(limbs, [0x0102, 0]);

        // An empty input parses as zero.
        let mut limbs = [1; 2];
        parse_big_endian_and_pad(untrusted::Input::from(&[]), &mut limbs).unwrap();
        assert_eq!(limbs, [0, 0]);

        // An input longer than `result` is rejected, even when the extra
        // bytes are leading zeros; callers size `result` from the input.
        let bytes = [0u8; 3 * LIMB_BYTES];
        let mut limbs = [0; 2];
        assert!(parse_big_endian_and_pad(untrusted::Input::from(&bytes), &mut limbs).is_err());
    }

    #[test]
    fn test_big_endian_from_limbs() {
        let limbs = [0x0102, 0];
        let mut out = [0xffu8; 2 * LIMB_BYTES];
        big_endian_from_limbs(&limbs, &mut out);
        let mut expected = [0u8; 2 * LIMB_BYTES];
        expected[2 * LIMB_BYTES - 2] = 0x01;
        expected[2 * LIMB_BYTES - 1] = 0x02;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_minimal_bits() {
        assert_eq!(limbs_minimal_bits(&[]).as_bits(), 0);
        assert_eq!(limbs_minimal_bits(&[0, 0]).as_bits(), 0);
        assert_eq!(limbs_minimal_bits(&[1, 0]).as_bits(), 1);
        assert_eq!(limbs_minimal_bits(&[0xff, 0]).as_bits(), 8);
        assert_eq!(limbs_minimal_bits(&[0, 1]).as_bits(), LIMB_BITS + 1);
    }
}
