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

//! Bit lengths.

use crate::{error::InvalidArgument, polyfill::usize_from_u32};

/// The length of something, in bits.
///
/// Lengths measured in bits, where all arithmetic is guaranteed not to
/// overflow.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct BitLength(usize);

impl BitLength {
    /// Constructs a `BitLength` from the given length in bits.
    #[inline]
    pub const fn from_bits(bits: usize) -> Self {
        Self(bits)
    }

    /// Constructs a `BitLength` from the given length in bytes.
    ///
    /// Fails if `bytes * 8` would overflow.
    #[inline]
    pub fn from_bytes(bytes: usize) -> Result<Self, InvalidArgument> {
        let bits = bytes
            .checked_mul(8)
            .ok_or_else(InvalidArgument::too_large)?;
        Ok(Self(bits))
    }

    /// The number of bits this bit length represents.
    #[inline]
    pub const fn as_bits(self) -> usize {
        self.0
    }

    /// The bit length, rounded up to a whole number of bytes.
    #[inline]
    pub const fn as_bytes_rounded_up(self) -> usize {
        // Equivalent to (self.0 + 7) / 8, except with no potential for
        // overflow and without branches.

        // Branchless round_up = if self.0 & 0b111 != 0 { 1 } else { 0 };
        let round_up = ((self.0 >> 2) | (self.0 >> 1) | self.0) & 1;

        (self.0 / 8) + round_up
    }
}

impl From<u32> for BitLength {
    #[inline]
    fn from(bits: u32) -> Self {
        Self(usize_from_u32(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_bytes_rounded_up() {
        assert_eq!(BitLength::from_bits(0).as_bytes_rounded_up(), 0);
        assert_eq!(BitLength::from_bits(1).as_bytes_rounded_up(), 1);
        assert_eq!(BitLength::from_bits(8).as_bytes_rounded_up(), 1);
        assert_eq!(BitLength::from_bits(9).as_bytes_rounded_up(), 2);
        assert_eq!(BitLength::from_bits(16).as_bytes_rounded_up(), 2);
    }
}
