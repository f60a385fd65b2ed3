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

//! Cryptographic pseudo-random number generation.
//!
//! The integer randomization and prime generation operations use a
//! [`SecureRandom`] implementation as their source of random bytes.
//! [`SystemRandom`] is the recommended implementation; it defers to the
//! operating system through the `getrandom` crate.

use crate::error;

/// A secure random number generator.
pub trait SecureRandom: sealed::SecureRandom {
    /// Fills `dest` with random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), error::Unspecified>;
}

impl<T> SecureRandom for T
where
    T: sealed::SecureRandom,
{
    #[inline]
    fn fill(&self, dest: &mut [u8]) -> Result<(), error::Unspecified> {
        self.fill_impl(dest)
    }
}

/// A secure random number generator where the random values come directly
/// from the operating system.
///
/// "Directly from the operating system" here presently means "whatever the
/// `getrandom` crate does" but that may change in the future.
///
/// A single `SystemRandom` may be shared across multiple operations;
/// constructing one is cheap and acquires no resources until `fill` is
/// called.
#[derive(Clone, Debug)]
pub struct SystemRandom(());

impl SystemRandom {
    /// Constructs a new `SystemRandom`.
    #[inline(always)]
    pub fn new() -> Self {
        Self(())
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl sealed::SecureRandom for SystemRandom {
    #[inline(always)]
    fn fill_impl(&self, dest: &mut [u8]) -> Result<(), error::Unspecified> {
        getrandom::getrandom(dest).map_err(|_| error::Unspecified)
    }
}

pub(crate) mod sealed {
    use crate::error;

    pub trait SecureRandom: core::fmt::Debug {
        /// Fills `dest` with random bytes.
        fn fill_impl(&self, dest: &mut [u8]) -> Result<(), error::Unspecified>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_random_lengths() {
        const LINUX_LIMIT: usize = 256;
        const WEB_LIMIT: usize = 65536;

        // Test that `fill` succeeds when given a variety of interesting
        // buffer lengths.
        let lengths = [
            0,
            1,
            2,
            3,
            96,
            LINUX_LIMIT - 1,
            LINUX_LIMIT,
            LINUX_LIMIT + 1,
            LINUX_LIMIT * 2,
            511,
            512,
            513,
            4096,
            WEB_LIMIT - 1,
            WEB_LIMIT,
            WEB_LIMIT + 1,
            WEB_LIMIT * 2,
        ];

        for len in lengths.iter() {
            let mut buf = std::vec![0; *len];

            let rng = SystemRandom::new();
            assert!(rng.fill(&mut buf).is_ok());

            // If `len` is long enough, test that the buffer isn't all zeros.
            if *len > 96 / 8 {
                assert!(buf.iter().any(|b| *b != 0));
            }
        }
    }
}
