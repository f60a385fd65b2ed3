// Copyright 2016-2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

#[cfg(feature = "std")]
extern crate std;

/// A malformed parameter.
///
/// The `Display` implementation will return a string that will help you
/// better understand why the parameter was rejected. Here is an incomplete
/// list of reasons a parameter may be rejected:
///
/// * An even modulus was given where Montgomery arithmetic requires an odd
///   one.
///
/// * A randomization range has `min > max`, or an `equiv`/`modulus`
///   congruence constraint that no value in the range can satisfy.
///
/// * A size parameter would overflow the engine's internal capacity limits.
///   Such sizes are rejected up front, before any large allocation is
///   attempted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidArgument(&'static str);

impl InvalidArgument {
    #[cold]
    #[inline(never)]
    fn new(reason: &'static str) -> Self {
        Self(reason)
    }

    pub(crate) fn even_modulus() -> Self {
        Self::new("EvenModulus")
    }

    pub(crate) fn zero_modulus() -> Self {
        Self::new("ZeroModulus")
    }

    pub(crate) fn empty_range() -> Self {
        Self::new("EmptyRange")
    }

    pub(crate) fn out_of_range_equivalence() -> Self {
        Self::new("OutOfRangeEquivalence")
    }

    pub(crate) fn invalid_encoding() -> Self {
        Self::new("InvalidEncoding")
    }

    pub(crate) fn too_large() -> Self {
        Self::new("TooLarge")
    }

    // XXX: The RNG is supposed to be infallible; see the comment at the
    // call sites.
    pub(crate) fn rng_failed() -> Self {
        Self::new("RNG failed")
    }
}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}
