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

//! The word-level arithmetic engines.
//!
//! Every routine in these modules operates on limb slices whose lengths are
//! *even*; callers (the `integer` layer) maintain that invariant by always
//! rounding magnitude capacities up to an even, power-of-two size. The
//! entry point of each primitive checks the invariant and fails loudly on
//! violation.

pub(crate) mod add;
#[cfg(feature = "alloc")]
pub(crate) mod div;
pub(crate) mod dword;
pub(crate) mod inverse;
pub(crate) mod montgomery;
pub(crate) mod mul;

/// The largest supported magnitude, in limbs.
///
/// Size parameters are validated against this bound *before* any large
/// allocation is attempted.
pub(crate) const MAX_LIMBS: usize = 1 << 20;
