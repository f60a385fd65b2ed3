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

/// Division or reduction by an integer or word equal to zero.
///
/// The checked entry points (`Integer::div_rem`, `Integer::modulo`, the
/// word-divisor overloads) return this; the operator sugar (`/`, `%`)
/// panics instead, exactly as the primitive integer operators do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DivideByZero(());

impl DivideByZero {
    #[cold]
    #[inline(never)]
    pub(crate) fn new() -> Self {
        Self(())
    }
}

impl core::fmt::Display for DivideByZero {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("DivideByZero")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DivideByZero {}
