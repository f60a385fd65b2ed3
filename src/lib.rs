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

//! Arbitrary-precision integer arithmetic for public-key cryptography.
//!
//! `mpint` provides a signed, variable-length [`integer::Integer`] value
//! type, modular arithmetic over arbitrary and odd (Montgomery) moduli, and
//! the number-theoretic operations—primality testing, prime search, Jacobi
//! symbols, modular square roots, CRT—that public-key schemes are built
//! from. All arithmetic is portable Rust; there are no assembly or C fast
//! paths.
//!
//! # Feature Flags
//!
//! <table>
//! <tr><th>Feature
//!     <th>Description
//! <tr><td><code>alloc (default)</code>
//!     <td>Enable features that require use of the heap. All of the
//!         variable-length arithmetic requires this.
//! <tr><td><code>std</code>
//!     <td>Enable features that use libstd, in particular
//!         <code>std::error::Error</code> integration. Implies `alloc`.
//! <tr><td><code>slow_tests</code>
//!     <td>Enable exhaustive, slow-running tests (e.g. checking every
//!         candidate below 10,000 against the primality test).
//! </table>

#![no_std]
#![deny(unsafe_code)]
#![allow(clippy::manual_div_ceil)]

#[cfg(feature = "alloc")]
extern crate alloc;

// The file-driven test framework does file IO; it is compiled whenever the
// heap is available, which in practice means a platform with libstd.
#[cfg(any(test, feature = "alloc"))]
extern crate std;

#[macro_use]
mod match_target_word_bits;

mod polyfill;

mod arithmetic;
pub mod bits;
pub mod error;
pub mod limb;
pub mod rand;

#[cfg(feature = "alloc")]
pub mod integer;

#[cfg(feature = "alloc")]
pub mod modular;

#[cfg(feature = "alloc")]
pub mod prime;
