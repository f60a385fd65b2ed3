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

//! Error reporting.
//!
//! Errors are small, specific types constructed through `#[cold]`
//! constructors so the compiler optimizes for the non-error path. All
//! failures are reported to the immediate caller; nothing is retried or
//! suppressed internally except the explicitly bounded randomization retry
//! loops in `integer`/`prime`.

pub use self::{
    divide_by_zero::DivideByZero, invalid_argument::InvalidArgument,
    random_number_not_found::RandomNumberNotFound, unspecified::Unspecified,
};

mod divide_by_zero;
mod invalid_argument;
mod random_number_not_found;
mod unspecified;
