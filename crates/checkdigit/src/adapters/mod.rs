//! Conversions between caller-facing representations and digit sequences.
//!
//! Every representation funnels into the same most-significant-first digit
//! slice consumed by [`compute_check_digit`](crate::compute_check_digit). The
//! [`Digits`] trait is the single seam: it converts a value into digits,
//! renders a check digit in the value's own shape, and appends one.
//!
//! | Representation | Check digit | Extended value |
//! |---|---|---|
//! | `[u8]`, `[u8; N]`, `Vec<u8>` | `u8` | `Vec<u8>` |
//! | `str`, `String` | `char` | `String` |
//! | `u32`, `u64`, `u128`, `usize`, `i32`, `i64`, `i128` | `u8` | `Self` |

use std::borrow::Cow;

use crate::base::Base;
use crate::error::CheckDigitError;

mod integer;
mod sequence;
mod text;

/// A value that can be checksummed as a sequence of base-`N` digits.
pub trait Digits {
    /// Check digit rendered in this representation.
    type CheckDigit;
    /// This representation extended by one trailing check digit.
    type Extended;

    /// Converts the value into digits, most significant first.
    ///
    /// Digit sequences are returned borrowed and unvalidated; range checks
    /// happen when the checksum runs.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::MalformedDigit`] when the value cannot be
    /// expressed as digits of `base`.
    fn to_digits(&self, base: Base) -> Result<Cow<'_, [u8]>, CheckDigitError>;

    /// Renders a check digit, already known to be below `base`.
    fn render_check_digit(check_digit: u8, base: Base) -> Self::CheckDigit;

    /// Returns a copy of the value with `check_digit` appended as its new
    /// least significant digit.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::MalformedDigit`] when the extended value is
    /// not representable, such as an integer that would overflow its width.
    fn with_check_digit(
        &self,
        check_digit: u8,
        base: Base,
    ) -> Result<Self::Extended, CheckDigitError>;
}
