#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod adapters;
mod base;
mod error;
mod luhn;
mod table;
mod trace;

pub use adapters::Digits;
pub use base::{Base, IntoBase};
pub use error::{CheckDigitError, MalformedDigit, MalformedDigitKind};
pub use luhn::{LuhnModN, compute_check_digit};
pub use table::PermutationTable;

/// Computes the base-10 check digit of `value`.
///
/// # Errors
///
/// Returns [`CheckDigitError::MalformedDigit`] when `value` is not a base-10 number.
pub fn check_digit<T>(value: &T) -> Result<T::CheckDigit, CheckDigitError>
where
    T: Digits + ?Sized,
{
    LuhnModN::DECIMAL.check_digit(value)
}

/// Computes the check digit of `value` in `base`.
///
/// # Errors
///
/// Returns [`CheckDigitError::InvalidBase`] for a radix outside `2..=16` and
/// [`CheckDigitError::MalformedDigit`] when `value` is not a number in `base`.
pub fn check_digit_in_base<T>(
    value: &T,
    base: impl IntoBase,
) -> Result<T::CheckDigit, CheckDigitError>
where
    T: Digits + ?Sized,
{
    LuhnModN::new(base)?.check_digit(value)
}

/// Returns `value` extended by its base-10 check digit.
///
/// # Errors
///
/// Returns [`CheckDigitError::MalformedDigit`] when `value` is not a base-10
/// number or the extended integer overflows.
pub fn append_check_digit<T>(value: &T) -> Result<T::Extended, CheckDigitError>
where
    T: Digits + ?Sized,
{
    LuhnModN::DECIMAL.append_check_digit(value)
}

/// Returns `value` extended by its check digit in `base`.
///
/// # Errors
///
/// Returns [`CheckDigitError::InvalidBase`] for a radix outside `2..=16` and
/// [`CheckDigitError::MalformedDigit`] when `value` is not a number in `base`
/// or the extended integer overflows.
pub fn append_check_digit_in_base<T>(
    value: &T,
    base: impl IntoBase,
) -> Result<T::Extended, CheckDigitError>
where
    T: Digits + ?Sized,
{
    LuhnModN::new(base)?.append_check_digit(value)
}

/// Reports whether the last digit of `value` is its base-10 check digit.
///
/// # Errors
///
/// Returns [`CheckDigitError::MalformedDigit`] when `value` is not a base-10 number.
pub fn has_valid_check_digit<T>(value: &T) -> Result<bool, CheckDigitError>
where
    T: Digits + ?Sized,
{
    LuhnModN::DECIMAL.has_valid_check_digit(value)
}

/// Reports whether the last digit of `value` is its check digit in `base`.
///
/// # Errors
///
/// Returns [`CheckDigitError::InvalidBase`] for a radix outside `2..=16` and
/// [`CheckDigitError::MalformedDigit`] when `value` is not a number in `base`.
pub fn has_valid_check_digit_in_base<T>(
    value: &T,
    base: impl IntoBase,
) -> Result<bool, CheckDigitError>
where
    T: Digits + ?Sized,
{
    LuhnModN::new(base)?.has_valid_check_digit(value)
}
