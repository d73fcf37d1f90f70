use std::borrow::Cow;

use super::Digits;
use crate::base::Base;
use crate::error::CheckDigitError;

impl Digits for [u8] {
    type CheckDigit = u8;
    type Extended = Vec<u8>;

    #[inline]
    fn to_digits(&self, _base: Base) -> Result<Cow<'_, [u8]>, CheckDigitError> {
        Ok(Cow::Borrowed(self))
    }

    #[inline]
    fn render_check_digit(check_digit: u8, _base: Base) -> u8 {
        check_digit
    }

    fn with_check_digit(&self, check_digit: u8, _base: Base) -> Result<Vec<u8>, CheckDigitError> {
        let mut extended = Vec::with_capacity(self.len() + 1);
        extended.extend_from_slice(self);
        extended.push(check_digit);
        Ok(extended)
    }
}

impl Digits for Vec<u8> {
    type CheckDigit = u8;
    type Extended = Self;

    #[inline]
    fn to_digits(&self, base: Base) -> Result<Cow<'_, [u8]>, CheckDigitError> {
        self.as_slice().to_digits(base)
    }

    #[inline]
    fn render_check_digit(check_digit: u8, base: Base) -> u8 {
        <[u8]>::render_check_digit(check_digit, base)
    }

    #[inline]
    fn with_check_digit(&self, check_digit: u8, base: Base) -> Result<Self, CheckDigitError> {
        self.as_slice().with_check_digit(check_digit, base)
    }
}

impl<const N: usize> Digits for [u8; N] {
    type CheckDigit = u8;
    type Extended = Vec<u8>;

    #[inline]
    fn to_digits(&self, base: Base) -> Result<Cow<'_, [u8]>, CheckDigitError> {
        self.as_slice().to_digits(base)
    }

    #[inline]
    fn render_check_digit(check_digit: u8, base: Base) -> u8 {
        <[u8]>::render_check_digit(check_digit, base)
    }

    #[inline]
    fn with_check_digit(&self, check_digit: u8, base: Base) -> Result<Vec<u8>, CheckDigitError> {
        self.as_slice().with_check_digit(check_digit, base)
    }
}
