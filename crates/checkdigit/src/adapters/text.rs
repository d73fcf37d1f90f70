use std::borrow::Cow;

use super::Digits;
use crate::base::Base;
use crate::error::{CheckDigitError, MalformedDigit, MalformedDigitKind};

/// Lowercase glyphs for digit values `0..16`.
const DIGIT_GLYPHS: &[u8; 16] = b"0123456789abcdef";

/// Renders a digit value known to be below 16.
#[inline]
fn glyph(digit: u8) -> char {
    char::from(DIGIT_GLYPHS[usize::from(digit & 0x0f)])
}

impl Digits for str {
    type CheckDigit = char;
    type Extended = String;

    /// Parses every character as a single digit of `base`, accepting either case.
    fn to_digits(&self, base: Base) -> Result<Cow<'_, [u8]>, CheckDigitError> {
        self.chars()
            .enumerate()
            .map(|(position, character)| {
                character
                    .to_digit(base.radix())
                    .map(|digit| digit as u8)
                    .ok_or_else(|| {
                        CheckDigitError::from(MalformedDigit::new(
                            MalformedDigitKind::InvalidCharacter {
                                character,
                                position,
                            },
                            base.get(),
                        ))
                    })
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Cow::Owned)
    }

    #[inline]
    fn render_check_digit(check_digit: u8, _base: Base) -> char {
        glyph(check_digit)
    }

    fn with_check_digit(&self, check_digit: u8, base: Base) -> Result<String, CheckDigitError> {
        let mut extended = String::with_capacity(self.len() + 1);
        extended.push_str(self);
        extended.push(Self::render_check_digit(check_digit, base));
        Ok(extended)
    }
}

impl Digits for String {
    type CheckDigit = char;
    type Extended = Self;

    #[inline]
    fn to_digits(&self, base: Base) -> Result<Cow<'_, [u8]>, CheckDigitError> {
        self.as_str().to_digits(base)
    }

    #[inline]
    fn render_check_digit(check_digit: u8, base: Base) -> char {
        str::render_check_digit(check_digit, base)
    }

    #[inline]
    fn with_check_digit(&self, check_digit: u8, base: Base) -> Result<Self, CheckDigitError> {
        self.as_str().with_check_digit(check_digit, base)
    }
}
