use std::borrow::Cow;

use super::Digits;
use crate::base::Base;
use crate::error::{CheckDigitError, MalformedDigit, MalformedDigitKind};

/// Expands `magnitude` into base-`N` digits, most significant first.
///
/// Zero is the single digit `0`.
fn magnitude_digits(mut magnitude: u128, base: Base) -> Vec<u8> {
    if magnitude == 0 {
        return vec![0];
    }

    let radix = u128::from(base.get());
    let mut digits = vec![0u8; magnitude.ilog(radix) as usize + 1];
    for slot in digits.iter_mut().rev() {
        *slot = (magnitude % radix) as u8;
        magnitude /= radix;
    }
    digits
}

/// Implements [`Digits`] for integer widths by way of their `u128` magnitude.
///
/// Negative values of signed types are rejected with
/// [`MalformedDigitKind::Negative`]; appending a check digit multiplies by the
/// base in the value's own width and reports [`MalformedDigitKind::Overflow`]
/// instead of wrapping.
macro_rules! impl_digits_for_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Digits for $ty {
                type CheckDigit = u8;
                type Extended = $ty;

                fn to_digits(&self, base: Base) -> Result<Cow<'_, [u8]>, CheckDigitError> {
                    let magnitude = u128::try_from(*self).map_err(|_| {
                        MalformedDigit::new(MalformedDigitKind::Negative, base.get())
                    })?;
                    Ok(Cow::Owned(magnitude_digits(magnitude, base)))
                }

                #[inline]
                fn render_check_digit(check_digit: u8, _base: Base) -> u8 {
                    check_digit
                }

                fn with_check_digit(
                    &self,
                    check_digit: u8,
                    base: Base,
                ) -> Result<$ty, CheckDigitError> {
                    if u128::try_from(*self).is_err() {
                        return Err(
                            MalformedDigit::new(MalformedDigitKind::Negative, base.get()).into(),
                        );
                    }

                    self.checked_mul(<$ty>::from(base.get()))
                        .and_then(|shifted| shifted.checked_add(<$ty>::from(check_digit)))
                        .ok_or_else(|| {
                            MalformedDigit::new(MalformedDigitKind::Overflow, base.get()).into()
                        })
                }
            }
        )*
    };
}

impl_digits_for_integer!(u32, u64, u128, usize, i32, i64, i128);
