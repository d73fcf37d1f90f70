use core::fmt;
use core::str::FromStr;

use crate::error::CheckDigitError;

/// Radix in which check digits are computed, restricted to `2..=16`.
///
/// A `Base` is validated once on construction; every operation that accepts
/// one can therefore index the permutation tables without further checks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Base(u8);

impl Base {
    /// Smallest supported radix.
    pub const MIN: Self = Self(2);
    /// Largest supported radix.
    pub const MAX: Self = Self(16);
    /// Base 2.
    pub const BINARY: Self = Self(2);
    /// Base 8.
    pub const OCTAL: Self = Self(8);
    /// Base 10, the classic Luhn radix and the default for every operation.
    pub const DECIMAL: Self = Self(10);
    /// Base 16.
    pub const HEXADECIMAL: Self = Self(16);

    /// Validates `radix` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::InvalidBase`] when `radix` lies outside `2..=16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkdigit::{Base, CheckDigitError};
    ///
    /// assert_eq!(Base::new(16).unwrap(), Base::HEXADECIMAL);
    /// assert_eq!(Base::new(17), Err(CheckDigitError::InvalidBase { base: 17 }));
    /// ```
    pub const fn new(radix: u32) -> Result<Self, CheckDigitError> {
        if radix >= Self::MIN.0 as u32 && radix <= Self::MAX.0 as u32 {
            Ok(Self(radix as u8))
        } else {
            Err(CheckDigitError::InvalidBase {
                base: radix as i128,
            })
        }
    }

    /// Returns the radix as a byte.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the radix in the form accepted by [`char::to_digit`].
    #[must_use]
    pub const fn radix(self) -> u32 {
        self.0 as u32
    }

    /// Reports whether `digit` is a valid digit value in this base.
    #[must_use]
    pub const fn contains(self, digit: u8) -> bool {
        digit < self.0
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Base> for u8 {
    fn from(base: Base) -> Self {
        base.0
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.radix()
    }
}

impl FromStr for Base {
    type Err = CheckDigitError;

    /// Parses a decimal radix such as `"16"`.
    ///
    /// Text that is not an integer at all is reported as an invalid base of `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let radix: i128 = s
            .trim()
            .parse()
            .map_err(|_| CheckDigitError::invalid_base(0))?;
        radix.into_base()
    }
}

/// Conversion into a validated [`Base`].
///
/// Every public entry point takes `impl IntoBase`, so callers may pass either
/// a [`Base`] or a plain integer literal. Signed integers are accepted so that
/// negative radices surface as [`CheckDigitError::InvalidBase`] rather than a
/// type error.
pub trait IntoBase {
    /// Validates the value and converts it into a [`Base`].
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::InvalidBase`] when the value lies outside `2..=16`.
    fn into_base(self) -> Result<Base, CheckDigitError>;
}

impl IntoBase for Base {
    #[inline]
    fn into_base(self) -> Result<Base, CheckDigitError> {
        Ok(self)
    }
}

macro_rules! impl_into_base {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoBase for $ty {
                #[inline]
                fn into_base(self) -> Result<Base, CheckDigitError> {
                    match u8::try_from(self) {
                        Ok(radix) => Base::new(u32::from(radix)),
                        Err(_) => Err(CheckDigitError::InvalidBase {
                            base: i128::try_from(self).unwrap_or(i128::MAX),
                        }),
                    }
                }
            }

            impl TryFrom<$ty> for Base {
                type Error = CheckDigitError;

                #[inline]
                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    value.into_base()
                }
            }
        )*
    };
}

impl_into_base!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
