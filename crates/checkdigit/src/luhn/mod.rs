//! Luhn mod N check digit computation.
//!
//! The check digit is derived from a weighted sum over the digit sequence.
//! Positions alternate between contributing the digit unchanged and
//! contributing its [`PermutationTable`] substitute. The unweighted parity is
//! tied to the sequence length, so the position immediately left of an
//! appended check digit is always substituted. The sum is then negated modulo
//! the base: `check = (sum * (base - 1)) % base`.
//!
//! # Detection properties
//!
//! Every single-digit substitution changes the check digit, in every base. Most
//! adjacent transpositions are detected too. A pair `a`, `b` slips through
//! when `t(a) - a ≡ t(b) - b (mod base)` for table `t`: in base 10, `09` and
//! `90` share a check digit, which is the classic Luhn limitation.
//!
//! # Example
//!
//! ```rust
//! use checkdigit::LuhnModN;
//!
//! let luhn = LuhnModN::default();
//! assert_eq!(luhn.check_digit("7992739871").unwrap(), '3');
//! assert_eq!(luhn.append_check_digit("7992739871").unwrap(), "79927398713");
//! assert!(luhn.has_valid_check_digit(&361_568_u32).unwrap());
//! ```

use crate::adapters::Digits;
use crate::base::{Base, IntoBase};
use crate::error::{CheckDigitError, MalformedDigit, MalformedDigitKind};
use crate::table::PermutationTable;
use crate::trace;

/// Computes the check digit for `digits`, most significant first.
///
/// An empty sequence has check digit `0`.
///
/// # Errors
///
/// Returns [`CheckDigitError::InvalidBase`] when `base` lies outside `2..=16`
/// and [`CheckDigitError::MalformedDigit`] when any element is not below the
/// base.
///
/// # Examples
///
/// ```
/// use checkdigit::compute_check_digit;
///
/// assert_eq!(compute_check_digit(&[3, 6, 1, 5, 5], 10), Ok(0));
/// assert_eq!(compute_check_digit(&[3, 6, 1, 5, 6], 10), Ok(8));
/// assert_eq!(compute_check_digit(&[], 16), Ok(0));
/// ```
pub fn compute_check_digit(digits: &[u8], base: impl IntoBase) -> Result<u8, CheckDigitError> {
    let base = base.into_base().inspect_err(trace::trace_rejected)?;
    checksum(digits, base).inspect_err(trace::trace_rejected)
}

/// Core weighted sum over validated base `base`.
fn checksum(digits: &[u8], base: Base) -> Result<u8, CheckDigitError> {
    let table = PermutationTable::for_base(base);
    let radix = base.radix();
    let unweighted_parity = digits.len() % 2;

    let mut total = 0u32;
    for (position, &digit) in digits.iter().enumerate() {
        let Some(substitute) = table.get(digit) else {
            return Err(MalformedDigit::new(
                MalformedDigitKind::OutOfRange { digit, position },
                base.get(),
            )
            .into());
        };

        let value = if position % 2 == unweighted_parity {
            digit
        } else {
            substitute
        };
        // Reducing as we go keeps arbitrarily long inputs within u32.
        total = (total + u32::from(value)) % radix;
    }

    let check_digit = ((total * (radix - 1)) % radix) as u8;
    trace::trace_check_digit(base.get(), digits.len(), check_digit);
    Ok(check_digit)
}

/// Luhn mod N engine bound to a single base.
///
/// The engine is `Copy` and stateless beyond its base; the permutation tables
/// it consults are built at compile time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct LuhnModN {
    base: Base,
}

impl LuhnModN {
    /// Engine for the classic base-10 Luhn algorithm.
    pub const DECIMAL: Self = Self::with_base(Base::DECIMAL);
    /// Engine for base 16.
    pub const HEXADECIMAL: Self = Self::with_base(Base::HEXADECIMAL);

    /// Creates an engine for `base`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::InvalidBase`] when `base` lies outside `2..=16`.
    pub fn new(base: impl IntoBase) -> Result<Self, CheckDigitError> {
        let base = base.into_base().inspect_err(trace::trace_rejected)?;
        Ok(Self::with_base(base))
    }

    /// Creates an engine for an already validated base.
    #[must_use]
    pub const fn with_base(base: Base) -> Self {
        Self { base }
    }

    /// Base the engine computes in.
    #[must_use]
    pub const fn base(&self) -> Base {
        self.base
    }

    /// Permutation table applied at weighted positions.
    #[must_use]
    pub fn table(&self) -> PermutationTable {
        PermutationTable::for_base(self.base)
    }

    /// Computes the check digit for `value` without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::MalformedDigit`] when `value` is not
    /// expressible as digits of this engine's base.
    pub fn check_digit<T>(&self, value: &T) -> Result<T::CheckDigit, CheckDigitError>
    where
        T: Digits + ?Sized,
    {
        self.compute(value)
            .map(|check_digit| T::render_check_digit(check_digit, self.base))
    }

    /// Returns `value` extended by its check digit.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::MalformedDigit`] when `value` is not
    /// expressible as digits of this engine's base, or when the extended value
    /// does not fit its representation.
    pub fn append_check_digit<T>(&self, value: &T) -> Result<T::Extended, CheckDigitError>
    where
        T: Digits + ?Sized,
    {
        let check_digit = self.compute(value)?;
        value
            .with_check_digit(check_digit, self.base)
            .inspect_err(trace::trace_rejected)
    }

    /// Reports whether the final digit of `value` is the check digit of the
    /// digits before it.
    ///
    /// A value without any digits carries no check digit and is reported as
    /// invalid.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::MalformedDigit`] when `value` is not
    /// expressible as digits of this engine's base.
    pub fn has_valid_check_digit<T>(&self, value: &T) -> Result<bool, CheckDigitError>
    where
        T: Digits + ?Sized,
    {
        let digits = value
            .to_digits(self.base)
            .inspect_err(trace::trace_rejected)?;
        let Some((&found, payload)) = digits.split_last() else {
            return Ok(false);
        };

        if !self.base.contains(found) {
            let err = CheckDigitError::from(MalformedDigit::new(
                MalformedDigitKind::OutOfRange {
                    digit: found,
                    position: payload.len(),
                },
                self.base.get(),
            ));
            trace::trace_rejected(&err);
            return Err(err);
        }

        let expected = checksum(payload, self.base).inspect_err(trace::trace_rejected)?;
        if expected != found {
            trace::trace_mismatch(self.base.get(), digits.len(), expected, found);
        }
        Ok(expected == found)
    }

    fn compute<T>(&self, value: &T) -> Result<u8, CheckDigitError>
    where
        T: Digits + ?Sized,
    {
        value
            .to_digits(self.base)
            .and_then(|digits| checksum(&digits, self.base))
            .inspect_err(trace::trace_rejected)
    }
}
