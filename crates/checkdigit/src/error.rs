//! Error types reported by check digit operations.

use thiserror::Error;

/// Errors that can occur while computing or validating a check digit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum CheckDigitError {
    /// The requested radix lies outside the supported `2..=16` range.
    #[error("base {base} is outside the supported range 2-16")]
    InvalidBase {
        /// Radix supplied by the caller.
        base: i128,
    },
    /// The input could not be converted into digits of the requested base.
    #[error(transparent)]
    MalformedDigit(#[from] MalformedDigit),
}

impl CheckDigitError {
    pub(super) fn invalid_base(base: impl Into<i128>) -> Self {
        Self::InvalidBase { base: base.into() }
    }

    /// Returns the rejected radix when the error is [`CheckDigitError::InvalidBase`].
    #[must_use]
    pub const fn invalid_base_value(self) -> Option<i128> {
        match self {
            Self::InvalidBase { base } => Some(base),
            Self::MalformedDigit(_) => None,
        }
    }

    /// Returns the digit conversion failure, if any.
    #[must_use]
    pub const fn malformed_digit(self) -> Option<MalformedDigit> {
        match self {
            Self::MalformedDigit(err) => Some(err),
            Self::InvalidBase { .. } => None,
        }
    }
}

/// Classification describing why an input could not be turned into digits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MalformedDigitKind {
    /// A string contained a character that is not a digit of the base.
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Zero-based character index within the input.
        position: usize,
    },
    /// A digit sequence contained a value greater than or equal to the base.
    OutOfRange {
        /// Offending digit value.
        digit: u8,
        /// Zero-based index within the sequence.
        position: usize,
    },
    /// A signed integer was negative; only magnitudes carry check digits.
    Negative,
    /// Appending the check digit does not fit the integer's width.
    Overflow,
}

/// Error returned when an input is not representable as digits of the requested base.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub struct MalformedDigit {
    kind: MalformedDigitKind,
    base: u8,
}

impl MalformedDigit {
    pub(super) const fn new(kind: MalformedDigitKind, base: u8) -> Self {
        Self { kind, base }
    }

    /// Returns the classification describing why conversion failed.
    #[must_use]
    pub const fn kind(self) -> MalformedDigitKind {
        self.kind
    }

    /// Radix the input was being interpreted in.
    #[must_use]
    pub const fn base(self) -> u8 {
        self.base
    }

    /// Zero-based position of the offending digit, when the failure is tied to one.
    #[must_use]
    pub const fn position(self) -> Option<usize> {
        match self.kind {
            MalformedDigitKind::InvalidCharacter { position, .. }
            | MalformedDigitKind::OutOfRange { position, .. } => Some(position),
            MalformedDigitKind::Negative | MalformedDigitKind::Overflow => None,
        }
    }
}

impl std::fmt::Display for MalformedDigit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = self.base;
        match self.kind {
            MalformedDigitKind::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "character {character:?} at position {position} is not a base-{base} digit"
            ),
            MalformedDigitKind::OutOfRange { digit, position } => write!(
                f,
                "digit {digit} at position {position} is out of range for base {base}"
            ),
            MalformedDigitKind::Negative => {
                f.write_str("negative integers cannot carry a check digit")
            }
            MalformedDigitKind::Overflow => write!(
                f,
                "appending a base-{base} check digit overflows the integer width"
            ),
        }
    }
}
