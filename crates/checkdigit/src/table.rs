//! Per-base permutation tables.
//!
//! The table for base `B` lists the even digit values in ascending order
//! followed by the odd ones, e.g. `[0, 2, 4, 6, 8, 1, 3, 5, 7, 9]` for base 10.
//! In base 10 this coincides with the classic Luhn "double and sum the digits"
//! step; for other bases it is the substitution applied to weighted positions.
//!
//! All fifteen tables are built at compile time, so lookups never allocate and
//! there is no lazily initialised state to guard.

use crate::base::{Base, IntoBase};
use crate::error::CheckDigitError;

const MAX_RADIX: usize = Base::MAX.get() as usize;

/// Tables for every radix, indexed by the radix itself. Rows 0 and 1 are unused.
static TABLES: [[u8; MAX_RADIX]; MAX_RADIX + 1] = build_all();

const fn build_table(radix: usize) -> [u8; MAX_RADIX] {
    let mut table = [0u8; MAX_RADIX];
    let mut offset = 0;

    let mut value = 0;
    while value < radix {
        table[offset] = value as u8;
        offset += 1;
        value += 2;
    }

    value = 1;
    while value < radix {
        table[offset] = value as u8;
        offset += 1;
        value += 2;
    }

    table
}

const fn build_all() -> [[u8; MAX_RADIX]; MAX_RADIX + 1] {
    let mut tables = [[0u8; MAX_RADIX]; MAX_RADIX + 1];
    let mut radix = Base::MIN.get() as usize;
    while radix <= MAX_RADIX {
        tables[radix] = build_table(radix);
        radix += 1;
    }
    tables
}

/// Digit substitution table for a single base.
///
/// The entries form a permutation of `0..base`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PermutationTable {
    base: Base,
    entries: &'static [u8],
}

impl PermutationTable {
    /// Looks up the table for `base`, validating the radix first.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError::InvalidBase`] when `base` lies outside `2..=16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkdigit::PermutationTable;
    ///
    /// let table = PermutationTable::new(10).unwrap();
    /// assert_eq!(table.as_slice(), &[0, 2, 4, 6, 8, 1, 3, 5, 7, 9]);
    /// ```
    pub fn new(base: impl IntoBase) -> Result<Self, CheckDigitError> {
        Ok(Self::for_base(base.into_base()?))
    }

    /// Returns the table for an already validated base.
    #[must_use]
    pub fn for_base(base: Base) -> Self {
        let radix = usize::from(base.get());
        Self {
            base,
            entries: &TABLES[radix][..radix],
        }
    }

    /// Base this table belongs to.
    #[must_use]
    pub const fn base(&self) -> Base {
        self.base
    }

    /// Table entries, one per digit value.
    #[must_use]
    pub const fn as_slice(&self) -> &'static [u8] {
        self.entries
    }

    /// Returns the substitute for `digit`, or `None` when it is not a digit of this base.
    #[must_use]
    pub fn get(&self, digit: u8) -> Option<u8> {
        self.entries.get(usize::from(digit)).copied()
    }
}
