//! Structured tracing for check digit operations.
//!
//! Every helper is conditionally compiled behind the `tracing` feature flag and
//! collapses to an empty inline function when the feature is disabled.

use crate::error::CheckDigitError;

/// Target name for tracing events emitted by this crate.
#[cfg(feature = "tracing")]
const LUHN_TARGET: &str = "checkdigit::luhn";

/// Traces a computed check digit.
#[cfg(feature = "tracing")]
#[inline]
pub(super) fn trace_check_digit(base: u8, len: usize, check_digit: u8) {
    tracing::trace!(
        target: LUHN_TARGET,
        base = base,
        len = len,
        check_digit = check_digit,
        "check digit computed"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(super) fn trace_check_digit(_base: u8, _len: usize, _check_digit: u8) {}

/// Traces a value whose trailing digit does not match the recomputed check digit.
#[cfg(feature = "tracing")]
#[inline]
pub(super) fn trace_mismatch(base: u8, len: usize, expected: u8, found: u8) {
    tracing::debug!(
        target: LUHN_TARGET,
        base = base,
        len = len,
        expected = expected,
        found = found,
        "check digit mismatch"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(super) fn trace_mismatch(_base: u8, _len: usize, _expected: u8, _found: u8) {}

/// Traces an input rejected before any computation ran.
#[cfg(feature = "tracing")]
#[inline]
pub(super) fn trace_rejected(error: &CheckDigitError) {
    tracing::debug!(target: LUHN_TARGET, error = %error, "input rejected");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(super) fn trace_rejected(_error: &CheckDigitError) {}
