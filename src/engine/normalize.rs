//! Input Normalizer
//!
//! Turns the raw `number` query parameter into a validated
//! [`NormalizedNumber`] or a client-facing validation error. Validation is
//! the only place input can be rejected; everything downstream is total.

use thiserror::Error;

/// How strictly the raw parameter is validated.
///
/// The service historically shipped with two incompatible behaviors, so the
/// choice is surfaced as configuration instead of silently merging them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Any finite float literal is accepted. Negative values and zero-fraction
    /// floats are reduced to their absolute-value magnitude for the integer
    /// predicates; non-integral values keep only parity (over the truncated
    /// magnitude) and receive a zero digit-sum.
    #[default]
    Lenient,
    /// Only literal non-negative integer strings (optional `+` sign) are
    /// accepted; anything else is rejected at the boundary.
    StrictInteger,
}

/// Client errors surfaced as HTTP 400. Never constructed past normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing 'number' parameter")]
    MissingInput,
    #[error("Invalid input. Please provide a valid number.")]
    InvalidFormat,
}

/// A validated number. Immutable once constructed; only [`normalize`] builds
/// one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedNumber {
    value: f64,
    magnitude: u64,
    integral: bool,
}

impl NormalizedNumber {
    /// The numeric value as parsed, sign and fraction included.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Non-negative integer magnitude: |value| truncated toward zero. This is
    /// what the predicate suite and the fact lookup operate on.
    pub fn magnitude(&self) -> u64 {
        self.magnitude
    }

    /// True iff the fractional part was exactly zero.
    pub fn is_integral(&self) -> bool {
        self.integral
    }

    /// True iff the value is an integer eligible for the prime and perfect
    /// checks: integral and non-negative. Negative and fractional input is
    /// never prime or perfect.
    pub fn is_predicate_subject(&self) -> bool {
        self.integral && self.value >= 0.0
    }
}

/// Validate the raw query parameter under the active policy.
pub fn normalize(
    raw: Option<&str>,
    policy: ValidationPolicy,
) -> Result<NormalizedNumber, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingInput)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }

    match policy {
        ValidationPolicy::StrictInteger => {
            let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidationError::InvalidFormat);
            }
            let magnitude: u64 = digits.parse().map_err(|_| ValidationError::InvalidFormat)?;
            Ok(NormalizedNumber {
                value: magnitude as f64,
                magnitude,
                integral: true,
            })
        }
        ValidationPolicy::Lenient => {
            let value: f64 = trimmed.parse().map_err(|_| ValidationError::InvalidFormat)?;
            if !value.is_finite() {
                return Err(ValidationError::InvalidFormat);
            }
            Ok(NormalizedNumber {
                value,
                // Saturating cast; magnitudes beyond u64 clamp rather than wrap.
                magnitude: value.abs().trunc() as u64,
                integral: value.fract() == 0.0,
            })
        }
    }
}
