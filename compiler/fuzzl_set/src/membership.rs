//! Membership degrees.
//!
//! A `MembershipValue` is a real number in the closed interval [0, 1].
//! Every value of the type satisfies that bound; there is no way to build
//! one outside it (NaN included).

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{out_of_range, FuzzError, FuzzResult};

/// Degree of belonging of an element to a fuzzy set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MembershipValue(f64);

impl MembershipValue {
    /// No membership.
    pub const ZERO: MembershipValue = MembershipValue(0.0);
    /// Full membership.
    pub const ONE: MembershipValue = MembershipValue(1.0);

    /// Validate `value` as a membership degree.
    ///
    /// Fails with `OutOfRange` for anything outside [0, 1], NaN included.
    pub fn new(value: f64) -> FuzzResult<Self> {
        Self::checked(value, "membership value")
    }

    /// Validate `value`, naming it `what` in the error on failure.
    pub(crate) fn checked(value: f64, what: &'static str) -> FuzzResult<Self> {
        if (0.0..=1.0).contains(&value) {
            // + 0.0 folds -0.0 into 0.0
            Ok(MembershipValue(value + 0.0))
        } else {
            Err(out_of_range(value, what))
        }
    }

    /// Clamp `value` into [0, 1]. NaN becomes zero.
    ///
    /// Used on operator results, where rounding can drift a hair past
    /// the bounds.
    #[inline]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            MembershipValue(value.clamp(0.0, 1.0) + 0.0)
        }
    }

    /// The raw degree.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// `true` for exactly 1.0.
    #[inline]
    pub fn is_full(self) -> bool {
        self.0 >= 1.0
    }

    /// `true` for exactly 0.0.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 <= 0.0
    }
}

// NaN is unrepresentable, so the float order is total.
impl Eq for MembershipValue {}

impl PartialOrd for MembershipValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MembershipValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for MembershipValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for MembershipValue {
    type Error = FuzzError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        MembershipValue::new(value)
    }
}

impl From<MembershipValue> for f64 {
    fn from(value: MembershipValue) -> Self {
        value.0
    }
}

impl From<bool> for MembershipValue {
    fn from(member: bool) -> Self {
        if member {
            Self::ONE
        } else {
            Self::ZERO
        }
    }
}

impl fmt::Display for MembershipValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
