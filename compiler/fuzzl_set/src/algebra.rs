//! Membership semantics of each operator.
//!
//! Direct enum-based dispatch: the operator set is closed, so a total
//! `match` is used rather than trait objects. Every result goes back
//! through `MembershipValue::saturating`, keeping outputs in [0, 1] even
//! when float rounding drifts.

use crate::membership::MembershipValue;
use crate::operator::{BinaryOp, UnaryOp};

/// Evaluate a two-operand operator on operand degrees `a` and `b`.
#[inline]
pub fn evaluate_binary(op: BinaryOp, a: MembershipValue, b: MembershipValue) -> MembershipValue {
    let (a, b) = (a.get(), b.get());
    let result = match op {
        BinaryOp::Union => a.max(b),
        BinaryOp::Intersection => a.min(b),
        // Saturating sum
        BinaryOp::Add => (a + b).min(1.0),
        BinaryOp::Multiply => a * b,
        // Bounded difference
        BinaryOp::Difference => (a - b).max(0.0),
    };
    MembershipValue::saturating(result)
}

/// Evaluate a one-operand operator on operand degree `a`.
#[inline]
pub fn evaluate_unary(op: UnaryOp, a: MembershipValue) -> MembershipValue {
    match op {
        UnaryOp::Complement => MembershipValue::saturating(1.0 - a.get()),
        UnaryOp::AlphaCut(threshold) => MembershipValue::from(a >= threshold),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
