//! Fuzzy-set operators.
//!
//! `Operator` is what a caller names when combining sets. Once `combine`
//! has checked operand count and threshold, the operator is lowered to
//! either a `BinaryOp` or a `UnaryOp`; composite nodes store only the
//! lowered form, so a node with the wrong number of operands cannot exist.

use std::fmt;

use crate::membership::MembershipValue;

/// Number of operand sets an operator consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

/// Combinator over fuzzy sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Union,
    Intersection,
    Complement,
    Add,
    Multiply,
    Difference,
    /// Crisp set of elements whose membership reaches a threshold.
    AlphaCut,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 7] = [
        Operator::Union,
        Operator::Intersection,
        Operator::Complement,
        Operator::Add,
        Operator::Multiply,
        Operator::Difference,
        Operator::AlphaCut,
    ];

    pub fn arity(self) -> Arity {
        match self {
            Operator::Union
            | Operator::Intersection
            | Operator::Add
            | Operator::Multiply
            | Operator::Difference => Arity::Binary,
            Operator::Complement | Operator::AlphaCut => Arity::Unary,
        }
    }

    /// Whether `combine` requires a threshold for this operator.
    pub fn takes_threshold(self) -> bool {
        matches!(self, Operator::AlphaCut)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Union => "union",
            Operator::Intersection => "intersection",
            Operator::Complement => "complement",
            Operator::Add => "add",
            Operator::Multiply => "multiply",
            Operator::Difference => "difference",
            Operator::AlphaCut => "alpha_cut",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated two-operand operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Union,
    Intersection,
    Add,
    Multiply,
    Difference,
}

impl BinaryOp {
    /// The two-operand form of `op`, if it has one.
    pub fn lower(op: Operator) -> Option<BinaryOp> {
        match op {
            Operator::Union => Some(BinaryOp::Union),
            Operator::Intersection => Some(BinaryOp::Intersection),
            Operator::Add => Some(BinaryOp::Add),
            Operator::Multiply => Some(BinaryOp::Multiply),
            Operator::Difference => Some(BinaryOp::Difference),
            Operator::Complement | Operator::AlphaCut => None,
        }
    }

    pub fn operator(self) -> Operator {
        match self {
            BinaryOp::Union => Operator::Union,
            BinaryOp::Intersection => Operator::Intersection,
            BinaryOp::Add => Operator::Add,
            BinaryOp::Multiply => Operator::Multiply,
            BinaryOp::Difference => Operator::Difference,
        }
    }
}

/// Validated one-operand operator, carrying its threshold if it has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Complement,
    AlphaCut(MembershipValue),
}

impl UnaryOp {
    pub fn operator(self) -> Operator {
        match self {
            UnaryOp::Complement => Operator::Complement,
            UnaryOp::AlphaCut(_) => Operator::AlphaCut,
        }
    }

    pub fn threshold(self) -> Option<MembershipValue> {
        match self {
            UnaryOp::Complement => None,
            UnaryOp::AlphaCut(t) => Some(t),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
