//! Fuzzl Set - fuzzy sets and their operator algebra.
//!
//! This crate is the value layer of the Fuzzl evaluator.
//!
//! # Architecture
//!
//! - `MembershipValue`: a degree in [0, 1], validated at construction
//! - `FuzzySet<T>`: shared handle to a primitive (membership function) or
//!   a lazily evaluated composite (operator over operand sets)
//! - `Operator`: closed set of combinators, checked for arity by `combine`
//! - `evaluate_binary` / `evaluate_unary`: the per-operator membership rules
//! - `FuzzError`: structured errors with stable E7xxx codes

mod algebra;
pub mod errors;
mod membership;
mod operator;
mod set;
mod stack;

pub use algebra::{evaluate_binary, evaluate_unary};
pub use errors::{ErrorCode, FuzzError, FuzzErrorKind, FuzzResult};
pub use membership::MembershipValue;
pub use operator::{Arity, BinaryOp, Operator, UnaryOp};
pub use set::{combine, primitive, FuzzySet, MembershipFn};
pub use stack::ensure_sufficient_stack;
