//! Error types for fuzzy-set construction, scoping and evaluation.
//!
//! # Structured Error Categories
//!
//! `FuzzErrorKind` carries the structured data for each failure mode so
//! callers can match on the kind instead of parsing messages. Factory
//! functions (e.g. `missing_operand()`) are the construction API; every
//! kind maps to a stable `ErrorCode` in the E7xxx range.

use std::fmt;

use crate::operator::Operator;

/// Result of a fallible fuzzy-set operation.
pub type FuzzResult<T> = Result<T, FuzzError>;

/// Error codes for all core diagnostics.
///
/// Format: E7### (the evaluation-core phase).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Membership value or threshold outside [0, 1]
    E7001,
    /// Binary operator built without its second operand
    E7002,
    /// Unary operator built with a second operand
    E7003,
    /// Alpha-cut built without a threshold
    E7004,
    /// Threshold supplied to an operator that takes none
    E7005,
    /// Variable not bound in any scope
    E7006,
    /// Attempt to pop the root scope
    E7007,
    /// Binding retrieved as the wrong element type
    E7008,
}

impl ErrorCode {
    /// The code as it appears in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
            ErrorCode::E7003 => "E7003",
            ErrorCode::E7004 => "E7004",
            ErrorCode::E7005 => "E7005",
            ErrorCode::E7006 => "E7006",
            ErrorCode::E7007 => "E7007",
            ErrorCode::E7008 => "E7008",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FuzzErrorKind {
    // Range
    #[error("{what} {value} is outside [0, 1]")]
    OutOfRange { value: f64, what: &'static str },

    // Arity
    #[error("{operator} requires a second operand")]
    MissingOperand { operator: &'static str },
    #[error("{operator} takes a single operand, but a second was supplied")]
    UnexpectedOperand { operator: &'static str },
    #[error("alpha_cut requires a threshold")]
    MissingThreshold,
    #[error("{operator} takes no threshold")]
    UnexpectedThreshold { operator: &'static str },

    // Scope
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("cannot exit the root scope")]
    CannotExitRootScope,
    #[error("type mismatch for `{name}`: expected {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl FuzzErrorKind {
    /// Stable diagnostic code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::OutOfRange { .. } => ErrorCode::E7001,
            Self::MissingOperand { .. } => ErrorCode::E7002,
            Self::UnexpectedOperand { .. } => ErrorCode::E7003,
            Self::MissingThreshold => ErrorCode::E7004,
            Self::UnexpectedThreshold { .. } => ErrorCode::E7005,
            Self::UndefinedVariable { .. } => ErrorCode::E7006,
            Self::CannotExitRootScope => ErrorCode::E7007,
            Self::TypeMismatch { .. } => ErrorCode::E7008,
        }
    }
}

/// Error raised by the fuzzy-set core.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct FuzzError {
    pub kind: FuzzErrorKind,
}

impl FuzzError {
    pub fn from_kind(kind: FuzzErrorKind) -> Self {
        FuzzError { kind }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

impl From<FuzzErrorKind> for FuzzError {
    fn from(kind: FuzzErrorKind) -> Self {
        FuzzError::from_kind(kind)
    }
}

// Factory functions

/// A value that should be a membership degree is outside [0, 1].
#[cold]
pub fn out_of_range(value: f64, what: &'static str) -> FuzzError {
    FuzzError::from_kind(FuzzErrorKind::OutOfRange { value, what })
}

/// Binary operator combined with only one operand.
#[cold]
pub fn missing_operand(operator: Operator) -> FuzzError {
    FuzzError::from_kind(FuzzErrorKind::MissingOperand {
        operator: operator.name(),
    })
}

/// Unary operator combined with two operands.
#[cold]
pub fn unexpected_operand(operator: Operator) -> FuzzError {
    FuzzError::from_kind(FuzzErrorKind::UnexpectedOperand {
        operator: operator.name(),
    })
}

/// Alpha-cut combined without a threshold.
#[cold]
pub fn missing_threshold() -> FuzzError {
    FuzzError::from_kind(FuzzErrorKind::MissingThreshold)
}

/// Threshold supplied to an operator other than alpha-cut.
#[cold]
pub fn unexpected_threshold(operator: Operator) -> FuzzError {
    FuzzError::from_kind(FuzzErrorKind::UnexpectedThreshold {
        operator: operator.name(),
    })
}

/// Lookup missed every scope on the stack.
#[cold]
pub fn undefined_variable(name: &str) -> FuzzError {
    FuzzError::from_kind(FuzzErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Pop attempted with only the root scope left.
#[cold]
pub fn cannot_exit_root_scope() -> FuzzError {
    FuzzError::from_kind(FuzzErrorKind::CannotExitRootScope)
}

/// Binding holds a set over a different element type.
#[cold]
pub fn type_mismatch(name: &str, expected: &'static str, found: &'static str) -> FuzzError {
    FuzzError::from_kind(FuzzErrorKind::TypeMismatch {
        name: name.to_string(),
        expected,
        found,
    })
}
