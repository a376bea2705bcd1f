//! Instruction dispatch against a scope stack.
//!
//! `Instruction` is the small intermediate form a front end lowers to:
//! bind a set, fetch a binding, or test an element's membership. The gate
//! holds nothing but a borrow of the active `ScopeStack`.

use std::fmt;

use fuzzl_set::{FuzzResult, FuzzySet, MembershipValue};

use crate::environment::ScopeStack;
use crate::handle::{Element, SetHandle};

/// One evaluation step.
#[derive(Debug)]
pub enum Instruction {
    /// Bind `name` in the innermost scope.
    Assign { name: String, set: SetHandle },
    /// Fetch the innermost visible binding of `name`.
    Get { name: String },
    /// Membership of `element` in `set`.
    TestGate { set: SetHandle, element: Element },
}

impl Instruction {
    pub fn assign<T: 'static>(name: impl Into<String>, set: FuzzySet<T>) -> Self {
        Instruction::Assign {
            name: name.into(),
            set: SetHandle::of(set),
        }
    }

    pub fn get(name: impl Into<String>) -> Self {
        Instruction::Get { name: name.into() }
    }

    /// Typed membership test; the element type always matches the set.
    pub fn test_gate<T: Send + 'static>(set: FuzzySet<T>, element: T) -> Self {
        Instruction::TestGate {
            set: SetHandle::of(set),
            element: Element::new(element),
        }
    }

    /// Membership test on an erased handle, e.g. one returned by `Get`.
    pub fn test_handle<T: Send + 'static>(set: SetHandle, element: T) -> Self {
        Instruction::TestGate {
            set,
            element: Element::new(element),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Instruction::Assign { .. } => "assign",
            Instruction::Get { .. } => "get",
            Instruction::TestGate { .. } => "test_gate",
        }
    }
}

/// Outcome of one instruction.
#[derive(Debug)]
pub enum EvaluationResult {
    /// `Assign` produces no value.
    Unit,
    Set(SetHandle),
    Membership(MembershipValue),
}

impl EvaluationResult {
    pub fn is_unit(&self) -> bool {
        matches!(self, EvaluationResult::Unit)
    }

    pub fn as_membership(&self) -> Option<MembershipValue> {
        match self {
            EvaluationResult::Membership(value) => Some(*value),
            EvaluationResult::Unit | EvaluationResult::Set(_) => None,
        }
    }

    pub fn into_set(self) -> Option<SetHandle> {
        match self {
            EvaluationResult::Set(set) => Some(set),
            EvaluationResult::Unit | EvaluationResult::Membership(_) => None,
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationResult::Unit => f.write_str("()"),
            EvaluationResult::Set(set) => write!(f, "{set:?}"),
            EvaluationResult::Membership(value) => write!(f, "{value}"),
        }
    }
}

/// Dispatches instructions against the active scope stack.
pub struct EvaluationGate<'s> {
    scopes: &'s mut ScopeStack,
}

impl<'s> EvaluationGate<'s> {
    pub fn new(scopes: &'s mut ScopeStack) -> Self {
        EvaluationGate { scopes }
    }

    /// The scope stack, for scope entry and exit between instructions.
    pub fn scopes(&mut self) -> &mut ScopeStack {
        self.scopes
    }

    /// Run one instruction.
    #[tracing::instrument(level = "debug", skip_all, fields(instruction = instruction.name()))]
    pub fn evaluate(&mut self, instruction: Instruction) -> FuzzResult<EvaluationResult> {
        match instruction {
            Instruction::Assign { name, set } => {
                self.scopes.assign_handle(name, set);
                Ok(EvaluationResult::Unit)
            }
            Instruction::Get { name } => self.scopes.get(&name).map(EvaluationResult::Set),
            Instruction::TestGate { set, element } => {
                let value = set.membership(&element)?;
                tracing::trace!(%value, "membership");
                Ok(EvaluationResult::Membership(value))
            }
        }
    }
}
