//! Fuzzy sets over an arbitrary element type.
//!
//! A `FuzzySet<T>` is a cheap, reference-counted handle to an immutable
//! node. Leaves are primitive sets wrapping a membership function;
//! interior nodes are composites holding a validated operator and shared
//! handles to their operands. Operands must exist before the composite
//! that references them, so the node graph is always acyclic.
//!
//! Composites are lazy: nothing is evaluated at construction time, and
//! every `membership` call re-walks the graph. Two sets that are
//! pointwise equal (say, a complement of a union and the intersection of
//! the complements) stay distinct graphs.

use std::fmt;
use std::mem;
use std::sync::Arc;

use crate::algebra::{evaluate_binary, evaluate_unary};
use crate::errors::{
    missing_operand, missing_threshold, unexpected_operand, unexpected_threshold, FuzzResult,
};
use crate::membership::MembershipValue;
use crate::operator::{Arity, BinaryOp, Operator, UnaryOp};
use crate::stack::ensure_sufficient_stack;

/// Membership function of a primitive set.
///
/// Returns a raw degree; it is validated on every call.
pub type MembershipFn<T> = dyn Fn(&T) -> f64 + Send + Sync;

/// Label used for primitives built without a name.
const ANONYMOUS: &str = "primitive";

enum Node<T> {
    Primitive {
        label: &'static str,
        function: Box<MembershipFn<T>>,
    },
    Unary {
        op: UnaryOp,
        operand: FuzzySet<T>,
    },
    Binary {
        op: BinaryOp,
        left: FuzzySet<T>,
        right: FuzzySet<T>,
    },
}

/// A fuzzy set over elements of type `T`.
///
/// Cloning is a reference-count bump; clones share the same node.
pub struct FuzzySet<T>(Arc<Node<T>>);

impl<T> FuzzySet<T> {
    /// Build a set from a membership function.
    pub fn primitive<F>(function: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        Self::named(ANONYMOUS, function)
    }

    /// Build a primitive set that displays as `label`.
    pub fn named<F>(label: &'static str, function: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        FuzzySet(Arc::new(Node::Primitive {
            label,
            function: Box::new(function),
        }))
    }

    /// Combine `first` (and `second`, for binary operators) under `op`.
    ///
    /// Validates operand count against the operator's arity and the
    /// threshold against the operator (only `AlphaCut` takes one, and it
    /// must lie in [0, 1]). Performs no evaluation.
    pub fn combine(
        first: FuzzySet<T>,
        op: Operator,
        second: Option<FuzzySet<T>>,
        threshold: Option<f64>,
    ) -> FuzzResult<Self> {
        match (op.arity(), &second) {
            (Arity::Binary, None) => return Err(missing_operand(op)),
            (Arity::Unary, Some(_)) => return Err(unexpected_operand(op)),
            _ => {}
        }
        let threshold = match (op.takes_threshold(), threshold) {
            (true, Some(t)) => Some(MembershipValue::checked(t, "alpha-cut threshold")?),
            (true, None) => return Err(missing_threshold()),
            (false, Some(_)) => return Err(unexpected_threshold(op)),
            (false, None) => None,
        };
        // Arity and threshold are settled; only the lowering is left.
        let node = match (second, threshold) {
            (Some(second), _) => Node::Binary {
                op: BinaryOp::lower(op).ok_or_else(|| unexpected_operand(op))?,
                left: first,
                right: second,
            },
            (None, Some(t)) => Node::Unary {
                op: UnaryOp::AlphaCut(t),
                operand: first,
            },
            (None, None) => Node::Unary {
                op: UnaryOp::Complement,
                operand: first,
            },
        };
        tracing::trace!(operator = op.name(), "built composite set");
        Ok(FuzzySet(Arc::new(node)))
    }

    /// Degree to which `element` belongs to this set.
    ///
    /// Primitive results outside [0, 1] fail with `OutOfRange` here, at
    /// the call that produced them.
    pub fn membership(&self, element: &T) -> FuzzResult<MembershipValue> {
        self.degree(element).map(Degree::resolve)
    }

    fn degree(&self, element: &T) -> FuzzResult<Degree> {
        ensure_sufficient_stack(|| match &*self.0 {
            Node::Primitive { label, function } => {
                let raw = function(element);
                MembershipValue::new(raw)
                    .map(Degree::plain)
                    .inspect_err(|_| {
                        tracing::debug!(label = *label, raw, "membership function left [0, 1]");
                    })
            }
            Node::Unary {
                op: UnaryOp::Complement,
                operand,
            } => operand.degree(element).map(Degree::complement),
            Node::Unary { op, operand } => {
                Ok(Degree::plain(evaluate_unary(*op, operand.membership(element)?)))
            }
            Node::Binary { op, left, right } => {
                let a = left.membership(element)?;
                let b = right.membership(element)?;
                Ok(Degree::plain(evaluate_binary(*op, a, b)))
            }
        })
    }

    // Convenience combinators. Each clones the operand handles.

    pub fn union(&self, other: &Self) -> Self {
        self.binary(BinaryOp::Union, other)
    }

    pub fn intersection(&self, other: &Self) -> Self {
        self.binary(BinaryOp::Intersection, other)
    }

    pub fn add(&self, other: &Self) -> Self {
        self.binary(BinaryOp::Add, other)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        self.binary(BinaryOp::Multiply, other)
    }

    pub fn difference(&self, other: &Self) -> Self {
        self.binary(BinaryOp::Difference, other)
    }

    pub fn complement(&self) -> Self {
        self.unary(UnaryOp::Complement)
    }

    /// Alpha-cut at `threshold`; fails with `OutOfRange` outside [0, 1].
    pub fn alpha_cut(&self, threshold: f64) -> FuzzResult<Self> {
        let threshold = MembershipValue::checked(threshold, "alpha-cut threshold")?;
        Ok(self.unary(UnaryOp::AlphaCut(threshold)))
    }

    fn binary(&self, op: BinaryOp, other: &Self) -> Self {
        FuzzySet(Arc::new(Node::Binary {
            op,
            left: self.clone(),
            right: other.clone(),
        }))
    }

    fn unary(&self, op: UnaryOp) -> Self {
        FuzzySet(Arc::new(Node::Unary {
            op,
            operand: self.clone(),
        }))
    }

    // Structure

    pub fn is_primitive(&self) -> bool {
        matches!(&*self.0, Node::Primitive { .. })
    }

    pub fn is_composite(&self) -> bool {
        !self.is_primitive()
    }

    /// Operator at the root, `None` for primitives.
    pub fn operator(&self) -> Option<Operator> {
        match &*self.0 {
            Node::Primitive { .. } => None,
            Node::Unary { op, .. } => Some(op.operator()),
            Node::Binary { op, .. } => Some(op.operator()),
        }
    }

    /// Alpha-cut threshold at the root, if the root is an alpha-cut.
    pub fn threshold(&self) -> Option<MembershipValue> {
        match &*self.0 {
            Node::Unary { op, .. } => op.threshold(),
            Node::Primitive { .. } | Node::Binary { .. } => None,
        }
    }

    /// Length of the longest path from this node to a primitive (primitives are 1).
    pub fn depth(&self) -> usize {
        ensure_sufficient_stack(|| match &*self.0 {
            Node::Primitive { .. } => 1,
            Node::Unary { operand, .. } => operand.depth() + 1,
            Node::Binary { left, right, .. } => left.depth().max(right.depth()) + 1,
        })
    }

    /// Number of nodes when the graph is unfolded into a tree.
    ///
    /// A node shared by several parents is counted once per parent.
    pub fn node_count(&self) -> usize {
        ensure_sufficient_stack(|| match &*self.0 {
            Node::Primitive { .. } => 1,
            Node::Unary { operand, .. } => operand.node_count() + 1,
            Node::Binary { left, right, .. } => left.node_count() + right.node_count() + 1,
        })
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: 'static> FuzzySet<T> {
    /// Crisp set: full membership where `predicate` holds, none elsewhere.
    pub fn crisp<P>(predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::named("crisp", move |x| MembershipValue::from(predicate(x)).get())
    }

    /// Set assigning the same degree to every element.
    pub fn constant(degree: MembershipValue) -> Self {
        Self::named("constant", move |_| degree.get())
    }
}

impl<T> Clone for FuzzySet<T> {
    #[inline]
    fn clone(&self) -> Self {
        FuzzySet(Arc::clone(&self.0))
    }
}

/// Releases the graph without recursing once per level.
///
/// Only the last handle to a composite does any work. Its composite
/// operands are swapped for a primitive taken from the same graph and
/// queued; each queued set that is itself uniquely owned gets the same
/// treatment, so the nested drops stay one level deep.
impl<T> Drop for FuzzySet<T> {
    fn drop(&mut self) {
        let Some(node) = Arc::get_mut(&mut self.0) else {
            return;
        };
        let Some(filler) = node.first_primitive() else {
            return;
        };
        let mut pending = Vec::new();
        node.detach_operands(&filler, &mut pending);
        while let Some(mut set) = pending.pop() {
            if let Some(node) = Arc::get_mut(&mut set.0) {
                node.detach_operands(&filler, &mut pending);
            }
        }
    }
}

impl<T> Node<T> {
    /// Leftmost primitive below a composite; `None` for a primitive.
    fn first_primitive(&self) -> Option<FuzzySet<T>> {
        let mut set = match self {
            Node::Primitive { .. } => return None,
            Node::Unary { operand, .. } | Node::Binary { left: operand, .. } => operand,
        };
        while let Node::Unary { operand, .. } | Node::Binary { left: operand, .. } = &*set.0 {
            set = operand;
        }
        Some(set.clone())
    }

    /// Move composite operands into `pending`, leaving `filler` in their place.
    fn detach_operands(&mut self, filler: &FuzzySet<T>, pending: &mut Vec<FuzzySet<T>>) {
        let mut detach = |operand: &mut FuzzySet<T>| {
            if operand.is_composite() {
                pending.push(mem::replace(operand, filler.clone()));
            }
        };
        match self {
            Node::Primitive { .. } => {}
            Node::Unary { operand, .. } => detach(operand),
            Node::Binary { left, right, .. } => {
                detach(left);
                detach(right);
            }
        }
    }
}

/// A degree that may still owe an odd number of complements.
///
/// Chains of complements only flip the flag, so `1 - (1 - a)` is never
/// rounded and an even chain returns its operand's degree bit for bit.
#[derive(Clone, Copy)]
struct Degree {
    value: MembershipValue,
    complemented: bool,
}

impl Degree {
    fn plain(value: MembershipValue) -> Self {
        Degree {
            value,
            complemented: false,
        }
    }

    fn complement(self) -> Self {
        Degree {
            complemented: !self.complemented,
            ..self
        }
    }

    fn resolve(self) -> MembershipValue {
        if self.complemented {
            evaluate_unary(UnaryOp::Complement, self.value)
        } else {
            self.value
        }
    }
}

/// Renders the unevaluated graph, e.g. `complement(union(a, b))`.
impl<T> fmt::Display for FuzzySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match &*self.0 {
            Node::Primitive { label, .. } => f.write_str(label),
            Node::Unary {
                op: UnaryOp::AlphaCut(t),
                operand,
            } => write!(f, "alpha_cut({operand}, {t})"),
            Node::Unary { op, operand } => write!(f, "{}({operand})", op.operator()),
            Node::Binary { op, left, right } => {
                write!(f, "{}({left}, {right})", op.operator())
            }
        })
    }
}

impl<T> fmt::Debug for FuzzySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FuzzySet({self})")
    }
}

/// Build a primitive set from a membership function.
pub fn primitive<T, F>(function: F) -> FuzzySet<T>
where
    F: Fn(&T) -> f64 + Send + Sync + 'static,
{
    FuzzySet::primitive(function)
}

/// Combine sets under `op`; see [`FuzzySet::combine`].
pub fn combine<T>(
    first: FuzzySet<T>,
    op: Operator,
    second: Option<FuzzySet<T>>,
    threshold: Option<f64>,
) -> FuzzResult<FuzzySet<T>> {
    FuzzySet::combine(first, op, second, threshold)
}
