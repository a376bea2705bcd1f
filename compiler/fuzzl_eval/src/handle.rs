//! Type-erased fuzzy-set handles.
//!
//! A scope binds names to sets over any element type. `SetHandle` erases
//! the element type behind `Any` and keeps its `TypeId` and name, so the
//! set can be recovered with [`SetHandle::downcast`] or queried directly
//! with an erased element. Both paths check the type at runtime and fail
//! with `TypeMismatch` instead of casting blindly.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use fuzzl_set::errors::type_mismatch;
use fuzzl_set::{FuzzResult, FuzzySet, MembershipValue};

type ErasedSet = dyn Any + Send + Sync;
type ErasedElement = dyn Any + Send;

/// Monomorphized membership query behind a `SetHandle`.
type ErasedTest = fn(&ErasedSet, &ErasedElement) -> Option<FuzzResult<MembershipValue>>;

/// Shared handle to a `FuzzySet<T>` whose `T` is known only at runtime.
#[derive(Clone)]
pub struct SetHandle {
    set: Arc<ErasedSet>,
    element_type: TypeId,
    element_name: &'static str,
    test: ErasedTest,
}

impl SetHandle {
    /// Erase the element type of `set`.
    pub fn of<T: 'static>(set: FuzzySet<T>) -> Self {
        SetHandle {
            set: Arc::new(set),
            element_type: TypeId::of::<T>(),
            element_name: type_name::<T>(),
            test: test_erased::<T>,
        }
    }

    /// Name of the element type, for diagnostics.
    pub fn element_type(&self) -> &'static str {
        self.element_name
    }

    /// Whether this handle holds a `FuzzySet<T>`.
    pub fn is<T: 'static>(&self) -> bool {
        self.element_type == TypeId::of::<T>()
    }

    /// Recover the typed set. `name` labels the binding in the error.
    pub fn downcast<T: 'static>(&self, name: &str) -> FuzzResult<FuzzySet<T>> {
        self.set
            .downcast_ref::<FuzzySet<T>>()
            .cloned()
            .ok_or_else(|| type_mismatch(name, type_name::<T>(), self.element_name))
    }

    /// Membership of an erased element.
    ///
    /// Fails with `TypeMismatch` if `element` is not of the set's element type.
    pub fn membership(&self, element: &Element) -> FuzzResult<MembershipValue> {
        (self.test)(&*self.set, &*element.value)
            .unwrap_or_else(|| Err(type_mismatch("element", self.element_name, element.type_name)))
    }
}

fn test_erased<T: 'static>(
    set: &ErasedSet,
    element: &ErasedElement,
) -> Option<FuzzResult<MembershipValue>> {
    let set = set.downcast_ref::<FuzzySet<T>>()?;
    let element = element.downcast_ref::<T>()?;
    Some(set.membership(element))
}

impl<T: 'static> From<FuzzySet<T>> for SetHandle {
    fn from(set: FuzzySet<T>) -> Self {
        SetHandle::of(set)
    }
}

impl fmt::Debug for SetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetHandle<{}>", self.element_name)
    }
}

/// An element of some set's domain, with its type erased.
pub struct Element {
    value: Box<ErasedElement>,
    type_name: &'static str,
}

impl Element {
    pub fn new<T: Any + Send>(value: T) -> Self {
        Element {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element<{}>", self.type_name)
    }
}
