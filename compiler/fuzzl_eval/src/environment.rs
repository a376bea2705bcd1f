//! Scope stack for variable bindings.
//!
//! Each scope is a fresh binding frame. Assignment always writes to the
//! innermost frame and never searches outward, so an inner binding
//! shadows an outer one without touching it. Lookup walks from the
//! innermost frame to the root.

use rustc_hash::FxHashMap;

use fuzzl_set::errors::{cannot_exit_root_scope, undefined_variable};
use fuzzl_set::{FuzzResult, FuzzySet};

use crate::handle::SetHandle;

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, SetHandle>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Bind `name`, replacing any existing binding in this scope.
    #[inline]
    pub fn define(&mut self, name: String, set: SetHandle) {
        self.bindings.insert(name, set);
    }

    /// Look up a binding in this scope only.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&SetHandle> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Stack of scopes, innermost last.
///
/// The root scope lives outside the pushable stack, so it can never be
/// popped and there is always a scope to assign into.
#[derive(Clone, Debug, Default)]
pub struct ScopeStack {
    /// Root (global) scope, always at the bottom.
    root: Scope,
    /// Nested scopes, innermost at the end.
    scopes: Vec<Scope>,
}

impl ScopeStack {
    /// Create a stack holding only the root scope.
    pub fn new() -> Self {
        ScopeStack::default()
    }

    /// Number of scopes on the stack, root included.
    pub fn depth(&self) -> usize {
        self.scopes.len() + 1
    }

    /// Push a new empty scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::new());
        tracing::debug!(depth = self.depth(), "entered scope");
    }

    /// Pop the innermost scope, discarding its bindings.
    ///
    /// Fails with `CannotExitRootScope` when only the root remains.
    pub fn exit_scope(&mut self) -> FuzzResult<()> {
        let scope = self.scopes.pop().ok_or_else(cannot_exit_root_scope)?;
        tracing::debug!(depth = self.depth(), dropped = scope.len(), "exited scope");
        Ok(())
    }

    /// Bind `name` to `set` in the innermost scope.
    pub fn assign<T: 'static>(&mut self, name: impl Into<String>, set: FuzzySet<T>) {
        self.assign_handle(name, SetHandle::of(set));
    }

    /// Bind `name` to an already-erased handle in the innermost scope.
    pub fn assign_handle(&mut self, name: impl Into<String>, set: SetHandle) {
        let name = name.into();
        tracing::debug!(%name, element = set.element_type(), depth = self.depth(), "assign");
        self.innermost_mut().define(name, set);
    }

    /// Look `name` up from the innermost scope outward.
    pub fn get(&self, name: &str) -> FuzzResult<SetHandle> {
        let found = self.innermost_first().find_map(|scope| scope.lookup(name));
        tracing::trace!(name, found = found.is_some(), "lookup");
        found.cloned().ok_or_else(|| undefined_variable(name))
    }

    /// Look `name` up and recover it as a set over `T`.
    ///
    /// Fails with `TypeMismatch` if the visible binding holds another
    /// element type; outer bindings of the same name are not consulted.
    pub fn get_as<T: 'static>(&self, name: &str) -> FuzzResult<FuzzySet<T>> {
        self.get(name)?.downcast(name)
    }

    /// Whether `name` is visible from the innermost scope.
    pub fn contains(&self, name: &str) -> bool {
        self.innermost_first().any(|scope| scope.lookup(name).is_some())
    }

    /// Whether `name` is bound in the innermost scope itself.
    pub fn is_bound_locally(&self, name: &str) -> bool {
        self.scopes
            .last()
            .unwrap_or(&self.root)
            .lookup(name)
            .is_some()
    }

    /// Every visible name, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .innermost_first()
            .flat_map(|scope| scope.bindings.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        self.scopes.last_mut().unwrap_or(&mut self.root)
    }

    fn innermost_first(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter().rev().chain(std::iter::once(&self.root))
    }
}
