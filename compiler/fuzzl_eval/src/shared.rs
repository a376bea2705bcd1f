//! Thread-safe shared scope stack.
//!
//! `ScopeStack` itself does no locking. Hosts that hand one stack to
//! several threads wrap it here, which serializes every scope change and
//! every instruction behind a single `parking_lot::Mutex`.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::environment::ScopeStack;
use crate::gate::EvaluationGate;

/// Shared, mutex-guarded `ScopeStack`.
pub struct SharedScopeStack(Arc<Mutex<ScopeStack>>);

impl SharedScopeStack {
    pub fn new(scopes: ScopeStack) -> Self {
        SharedScopeStack(Arc::new(Mutex::new(scopes)))
    }

    /// Exclusive access to the stack until the guard drops.
    pub fn lock(&self) -> MutexGuard<'_, ScopeStack> {
        self.0.lock()
    }

    /// Run `f` with a gate over the locked stack.
    pub fn with_gate<R>(&self, f: impl FnOnce(&mut EvaluationGate<'_>) -> R) -> R {
        let mut scopes = self.0.lock();
        let mut gate = EvaluationGate::new(&mut scopes);
        f(&mut gate)
    }
}

impl Default for SharedScopeStack {
    fn default() -> Self {
        SharedScopeStack::new(ScopeStack::new())
    }
}

impl Clone for SharedScopeStack {
    fn clone(&self) -> Self {
        SharedScopeStack(Arc::clone(&self.0))
    }
}

impl fmt::Debug for SharedScopeStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_lock() {
            Some(scopes) => write!(f, "SharedScopeStack({:?})", &*scopes),
            None => f.write_str("SharedScopeStack(<locked>)"),
        }
    }
}
