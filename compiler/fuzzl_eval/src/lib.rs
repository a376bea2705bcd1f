//! Fuzzl Eval - scoped bindings and instruction evaluation.
//!
//! # Architecture
//!
//! - `ScopeStack`: lexical scope chain; assignment writes the innermost
//!   scope, lookup walks outward to the root
//! - `SetHandle`: type-erased fuzzy set, checked against the expected
//!   element type on recovery
//! - `EvaluationGate`: dispatches `Assign` / `Get` / `TestGate`
//! - `SharedScopeStack`: mutex-guarded stack for multi-threaded hosts
//!
//! # Debugging
//!
//! - `RUST_LOG=fuzzl_eval=debug`: scope entry/exit and assignments
//! - `RUST_LOG=fuzzl_eval=trace,fuzzl_set=trace`: lookups and membership results
//! - `FUZZL_LOG_TREE=1`: indented span tree instead of flat lines

mod environment;
mod gate;
mod handle;
mod shared;

pub use environment::{Scope, ScopeStack};
pub use gate::{EvaluationGate, EvaluationResult, Instruction};
pub use handle::{Element, SetHandle};
pub use shared::SharedScopeStack;

pub use fuzzl_set::{
    combine, primitive, ErrorCode, FuzzError, FuzzErrorKind, FuzzResult, FuzzySet,
    MembershipValue, Operator,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var_os("FUZZL_LOG_TREE").is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .init();
        }
    });
}
