//! Reconciliation engine.
//!
//! Matches every extracted register entry against the delivered file set and
//! classifies the lot: expected entries become Done or To Do, unclaimed
//! delivered files become extras. Pure and reentrant; callers re-run it from
//! scratch on every selection change.

mod engine;

pub use engine::{DEFAULT_FUZZY_THRESHOLD, ReconcileOptions, reconcile};
