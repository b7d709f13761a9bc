//! Calculation logic for the money splitter.
//!
//! This module contains the two pipeline phases (even splitting and
//! round-robin reconciliation) and the orchestration that runs them and
//! assembles the audit-traced outcome.

mod pipeline;
mod reconciler;
mod splitter;

pub use pipeline::perform_split;
pub use reconciler::{ReconcileResult, reconcile, reconcile_with_audit};
pub use splitter::{
    EvenSplitResult, SHARE_ROUNDING, round_to_precision, split, split_with_audit,
};
