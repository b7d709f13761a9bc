//! Core data models for the money splitter.
//!
//! This module contains all the domain models used throughout the crate.

mod share_set;
mod split_outcome;

pub use share_set::ShareSet;
pub use split_outcome::{Adjustment, AuditStep, AuditTrace, AuditWarning, SplitOutcome, SplitTotals};
