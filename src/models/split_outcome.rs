//! Split outcome models for the money splitter.
//!
//! This module contains the [`SplitOutcome`] type and its associated
//! structures that capture all outputs from a split run, including the
//! shares before and after reconciliation, totals, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ShareSet;

/// A single step in the audit trace recording a pipeline decision.
///
/// Each step captures the input, output, and reasoning for one phase of the
/// split pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A single reconciliation correction applied to one share.
///
/// The ordered sequence of adjustments records exactly which recipients
/// absorbed the rounding drift, one minimal unit at a time.
///
/// # Example
///
/// ```
/// use money_splitter::models::Adjustment;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let adjustment = Adjustment {
///     index: 0,
///     delta: Decimal::from_str("-0.01").unwrap(),
///     running_difference: Decimal::ZERO,
/// };
/// assert_eq!(adjustment.index, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// The index of the share that was adjusted.
    pub index: usize,
    /// The amount added to the share (negative when a unit was removed).
    pub delta: Decimal,
    /// The discrepancy remaining after this adjustment was applied.
    pub running_difference: Decimal,
}

/// Aggregated totals for a split run.
///
/// # Example
///
/// ```
/// use money_splitter::models::SplitTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = SplitTotals {
///     desired_total: Decimal::from_str("800.00").unwrap(),
///     raw_sum: Decimal::from_str("800.01").unwrap(),
///     reconciled_sum: Decimal::from_str("800.00").unwrap(),
///     correction: Decimal::from_str("0.01").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitTotals {
    /// The total the shares must sum to.
    pub desired_total: Decimal,
    /// The sum of the shares immediately after splitting.
    pub raw_sum: Decimal,
    /// The sum of the shares after reconciliation.
    pub reconciled_sum: Decimal,
    /// The rounding drift removed by reconciliation (raw sum minus desired total).
    pub correction: Decimal,
}

/// A warning generated during a split run.
///
/// Warnings indicate conditions that don't prevent the split but may
/// require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a split run.
///
/// Records every decision made during splitting and reconciliation.
///
/// # Example
///
/// ```
/// use money_splitter::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     adjustments: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of pipeline steps.
    pub steps: Vec<AuditStep>,
    /// The individual corrections applied by the reconciler, in order.
    pub adjustments: Vec<Adjustment>,
    /// Any warnings generated during the run.
    pub warnings: Vec<AuditWarning>,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a split run.
///
/// Captures the shares before and after reconciliation, the totals that
/// prove conservation, and a full audit trace.
///
/// # Example
///
/// ```
/// use money_splitter::models::{AuditTrace, ShareSet, SplitOutcome, SplitTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let outcome = SplitOutcome {
///     split_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     recipients: 3,
///     precision: 2,
///     raw_shares: ShareSet::new(vec![]),
///     shares: ShareSet::new(vec![]),
///     totals: SplitTotals {
///         desired_total: Decimal::ZERO,
///         raw_sum: Decimal::ZERO,
///         reconciled_sum: Decimal::ZERO,
///         correction: Decimal::ZERO,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         adjustments: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitOutcome {
    /// Unique identifier for this split run.
    pub split_id: Uuid,
    /// When the split was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the split.
    pub engine_version: String,
    /// The number of recipients the total was divided among.
    pub recipients: u32,
    /// The number of decimal places shares were rounded to.
    pub precision: u32,
    /// The shares immediately after splitting, before reconciliation.
    pub raw_shares: ShareSet,
    /// The final shares after reconciliation.
    pub shares: ShareSet,
    /// Aggregated totals for the run.
    pub totals: SplitTotals,
    /// Complete audit trace of pipeline decisions.
    pub audit_trace: AuditTrace,
}
