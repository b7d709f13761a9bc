//! Round-robin reconciliation of rounding drift.
//!
//! After an even split is rounded, the shares can sum to slightly more or
//! less than the desired total. This module walks the shares from index 0,
//! moving one minimal unit per step and wrapping around, until the sum
//! matches the total exactly.

use rust_decimal::Decimal;

use crate::models::{Adjustment, AuditStep, ShareSet};

use super::splitter::round_to_precision;

/// The result of a reconciliation, including the corrections and audit step.
#[derive(Debug, Clone)]
pub struct ReconcileResult {
    /// The corrections applied, in order.
    pub adjustments: Vec<Adjustment>,
    /// The audit step recording this reconciliation.
    pub audit_step: AuditStep,
}

/// Redistributes rounding drift so the shares sum exactly to the total.
///
/// Computes `difference = round(sum(shares), precision) - round(total,
/// precision)`, then cycles through the shares starting at index 0: when
/// the shares fall short, one minimal unit is added at the cursor; when
/// they overshoot, one is removed. The cursor advances `(cursor + 1) %
/// len` after every step. Both operands of the difference are rounded to
/// `precision`, so the difference is an integer multiple of the minimal
/// unit and each step moves it exactly one unit closer to zero; the loop
/// always terminates.
///
/// An empty share set is left untouched: there is nothing to correct and
/// no index to cycle over.
///
/// # Arguments
///
/// * `desired_total` - The amount the shares must sum to
/// * `shares` - The share set, corrected in place
/// * `precision` - Decimal places of the minimal unit, between 1 and 28
///
/// # Returns
///
/// The ordered corrections that were applied; empty when the shares
/// already summed to the desired total.
///
/// # Examples
///
/// ```
/// use money_splitter::calculation::{reconcile, split};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let total = Decimal::from_str("800.00").unwrap();
/// let mut shares = split(total, 3, 2).unwrap();
/// let adjustments = reconcile(total, &mut shares, 2);
///
/// assert_eq!(shares.to_string(), "266.66 266.67 266.67");
/// assert_eq!(adjustments.len(), 1);
/// assert_eq!(shares.sum(), total);
/// ```
pub fn reconcile(desired_total: Decimal, shares: &mut ShareSet, precision: u32) -> Vec<Adjustment> {
    if shares.is_empty() {
        return Vec::new();
    }

    let unit = Decimal::new(1, precision);
    let mut difference =
        round_to_precision(shares.sum(), precision) - round_to_precision(desired_total, precision);

    let mut adjustments = Vec::new();
    let mut cursor = 0;

    while difference != Decimal::ZERO {
        let delta = if difference < Decimal::ZERO { unit } else { -unit };
        shares[cursor] += delta;
        difference += delta;

        adjustments.push(Adjustment {
            index: cursor,
            delta,
            running_difference: difference,
        });

        cursor = (cursor + 1) % shares.len();
    }

    adjustments
}

/// Redistributes rounding drift, recording an audit step.
///
/// # Arguments
///
/// * `desired_total` - The amount the shares must sum to
/// * `shares` - The share set, corrected in place
/// * `precision` - Decimal places of the minimal unit
/// * `step_number` - The sequential audit step number
pub fn reconcile_with_audit(
    desired_total: Decimal,
    shares: &mut ShareSet,
    precision: u32,
    step_number: u32,
) -> ReconcileResult {
    let sum_before = shares.sum();
    let adjustments = reconcile(desired_total, shares, precision);
    let sum_after = shares.sum();

    let reasoning = if shares.is_empty() {
        "No shares to reconcile; empty share set left untouched".to_string()
    } else if adjustments.is_empty() {
        format!("Shares already sum to {}; no adjustments needed", sum_after)
    } else {
        format!(
            "Corrected rounding drift of {} with {} round-robin adjustment(s) of {}",
            sum_before - sum_after,
            adjustments.len(),
            Decimal::new(1, precision)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "round_robin_reconcile".to_string(),
        rule_name: "Round-Robin Reconciliation".to_string(),
        input: serde_json::json!({
            "desired_total": desired_total.to_string(),
            "raw_sum": sum_before.to_string(),
            "precision": precision
        }),
        output: serde_json::json!({
            "reconciled_sum": sum_after.to_string(),
            "adjustments": adjustments.len()
        }),
        reasoning,
    };

    ReconcileResult {
        adjustments,
        audit_step,
    }
}
