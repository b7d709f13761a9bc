//! End-to-end split pipeline.
//!
//! This module wires the splitter and reconciler together and assembles
//! the [`SplitOutcome`] with its audit trace and run metadata.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SplitConfig;
use crate::error::SplitterResult;
use crate::models::{AuditTrace, AuditWarning, SplitOutcome, SplitTotals};

use super::reconciler::reconcile_with_audit;
use super::splitter::split_with_audit;

/// Runs the full split pipeline for a configuration.
///
/// Validates the configuration, divides the total evenly, reconciles the
/// rounding drift, and assembles a [`SplitOutcome`] recording both phases.
/// A `ROUNDING_DRIFT` warning is attached whenever the raw shares did not
/// already sum to the desired total.
///
/// # Arguments
///
/// * `config` - The split parameters
///
/// # Returns
///
/// Returns the outcome on success, or an error if the configuration fails
/// validation (`InvalidRecipientCount`, `InvalidPrecision`).
///
/// # Examples
///
/// ```
/// use money_splitter::calculation::perform_split;
/// use money_splitter::config::SplitConfig;
///
/// let outcome = perform_split(&SplitConfig::default()).unwrap();
///
/// assert_eq!(outcome.shares.sum(), outcome.totals.desired_total);
/// assert_eq!(outcome.raw_shares.to_string(), "266.67 266.67 266.67");
/// assert_eq!(outcome.shares.to_string(), "266.66 266.67 266.67");
/// ```
pub fn perform_split(config: &SplitConfig) -> SplitterResult<SplitOutcome> {
    let start_time = Instant::now();
    config.validate()?;

    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let split_result =
        split_with_audit(config.total, config.recipients, config.precision, step_number)?;
    let raw_shares = split_result.shares.clone();
    let raw_sum = raw_shares.sum();
    audit_steps.push(split_result.audit_step);
    step_number += 1;

    debug!(share = %raw_shares[0], raw_sum = %raw_sum, "Computed even shares");

    if raw_sum != config.total {
        warnings.push(AuditWarning {
            code: "ROUNDING_DRIFT".to_string(),
            message: format!(
                "Raw shares sum to {}, desired total is {}",
                raw_sum, config.total
            ),
            severity: "low".to_string(),
        });
    }

    let mut shares = split_result.shares;
    let reconcile_result =
        reconcile_with_audit(config.total, &mut shares, config.precision, step_number);
    audit_steps.push(reconcile_result.audit_step);

    let reconciled_sum = shares.sum();
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        recipients = config.recipients,
        adjustments = reconcile_result.adjustments.len(),
        reconciled_sum = %reconciled_sum,
        duration_us,
        "Split completed"
    );

    Ok(SplitOutcome {
        split_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        recipients: config.recipients,
        precision: config.precision,
        raw_shares,
        shares,
        totals: SplitTotals {
            desired_total: config.total,
            raw_sum,
            reconciled_sum,
            correction: raw_sum - config.total,
        },
        audit_trace: AuditTrace {
            steps: audit_steps,
            adjustments: reconcile_result.adjustments,
            warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitterError;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config(total: &str, recipients: u32, precision: u32) -> SplitConfig {
        SplitConfig {
            total: dec(total),
            recipients,
            precision,
        }
    }

    #[test]
    fn test_default_config_produces_classic_correction() {
        let outcome = perform_split(&SplitConfig::default()).unwrap();

        assert_eq!(outcome.raw_shares.to_string(), "266.67 266.67 266.67");
        assert_eq!(outcome.shares.to_string(), "266.66 266.67 266.67");
        assert_eq!(outcome.totals.raw_sum, dec("800.01"));
        assert_eq!(outcome.totals.reconciled_sum, dec("800.00"));
        assert_eq!(outcome.totals.correction, dec("0.01"));
    }

    #[test]
    fn test_exact_division_has_no_warning_or_adjustment() {
        let outcome = perform_split(&config("100.00", 4, 2)).unwrap();

        assert_eq!(outcome.shares.to_string(), "25.00 25.00 25.00 25.00");
        assert!(outcome.audit_trace.adjustments.is_empty());
        assert!(outcome.audit_trace.warnings.is_empty());
        assert_eq!(outcome.totals.correction, Decimal::ZERO);
    }

    #[test]
    fn test_shortfall_adds_cent_at_index_zero() {
        let outcome = perform_split(&config("10.00", 3, 2)).unwrap();

        assert_eq!(outcome.raw_shares.to_string(), "3.33 3.33 3.33");
        assert_eq!(outcome.shares.to_string(), "3.34 3.33 3.33");
        assert_eq!(outcome.audit_trace.adjustments.len(), 1);
        assert_eq!(outcome.audit_trace.adjustments[0].index, 0);
    }

    #[test]
    fn test_invalid_recipient_count_rejected_before_split() {
        let result = perform_split(&config("100.00", 0, 2));

        match result {
            Err(SplitterError::InvalidRecipientCount { count }) => assert_eq!(count, 0),
            other => panic!("Expected InvalidRecipientCount, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_precision_rejected_before_split() {
        let result = perform_split(&config("100.00", 3, 0));

        match result {
            Err(SplitterError::InvalidPrecision { precision }) => assert_eq!(precision, 0),
            other => panic!("Expected InvalidPrecision, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_total_splits_exactly() {
        let outcome = perform_split(&config("-10.00", 2, 2)).unwrap();

        assert_eq!(outcome.shares.to_string(), "-5.00 -5.00");
        assert!(outcome.audit_trace.adjustments.is_empty());
    }

    #[test]
    fn test_drift_warning_attached_when_raw_sum_differs() {
        let outcome = perform_split(&SplitConfig::default()).unwrap();

        assert_eq!(outcome.audit_trace.warnings.len(), 1);
        assert_eq!(outcome.audit_trace.warnings[0].code, "ROUNDING_DRIFT");
        assert_eq!(outcome.audit_trace.warnings[0].severity, "low");
    }

    #[test]
    fn test_outcome_metadata() {
        let outcome = perform_split(&config("60.00", 7, 2)).unwrap();

        assert_eq!(outcome.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(outcome.recipients, 7);
        assert_eq!(outcome.precision, 2);
    }

    #[test]
    fn test_audit_steps_cover_both_phases_in_order() {
        let outcome = perform_split(&SplitConfig::default()).unwrap();

        let step_numbers: Vec<u32> = outcome
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(step_numbers, vec![1, 2]);
        assert_eq!(outcome.audit_trace.steps[0].rule_id, "even_split");
        assert_eq!(outcome.audit_trace.steps[1].rule_id, "round_robin_reconcile");
    }

    #[test]
    fn test_conservation_for_uneven_seven_way_split() {
        let outcome = perform_split(&config("60.00", 7, 2)).unwrap();

        assert_eq!(outcome.shares.sum(), dec("60.00"));
        assert!(outcome.shares.spread() <= dec("0.01"));
    }
}
