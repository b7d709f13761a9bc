//! Even splitting of a total amount across recipients.
//!
//! This module divides a total evenly, rounding each share to a fixed
//! number of decimal places. The rounded shares may drift from the total
//! by a few minimal units; the reconciler corrects that afterwards.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::MAX_PRECISION;
use crate::error::{SplitterError, SplitterResult};
use crate::models::{AuditStep, ShareSet};

/// The rounding strategy applied to share amounts.
///
/// Round-half-to-even: midpoint values land on the even digit, so `0.125`
/// rounds to `0.12` and `0.135` rounds to `0.14` at precision 2. This is
/// also what `Decimal::round_dp` uses.
pub const SHARE_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// The result of an even split, including the shares and audit step.
#[derive(Debug, Clone)]
pub struct EvenSplitResult {
    /// The uniform shares, one per recipient.
    pub shares: ShareSet,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Rounds an amount to the given number of decimal places using
/// [`SHARE_ROUNDING`].
pub fn round_to_precision(amount: Decimal, precision: u32) -> Decimal {
    amount.round_dp_with_strategy(precision, SHARE_ROUNDING)
}

/// Divides a total evenly among recipients.
///
/// Every share equals `total / count` rounded to `precision` decimal
/// places. The rounded shares may not sum back to the total; the
/// reconciler redistributes that drift one minimal unit at a time.
///
/// # Arguments
///
/// * `total` - The amount to divide; may be negative or zero
/// * `count` - The number of recipients; must be at least 1
/// * `precision` - Decimal places per share, between 1 and 28
///
/// # Returns
///
/// Returns a [`ShareSet`] of `count` identical shares, or an error if:
/// - `count` is zero (`InvalidRecipientCount`)
/// - `precision` is outside the supported range (`InvalidPrecision`)
///
/// # Examples
///
/// ```
/// use money_splitter::calculation::split;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let total = Decimal::from_str("800.00").unwrap();
/// let shares = split(total, 3, 2).unwrap();
///
/// assert_eq!(shares.to_string(), "266.67 266.67 266.67");
/// assert_eq!(shares.sum(), Decimal::from_str("800.01").unwrap());
/// ```
pub fn split(total: Decimal, count: u32, precision: u32) -> SplitterResult<ShareSet> {
    if count == 0 {
        return Err(SplitterError::InvalidRecipientCount { count });
    }
    if precision == 0 || precision > MAX_PRECISION {
        return Err(SplitterError::InvalidPrecision { precision });
    }

    let mut share = round_to_precision(total / Decimal::from(count), precision);
    // Pad the scale so every share carries exactly `precision` places and
    // renders at a fixed money scale ("25.00", not "25").
    share.rescale(precision);

    Ok(ShareSet::uniform(share, count))
}

/// Divides a total evenly among recipients, recording an audit step.
///
/// # Arguments
///
/// * `total` - The amount to divide
/// * `count` - The number of recipients
/// * `precision` - Decimal places per share
/// * `step_number` - The sequential audit step number
///
/// # Returns
///
/// Returns an `EvenSplitResult` containing the shares and an audit step,
/// or the same errors as [`split`].
pub fn split_with_audit(
    total: Decimal,
    count: u32,
    precision: u32,
    step_number: u32,
) -> SplitterResult<EvenSplitResult> {
    let shares = split(total, count, precision)?;
    let share = shares[0];
    let raw_sum = shares.sum();

    let audit_step = AuditStep {
        step_number,
        rule_id: "even_split".to_string(),
        rule_name: "Even Split".to_string(),
        input: serde_json::json!({
            "total": total.to_string(),
            "recipients": count,
            "precision": precision
        }),
        output: serde_json::json!({
            "share": share.to_string(),
            "raw_sum": raw_sum.to_string()
        }),
        reasoning: format!(
            "Divided {} among {} recipients at {} decimal places: {} each",
            total, count, precision, share
        ),
    };

    Ok(EvenSplitResult { shares, audit_step })
}
