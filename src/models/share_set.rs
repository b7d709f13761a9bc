//! Share sequence model for the money splitter.
//!
//! This module contains the [`ShareSet`] type, the ordered sequence of
//! per-recipient amounts produced by the splitter and corrected in place by
//! the reconciler.

use std::fmt;
use std::ops::{Index, IndexMut};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An ordered sequence of shares, one per recipient.
///
/// Shares are exact decimal amounts. The sequence is created by the splitter
/// with one identical entry per recipient, adjusted in place by the
/// reconciler, and then treated as final for reporting. Its `Display`
/// rendering is the space-separated line the command-line reporter prints.
///
/// # Example
///
/// ```
/// use money_splitter::models::ShareSet;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shares = ShareSet::new(vec![
///     Decimal::from_str("266.66").unwrap(),
///     Decimal::from_str("266.67").unwrap(),
///     Decimal::from_str("266.67").unwrap(),
/// ]);
/// assert_eq!(shares.len(), 3);
/// assert_eq!(shares.sum(), Decimal::from_str("800.00").unwrap());
/// assert_eq!(shares.to_string(), "266.66 266.67 266.67");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSet(Vec<Decimal>);

impl ShareSet {
    /// Creates a share set from a vector of amounts.
    pub fn new(shares: Vec<Decimal>) -> Self {
        ShareSet(shares)
    }

    /// Creates a share set of `count` identical shares.
    pub fn uniform(share: Decimal, count: u32) -> Self {
        ShareSet(vec![share; count as usize])
    }

    /// The number of shares in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set contains no shares.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sum of all shares.
    pub fn sum(&self) -> Decimal {
        self.0.iter().copied().sum()
    }

    /// The difference between the largest and smallest share.
    ///
    /// Returns zero for an empty set. After reconciliation this is at most
    /// one minimal unit.
    pub fn spread(&self) -> Decimal {
        match (self.0.iter().max(), self.0.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => Decimal::ZERO,
        }
    }

    /// An iterator over the shares in recipient order.
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.0.iter()
    }

    /// The shares as a slice, in recipient order.
    pub fn as_slice(&self) -> &[Decimal] {
        &self.0
    }
}

impl From<Vec<Decimal>> for ShareSet {
    fn from(shares: Vec<Decimal>) -> Self {
        ShareSet(shares)
    }
}

impl Index<usize> for ShareSet {
    type Output = Decimal;

    fn index(&self, index: usize) -> &Decimal {
        &self.0[index]
    }
}

impl IndexMut<usize> for ShareSet {
    fn index_mut(&mut self, index: usize) -> &mut Decimal {
        &mut self.0[index]
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ShareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self
            .0
            .iter()
            .map(|share| share.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", line)
    }
}
