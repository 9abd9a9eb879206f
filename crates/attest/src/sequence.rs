// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sequence ordering validator, built on the ordering engine.
//!
//! Validates that adjacent pairs of a sequence compare into a policy's
//! allowed set. The comparison category is fixed by the first element; a
//! later element of an incompatible category is a usage error
//! ([`OrderViolation::Incomparable`]), reported distinctly from a genuine
//! ordering violation.

use std::cmp::Ordering;

use thiserror::Error;

use crate::ordering::compare;
use crate::value::Value;

/// The four named ordering policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPolicy {
    /// Strictly increasing: every adjacent pair must compare `Less`.
    Increasing,
    /// Strictly decreasing: every adjacent pair must compare `Greater`.
    Decreasing,
    /// Non-decreasing: `Less` or `Equal`.
    NonDecreasing,
    /// Non-increasing: `Greater` or `Equal`.
    NonIncreasing,
}

impl OrderPolicy {
    /// Whether `ord` is an allowed adjacent-pair result under this policy.
    pub fn allows(self, ord: Ordering) -> bool {
        match self {
            Self::Increasing => ord == Ordering::Less,
            Self::Decreasing => ord == Ordering::Greater,
            Self::NonDecreasing => matches!(ord, Ordering::Less | Ordering::Equal),
            Self::NonIncreasing => matches!(ord, Ordering::Greater | Ordering::Equal),
        }
    }

    /// Failure phrasing for a violated pair, mirroring the policy's
    /// requirement.
    pub(crate) fn violation_phrase(self) -> &'static str {
        match self {
            Self::Increasing => "is not less than",
            Self::Decreasing => "is not greater than",
            Self::NonDecreasing => "is not less than or equal to",
            Self::NonIncreasing => "is not greater than or equal to",
        }
    }
}

/// Why a sequence failed validation.
///
/// `Incomparable` is a usage error (the caller handed over elements with no
/// common order); `NotOrdered` is the genuine assertion violation, carrying
/// the index of the first offending pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderViolation {
    /// Two adjacent elements could not be ordered at all.
    #[error("cannot compare type \"{prev}\" and \"{curr}\" at index {index}")]
    Incomparable {
        /// Index of the later element of the incomparable pair.
        index: usize,
        /// Type label of the earlier element.
        prev: &'static str,
        /// Type label of the later element.
        curr: &'static str,
    },
    /// An adjacent pair compared outside the policy's allowed set.
    #[error("\"{prev}\" {phrase} \"{curr}\"")]
    NotOrdered {
        /// Index of the later element of the first violating pair.
        index: usize,
        /// Rendered earlier element.
        prev: String,
        /// Rendered later element.
        curr: String,
        /// Policy phrasing, e.g. `is not less than`.
        phrase: &'static str,
    },
}

/// Validates that `sequence` is ordered under `policy`.
///
/// Sequences of length 0 or 1 are trivially ordered. The category is
/// inferred once from the first element and fixed for the whole walk.
pub fn is_ordered(sequence: &[Value], policy: OrderPolicy) -> Result<(), OrderViolation> {
    if sequence.len() <= 1 {
        return Ok(());
    }

    for (index, pair) in sequence.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        let ord = compare(prev, curr).map_err(|_| OrderViolation::Incomparable {
            index: index + 1,
            prev: prev.type_label(),
            curr: curr.type_label(),
        })?;
        if !policy.allows(ord) {
            return Err(OrderViolation::NotOrdered {
                index: index + 1,
                prev: prev.render(),
                curr: curr.render(),
                phrase: policy.violation_phrase(),
            });
        }
    }
    Ok(())
}
