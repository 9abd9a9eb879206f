// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tri-state ordering engine.
//!
//! Orders two values of the same [`Category`]. Cross-width comparisons within
//! a family are promoted to the widest member before comparing — never
//! compared on raw bit patterns — so equal values of different declared
//! widths are `Equal`.

use std::cmp::Ordering;

use thiserror::Error;

use crate::category::{classify, numeric, Category, Numeric};
use crate::value::Value;

/// Why two values could not be ordered.
///
/// These are usage errors, not ordering violations: the caller asked for an
/// order that does not exist. The assertion surface reports them as
/// "cannot compare", distinct from "not ordered".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The operands resolve to different categories.
    #[error("cannot compare type \"{left}\" and \"{right}\"")]
    CategoryMismatch {
        /// Type label of the left operand.
        left: &'static str,
        /// Type label of the right operand.
        right: &'static str,
    },
    /// The shared category has no defined order (booleans, composites,
    /// opaque values).
    #[error("values of type \"{0}\" are not orderable")]
    Unordered(&'static str),
    /// A floating-point operand was NaN.
    #[error("cannot order NaN")]
    NanOperand,
}

/// Orders `left` against `right` within their common category.
///
/// Strings and byte sequences order byte-lexicographically, instants
/// chronologically, numerics by value after promotion to a common width.
/// Everything else — and any category mismatch — is a [`CompareError`].
pub fn compare(left: &Value, right: &Value) -> Result<Ordering, CompareError> {
    let (lc, rc) = (classify(left), classify(right));
    if lc != rc {
        return Err(CompareError::CategoryMismatch {
            left: left.type_label(),
            right: right.type_label(),
        });
    }

    match lc {
        Category::SignedInt | Category::UnsignedInt | Category::Float => {
            match (numeric(left), numeric(right)) {
                (Some(a), Some(b)) => compare_numeric(a, b),
                // Unreachable for matching numeric categories; kept total.
                _ => Err(CompareError::Unordered(left.type_label())),
            }
        }
        Category::Str => match (left.unshared(), right.unshared()) {
            (Value::Str(a), Value::Str(b)) => Ok(a.as_bytes().cmp(b.as_bytes())),
            _ => Err(CompareError::Unordered(left.type_label())),
        },
        Category::Bytes => match (left.unshared(), right.unshared()) {
            (Value::Bytes(a), Value::Bytes(b)) => Ok(a.as_slice().cmp(b.as_slice())),
            _ => Err(CompareError::Unordered(left.type_label())),
        },
        Category::Instant => match (left.unshared(), right.unshared()) {
            (Value::Instant(a), Value::Instant(b)) => Ok(a.cmp(b)),
            _ => Err(CompareError::Unordered(left.type_label())),
        },
        Category::Other => Err(CompareError::Unordered(left.type_label())),
    }
}

fn compare_numeric(a: Numeric, b: Numeric) -> Result<Ordering, CompareError> {
    a.partial_cmp(b).ok_or(CompareError::NanOperand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ToValue;

    #[test]
    fn cross_width_promotion_orders_by_value() {
        assert_eq!(
            compare(&2i8.to_value(), &300i64.to_value()),
            Ok(Ordering::Less)
        );
        assert_eq!(
            compare(&300i64.to_value(), &300i16.to_value()),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn category_mismatch_is_rejected() {
        let err = compare(&1i32.to_value(), &1u32.to_value());
        assert_eq!(
            err,
            Err(CompareError::CategoryMismatch {
                left: "i32",
                right: "u32",
            })
        );
    }

    #[test]
    fn nan_is_not_orderable() {
        assert_eq!(
            compare(&f64::NAN.to_value(), &1.0f64.to_value()),
            Err(CompareError::NanOperand)
        );
    }

    #[test]
    fn bools_and_composites_are_unordered() {
        assert!(matches!(
            compare(&true.to_value(), &false.to_value()),
            Err(CompareError::Unordered("bool"))
        ));
        assert!(matches!(
            compare(&[1i32].to_value(), &[2i32].to_value()),
            Err(CompareError::Unordered("sequence"))
        ));
    }
}
