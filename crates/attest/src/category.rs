// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Comparison-category dispatch and numeric coercion.
//!
//! Every [`Value`] classifies into exactly one [`Category`]; classification
//! never fails. Ordering is only defined within a category, and numeric
//! coercion is sign-aware: crossing the signed/unsigned boundary never wraps
//! through raw bit patterns.

#![allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]

use std::cmp::Ordering;

use crate::value::Value;

/// Closed classification of a value's comparison family.
///
/// Assigned once per comparison from the first operand; both operands must
/// resolve to the same category or the comparison is rejected as
/// incomparable. [`Category::Other`] covers booleans, composites, and opaque
/// values — equality-comparable (where the equality engines define it), never
/// orderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Signed integers of any width.
    SignedInt,
    /// Unsigned integers of any width.
    UnsignedInt,
    /// Floating-point values of any width.
    Float,
    /// UTF-8 strings.
    Str,
    /// Raw byte sequences.
    Bytes,
    /// Absolute time instants.
    Instant,
    /// Everything else.
    Other,
}

/// Classifies a value into its comparison category. Total: unrecognised
/// shapes map to [`Category::Other`].
pub fn classify(value: &Value) -> Category {
    match value.unshared() {
        Value::I8(_) | Value::I16(_) | Value::I32(_) | Value::I64(_) => Category::SignedInt,
        Value::U8(_) | Value::U16(_) | Value::U32(_) | Value::U64(_) => Category::UnsignedInt,
        Value::F32(_) | Value::F64(_) => Category::Float,
        Value::Str(_) => Category::Str,
        Value::Bytes(_) => Category::Bytes,
        Value::Instant(_) => Category::Instant,
        _ => Category::Other,
    }
}

/// Numeric coercion to `f64`.
///
/// Succeeds exactly for the three numeric families and fails for everything
/// else. Wide integers round to the nearest representable `f64`; they never
/// wrap. This primitive underlies the delta/epsilon closeness checks.
pub fn to_f64(value: &Value) -> Option<f64> {
    match numeric(value)? {
        Numeric::Signed(n) => Some(n as f64),
        Numeric::Unsigned(n) => Some(n as f64),
        Numeric::Float(n) => Some(n),
    }
}

/// A numeric value promoted to the widest member of its family.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Numeric {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

/// Extracts the numeric payload, widened within its family. `None` for
/// non-numeric values.
pub(crate) fn numeric(value: &Value) -> Option<Numeric> {
    match value.unshared() {
        Value::I8(n) => Some(Numeric::Signed(i64::from(*n))),
        Value::I16(n) => Some(Numeric::Signed(i64::from(*n))),
        Value::I32(n) => Some(Numeric::Signed(i64::from(*n))),
        Value::I64(n) => Some(Numeric::Signed(*n)),
        Value::U8(n) => Some(Numeric::Unsigned(u64::from(*n))),
        Value::U16(n) => Some(Numeric::Unsigned(u64::from(*n))),
        Value::U32(n) => Some(Numeric::Unsigned(u64::from(*n))),
        Value::U64(n) => Some(Numeric::Unsigned(*n)),
        Value::F32(n) => Some(Numeric::Float(f64::from(*n))),
        Value::F64(n) => Some(Numeric::Float(*n)),
        _ => None,
    }
}

impl Numeric {
    /// Cross-family numeric ordering. Sign-aware across the signed/unsigned
    /// boundary: a negative signed value is less than every unsigned value,
    /// with no two's-complement wrap. `None` only when a float operand is
    /// NaN.
    pub(crate) fn partial_cmp(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Signed(a), Self::Signed(b)) => Some(a.cmp(&b)),
            (Self::Unsigned(a), Self::Unsigned(b)) => Some(a.cmp(&b)),
            (Self::Signed(a), Self::Unsigned(b)) => {
                if a < 0 {
                    Some(Ordering::Less)
                } else {
                    Some((a as u64).cmp(&b))
                }
            }
            (Self::Unsigned(a), Self::Signed(b)) => {
                if b < 0 {
                    Some(Ordering::Greater)
                } else {
                    Some(a.cmp(&(b as u64)))
                }
            }
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Signed(a), Self::Float(b)) => (a as f64).partial_cmp(&b),
            (Self::Float(a), Self::Signed(b)) => a.partial_cmp(&(b as f64)),
            (Self::Unsigned(a), Self::Float(b)) => (a as f64).partial_cmp(&b),
            (Self::Float(a), Self::Unsigned(b)) => a.partial_cmp(&(b as f64)),
        }
    }

    /// Cross-family numeric equality: equal values of different declared
    /// widths or signedness compare equal. NaN is never equal.
    pub(crate) fn eq(self, other: Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// The zero value of the operand's numeric variant, width preserved. `None`
/// for non-numeric values (sign checks are a usage error there).
pub(crate) fn zero_like(value: &Value) -> Option<Value> {
    match value.unshared() {
        Value::I8(_) => Some(Value::I8(0)),
        Value::I16(_) => Some(Value::I16(0)),
        Value::I32(_) => Some(Value::I32(0)),
        Value::I64(_) => Some(Value::I64(0)),
        Value::U8(_) => Some(Value::U8(0)),
        Value::U16(_) => Some(Value::U16(0)),
        Value::U32(_) => Some(Value::U32(0)),
        Value::U64(_) => Some(Value::U64(0)),
        Value::F32(_) => Some(Value::F32(0.0)),
        Value::F64(_) => Some(Value::F64(0.0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ToValue;

    #[test]
    fn every_width_classifies_into_its_family() {
        assert_eq!(classify(&1i8.to_value()), Category::SignedInt);
        assert_eq!(classify(&1i64.to_value()), Category::SignedInt);
        assert_eq!(classify(&1u8.to_value()), Category::UnsignedInt);
        assert_eq!(classify(&1u64.to_value()), Category::UnsignedInt);
        assert_eq!(classify(&1.0f32.to_value()), Category::Float);
        assert_eq!(classify(&"a".to_value()), Category::Str);
        assert_eq!(classify(&Value::bytes([1u8])), Category::Bytes);
        assert_eq!(
            classify(&std::time::SystemTime::UNIX_EPOCH.to_value()),
            Category::Instant
        );
        assert_eq!(classify(&true.to_value()), Category::Other);
        assert_eq!(classify(&[1i32].to_value()), Category::Other);
    }

    #[test]
    fn to_f64_rejects_non_numerics() {
        assert_eq!(to_f64(&3i32.to_value()), Some(3.0));
        assert_eq!(to_f64(&3u64.to_value()), Some(3.0));
        assert_eq!(to_f64(&"3".to_value()), None);
    }

    #[test]
    fn signed_unsigned_boundary_does_not_wrap() {
        let minus_one = numeric(&Value::I64(-1)).unwrap();
        let max = numeric(&Value::U64(u64::MAX)).unwrap();
        assert_eq!(minus_one.partial_cmp(max), Some(Ordering::Less));
        assert_eq!(max.partial_cmp(minus_one), Some(Ordering::Greater));
        assert!(!minus_one.eq(max));
    }
}
