// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Structural equality engine.
//!
//! Three strengths, each total — mismatched shapes return `false`, never
//! fail:
//!
//! - [`equal_strict`]: identity of representation. Exact variant and width,
//!   deep recursion.
//! - [`equal_values`]: convertible-and-equal. Numeric values coerce within
//!   and across families before comparing; byte sequences compare against
//!   strings by content.
//! - [`equal_exported`]: strict equality over the exported-field projections
//!   of both operands.
//!
//! Behavior-carrying values ([`Value::Func`]) and opaque values are always
//! unequal, even to themselves: there is no meaningful way to compare two
//! closures, and reporting them equal would be a false positive.

use std::sync::Arc;

use crate::category::numeric;
use crate::project::project;
use crate::value::Value;

/// Deep structural equality requiring identical type shape.
///
/// `U32(123)` and `I64(123)` are unequal here; see [`equal_values`] for the
/// coercing strength. NaN is unequal to itself, matching float semantics.
pub fn equal_strict(left: &Value, right: &Value) -> bool {
    equal_with(left, right, equal_strict)
}

/// Type-coercing equality: compares after numeric widening (sign-aware,
/// never wrapping) and byte/string content conversion, recursing with the
/// same strength into composites.
pub fn equal_values(left: &Value, right: &Value) -> bool {
    if let (Some(a), Some(b)) = (numeric(left), numeric(right)) {
        return a.eq(b);
    }
    match (left.unshared(), right.unshared()) {
        (Value::Bytes(b), Value::Str(s)) | (Value::Str(s), Value::Bytes(b)) => {
            b.as_slice() == s.as_bytes()
        }
        _ => equal_with(left, right, equal_values),
    }
}

/// Strict equality over the exported-field projections of both operands:
/// implementation-private record fields are ignored at every depth.
pub fn equal_exported(left: &Value, right: &Value) -> bool {
    equal_strict(&project(left), &project(right))
}

/// Shape-identical recursion shared by the strict and coercing strengths;
/// `leaf_eq` decides how nested values are compared.
fn equal_with(left: &Value, right: &Value, leaf_eq: fn(&Value, &Value) -> bool) -> bool {
    // Shared subtrees pointing at the same allocation are trivially equal
    // (except Func/Opaque, which are never equal — checked below).
    if let (Value::Shared(a), Value::Shared(b)) = (left, right) {
        if Arc::ptr_eq(a, b) && !matches!(a.unshared(), Value::Func { .. } | Value::Opaque { .. })
        {
            return true;
        }
    }

    match (left.unshared(), right.unshared()) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::I8(a), Value::I8(b)) => a == b,
        (Value::I16(a), Value::I16(b)) => a == b,
        (Value::I32(a), Value::I32(b)) => a == b,
        (Value::I64(a), Value::I64(b)) => a == b,
        (Value::U8(a), Value::U8(b)) => a == b,
        (Value::U16(a), Value::U16(b)) => a == b,
        (Value::U32(a), Value::U32(b)) => a == b,
        (Value::U64(a), Value::U64(b)) => a == b,
        #[allow(clippy::float_cmp)]
        (Value::F32(a), Value::F32(b)) => a == b,
        #[allow(clippy::float_cmp)]
        (Value::F64(a), Value::F64(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bytes(a), Value::Bytes(b)) => a == b,
        (Value::Instant(a), Value::Instant(b)) => a == b,
        (Value::Seq(a), Value::Seq(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| leaf_eq(x, y))
        }
        (Value::Map(a), Value::Map(b)) => map_equal(a, b, leaf_eq),
        (Value::Record(a), Value::Record(b)) => {
            a.type_name == b.type_name
                && a.fields.len() == b.fields.len()
                && a.fields.iter().zip(&b.fields).all(|(x, y)| {
                    x.name == y.name && x.exported == y.exported && leaf_eq(&x.value, &y.value)
                })
        }
        // Behavior-carrying and opaque values: always unequal.
        (Value::Func { .. } | Value::Opaque { .. }, _)
        | (_, Value::Func { .. } | Value::Opaque { .. }) => false,
        _ => false,
    }
}

/// Order-blind pair matching for maps, duplicate-safe: every pair on one
/// side must consume a distinct equal pair on the other.
fn map_equal(
    a: &[(Value, Value)],
    b: &[(Value, Value)],
    leaf_eq: fn(&Value, &Value) -> bool,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut taken = vec![false; b.len()];
    for (ak, av) in a {
        let found = b.iter().enumerate().find(|(i, (bk, bv))| {
            !taken[*i] && leaf_eq(ak, bk) && leaf_eq(av, bv)
        });
        match found {
            Some((i, _)) => taken[i] = true,
            None => return false,
        }
    }
    true
}

/// Renders a two-sided diff for structured operands.
///
/// Returns `None` for scalar mismatches — those get a plain expected/actual
/// line in the failure message instead.
pub(crate) fn diff_report(expected: &Value, actual: &Value) -> Option<String> {
    let structured = |v: &Value| {
        matches!(
            v.unshared(),
            Value::Str(_) | Value::Seq(_) | Value::Map(_) | Value::Record(_)
        )
    };
    if !structured(expected) || !structured(actual) {
        return None;
    }
    Some(format!(
        "Diff:\n--- Expected\n{}\n+++ Actual\n{}",
        expected.render_pretty(),
        actual.render_pretty()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ToValue;

    #[test]
    fn strict_rejects_cross_width_equality() {
        assert!(!equal_strict(&123u32.to_value(), &123i64.to_value()));
        assert!(equal_strict(&123u32.to_value(), &123u32.to_value()));
    }

    #[test]
    fn values_coerce_across_width_and_sign() {
        assert!(equal_values(&123u32.to_value(), &123i64.to_value()));
        assert!(equal_values(&123u8.to_value(), &123.0f64.to_value()));
        assert!(!equal_values(&Value::I64(-1), &Value::U64(u64::MAX)));
    }

    #[test]
    fn bytes_and_strings_compare_by_content_in_value_mode() {
        let s = "abc".to_value();
        let b = Value::bytes(*b"abc");
        assert!(equal_values(&s, &b));
        assert!(!equal_strict(&s, &b));
    }

    #[test]
    fn funcs_never_compare_equal() {
        let f = Value::func("fn()");
        assert!(!equal_strict(&f, &f));
        assert!(!equal_values(&f, &f));
    }

    #[test]
    fn map_equality_ignores_order_and_tracks_duplicates() {
        let a = Value::Map(vec![
            (1i32.to_value(), "a".to_value()),
            (2i32.to_value(), "b".to_value()),
        ]);
        let b = Value::Map(vec![
            (2i32.to_value(), "b".to_value()),
            (1i32.to_value(), "a".to_value()),
        ]);
        assert!(equal_strict(&a, &b));

        let dup = Value::Map(vec![
            (1i32.to_value(), "a".to_value()),
            (1i32.to_value(), "a".to_value()),
        ]);
        assert!(!equal_strict(&a, &dup));
    }

    #[test]
    fn scalar_mismatches_render_no_diff() {
        assert!(diff_report(&1i32.to_value(), &2i32.to_value()).is_none());
        assert!(diff_report(&[1i32].to_value(), &[2i32].to_value()).is_some());
    }
}
