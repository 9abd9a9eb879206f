// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Checks-active strategy: the real assertion logic.
//!
//! Every check here has a plain form and a `_msg` form taking a
//! `format_args!` context; the two are identical in pass/fail behavior and
//! differ only in the rendered diagnostic. On violation the check routes a
//! generated description through the fail/report collaborator and never
//! returns along the failing path.
//!
//! Usage errors — unorderable operands, unsearchable containers, a sign
//! check on a non-number — use the same fatal channel but are tagged
//! [`FailureKind::Usage`](crate::FailureKind::Usage) and worded as
//! "cannot …". The `not_*` family negates only genuine verdicts: a usage
//! error from the positive form stays a usage error rather than becoming a
//! silent pass.

#![allow(clippy::float_cmp)]

use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, SystemTime};

use crate::category::{to_f64, zero_like};
use crate::container;
use crate::equality::{diff_report, equal_strict, equal_values as values_eq};
use crate::ordering::compare;
use crate::probe::TryAcquire;
use crate::project::project;
use crate::report::{fail_usage, fail_violation};
use crate::sequence::{is_ordered, OrderPolicy, OrderViolation};
use crate::value::{ToValue, Value};

// ─────────────────────────────────────────────────────────────────────────────
// Equality
// ─────────────────────────────────────────────────────────────────────────────

/// Asserts strict (identity-of-representation) equality.
///
/// ```
/// attest::checks::equal(123, 123);
/// ```
pub fn equal<E: ToValue, A: ToValue>(expected: E, actual: A) {
    equal_inner(&expected.to_value(), &actual.to_value(), None);
}

/// [`equal`] with a formatted context message.
pub fn equal_msg<E: ToValue, A: ToValue>(expected: E, actual: A, msg: fmt::Arguments<'_>) {
    equal_inner(&expected.to_value(), &actual.to_value(), Some(msg));
}

fn equal_inner(expected: &Value, actual: &Value, ctx: Option<fmt::Arguments<'_>>) {
    if !equal_strict(expected, actual) {
        fail_violation(unequal_message("Not equal", expected, actual), ctx);
    }
}

/// Asserts strict inequality.
pub fn not_equal<E: ToValue, A: ToValue>(expected: E, actual: A) {
    not_equal_inner(&expected.to_value(), &actual.to_value(), None);
}

/// [`not_equal`] with a formatted context message.
pub fn not_equal_msg<E: ToValue, A: ToValue>(expected: E, actual: A, msg: fmt::Arguments<'_>) {
    not_equal_inner(&expected.to_value(), &actual.to_value(), Some(msg));
}

fn not_equal_inner(expected: &Value, actual: &Value, ctx: Option<fmt::Arguments<'_>>) {
    if equal_strict(expected, actual) {
        fail_violation(format!("Should not be: {}", actual.render()), ctx);
    }
}

/// Asserts type-coercing equality: `123u32` equals `123i64` here, and byte
/// sequences equal strings with the same content.
pub fn equal_values<E: ToValue, A: ToValue>(expected: E, actual: A) {
    equal_values_inner(&expected.to_value(), &actual.to_value(), None);
}

/// [`equal_values`] with a formatted context message.
pub fn equal_values_msg<E: ToValue, A: ToValue>(expected: E, actual: A, msg: fmt::Arguments<'_>) {
    equal_values_inner(&expected.to_value(), &actual.to_value(), Some(msg));
}

fn equal_values_inner(expected: &Value, actual: &Value, ctx: Option<fmt::Arguments<'_>>) {
    if !values_eq(expected, actual) {
        fail_violation(unequal_message("Not equal values", expected, actual), ctx);
    }
}

/// Asserts that two values differ even after type coercion.
pub fn not_equal_values<E: ToValue, A: ToValue>(expected: E, actual: A) {
    not_equal_values_inner(&expected.to_value(), &actual.to_value(), None);
}

/// [`not_equal_values`] with a formatted context message.
pub fn not_equal_values_msg<E: ToValue, A: ToValue>(
    expected: E,
    actual: A,
    msg: fmt::Arguments<'_>,
) {
    not_equal_values_inner(&expected.to_value(), &actual.to_value(), Some(msg));
}

fn not_equal_values_inner(expected: &Value, actual: &Value, ctx: Option<fmt::Arguments<'_>>) {
    if values_eq(expected, actual) {
        fail_violation(
            format!("Should not be equal values: {}", actual.render()),
            ctx,
        );
    }
}

/// Asserts strict equality over the exported-field projections of both
/// operands: implementation-private record fields are ignored.
pub fn equal_exported<E: ToValue, A: ToValue>(expected: E, actual: A) {
    equal_exported_inner(&expected.to_value(), &actual.to_value(), None);
}

/// [`equal_exported`] with a formatted context message.
pub fn equal_exported_msg<E: ToValue, A: ToValue>(expected: E, actual: A, msg: fmt::Arguments<'_>) {
    equal_exported_inner(&expected.to_value(), &actual.to_value(), Some(msg));
}

fn equal_exported_inner(expected: &Value, actual: &Value, ctx: Option<fmt::Arguments<'_>>) {
    let (pe, pa) = (project(expected), project(actual));
    if !equal_strict(&pe, &pa) {
        fail_violation(
            unequal_message("Not equal (comparing only exported fields)", &pe, &pa),
            ctx,
        );
    }
}

fn unequal_message(headline: &str, expected: &Value, actual: &Value) -> String {
    let mut msg = format!(
        "{headline}: \n expected: {}\n actual  : {}",
        expected.render(),
        actual.render()
    );
    if let Some(diff) = diff_report(expected, actual) {
        msg.push_str("\n\n");
        msg.push_str(&diff);
    }
    msg
}

// ─────────────────────────────────────────────────────────────────────────────
// Ordering
// ─────────────────────────────────────────────────────────────────────────────

/// Asserts `left > right` within their common comparison category.
///
/// ```
/// attest::checks::greater(2, 1);
/// attest::checks::greater("b", "a");
/// ```
pub fn greater<L: ToValue, R: ToValue>(left: L, right: R) {
    check_order(
        &left.to_value(),
        &right.to_value(),
        &[Ordering::Greater],
        "is not greater than",
        None,
    );
}

/// [`greater`] with a formatted context message.
pub fn greater_msg<L: ToValue, R: ToValue>(left: L, right: R, msg: fmt::Arguments<'_>) {
    check_order(
        &left.to_value(),
        &right.to_value(),
        &[Ordering::Greater],
        "is not greater than",
        Some(msg),
    );
}

/// Asserts `left >= right`.
pub fn greater_or_equal<L: ToValue, R: ToValue>(left: L, right: R) {
    check_order(
        &left.to_value(),
        &right.to_value(),
        &[Ordering::Greater, Ordering::Equal],
        "is not greater than or equal to",
        None,
    );
}

/// [`greater_or_equal`] with a formatted context message.
pub fn greater_or_equal_msg<L: ToValue, R: ToValue>(left: L, right: R, msg: fmt::Arguments<'_>) {
    check_order(
        &left.to_value(),
        &right.to_value(),
        &[Ordering::Greater, Ordering::Equal],
        "is not greater than or equal to",
        Some(msg),
    );
}

/// Asserts `left < right`.
pub fn less<L: ToValue, R: ToValue>(left: L, right: R) {
    check_order(
        &left.to_value(),
        &right.to_value(),
        &[Ordering::Less],
        "is not less than",
        None,
    );
}

/// [`less`] with a formatted context message.
pub fn less_msg<L: ToValue, R: ToValue>(left: L, right: R, msg: fmt::Arguments<'_>) {
    check_order(
        &left.to_value(),
        &right.to_value(),
        &[Ordering::Less],
        "is not less than",
        Some(msg),
    );
}

/// Asserts `left <= right`.
pub fn less_or_equal<L: ToValue, R: ToValue>(left: L, right: R) {
    check_order(
        &left.to_value(),
        &right.to_value(),
        &[Ordering::Less, Ordering::Equal],
        "is not less than or equal to",
        None,
    );
}

/// [`less_or_equal`] with a formatted context message.
pub fn less_or_equal_msg<L: ToValue, R: ToValue>(left: L, right: R, msg: fmt::Arguments<'_>) {
    check_order(
        &left.to_value(),
        &right.to_value(),
        &[Ordering::Less, Ordering::Equal],
        "is not less than or equal to",
        Some(msg),
    );
}

/// Asserts that a numeric value is strictly positive.
pub fn positive<T: ToValue>(value: T) {
    check_sign(&value.to_value(), Ordering::Greater, "is not positive", None);
}

/// [`positive`] with a formatted context message.
pub fn positive_msg<T: ToValue>(value: T, msg: fmt::Arguments<'_>) {
    check_sign(
        &value.to_value(),
        Ordering::Greater,
        "is not positive",
        Some(msg),
    );
}

/// Asserts that a numeric value is strictly negative.
pub fn negative<T: ToValue>(value: T) {
    check_sign(&value.to_value(), Ordering::Less, "is not negative", None);
}

/// [`negative`] with a formatted context message.
pub fn negative_msg<T: ToValue>(value: T, msg: fmt::Arguments<'_>) {
    check_sign(
        &value.to_value(),
        Ordering::Less,
        "is not negative",
        Some(msg),
    );
}

fn check_order(
    left: &Value,
    right: &Value,
    allowed: &[Ordering],
    phrase: &'static str,
    ctx: Option<fmt::Arguments<'_>>,
) {
    match compare(left, right) {
        Err(err) => fail_usage(err.to_string(), ctx),
        Ok(ord) if !allowed.contains(&ord) => fail_violation(
            format!("\"{}\" {phrase} \"{}\"", left.render(), right.render()),
            ctx,
        ),
        Ok(_) => {}
    }
}

fn check_sign(
    value: &Value,
    wanted: Ordering,
    phrase: &'static str,
    ctx: Option<fmt::Arguments<'_>>,
) {
    let Some(zero) = zero_like(value) else {
        fail_usage(
            format!("cannot test the sign of type \"{}\"", value.type_label()),
            ctx,
        );
    };
    match compare(value, &zero) {
        Err(err) => fail_usage(err.to_string(), ctx),
        Ok(ord) if ord != wanted => {
            fail_violation(format!("\"{}\" {phrase}", value.render()), ctx);
        }
        Ok(_) => {}
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sequence ordering
// ─────────────────────────────────────────────────────────────────────────────

/// Asserts that a sequence is strictly increasing.
///
/// ```
/// attest::checks::increasing(&[1, 2, 3]);
/// ```
pub fn increasing<T: ToValue>(sequence: &[T]) {
    check_sequence(sequence, OrderPolicy::Increasing, None);
}

/// [`increasing`] with a formatted context message.
pub fn increasing_msg<T: ToValue>(sequence: &[T], msg: fmt::Arguments<'_>) {
    check_sequence(sequence, OrderPolicy::Increasing, Some(msg));
}

/// Asserts that a sequence is strictly decreasing.
pub fn decreasing<T: ToValue>(sequence: &[T]) {
    check_sequence(sequence, OrderPolicy::Decreasing, None);
}

/// [`decreasing`] with a formatted context message.
pub fn decreasing_msg<T: ToValue>(sequence: &[T], msg: fmt::Arguments<'_>) {
    check_sequence(sequence, OrderPolicy::Decreasing, Some(msg));
}

/// Asserts that a sequence never decreases (adjacent pairs are `<=`).
pub fn non_decreasing<T: ToValue>(sequence: &[T]) {
    check_sequence(sequence, OrderPolicy::NonDecreasing, None);
}

/// [`non_decreasing`] with a formatted context message.
pub fn non_decreasing_msg<T: ToValue>(sequence: &[T], msg: fmt::Arguments<'_>) {
    check_sequence(sequence, OrderPolicy::NonDecreasing, Some(msg));
}

/// Asserts that a sequence never increases (adjacent pairs are `>=`).
pub fn non_increasing<T: ToValue>(sequence: &[T]) {
    check_sequence(sequence, OrderPolicy::NonIncreasing, None);
}

/// [`non_increasing`] with a formatted context message.
pub fn non_increasing_msg<T: ToValue>(sequence: &[T], msg: fmt::Arguments<'_>) {
    check_sequence(sequence, OrderPolicy::NonIncreasing, Some(msg));
}

fn check_sequence<T: ToValue>(
    sequence: &[T],
    policy: OrderPolicy,
    ctx: Option<fmt::Arguments<'_>>,
) {
    let values: Vec<Value> = sequence.iter().map(ToValue::to_value).collect();
    match is_ordered(&values, policy) {
        Ok(()) => {}
        Err(err @ OrderViolation::Incomparable { .. }) => fail_usage(err.to_string(), ctx),
        Err(err @ OrderViolation::NotOrdered { .. }) => fail_violation(err.to_string(), ctx),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Containment
// ─────────────────────────────────────────────────────────────────────────────

/// Asserts that a container holds an element: substring for strings,
/// element scan for sequences, key presence for maps.
///
/// ```
/// attest::checks::contains("Hello World", "World");
/// attest::checks::contains(&["Hello", "World"][..], "World");
/// ```
pub fn contains<C: ToValue, E: ToValue>(container: C, element: E) {
    contains_inner(&container.to_value(), &element.to_value(), None);
}

/// [`contains`] with a formatted context message.
pub fn contains_msg<C: ToValue, E: ToValue>(container: C, element: E, msg: fmt::Arguments<'_>) {
    contains_inner(&container.to_value(), &element.to_value(), Some(msg));
}

fn contains_inner(container: &Value, element: &Value, ctx: Option<fmt::Arguments<'_>>) {
    match container::contains(container, element) {
        Err(err) => fail_usage(err.to_string(), ctx),
        Ok(false) => fail_violation(
            format!("{} does not contain {}", container.render(), element.render()),
            ctx,
        ),
        Ok(true) => {}
    }
}

/// Asserts that a container does not hold an element. An unsupported
/// container is still a usage error, not a pass.
pub fn not_contains<C: ToValue, E: ToValue>(container: C, element: E) {
    not_contains_inner(&container.to_value(), &element.to_value(), None);
}

/// [`not_contains`] with a formatted context message.
pub fn not_contains_msg<C: ToValue, E: ToValue>(container: C, element: E, msg: fmt::Arguments<'_>) {
    not_contains_inner(&container.to_value(), &element.to_value(), Some(msg));
}

fn not_contains_inner(container: &Value, element: &Value, ctx: Option<fmt::Arguments<'_>>) {
    match container::contains(container, element) {
        Err(err) => fail_usage(err.to_string(), ctx),
        Ok(true) => fail_violation(
            format!(
                "{} should not contain {}",
                container.render(),
                element.render()
            ),
            ctx,
        ),
        Ok(false) => {}
    }
}

/// Asserts that every element of `candidate` appears in `list`, duplicates
/// counted. For maps, checks key presence only.
pub fn subset<L: ToValue, S: ToValue>(list: L, candidate: S) {
    subset_inner(&list.to_value(), &candidate.to_value(), None);
}

/// [`subset`] with a formatted context message.
pub fn subset_msg<L: ToValue, S: ToValue>(list: L, candidate: S, msg: fmt::Arguments<'_>) {
    subset_inner(&list.to_value(), &candidate.to_value(), Some(msg));
}

fn subset_inner(list: &Value, candidate: &Value, ctx: Option<fmt::Arguments<'_>>) {
    match container::subset(list, candidate) {
        Err(err) => fail_usage(err.to_string(), ctx),
        Ok(false) => fail_violation(
            format!("{} does not contain {}", list.render(), candidate.render()),
            ctx,
        ),
        Ok(true) => {}
    }
}

/// Asserts that `candidate` is not a subset of `list`.
pub fn not_subset<L: ToValue, S: ToValue>(list: L, candidate: S) {
    not_subset_inner(&list.to_value(), &candidate.to_value(), None);
}

/// [`not_subset`] with a formatted context message.
pub fn not_subset_msg<L: ToValue, S: ToValue>(list: L, candidate: S, msg: fmt::Arguments<'_>) {
    not_subset_inner(&list.to_value(), &candidate.to_value(), Some(msg));
}

fn not_subset_inner(list: &Value, candidate: &Value, ctx: Option<fmt::Arguments<'_>>) {
    match container::subset(list, candidate) {
        Err(err) => fail_usage(err.to_string(), ctx),
        Ok(true) => fail_violation(
            format!("{} is a subset of {}", candidate.render(), list.render()),
            ctx,
        ),
        Ok(false) => {}
    }
}

/// Asserts that two sequences hold the same multiset of elements, order
/// ignored and duplicates counted. The failure message lists the surplus
/// elements on each side.
pub fn elements_match<L: ToValue, R: ToValue>(left: L, right: R) {
    elements_match_inner(&left.to_value(), &right.to_value(), None);
}

/// [`elements_match`] with a formatted context message.
pub fn elements_match_msg<L: ToValue, R: ToValue>(left: L, right: R, msg: fmt::Arguments<'_>) {
    elements_match_inner(&left.to_value(), &right.to_value(), Some(msg));
}

fn elements_match_inner(left: &Value, right: &Value, ctx: Option<fmt::Arguments<'_>>) {
    match container::elements_match(left, right) {
        Err(err) => fail_usage(err.to_string(), ctx),
        Ok((true, _)) => {}
        Ok((false, diff)) => {
            let mut msg = String::from("elements differ");
            if !diff.only_in_left.is_empty() {
                msg.push_str("\n\nextra elements in left:\n");
                msg.push_str(&Value::Seq(diff.only_in_left).render());
            }
            if !diff.only_in_right.is_empty() {
                msg.push_str("\n\nextra elements in right:\n");
                msg.push_str(&Value::Seq(diff.only_in_right).render());
            }
            fail_violation(msg, ctx);
        }
    }
}

/// Asserts that two sequences do *not* hold the same multiset of elements.
pub fn not_elements_match<L: ToValue, R: ToValue>(left: L, right: R) {
    not_elements_match_inner(&left.to_value(), &right.to_value(), None);
}

/// [`not_elements_match`] with a formatted context message.
pub fn not_elements_match_msg<L: ToValue, R: ToValue>(left: L, right: R, msg: fmt::Arguments<'_>) {
    not_elements_match_inner(&left.to_value(), &right.to_value(), Some(msg));
}

fn not_elements_match_inner(left: &Value, right: &Value, ctx: Option<fmt::Arguments<'_>>) {
    match container::elements_match(left, right) {
        Err(err) => fail_usage(err.to_string(), ctx),
        Ok((true, _)) => fail_violation(
            format!(
                "{} and {} hold the same multiset of elements",
                left.render(),
                right.render()
            ),
            ctx,
        ),
        Ok((false, _)) => {}
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lock state
// ─────────────────────────────────────────────────────────────────────────────

/// Asserts that a lock is currently held.
///
/// Probes with a non-blocking acquisition; if the probe acquires the lock it
/// is released (guard drop) before the failure is reported, so the lock is
/// always restored to the state it was found in. Best-effort under
/// concurrency.
pub fn locked<L: TryAcquire>(lock: &L) {
    locked_inner(lock, None);
}

/// [`locked`] with a formatted context message.
pub fn locked_msg<L: TryAcquire>(lock: &L, msg: fmt::Arguments<'_>) {
    locked_inner(lock, Some(msg));
}

fn locked_inner<L: TryAcquire>(lock: &L, ctx: Option<fmt::Arguments<'_>>) {
    if let Some(guard) = lock.try_acquire() {
        drop(guard);
        fail_violation("Expected lock to be held, but it was free".to_owned(), ctx);
    }
}

/// Asserts that a lock is currently free. The probe's guard is dropped
/// immediately on success.
pub fn unlocked<L: TryAcquire>(lock: &L) {
    unlocked_inner(lock, None);
}

/// [`unlocked`] with a formatted context message.
pub fn unlocked_msg<L: TryAcquire>(lock: &L, msg: fmt::Arguments<'_>) {
    unlocked_inner(lock, Some(msg));
}

fn unlocked_inner<L: TryAcquire>(lock: &L, ctx: Option<fmt::Arguments<'_>>) {
    match lock.try_acquire() {
        Some(guard) => drop(guard),
        None => fail_violation("Expected lock to be free, but it was held".to_owned(), ctx),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Emptiness, length, zero
// ─────────────────────────────────────────────────────────────────────────────

/// Asserts that a value is empty: zero-length for strings, bytes, sequences
/// and maps; the zero value for scalars.
pub fn empty<T: ToValue>(value: T) {
    empty_inner(&value.to_value(), None);
}

/// [`empty`] with a formatted context message.
pub fn empty_msg<T: ToValue>(value: T, msg: fmt::Arguments<'_>) {
    empty_inner(&value.to_value(), Some(msg));
}

fn empty_inner(value: &Value, ctx: Option<fmt::Arguments<'_>>) {
    if !is_empty_value(value) {
        fail_violation(format!("Should be empty, but was {}", value.render()), ctx);
    }
}

/// Asserts that a value is not empty.
pub fn not_empty<T: ToValue>(value: T) {
    not_empty_inner(&value.to_value(), None);
}

/// [`not_empty`] with a formatted context message.
pub fn not_empty_msg<T: ToValue>(value: T, msg: fmt::Arguments<'_>) {
    not_empty_inner(&value.to_value(), Some(msg));
}

fn not_empty_inner(value: &Value, ctx: Option<fmt::Arguments<'_>>) {
    if is_empty_value(value) {
        fail_violation(
            format!("Should NOT be empty, but was {}", value.render()),
            ctx,
        );
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value.unshared() {
        Value::Str(s) => s.is_empty(),
        Value::Bytes(b) => b.is_empty(),
        Value::Seq(items) => items.is_empty(),
        Value::Map(pairs) => pairs.is_empty(),
        Value::Bool(b) => !b,
        Value::Instant(t) => *t == SystemTime::UNIX_EPOCH,
        Value::Record(r) => r.fields.iter().all(|f| is_empty_value(&f.value)),
        // Behavior-carrying and opaque values are never empty.
        Value::Func { .. } | Value::Opaque { .. } => false,
        numeric_or_shared => zero_like(numeric_or_shared)
            .is_some_and(|zero| values_eq(numeric_or_shared, &zero)),
    }
}

/// Asserts that a measurable container (string, bytes, sequence, map) has
/// exactly `expected` elements.
pub fn length<C: ToValue>(container: C, expected: usize) {
    length_inner(&container.to_value(), expected, None);
}

/// [`length`] with a formatted context message.
pub fn length_msg<C: ToValue>(container: C, expected: usize, msg: fmt::Arguments<'_>) {
    length_inner(&container.to_value(), expected, Some(msg));
}

fn length_inner(container: &Value, expected: usize, ctx: Option<fmt::Arguments<'_>>) {
    let Some(len) = len_of(container) else {
        fail_usage(
            format!(
                "\"{}\" could not be applied builtin len()",
                container.type_label()
            ),
            ctx,
        );
    };
    if len != expected {
        fail_violation(
            format!(
                "{} should have {expected} item(s), but has {len}",
                container.render()
            ),
            ctx,
        );
    }
}

fn len_of(value: &Value) -> Option<usize> {
    match value.unshared() {
        Value::Str(s) => Some(s.len()),
        Value::Bytes(b) => Some(b.len()),
        Value::Seq(items) => Some(items.len()),
        Value::Map(pairs) => Some(pairs.len()),
        _ => None,
    }
}

/// Asserts that a scalar equals its zero value (`0`, `0.0`, `""`, `false`,
/// empty bytes, the epoch instant).
pub fn zero<T: ToValue>(value: T) {
    zero_inner(&value.to_value(), false, None);
}

/// [`zero`] with a formatted context message.
pub fn zero_msg<T: ToValue>(value: T, msg: fmt::Arguments<'_>) {
    zero_inner(&value.to_value(), false, Some(msg));
}

/// Asserts that a scalar does not equal its zero value.
pub fn not_zero<T: ToValue>(value: T) {
    zero_inner(&value.to_value(), true, None);
}

/// [`not_zero`] with a formatted context message.
pub fn not_zero_msg<T: ToValue>(value: T, msg: fmt::Arguments<'_>) {
    zero_inner(&value.to_value(), true, Some(msg));
}

fn zero_inner(value: &Value, negated: bool, ctx: Option<fmt::Arguments<'_>>) {
    let is_zero = match value.unshared() {
        Value::Str(s) => s.is_empty(),
        Value::Bytes(b) => b.is_empty(),
        Value::Bool(b) => !b,
        Value::Instant(t) => *t == SystemTime::UNIX_EPOCH,
        scalar => match zero_like(scalar) {
            Some(z) => equal_strict(scalar, &z),
            None => fail_usage(
                format!("cannot test type \"{}\" for zero", value.type_label()),
                ctx,
            ),
        },
    };
    if is_zero && negated {
        fail_violation(format!("Should not be zero, but was {}", value.render()), ctx);
    }
    if !is_zero && !negated {
        fail_violation(format!("Should be zero, but was {}", value.render()), ctx);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric closeness
// ─────────────────────────────────────────────────────────────────────────────

/// Asserts that two numerics differ by at most `delta` (absolute).
///
/// ```
/// attest::checks::in_delta(1.0, 1.01, 0.02);
/// ```
pub fn in_delta<E: ToValue, A: ToValue>(expected: E, actual: A, delta: f64) {
    in_delta_inner(&expected.to_value(), &actual.to_value(), delta, None);
}

/// [`in_delta`] with a formatted context message.
pub fn in_delta_msg<E: ToValue, A: ToValue>(
    expected: E,
    actual: A,
    delta: f64,
    msg: fmt::Arguments<'_>,
) {
    in_delta_inner(&expected.to_value(), &actual.to_value(), delta, Some(msg));
}

fn in_delta_inner(expected: &Value, actual: &Value, delta: f64, ctx: Option<fmt::Arguments<'_>>) {
    let (Some(ef), Some(af)) = (to_f64(expected), to_f64(actual)) else {
        fail_usage("Parameters must be numerical".to_owned(), ctx);
    };
    if ef.is_nan() && af.is_nan() {
        return;
    }
    if ef.is_nan() {
        fail_usage("Expected must not be NaN".to_owned(), ctx);
    }
    if af.is_nan() {
        fail_usage("Actual must not be NaN".to_owned(), ctx);
    }
    let dt = (ef - af).abs();
    if dt > delta {
        fail_violation(
            format!(
                "Max difference between {ef} and {af} allowed is {delta}, but difference was {dt}"
            ),
            ctx,
        );
    }
}

/// Asserts that `actual` is within relative error `epsilon` of `expected`.
pub fn in_epsilon<E: ToValue, A: ToValue>(expected: E, actual: A, epsilon: f64) {
    in_epsilon_inner(&expected.to_value(), &actual.to_value(), epsilon, None);
}

/// [`in_epsilon`] with a formatted context message.
pub fn in_epsilon_msg<E: ToValue, A: ToValue>(
    expected: E,
    actual: A,
    epsilon: f64,
    msg: fmt::Arguments<'_>,
) {
    in_epsilon_inner(&expected.to_value(), &actual.to_value(), epsilon, Some(msg));
}

fn in_epsilon_inner(
    expected: &Value,
    actual: &Value,
    epsilon: f64,
    ctx: Option<fmt::Arguments<'_>>,
) {
    if epsilon.is_nan() {
        fail_usage("epsilon must not be NaN".to_owned(), ctx);
    }
    let (Some(ef), Some(af)) = (to_f64(expected), to_f64(actual)) else {
        fail_usage("Parameters must be numerical".to_owned(), ctx);
    };
    if ef == 0.0 {
        fail_usage(
            "expected must have a value other than zero to calculate the relative error".to_owned(),
            ctx,
        );
    }
    let rel = ((ef - af) / ef).abs();
    if rel.is_nan() {
        fail_usage("Actual must not be NaN".to_owned(), ctx);
    }
    if rel > epsilon {
        fail_violation(
            format!("Relative error is too high: {epsilon} (expected) < {rel} (actual)"),
            ctx,
        );
    }
}

/// Asserts that two instants are within `delta` of each other.
pub fn within_duration(expected: SystemTime, actual: SystemTime, delta: Duration) {
    within_duration_inner(expected, actual, delta, None);
}

/// [`within_duration`] with a formatted context message.
pub fn within_duration_msg(
    expected: SystemTime,
    actual: SystemTime,
    delta: Duration,
    msg: fmt::Arguments<'_>,
) {
    within_duration_inner(expected, actual, delta, Some(msg));
}

fn within_duration_inner(
    expected: SystemTime,
    actual: SystemTime,
    delta: Duration,
    ctx: Option<fmt::Arguments<'_>>,
) {
    let diff = expected
        .duration_since(actual)
        .unwrap_or_else(|earlier| earlier.duration());
    if diff > delta {
        fail_violation(
            format!(
                "Max difference between {expected:?} and {actual:?} allowed is {delta:?}, but difference was {diff:?}"
            ),
            ctx,
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Results and booleans
// ─────────────────────────────────────────────────────────────────────────────

/// Asserts that a result is `Ok`.
///
/// ```
/// let parsed: Result<i32, _> = "42".parse();
/// attest::checks::ok(&parsed);
/// ```
pub fn ok<T, E: fmt::Display>(result: &Result<T, E>) {
    ok_inner(result, None);
}

/// [`ok`] with a formatted context message.
pub fn ok_msg<T, E: fmt::Display>(result: &Result<T, E>, msg: fmt::Arguments<'_>) {
    ok_inner(result, Some(msg));
}

fn ok_inner<T, E: fmt::Display>(result: &Result<T, E>, ctx: Option<fmt::Arguments<'_>>) {
    if let Err(e) = result {
        fail_violation(format!("Received unexpected error:\n{e}"), ctx);
    }
}

/// Asserts that a result is `Err`.
pub fn err<T, E>(result: &Result<T, E>) {
    err_inner(result, None);
}

/// [`err`] with a formatted context message.
pub fn err_msg<T, E>(result: &Result<T, E>, msg: fmt::Arguments<'_>) {
    err_inner(result, Some(msg));
}

fn err_inner<T, E>(result: &Result<T, E>, ctx: Option<fmt::Arguments<'_>>) {
    if result.is_ok() {
        fail_violation("An error is expected but got ok".to_owned(), ctx);
    }
}

/// Asserts that a result is `Err` and its rendered message contains
/// `needle`.
pub fn err_contains<T, E: fmt::Display>(result: &Result<T, E>, needle: &str) {
    err_contains_inner(result, needle, None);
}

/// [`err_contains`] with a formatted context message.
pub fn err_contains_msg<T, E: fmt::Display>(
    result: &Result<T, E>,
    needle: &str,
    msg: fmt::Arguments<'_>,
) {
    err_contains_inner(result, needle, Some(msg));
}

fn err_contains_inner<T, E: fmt::Display>(
    result: &Result<T, E>,
    needle: &str,
    ctx: Option<fmt::Arguments<'_>>,
) {
    match result {
        Ok(_) => fail_violation("An error is expected but got ok".to_owned(), ctx),
        Err(e) => {
            let rendered = e.to_string();
            if !rendered.contains(needle) {
                fail_violation(
                    format!("Error {rendered:?} does not contain {needle:?}"),
                    ctx,
                );
            }
        }
    }
}

/// Asserts that a condition is true.
pub fn is_true(value: bool) {
    is_true_inner(value, None);
}

/// [`is_true`] with a formatted context message.
pub fn is_true_msg(value: bool, msg: fmt::Arguments<'_>) {
    is_true_inner(value, Some(msg));
}

fn is_true_inner(value: bool, ctx: Option<fmt::Arguments<'_>>) {
    if !value {
        fail_violation("Should be true".to_owned(), ctx);
    }
}

/// Asserts that a condition is false.
pub fn is_false(value: bool) {
    is_false_inner(value, None);
}

/// [`is_false`] with a formatted context message.
pub fn is_false_msg(value: bool, msg: fmt::Arguments<'_>) {
    is_false_inner(value, Some(msg));
}

fn is_false_inner(value: bool, ctx: Option<fmt::Arguments<'_>>) {
    if value {
        fail_violation("Should be false".to_owned(), ctx);
    }
}

/// Reports an unconditional assertion failure.
pub fn fail(message: &str) {
    fail_violation(message.to_owned(), None);
}

/// [`fail`] with a formatted context message.
pub fn fail_msg(message: &str, msg: fmt::Arguments<'_>) {
    fail_violation(message.to_owned(), Some(msg));
}
