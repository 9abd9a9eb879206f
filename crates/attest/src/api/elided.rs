// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Checks-elided strategy: signature-identical no-ops.
//!
//! Every function here accepts the same arguments as its
//! [`checked`](super::checked) counterpart and unconditionally does nothing:
//! no value conversion, no category dispatch, no comparison, and no path to
//! the fail/report collaborator — for any input, including deliberately
//! invalid ones. This is the performance contract of the elided build mode,
//! and it is a tested property, not an absence of code.

use std::fmt;
use std::time::{Duration, SystemTime};

use crate::probe::TryAcquire;
use crate::value::ToValue;

/// No-op; see [`checked::equal`](super::checked::equal).
pub fn equal<E: ToValue, A: ToValue>(_expected: E, _actual: A) {}

/// No-op; see [`checked::equal_msg`](super::checked::equal_msg).
pub fn equal_msg<E: ToValue, A: ToValue>(_expected: E, _actual: A, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::not_equal`](super::checked::not_equal).
pub fn not_equal<E: ToValue, A: ToValue>(_expected: E, _actual: A) {}

/// No-op; see [`checked::not_equal_msg`](super::checked::not_equal_msg).
pub fn not_equal_msg<E: ToValue, A: ToValue>(_expected: E, _actual: A, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::equal_values`](super::checked::equal_values).
pub fn equal_values<E: ToValue, A: ToValue>(_expected: E, _actual: A) {}

/// No-op; see [`checked::equal_values_msg`](super::checked::equal_values_msg).
pub fn equal_values_msg<E: ToValue, A: ToValue>(_expected: E, _actual: A, _msg: fmt::Arguments<'_>) {
}

/// No-op; see [`checked::not_equal_values`](super::checked::not_equal_values).
pub fn not_equal_values<E: ToValue, A: ToValue>(_expected: E, _actual: A) {}

/// No-op; see [`checked::not_equal_values_msg`](super::checked::not_equal_values_msg).
pub fn not_equal_values_msg<E: ToValue, A: ToValue>(
    _expected: E,
    _actual: A,
    _msg: fmt::Arguments<'_>,
) {
}

/// No-op; see [`checked::equal_exported`](super::checked::equal_exported).
pub fn equal_exported<E: ToValue, A: ToValue>(_expected: E, _actual: A) {}

/// No-op; see [`checked::equal_exported_msg`](super::checked::equal_exported_msg).
pub fn equal_exported_msg<E: ToValue, A: ToValue>(
    _expected: E,
    _actual: A,
    _msg: fmt::Arguments<'_>,
) {
}

/// No-op; see [`checked::greater`](super::checked::greater).
pub fn greater<L: ToValue, R: ToValue>(_left: L, _right: R) {}

/// No-op; see [`checked::greater_msg`](super::checked::greater_msg).
pub fn greater_msg<L: ToValue, R: ToValue>(_left: L, _right: R, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::greater_or_equal`](super::checked::greater_or_equal).
pub fn greater_or_equal<L: ToValue, R: ToValue>(_left: L, _right: R) {}

/// No-op; see [`checked::greater_or_equal_msg`](super::checked::greater_or_equal_msg).
pub fn greater_or_equal_msg<L: ToValue, R: ToValue>(_left: L, _right: R, _msg: fmt::Arguments<'_>) {
}

/// No-op; see [`checked::less`](super::checked::less).
pub fn less<L: ToValue, R: ToValue>(_left: L, _right: R) {}

/// No-op; see [`checked::less_msg`](super::checked::less_msg).
pub fn less_msg<L: ToValue, R: ToValue>(_left: L, _right: R, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::less_or_equal`](super::checked::less_or_equal).
pub fn less_or_equal<L: ToValue, R: ToValue>(_left: L, _right: R) {}

/// No-op; see [`checked::less_or_equal_msg`](super::checked::less_or_equal_msg).
pub fn less_or_equal_msg<L: ToValue, R: ToValue>(_left: L, _right: R, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::positive`](super::checked::positive).
pub fn positive<T: ToValue>(_value: T) {}

/// No-op; see [`checked::positive_msg`](super::checked::positive_msg).
pub fn positive_msg<T: ToValue>(_value: T, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::negative`](super::checked::negative).
pub fn negative<T: ToValue>(_value: T) {}

/// No-op; see [`checked::negative_msg`](super::checked::negative_msg).
pub fn negative_msg<T: ToValue>(_value: T, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::increasing`](super::checked::increasing).
pub fn increasing<T: ToValue>(_sequence: &[T]) {}

/// No-op; see [`checked::increasing_msg`](super::checked::increasing_msg).
pub fn increasing_msg<T: ToValue>(_sequence: &[T], _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::decreasing`](super::checked::decreasing).
pub fn decreasing<T: ToValue>(_sequence: &[T]) {}

/// No-op; see [`checked::decreasing_msg`](super::checked::decreasing_msg).
pub fn decreasing_msg<T: ToValue>(_sequence: &[T], _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::non_decreasing`](super::checked::non_decreasing).
pub fn non_decreasing<T: ToValue>(_sequence: &[T]) {}

/// No-op; see [`checked::non_decreasing_msg`](super::checked::non_decreasing_msg).
pub fn non_decreasing_msg<T: ToValue>(_sequence: &[T], _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::non_increasing`](super::checked::non_increasing).
pub fn non_increasing<T: ToValue>(_sequence: &[T]) {}

/// No-op; see [`checked::non_increasing_msg`](super::checked::non_increasing_msg).
pub fn non_increasing_msg<T: ToValue>(_sequence: &[T], _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::contains`](super::checked::contains).
pub fn contains<C: ToValue, E: ToValue>(_container: C, _element: E) {}

/// No-op; see [`checked::contains_msg`](super::checked::contains_msg).
pub fn contains_msg<C: ToValue, E: ToValue>(_container: C, _element: E, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::not_contains`](super::checked::not_contains).
pub fn not_contains<C: ToValue, E: ToValue>(_container: C, _element: E) {}

/// No-op; see [`checked::not_contains_msg`](super::checked::not_contains_msg).
pub fn not_contains_msg<C: ToValue, E: ToValue>(
    _container: C,
    _element: E,
    _msg: fmt::Arguments<'_>,
) {
}

/// No-op; see [`checked::subset`](super::checked::subset).
pub fn subset<L: ToValue, S: ToValue>(_list: L, _candidate: S) {}

/// No-op; see [`checked::subset_msg`](super::checked::subset_msg).
pub fn subset_msg<L: ToValue, S: ToValue>(_list: L, _candidate: S, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::not_subset`](super::checked::not_subset).
pub fn not_subset<L: ToValue, S: ToValue>(_list: L, _candidate: S) {}

/// No-op; see [`checked::not_subset_msg`](super::checked::not_subset_msg).
pub fn not_subset_msg<L: ToValue, S: ToValue>(_list: L, _candidate: S, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::elements_match`](super::checked::elements_match).
pub fn elements_match<L: ToValue, R: ToValue>(_left: L, _right: R) {}

/// No-op; see [`checked::elements_match_msg`](super::checked::elements_match_msg).
pub fn elements_match_msg<L: ToValue, R: ToValue>(_left: L, _right: R, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::not_elements_match`](super::checked::not_elements_match).
pub fn not_elements_match<L: ToValue, R: ToValue>(_left: L, _right: R) {}

/// No-op; see [`checked::not_elements_match_msg`](super::checked::not_elements_match_msg).
pub fn not_elements_match_msg<L: ToValue, R: ToValue>(
    _left: L,
    _right: R,
    _msg: fmt::Arguments<'_>,
) {
}

/// No-op; see [`checked::locked`](super::checked::locked).
pub fn locked<L: TryAcquire>(_lock: &L) {}

/// No-op; see [`checked::locked_msg`](super::checked::locked_msg).
pub fn locked_msg<L: TryAcquire>(_lock: &L, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::unlocked`](super::checked::unlocked).
pub fn unlocked<L: TryAcquire>(_lock: &L) {}

/// No-op; see [`checked::unlocked_msg`](super::checked::unlocked_msg).
pub fn unlocked_msg<L: TryAcquire>(_lock: &L, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::empty`](super::checked::empty).
pub fn empty<T: ToValue>(_value: T) {}

/// No-op; see [`checked::empty_msg`](super::checked::empty_msg).
pub fn empty_msg<T: ToValue>(_value: T, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::not_empty`](super::checked::not_empty).
pub fn not_empty<T: ToValue>(_value: T) {}

/// No-op; see [`checked::not_empty_msg`](super::checked::not_empty_msg).
pub fn not_empty_msg<T: ToValue>(_value: T, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::length`](super::checked::length).
pub fn length<C: ToValue>(_container: C, _expected: usize) {}

/// No-op; see [`checked::length_msg`](super::checked::length_msg).
pub fn length_msg<C: ToValue>(_container: C, _expected: usize, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::zero`](super::checked::zero).
pub fn zero<T: ToValue>(_value: T) {}

/// No-op; see [`checked::zero_msg`](super::checked::zero_msg).
pub fn zero_msg<T: ToValue>(_value: T, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::not_zero`](super::checked::not_zero).
pub fn not_zero<T: ToValue>(_value: T) {}

/// No-op; see [`checked::not_zero_msg`](super::checked::not_zero_msg).
pub fn not_zero_msg<T: ToValue>(_value: T, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::in_delta`](super::checked::in_delta).
pub fn in_delta<E: ToValue, A: ToValue>(_expected: E, _actual: A, _delta: f64) {}

/// No-op; see [`checked::in_delta_msg`](super::checked::in_delta_msg).
pub fn in_delta_msg<E: ToValue, A: ToValue>(
    _expected: E,
    _actual: A,
    _delta: f64,
    _msg: fmt::Arguments<'_>,
) {
}

/// No-op; see [`checked::in_epsilon`](super::checked::in_epsilon).
pub fn in_epsilon<E: ToValue, A: ToValue>(_expected: E, _actual: A, _epsilon: f64) {}

/// No-op; see [`checked::in_epsilon_msg`](super::checked::in_epsilon_msg).
pub fn in_epsilon_msg<E: ToValue, A: ToValue>(
    _expected: E,
    _actual: A,
    _epsilon: f64,
    _msg: fmt::Arguments<'_>,
) {
}

/// No-op; see [`checked::within_duration`](super::checked::within_duration).
pub fn within_duration(_expected: SystemTime, _actual: SystemTime, _delta: Duration) {}

/// No-op; see [`checked::within_duration_msg`](super::checked::within_duration_msg).
pub fn within_duration_msg(
    _expected: SystemTime,
    _actual: SystemTime,
    _delta: Duration,
    _msg: fmt::Arguments<'_>,
) {
}

/// No-op; see [`checked::ok`](super::checked::ok).
pub fn ok<T, E: fmt::Display>(_result: &Result<T, E>) {}

/// No-op; see [`checked::ok_msg`](super::checked::ok_msg).
pub fn ok_msg<T, E: fmt::Display>(_result: &Result<T, E>, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::err`](super::checked::err).
pub fn err<T, E>(_result: &Result<T, E>) {}

/// No-op; see [`checked::err_msg`](super::checked::err_msg).
pub fn err_msg<T, E>(_result: &Result<T, E>, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::err_contains`](super::checked::err_contains).
pub fn err_contains<T, E: fmt::Display>(_result: &Result<T, E>, _needle: &str) {}

/// No-op; see [`checked::err_contains_msg`](super::checked::err_contains_msg).
pub fn err_contains_msg<T, E: fmt::Display>(
    _result: &Result<T, E>,
    _needle: &str,
    _msg: fmt::Arguments<'_>,
) {
}

/// No-op; see [`checked::is_true`](super::checked::is_true).
pub fn is_true(_value: bool) {}

/// No-op; see [`checked::is_true_msg`](super::checked::is_true_msg).
pub fn is_true_msg(_value: bool, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::is_false`](super::checked::is_false).
pub fn is_false(_value: bool) {}

/// No-op; see [`checked::is_false_msg`](super::checked::is_false_msg).
pub fn is_false_msg(_value: bool, _msg: fmt::Arguments<'_>) {}

/// No-op; see [`checked::fail`](super::checked::fail).
pub fn fail(_message: &str) {}

/// No-op; see [`checked::fail_msg`](super::checked::fail_msg).
pub fn fail_msg(_message: &str, _msg: fmt::Arguments<'_>) {}
