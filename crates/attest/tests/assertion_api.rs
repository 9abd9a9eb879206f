// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

//! End-to-end behavior of the assertion surface: pass paths, violation
//! payloads, usage-error payloads, and the context-message plumbing.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, RwLock};
use std::time::{Duration, SystemTime};

use attest::{AssertionFailure, FailureKind, ToValue, Value};

/// Runs a closure that must fail an assertion and returns the typed payload.
fn capture(f: impl FnOnce()) -> AssertionFailure {
    let payload = catch_unwind(AssertUnwindSafe(f)).expect_err("check should have failed");
    payload
        .downcast_ref::<AssertionFailure>()
        .expect("panic payload should be an AssertionFailure")
        .clone()
}

#[test]
fn equal_passes_and_fails_strictly() {
    attest::equal!(123, 123);
    attest::equal!("abc", "abc");

    let failure = capture(|| attest::equal!(1, 2));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure.message.contains("Not equal"));
    assert!(failure.context.is_none());
}

#[test]
fn equal_is_width_sensitive_but_equal_values_coerces() {
    let failure = capture(|| attest::equal!(123u32, 123i64));
    assert_eq!(failure.kind, FailureKind::Violation);

    attest::equal_values!(123u32, 123i64);
    attest::equal_values!(123u8, 123.0f64);
    // Sign-aware: -1 never wraps into u64::MAX.
    attest::not_equal_values!(-1i64, u64::MAX);
}

#[test]
fn not_equal_reports_the_offending_value() {
    attest::not_equal!(1, 2);
    let failure = capture(|| attest::not_equal!("obj", "obj"));
    assert!(failure.message.contains("Should not be"));
}

#[test]
fn context_messages_are_carried_on_the_payload() {
    let failure = capture(|| attest::equal!(1, 2, "while merging shard {}", 7));
    assert_eq!(failure.context.as_deref(), Some("while merging shard 7"));
    assert!(failure.to_string().contains("Messages: while merging shard 7"));
}

#[test]
fn equal_exported_ignores_private_fields() {
    let expected = Value::record("Account")
        .field("Name", "ada")
        .private("cache", 1i32)
        .build();
    let actual = Value::record("Account")
        .field("Name", "ada")
        .private("cache", 2i32)
        .build();
    attest::equal_exported!(&expected, &actual);
    // Plain equal still sees the private divergence.
    let failure = capture(|| attest::equal!(&expected, &actual));
    assert_eq!(failure.kind, FailureKind::Violation);

    let renamed = Value::record("Account")
        .field("Name", "lovelace")
        .private("cache", 1i32)
        .build();
    let failure = capture(|| attest::equal_exported!(&expected, &renamed));
    assert!(failure.message.contains("comparing only exported fields"));
}

#[test]
fn order_checks_pass_within_a_category() {
    attest::greater!(2, 1);
    attest::greater_or_equal!(2, 2);
    attest::less!("a", "b");
    attest::less_or_equal!(1.0, 1.0);
    // Cross-width within a family promotes before comparing.
    attest::greater!(2u8, 1u64);
    attest::less!(2i8, 300i64);
}

#[test]
fn order_violations_quote_both_operands() {
    let failure = capture(|| attest::greater!(1, 2));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure.message.contains("\"1\" is not greater than \"2\""));

    let failure = capture(|| attest::less_or_equal!(3, 2));
    assert!(failure
        .message
        .contains("\"3\" is not less than or equal to \"2\""));
}

#[test]
fn cross_category_comparison_is_a_usage_error() {
    let failure = capture(|| attest::greater!("b", 1));
    assert_eq!(failure.kind, FailureKind::Usage);
    assert!(failure
        .message
        .contains("cannot compare type \"string\" and \"i32\""));
}

#[test]
fn booleans_are_not_ordered() {
    let failure = capture(|| attest::less!(false, true));
    assert_eq!(failure.kind, FailureKind::Usage);
}

#[test]
fn sign_checks_are_numeric_only() {
    attest::positive!(1);
    attest::positive!(0.5);
    attest::negative!(-3i64);

    let failure = capture(|| attest::positive!(0));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure.message.contains("is not positive"));

    let failure = capture(|| attest::negative!(0u32));
    assert!(failure.message.contains("is not negative"));

    let failure = capture(|| attest::positive!("five"));
    assert_eq!(failure.kind, FailureKind::Usage);
    assert!(failure
        .message
        .contains("cannot test the sign of type \"string\""));
}

#[test]
fn sequence_order_checks() {
    attest::increasing!(&[1, 2, 3]);
    attest::decreasing!(&[3, 2, 1]);
    attest::non_decreasing!(&[1, 1, 2]);
    attest::non_increasing!(&[2, 2, 1]);
    // Trivially ordered.
    attest::increasing!(&[5]);
    let none: [i32; 0] = [];
    attest::decreasing!(&none);

    let failure = capture(|| attest::increasing!(&[1, 1, 2]));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure.message.contains("\"1\" is not less than \"1\""));

    let failure = capture(|| attest::non_increasing!(&[2, 1, 3]));
    assert!(failure
        .message
        .contains("\"1\" is not greater than or equal to \"3\""));
}

#[test]
fn mixed_category_sequences_are_usage_errors() {
    let seq = [1i32.to_value(), "two".to_value()];
    let failure = capture(|| attest::increasing!(&seq));
    assert_eq!(failure.kind, FailureKind::Usage);
    assert!(failure.message.contains("at index 1"));
}

#[test]
fn containment_covers_strings_sequences_and_maps() {
    attest::contains!("Hello World", "World");
    attest::not_contains!("Hello World", "Earth");
    attest::contains!(vec![1, 2, 3], 2);
    attest::not_contains!(vec![1, 2, 3], 4);

    let map = Value::Map(vec![("Hello".to_value(), "World".to_value())]);
    attest::contains!(&map, "Hello");
    // Map containment is key presence, not value presence.
    attest::not_contains!(&map, "World");

    let failure = capture(|| attest::contains!(vec![1, 2, 3], 4));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure.message.contains("does not contain"));
}

#[test]
fn negated_containment_never_passes_on_misuse() {
    let failure = capture(|| attest::not_contains!("abc", 1));
    assert_eq!(failure.kind, FailureKind::Usage);
    assert!(failure
        .message
        .contains("cannot search a string for a value of type \"i32\""));

    let failure = capture(|| attest::not_contains!(5, 5));
    assert_eq!(failure.kind, FailureKind::Usage);
}

#[test]
fn subset_counts_duplicates() {
    attest::subset!(vec![1, 2, 3], vec![1, 2]);
    attest::subset!(vec![1, 2, 3], Vec::<i32>::new());
    attest::not_subset!(vec![1, 2, 3], vec![4]);
    // [1, 1] needs two 1s on the list side.
    attest::not_subset!(vec![1, 2, 3], vec![1, 1]);
    attest::subset!(vec![1, 1, 2], vec![1, 1]);

    let failure = capture(|| attest::subset!(vec![1, 2, 3], vec![1, 1]));
    assert_eq!(failure.kind, FailureKind::Violation);
}

#[test]
fn elements_match_lists_the_surplus_per_side() {
    attest::elements_match!(vec![1, 2, 3], vec![3, 1, 2]);
    attest::not_elements_match!(vec![1, 1, 2, 3], vec![1, 2, 3]);

    let failure = capture(|| attest::elements_match!(vec![1, 1, 2, 3], vec![1, 2, 3]));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure.message.contains("elements differ"));
    assert!(failure.message.contains("extra elements in left:\n[1]"));
    assert!(!failure.message.contains("extra elements in right"));
}

#[test]
fn lock_state_checks_probe_and_restore() {
    let mutex = Mutex::new(0);
    attest::unlocked!(&mutex);
    {
        let _held = mutex.lock().unwrap();
        attest::locked!(&mutex);
    }
    attest::unlocked!(&mutex);

    let failure = capture(|| attest::locked!(&mutex));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure
        .message
        .contains("Expected lock to be held, but it was free"));
    // The probe's acquisition was released before reporting.
    assert!(mutex.try_lock().is_ok());

    let rw = RwLock::new(0);
    let reader = rw.read().unwrap();
    // A live reader blocks write acquisition, so the lock counts as held.
    attest::locked!(&rw);
    let failure = capture(|| attest::unlocked!(&rw));
    assert!(failure
        .message
        .contains("Expected lock to be free, but it was held"));
    drop(reader);
    attest::unlocked!(&rw);
}

#[test]
fn emptiness_spans_containers_and_scalars() {
    attest::empty!("");
    attest::empty!(0);
    attest::empty!(false);
    attest::empty!(Vec::<i32>::new());
    attest::empty!(SystemTime::UNIX_EPOCH);
    attest::not_empty!("x");
    attest::not_empty!(vec![0]);
    attest::not_empty!(1u8);

    let failure = capture(|| attest::empty!(vec![1]));
    assert!(failure.message.contains("Should be empty, but was [1]"));
    let failure = capture(|| attest::not_empty!(""));
    assert!(failure.message.contains("Should NOT be empty"));
}

#[test]
fn a_record_is_empty_when_every_field_is() {
    let blank = Value::record("Point").field("X", 0).field("Y", 0).build();
    attest::empty!(&blank);
    let point = Value::record("Point").field("X", 0).field("Y", 2).build();
    attest::not_empty!(&point);
}

#[test]
fn length_applies_to_measurable_containers_only() {
    attest::length!("abc", 3);
    attest::length!(vec![1, 2], 2);
    attest::length!(Value::bytes(*b"ab"), 2);

    let failure = capture(|| attest::length!(vec![1, 2], 3));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure.message.contains("should have 3 item(s), but has 2"));

    let failure = capture(|| attest::length!(5, 1));
    assert_eq!(failure.kind, FailureKind::Usage);
    assert!(failure
        .message
        .contains("\"i32\" could not be applied builtin len()"));
}

#[test]
fn zero_checks_cover_every_scalar_kind() {
    attest::zero!(0);
    attest::zero!(0.0);
    attest::zero!("");
    attest::zero!(false);
    attest::zero!(SystemTime::UNIX_EPOCH);
    attest::not_zero!(7u16);
    attest::not_zero!("x");

    let failure = capture(|| attest::zero!(3));
    assert!(failure.message.contains("Should be zero, but was 3"));
    let failure = capture(|| attest::not_zero!(0.0));
    assert!(failure.message.contains("Should not be zero"));

    let failure = capture(|| attest::zero!(vec![1]));
    assert_eq!(failure.kind, FailureKind::Usage);
    assert!(failure
        .message
        .contains("cannot test type \"sequence\" for zero"));
}

#[test]
fn in_delta_measures_absolute_difference() {
    attest::in_delta!(1.0, 1.01, 0.02);
    attest::in_delta!(10, 11, 1.0);
    attest::in_delta!(f64::NAN, f64::NAN, 0.1);

    let failure = capture(|| attest::in_delta!(1.0, 2.0, 0.5));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure
        .message
        .contains("Max difference between 1 and 2 allowed is 0.5"));

    let failure = capture(|| attest::in_delta!(f64::NAN, 1.0, 0.5));
    assert_eq!(failure.kind, FailureKind::Usage);
    assert!(failure.message.contains("Expected must not be NaN"));

    let failure = capture(|| attest::in_delta!("a", 1.0, 0.5));
    assert_eq!(failure.kind, FailureKind::Usage);
    assert!(failure.message.contains("Parameters must be numerical"));
}

#[test]
fn in_epsilon_measures_relative_error() {
    attest::in_epsilon!(100.0, 101.0, 0.02);

    let failure = capture(|| attest::in_epsilon!(100.0, 110.0, 0.05));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure.message.contains("Relative error is too high"));

    let failure = capture(|| attest::in_epsilon!(0.0, 1.0, 0.1));
    assert_eq!(failure.kind, FailureKind::Usage);

    let failure = capture(|| attest::in_epsilon!(1.0, 1.0, f64::NAN));
    assert_eq!(failure.kind, FailureKind::Usage);
    assert!(failure.message.contains("epsilon must not be NaN"));
}

#[test]
fn within_duration_is_symmetric() {
    let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1000);
    let later = base + Duration::from_millis(500);
    attest::within_duration!(base, later, Duration::from_secs(1));
    attest::within_duration!(later, base, Duration::from_secs(1));

    let failure = capture(|| attest::within_duration!(base, later, Duration::from_millis(100)));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert!(failure.message.contains("Max difference between"));
}

#[test]
fn result_checks_render_the_error() {
    let good: Result<i32, String> = Ok(1);
    let bad: Result<i32, String> = Err("boom: out of fuel".to_owned());

    attest::ok!(&good);
    attest::err!(&bad);
    attest::err_contains!(&bad, "out of fuel");

    let failure = capture(|| attest::ok!(&bad));
    assert!(failure
        .message
        .contains("Received unexpected error:\nboom: out of fuel"));

    let failure = capture(|| attest::err!(&good));
    assert!(failure.message.contains("An error is expected but got ok"));

    let failure = capture(|| attest::err_contains!(&bad, "engine"));
    assert!(failure.message.contains("does not contain \"engine\""));
}

#[test]
fn boolean_checks_and_unconditional_failure() {
    attest::is_true!(1 + 1 == 2);
    attest::is_false!("a" == "b");

    let failure = capture(|| attest::is_true!(false));
    assert!(failure.message.contains("Should be true"));

    let failure = capture(|| attest::fail!("unreachable branch taken"));
    assert_eq!(failure.kind, FailureKind::Violation);
    assert_eq!(failure.message, "unreachable branch taken");

    let failure = capture(|| attest::fail!("bad state", "node {}", 3));
    assert_eq!(failure.context.as_deref(), Some("node 3"));
}

#[test]
fn the_elided_strategy_never_checks_anything() {
    use attest::api::elided;

    // Every call below would fail (or be a usage error) under the checked
    // strategy; the elided strategy must accept all of them silently.
    elided::equal(1, 2);
    elided::greater("b", 1);
    elided::positive("not a number");
    elided::length(5, 3);
    elided::in_delta(f64::NAN, 1.0, 0.5);
    elided::err_contains(&Ok::<i32, String>(1), "boom");
    elided::is_true(false);
    elided::fail("never reported");

    let held = Mutex::new(0);
    let _guard = held.lock().unwrap();
    elided::unlocked(&held);
}
