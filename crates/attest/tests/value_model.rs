// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

//! The value model and the equality/projection engines through the public
//! API: strict vs coercing equality on composites, exported-field
//! projection, and shared-subtree handling.

use std::collections::HashMap;
use std::sync::Arc;

use attest::{equal_exported, equal_strict, equal_values, project, ToValue, Value};

#[test]
fn composite_equality_recurses_with_the_chosen_strength() {
    let narrow = [1u32, 2, 3].to_value();
    let wide = [1i64, 2, 3].to_value();
    assert!(equal_values(&narrow, &wide));
    assert!(!equal_strict(&narrow, &wide));

    let nested_a = Value::Map(vec![("k".to_value(), [1u8].to_value())]);
    let nested_b = Value::Map(vec![("k".to_value(), [1i64].to_value())]);
    assert!(equal_values(&nested_a, &nested_b));
    assert!(!equal_strict(&nested_a, &nested_b));
}

#[test]
fn record_equality_requires_identical_shape() {
    let a = Value::record("User").field("Name", "ada").build();
    let same = Value::record("User").field("Name", "ada").build();
    let other_type = Value::record("Admin").field("Name", "ada").build();
    assert!(equal_strict(&a, &same));
    assert!(!equal_strict(&a, &other_type));

    // Field visibility is part of strict shape identity.
    let private = Value::record("User").private("Name", "ada").build();
    assert!(!equal_strict(&a, &private));
}

#[test]
fn exported_comparison_sees_through_private_divergence() {
    let left = Value::record("Conn")
        .field("Addr", "10.0.0.1")
        .private("socket", Value::opaque("TcpStream"))
        .build();
    let right = Value::record("Conn")
        .field("Addr", "10.0.0.1")
        .private("socket", Value::opaque("TcpStream"))
        .build();

    // Opaque privates are never equal, so plain strict equality fails...
    assert!(!equal_strict(&left, &right));
    // ...but the exported views match.
    assert!(equal_exported(&left, &right));
}

#[test]
fn projection_of_a_shared_dag_stays_linear_and_shared() {
    let leaf = Arc::new(
        Value::record("Node")
            .field("Id", 1u64)
            .private("parent", 0u64)
            .build(),
    );
    let dag = Value::Seq(vec![
        Value::Shared(Arc::clone(&leaf)),
        Value::Shared(Arc::clone(&leaf)),
        Value::Shared(leaf),
    ]);

    let projected = project(&dag);
    let Value::Seq(items) = &projected else {
        panic!("projection should preserve the sequence shape");
    };
    let shared: Vec<&Arc<Value>> = items
        .iter()
        .map(|v| match v {
            Value::Shared(arc) => arc,
            other => panic!("expected shared item, got {other:?}"),
        })
        .collect();
    assert!(Arc::ptr_eq(shared[0], shared[1]));
    assert!(Arc::ptr_eq(shared[1], shared[2]));

    let want = Value::record("Node").field("Id", 1u64).build();
    assert!(equal_strict(shared[0].unshared(), &want));
}

#[test]
fn shared_and_owned_values_compare_transparently() {
    let owned = [1i32, 2].to_value();
    let shared = Value::Shared(Arc::new([1i32, 2].to_value()));
    assert!(equal_strict(&owned, &shared));
    assert!(equal_values(&shared, &[1u8, 2].to_value()));
}

#[test]
fn hash_maps_model_deterministically() {
    let mut a = HashMap::new();
    let mut b = HashMap::new();
    for (k, v) in [("x", 1i32), ("y", 2), ("z", 3)] {
        a.insert(k, v);
        b.insert(k, v);
    }
    let (va, vb) = (a.to_value(), b.to_value());
    // Same contents must model to the same pairs regardless of hash order.
    assert_eq!(va.render(), vb.render());
    assert!(equal_strict(&va, &vb));
}

#[test]
fn bytes_are_not_a_sequence_of_integers() {
    let bytes = Value::bytes(*b"\x01\x02");
    let seq = [1u8, 2].to_value();
    assert!(!equal_strict(&bytes, &seq));
    assert!(!equal_values(&bytes, &seq));
    assert_eq!(bytes.render(), "0x0102");
}
