// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Exported-field projector.
//!
//! Rebuilds a same-shape copy of a [`Value`] retaining only exported record
//! fields, recursing through records, sequences, maps, and shared subtrees.
//! Scalar leaves pass through unchanged.
//!
//! Shared subtrees are memoized by allocation address so projection is
//! linear in the number of distinct nodes and the sharing topology of the
//! input is preserved in the output. Owned `Value` trees cannot be cyclic by
//! construction; the memo map is what keeps DAG-shaped inputs from blowing
//! up into exponential work.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::value::{Field, Record, Value};

/// Projects a value down to its exported fields, recursively.
///
/// Projecting an already-fully-exported value yields a copy that is
/// strict-equal to the original.
pub fn project(value: &Value) -> Value {
    let mut memo: FxHashMap<*const Value, Arc<Value>> = FxHashMap::default();
    project_inner(value, &mut memo)
}

fn project_inner(value: &Value, memo: &mut FxHashMap<*const Value, Arc<Value>>) -> Value {
    match value {
        Value::Record(record) => Value::Record(Record {
            type_name: record.type_name,
            fields: record
                .fields
                .iter()
                .filter(|f| f.exported)
                .map(|f| Field {
                    name: f.name,
                    exported: true,
                    value: project_inner(&f.value, memo),
                })
                .collect(),
        }),
        Value::Seq(items) => {
            Value::Seq(items.iter().map(|v| project_inner(v, memo)).collect())
        }
        Value::Map(pairs) => Value::Map(
            pairs
                .iter()
                .map(|(k, v)| (project_inner(k, memo), project_inner(v, memo)))
                .collect(),
        ),
        Value::Shared(inner) => {
            let key = Arc::as_ptr(inner);
            if let Some(done) = memo.get(&key) {
                return Value::Shared(Arc::clone(done));
            }
            let projected = Arc::new(project_inner(inner, memo));
            memo.insert(key, Arc::clone(&projected));
            Value::Shared(projected)
        }
        leaf => leaf.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::equal_strict;
    use crate::value::ToValue;

    #[test]
    fn private_fields_are_dropped_at_every_depth() {
        let inner = Value::record("Inner").field("X", 1i32).private("y", 2i32);
        let outer = Value::record("Outer")
            .field("Inner", inner.build())
            .private("secret", "s")
            .build();

        let expected = Value::record("Outer")
            .field("Inner", Value::record("Inner").field("X", 1i32).build())
            .build();
        assert!(equal_strict(&project(&outer), &expected));
    }

    #[test]
    fn fully_exported_values_round_trip() {
        let v = Value::record("Point")
            .field("X", 1i32)
            .field("Y", [2i32, 3].to_value())
            .build();
        assert!(equal_strict(&project(&v), &v));
    }

    #[test]
    fn shared_subtrees_are_projected_once_and_stay_shared() {
        let shared = Arc::new(Value::record("S").field("X", 1i32).private("y", 2i32).build());
        let v = Value::Seq(vec![
            Value::Shared(Arc::clone(&shared)),
            Value::Shared(shared),
        ]);

        let projected = project(&v);
        let Value::Seq(items) = &projected else {
            panic!("expected sequence");
        };
        let (Value::Shared(a), Value::Shared(b)) = (&items[0], &items[1]) else {
            panic!("expected shared items");
        };
        assert!(Arc::ptr_eq(a, b));
        assert!(equal_strict(
            a.unshared(),
            &Value::record("S").field("X", 1i32).build()
        ));
    }
}
