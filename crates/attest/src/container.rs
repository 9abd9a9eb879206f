// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Container and multiset comparison, built on the equality engine.
//!
//! Membership, subset, and order-blind multiset matching with duplicate
//! accounting. Unsupported container shapes are surfaced as
//! [`ContainerError`] — a usage error the assertion surface reports as
//! "cannot search", never silently as "not found".

use thiserror::Error;

use crate::equality::equal_values;
use crate::value::Value;

/// Why a container operation could not run at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The container operand is not a string, byte sequence, sequence, or
    /// map.
    #[error("\"{0}\" could not be applied builtin len()")]
    Unsupported(&'static str),
    /// A string container can only be searched for a string.
    #[error("cannot search a string for a value of type \"{0}\"")]
    NonStringNeedle(&'static str),
    /// A byte-sequence container can only be searched for bytes or a single
    /// byte value.
    #[error("cannot search bytes for a value of type \"{0}\"")]
    NonByteNeedle(&'static str),
    /// Subset and element matching require sequences (or, for subset, a pair
    /// of maps).
    #[error("\"{0}\" is not a sequence")]
    NotASequence(&'static str),
    /// A map's subset candidate must itself be a map.
    #[error("cannot take a map subset from a value of type \"{0}\"")]
    NotAMap(&'static str),
}

/// Per-element-with-multiplicity difference between two unordered
/// collections.
///
/// An element present twice on the left and five times on the right
/// contributes nothing to `only_in_left` and three entries to
/// `only_in_right`. Both sides are empty iff the multisets match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultisetDiff {
    /// Elements with surplus multiplicity on the left, in left order.
    pub only_in_left: Vec<Value>,
    /// Elements with surplus multiplicity on the right, in right order.
    pub only_in_right: Vec<Value>,
}

impl MultisetDiff {
    /// True iff neither side has surplus elements.
    pub fn is_empty(&self) -> bool {
        self.only_in_left.is_empty() && self.only_in_right.is_empty()
    }
}

/// Membership test.
///
/// Substring search for strings, subslice (or single-byte) search for byte
/// sequences, [`equal_values`] element scan for sequences, and key presence
/// (value ignored) for maps.
pub fn contains(container: &Value, element: &Value) -> Result<bool, ContainerError> {
    match container.unshared() {
        Value::Str(s) => match element.unshared() {
            Value::Str(needle) => Ok(s.contains(needle.as_str())),
            other => Err(ContainerError::NonStringNeedle(other.type_label())),
        },
        Value::Bytes(b) => match element.unshared() {
            Value::Bytes(needle) => Ok(needle.is_empty()
                || b.windows(needle.len()).any(|w| w == needle.as_slice())),
            Value::U8(byte) => Ok(b.contains(byte)),
            other => Err(ContainerError::NonByteNeedle(other.type_label())),
        },
        Value::Seq(items) => Ok(items.iter().any(|item| equal_values(item, element))),
        Value::Map(pairs) => Ok(pairs.iter().any(|(k, _)| equal_values(k, element))),
        other => Err(ContainerError::Unsupported(other.type_label())),
    }
}

/// Multiset-aware subset test.
///
/// Every element of `candidate` must appear in `list` at least as many times
/// as it appears in `candidate` (duplicates counted). For maps, every key of
/// `candidate` must exist in `list`; values are not compared. An empty
/// candidate is always a subset.
pub fn subset(list: &Value, candidate: &Value) -> Result<bool, ContainerError> {
    match (list.unshared(), candidate.unshared()) {
        (Value::Map(pairs), Value::Map(sub)) => Ok(sub
            .iter()
            .all(|(k, _)| pairs.iter().any(|(lk, _)| equal_values(lk, k)))),
        (Value::Map(_), other) => Err(ContainerError::NotAMap(other.type_label())),
        (Value::Seq(items), Value::Seq(sub)) => {
            let mut taken = vec![false; items.len()];
            for wanted in sub {
                let found = items
                    .iter()
                    .enumerate()
                    .find(|(i, item)| !taken[*i] && equal_values(item, wanted));
                match found {
                    Some((i, _)) => taken[i] = true,
                    None => return Ok(false),
                }
            }
            Ok(true)
        }
        (Value::Seq(_), other) | (other, _) => {
            Err(ContainerError::NotASequence(other.type_label()))
        }
    }
}

/// Order-blind multiset equality under [`equal_values`], with a full diff.
///
/// The returned [`MultisetDiff`] is populated regardless of the boolean
/// result and is empty on both sides iff the result is `true`. Duplicates
/// are tracked by count, not identity.
pub fn elements_match(left: &Value, right: &Value) -> Result<(bool, MultisetDiff), ContainerError> {
    let Value::Seq(ls) = left.unshared() else {
        return Err(ContainerError::NotASequence(left.type_label()));
    };
    let Value::Seq(rs) = right.unshared() else {
        return Err(ContainerError::NotASequence(right.type_label()));
    };

    let mut taken = vec![false; rs.len()];
    let mut diff = MultisetDiff::default();
    for item in ls {
        let found = rs
            .iter()
            .enumerate()
            .find(|(i, other)| !taken[*i] && equal_values(item, other));
        match found {
            Some((i, _)) => taken[i] = true,
            None => diff.only_in_left.push(item.clone()),
        }
    }
    diff.only_in_right = rs
        .iter()
        .zip(&taken)
        .filter(|(_, taken)| !**taken)
        .map(|(v, _)| v.clone())
        .collect();

    let matched = diff.is_empty();
    Ok((matched, diff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ToValue;

    #[test]
    fn string_containment_is_substring_search() {
        let hay = "Hello World".to_value();
        assert_eq!(contains(&hay, &"World".to_value()), Ok(true));
        assert_eq!(contains(&hay, &"bye".to_value()), Ok(false));
        assert_eq!(
            contains(&hay, &1i32.to_value()),
            Err(ContainerError::NonStringNeedle("i32"))
        );
    }

    #[test]
    fn byte_containment_searches_subslices_and_single_bytes() {
        let hay = Value::bytes(*b"abcdef");
        assert_eq!(contains(&hay, &Value::bytes(*b"cde")), Ok(true));
        assert_eq!(contains(&hay, &Value::bytes(*b"ce")), Ok(false));
        assert_eq!(contains(&hay, &b'f'.to_value()), Ok(true));
    }

    #[test]
    fn map_containment_tests_keys_only() {
        let map = Value::Map(vec![("Hello".to_value(), "World".to_value())]);
        assert_eq!(contains(&map, &"Hello".to_value()), Ok(true));
        assert_eq!(contains(&map, &"World".to_value()), Ok(false));
    }

    #[test]
    fn unsupported_containers_are_usage_errors() {
        assert_eq!(
            contains(&5i32.to_value(), &5i32.to_value()),
            Err(ContainerError::Unsupported("i32"))
        );
    }

    #[test]
    fn subset_counts_duplicates() {
        let list = [1i32, 2, 3].to_value();
        assert_eq!(subset(&list, &[1i32, 2].to_value()), Ok(true));
        assert_eq!(subset(&list, &[1i32, 4].to_value()), Ok(false));
        // Two 1s on the candidate side need two 1s on the list side.
        assert_eq!(subset(&list, &[1i32, 1].to_value()), Ok(false));
        let empty: [i32; 0] = [];
        assert_eq!(subset(&list, &empty.to_value()), Ok(true));
    }

    #[test]
    fn elements_match_accounts_for_multiplicity() {
        let (ok, diff) =
            elements_match(&[1i32, 1, 2, 3].to_value(), &[1i32, 2, 3].to_value()).unwrap();
        assert!(!ok);
        assert_eq!(diff.only_in_left, vec![Value::I32(1)]);
        assert!(diff.only_in_right.is_empty());

        let (ok, diff) =
            elements_match(&[1i32, 2, 3].to_value(), &[3i32, 2, 1].to_value()).unwrap();
        assert!(ok);
        assert!(diff.is_empty());
    }
}
