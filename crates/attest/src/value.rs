// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Closed tagged-variant model of an inspected runtime value.
//!
//! Every check in this crate operates on [`Value`] trees rather than on open
//! runtime type introspection. The enum is closed and exhaustively matched by
//! the comparison engines; anything the model does not recognise lands in
//! [`Value::Opaque`], which is never orderable and never compares equal.
//!
//! Conversions from ordinary Rust values go through [`ToValue`]. Structured
//! operands (the stand-in for struct inspection) are built explicitly with
//! [`Value::record`], declaring per-field visibility for the exported-field
//! checks.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::SystemTime;

/// A runtime value lifted into the closed comparison model.
///
/// Numeric widths are preserved exactly: strict equality distinguishes
/// `U32(123)` from `I64(123)` while value equality coerces them. Shared
/// subtrees are expressed with [`Value::Shared`]; the engines treat sharing
/// as a construction detail and compare through it.
///
/// The derived `PartialEq` is representational (variant plus payload) and is
/// not the equality the assertion surface uses — see
/// [`equal_strict`](crate::equal_strict) and
/// [`equal_values`](crate::equal_values).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 8-bit unsigned integer.
    U8(u8),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// UTF-8 string. Ordering is byte-lexicographic.
    Str(String),
    /// Raw byte sequence. Distinct from [`Value::Str`] for strict equality;
    /// value equality compares it against strings by content.
    Bytes(Vec<u8>),
    /// An absolute point in time. Ordering is chronological; no timezone
    /// normalisation is performed or assumed.
    Instant(SystemTime),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
    /// Keyed mapping as an association list. Key order is insignificant to
    /// the equality engines.
    Map(Vec<(Value, Value)>),
    /// Structured record with named, visibility-tagged fields.
    Record(Record),
    /// Shared subtree. Lets callers express DAG-shaped inputs; the projector
    /// memoizes on the allocation so shared topology is preserved and
    /// traversal stays linear.
    Shared(Arc<Value>),
    /// A behavior-carrying value (closure, function pointer). Two distinct
    /// functions cannot be meaningfully compared, so `Func` never compares
    /// equal — not even to itself — to avoid false positives.
    Func {
        /// Rendered type name, for diagnostics only.
        type_name: &'static str,
    },
    /// Fallback for values outside the closed model. Only reachable through
    /// explicit construction; never orderable, never equal.
    Opaque {
        /// Rendered type name, for diagnostics only.
        type_name: &'static str,
    },
}

/// A structured record: the model's stand-in for a struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Name of the record type, used in diagnostics and strict equality.
    pub type_name: &'static str,
    /// Fields in declaration order. Order is significant to strict equality,
    /// matching struct shape identity.
    pub fields: Vec<Field>,
}

/// A single named field of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub name: &'static str,
    /// Whether the field is publicly visible. Private fields are dropped by
    /// the exported-field projector.
    pub exported: bool,
    /// Field value.
    pub value: Value,
}

impl Value {
    /// Starts building a [`Value::Record`] with the given type name.
    pub fn record(type_name: &'static str) -> RecordBuilder {
        RecordBuilder {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Builds a [`Value::Bytes`] from anything byte-buffer-like.
    ///
    /// Byte buffers need an explicit constructor because `Vec<u8>` through
    /// [`ToValue`] would model a *sequence of u8 values*, which has different
    /// strict-equality and ordering semantics than a byte string.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Builds a [`Value::Func`] marker for a behavior-carrying value.
    pub fn func(type_name: &'static str) -> Self {
        Self::Func { type_name }
    }

    /// Builds a [`Value::Opaque`] marker for a value outside the model.
    pub fn opaque(type_name: &'static str) -> Self {
        Self::Opaque { type_name }
    }

    /// Follows [`Value::Shared`] indirection to the underlying value.
    pub fn unshared(&self) -> &Self {
        let mut v = self;
        while let Self::Shared(inner) = v {
            v = inner;
        }
        v
    }

    /// Short label for the value's shape, used in failure messages
    /// ("cannot compare type X and Y").
    pub fn type_label(&self) -> &'static str {
        match self.unshared() {
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Str(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Instant(_) => "instant",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "map",
            Self::Record(r) => r.type_name,
            Self::Func { type_name } | Self::Opaque { type_name } => type_name,
            Self::Shared(_) => "shared",
        }
    }

    /// Compact single-line rendering for failure messages.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        use std::fmt::Write as _;
        match self {
            Self::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Self::I8(n) => {
                let _ = write!(out, "{n}");
            }
            Self::I16(n) => {
                let _ = write!(out, "{n}");
            }
            Self::I32(n) => {
                let _ = write!(out, "{n}");
            }
            Self::I64(n) => {
                let _ = write!(out, "{n}");
            }
            Self::U8(n) => {
                let _ = write!(out, "{n}");
            }
            Self::U16(n) => {
                let _ = write!(out, "{n}");
            }
            Self::U32(n) => {
                let _ = write!(out, "{n}");
            }
            Self::U64(n) => {
                let _ = write!(out, "{n}");
            }
            Self::F32(n) => {
                let _ = write!(out, "{n}");
            }
            Self::F64(n) => {
                let _ = write!(out, "{n}");
            }
            Self::Str(s) => {
                let _ = write!(out, "{s:?}");
            }
            Self::Bytes(b) => {
                out.push_str("0x");
                for byte in b {
                    let _ = write!(out, "{byte:02x}");
                }
            }
            Self::Instant(t) => {
                let _ = write!(out, "{t:?}");
            }
            Self::Seq(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.render_into(out);
                }
                out.push(']');
            }
            Self::Map(pairs) => {
                out.push('{');
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    k.render_into(out);
                    out.push_str(": ");
                    v.render_into(out);
                }
                out.push('}');
            }
            Self::Record(r) => {
                out.push_str(r.type_name);
                out.push_str(" { ");
                for (i, f) in r.fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(f.name);
                    out.push_str(": ");
                    f.value.render_into(out);
                }
                out.push_str(" }");
            }
            Self::Shared(inner) => inner.render_into(out),
            Self::Func { type_name } => {
                let _ = write!(out, "<func {type_name}>");
            }
            Self::Opaque { type_name } => {
                let _ = write!(out, "<{type_name}>");
            }
        }
    }

    /// Multi-line rendering used by the diff reporter for structured values.
    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        self.render_pretty_into(&mut out, 0);
        out
    }

    fn render_pretty_into(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent + 1);
        let close = "  ".repeat(indent);
        match self {
            Self::Seq(items) if !items.is_empty() => {
                out.push_str("[\n");
                for item in items {
                    out.push_str(&pad);
                    item.render_pretty_into(out, indent + 1);
                    out.push_str(",\n");
                }
                out.push_str(&close);
                out.push(']');
            }
            Self::Map(pairs) if !pairs.is_empty() => {
                out.push_str("{\n");
                for (k, v) in pairs {
                    out.push_str(&pad);
                    out.push_str(&k.render());
                    out.push_str(": ");
                    v.render_pretty_into(out, indent + 1);
                    out.push_str(",\n");
                }
                out.push_str(&close);
                out.push('}');
            }
            Self::Record(r) if !r.fields.is_empty() => {
                out.push_str(r.type_name);
                out.push_str(" {\n");
                for f in &r.fields {
                    out.push_str(&pad);
                    out.push_str(f.name);
                    out.push_str(": ");
                    f.value.render_pretty_into(out, indent + 1);
                    out.push_str(",\n");
                }
                out.push_str(&close);
                out.push('}');
            }
            Self::Shared(inner) => inner.render_pretty_into(out, indent),
            other => out.push_str(&other.render()),
        }
    }
}

/// Builder for [`Value::Record`], declaring fields in order with explicit
/// visibility.
#[derive(Debug)]
pub struct RecordBuilder {
    type_name: &'static str,
    fields: Vec<Field>,
}

impl RecordBuilder {
    /// Adds an exported (publicly visible) field.
    pub fn field(mut self, name: &'static str, value: impl ToValue) -> Self {
        self.fields.push(Field {
            name,
            exported: true,
            value: value.to_value(),
        });
        self
    }

    /// Adds an implementation-private field. The exported-field projector
    /// drops these.
    pub fn private(mut self, name: &'static str, value: impl ToValue) -> Self {
        self.fields.push(Field {
            name,
            exported: false,
            value: value.to_value(),
        });
        self
    }

    /// Finishes the record.
    pub fn build(self) -> Value {
        Value::Record(Record {
            type_name: self.type_name,
            fields: self.fields,
        })
    }
}

/// Conversion of ordinary Rust values into the closed [`Value`] model.
///
/// Implemented for every builtin numeric width, `bool`, strings, instants,
/// and homogeneous collections of convertible elements. Note that `Vec<u8>`
/// converts to a *sequence* of `U8` values; use [`Value::bytes`] for a byte
/// string.
pub trait ToValue {
    /// Lifts `self` into the comparison model.
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }
        })*
    };
}

impl_to_value_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl ToValue for isize {
    fn to_value(&self) -> Value {
        Value::I64(*self as i64)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        Value::U64(*self as u64)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl ToValue for SystemTime {
    fn to_value(&self) -> Value {
        Value::Instant(*self)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for Arc<Value> {
    fn to_value(&self) -> Value {
        Value::Shared(Arc::clone(self))
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: ToValue, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        // Hash maps iterate in arbitrary order; sort by rendered key so the
        // modeled pairs (and any diagnostics built from them) are stable.
        let mut pairs: Vec<(Value, Value)> = self
            .iter()
            .map(|(k, v)| (k.to_value(), v.to_value()))
            .collect();
        pairs.sort_by_key(|(k, _)| k.render());
        Value::Map(pairs)
    }
}
