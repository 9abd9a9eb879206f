// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! attest — feature-gated debug assertions that cost nothing in release.
//!
//! `attest` lets a codebase carry rich invariant checks — deep equality,
//! ordering, multiset containment, lock-state probes, numeric tolerances —
//! that are fully active in development builds and compile to nothing when
//! the `enforce` feature is disabled. Call sites are type-checked in both
//! modes; only the runtime work disappears.
//!
//! # Usage
//!
//! ```
//! fn pop_batch(queue: &mut Vec<u32>, n: usize) -> Vec<u32> {
//!     attest::greater_or_equal!(queue.len(), n, "batch under-filled");
//!     let batch: Vec<u32> = queue.drain(..n).collect();
//!     attest::length!(&batch, n);
//!     batch
//! }
//!
//! let mut q = vec![1, 2, 3, 4];
//! let batch = pop_batch(&mut q, 2);
//! attest::equal!(vec![1u32, 2], batch);
//! attest::non_decreasing!(&q);
//! ```
//!
//! # Build modes
//!
//! The `enforce` cargo feature (on by default) selects between two
//! signature-identical strategy modules, [`api::checked`] and
//! [`api::elided`]; the selected one is re-exported as [`checks`]. The
//! macros additionally guard their expansion with [`ACTIVE`], so in an
//! elided build the argument expressions are never evaluated — a
//! violated-or-not assertion is exactly zero work. Ship release binaries
//! with `default-features = false`.
//!
//! # Failure reporting
//!
//! A failed check panics with a typed [`AssertionFailure`] payload, so a
//! panic-hook or `catch_unwind` caller can recover the failure kind and
//! message via `downcast_ref`. [`FailureKind::Violation`] means the checked
//! property did not hold; [`FailureKind::Usage`] means the check itself was
//! misapplied (incomparable categories, `len()` of a scalar, NaN
//! tolerance). Misuse is never silently converted into a pass, not even by
//! the negated forms.
//!
//! # The value model
//!
//! Checked values are lowered into the closed [`Value`] tree via the
//! [`ToValue`] trait — scalars, strings, byte buffers, instants, sequences,
//! maps, and [`Record`]s with per-field visibility. Cross-type numeric
//! comparison, exported-field projection, and diff rendering are all
//! defined on that tree; there is no runtime reflection.

#![forbid(unsafe_code)]

pub mod api;
mod category;
mod container;
mod equality;
mod macros;
mod ordering;
mod probe;
mod project;
mod report;
mod sequence;
mod value;

pub use category::{classify, to_f64, Category};
pub use container::{contains, elements_match, subset, ContainerError, MultisetDiff};
pub use equality::{equal_exported, equal_strict, equal_values};
pub use ordering::{compare, CompareError};
pub use probe::TryAcquire;
pub use project::project;
pub use report::{AssertionFailure, FailureKind};
pub use sequence::{is_ordered, OrderPolicy, OrderViolation};
pub use value::{Field, Record, RecordBuilder, ToValue, Value};

/// Whether assertions are enforced in this build.
///
/// `true` when the `enforce` feature is enabled. The assertion macros
/// branch on this constant, so the dead arm (including argument
/// evaluation) is removed at compile time.
pub const ACTIVE: bool = cfg!(feature = "enforce");

/// The strategy module selected by the `enforce` feature.
///
/// Resolves to [`api::checked`] when enforcing and [`api::elided`]
/// otherwise. Prefer the macros; call through `checks` directly only when
/// a function value is needed.
#[cfg(feature = "enforce")]
pub use api::checked as checks;

/// The strategy module selected by the `enforce` feature.
///
/// Resolves to [`api::checked`] when enforcing and [`api::elided`]
/// otherwise. Prefer the macros; call through `checks` directly only when
/// a function value is needed.
#[cfg(not(feature = "enforce"))]
pub use api::elided as checks;
