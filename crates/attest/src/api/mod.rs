// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The two build-mode strategies behind the assertion surface.
//!
//! [`checked`] performs the real comparison work and reports violations
//! through the fail/report collaborator; [`elided`] is signature-identical
//! and unconditionally does nothing — no dispatch, no comparison, no way to
//! reach the reporter.
//!
//! Both modules are always compiled, whatever the build mode: the elided
//! strategy's no-op-ness is a tested property, not an absence of code. The
//! crate root re-exports the strategy selected by the `enforce` feature as
//! [`crate::checks`], which is the module call sites (and the assertion
//! macros) go through.

pub mod checked;
pub mod elided;
