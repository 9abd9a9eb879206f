// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The fail/report collaborator.
//!
//! Failures are reported via [`std::panic::panic_any`] with a typed
//! [`AssertionFailure`] payload, matchable via `downcast_ref` in tests and
//! by callers that install their own panic handling. A `tracing` error event
//! is emitted before unwinding; the library never installs a subscriber.
//!
//! Assertion violations are programmer errors, not recoverable runtime
//! conditions: the checked invariant did not hold, and the current execution
//! path must not continue. Usage errors (asking for an order that does not
//! exist, searching an unsearchable container) share the same fatal channel
//! but are tagged [`FailureKind::Usage`] and worded as "cannot", so a caller
//! mistake is never mistaken for a falsified invariant.

use std::fmt;

/// Which failure channel fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The checked condition was false.
    Violation,
    /// The check could not be performed at all (caller mistake).
    Usage,
}

/// Typed panic payload carried by every failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// Failure channel.
    pub kind: FailureKind,
    /// Generated, human-readable description including the offending values.
    pub message: String,
    /// Caller-supplied context from the formatted-message form, if any.
    pub context: Option<String>,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(context) = &self.context {
            write!(f, "\nMessages: {context}")?;
        }
        Ok(())
    }
}

/// Records the failure and diverts control flow. Never returns.
pub(crate) fn fail(kind: FailureKind, message: String, context: Option<fmt::Arguments<'_>>) -> ! {
    let failure = AssertionFailure {
        kind,
        message,
        context: context.map(|args| args.to_string()),
    };
    tracing::error!(
        target: "attest",
        kind = ?failure.kind,
        context = failure.context.as_deref(),
        "{}",
        failure.message
    );
    std::panic::panic_any(failure)
}

/// Reports a falsified invariant.
pub(crate) fn fail_violation(message: String, context: Option<fmt::Arguments<'_>>) -> ! {
    fail(FailureKind::Violation, message, context)
}

/// Reports a check that could not be performed.
pub(crate) fn fail_usage(message: String, context: Option<fmt::Arguments<'_>>) -> ! {
    fail(FailureKind::Usage, message, context)
}
