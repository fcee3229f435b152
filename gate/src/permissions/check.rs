//! Ordered permission checks.

use wd_common::Permissions;

/// Administrator-aware permission test.
///
/// Passes when `granted` covers every bit of `required`, or when the
/// actor's granted mask carries the administrator bit, which bypasses all
/// other checks.
#[must_use]
pub fn has_permission(granted: Permissions, required: Permissions) -> bool {
    granted.has(required) || granted.has(Permissions::ADMINISTRATOR)
}

/// Outcome of one ordered precondition evaluation.
///
/// The code identifies which step of the sequence produced the outcome:
/// codes are assigned in evaluation order, and the first failing step
/// short-circuits everything after it. Codes are for test assertions and
/// diagnostics, never user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The precondition passed.
    Allowed {
        /// Step that returned success.
        code: i32,
    },
    /// The precondition failed.
    Denied {
        /// Step that failed.
        code: i32,
        /// Human-readable permission name or description.
        reason: &'static str,
    },
}

impl CheckOutcome {
    /// A success outcome from the given step.
    #[must_use]
    pub const fn allowed(code: i32) -> Self {
        Self::Allowed { code }
    }

    /// A denial from the given step.
    #[must_use]
    pub const fn denied(code: i32, reason: &'static str) -> Self {
        Self::Denied { code, reason }
    }

    /// Whether the precondition passed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// The step code, regardless of outcome.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Allowed { code } | Self::Denied { code, .. } => *code,
        }
    }
}

/// One step of an ordered check sequence:
/// `(applies, required bits, denial reason)`.
pub(crate) type Step = (bool, Permissions, &'static str);

/// Walk an ordered check sequence against a granted mask.
///
/// Every step owns one code slot whether or not it applies to this call,
/// so a given rule always reports the same code. The step after the last
/// one is the success code.
pub(crate) fn run_ordered(granted: Permissions, steps: &[Step]) -> CheckOutcome {
    for (index, (applies, required, reason)) in steps.iter().enumerate() {
        if *applies && !has_permission(granted, *required) {
            return CheckOutcome::denied(index as i32 + 1, reason);
        }
    }
    CheckOutcome::allowed(steps.len() as i32 + 1)
}
