//! Structural payload validation.
//!
//! Stateless validators mirroring the remote platform's documented size
//! and shape limits, so malformed requests are rejected before they leave
//! the process. Rules are evaluated in a fixed order and the first
//! violation wins; each distinct rule owns one stable code, reported
//! every time that rule fires.

pub mod channel_edit;
pub mod message;

pub use channel_edit::validate_channel_edit;
pub use message::validate_message_payload;

/// Outcome of a structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// The payload is structurally sound.
    Valid,
    /// A rule was violated.
    Invalid {
        /// Stable code of the violated rule.
        code: i32,
        /// Human-readable description of the violation.
        message: &'static str,
    },
}

impl Validation {
    /// A violation of the given rule.
    #[must_use]
    pub const fn invalid(code: i32, message: &'static str) -> Self {
        Self::Invalid { code, message }
    }

    /// Whether the payload passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}
