//! Structured request error envelope.
//!
//! Every public gate method reports failure by returning a
//! [`RequestError`] value. The envelope identifies the resource the call
//! addressed, the attempted action, the caller's context, and the index
//! of the check that failed, so callers have a single failure-handling
//! path for local denials and remote rejections alike.

use std::fmt;

use wd_common::Snowflake;

use crate::remote::RemoteError;

/// Debug code marking a failure whose origin is the forwarded remote call.
pub const REMOTE_CALL_FAILED: i32 = -1;

/// Debug code marking a call whose context could not be resolved from the
/// cache, or that targeted the wrong scope (e.g. a guild method against a
/// direct-message channel).
pub const CONTEXT_UNRESOLVED: i32 = 0;

/// Result alias for every public gate method.
pub type GateResult<T> = Result<T, RequestError>;

/// Identity of the resource a failed call addressed.
///
/// Exactly one shape per error, discriminated explicitly rather than by
/// sniffing which fields happen to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocator {
    /// Channel in a guild; the guild is unknown when context resolution
    /// itself failed.
    GuildChannel {
        /// Owning guild.
        guild_id: Option<Snowflake>,
        /// Target channel.
        channel_id: Snowflake,
    },
    /// Application operating in a guild.
    ApplicationGuild {
        /// Acting application.
        application_id: Snowflake,
        /// Target guild, if the call was guild-scoped.
        guild_id: Option<Snowflake>,
    },
    /// Guild alone.
    Guild {
        /// Target guild.
        guild_id: Snowflake,
    },
    /// Standalone webhook.
    Webhook {
        /// Target webhook.
        webhook_id: Snowflake,
    },
    /// Interaction being responded to.
    Interaction {
        /// Target interaction.
        interaction_id: Snowflake,
    },
    /// Invite code.
    Invite {
        /// Target invite code.
        code: String,
    },
}

impl ResourceLocator {
    /// Channel locator with a resolved guild.
    #[must_use]
    pub const fn guild_channel(guild_id: Snowflake, channel_id: Snowflake) -> Self {
        Self::GuildChannel {
            guild_id: Some(guild_id),
            channel_id,
        }
    }

    /// Channel locator before guild resolution succeeded.
    #[must_use]
    pub const fn channel_only(channel_id: Snowflake) -> Self {
        Self::GuildChannel {
            guild_id: None,
            channel_id,
        }
    }

    /// Guild locator.
    #[must_use]
    pub const fn guild(guild_id: Snowflake) -> Self {
        Self::Guild { guild_id }
    }

    /// Application-in-guild locator.
    #[must_use]
    pub const fn application_guild(application_id: Snowflake, guild_id: Option<Snowflake>) -> Self {
        Self::ApplicationGuild {
            application_id,
            guild_id,
        }
    }

    /// Webhook locator.
    #[must_use]
    pub const fn webhook(webhook_id: Snowflake) -> Self {
        Self::Webhook { webhook_id }
    }

    /// Interaction locator.
    #[must_use]
    pub const fn interaction(interaction_id: Snowflake) -> Self {
        Self::Interaction { interaction_id }
    }

    /// Invite locator.
    #[must_use]
    pub fn invite(code: impl Into<String>) -> Self {
        Self::Invite { code: code.into() }
    }

    /// Deterministic identity string derived from the locator fields,
    /// recorded on the envelope as its cause.
    #[must_use]
    pub fn cause(&self) -> String {
        match self {
            Self::GuildChannel {
                guild_id: Some(guild_id),
                channel_id,
            } => format!("Guild ID: {guild_id}, Channel ID: {channel_id}"),
            Self::GuildChannel {
                guild_id: None,
                channel_id,
            } => format!("Guild ID: unknown, Channel ID: {channel_id}"),
            Self::ApplicationGuild {
                application_id,
                guild_id: Some(guild_id),
            } => format!("Application ID: {application_id}, Guild ID: {guild_id}"),
            Self::ApplicationGuild {
                application_id,
                guild_id: None,
            } => format!("Application ID: {application_id}, Guild ID: unknown"),
            Self::Guild { guild_id } => format!("Guild ID: {guild_id}"),
            Self::Webhook { webhook_id } => format!("Webhook ID: {webhook_id}"),
            Self::Interaction { interaction_id } => format!("Interaction ID: {interaction_id}"),
            Self::Invite { code } => format!("Invite Code: {code}"),
        }
    }
}

/// Structured error returned by every public gate method.
///
/// Built once per failure through the chainable setters and not mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct RequestError {
    /// Resource the call addressed.
    pub locator: ResourceLocator,
    /// Operation name, e.g. `"create message"`.
    pub action: &'static str,
    /// Caller-supplied description of why the call was being made.
    pub detail: String,
    /// Caller-supplied audit justification.
    pub reason: String,
    /// Index of the failed local check, [`CONTEXT_UNRESOLVED`], or
    /// [`REMOTE_CALL_FAILED`].
    pub debug: i32,
    /// Human-readable failure message.
    pub message: String,
    /// Identity string derived from the locator.
    pub cause: String,
    /// Underlying remote error when the forwarded call rejected.
    pub source: Option<RemoteError>,
}

impl RequestError {
    /// Start an envelope for the given resource and failure message.
    #[must_use]
    pub fn new(locator: ResourceLocator, message: impl Into<String>) -> Self {
        let cause = locator.cause();
        Self {
            locator,
            action: "",
            detail: String::new(),
            reason: String::new(),
            debug: CONTEXT_UNRESOLVED,
            message: message.into(),
            cause,
            source: None,
        }
    }

    /// Set the attempted operation name.
    #[must_use]
    pub fn action(mut self, action: &'static str) -> Self {
        self.action = action;
        self
    }

    /// Set the caller-supplied context description.
    #[must_use]
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Set the caller-supplied audit justification.
    #[must_use]
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Set the debug code identifying the failed check.
    #[must_use]
    pub const fn debug(mut self, debug: i32) -> Self {
        self.debug = debug;
        self
    }

    /// Attach the underlying remote error.
    #[must_use]
    pub fn source(mut self, source: RemoteError) -> Self {
        self.source = Some(source);
        self
    }

    /// Whether the failure originated from the forwarded remote call.
    #[must_use]
    pub const fn is_remote_failure(&self) -> bool {
        self.debug == REMOTE_CALL_FAILED
    }

    /// Whether the call failed before any check ran because its context
    /// could not be resolved.
    #[must_use]
    pub const fn is_context_unresolved(&self) -> bool {
        self.debug == CONTEXT_UNRESOLVED
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to {} ({}): {} [debug {}]",
            self.action, self.cause, self.message, self.debug
        )
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_per_locator_shape() {
        let a = Snowflake::new(10);
        let b = Snowflake::new(20);

        assert_eq!(
            ResourceLocator::guild_channel(a, b).cause(),
            "Guild ID: 10, Channel ID: 20"
        );
        assert_eq!(
            ResourceLocator::channel_only(b).cause(),
            "Guild ID: unknown, Channel ID: 20"
        );
        assert_eq!(
            ResourceLocator::application_guild(a, Some(b)).cause(),
            "Application ID: 10, Guild ID: 20"
        );
        assert_eq!(ResourceLocator::guild(a).cause(), "Guild ID: 10");
        assert_eq!(ResourceLocator::webhook(a).cause(), "Webhook ID: 10");
        assert_eq!(
            ResourceLocator::interaction(b).cause(),
            "Interaction ID: 20"
        );
        assert_eq!(
            ResourceLocator::invite("abc123").cause(),
            "Invite Code: abc123"
        );
    }

    #[test]
    fn test_builder_chains_before_first_use() {
        let err = RequestError::new(
            ResourceLocator::guild(Snowflake::new(7)),
            "Missing BanMembers permission",
        )
        .action("ban user")
        .detail("automod escalation")
        .reason("spam")
        .debug(1);

        assert_eq!(err.action, "ban user");
        assert_eq!(err.detail, "automod escalation");
        assert_eq!(err.reason, "spam");
        assert_eq!(err.debug, 1);
        assert_eq!(err.cause, "Guild ID: 7");
        assert!(!err.is_remote_failure());
        assert!(!err.is_context_unresolved());
    }

    #[test]
    fn test_remote_failure_keeps_source() {
        let err = RequestError::new(
            ResourceLocator::channel_only(Snowflake::new(3)),
            "50013: Missing Permissions",
        )
        .action("create message")
        .debug(REMOTE_CALL_FAILED)
        .source(RemoteError::new("50013: Missing Permissions"));

        assert!(err.is_remote_failure());
        let source = std::error::Error::source(&err).expect("source retained");
        assert_eq!(source.to_string(), "50013: Missing Permissions");
    }

    #[test]
    fn test_display_shape() {
        let err = RequestError::new(
            ResourceLocator::guild_channel(Snowflake::new(1), Snowflake::new(2)),
            "Missing SendMessages permission",
        )
        .action("create message")
        .debug(2);

        let text = err.to_string();
        assert!(text.contains("create message"));
        assert!(text.contains("Guild ID: 1, Channel ID: 2"));
        assert!(text.contains("debug 2"));
    }
}
