//! Request gate orchestration.
//!
//! One sub-gate per resource family, all sharing a single flow: resolve
//! the required cached entities, run the matching policy method, run the
//! payload validator when one applies, then forward to the remote client.
//! Denials, invalid payloads, unresolved context, and remote rejections
//! all come back as the same envelope through the helpers here, so the
//! wrap shape exists exactly once.

pub mod channels;
pub mod guilds;
pub mod interactions;
pub mod invites;
pub mod polls;
pub mod stages;
pub mod threads;
pub mod voice;
pub mod webhooks;

pub use channels::ChannelsGate;
pub use guilds::GuildsGate;
pub use interactions::InteractionsGate;
pub use invites::InvitesGate;
pub use polls::PollsGate;
pub use stages::StagesGate;
pub use threads::ThreadsGate;
pub use voice::VoiceGate;
pub use webhooks::WebhooksGate;

use std::future::Future;

use wd_common::Snowflake;

use crate::cache::Cache;
use crate::config::GateConfig;
use crate::error::{RequestError, ResourceLocator, CONTEXT_UNRESOLVED, REMOTE_CALL_FAILED};
use crate::permissions::{ChannelPolicy, GuildPolicy};
use crate::remote::{RemoteClient, RemoteError};

/// Caller-supplied context attached to every gated call.
#[derive(Debug, Clone)]
pub struct CallContext {
    /// Why the call is being made; used only for error diagnostics.
    pub detail: String,
    /// Audit-log justification forwarded to the platform where
    /// applicable.
    pub reason: String,
}

impl CallContext {
    /// Context from a detail description and an audit reason.
    pub fn new(detail: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            reason: reason.into(),
        }
    }
}

/// Composition root: configuration, cache handle, and remote client.
///
/// A gate instance is bound to one guild and one acting application.
/// Concurrent calls through the same instance are independent; the gate
/// holds no mutable state of its own.
pub struct Gate<C, R> {
    pub(crate) config: GateConfig,
    pub(crate) cache: C,
    pub(crate) remote: R,
}

impl<C: Cache, R: RemoteClient> Gate<C, R> {
    /// Assemble a gate from its collaborators.
    pub const fn new(config: GateConfig, cache: C, remote: R) -> Self {
        Self {
            config,
            cache,
            remote,
        }
    }

    /// The gate's configuration.
    pub const fn config(&self) -> &GateConfig {
        &self.config
    }

    /// The cache collaborator.
    pub const fn cache(&self) -> &C {
        &self.cache
    }

    /// The remote client collaborator.
    pub const fn remote(&self) -> &R {
        &self.remote
    }

    /// Channel-scoped operations.
    pub const fn channels(&self) -> ChannelsGate<'_, C, R> {
        ChannelsGate { gate: self }
    }

    /// Guild-scoped operations.
    pub const fn guilds(&self) -> GuildsGate<'_, C, R> {
        GuildsGate { gate: self }
    }

    /// Thread membership operations.
    pub const fn threads(&self) -> ThreadsGate<'_, C, R> {
        ThreadsGate { gate: self }
    }

    /// Poll operations.
    pub const fn polls(&self) -> PollsGate<'_, C, R> {
        PollsGate { gate: self }
    }

    /// Stage instance operations.
    pub const fn stages(&self) -> StagesGate<'_, C, R> {
        StagesGate { gate: self }
    }

    /// Voice state operations.
    pub const fn voice(&self) -> VoiceGate<'_, C, R> {
        VoiceGate { gate: self }
    }

    /// Invite operations.
    pub const fn invites(&self) -> InvitesGate<'_, C, R> {
        InvitesGate { gate: self }
    }

    /// Standalone webhook operations.
    pub const fn webhooks(&self) -> WebhooksGate<'_, C, R> {
        WebhooksGate { gate: self }
    }

    /// Interaction response operations.
    pub const fn interactions(&self) -> InteractionsGate<'_, C, R> {
        InteractionsGate { gate: self }
    }

    pub(crate) const fn channel_policy(&self) -> ChannelPolicy<'_, C> {
        ChannelPolicy::new(&self.cache, self.config.app_id)
    }

    pub(crate) const fn guild_policy(&self) -> GuildPolicy<'_, C> {
        GuildPolicy::new(&self.cache, self.config.app_id)
    }

    /// The guild this gate instance is bound to.
    pub(crate) const fn bound_guild(&self) -> Snowflake {
        self.config.guild_id
    }
}

/// Envelope for a call whose context could not be resolved from cache.
pub(crate) fn context_unresolved(
    locator: ResourceLocator,
    action: &'static str,
    ctx: &CallContext,
    message: &'static str,
) -> RequestError {
    tracing::warn!(
        action,
        cause = %locator.cause(),
        debug = CONTEXT_UNRESOLVED,
        detail = %ctx.detail,
        message,
        "context unresolved, request not dispatched"
    );
    RequestError::new(locator, message)
        .action(action)
        .detail(ctx.detail.as_str())
        .reason(ctx.reason.as_str())
        .debug(CONTEXT_UNRESOLVED)
}

/// Envelope for a failed local check (permission denial or invalid
/// payload).
pub(crate) fn denied(
    locator: ResourceLocator,
    action: &'static str,
    ctx: &CallContext,
    code: i32,
    message: &'static str,
) -> RequestError {
    tracing::warn!(
        action,
        cause = %locator.cause(),
        debug = code,
        detail = %ctx.detail,
        message,
        "request denied before dispatch"
    );
    RequestError::new(locator, message)
        .action(action)
        .detail(ctx.detail.as_str())
        .reason(ctx.reason.as_str())
        .debug(code)
}

/// Map a policy outcome onto the envelope, passing allowed outcomes
/// through.
pub(crate) fn ensure_allowed(
    outcome: crate::permissions::CheckOutcome,
    locator: &ResourceLocator,
    action: &'static str,
    ctx: &CallContext,
) -> Result<(), RequestError> {
    match outcome {
        crate::permissions::CheckOutcome::Allowed { .. } => Ok(()),
        crate::permissions::CheckOutcome::Denied { code, reason } => {
            Err(denied(locator.clone(), action, ctx, code, reason))
        }
    }
}

/// Map a validation outcome onto the envelope, passing valid payloads
/// through.
pub(crate) fn ensure_valid(
    validation: crate::validation::Validation,
    locator: &ResourceLocator,
    action: &'static str,
    ctx: &CallContext,
) -> Result<(), RequestError> {
    match validation {
        crate::validation::Validation::Valid => Ok(()),
        crate::validation::Validation::Invalid { code, message } => {
            Err(denied(locator.clone(), action, ctx, code, message))
        }
    }
}

/// Await a remote call, wrapping any rejection into the envelope with the
/// remote-failure code and the transport's message preserved as cause.
pub(crate) async fn forward<T, F>(
    future: F,
    locator: ResourceLocator,
    action: &'static str,
    ctx: &CallContext,
) -> Result<T, RequestError>
where
    F: Future<Output = Result<T, RemoteError>>,
{
    match future.await {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::warn!(
                action,
                cause = %locator.cause(),
                debug = REMOTE_CALL_FAILED,
                detail = %ctx.detail,
                error = %err,
                "remote call rejected"
            );
            Err(RequestError::new(locator, err.message.clone())
                .action(action)
                .detail(ctx.detail.as_str())
                .reason(ctx.reason.as_str())
                .debug(REMOTE_CALL_FAILED)
                .source(err))
        }
    }
}
