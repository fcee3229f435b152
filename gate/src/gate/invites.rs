//! Invite gate.
//!
//! Deletion scope depends on what the caller knows: with a channel the
//! channel-management bit decides, without one the guild-management bit
//! does.

use wd_common::types::{Invite, InviteQuery, Snowflake};

use crate::cache::Cache;
use crate::error::{GateResult, ResourceLocator};
use crate::gate::{ensure_allowed, forward, CallContext, Gate};
use crate::remote::RemoteClient;

/// Gate over invite operations, bound to the gate's guild.
pub struct InvitesGate<'g, C, R> {
    pub(crate) gate: &'g Gate<C, R>,
}

impl<C: Cache, R: RemoteClient> InvitesGate<'_, C, R> {
    /// Fetch an invite by code.
    pub async fn get(
        &self,
        code: &str,
        query: &InviteQuery,
        ctx: &CallContext,
    ) -> GateResult<Invite> {
        forward(
            self.gate.remote.get_invite(code, query),
            ResourceLocator::invite(code),
            "get invite",
            ctx,
        )
        .await
    }

    /// Revoke an invite.
    pub async fn delete(
        &self,
        channel_id: Option<Snowflake>,
        code: &str,
        ctx: &CallContext,
    ) -> GateResult<Invite> {
        const ACTION: &str = "delete invite";
        let guild_id = self.gate.bound_guild();
        let locator = ResourceLocator::invite(code);

        if let Some(channel_id) = channel_id {
            let can = self
                .gate
                .channel_policy()
                .can_get_invites(guild_id, channel_id)
                .await;
            ensure_allowed(can, &locator, ACTION, ctx)?;
        } else {
            let can = self.gate.guild_policy().can_manage_guild(guild_id).await;
            ensure_allowed(can, &locator, ACTION, ctx)?;
        }

        forward(
            self.gate.remote.delete_invite(code, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }
}
