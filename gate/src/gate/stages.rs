//! Stage instance gate.

use wd_common::types::{Snowflake, StageInstance, StageInstanceEditPayload, StageInstancePayload};

use crate::cache::Cache;
use crate::error::{GateResult, ResourceLocator};
use crate::gate::{ensure_allowed, forward, CallContext, Gate};
use crate::remote::RemoteClient;

/// Gate over stage instance operations, bound to the gate's guild.
pub struct StagesGate<'g, C, R> {
    pub(crate) gate: &'g Gate<C, R>,
}

impl<C: Cache, R: RemoteClient> StagesGate<'_, C, R> {
    /// Go live on a stage channel.
    pub async fn create(
        &self,
        body: &StageInstancePayload,
        ctx: &CallContext,
    ) -> GateResult<StageInstance> {
        const ACTION: &str = "create stage instance";
        let guild_id = self.gate.bound_guild();
        let locator = ResourceLocator::guild_channel(guild_id, body.channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_create_stage_instance(guild_id, body.channel_id, body.send_start_notification)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_stage_instance(body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit a live stage.
    pub async fn edit(
        &self,
        channel_id: Snowflake,
        body: &StageInstanceEditPayload,
        ctx: &CallContext,
    ) -> GateResult<StageInstance> {
        const ACTION: &str = "edit stage instance";
        let guild_id = self.gate.bound_guild();
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_manage_stage_instance(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .edit_stage_instance(channel_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Close a live stage.
    pub async fn delete(&self, channel_id: Snowflake, ctx: &CallContext) -> GateResult<()> {
        const ACTION: &str = "delete stage instance";
        let guild_id = self.gate.bound_guild();
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_manage_stage_instance(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .delete_stage_instance(channel_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }
}
