//! Voice state gate.

use wd_common::types::{
    Snowflake, UserVoiceStateEditPayload, VoiceState, VoiceStateEditPayload,
};

use crate::cache::Cache;
use crate::error::{GateResult, ResourceLocator};
use crate::gate::{ensure_allowed, forward, CallContext, Gate};
use crate::remote::RemoteClient;

/// Gate over voice state operations, bound to the gate's guild.
pub struct VoiceGate<'g, C, R> {
    pub(crate) gate: &'g Gate<C, R>,
}

impl<C: Cache, R: RemoteClient> VoiceGate<'_, C, R> {
    /// Fetch the application's own voice state.
    pub async fn get_voice_state(&self, ctx: &CallContext) -> GateResult<VoiceState> {
        let guild_id = self.gate.bound_guild();
        forward(
            self.gate.remote.get_voice_state(guild_id),
            ResourceLocator::guild(guild_id),
            "get current user voice state",
            ctx,
        )
        .await
    }

    /// Fetch another member's voice state.
    pub async fn get_user_voice_state(
        &self,
        user_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<VoiceState> {
        let guild_id = self.gate.bound_guild();
        forward(
            self.gate.remote.get_user_voice_state(guild_id, user_id),
            ResourceLocator::guild(guild_id),
            "get user voice state",
            ctx,
        )
        .await
    }

    /// Suppress or unsuppress another member on a stage.
    pub async fn edit_user_voice_state(
        &self,
        user_id: Snowflake,
        body: &UserVoiceStateEditPayload,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "edit user voice state";
        let guild_id = self.gate.bound_guild();
        let locator = ResourceLocator::guild_channel(guild_id, body.channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_edit_user_voice_state(guild_id, body.channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.edit_user_voice_state(
                guild_id,
                user_id,
                body,
                Some(ctx.reason.as_str()),
            ),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit the application's own voice state; raising a hand requires
    /// the request-to-speak bit on the target channel.
    pub async fn edit_voice_state(
        &self,
        body: &VoiceStateEditPayload,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "edit current user voice state";
        let guild_id = self.gate.bound_guild();

        if body.request_to_speak_timestamp.is_some() {
            if let Some(channel_id) = body.channel_id {
                let locator = ResourceLocator::guild_channel(guild_id, channel_id);
                let can = self
                    .gate
                    .channel_policy()
                    .can_request_to_speak(guild_id, channel_id)
                    .await;
                ensure_allowed(can, &locator, ACTION, ctx)?;
            }
        }

        forward(
            self.gate.remote.edit_voice_state(guild_id, body),
            ResourceLocator::guild(guild_id),
            ACTION,
            ctx,
        )
        .await
    }
}
