//! Poll gate.

use wd_common::types::{Message, ReactionUsersQuery, Snowflake, User};

use crate::cache::Cache;
use crate::error::{GateResult, ResourceLocator};
use crate::gate::{ensure_allowed, forward, CallContext, Gate};
use crate::remote::RemoteClient;

/// Gate over poll operations, bound to the gate's guild.
pub struct PollsGate<'g, C, R> {
    pub(crate) gate: &'g Gate<C, R>,
}

impl<C: Cache, R: RemoteClient> PollsGate<'_, C, R> {
    /// List the voters of one poll answer.
    pub async fn get_answer_voters(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        answer_id: u8,
        query: &ReactionUsersQuery,
        ctx: &CallContext,
    ) -> GateResult<Vec<User>> {
        const ACTION: &str = "get answer voters";
        let guild_id = self.gate.bound_guild();
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_get_answer_voters(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .get_poll_answer_voters(channel_id, message_id, answer_id, query),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// End a poll early.
    pub async fn expire_poll(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        const ACTION: &str = "expire poll";
        let guild_id = self.gate.bound_guild();
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_expire_poll(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.expire_poll(channel_id, message_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }
}
