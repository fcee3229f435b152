//! Thread membership gate.
//!
//! Thread operations run against the gate's bound guild; joining and
//! leaving have no precondition beyond the remote call itself.

use wd_common::types::{Snowflake, ThreadMember};

use crate::cache::Cache;
use crate::error::{GateResult, ResourceLocator};
use crate::gate::{ensure_allowed, forward, CallContext, Gate};
use crate::remote::RemoteClient;

/// Gate over thread membership operations.
pub struct ThreadsGate<'g, C, R> {
    pub(crate) gate: &'g Gate<C, R>,
}

impl<C: Cache, R: RemoteClient> ThreadsGate<'_, C, R> {
    fn locator(&self, thread_id: Snowflake) -> ResourceLocator {
        ResourceLocator::guild_channel(self.gate.bound_guild(), thread_id)
    }

    /// Join a thread.
    pub async fn join(&self, thread_id: Snowflake, ctx: &CallContext) -> GateResult<()> {
        forward(
            self.gate.remote.join_thread(thread_id),
            self.locator(thread_id),
            "join thread",
            ctx,
        )
        .await
    }

    /// Leave a thread.
    pub async fn leave(&self, thread_id: Snowflake, ctx: &CallContext) -> GateResult<()> {
        forward(
            self.gate.remote.leave_thread(thread_id),
            self.locator(thread_id),
            "leave thread",
            ctx,
        )
        .await
    }

    /// Add a member to a thread.
    pub async fn add_member(
        &self,
        thread_id: Snowflake,
        user_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "add thread member";
        let locator = self.locator(thread_id);

        let can = self
            .gate
            .channel_policy()
            .can_add_thread_member(self.gate.bound_guild(), thread_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.add_thread_member(thread_id, user_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Remove a member from a thread.
    pub async fn remove_member(
        &self,
        thread_id: Snowflake,
        user_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "remove thread member";
        let locator = self.locator(thread_id);

        let can = self
            .gate
            .channel_policy()
            .can_remove_thread_member(self.gate.bound_guild(), thread_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.remove_thread_member(thread_id, user_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Fetch one thread member.
    pub async fn get_member(
        &self,
        thread_id: Snowflake,
        user_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<ThreadMember> {
        forward(
            self.gate.remote.get_thread_member(thread_id, user_id),
            self.locator(thread_id),
            "get thread member",
            ctx,
        )
        .await
    }

    /// List every member of a thread.
    pub async fn get_all_members(
        &self,
        thread_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Vec<ThreadMember>> {
        forward(
            self.gate.remote.get_thread_members(thread_id),
            self.locator(thread_id),
            "get all thread members",
            ctx,
        )
        .await
    }
}
