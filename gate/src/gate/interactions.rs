//! Interaction response gate.
//!
//! Interaction responses authenticate with the interaction token and are
//! exempt from channel permissions, so the gate only wraps remote
//! rejections. Follow-ups and reply edits address the application-scoped
//! webhook, hence the application locator.

use wd_common::types::{Message, MessagePayload, ModalPayload, Snowflake};

use crate::cache::Cache;
use crate::error::{GateResult, ResourceLocator};
use crate::gate::{forward, CallContext, Gate};
use crate::remote::RemoteClient;

/// Gate over interaction response operations.
pub struct InteractionsGate<'g, C, R> {
    pub(crate) gate: &'g Gate<C, R>,
}

impl<C: Cache, R: RemoteClient> InteractionsGate<'_, C, R> {
    fn application_locator(&self) -> ResourceLocator {
        ResourceLocator::application_guild(
            self.gate.config.app_id,
            Some(self.gate.bound_guild()),
        )
    }

    /// Send the initial interaction response.
    pub async fn reply(
        &self,
        interaction_id: Snowflake,
        token: &str,
        message: &MessagePayload,
        ctx: &CallContext,
    ) -> GateResult<()> {
        forward(
            self.gate
                .remote
                .reply_to_interaction(interaction_id, token, message),
            ResourceLocator::interaction(interaction_id),
            "reply to interaction",
            ctx,
        )
        .await
    }

    /// Acknowledge the interaction without responding yet.
    pub async fn defer(
        &self,
        interaction_id: Snowflake,
        token: &str,
        ctx: &CallContext,
    ) -> GateResult<()> {
        forward(
            self.gate.remote.defer_interaction(interaction_id, token),
            ResourceLocator::interaction(interaction_id),
            "defer interaction",
            ctx,
        )
        .await
    }

    /// Show a modal in response to the interaction.
    pub async fn create_modal(
        &self,
        interaction_id: Snowflake,
        token: &str,
        modal: &ModalPayload,
        ctx: &CallContext,
    ) -> GateResult<()> {
        forward(
            self.gate.remote.create_modal(interaction_id, token, modal),
            ResourceLocator::interaction(interaction_id),
            "create modal",
            ctx,
        )
        .await
    }

    /// Send a follow-up message.
    pub async fn follow_up(
        &self,
        token: &str,
        message: &MessagePayload,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        forward(
            self.gate
                .remote
                .follow_up_interaction(self.gate.config.app_id, token, message),
            self.application_locator(),
            "follow up interaction",
            ctx,
        )
        .await
    }

    /// Edit the original reply.
    pub async fn edit_reply(
        &self,
        token: &str,
        message: &MessagePayload,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        forward(
            self.gate
                .remote
                .edit_interaction_reply(self.gate.config.app_id, token, message),
            self.application_locator(),
            "edit interaction reply",
            ctx,
        )
        .await
    }

    /// Fetch the original reply.
    pub async fn get_original_reply(
        &self,
        token: &str,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        forward(
            self.gate
                .remote
                .get_original_interaction_reply(self.gate.config.app_id, token),
            self.application_locator(),
            "get original interaction reply",
            ctx,
        )
        .await
    }

    /// Delete the original reply.
    pub async fn delete_reply(&self, token: &str, ctx: &CallContext) -> GateResult<()> {
        forward(
            self.gate
                .remote
                .delete_interaction_reply(self.gate.config.app_id, token),
            self.application_locator(),
            "delete interaction reply",
            ctx,
        )
        .await
    }
}
