//! Standalone webhook gate.
//!
//! Webhook calls authenticate with the webhook's own token, so no local
//! permission state exists to check; the gate only wraps remote
//! rejections with the webhook locator.

use wd_common::types::{Message, MessagePayload, Snowflake, Webhook, WebhookEditPayload};

use crate::cache::Cache;
use crate::error::{GateResult, ResourceLocator};
use crate::gate::{forward, CallContext, Gate};
use crate::remote::RemoteClient;

/// Gate over standalone webhook operations.
pub struct WebhooksGate<'g, C, R> {
    pub(crate) gate: &'g Gate<C, R>,
}

impl<C: Cache, R: RemoteClient> WebhooksGate<'_, C, R> {
    /// Fetch a webhook.
    pub async fn get(&self, webhook_id: Snowflake, ctx: &CallContext) -> GateResult<Webhook> {
        forward(
            self.gate.remote.get_webhook(webhook_id),
            ResourceLocator::webhook(webhook_id),
            "get webhook",
            ctx,
        )
        .await
    }

    /// Edit a webhook.
    pub async fn edit(
        &self,
        webhook_id: Snowflake,
        body: &WebhookEditPayload,
        ctx: &CallContext,
    ) -> GateResult<Webhook> {
        forward(
            self.gate
                .remote
                .edit_webhook(webhook_id, body, Some(ctx.reason.as_str())),
            ResourceLocator::webhook(webhook_id),
            "edit webhook",
            ctx,
        )
        .await
    }

    /// Delete a webhook.
    pub async fn delete(&self, webhook_id: Snowflake, ctx: &CallContext) -> GateResult<()> {
        forward(
            self.gate
                .remote
                .delete_webhook(webhook_id, Some(ctx.reason.as_str())),
            ResourceLocator::webhook(webhook_id),
            "delete webhook",
            ctx,
        )
        .await
    }

    /// Post a message through a webhook.
    pub async fn execute(
        &self,
        webhook_id: Snowflake,
        token: &str,
        message: &MessagePayload,
        ctx: &CallContext,
    ) -> GateResult<Option<Message>> {
        forward(
            self.gate.remote.execute_webhook(webhook_id, token, message),
            ResourceLocator::webhook(webhook_id),
            "execute webhook",
            ctx,
        )
        .await
    }

    /// Fetch a message previously posted by the webhook.
    pub async fn get_message(
        &self,
        webhook_id: Snowflake,
        token: &str,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        forward(
            self.gate
                .remote
                .get_webhook_message(webhook_id, token, message_id),
            ResourceLocator::webhook(webhook_id),
            "get webhook message",
            ctx,
        )
        .await
    }

    /// Edit a message previously posted by the webhook.
    pub async fn edit_message(
        &self,
        webhook_id: Snowflake,
        token: &str,
        message_id: Snowflake,
        message: &MessagePayload,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        forward(
            self.gate
                .remote
                .edit_webhook_message(webhook_id, token, message_id, message),
            ResourceLocator::webhook(webhook_id),
            "edit webhook message",
            ctx,
        )
        .await
    }

    /// Delete a message previously posted by the webhook.
    pub async fn delete_message(
        &self,
        webhook_id: Snowflake,
        token: &str,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        forward(
            self.gate
                .remote
                .delete_webhook_message(webhook_id, token, message_id),
            ResourceLocator::webhook(webhook_id),
            "delete webhook message",
            ctx,
        )
        .await
    }
}
