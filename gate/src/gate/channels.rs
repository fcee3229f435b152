//! Channel-scoped request gate.

use wd_common::types::{
    ArchivedStatus, ArchivedThreads, ArchivedThreadsQuery, CachedChannel, CachedMessage, Channel,
    ChannelEditPayload, ChannelType, FollowedChannel, ForumThreadPayload, GuildFeature, Invite,
    InvitePayload, Message, MessagePayload, MessagesQuery, OverwritePayload, ReactionEmoji,
    ReactionUsersQuery, Snowflake, SoundboardSoundPayload, ThreadPayload, User, Webhook,
    WebhookPayload,
};

use crate::cache::Cache;
use crate::error::{GateResult, RequestError, ResourceLocator};
use crate::gate::{context_unresolved, ensure_allowed, ensure_valid, forward, CallContext, Gate};
use crate::remote::RemoteClient;
use crate::validation::{validate_channel_edit, validate_message_payload};

/// Gate over channel-scoped operations.
pub struct ChannelsGate<'g, C, R> {
    pub(crate) gate: &'g Gate<C, R>,
}

impl<C: Cache, R: RemoteClient> ChannelsGate<'_, C, R> {
    /// Resolve the cached channel and its guild, failing with the
    /// context-unresolved code when either is missing.
    async fn guild_context(
        &self,
        channel_id: Snowflake,
        action: &'static str,
        ctx: &CallContext,
    ) -> Result<(Snowflake, CachedChannel), RequestError> {
        let Some(channel) = self.gate.cache.channel(channel_id).await else {
            return Err(context_unresolved(
                ResourceLocator::channel_only(channel_id),
                action,
                ctx,
                "Channel not found in cache",
            ));
        };

        let Some(guild_id) = channel.guild_id else {
            return Err(context_unresolved(
                ResourceLocator::channel_only(channel_id),
                action,
                ctx,
                "Channel is not in a guild; use the direct-message variant of this operation instead",
            ));
        };

        Ok((guild_id, channel))
    }

    /// Resolve guild context from the cached message or, failing that,
    /// the cached channel.
    async fn message_context(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        action: &'static str,
        ctx: &CallContext,
    ) -> Result<(Snowflake, Option<CachedMessage>), RequestError> {
        let message = self.gate.cache.message(message_id).await;
        let channel = self.gate.cache.channel(channel_id).await;

        let guild_id = message
            .as_ref()
            .and_then(|msg| msg.guild_id)
            .or_else(|| channel.as_ref().and_then(|ch| ch.guild_id));

        guild_id.map_or_else(
            || {
                Err(context_unresolved(
                    ResourceLocator::channel_only(channel_id),
                    action,
                    ctx,
                    "Neither the message nor the channel resolves to a guild; use the direct-message variant of this operation instead",
                ))
            },
            |guild_id| Ok((guild_id, message)),
        )
    }

    /// Send a message to a guild channel.
    pub async fn create_message(
        &self,
        channel_id: Snowflake,
        message: &MessagePayload,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        const ACTION: &str = "create message";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_create_message(guild_id, channel_id, message)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;
        ensure_valid(validate_message_payload(message, true), &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.create_message(channel_id, message),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit a previously sent message.
    pub async fn edit_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        message: &MessagePayload,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        const ACTION: &str = "edit message";
        let (guild_id, cached) = self
            .message_context(channel_id, message_id, ACTION, ctx)
            .await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let author_id = cached.map(|msg| msg.author_id);
        let can = self
            .gate
            .channel_policy()
            .can_edit_message(guild_id, channel_id, author_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;
        ensure_valid(validate_message_payload(message, false), &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.edit_message(channel_id, message_id, message),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Fetch one message.
    pub async fn get_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        const ACTION: &str = "get message";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_get_messages(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_message(channel_id, message_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List messages.
    pub async fn get_messages(
        &self,
        channel_id: Snowflake,
        query: &MessagesQuery,
        ctx: &CallContext,
    ) -> GateResult<Vec<Message>> {
        const ACTION: &str = "get messages";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_get_messages(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_messages(channel_id, query),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Delete one message.
    pub async fn delete_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete message";
        let (guild_id, cached) = self
            .message_context(channel_id, message_id, ACTION, ctx)
            .await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let author_id = cached.map(|msg| msg.author_id);
        let can = self
            .gate
            .channel_policy()
            .can_delete_message(guild_id, channel_id, author_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .delete_message(channel_id, message_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Delete a batch of recent messages.
    pub async fn bulk_delete_messages(
        &self,
        channel_id: Snowflake,
        message_ids: &[Snowflake],
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "bulk delete messages";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_bulk_delete_messages(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .bulk_delete_messages(channel_id, message_ids, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Publish an announcement message to following channels.
    pub async fn crosspost_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        const ACTION: &str = "crosspost message";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let author_id = self
            .gate
            .cache
            .message(message_id)
            .await
            .map(|msg| msg.author_id);
        let can = self
            .gate
            .channel_policy()
            .can_crosspost_message(guild_id, channel_id, author_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.crosspost_message(channel_id, message_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Show a typing indicator.
    pub async fn show_typing(&self, channel_id: Snowflake, ctx: &CallContext) -> GateResult<()> {
        const ACTION: &str = "show typing";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_show_typing(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(self.gate.remote.show_typing(channel_id), locator, ACTION, ctx).await
    }

    /// List pinned messages.
    pub async fn get_pins(
        &self,
        channel_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Vec<Message>> {
        const ACTION: &str = "get pins";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_get_pins(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(self.gate.remote.get_pins(channel_id), locator, ACTION, ctx).await
    }

    /// Pin a message.
    pub async fn pin_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "pin message";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_pin_message(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .pin_message(channel_id, message_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Unpin a message.
    pub async fn unpin_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "unpin message";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_unpin_message(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .unpin_message(channel_id, message_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Add a reaction to a message.
    ///
    /// The guild is taken from the caller since reaction flows usually
    /// already hold it; no cache lookup happens here.
    pub async fn add_message_reaction(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "add message reaction";
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_add_message_reaction(guild_id, channel_id, emoji)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .add_message_reaction(channel_id, message_id, emoji),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List the users who reacted with one emoji.
    pub async fn get_message_reactions(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
        query: &ReactionUsersQuery,
        ctx: &CallContext,
    ) -> GateResult<Vec<User>> {
        const ACTION: &str = "get message reactions";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_get_message_reactions(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .get_message_reactions(channel_id, message_id, emoji, query),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Remove the application's own reaction, or any reaction with the
    /// moderation bit.
    pub async fn delete_message_reaction(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete message reaction";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_delete_message_reaction(guild_id, channel_id, message_id, emoji)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .delete_own_message_reaction(channel_id, message_id, emoji),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Clear every reaction from a message.
    pub async fn delete_all_message_reactions(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete all message reactions";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_delete_all_message_reactions(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .delete_all_message_reactions(channel_id, message_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Clear one emoji's reactions from a message.
    pub async fn delete_all_message_reactions_for_emoji(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete all message reactions for emoji";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_delete_all_message_reactions_for_emoji(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .delete_all_message_reactions_for_emoji(channel_id, message_id, emoji),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit the channel, enforcing the field/type legality table.
    pub async fn edit(
        &self,
        channel_id: Snowflake,
        body: &ChannelEditPayload,
        ctx: &CallContext,
    ) -> GateResult<Channel> {
        const ACTION: &str = "edit channel";
        let (guild_id, channel) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self.gate.channel_policy().can_edit(guild_id, channel_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        // The announcement conversion depends on a guild feature flag; a
        // guild missing from cache leaves the decision to the platform.
        let news_allowed = if body.kind.is_some() {
            self.gate
                .cache
                .guild(guild_id)
                .await
                .is_none_or(|guild| guild.has_feature(&GuildFeature::News))
        } else {
            true
        };
        ensure_valid(
            validate_channel_edit(channel.kind, news_allowed, body),
            &locator,
            ACTION,
            ctx,
        )?;

        forward(
            self.gate
                .remote
                .edit_channel(channel_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Route announcements from a source channel into a target channel.
    pub async fn follow_announcements(
        &self,
        channel_id: Snowflake,
        webhook_channel_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<FollowedChannel> {
        const ACTION: &str = "follow announcements";
        let (guild_id, _) = self.guild_context(webhook_channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, webhook_channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_follow_announcements(guild_id, webhook_channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.follow_announcements(
                channel_id,
                webhook_channel_id,
                Some(ctx.reason.as_str()),
            ),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Create an invite to the channel.
    pub async fn create_invite(
        &self,
        channel_id: Snowflake,
        body: &InvitePayload,
        ctx: &CallContext,
    ) -> GateResult<Invite> {
        const ACTION: &str = "create invite";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_create_invite(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_invite(channel_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List the channel's invites.
    pub async fn get_invites(
        &self,
        channel_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Vec<Invite>> {
        const ACTION: &str = "get invites";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_get_invites(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_channel_invites(channel_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Create a thread, standalone or from a message.
    pub async fn create_thread(
        &self,
        channel_id: Snowflake,
        body: &ThreadPayload,
        message_id: Option<Snowflake>,
        ctx: &CallContext,
    ) -> GateResult<Channel> {
        const ACTION: &str = "create thread";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        // Threads started from a message are always public.
        let is_private = message_id.is_none() && body.kind == Some(ChannelType::PrivateThread);
        let can = self
            .gate
            .channel_policy()
            .can_create_thread(guild_id, channel_id, is_private)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_thread(channel_id, body, message_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Create a forum or media thread with its first message.
    ///
    /// The channel-type gate runs before any permission check.
    pub async fn create_forum_thread(
        &self,
        channel_id: Snowflake,
        body: &ForumThreadPayload,
        ctx: &CallContext,
    ) -> GateResult<Channel> {
        const ACTION: &str = "create forum thread";
        let (guild_id, channel) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        if !channel.kind.is_thread_only() {
            return Err(crate::gate::denied(
                locator,
                ACTION,
                ctx,
                1,
                "Forum threads can only be created in Forum and Media channels",
            ));
        }

        let can = self
            .gate
            .channel_policy()
            .can_create_forum_thread(guild_id, channel_id, body)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_forum_thread(channel_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List archived threads from the public or private bucket.
    pub async fn get_archived_threads(
        &self,
        channel_id: Snowflake,
        status: ArchivedStatus,
        query: &ArchivedThreadsQuery,
        ctx: &CallContext,
    ) -> GateResult<ArchivedThreads> {
        const ACTION: &str = "get archived threads";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_get_archived_threads(guild_id, channel_id, status.is_private())
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .get_archived_threads(channel_id, status, query),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List private archived threads the application has joined.
    pub async fn get_joined_private_archived_threads(
        &self,
        channel_id: Snowflake,
        query: &ArchivedThreadsQuery,
        ctx: &CallContext,
    ) -> GateResult<ArchivedThreads> {
        const ACTION: &str = "get joined private archived threads";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_get_joined_private_archived_threads(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .get_joined_private_archived_threads(channel_id, query),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Create a webhook on the channel.
    pub async fn create_webhook(
        &self,
        channel_id: Snowflake,
        body: &WebhookPayload,
        ctx: &CallContext,
    ) -> GateResult<Webhook> {
        const ACTION: &str = "create webhook";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_create_webhook(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_webhook(channel_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List the channel's webhooks.
    pub async fn get_webhooks(
        &self,
        channel_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Vec<Webhook>> {
        const ACTION: &str = "get webhooks";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_get_webhooks(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_channel_webhooks(channel_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Create or replace a permission overwrite.
    pub async fn edit_permission_overwrite(
        &self,
        channel_id: Snowflake,
        overwrite_id: Snowflake,
        body: &OverwritePayload,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "edit permission overwrite";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_edit_permission_overwrite(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.edit_permission_overwrite(
                channel_id,
                overwrite_id,
                body,
                Some(ctx.reason.as_str()),
            ),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Delete a permission overwrite.
    pub async fn delete_permission_overwrite(
        &self,
        channel_id: Snowflake,
        overwrite_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete permission overwrite";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_delete_permission_overwrite(guild_id, channel_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.delete_permission_overwrite(
                channel_id,
                overwrite_id,
                Some(ctx.reason.as_str()),
            ),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Play a soundboard sound in a voice channel.
    pub async fn send_soundboard_sound(
        &self,
        channel_id: Snowflake,
        body: &SoundboardSoundPayload,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "send soundboard sound";
        let (guild_id, _) = self.guild_context(channel_id, ACTION, ctx).await?;
        let locator = ResourceLocator::guild_channel(guild_id, channel_id);

        let can = self
            .gate
            .channel_policy()
            .can_send_soundboard_sound(guild_id, channel_id, body.source_guild_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.send_soundboard_sound(channel_id, body),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Send a direct message; no guild context exists, so only remote
    /// failures are wrapped.
    pub async fn create_direct_message(
        &self,
        channel_id: Snowflake,
        message: &MessagePayload,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        forward(
            self.gate.remote.create_message(channel_id, message),
            ResourceLocator::channel_only(channel_id),
            "create direct message",
            ctx,
        )
        .await
    }

    /// Edit a direct message.
    pub async fn edit_direct_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        message: &MessagePayload,
        ctx: &CallContext,
    ) -> GateResult<Message> {
        forward(
            self.gate.remote.edit_message(channel_id, message_id, message),
            ResourceLocator::channel_only(channel_id),
            "edit direct message",
            ctx,
        )
        .await
    }

    /// Delete a direct message.
    pub async fn delete_direct_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        forward(
            self.gate
                .remote
                .delete_message(channel_id, message_id, Some(ctx.reason.as_str())),
            ResourceLocator::channel_only(channel_id),
            "delete direct message",
            ctx,
        )
        .await
    }
}
