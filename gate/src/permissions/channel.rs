//! Channel-scoped permission policy.
//!
//! Each method resolves the actor's effective allow mask for the target
//! channel through the cache, then walks its ordered check sequence.
//! Several read operations share requirements and delegate to a single
//! named check so the rule cannot drift between them.

use wd_common::types::{ForumThreadPayload, MessagePayload, ReactionEmoji, Snowflake};
use wd_common::Permissions;

use crate::cache::Cache;
use crate::permissions::check::{has_permission, run_ordered, CheckOutcome};

/// Permission preconditions for channel-scoped operations.
///
/// Holds only the actor identity and a cache handle; every method is a
/// pure function of the cache's current state.
pub struct ChannelPolicy<'a, C> {
    cache: &'a C,
    actor_id: Snowflake,
}

impl<'a, C: Cache> ChannelPolicy<'a, C> {
    /// Policy evaluating checks on behalf of `actor_id`.
    pub const fn new(cache: &'a C, actor_id: Snowflake) -> Self {
        Self { cache, actor_id }
    }

    async fn allow(&self, guild_id: Snowflake, channel_id: Snowflake) -> Permissions {
        self.cache
            .channel_permissions(guild_id, self.actor_id, channel_id)
            .await
            .allow
    }

    /// Message creation: base send checks plus payload-conditional ones.
    pub async fn can_create_message(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        payload: &MessagePayload,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::VIEW_CHANNEL, "Missing ViewChannel permission"),
                (true, Permissions::SEND_MESSAGES, "Missing SendMessages permission"),
                (
                    payload.message_reference.is_some(),
                    Permissions::READ_MESSAGE_HISTORY,
                    "Missing ReadMessageHistory permission for message reference",
                ),
                (payload.tts, Permissions::SEND_TTS_MESSAGES, "Missing SendTTSMessages permission"),
                (!payload.embeds.is_empty(), Permissions::EMBED_LINKS, "Missing EmbedLinks permission"),
                (
                    !payload.files.is_empty() || !payload.attachments.is_empty(),
                    Permissions::ATTACH_FILES,
                    "Missing AttachFiles permission",
                ),
                (
                    !payload.sticker_ids.is_empty(),
                    Permissions::USE_EXTERNAL_STICKERS,
                    "Missing UseExternalStickers permission",
                ),
                (payload.poll.is_some(), Permissions::SEND_POLLS, "Missing SendPolls permission"),
            ],
        )
    }

    /// Message edits are only ever legal on the actor's own messages.
    pub async fn can_edit_message(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        author_id: Option<Snowflake>,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;

        if !has_permission(perms, Permissions::VIEW_CHANNEL) {
            return CheckOutcome::denied(1, "Missing ViewChannel permission");
        }

        if author_id.is_some_and(|author| author != self.actor_id) {
            return CheckOutcome::denied(2, "Cannot edit message not sent by the bot");
        }

        CheckOutcome::allowed(3)
    }

    /// Reading the reaction list of a message.
    pub async fn can_get_message_reactions(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::READ_MESSAGE_HISTORY, "Missing ReadMessageHistory permission"),
                (true, Permissions::VIEW_CHANNEL, "Missing ViewChannel permission"),
            ],
        )
    }

    /// Removing a single reaction.
    ///
    /// Requires the generic view checks first. Without `ManageMessages`
    /// the cached reaction record decides: no record or an own reaction
    /// means self-removal, which needs no moderation bit.
    pub async fn can_delete_message_reaction(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
    ) -> CheckOutcome {
        let can_view = self.can_get_message_reactions(guild_id, channel_id).await;
        if let CheckOutcome::Denied { code, reason } = can_view {
            return CheckOutcome::denied(code, reason);
        }

        let perms = self.allow(guild_id, channel_id).await;
        if !has_permission(perms, Permissions::MANAGE_MESSAGES) {
            let reaction = self.cache.reaction(channel_id, message_id, emoji).await;
            return match reaction {
                None => CheckOutcome::allowed(6),
                Some(record) if record.me => CheckOutcome::allowed(7),
                Some(_) => CheckOutcome::denied(4, "Missing ManageMessages permission"),
            };
        }

        CheckOutcome::allowed(5)
    }

    /// Clearing all reactions shares the plain read requirements.
    pub async fn can_delete_all_message_reactions(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        self.can_get_messages(guild_id, channel_id).await
    }

    /// Clearing one emoji's reactions shares the plain read requirements.
    pub async fn can_delete_all_message_reactions_for_emoji(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        self.can_get_messages(guild_id, channel_id).await
    }

    /// Adding a reaction; custom emoji additionally need the external
    /// emoji bit.
    pub async fn can_add_message_reaction(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        emoji: &ReactionEmoji,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;

        if !has_permission(perms, Permissions::ADD_REACTIONS) {
            return CheckOutcome::denied(1, "Missing AddReactions permission");
        }

        if !has_permission(perms, Permissions::READ_MESSAGE_HISTORY) {
            return CheckOutcome::denied(2, "Missing ReadMessageHistory permission");
        }

        if !has_permission(perms, Permissions::VIEW_CHANNEL) {
            return CheckOutcome::denied(3, "Missing ViewChannel permission");
        }

        if !emoji.is_custom() {
            return CheckOutcome::allowed(4);
        }

        if !has_permission(perms, Permissions::USE_EXTERNAL_EMOJIS) {
            return CheckOutcome::denied(5, "Missing UseExternalEmojis permission");
        }

        CheckOutcome::allowed(6)
    }

    /// Editing the channel itself.
    pub async fn can_edit(&self, guild_id: Snowflake, channel_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::VIEW_CHANNEL, "Missing ViewChannel permission"),
                (true, Permissions::MANAGE_CHANNELS, "Missing ManageChannels permission"),
            ],
        )
    }

    /// Reading messages and message history.
    pub async fn can_get_messages(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::VIEW_CHANNEL, "Missing ViewChannel permission"),
                (true, Permissions::READ_MESSAGE_HISTORY, "Missing ReadMessageHistory permission"),
            ],
        )
    }

    /// Typing indicators share the plain read requirements.
    pub async fn can_show_typing(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        self.can_get_messages(guild_id, channel_id).await
    }

    /// Listing pins shares the plain read requirements.
    pub async fn can_get_pins(&self, guild_id: Snowflake, channel_id: Snowflake) -> CheckOutcome {
        self.can_get_messages(guild_id, channel_id).await
    }

    /// Pinning a message.
    pub async fn can_pin_message(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::VIEW_CHANNEL, "Missing ViewChannel permission"),
                (true, Permissions::MANAGE_MESSAGES, "Missing ManageMessages permission"),
            ],
        )
    }

    /// Unpinning has identical requirements to pinning.
    pub async fn can_unpin_message(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        self.can_pin_message(guild_id, channel_id).await
    }

    /// Deleting a message; foreign messages need the moderation bit.
    pub async fn can_delete_message(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        author_id: Option<Snowflake>,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;

        if !has_permission(perms, Permissions::VIEW_CHANNEL) {
            return CheckOutcome::denied(1, "Missing ViewChannel permission");
        }

        if author_id.is_some_and(|author| author != self.actor_id)
            && !has_permission(perms, Permissions::MANAGE_MESSAGES)
        {
            return CheckOutcome::denied(
                2,
                "Missing ManageMessages permission to delete messages from other users",
            );
        }

        CheckOutcome::allowed(3)
    }

    /// Bulk deletion.
    pub async fn can_bulk_delete_messages(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::VIEW_CHANNEL, "Missing ViewChannel permission"),
                (true, Permissions::READ_MESSAGE_HISTORY, "Missing ReadMessageHistory permission"),
                (true, Permissions::MANAGE_MESSAGES, "Missing ManageMessages permission"),
            ],
        )
    }

    /// Publishing a message to following channels.
    pub async fn can_crosspost_message(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        author_id: Option<Snowflake>,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;

        if !has_permission(perms, Permissions::VIEW_CHANNEL) {
            return CheckOutcome::denied(1, "Missing ViewChannel permission");
        }

        if author_id == Some(self.actor_id) {
            if !has_permission(perms, Permissions::SEND_MESSAGES) {
                return CheckOutcome::denied(2, "Missing SendMessages permission");
            }
        } else if !has_permission(perms, Permissions::MANAGE_MESSAGES) {
            return CheckOutcome::denied(
                3,
                "Missing ManageMessages permission to crosspost messages from other users",
            );
        }

        CheckOutcome::allowed(4)
    }

    /// Following an announcement channel into a target channel.
    pub async fn can_follow_announcements(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_WEBHOOKS, "Missing ManageWebhooks permission")],
        )
    }

    /// Creating an invite to the channel.
    pub async fn can_create_invite(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::CREATE_INSTANT_INVITE, "Missing CreateInstantInvite permission")],
        )
    }

    /// Listing the channel's invites.
    pub async fn can_get_invites(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_CHANNELS, "Missing ManageChannels permission")],
        )
    }

    /// Creating a thread; private threads need their own bit.
    pub async fn can_create_thread(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        is_private: bool,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;

        if !has_permission(perms, Permissions::VIEW_CHANNEL) {
            return CheckOutcome::denied(1, "Missing ViewChannel permission");
        }

        if is_private {
            if !has_permission(perms, Permissions::CREATE_PRIVATE_THREADS) {
                return CheckOutcome::denied(2, "Missing CreatePrivateThreads permission");
            }
        } else if !has_permission(perms, Permissions::CREATE_PUBLIC_THREADS) {
            return CheckOutcome::denied(3, "Missing CreatePublicThreads permission");
        }

        CheckOutcome::allowed(4)
    }

    /// Creating a forum or media thread, with payload-conditional checks
    /// on its first message.
    pub async fn can_create_forum_thread(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        payload: &ForumThreadPayload,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::VIEW_CHANNEL, "Missing ViewChannel permission"),
                (true, Permissions::SEND_MESSAGES, "Missing SendMessages permission"),
                (true, Permissions::CREATE_PUBLIC_THREADS, "Missing CreatePublicThreads permission"),
                (
                    !payload.message.embeds.is_empty(),
                    Permissions::EMBED_LINKS,
                    "Missing EmbedLinks permission",
                ),
                (
                    !payload.message.attachments.is_empty(),
                    Permissions::ATTACH_FILES,
                    "Missing AttachFiles permission",
                ),
                (
                    !payload.message.sticker_ids.is_empty(),
                    Permissions::USE_EXTERNAL_STICKERS,
                    "Missing UseExternalStickers permission",
                ),
            ],
        )
    }

    /// Listing archived threads; the private bucket needs moderation.
    pub async fn can_get_archived_threads(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        is_private: bool,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::READ_MESSAGE_HISTORY, "Missing ReadMessageHistory permission"),
                (
                    is_private,
                    Permissions::MANAGE_THREADS,
                    "Missing ManageThreads permission for private archived threads",
                ),
            ],
        )
    }

    /// Listing joined private archived threads.
    pub async fn can_get_joined_private_archived_threads(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::READ_MESSAGE_HISTORY, "Missing ReadMessageHistory permission")],
        )
    }

    /// Creating a webhook on the channel.
    pub async fn can_create_webhook(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_WEBHOOKS, "Missing ManageWebhooks permission")],
        )
    }

    /// Listing webhooks has identical requirements to creating one.
    pub async fn can_get_webhooks(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        self.can_create_webhook(guild_id, channel_id).await
    }

    /// Upserting a permission overwrite.
    pub async fn can_edit_permission_overwrite(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_ROLES, "Missing ManageRoles permission")],
        )
    }

    /// Deleting an overwrite has identical requirements to editing one.
    pub async fn can_delete_permission_overwrite(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        self.can_edit_permission_overwrite(guild_id, channel_id).await
    }

    /// Playing a soundboard sound; sounds from another guild need the
    /// external sounds bit.
    pub async fn can_send_soundboard_sound(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        source_guild_id: Option<Snowflake>,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        let external = source_guild_id.is_some_and(|source| source != guild_id);
        run_ordered(
            perms,
            &[
                (true, Permissions::CONNECT, "Missing Connect permission"),
                (true, Permissions::SPEAK, "Missing Speak permission"),
                (true, Permissions::USE_SOUNDBOARD, "Missing UseSoundboard permission"),
                (
                    external,
                    Permissions::USE_EXTERNAL_SOUNDS,
                    "Missing UseExternalSounds permission for sounds from other servers",
                ),
            ],
        )
    }

    /// Sending messages in an existing thread.
    pub async fn can_add_thread_member(
        &self,
        guild_id: Snowflake,
        thread_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, thread_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::SEND_MESSAGES_IN_THREADS, "Missing SendMessagesInThreads permission")],
        )
    }

    /// Removing another member from a thread.
    pub async fn can_remove_thread_member(
        &self,
        guild_id: Snowflake,
        thread_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, thread_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_THREADS, "Missing ManageThreads permission")],
        )
    }

    /// Listing poll answer voters.
    pub async fn can_get_answer_voters(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::VIEW_CHANNEL, "Missing ViewChannel permission"),
                (true, Permissions::READ_MESSAGE_HISTORY, "Missing ReadMessageHistory permission"),
            ],
        )
    }

    /// Ending a poll early.
    pub async fn can_expire_poll(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_MESSAGES, "Missing ManageMessages permission")],
        )
    }

    /// Going live on a stage channel; notifying everyone needs the
    /// mention bit.
    pub async fn can_create_stage_instance(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
        send_start_notification: bool,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::MANAGE_CHANNELS, "Missing ManageChannels permission"),
                (true, Permissions::MUTE_MEMBERS, "Missing MuteMembers permission"),
                (true, Permissions::MOVE_MEMBERS, "Missing MoveMembers permission"),
                (
                    send_start_notification,
                    Permissions::MENTION_EVERYONE,
                    "Missing MentionEveryone permission for start notification",
                ),
            ],
        )
    }

    /// Editing or closing a live stage.
    pub async fn can_manage_stage_instance(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::MANAGE_CHANNELS, "Missing ManageChannels permission"),
                (true, Permissions::MUTE_MEMBERS, "Missing MuteMembers permission"),
                (true, Permissions::MOVE_MEMBERS, "Missing MoveMembers permission"),
            ],
        )
    }

    /// Suppressing or unsuppressing another member on a stage.
    pub async fn can_edit_user_voice_state(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MUTE_MEMBERS, "Missing MuteMembers permission")],
        )
    }

    /// Raising a hand on a stage.
    pub async fn can_request_to_speak(
        &self,
        guild_id: Snowflake,
        channel_id: Snowflake,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id, channel_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::REQUEST_TO_SPEAK, "Missing RequestToSpeak permission")],
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use wd_common::types::{
        CachedChannel, CachedGuild, CachedMessage, CachedReaction, MessageReference,
    };

    use super::*;
    use crate::cache::ResolvedPermissions;

    const GUILD: Snowflake = Snowflake::new(100);
    const CHANNEL: Snowflake = Snowflake::new(200);
    const MESSAGE: Snowflake = Snowflake::new(300);
    const ACTOR: Snowflake = Snowflake::new(900);

    struct FakeCache {
        allow: Permissions,
        reactions: HashMap<(Snowflake, Snowflake, String), CachedReaction>,
    }

    impl FakeCache {
        fn with(allow: Permissions) -> Self {
            Self {
                allow,
                reactions: HashMap::new(),
            }
        }

        fn with_reaction(mut self, emoji: &ReactionEmoji, me: bool) -> Self {
            self.reactions.insert(
                (CHANNEL, MESSAGE, emoji.to_string()),
                CachedReaction { count: 1, me },
            );
            self
        }
    }

    impl Cache for FakeCache {
        async fn channel(&self, _channel_id: Snowflake) -> Option<CachedChannel> {
            None
        }

        async fn guild(&self, _guild_id: Snowflake) -> Option<CachedGuild> {
            None
        }

        async fn message(&self, _message_id: Snowflake) -> Option<CachedMessage> {
            None
        }

        async fn reaction(
            &self,
            channel_id: Snowflake,
            message_id: Snowflake,
            emoji: &ReactionEmoji,
        ) -> Option<CachedReaction> {
            self.reactions
                .get(&(channel_id, message_id, emoji.to_string()))
                .cloned()
        }

        async fn channel_permissions(
            &self,
            _guild_id: Snowflake,
            _actor_id: Snowflake,
            _channel_id: Snowflake,
        ) -> ResolvedPermissions {
            ResolvedPermissions::new(self.allow)
        }

        async fn guild_permissions(
            &self,
            _guild_id: Snowflake,
            _actor_id: Snowflake,
        ) -> ResolvedPermissions {
            ResolvedPermissions::new(self.allow)
        }
    }

    fn sender_bits() -> Permissions {
        Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES
    }

    // === can_create_message ===

    #[tokio::test]
    async fn test_create_message_view_only_denied_on_send() {
        let cache = FakeCache::with(Permissions::VIEW_CHANNEL);
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let outcome = policy
            .can_create_message(GUILD, CHANNEL, &MessagePayload::text("hi"))
            .await;
        assert_eq!(
            outcome,
            CheckOutcome::denied(2, "Missing SendMessages permission")
        );
    }

    #[tokio::test]
    async fn test_create_message_plain_text_allowed() {
        let cache = FakeCache::with(sender_bits());
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let outcome = policy
            .can_create_message(GUILD, CHANNEL, &MessagePayload::text("hi"))
            .await;
        assert_eq!(outcome, CheckOutcome::allowed(9));
    }

    #[tokio::test]
    async fn test_create_message_reply_needs_history() {
        let cache = FakeCache::with(sender_bits());
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let payload = MessagePayload {
            message_reference: Some(MessageReference {
                message_id: MESSAGE,
                channel_id: None,
                guild_id: None,
                fail_if_not_exists: None,
            }),
            ..MessagePayload::text("hi")
        };
        let outcome = policy.can_create_message(GUILD, CHANNEL, &payload).await;
        assert_eq!(
            outcome,
            CheckOutcome::denied(
                3,
                "Missing ReadMessageHistory permission for message reference"
            )
        );
    }

    #[tokio::test]
    async fn test_create_message_embeds_need_embed_links() {
        let cache = FakeCache::with(sender_bits());
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let payload = MessagePayload {
            embeds: vec![wd_common::types::Embed::default()],
            ..MessagePayload::default()
        };
        let outcome = policy.can_create_message(GUILD, CHANNEL, &payload).await;
        assert_eq!(outcome, CheckOutcome::denied(5, "Missing EmbedLinks permission"));
    }

    #[tokio::test]
    async fn test_create_message_no_conditional_bits_checked_without_fields() {
        // Only the base bits are consulted when the payload carries no
        // optional features, even though the actor lacks every other bit.
        let cache = FakeCache::with(sender_bits());
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let outcome = policy
            .can_create_message(GUILD, CHANNEL, &MessagePayload::text("plain"))
            .await;
        assert!(outcome.is_allowed());
    }

    #[tokio::test]
    async fn test_create_message_administrator_bypasses() {
        let cache = FakeCache::with(Permissions::ADMINISTRATOR);
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let payload = MessagePayload {
            tts: true,
            poll: Some(wd_common::types::PollPayload::default()),
            ..MessagePayload::text("hi")
        };
        let outcome = policy.can_create_message(GUILD, CHANNEL, &payload).await;
        assert_eq!(outcome, CheckOutcome::allowed(9));
    }

    // === can_edit_message ===

    #[tokio::test]
    async fn test_edit_message_foreign_author_denied() {
        let cache = FakeCache::with(Permissions::all());
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let outcome = policy
            .can_edit_message(GUILD, CHANNEL, Some(Snowflake::new(1234)))
            .await;
        assert_eq!(
            outcome,
            CheckOutcome::denied(2, "Cannot edit message not sent by the bot")
        );
    }

    #[tokio::test]
    async fn test_edit_message_own_or_unknown_author_allowed() {
        let cache = FakeCache::with(Permissions::VIEW_CHANNEL);
        let policy = ChannelPolicy::new(&cache, ACTOR);
        assert!(policy
            .can_edit_message(GUILD, CHANNEL, Some(ACTOR))
            .await
            .is_allowed());
        assert!(policy.can_edit_message(GUILD, CHANNEL, None).await.is_allowed());
    }

    // === can_delete_message_reaction ===

    #[tokio::test]
    async fn test_delete_reaction_with_manage_messages_fast_path() {
        let cache = FakeCache::with(
            Permissions::VIEW_CHANNEL
                | Permissions::READ_MESSAGE_HISTORY
                | Permissions::MANAGE_MESSAGES,
        );
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let emoji = ReactionEmoji::unicode("🔥");
        let outcome = policy
            .can_delete_message_reaction(GUILD, CHANNEL, MESSAGE, &emoji)
            .await;
        assert_eq!(outcome, CheckOutcome::allowed(5));
    }

    #[tokio::test]
    async fn test_delete_reaction_without_record_is_self_removal() {
        let cache =
            FakeCache::with(Permissions::VIEW_CHANNEL | Permissions::READ_MESSAGE_HISTORY);
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let emoji = ReactionEmoji::unicode("🔥");
        let outcome = policy
            .can_delete_message_reaction(GUILD, CHANNEL, MESSAGE, &emoji)
            .await;
        assert_eq!(outcome, CheckOutcome::allowed(6));
    }

    #[tokio::test]
    async fn test_delete_reaction_own_record_allowed() {
        let emoji = ReactionEmoji::unicode("🔥");
        let cache = FakeCache::with(Permissions::VIEW_CHANNEL | Permissions::READ_MESSAGE_HISTORY)
            .with_reaction(&emoji, true);
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let outcome = policy
            .can_delete_message_reaction(GUILD, CHANNEL, MESSAGE, &emoji)
            .await;
        assert_eq!(outcome, CheckOutcome::allowed(7));
    }

    #[tokio::test]
    async fn test_delete_reaction_foreign_record_denied() {
        let emoji = ReactionEmoji::unicode("🔥");
        let cache = FakeCache::with(Permissions::VIEW_CHANNEL | Permissions::READ_MESSAGE_HISTORY)
            .with_reaction(&emoji, false);
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let outcome = policy
            .can_delete_message_reaction(GUILD, CHANNEL, MESSAGE, &emoji)
            .await;
        assert_eq!(
            outcome,
            CheckOutcome::denied(4, "Missing ManageMessages permission")
        );
    }

    #[tokio::test]
    async fn test_delete_reaction_view_denial_propagates() {
        let cache = FakeCache::with(Permissions::VIEW_CHANNEL);
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let emoji = ReactionEmoji::unicode("🔥");
        let outcome = policy
            .can_delete_message_reaction(GUILD, CHANNEL, MESSAGE, &emoji)
            .await;
        assert_eq!(
            outcome,
            CheckOutcome::denied(1, "Missing ReadMessageHistory permission")
        );
    }

    // === can_add_message_reaction ===

    #[tokio::test]
    async fn test_add_reaction_unicode_skips_external_check() {
        let cache = FakeCache::with(
            Permissions::ADD_REACTIONS
                | Permissions::READ_MESSAGE_HISTORY
                | Permissions::VIEW_CHANNEL,
        );
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let outcome = policy
            .can_add_message_reaction(GUILD, CHANNEL, &ReactionEmoji::unicode("🎉"))
            .await;
        assert_eq!(outcome, CheckOutcome::allowed(4));
    }

    #[tokio::test]
    async fn test_add_reaction_custom_needs_external_emojis() {
        let cache = FakeCache::with(
            Permissions::ADD_REACTIONS
                | Permissions::READ_MESSAGE_HISTORY
                | Permissions::VIEW_CHANNEL,
        );
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let emoji = ReactionEmoji::custom("blob", Snowflake::new(5));
        let outcome = policy.can_add_message_reaction(GUILD, CHANNEL, &emoji).await;
        assert_eq!(
            outcome,
            CheckOutcome::denied(5, "Missing UseExternalEmojis permission")
        );

        let cache = FakeCache::with(
            Permissions::ADD_REACTIONS
                | Permissions::READ_MESSAGE_HISTORY
                | Permissions::VIEW_CHANNEL
                | Permissions::USE_EXTERNAL_EMOJIS,
        );
        let policy = ChannelPolicy::new(&cache, ACTOR);
        let outcome = policy.can_add_message_reaction(GUILD, CHANNEL, &emoji).await;
        assert_eq!(outcome, CheckOutcome::allowed(6));
    }

    // === delegations ===

    #[tokio::test]
    async fn test_read_delegations_share_requirements() {
        let cache = FakeCache::with(Permissions::VIEW_CHANNEL);
        let policy = ChannelPolicy::new(&cache, ACTOR);

        let base = policy.can_get_messages(GUILD, CHANNEL).await;
        assert_eq!(base, policy.can_show_typing(GUILD, CHANNEL).await);
        assert_eq!(base, policy.can_get_pins(GUILD, CHANNEL).await);
        assert_eq!(base, policy.can_delete_all_message_reactions(GUILD, CHANNEL).await);
        assert_eq!(
            base,
            policy
                .can_delete_all_message_reactions_for_emoji(GUILD, CHANNEL)
                .await
        );
        assert_eq!(
            base,
            CheckOutcome::denied(2, "Missing ReadMessageHistory permission")
        );
    }

    #[tokio::test]
    async fn test_overwrite_and_webhook_delegations() {
        let cache = FakeCache::with(Permissions::empty());
        let policy = ChannelPolicy::new(&cache, ACTOR);

        assert_eq!(
            policy.can_edit_permission_overwrite(GUILD, CHANNEL).await,
            policy.can_delete_permission_overwrite(GUILD, CHANNEL).await
        );
        assert_eq!(
            policy.can_create_webhook(GUILD, CHANNEL).await,
            policy.can_get_webhooks(GUILD, CHANNEL).await
        );
        assert_eq!(
            policy.can_pin_message(GUILD, CHANNEL).await,
            policy.can_unpin_message(GUILD, CHANNEL).await
        );
    }

    // === delete & crosspost author branches ===

    #[tokio::test]
    async fn test_delete_message_foreign_needs_manage_messages() {
        let cache = FakeCache::with(Permissions::VIEW_CHANNEL);
        let policy = ChannelPolicy::new(&cache, ACTOR);

        let own = policy.can_delete_message(GUILD, CHANNEL, Some(ACTOR)).await;
        assert_eq!(own, CheckOutcome::allowed(3));

        let foreign = policy
            .can_delete_message(GUILD, CHANNEL, Some(Snowflake::new(7)))
            .await;
        assert_eq!(
            foreign,
            CheckOutcome::denied(
                2,
                "Missing ManageMessages permission to delete messages from other users"
            )
        );
    }

    #[tokio::test]
    async fn test_crosspost_branches_on_author() {
        let cache = FakeCache::with(Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES);
        let policy = ChannelPolicy::new(&cache, ACTOR);

        assert!(policy
            .can_crosspost_message(GUILD, CHANNEL, Some(ACTOR))
            .await
            .is_allowed());

        let foreign = policy
            .can_crosspost_message(GUILD, CHANNEL, Some(Snowflake::new(7)))
            .await;
        assert_eq!(
            foreign,
            CheckOutcome::denied(
                3,
                "Missing ManageMessages permission to crosspost messages from other users"
            )
        );
    }

    // === threads ===

    #[tokio::test]
    async fn test_create_thread_private_branch() {
        let cache = FakeCache::with(Permissions::VIEW_CHANNEL | Permissions::CREATE_PUBLIC_THREADS);
        let policy = ChannelPolicy::new(&cache, ACTOR);

        assert!(policy.can_create_thread(GUILD, CHANNEL, false).await.is_allowed());
        assert_eq!(
            policy.can_create_thread(GUILD, CHANNEL, true).await,
            CheckOutcome::denied(2, "Missing CreatePrivateThreads permission")
        );
    }

    #[tokio::test]
    async fn test_archived_threads_private_bucket_needs_manage_threads() {
        let cache = FakeCache::with(Permissions::READ_MESSAGE_HISTORY);
        let policy = ChannelPolicy::new(&cache, ACTOR);

        assert!(policy
            .can_get_archived_threads(GUILD, CHANNEL, false)
            .await
            .is_allowed());
        assert_eq!(
            policy.can_get_archived_threads(GUILD, CHANNEL, true).await,
            CheckOutcome::denied(
                2,
                "Missing ManageThreads permission for private archived threads"
            )
        );
    }

    // === soundboard ===

    #[tokio::test]
    async fn test_soundboard_cross_guild_needs_external_sounds() {
        let bits = Permissions::CONNECT | Permissions::SPEAK | Permissions::USE_SOUNDBOARD;
        let cache = FakeCache::with(bits);
        let policy = ChannelPolicy::new(&cache, ACTOR);

        assert!(policy
            .can_send_soundboard_sound(GUILD, CHANNEL, None)
            .await
            .is_allowed());
        assert!(policy
            .can_send_soundboard_sound(GUILD, CHANNEL, Some(GUILD))
            .await
            .is_allowed());
        assert_eq!(
            policy
                .can_send_soundboard_sound(GUILD, CHANNEL, Some(Snowflake::new(555)))
                .await,
            CheckOutcome::denied(
                4,
                "Missing UseExternalSounds permission for sounds from other servers"
            )
        );
    }

    // === stage ===

    #[tokio::test]
    async fn test_stage_start_notification_needs_mention_everyone() {
        let bits =
            Permissions::MANAGE_CHANNELS | Permissions::MUTE_MEMBERS | Permissions::MOVE_MEMBERS;
        let cache = FakeCache::with(bits);
        let policy = ChannelPolicy::new(&cache, ACTOR);

        assert_eq!(
            policy.can_create_stage_instance(GUILD, CHANNEL, false).await,
            CheckOutcome::allowed(5)
        );
        assert_eq!(
            policy.can_create_stage_instance(GUILD, CHANNEL, true).await,
            CheckOutcome::denied(
                4,
                "Missing MentionEveryone permission for start notification"
            )
        );
        assert_eq!(
            policy.can_manage_stage_instance(GUILD, CHANNEL).await,
            CheckOutcome::allowed(4)
        );
    }
}
