//! Remote client boundary.
//!
//! The gate never talks HTTP itself. It forwards approved calls to a
//! [`RemoteClient`] implementation, which owns the transport, rate-limit
//! buckets, and retry policy. Every method returns the operation's natural
//! result or a [`RemoteError`] carrying the transport's message.

use wd_common::types::{
    AddMemberPayload, ArchivedStatus, ArchivedThreads, ArchivedThreadsQuery, AuditLog,
    AuditLogQuery, Ban, BanPayload, BansQuery, BulkBanPayload, BulkBanResult, Channel,
    ChannelEditPayload, ChannelPositionUpdate, CreateChannelPayload, EditMemberPayload, Emoji,
    EmojiEditPayload, EmojiPayload, FollowedChannel, ForumThreadPayload, Guild, GuildEditPayload,
    GuildPreview, GuildQuery, Integration, Invite, InvitePayload, InviteQuery, Member, Message,
    MessagePayload, MessagesQuery, ModalPayload, Onboarding, OnboardingPayload, OverwritePayload,
    PruneCountQuery, PrunePayload, PruneResult, ReactionEmoji, ReactionUsersQuery, Role,
    RolePayload, RolePositionUpdate, ScheduledEvent, ScheduledEventEditPayload,
    ScheduledEventPayload, Snowflake, SoundboardSoundPayload, StageInstance,
    StageInstanceEditPayload, StageInstancePayload, Sticker, StickerEditPayload, StickerPayload,
    ThreadMember, ThreadPayload, User, UserVoiceStateEditPayload, VanityUrl, VoiceState,
    VoiceStateEditPayload, Webhook, WebhookEditPayload, WebhookPayload, WelcomeScreen,
    WelcomeScreenPayload,
};

/// Error reported by the remote client for a rejected call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    /// Human-readable message from the transport or the platform.
    pub message: String,
}

impl RemoteError {
    /// A remote error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error returned by default trait bodies for operations the
    /// concrete client does not implement.
    #[must_use]
    pub fn unsupported(operation: &str) -> Self {
        Self::new(format!("operation not supported by this client: {operation}"))
    }
}

/// One async method per remote operation.
///
/// Every method has a default body rejecting with
/// [`RemoteError::unsupported`], so concrete clients (and test doubles)
/// implement only the operations they actually dispatch.
#[allow(async_fn_in_trait, unused_variables)]
pub trait RemoteClient {
    // === Channel messages ===

    async fn create_message(
        &self,
        channel_id: Snowflake,
        message: &MessagePayload,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("create_message"))
    }

    async fn edit_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        message: &MessagePayload,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("edit_message"))
    }

    async fn get_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("get_message"))
    }

    async fn get_messages(
        &self,
        channel_id: Snowflake,
        query: &MessagesQuery,
    ) -> Result<Vec<Message>, RemoteError> {
        Err(RemoteError::unsupported("get_messages"))
    }

    async fn delete_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_message"))
    }

    async fn bulk_delete_messages(
        &self,
        channel_id: Snowflake,
        message_ids: &[Snowflake],
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("bulk_delete_messages"))
    }

    async fn crosspost_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("crosspost_message"))
    }

    // === Reactions ===

    async fn add_message_reaction(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("add_message_reaction"))
    }

    async fn get_message_reactions(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
        query: &ReactionUsersQuery,
    ) -> Result<Vec<User>, RemoteError> {
        Err(RemoteError::unsupported("get_message_reactions"))
    }

    async fn delete_own_message_reaction(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_own_message_reaction"))
    }

    async fn delete_all_message_reactions(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_all_message_reactions"))
    }

    async fn delete_all_message_reactions_for_emoji(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_all_message_reactions_for_emoji"))
    }

    // === Channel management ===

    async fn edit_channel(
        &self,
        channel_id: Snowflake,
        body: &ChannelEditPayload,
        reason: Option<&str>,
    ) -> Result<Channel, RemoteError> {
        Err(RemoteError::unsupported("edit_channel"))
    }

    async fn show_typing(&self, channel_id: Snowflake) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("show_typing"))
    }

    async fn get_pins(&self, channel_id: Snowflake) -> Result<Vec<Message>, RemoteError> {
        Err(RemoteError::unsupported("get_pins"))
    }

    async fn pin_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("pin_message"))
    }

    async fn unpin_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("unpin_message"))
    }

    async fn follow_announcements(
        &self,
        channel_id: Snowflake,
        webhook_channel_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<FollowedChannel, RemoteError> {
        Err(RemoteError::unsupported("follow_announcements"))
    }

    async fn create_invite(
        &self,
        channel_id: Snowflake,
        body: &InvitePayload,
        reason: Option<&str>,
    ) -> Result<Invite, RemoteError> {
        Err(RemoteError::unsupported("create_invite"))
    }

    async fn get_channel_invites(
        &self,
        channel_id: Snowflake,
    ) -> Result<Vec<Invite>, RemoteError> {
        Err(RemoteError::unsupported("get_channel_invites"))
    }

    async fn edit_permission_overwrite(
        &self,
        channel_id: Snowflake,
        overwrite_id: Snowflake,
        body: &OverwritePayload,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("edit_permission_overwrite"))
    }

    async fn delete_permission_overwrite(
        &self,
        channel_id: Snowflake,
        overwrite_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_permission_overwrite"))
    }

    async fn send_soundboard_sound(
        &self,
        channel_id: Snowflake,
        body: &SoundboardSoundPayload,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("send_soundboard_sound"))
    }

    // === Threads ===

    async fn create_thread(
        &self,
        channel_id: Snowflake,
        body: &ThreadPayload,
        message_id: Option<Snowflake>,
        reason: Option<&str>,
    ) -> Result<Channel, RemoteError> {
        Err(RemoteError::unsupported("create_thread"))
    }

    async fn create_forum_thread(
        &self,
        channel_id: Snowflake,
        body: &ForumThreadPayload,
        reason: Option<&str>,
    ) -> Result<Channel, RemoteError> {
        Err(RemoteError::unsupported("create_forum_thread"))
    }

    async fn get_archived_threads(
        &self,
        channel_id: Snowflake,
        status: ArchivedStatus,
        query: &ArchivedThreadsQuery,
    ) -> Result<ArchivedThreads, RemoteError> {
        Err(RemoteError::unsupported("get_archived_threads"))
    }

    async fn get_joined_private_archived_threads(
        &self,
        channel_id: Snowflake,
        query: &ArchivedThreadsQuery,
    ) -> Result<ArchivedThreads, RemoteError> {
        Err(RemoteError::unsupported("get_joined_private_archived_threads"))
    }

    async fn join_thread(&self, thread_id: Snowflake) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("join_thread"))
    }

    async fn leave_thread(&self, thread_id: Snowflake) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("leave_thread"))
    }

    async fn add_thread_member(
        &self,
        thread_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("add_thread_member"))
    }

    async fn remove_thread_member(
        &self,
        thread_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("remove_thread_member"))
    }

    async fn get_thread_member(
        &self,
        thread_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<ThreadMember, RemoteError> {
        Err(RemoteError::unsupported("get_thread_member"))
    }

    async fn get_thread_members(
        &self,
        thread_id: Snowflake,
    ) -> Result<Vec<ThreadMember>, RemoteError> {
        Err(RemoteError::unsupported("get_thread_members"))
    }

    // === Webhooks (channel-scoped) ===

    async fn create_webhook(
        &self,
        channel_id: Snowflake,
        body: &WebhookPayload,
        reason: Option<&str>,
    ) -> Result<Webhook, RemoteError> {
        Err(RemoteError::unsupported("create_webhook"))
    }

    async fn get_channel_webhooks(
        &self,
        channel_id: Snowflake,
    ) -> Result<Vec<Webhook>, RemoteError> {
        Err(RemoteError::unsupported("get_channel_webhooks"))
    }

    // === Polls ===

    async fn get_poll_answer_voters(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        answer_id: u8,
        query: &ReactionUsersQuery,
    ) -> Result<Vec<User>, RemoteError> {
        Err(RemoteError::unsupported("get_poll_answer_voters"))
    }

    async fn expire_poll(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("expire_poll"))
    }

    // === Guild ===

    async fn get_guild(
        &self,
        guild_id: Snowflake,
        query: &GuildQuery,
    ) -> Result<Guild, RemoteError> {
        Err(RemoteError::unsupported("get_guild"))
    }

    async fn get_guild_preview(&self, guild_id: Snowflake) -> Result<GuildPreview, RemoteError> {
        Err(RemoteError::unsupported("get_guild_preview"))
    }

    async fn edit_guild(
        &self,
        guild_id: Snowflake,
        body: &GuildEditPayload,
        reason: Option<&str>,
    ) -> Result<Guild, RemoteError> {
        Err(RemoteError::unsupported("edit_guild"))
    }

    async fn create_guild_channel(
        &self,
        guild_id: Snowflake,
        body: &CreateChannelPayload,
        reason: Option<&str>,
    ) -> Result<Channel, RemoteError> {
        Err(RemoteError::unsupported("create_guild_channel"))
    }

    async fn set_channel_positions(
        &self,
        guild_id: Snowflake,
        body: &[ChannelPositionUpdate],
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("set_channel_positions"))
    }

    // === Guild members ===

    async fn add_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        body: &AddMemberPayload,
    ) -> Result<Option<Member>, RemoteError> {
        Err(RemoteError::unsupported("add_guild_member"))
    }

    async fn edit_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        body: &EditMemberPayload,
        reason: Option<&str>,
    ) -> Result<Member, RemoteError> {
        Err(RemoteError::unsupported("edit_guild_member"))
    }

    async fn remove_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("remove_guild_member"))
    }

    // === Roles ===

    async fn create_role(
        &self,
        guild_id: Snowflake,
        body: &RolePayload,
        reason: Option<&str>,
    ) -> Result<Role, RemoteError> {
        Err(RemoteError::unsupported("create_role"))
    }

    async fn set_role_positions(
        &self,
        guild_id: Snowflake,
        body: &[RolePositionUpdate],
        reason: Option<&str>,
    ) -> Result<Vec<Role>, RemoteError> {
        Err(RemoteError::unsupported("set_role_positions"))
    }

    async fn edit_role(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        body: &RolePayload,
        reason: Option<&str>,
    ) -> Result<Role, RemoteError> {
        Err(RemoteError::unsupported("edit_role"))
    }

    async fn delete_role(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_role"))
    }

    async fn add_role_to_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("add_role_to_member"))
    }

    async fn remove_role_from_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("remove_role_from_member"))
    }

    // === Bans & pruning ===

    async fn get_member_ban(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<Ban, RemoteError> {
        Err(RemoteError::unsupported("get_member_ban"))
    }

    async fn get_member_bans(
        &self,
        guild_id: Snowflake,
        query: &BansQuery,
    ) -> Result<Vec<Ban>, RemoteError> {
        Err(RemoteError::unsupported("get_member_bans"))
    }

    async fn ban_user(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        body: &BanPayload,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("ban_user"))
    }

    async fn unban_user(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("unban_user"))
    }

    async fn bulk_ban_users(
        &self,
        guild_id: Snowflake,
        body: &BulkBanPayload,
        reason: Option<&str>,
    ) -> Result<BulkBanResult, RemoteError> {
        Err(RemoteError::unsupported("bulk_ban_users"))
    }

    async fn get_prune_count(
        &self,
        guild_id: Snowflake,
        query: &PruneCountQuery,
    ) -> Result<PruneResult, RemoteError> {
        Err(RemoteError::unsupported("get_prune_count"))
    }

    async fn begin_prune(
        &self,
        guild_id: Snowflake,
        body: &PrunePayload,
        reason: Option<&str>,
    ) -> Result<PruneResult, RemoteError> {
        Err(RemoteError::unsupported("begin_prune"))
    }

    // === Guild settings ===

    async fn get_guild_invites(&self, guild_id: Snowflake) -> Result<Vec<Invite>, RemoteError> {
        Err(RemoteError::unsupported("get_guild_invites"))
    }

    async fn get_integrations(
        &self,
        guild_id: Snowflake,
    ) -> Result<Vec<Integration>, RemoteError> {
        Err(RemoteError::unsupported("get_integrations"))
    }

    async fn delete_integration(
        &self,
        guild_id: Snowflake,
        integration_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_integration"))
    }

    async fn get_vanity_url(&self, guild_id: Snowflake) -> Result<VanityUrl, RemoteError> {
        Err(RemoteError::unsupported("get_vanity_url"))
    }

    async fn edit_welcome_screen(
        &self,
        guild_id: Snowflake,
        body: &WelcomeScreenPayload,
        reason: Option<&str>,
    ) -> Result<WelcomeScreen, RemoteError> {
        Err(RemoteError::unsupported("edit_welcome_screen"))
    }

    async fn get_audit_logs(
        &self,
        guild_id: Snowflake,
        query: &AuditLogQuery,
    ) -> Result<AuditLog, RemoteError> {
        Err(RemoteError::unsupported("get_audit_logs"))
    }

    async fn get_guild_webhooks(&self, guild_id: Snowflake) -> Result<Vec<Webhook>, RemoteError> {
        Err(RemoteError::unsupported("get_guild_webhooks"))
    }

    async fn edit_onboarding(
        &self,
        guild_id: Snowflake,
        body: &OnboardingPayload,
        reason: Option<&str>,
    ) -> Result<Onboarding, RemoteError> {
        Err(RemoteError::unsupported("edit_onboarding"))
    }

    // === Expressions ===

    async fn create_emoji(
        &self,
        guild_id: Snowflake,
        body: &EmojiPayload,
        reason: Option<&str>,
    ) -> Result<Emoji, RemoteError> {
        Err(RemoteError::unsupported("create_emoji"))
    }

    async fn edit_emoji(
        &self,
        guild_id: Snowflake,
        emoji_id: Snowflake,
        body: &EmojiEditPayload,
        reason: Option<&str>,
    ) -> Result<Emoji, RemoteError> {
        Err(RemoteError::unsupported("edit_emoji"))
    }

    async fn delete_emoji(
        &self,
        guild_id: Snowflake,
        emoji_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_emoji"))
    }

    async fn create_sticker(
        &self,
        guild_id: Snowflake,
        body: &StickerPayload,
        reason: Option<&str>,
    ) -> Result<Sticker, RemoteError> {
        Err(RemoteError::unsupported("create_sticker"))
    }

    async fn edit_sticker(
        &self,
        guild_id: Snowflake,
        sticker_id: Snowflake,
        body: &StickerEditPayload,
        reason: Option<&str>,
    ) -> Result<Sticker, RemoteError> {
        Err(RemoteError::unsupported("edit_sticker"))
    }

    async fn delete_sticker(
        &self,
        guild_id: Snowflake,
        sticker_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_sticker"))
    }

    // === Scheduled events ===

    async fn create_scheduled_event(
        &self,
        guild_id: Snowflake,
        body: &ScheduledEventPayload,
        reason: Option<&str>,
    ) -> Result<ScheduledEvent, RemoteError> {
        Err(RemoteError::unsupported("create_scheduled_event"))
    }

    async fn edit_scheduled_event(
        &self,
        guild_id: Snowflake,
        event_id: Snowflake,
        body: &ScheduledEventEditPayload,
        reason: Option<&str>,
    ) -> Result<ScheduledEvent, RemoteError> {
        Err(RemoteError::unsupported("edit_scheduled_event"))
    }

    async fn delete_scheduled_event(
        &self,
        guild_id: Snowflake,
        event_id: Snowflake,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_scheduled_event"))
    }

    // === Stage instances ===

    async fn create_stage_instance(
        &self,
        body: &StageInstancePayload,
        reason: Option<&str>,
    ) -> Result<StageInstance, RemoteError> {
        Err(RemoteError::unsupported("create_stage_instance"))
    }

    async fn edit_stage_instance(
        &self,
        channel_id: Snowflake,
        body: &StageInstanceEditPayload,
        reason: Option<&str>,
    ) -> Result<StageInstance, RemoteError> {
        Err(RemoteError::unsupported("edit_stage_instance"))
    }

    async fn delete_stage_instance(
        &self,
        channel_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_stage_instance"))
    }

    // === Voice states ===

    async fn get_voice_state(&self, guild_id: Snowflake) -> Result<VoiceState, RemoteError> {
        Err(RemoteError::unsupported("get_voice_state"))
    }

    async fn get_user_voice_state(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> Result<VoiceState, RemoteError> {
        Err(RemoteError::unsupported("get_user_voice_state"))
    }

    async fn edit_voice_state(
        &self,
        guild_id: Snowflake,
        body: &VoiceStateEditPayload,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("edit_voice_state"))
    }

    async fn edit_user_voice_state(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        body: &UserVoiceStateEditPayload,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("edit_user_voice_state"))
    }

    // === Invites ===

    async fn get_invite(&self, code: &str, query: &InviteQuery) -> Result<Invite, RemoteError> {
        Err(RemoteError::unsupported("get_invite"))
    }

    async fn delete_invite(
        &self,
        code: &str,
        reason: Option<&str>,
    ) -> Result<Invite, RemoteError> {
        Err(RemoteError::unsupported("delete_invite"))
    }

    // === Standalone webhooks ===

    async fn get_webhook(&self, webhook_id: Snowflake) -> Result<Webhook, RemoteError> {
        Err(RemoteError::unsupported("get_webhook"))
    }

    async fn edit_webhook(
        &self,
        webhook_id: Snowflake,
        body: &WebhookEditPayload,
        reason: Option<&str>,
    ) -> Result<Webhook, RemoteError> {
        Err(RemoteError::unsupported("edit_webhook"))
    }

    async fn delete_webhook(
        &self,
        webhook_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_webhook"))
    }

    async fn execute_webhook(
        &self,
        webhook_id: Snowflake,
        token: &str,
        message: &MessagePayload,
    ) -> Result<Option<Message>, RemoteError> {
        Err(RemoteError::unsupported("execute_webhook"))
    }

    async fn get_webhook_message(
        &self,
        webhook_id: Snowflake,
        token: &str,
        message_id: Snowflake,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("get_webhook_message"))
    }

    async fn edit_webhook_message(
        &self,
        webhook_id: Snowflake,
        token: &str,
        message_id: Snowflake,
        message: &MessagePayload,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("edit_webhook_message"))
    }

    async fn delete_webhook_message(
        &self,
        webhook_id: Snowflake,
        token: &str,
        message_id: Snowflake,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_webhook_message"))
    }

    // === Interactions ===

    async fn reply_to_interaction(
        &self,
        interaction_id: Snowflake,
        token: &str,
        message: &MessagePayload,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("reply_to_interaction"))
    }

    async fn defer_interaction(
        &self,
        interaction_id: Snowflake,
        token: &str,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("defer_interaction"))
    }

    async fn follow_up_interaction(
        &self,
        application_id: Snowflake,
        token: &str,
        message: &MessagePayload,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("follow_up_interaction"))
    }

    async fn edit_interaction_reply(
        &self,
        application_id: Snowflake,
        token: &str,
        message: &MessagePayload,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("edit_interaction_reply"))
    }

    async fn get_original_interaction_reply(
        &self,
        application_id: Snowflake,
        token: &str,
    ) -> Result<Message, RemoteError> {
        Err(RemoteError::unsupported("get_original_interaction_reply"))
    }

    async fn delete_interaction_reply(
        &self,
        application_id: Snowflake,
        token: &str,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("delete_interaction_reply"))
    }

    async fn create_modal(
        &self,
        interaction_id: Snowflake,
        token: &str,
        modal: &ModalPayload,
    ) -> Result<(), RemoteError> {
        Err(RemoteError::unsupported("create_modal"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;
    impl RemoteClient for Stub {}

    #[tokio::test]
    async fn test_default_bodies_reject_as_unsupported() {
        let stub = Stub;
        let err = stub
            .create_message(Snowflake::new(1), &MessagePayload::default())
            .await
            .unwrap_err();
        assert!(err.message.contains("create_message"));

        let err = stub.get_guild_invites(Snowflake::new(2)).await.unwrap_err();
        assert!(err.message.contains("get_guild_invites"));
    }
}
