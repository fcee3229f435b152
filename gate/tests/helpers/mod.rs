//! Reusable test doubles for gate integration tests.
//!
//! `MockCache` serves entity snapshots and fixed permission masks from
//! maps; `MockRemote` records every dispatched operation so tests can
//! assert that denied calls never reach the wire.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use wd_common::types::{
    CachedChannel, CachedGuild, CachedMessage, CachedReaction, ChannelType, GuildFeature, Message,
    ReactionEmoji, User,
};
use wd_common::{Permissions, Snowflake};
use wd_gate::{Cache, Gate, GateConfig, RemoteClient, RemoteError, ResolvedPermissions};

pub const GUILD: Snowflake = Snowflake::new(100);
pub const CHANNEL: Snowflake = Snowflake::new(200);
pub const MESSAGE: Snowflake = Snowflake::new(300);
pub const OTHER_USER: Snowflake = Snowflake::new(555);

/// Actor ID encoded in [`test_config`]'s token (base64("900") = "OTAw").
pub const ACTOR: Snowflake = Snowflake::new(900);

pub fn test_config() -> GateConfig {
    GateConfig::new("http://localhost:8080/api", "OTAw.x.y", GUILD).expect("test token is valid")
}

#[derive(Default)]
pub struct MockCache {
    pub channels: HashMap<Snowflake, CachedChannel>,
    pub guilds: HashMap<Snowflake, CachedGuild>,
    pub messages: HashMap<Snowflake, CachedMessage>,
    pub reactions: HashMap<(Snowflake, Snowflake, String), CachedReaction>,
    pub channel_allow: Permissions,
    pub guild_allow: Permissions,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache with one guild channel of the given type.
    pub fn with_channel(kind: ChannelType) -> Self {
        let mut cache = Self::default();
        cache.channels.insert(
            CHANNEL,
            CachedChannel {
                id: CHANNEL,
                guild_id: Some(GUILD),
                kind,
                name: Some("general".into()),
            },
        );
        cache
    }

    pub fn channel_allow(mut self, allow: Permissions) -> Self {
        self.channel_allow = allow;
        self
    }

    pub fn guild_allow(mut self, allow: Permissions) -> Self {
        self.guild_allow = allow;
        self
    }

    pub fn with_guild_features(mut self, features: Vec<GuildFeature>) -> Self {
        self.guilds.insert(
            GUILD,
            CachedGuild {
                id: GUILD,
                name: Some("testers".into()),
                owner_id: Some(OTHER_USER),
                features,
            },
        );
        self
    }

    pub fn with_message_author(mut self, author_id: Snowflake) -> Self {
        self.messages.insert(
            MESSAGE,
            CachedMessage {
                id: MESSAGE,
                channel_id: CHANNEL,
                guild_id: Some(GUILD),
                author_id,
            },
        );
        self
    }

    pub fn with_dm_channel(mut self) -> Self {
        self.channels.insert(
            CHANNEL,
            CachedChannel {
                id: CHANNEL,
                guild_id: None,
                kind: ChannelType::Dm,
                name: None,
            },
        );
        self
    }
}

impl Cache for MockCache {
    async fn channel(&self, channel_id: Snowflake) -> Option<CachedChannel> {
        self.channels.get(&channel_id).cloned()
    }

    async fn guild(&self, guild_id: Snowflake) -> Option<CachedGuild> {
        self.guilds.get(&guild_id).cloned()
    }

    async fn message(&self, message_id: Snowflake) -> Option<CachedMessage> {
        self.messages.get(&message_id).cloned()
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
        ResolvedPermissions::new(self.channel_allow)
    }

    async fn guild_permissions(
        &self,
        _guild_id: Snowflake,
        _actor_id: Snowflake,
    ) -> ResolvedPermissions {
        ResolvedPermissions::new(self.guild_allow)
    }
}

/// Remote double recording dispatched operations and audit reasons.
#[derive(Default)]
pub struct MockRemote {
    pub calls: Mutex<Vec<String>>,
    pub reasons: Mutex<Vec<Option<String>>>,
    pub fail_with: Option<String>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn dispatched(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_reason(&self) -> Option<String> {
        self.reasons.lock().unwrap().last().cloned().flatten()
    }

    fn record<T>(&self, op: &str, reason: Option<&str>, ok: T) -> Result<T, RemoteError> {
        self.calls.lock().unwrap().push(op.to_string());
        self.reasons
            .lock()
            .unwrap()
            .push(reason.map(ToString::to_string));
        match &self.fail_with {
            Some(message) => Err(RemoteError::new(message.clone())),
            None => Ok(ok),
        }
    }
}

pub fn sample_message(channel_id: Snowflake) -> Message {
    Message {
        id: Snowflake::new(999),
        channel_id,
        author: User {
            id: ACTOR,
            username: "gatekeeper".into(),
            bot: true,
        },
        content: "ok".into(),
        flags: None,
    }
}

impl RemoteClient for MockRemote {
    async fn create_message(
        &self,
        channel_id: Snowflake,
        _message: &wd_common::types::MessagePayload,
    ) -> Result<Message, RemoteError> {
        self.record("create_message", None, sample_message(channel_id))
    }

    async fn edit_message(
        &self,
        channel_id: Snowflake,
        _message_id: Snowflake,
        _message: &wd_common::types::MessagePayload,
    ) -> Result<Message, RemoteError> {
        self.record("edit_message", None, sample_message(channel_id))
    }

    async fn delete_message(
        &self,
        _channel_id: Snowflake,
        _message_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        self.record("delete_message", reason, ())
    }

    async fn edit_channel(
        &self,
        channel_id: Snowflake,
        _body: &wd_common::types::ChannelEditPayload,
        reason: Option<&str>,
    ) -> Result<wd_common::types::Channel, RemoteError> {
        self.record(
            "edit_channel",
            reason,
            wd_common::types::Channel {
                id: channel_id,
                guild_id: Some(GUILD),
                kind: ChannelType::GuildText,
                name: Some("general".into()),
            },
        )
    }

    async fn create_forum_thread(
        &self,
        channel_id: Snowflake,
        _body: &wd_common::types::ForumThreadPayload,
        reason: Option<&str>,
    ) -> Result<wd_common::types::Channel, RemoteError> {
        self.record(
            "create_forum_thread",
            reason,
            wd_common::types::Channel {
                id: Snowflake::new(1000),
                guild_id: Some(GUILD),
                kind: ChannelType::PublicThread,
                name: Some("thread".into()),
            },
        )
    }

    async fn delete_own_message_reaction(
        &self,
        _channel_id: Snowflake,
        _message_id: Snowflake,
        _emoji: &ReactionEmoji,
    ) -> Result<(), RemoteError> {
        self.record("delete_own_message_reaction", None, ())
    }

    async fn edit_guild(
        &self,
        guild_id: Snowflake,
        _body: &wd_common::types::GuildEditPayload,
        reason: Option<&str>,
    ) -> Result<wd_common::types::Guild, RemoteError> {
        self.record(
            "edit_guild",
            reason,
            wd_common::types::Guild {
                id: guild_id,
                name: "testers".into(),
                owner_id: OTHER_USER,
                features: vec![],
                approximate_member_count: None,
            },
        )
    }

    async fn edit_guild_member(
        &self,
        _guild_id: Snowflake,
        user_id: Snowflake,
        _body: &wd_common::types::EditMemberPayload,
        reason: Option<&str>,
    ) -> Result<wd_common::types::Member, RemoteError> {
        self.record(
            "edit_guild_member",
            reason,
            wd_common::types::Member {
                user: User {
                    id: user_id,
                    username: "member".into(),
                    bot: false,
                },
                nick: None,
                roles: vec![],
                joined_at: chrono::Utc::now(),
            },
        )
    }

    async fn ban_user(
        &self,
        _guild_id: Snowflake,
        _user_id: Snowflake,
        _body: &wd_common::types::BanPayload,
        reason: Option<&str>,
    ) -> Result<(), RemoteError> {
        self.record("ban_user", reason, ())
    }

    async fn bulk_ban_users(
        &self,
        _guild_id: Snowflake,
        body: &wd_common::types::BulkBanPayload,
        reason: Option<&str>,
    ) -> Result<wd_common::types::BulkBanResult, RemoteError> {
        self.record(
            "bulk_ban_users",
            reason,
            wd_common::types::BulkBanResult {
                banned_users: body.user_ids.clone(),
                failed_users: vec![],
            },
        )
    }

    async fn edit_emoji(
        &self,
        _guild_id: Snowflake,
        emoji_id: Snowflake,
        _body: &wd_common::types::EmojiEditPayload,
        reason: Option<&str>,
    ) -> Result<wd_common::types::Emoji, RemoteError> {
        self.record(
            "edit_emoji",
            reason,
            wd_common::types::Emoji {
                id: emoji_id,
                name: "blob".into(),
                roles: vec![],
            },
        )
    }
}

/// Assemble a gate over the given doubles.
pub fn gate(cache: MockCache, remote: MockRemote) -> Gate<MockCache, MockRemote> {
    Gate::new(test_config(), cache, remote)
}
