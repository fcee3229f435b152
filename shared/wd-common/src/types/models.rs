//! Remote object models.
//!
//! Snapshot structs for the objects the remote platform returns from
//! forwarded calls. Only the commonly consumed fields are modeled; the
//! remote client may hydrate them from richer wire objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::channel::ChannelType;
use super::guild::GuildFeature;
use super::message::MessageFlags;
use super::permissions::Permissions;
use super::snowflake::Snowflake;

/// Platform user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Snowflake,
    /// Unique username.
    pub username: String,
    /// Whether the user is an application.
    #[serde(default)]
    pub bot: bool,
}

/// Guild returned from a fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guild {
    /// Guild ID.
    pub id: Snowflake,
    /// Guild name.
    pub name: String,
    /// Guild owner.
    pub owner_id: Snowflake,
    /// Enabled capability flags.
    #[serde(default)]
    pub features: Vec<GuildFeature>,
    /// Approximate member count when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<u64>,
}

/// Public guild preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildPreview {
    /// Guild ID.
    pub id: Snowflake,
    /// Guild name.
    pub name: String,
    /// Guild description.
    pub description: Option<String>,
    /// Approximate member count.
    pub approximate_member_count: u64,
}

/// Channel returned from a create or edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Channel ID.
    pub id: Snowflake,
    /// Owning guild.
    pub guild_id: Option<Snowflake>,
    /// Channel kind.
    #[serde(rename = "type")]
    pub kind: ChannelType,
    /// Channel name.
    pub name: Option<String>,
}

/// Message returned from a create, edit, or fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message ID.
    pub id: Snowflake,
    /// Channel the message lives in.
    pub channel_id: Snowflake,
    /// Message author.
    pub author: User,
    /// Message text.
    #[serde(default)]
    pub content: String,
    /// Behavior flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
}

/// Guild member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// The member's user record.
    pub user: User,
    /// Nickname in the guild.
    pub nick: Option<String>,
    /// Assigned role IDs.
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    /// Join time.
    pub joined_at: DateTime<Utc>,
}

/// Guild role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Role ID.
    pub id: Snowflake,
    /// Role name.
    pub name: String,
    /// Granted permission bits.
    pub permissions: Permissions,
    /// Sorting position.
    pub position: i32,
}

/// Guild ban record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ban {
    /// Banned user.
    pub user: User,
    /// Audit reason recorded with the ban.
    pub reason: Option<String>,
}

/// Result of a bulk ban.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkBanResult {
    /// Users that were banned.
    pub banned_users: Vec<Snowflake>,
    /// Users that could not be banned.
    pub failed_users: Vec<Snowflake>,
}

/// Result of a prune or prune dry-run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PruneResult {
    /// Members removed, absent when counting was skipped.
    pub pruned: Option<u64>,
}

/// Channel invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invite {
    /// Invite code.
    pub code: String,
    /// Guild the invite points into.
    pub guild_id: Option<Snowflake>,
    /// Channel the invite points at.
    pub channel_id: Option<Snowflake>,
    /// Remaining uses, absent for unlimited invites.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses: Option<u32>,
}

/// Channel webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook ID.
    pub id: Snowflake,
    /// Channel the webhook posts to.
    pub channel_id: Option<Snowflake>,
    /// Webhook name.
    pub name: Option<String>,
    /// Posting token, present for incoming webhooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Result of following an announcement channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowedChannel {
    /// The followed announcement channel.
    pub channel_id: Snowflake,
    /// Webhook created in the target channel.
    pub webhook_id: Snowflake,
}

/// Guild custom emoji.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emoji {
    /// Emoji ID.
    pub id: Snowflake,
    /// Emoji name.
    pub name: String,
    /// Roles allowed to use the emoji.
    #[serde(default)]
    pub roles: Vec<Snowflake>,
}

/// Guild custom sticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sticker {
    /// Sticker ID.
    pub id: Snowflake,
    /// Sticker name.
    pub name: String,
    /// Autocomplete tags.
    pub tags: String,
}

/// Guild scheduled event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Event ID.
    pub id: Snowflake,
    /// Owning guild.
    pub guild_id: Snowflake,
    /// Event name.
    pub name: String,
    /// Start time.
    pub scheduled_start_time: DateTime<Utc>,
}

/// Member of a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadMember {
    /// Thread ID.
    pub id: Option<Snowflake>,
    /// Member's user ID.
    pub user_id: Option<Snowflake>,
    /// Join time.
    pub join_timestamp: DateTime<Utc>,
}

/// One page of archived threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedThreads {
    /// Threads on this page.
    pub threads: Vec<Channel>,
    /// Thread-member records for threads the current user joined.
    #[serde(default)]
    pub members: Vec<ThreadMember>,
    /// Whether further pages exist.
    pub has_more: bool,
}

/// Live stage instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageInstance {
    /// Stage instance ID.
    pub id: Snowflake,
    /// Owning guild.
    pub guild_id: Snowflake,
    /// Stage channel.
    pub channel_id: Snowflake,
    /// Topic shown above the stage.
    pub topic: String,
}

/// Voice state of a guild member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceState {
    /// Channel the member is connected to.
    pub channel_id: Option<Snowflake>,
    /// Member's user ID.
    pub user_id: Snowflake,
    /// Whether the member is suppressed.
    #[serde(default)]
    pub suppress: bool,
}

/// Guild integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    /// Integration ID.
    pub id: Snowflake,
    /// Integration name.
    pub name: String,
    /// Integration kind ("twitch", "youtube", ...).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Guild vanity invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VanityUrl {
    /// Vanity code, absent when unset.
    pub code: Option<String>,
    /// Number of uses.
    pub uses: u32,
}

/// Guild welcome screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeScreen {
    /// Guild description shown on the screen.
    pub description: Option<String>,
    /// Featured channels.
    #[serde(default)]
    pub welcome_channels: Vec<super::guild::WelcomeChannel>,
}

/// Audit log page.
///
/// Entries are a deeply nested platform structure consumed opaquely by
/// callers, so they stay loosely typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    /// Audit log entries.
    #[serde(default)]
    pub audit_log_entries: Vec<serde_json::Value>,
    /// Users referenced by the entries.
    #[serde(default)]
    pub users: Vec<User>,
}

/// Guild onboarding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Onboarding {
    /// Owning guild.
    pub guild_id: Snowflake,
    /// Onboarding prompts.
    #[serde(default)]
    pub prompts: Vec<serde_json::Value>,
    /// Whether onboarding is enabled.
    pub enabled: bool,
}
