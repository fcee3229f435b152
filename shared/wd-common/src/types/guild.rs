//! Guild Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::channel::{ChannelType, PermissionOverwrite};
use super::message::FilePayload;
use super::permissions::Permissions;
use super::snowflake::Snowflake;

/// Guild capability flag.
///
/// Carried as SCREAMING_SNAKE strings on the wire; only the flags the
/// gate inspects plus a handful of common ones are modeled, everything
/// else is preserved as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuildFeature {
    /// Animated guild icon.
    AnimatedIcon,
    /// Guild banner image.
    Banner,
    /// Community features enabled.
    Community,
    /// Listed in discovery.
    Discoverable,
    /// Invite splash image.
    InviteSplash,
    /// Announcement channels available.
    News,
    /// Partnered guild.
    Partnered,
    /// Vanity invite URL.
    VanityUrl,
    /// Verified guild.
    Verified,
    /// Welcome screen enabled.
    WelcomeScreenEnabled,
    /// Any flag this library does not model.
    #[serde(untagged)]
    Unknown(String),
}

/// Guild snapshot as held by the local entity cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedGuild {
    /// Guild ID.
    pub id: Snowflake,
    /// Guild name.
    pub name: Option<String>,
    /// Guild owner.
    pub owner_id: Option<Snowflake>,
    /// Enabled capability flags.
    #[serde(default)]
    pub features: Vec<GuildFeature>,
}

impl CachedGuild {
    /// Whether the guild has the given capability flag.
    #[must_use]
    pub fn has_feature(&self, feature: &GuildFeature) -> bool {
        self.features.contains(feature)
    }
}

/// Guild edit request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuildEditPayload {
    /// New guild name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Guild description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Verification level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<u8>,
    /// Default notification setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message_notifications: Option<u8>,
    /// AFK voice channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Snowflake>,
    /// AFK timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    /// System message channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Snowflake>,
    /// Rules channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_channel_id: Option<Snowflake>,
}

/// Guild channel creation body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateChannelPayload {
    /// Channel name.
    pub name: String,
    /// Channel kind, text if absent.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChannelType>,
    /// Channel topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Voice bitrate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// Voice user limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u16>,
    /// Per-user message cooldown in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
    /// Sorting position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u16>,
    /// Parent category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    /// Age-restricted flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    /// Initial overwrites.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permission_overwrites: Vec<PermissionOverwrite>,
}

/// One entry of a channel reordering request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPositionUpdate {
    /// Channel to move.
    pub id: Snowflake,
    /// New sorting position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u16>,
    /// Sync overwrites with the new parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_permissions: Option<bool>,
    /// New parent category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
}

/// Member addition body (OAuth join).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddMemberPayload {
    /// OAuth access token of the joining user.
    pub access_token: String,
    /// Nickname to apply on join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Roles to apply on join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Snowflake>>,
    /// Server-mute on join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    /// Server-deafen on join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
}

/// Member edit body.
///
/// Absent fields are left untouched by the platform, and the gate only
/// checks the permission matching each present field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditMemberPayload {
    /// New nickname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Full role list replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Snowflake>>,
    /// Server-mute state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    /// Server-deafen state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
    /// Voice channel to move the member to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Timeout expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<DateTime<Utc>>,
}

/// Role creation and edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolePayload {
    /// Role name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Granted permission bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    /// Role color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Display role members separately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoist: Option<bool>,
    /// Role is mentionable by everyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentionable: Option<bool>,
}

/// One entry of a role reordering request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePositionUpdate {
    /// Role to move.
    pub id: Snowflake,
    /// New sorting position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u16>,
}

/// Ban request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BanPayload {
    /// Seconds of recent messages to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_message_seconds: Option<u32>,
}

/// Bulk ban request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkBanPayload {
    /// Users to ban.
    pub user_ids: Vec<Snowflake>,
    /// Seconds of recent messages to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_message_seconds: Option<u32>,
}

/// Prune request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrunePayload {
    /// Days of inactivity.
    pub days: u8,
    /// Return the pruned count (expensive on large guilds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_prune_count: Option<bool>,
    /// Roles whose members are prunable despite the role.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_roles: Vec<Snowflake>,
}

/// Emoji creation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmojiPayload {
    /// Emoji name.
    pub name: String,
    /// Data-URI encoded image.
    pub image: String,
    /// Roles allowed to use the emoji.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
}

/// Emoji edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmojiEditPayload {
    /// New emoji name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Roles allowed to use the emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Snowflake>>,
}

/// Sticker creation body.
#[derive(Debug, Clone)]
pub struct StickerPayload {
    /// Sticker name.
    pub name: String,
    /// Sticker description.
    pub description: String,
    /// Autocomplete tags.
    pub tags: String,
    /// Sticker image file.
    pub file: FilePayload,
}

/// Sticker edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StickerEditPayload {
    /// New sticker name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New autocomplete tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Scheduled event creation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledEventPayload {
    /// Event name.
    pub name: String,
    /// Stage or voice channel hosting the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Privacy level (guild-only = 2).
    pub privacy_level: u8,
    /// Event kind (stage = 1, voice = 2, external = 3).
    pub entity_type: u8,
    /// Start time.
    pub scheduled_start_time: DateTime<Utc>,
    /// End time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<DateTime<Utc>>,
    /// Event description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Scheduled event edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduledEventEditPayload {
    /// New event name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New hosting channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// New status (scheduled = 1, active = 2, completed = 3, canceled = 4).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    /// New start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start_time: Option<DateTime<Utc>>,
    /// New end time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end_time: Option<DateTime<Utc>>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One channel entry of a welcome screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeChannel {
    /// Featured channel.
    pub channel_id: Snowflake,
    /// Description shown under the channel.
    pub description: String,
    /// Custom emoji shown next to the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_id: Option<Snowflake>,
    /// Unicode emoji shown next to the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_name: Option<String>,
}

/// Welcome screen edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WelcomeScreenPayload {
    /// Enable or disable the welcome screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Featured channels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub welcome_channels: Vec<WelcomeChannel>,
    /// Guild description shown on the screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Onboarding edit body.
///
/// Prompts are a deeply nested platform structure the gate forwards
/// untouched, so they stay loosely typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingPayload {
    /// Onboarding prompts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prompts: Vec<serde_json::Value>,
    /// Channels every new member sees.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_channel_ids: Vec<Snowflake>,
    /// Enable or disable onboarding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Onboarding mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u8>,
}

/// Stage instance creation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageInstancePayload {
    /// Stage channel to go live in.
    pub channel_id: Snowflake,
    /// Topic shown above the stage.
    pub topic: String,
    /// Privacy level (guild-only = 2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<u8>,
    /// Notify @everyone that the stage started.
    #[serde(default)]
    pub send_start_notification: bool,
    /// Scheduled event the stage belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_scheduled_event_id: Option<Snowflake>,
}

/// Stage instance edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageInstanceEditPayload {
    /// New topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// New privacy level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<u8>,
}

/// Current-user voice state edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceStateEditPayload {
    /// Stage channel the state applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Toggle suppressed state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress: Option<bool>,
    /// Raise or lower the hand; a timestamp raises it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_to_speak_timestamp: Option<DateTime<Utc>>,
}

/// Another user's voice state edit body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserVoiceStateEditPayload {
    /// Stage channel the user is in.
    pub channel_id: Snowflake,
    /// Toggle suppressed state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress: Option<bool>,
}

/// Channel invite creation body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvitePayload {
    /// Invite lifetime in seconds, 0 = never expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    /// Maximum number of uses, 0 = unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u16>,
    /// Grant temporary membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    /// Always create a new invite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
}

/// Webhook creation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Webhook name.
    pub name: String,
    /// Data-URI encoded avatar image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Webhook edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookEditPayload {
    /// New webhook name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New avatar image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Move the webhook to another channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
}

/// Thread creation body (standalone or from a message).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreadPayload {
    /// Thread name.
    pub name: String,
    /// Minutes of inactivity before the thread auto-archives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_archive_duration: Option<u16>,
    /// Thread kind for standalone threads.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChannelType>,
    /// Whether non-moderators can invite others (private threads).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitable: Option<bool>,
    /// Per-user message cooldown in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
}

/// Forum or media thread creation body: a thread plus its first message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForumThreadPayload {
    /// Thread name.
    pub name: String,
    /// Minutes of inactivity before the thread auto-archives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_archive_duration: Option<u16>,
    /// Per-user message cooldown in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
    /// First message of the thread.
    pub message: super::message::MessagePayload,
    /// Tags applied to the thread.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_tags: Vec<Snowflake>,
}

/// Soundboard sound playback body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundboardSoundPayload {
    /// Sound to play.
    pub sound_id: Snowflake,
    /// Guild the sound belongs to, when not the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_guild_id: Option<Snowflake>,
}

/// Modal shown in response to an interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalPayload {
    /// Developer-defined identifier reported back on submit.
    pub custom_id: String,
    /// Modal title.
    pub title: String,
    /// Text input rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<super::component::Component>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guild_feature_wire_names() {
        let json = serde_json::to_string(&GuildFeature::News).unwrap();
        assert_eq!(json, "\"NEWS\"");
        let json = serde_json::to_string(&GuildFeature::VanityUrl).unwrap();
        assert_eq!(json, "\"VANITY_URL\"");
    }

    #[test]
    fn test_guild_feature_unknown_preserved() {
        let feature: GuildFeature = serde_json::from_str("\"SOME_NEW_FLAG\"").unwrap();
        assert_eq!(feature, GuildFeature::Unknown("SOME_NEW_FLAG".into()));
    }

    #[test]
    fn test_has_feature() {
        let guild = CachedGuild {
            id: Snowflake::new(1),
            name: Some("test".into()),
            owner_id: None,
            features: vec![GuildFeature::News, GuildFeature::Community],
        };
        assert!(guild.has_feature(&GuildFeature::News));
        assert!(!guild.has_feature(&GuildFeature::Verified));
    }

    #[test]
    fn test_edit_member_payload_empty_body() {
        let body = EditMemberPayload::default();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
