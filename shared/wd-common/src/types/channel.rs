//! Channel Types

use serde::{Deserialize, Serialize};

use super::permissions::Permissions;
use super::snowflake::Snowflake;

/// Channel kind, discriminated by the numeric wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ChannelType {
    /// Text channel in a guild.
    GuildText = 0,
    /// Direct message between two users.
    Dm = 1,
    /// Voice channel in a guild.
    GuildVoice = 2,
    /// Direct message between multiple users.
    GroupDm = 3,
    /// Organizational category.
    GuildCategory = 4,
    /// Announcement (publishable) channel.
    GuildAnnouncement = 5,
    /// Thread under an announcement channel.
    AnnouncementThread = 10,
    /// Public thread under a text channel.
    PublicThread = 11,
    /// Private thread under a text channel.
    PrivateThread = 12,
    /// Stage voice channel.
    GuildStageVoice = 13,
    /// Hub directory channel.
    GuildDirectory = 14,
    /// Forum channel containing only threads.
    GuildForum = 15,
    /// Media channel containing only threads.
    GuildMedia = 16,
}

impl ChannelType {
    /// Whether this is one of the three thread kinds.
    #[must_use]
    pub const fn is_thread(self) -> bool {
        matches!(
            self,
            Self::AnnouncementThread | Self::PublicThread | Self::PrivateThread
        )
    }

    /// Whether threads in this channel are created through the forum flow.
    #[must_use]
    pub const fn is_thread_only(self) -> bool {
        matches!(self, Self::GuildForum | Self::GuildMedia)
    }
}

/// Unknown numeric discriminant on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown wire value {0}")]
pub struct UnknownWireValue(pub u8);

impl From<ChannelType> for u8 {
    fn from(kind: ChannelType) -> Self {
        kind as Self
    }
}

impl TryFrom<u8> for ChannelType {
    type Error = UnknownWireValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::GuildText),
            1 => Ok(Self::Dm),
            2 => Ok(Self::GuildVoice),
            3 => Ok(Self::GroupDm),
            4 => Ok(Self::GuildCategory),
            5 => Ok(Self::GuildAnnouncement),
            10 => Ok(Self::AnnouncementThread),
            11 => Ok(Self::PublicThread),
            12 => Ok(Self::PrivateThread),
            13 => Ok(Self::GuildStageVoice),
            14 => Ok(Self::GuildDirectory),
            15 => Ok(Self::GuildForum),
            16 => Ok(Self::GuildMedia),
            other => Err(UnknownWireValue(other)),
        }
    }
}

/// Channel snapshot as held by the local entity cache.
///
/// The gate only reads these fields; lifetime and consistency are the
/// cache's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedChannel {
    /// Channel ID.
    pub id: Snowflake,
    /// Owning guild, absent for direct-message channels.
    pub guild_id: Option<Snowflake>,
    /// Channel kind.
    #[serde(rename = "type")]
    pub kind: ChannelType,
    /// Channel name, absent for direct-message channels.
    pub name: Option<String>,
}

/// Role or member permission overwrite on a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionOverwrite {
    /// Role or user ID.
    pub id: Snowflake,
    /// Overwrite target: 0 = role, 1 = member.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Explicitly granted bits.
    pub allow: Permissions,
    /// Explicitly denied bits.
    pub deny: Permissions,
}

/// Body of a permission overwrite upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverwritePayload {
    /// Overwrite target: 0 = role, 1 = member.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Explicitly granted bits.
    pub allow: Permissions,
    /// Explicitly denied bits.
    pub deny: Permissions,
}

/// Which archive bucket to list threads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchivedStatus {
    /// Publicly archived threads.
    Public,
    /// Privately archived threads.
    Private,
}

impl ArchivedStatus {
    /// Whether this is the private bucket.
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Tag that can be applied to forum and media threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumTag {
    /// Tag ID, absent when creating a new tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    /// Tag name.
    pub name: String,
    /// Whether only moderators can apply the tag.
    #[serde(default)]
    pub moderated: bool,
    /// Custom emoji ID shown with the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_id: Option<Snowflake>,
    /// Unicode emoji shown with the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_name: Option<String>,
}

/// Default reaction shown on forum and media threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultReaction {
    /// Custom emoji ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_id: Option<Snowflake>,
    /// Unicode emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_name: Option<String>,
}

/// Camera quality for voice channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum VideoQualityMode {
    /// Chosen by the platform for optimal performance.
    Auto = 1,
    /// 720p.
    Full = 2,
}

impl From<VideoQualityMode> for u8 {
    fn from(mode: VideoQualityMode) -> Self {
        mode as Self
    }
}

impl TryFrom<u8> for VideoQualityMode {
    type Error = UnknownWireValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Auto),
            2 => Ok(Self::Full),
            other => Err(UnknownWireValue(other)),
        }
    }
}

/// Thread ordering in forum and media channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SortOrder {
    /// Sort by recent activity.
    LatestActivity = 0,
    /// Sort by creation time.
    CreationDate = 1,
}

impl From<SortOrder> for u8 {
    fn from(order: SortOrder) -> Self {
        order as Self
    }
}

impl TryFrom<u8> for SortOrder {
    type Error = UnknownWireValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::LatestActivity),
            1 => Ok(Self::CreationDate),
            other => Err(UnknownWireValue(other)),
        }
    }
}

/// Thread display layout in forum channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ForumLayout {
    /// No preference set.
    NotSet = 0,
    /// Threads as a list.
    ListView = 1,
    /// Threads as a gallery of tiles.
    GalleryView = 2,
}

impl From<ForumLayout> for u8 {
    fn from(layout: ForumLayout) -> Self {
        layout as Self
    }
}

impl TryFrom<u8> for ForumLayout {
    type Error = UnknownWireValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotSet),
            1 => Ok(Self::ListView),
            2 => Ok(Self::GalleryView),
            other => Err(UnknownWireValue(other)),
        }
    }
}

/// Channel edit request body.
///
/// Every field is optional; which fields are legal depends on the target
/// channel's type and is enforced by the gate's edit validator before the
/// request leaves the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelEditPayload {
    /// New channel name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New channel type; only Text <-> Announcement conversions exist.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChannelType>,
    /// Sorting position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u16>,
    /// Channel topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Age-restricted flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    /// Per-user message cooldown in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
    /// Voice bitrate in bits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// Voice user limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u16>,
    /// Full overwrite list replacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Vec<PermissionOverwrite>>,
    /// Parent category (or parent channel for threads).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    /// Voice region override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtc_region: Option<String>,
    /// Camera quality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_quality_mode: Option<VideoQualityMode>,
    /// Archive or unarchive a thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// Minutes of inactivity before a thread auto-archives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_archive_duration: Option<u16>,
    /// Default auto-archive duration for new threads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_auto_archive_duration: Option<u16>,
    /// Lock or unlock a thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Tags available in a forum or media channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_tags: Option<Vec<ForumTag>>,
    /// Whether non-moderators can invite others to a private thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitable: Option<bool>,
    /// Default reaction on forum and media threads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_reaction_emoji: Option<DefaultReaction>,
    /// Default per-user cooldown for newly created threads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_thread_rate_limit_per_user: Option<u16>,
    /// Default thread sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort_order: Option<SortOrder>,
    /// Default forum layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_forum_layout: Option<ForumLayout>,
    /// Tags applied to a forum or media thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_tags: Option<Vec<Snowflake>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_kinds() {
        assert!(ChannelType::PublicThread.is_thread());
        assert!(ChannelType::PrivateThread.is_thread());
        assert!(ChannelType::AnnouncementThread.is_thread());
        assert!(!ChannelType::GuildText.is_thread());
        assert!(!ChannelType::GuildForum.is_thread());
    }

    #[test]
    fn test_thread_only_kinds() {
        assert!(ChannelType::GuildForum.is_thread_only());
        assert!(ChannelType::GuildMedia.is_thread_only());
        assert!(!ChannelType::GuildText.is_thread_only());
    }

    #[test]
    fn test_channel_type_wire_roundtrip() {
        for kind in [
            ChannelType::GuildText,
            ChannelType::Dm,
            ChannelType::GuildVoice,
            ChannelType::GroupDm,
            ChannelType::GuildCategory,
            ChannelType::GuildAnnouncement,
            ChannelType::AnnouncementThread,
            ChannelType::PublicThread,
            ChannelType::PrivateThread,
            ChannelType::GuildStageVoice,
            ChannelType::GuildDirectory,
            ChannelType::GuildForum,
            ChannelType::GuildMedia,
        ] {
            let raw = u8::from(kind);
            assert_eq!(ChannelType::try_from(raw).unwrap(), kind);
        }
    }

    #[test]
    fn test_channel_type_rejects_unknown_value() {
        assert_eq!(ChannelType::try_from(7), Err(UnknownWireValue(7)));
    }

    #[test]
    fn test_edit_payload_serializes_only_set_fields() {
        let body = ChannelEditPayload {
            topic: Some("rules".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "topic": "rules" }));
    }
}
