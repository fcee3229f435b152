//! Message Types

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::component::Component;
use super::snowflake::Snowflake;

bitflags! {
    /// Message behavior flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct MessageFlags: u64 {
        /// Message has been published to subscribed channels.
        const CROSSPOSTED = 1 << 0;
        /// Message originated from a followed channel.
        const IS_CROSSPOST = 1 << 1;
        /// Do not render link embeds.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// Only visible to the invoking user.
        const EPHEMERAL = 1 << 6;
        /// Do not trigger push or desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
        /// Message uses the nested component layout instead of content.
        const IS_COMPONENTS_V2 = 1 << 15;
    }
}

/// Embed footer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
    /// Footer icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Embed author line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedAuthor {
    /// Author name.
    pub name: String,
    /// Author URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Author icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Embed name/value field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
    /// Whether the field renders inline.
    #[serde(default)]
    pub inline: bool,
}

/// Rich embed attached to a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embed {
    /// Embed title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Embed body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL the title links to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Accent color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Footer line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    /// Author line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    /// Name/value fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

/// Reference to the message being replied to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageReference {
    /// Referenced message.
    pub message_id: Snowflake,
    /// Channel of the referenced message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Guild of the referenced message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// Error instead of sending standalone when the referent is gone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_if_not_exists: Option<bool>,
}

/// Mention allowances for an outgoing message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllowedMentions {
    /// Mention kinds to parse from content ("users", "roles", "everyone").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parse: Vec<String>,
    /// Specific users allowed to be mentioned.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<Snowflake>,
    /// Specific roles allowed to be mentioned.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
}

/// File uploaded alongside a message (multipart, not part of the JSON body).
#[derive(Debug, Clone)]
pub struct FilePayload {
    /// File name including extension.
    pub name: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

/// Metadata for an attachment slot in the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentPayload {
    /// Attachment ID (index for new uploads).
    pub id: Snowflake,
    /// File name shown to users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Text or emoji of a poll question or answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PollMedia {
    /// Plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Emoji ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_id: Option<Snowflake>,
}

/// One answer of a poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PollAnswer {
    /// Answer text/emoji.
    pub poll_media: PollMedia,
}

/// Poll attached to a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PollPayload {
    /// Poll question.
    pub question: PollMedia,
    /// Poll answers.
    pub answers: Vec<PollAnswer>,
    /// Poll lifetime in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Whether multiple answers may be selected.
    #[serde(default)]
    pub allow_multiselect: bool,
}

/// Outgoing message body for create and edit calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Message text, up to the platform's content limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Rich embeds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    /// Sticker IDs to send.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sticker_ids: Vec<Snowflake>,
    /// Interactive or layout components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    /// Files uploaded out of band.
    #[serde(skip)]
    pub files: Vec<FilePayload>,
    /// Attachment metadata for uploaded files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentPayload>,
    /// Poll.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll: Option<PollPayload>,
    /// Read the message aloud.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub tts: bool,
    /// Reply reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReference>,
    /// Behavior flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
    /// Mention allowances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
}

impl MessagePayload {
    /// A plain text message.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Whether the payload opts into the nested component layout.
    #[must_use]
    pub fn is_components_v2(&self) -> bool {
        self.flags
            .is_some_and(|flags| flags.contains(MessageFlags::IS_COMPONENTS_V2))
    }
}

/// Emoji used when adding or removing reactions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReactionEmoji {
    /// Built-in unicode emoji.
    Unicode(String),
    /// Guild custom emoji.
    Custom {
        /// Emoji name.
        name: String,
        /// Emoji ID.
        id: Snowflake,
    },
}

impl ReactionEmoji {
    /// Unicode emoji from a string.
    #[must_use]
    pub fn unicode(emoji: impl Into<String>) -> Self {
        Self::Unicode(emoji.into())
    }

    /// Guild custom emoji from its name and ID.
    #[must_use]
    pub fn custom(name: impl Into<String>, id: Snowflake) -> Self {
        Self::Custom {
            name: name.into(),
            id,
        }
    }

    /// Whether this is a guild custom emoji rather than a unicode one.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

impl fmt::Display for ReactionEmoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode(emoji) => write!(f, "{emoji}"),
            Self::Custom { name, id } => write!(f, "{name}:{id}"),
        }
    }
}

/// Message snapshot as held by the local entity cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedMessage {
    /// Message ID.
    pub id: Snowflake,
    /// Channel the message was posted in.
    pub channel_id: Snowflake,
    /// Guild the message was posted in, absent for direct messages.
    pub guild_id: Option<Snowflake>,
    /// Message author.
    pub author_id: Snowflake,
}

/// Reaction snapshot as held by the local entity cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedReaction {
    /// Number of users who reacted with this emoji.
    pub count: u32,
    /// Whether the current application added this reaction.
    pub me: bool,
}
