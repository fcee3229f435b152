//! Channel edit validation.
//!
//! Every editable field is legal only for a fixed subset of channel
//! types. The special-cased name, type-conversion, and topic rules run
//! first, then the static field/type table in order; the first violation
//! wins and each rule owns one stable code.

use wd_common::types::{ChannelEditPayload, ChannelType};

use super::Validation;

/// Maximum channel name length.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum topic length for most channel types.
pub const MAX_TOPIC_LEN: usize = 1024;
/// Maximum topic length for forum and media channels.
pub const MAX_FORUM_TOPIC_LEN: usize = 4096;

const THREAD_TYPES: &[ChannelType] = &[
    ChannelType::AnnouncementThread,
    ChannelType::PublicThread,
    ChannelType::PrivateThread,
];

const NSFW_TYPES: &[ChannelType] = &[
    ChannelType::GuildText,
    ChannelType::GuildVoice,
    ChannelType::GuildAnnouncement,
    ChannelType::GuildStageVoice,
    ChannelType::GuildForum,
    ChannelType::GuildMedia,
];

const RATE_LIMIT_TYPES: &[ChannelType] = &[
    ChannelType::GuildText,
    ChannelType::AnnouncementThread,
    ChannelType::PublicThread,
    ChannelType::PrivateThread,
    ChannelType::GuildForum,
    ChannelType::GuildMedia,
    ChannelType::GuildStageVoice,
];

const VOICE_TYPES: &[ChannelType] = &[ChannelType::GuildVoice, ChannelType::GuildStageVoice];

const OVERWRITE_TYPES: &[ChannelType] = &[
    ChannelType::GuildText,
    ChannelType::GuildVoice,
    ChannelType::GroupDm,
    ChannelType::GuildCategory,
    ChannelType::GuildAnnouncement,
    ChannelType::GuildStageVoice,
    ChannelType::GuildDirectory,
    ChannelType::GuildForum,
    ChannelType::GuildMedia,
];

const PARENT_TYPES: &[ChannelType] = &[
    ChannelType::GuildText,
    ChannelType::GuildVoice,
    ChannelType::AnnouncementThread,
    ChannelType::GuildStageVoice,
    ChannelType::GuildForum,
    ChannelType::GuildMedia,
];

const DEFAULT_ARCHIVE_TYPES: &[ChannelType] = &[
    ChannelType::GuildText,
    ChannelType::GuildAnnouncement,
    ChannelType::GuildForum,
    ChannelType::GuildMedia,
];

const TAG_TYPES: &[ChannelType] = &[ChannelType::GuildForum, ChannelType::GuildMedia];

const THREAD_RATE_LIMIT_TYPES: &[ChannelType] = &[
    ChannelType::GuildForum,
    ChannelType::GuildMedia,
    ChannelType::GuildText,
];

/// One row of the field/type legality table.
struct FieldRule {
    present: fn(&ChannelEditPayload) -> bool,
    allowed: &'static [ChannelType],
    code: i32,
    message: &'static str,
}

/// Field legality in table order; evaluation stops at the first rule
/// whose field is present while the channel type is not in its list.
const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        present: |body| body.nsfw.is_some(),
        allowed: NSFW_TYPES,
        code: 6,
        message: "NSFW property can only be set for Text, Voice, Announcement, Stage, Forum and Media channels.",
    },
    FieldRule {
        present: |body| body.rate_limit_per_user.is_some(),
        allowed: RATE_LIMIT_TYPES,
        code: 7,
        message: "Rate limit per user can only be set for Text, Stage, Thread-type and Forum and Media channels.",
    },
    FieldRule {
        present: |body| body.bitrate.is_some(),
        allowed: VOICE_TYPES,
        code: 8,
        message: "Bitrate can only be set for Voice and Stage channels.",
    },
    FieldRule {
        present: |body| body.user_limit.is_some(),
        allowed: &[ChannelType::GuildVoice],
        code: 9,
        message: "User limit can only be set for Voice channels.",
    },
    FieldRule {
        present: |body| body.permission_overwrites.is_some(),
        allowed: OVERWRITE_TYPES,
        code: 10,
        message: "Permission overwrites cannot be set for Thread-type channels.",
    },
    FieldRule {
        present: |body| body.parent_id.is_some(),
        allowed: PARENT_TYPES,
        code: 11,
        message: "Parent can only be set for Text, Voice, Announcement, Stage Voice, Forum, and Media channels.",
    },
    FieldRule {
        present: |body| body.rtc_region.is_some(),
        allowed: &[ChannelType::GuildVoice],
        code: 12,
        message: "RTC region can only be set for Voice channels.",
    },
    FieldRule {
        present: |body| body.video_quality_mode.is_some(),
        allowed: VOICE_TYPES,
        code: 13,
        message: "Video quality mode can only be set for Voice and Stage channels.",
    },
    FieldRule {
        present: |body| body.archived.is_some(),
        allowed: THREAD_TYPES,
        code: 14,
        message: "Archived can only be set for Thread-type channels.",
    },
    FieldRule {
        present: |body| body.auto_archive_duration.is_some(),
        allowed: THREAD_TYPES,
        code: 15,
        message: "Auto archive duration can only be set for Thread-type channels.",
    },
    FieldRule {
        present: |body| body.default_auto_archive_duration.is_some(),
        allowed: DEFAULT_ARCHIVE_TYPES,
        code: 16,
        message: "Default auto archive duration can only be set for Text, Announcement, Forum, and Media channels.",
    },
    FieldRule {
        present: |body| body.locked.is_some(),
        allowed: THREAD_TYPES,
        code: 17,
        message: "Locked can only be set for Thread-type channels.",
    },
    FieldRule {
        present: |body| body.available_tags.is_some(),
        allowed: TAG_TYPES,
        code: 18,
        message: "Available tags can only be set for Forum and Media channels.",
    },
    FieldRule {
        present: |body| body.invitable.is_some(),
        allowed: &[ChannelType::PrivateThread],
        code: 19,
        message: "Invitable can only be set for Private Thread channels.",
    },
    FieldRule {
        present: |body| body.default_reaction_emoji.is_some(),
        allowed: TAG_TYPES,
        code: 20,
        message: "Default reaction emoji can only be set for Forum and Media channels.",
    },
    FieldRule {
        present: |body| body.default_thread_rate_limit_per_user.is_some(),
        allowed: THREAD_RATE_LIMIT_TYPES,
        code: 21,
        message: "Default thread rate limit per user can only be set for Forum, Media, and Text channels.",
    },
    FieldRule {
        present: |body| body.default_sort_order.is_some(),
        allowed: TAG_TYPES,
        code: 22,
        message: "Default sort order can only be set for Forum and Media channels.",
    },
    FieldRule {
        present: |body| body.default_forum_layout.is_some(),
        allowed: &[ChannelType::GuildForum],
        code: 23,
        message: "Default forum layout can only be set for Forum channels.",
    },
    FieldRule {
        present: |body| body.applied_tags.is_some(),
        allowed: TAG_TYPES,
        code: 24,
        message: "Applied tags can only be set for Forum and Media channels.",
    },
];

/// Validate a channel edit body against the target channel's type.
///
/// `news_allowed` reflects whether the owning guild carries the News
/// feature flag; a guild missing from the cache is treated as allowed,
/// leaving the final word to the platform.
#[must_use]
pub fn validate_channel_edit(
    kind: ChannelType,
    news_allowed: bool,
    body: &ChannelEditPayload,
) -> Validation {
    if body
        .name
        .as_ref()
        .is_some_and(|name| name.is_empty() || name.chars().count() > MAX_NAME_LEN)
    {
        return Validation::invalid(1, "Channel name must be between 1 and 100 characters");
    }

    if let Some(new_kind) = body.kind {
        if new_kind == ChannelType::GuildAnnouncement && !news_allowed {
            return Validation::invalid(
                2,
                "Guild does not have the News feature, cannot change channel type to GuildAnnouncement.",
            );
        }

        if !matches!(
            new_kind,
            ChannelType::GuildText | ChannelType::GuildAnnouncement
        ) {
            return Validation::invalid(
                3,
                "Invalid channel type. Only GuildText and GuildAnnouncement are allowed.",
            );
        }
    }

    if let Some(topic) = &body.topic {
        let topic_len = topic.chars().count();
        if kind.is_thread_only() {
            if topic_len > MAX_FORUM_TOPIC_LEN {
                return Validation::invalid(
                    4,
                    "Channel topic must be between 0 and 4096 characters for Media and Forum channels.",
                );
            }
        } else if topic_len > MAX_TOPIC_LEN {
            return Validation::invalid(5, "Channel topic must be between 0 and 1024 characters.");
        }
    }

    for rule in FIELD_RULES {
        if (rule.present)(body) && !rule.allowed.contains(&kind) {
            return Validation::invalid(rule.code, rule.message);
        }
    }

    Validation::Valid
}
