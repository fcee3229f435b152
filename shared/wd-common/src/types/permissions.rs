//! Permission bitflags.
//!
//! One bit per discrete capability, matching the platform's documented
//! bit layout. A resolved permission set is an immutable snapshot; the
//! gate never mutates one in place.

use bitflags::bitflags;

bitflags! {
    /// Capability set represented as a 64-bit bitfield.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Permissions: u64 {
        // === General (bits 0-7) ===
        /// Permission to create invite links
        const CREATE_INSTANT_INVITE = 1 << 0;
        /// Permission to kick members from the guild
        const KICK_MEMBERS          = 1 << 1;
        /// Permission to ban members from the guild
        const BAN_MEMBERS           = 1 << 2;
        /// All permissions; bypasses every other check
        const ADMINISTRATOR         = 1 << 3;
        /// Permission to create, edit, and delete channels
        const MANAGE_CHANNELS       = 1 << 4;
        /// Permission to modify guild settings
        const MANAGE_GUILD          = 1 << 5;
        /// Permission to add reactions to messages
        const ADD_REACTIONS         = 1 << 6;
        /// Permission to view the guild audit log
        const VIEW_AUDIT_LOG        = 1 << 7;

        // === Text (bits 10-18) ===
        /// Permission to view a channel
        const VIEW_CHANNEL          = 1 << 10;
        /// Permission to send messages in channels
        const SEND_MESSAGES         = 1 << 11;
        /// Permission to send text-to-speech messages
        const SEND_TTS_MESSAGES     = 1 << 12;
        /// Permission to delete and pin messages from other members
        const MANAGE_MESSAGES       = 1 << 13;
        /// Permission to embed links in messages
        const EMBED_LINKS           = 1 << 14;
        /// Permission to attach files to messages
        const ATTACH_FILES          = 1 << 15;
        /// Permission to read message history
        const READ_MESSAGE_HISTORY  = 1 << 16;
        /// Permission to mention @everyone and @here
        const MENTION_EVERYONE      = 1 << 17;
        /// Permission to use emoji from other guilds
        const USE_EXTERNAL_EMOJIS   = 1 << 18;

        // === Voice (bits 20-25) ===
        /// Permission to connect to voice channels
        const CONNECT               = 1 << 20;
        /// Permission to speak in voice channels
        const SPEAK                 = 1 << 21;
        /// Permission to mute other members in voice channels
        const MUTE_MEMBERS          = 1 << 22;
        /// Permission to deafen other members in voice channels
        const DEAFEN_MEMBERS        = 1 << 23;
        /// Permission to move members between voice channels
        const MOVE_MEMBERS          = 1 << 24;
        /// Permission to use voice activity detection
        const USE_VAD               = 1 << 25;

        // === Management (bits 26-31) ===
        /// Permission to change own nickname
        const CHANGE_NICKNAME       = 1 << 26;
        /// Permission to change other members' nicknames
        const MANAGE_NICKNAMES      = 1 << 27;
        /// Permission to create, edit, and delete roles and overwrites
        const MANAGE_ROLES          = 1 << 28;
        /// Permission to create, edit, and delete webhooks
        const MANAGE_WEBHOOKS       = 1 << 29;
        /// Permission to edit and delete guild emoji, stickers, and sounds
        const MANAGE_GUILD_EXPRESSIONS = 1 << 30;
        /// Permission to use application commands
        const USE_APPLICATION_COMMANDS = 1 << 31;

        // === Stage & threads (bits 32-38) ===
        /// Permission to request to speak in stage channels
        const REQUEST_TO_SPEAK      = 1 << 32;
        /// Permission to create, edit, and delete scheduled events
        const MANAGE_EVENTS         = 1 << 33;
        /// Permission to archive, lock, and delete threads
        const MANAGE_THREADS        = 1 << 34;
        /// Permission to create public threads
        const CREATE_PUBLIC_THREADS = 1 << 35;
        /// Permission to create private threads
        const CREATE_PRIVATE_THREADS = 1 << 36;
        /// Permission to use stickers from other guilds
        const USE_EXTERNAL_STICKERS = 1 << 37;
        /// Permission to send messages in threads
        const SEND_MESSAGES_IN_THREADS = 1 << 38;

        // === Moderation & expressions (bits 40-46) ===
        /// Permission to time members out
        const MODERATE_MEMBERS      = 1 << 40;
        /// Permission to use the soundboard
        const USE_SOUNDBOARD        = 1 << 42;
        /// Permission to create guild emoji, stickers, and sounds
        const CREATE_GUILD_EXPRESSIONS = 1 << 43;
        /// Permission to create scheduled events
        const CREATE_EVENTS         = 1 << 44;
        /// Permission to play soundboard sounds from other guilds
        const USE_EXTERNAL_SOUNDS   = 1 << 45;
        /// Permission to send voice messages
        const SEND_VOICE_MESSAGES   = 1 << 46;

        // === Polls (bit 49) ===
        /// Permission to create polls
        const SEND_POLLS            = 1 << 49;
    }
}

impl Permissions {
    /// Create a permission set from a raw wire value.
    ///
    /// Unknown bits are silently ignored to stay forward compatible with
    /// capabilities this library does not know about yet.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// The raw wire value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.bits()
    }

    /// Check if this permission set includes all of the specified bits.
    ///
    /// This is the plain subset test; the administrator override lives in
    /// the gate's permission checker, not here.
    #[must_use]
    pub const fn has(self, permission: Self) -> bool {
        self.contains(permission)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_permission_bits() {
        assert_eq!(Permissions::CREATE_INSTANT_INVITE.bits(), 1 << 0);
        assert_eq!(Permissions::KICK_MEMBERS.bits(), 1 << 1);
        assert_eq!(Permissions::BAN_MEMBERS.bits(), 1 << 2);
        assert_eq!(Permissions::ADMINISTRATOR.bits(), 1 << 3);
        assert_eq!(Permissions::MANAGE_CHANNELS.bits(), 1 << 4);
        assert_eq!(Permissions::MANAGE_GUILD.bits(), 1 << 5);
        assert_eq!(Permissions::ADD_REACTIONS.bits(), 1 << 6);
        assert_eq!(Permissions::VIEW_AUDIT_LOG.bits(), 1 << 7);
    }

    #[test]
    fn test_text_permission_bits() {
        assert_eq!(Permissions::VIEW_CHANNEL.bits(), 1 << 10);
        assert_eq!(Permissions::SEND_MESSAGES.bits(), 1 << 11);
        assert_eq!(Permissions::SEND_TTS_MESSAGES.bits(), 1 << 12);
        assert_eq!(Permissions::MANAGE_MESSAGES.bits(), 1 << 13);
        assert_eq!(Permissions::EMBED_LINKS.bits(), 1 << 14);
        assert_eq!(Permissions::ATTACH_FILES.bits(), 1 << 15);
        assert_eq!(Permissions::READ_MESSAGE_HISTORY.bits(), 1 << 16);
        assert_eq!(Permissions::MENTION_EVERYONE.bits(), 1 << 17);
        assert_eq!(Permissions::USE_EXTERNAL_EMOJIS.bits(), 1 << 18);
    }

    #[test]
    fn test_thread_and_expression_bits() {
        assert_eq!(Permissions::MANAGE_THREADS.bits(), 1 << 34);
        assert_eq!(Permissions::CREATE_PUBLIC_THREADS.bits(), 1 << 35);
        assert_eq!(Permissions::CREATE_PRIVATE_THREADS.bits(), 1 << 36);
        assert_eq!(Permissions::USE_EXTERNAL_STICKERS.bits(), 1 << 37);
        assert_eq!(Permissions::SEND_MESSAGES_IN_THREADS.bits(), 1 << 38);
        assert_eq!(Permissions::MODERATE_MEMBERS.bits(), 1 << 40);
        assert_eq!(Permissions::USE_SOUNDBOARD.bits(), 1 << 42);
        assert_eq!(Permissions::CREATE_GUILD_EXPRESSIONS.bits(), 1 << 43);
        assert_eq!(Permissions::USE_EXTERNAL_SOUNDS.bits(), 1 << 45);
        assert_eq!(Permissions::SEND_POLLS.bits(), 1 << 49);
    }

    #[test]
    fn test_has_requires_all_bits() {
        let perms = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;
        assert!(perms.has(Permissions::VIEW_CHANNEL));
        assert!(perms.has(Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES));
        assert!(!perms.has(Permissions::VIEW_CHANNEL | Permissions::MANAGE_MESSAGES));
    }

    #[test]
    fn test_from_raw_truncates_unknown_bits() {
        let perms = Permissions::from_raw((1 << 11) | (1 << 63));
        assert_eq!(perms, Permissions::SEND_MESSAGES);
        assert_eq!(perms.raw(), 1 << 11);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Permissions::default(), Permissions::empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = Permissions::VIEW_CHANNEL | Permissions::BAN_MEMBERS;
        let json = serde_json::to_string(&original).unwrap();
        let restored: Permissions = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
