//! Local entity cache boundary.
//!
//! The cache owns entity snapshots and permission resolution; the gate
//! only reads through this trait and tolerates a missing entry on every
//! lookup. Implementations must be safe for concurrent use by multiple
//! in-flight gate calls.

use wd_common::types::{
    CachedChannel, CachedGuild, CachedMessage, CachedReaction, Permissions, ReactionEmoji,
    Snowflake,
};

/// Effective permissions resolved for an actor in some scope.
///
/// An immutable snapshot taken at check time; the gate never mutates one
/// in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedPermissions {
    /// Bits the actor is allowed to use in the scope.
    pub allow: Permissions,
}

impl ResolvedPermissions {
    /// A resolved set granting exactly the given bits.
    #[must_use]
    pub const fn new(allow: Permissions) -> Self {
        Self { allow }
    }
}

/// Read-only view of the local entity cache.
#[allow(async_fn_in_trait)]
pub trait Cache {
    /// Channel snapshot by ID.
    async fn channel(&self, channel_id: Snowflake) -> Option<CachedChannel>;

    /// Guild snapshot by ID.
    async fn guild(&self, guild_id: Snowflake) -> Option<CachedGuild>;

    /// Message snapshot by ID.
    async fn message(&self, message_id: Snowflake) -> Option<CachedMessage>;

    /// Reaction record for one emoji on one message.
    async fn reaction(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
        emoji: &ReactionEmoji,
    ) -> Option<CachedReaction>;

    /// Effective permissions of `actor_id` in a channel, with overwrites
    /// applied.
    async fn channel_permissions(
        &self,
        guild_id: Snowflake,
        actor_id: Snowflake,
        channel_id: Snowflake,
    ) -> ResolvedPermissions;

    /// Effective guild-level permissions of `actor_id`.
    async fn guild_permissions(
        &self,
        guild_id: Snowflake,
        actor_id: Snowflake,
    ) -> ResolvedPermissions;
}
