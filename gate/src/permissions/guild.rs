//! Guild-scoped permission policy.
//!
//! Single-bit checks share one shape; the composites require both bits in
//! order. `can_manage_guild_expressions` is the one OR-combinator in the
//! whole rule set: either expression bit satisfies it, unlike every other
//! multi-bit rule which requires all of its bits.

use wd_common::types::{AddMemberPayload, EditMemberPayload, Snowflake};
use wd_common::Permissions;

use crate::cache::Cache;
use crate::permissions::check::{has_permission, run_ordered, CheckOutcome};

/// Permission preconditions for guild-scoped operations.
pub struct GuildPolicy<'a, C> {
    cache: &'a C,
    actor_id: Snowflake,
}

impl<'a, C: Cache> GuildPolicy<'a, C> {
    /// Policy evaluating checks on behalf of `actor_id`.
    pub const fn new(cache: &'a C, actor_id: Snowflake) -> Self {
        Self { cache, actor_id }
    }

    async fn allow(&self, guild_id: Snowflake) -> Permissions {
        self.cache
            .guild_permissions(guild_id, self.actor_id)
            .await
            .allow
    }

    /// Editing guild settings and most guild-level reads.
    pub async fn can_manage_guild(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_GUILD, "Missing ManageGuild permission")],
        )
    }

    /// Creating and reordering guild channels.
    pub async fn can_manage_channels(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_CHANNELS, "Missing ManageChannels permission")],
        )
    }

    /// Ban reads and writes.
    pub async fn can_ban_members(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::BAN_MEMBERS, "Missing BanMembers permission")],
        )
    }

    /// Kicking members and prune dry-runs.
    pub async fn can_kick_members(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::KICK_MEMBERS, "Missing KickMembers permission")],
        )
    }

    /// Role creation, edits, deletions, and assignments.
    pub async fn can_manage_roles(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_ROLES, "Missing ManageRoles permission")],
        )
    }

    /// Listing guild webhooks.
    pub async fn can_manage_webhooks(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_WEBHOOKS, "Missing ManageWebhooks permission")],
        )
    }

    /// Reading the audit log.
    pub async fn can_view_audit_log(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::VIEW_AUDIT_LOG, "Missing ViewAuditLog permission")],
        )
    }

    /// Editing or deleting guild emoji, stickers, and sounds.
    ///
    /// Either expression bit suffices; this is the only OR-combined rule.
    pub async fn can_manage_guild_expressions(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;

        if !has_permission(perms, Permissions::MANAGE_GUILD_EXPRESSIONS)
            && !has_permission(perms, Permissions::CREATE_GUILD_EXPRESSIONS)
        {
            return CheckOutcome::denied(
                1,
                "Missing ManageGuildExpressions or CreateGuildExpressions permission",
            );
        }

        CheckOutcome::allowed(2)
    }

    /// Creating guild emoji, stickers, and sounds.
    pub async fn can_create_guild_expressions(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[(
                true,
                Permissions::CREATE_GUILD_EXPRESSIONS,
                "Missing CreateGuildExpressions permission",
            )],
        )
    }

    /// Creating, editing, and deleting scheduled events.
    pub async fn can_manage_events(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[(true, Permissions::MANAGE_EVENTS, "Missing ManageEvents permission")],
        )
    }

    /// Bulk bans require both the ban and guild-management bits.
    pub async fn can_bulk_ban_users(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::BAN_MEMBERS, "Missing BanMembers permission"),
                (true, Permissions::MANAGE_GUILD, "Missing ManageGuild permission"),
            ],
        )
    }

    /// Pruning requires both the kick and guild-management bits.
    pub async fn can_begin_prune(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::KICK_MEMBERS, "Missing KickMembers permission"),
                (true, Permissions::MANAGE_GUILD, "Missing ManageGuild permission"),
            ],
        )
    }

    /// Onboarding edits require both the guild and role management bits.
    pub async fn can_edit_onboarding(&self, guild_id: Snowflake) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[
                (true, Permissions::MANAGE_GUILD, "Missing ManageGuild permission"),
                (true, Permissions::MANAGE_ROLES, "Missing ManageRoles permission"),
            ],
        )
    }

    /// OAuth member addition: the invite bit always, the rest only for
    /// fields actually present in the body.
    pub async fn can_add_member(
        &self,
        guild_id: Snowflake,
        body: &AddMemberPayload,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[
                (
                    true,
                    Permissions::CREATE_INSTANT_INVITE,
                    "Missing CreateInstantInvite permission",
                ),
                (body.nick.is_some(), Permissions::MANAGE_NICKNAMES, "Missing ManageNicknames permission"),
                (body.roles.is_some(), Permissions::MANAGE_ROLES, "Missing ManageRoles permission"),
                (body.mute.is_some(), Permissions::MUTE_MEMBERS, "Missing MuteMembers permission"),
                (body.deaf.is_some(), Permissions::DEAFEN_MEMBERS, "Missing DeafenMembers permission"),
            ],
        )
    }

    /// Member edits check only the permission matching each present
    /// field; an empty body passes without consulting any bit.
    pub async fn can_edit_member(
        &self,
        guild_id: Snowflake,
        body: &EditMemberPayload,
    ) -> CheckOutcome {
        let perms = self.allow(guild_id).await;
        run_ordered(
            perms,
            &[
                (body.nick.is_some(), Permissions::MANAGE_NICKNAMES, "Missing ManageNicknames permission"),
                (body.roles.is_some(), Permissions::MANAGE_ROLES, "Missing ManageRoles permission"),
                (body.mute.is_some(), Permissions::MUTE_MEMBERS, "Missing MuteMembers permission"),
                (body.deaf.is_some(), Permissions::DEAFEN_MEMBERS, "Missing DeafenMembers permission"),
                (body.channel_id.is_some(), Permissions::MOVE_MEMBERS, "Missing MoveMembers permission"),
                (
                    body.communication_disabled_until.is_some(),
                    Permissions::MODERATE_MEMBERS,
                    "Missing ModerateMembers permission",
                ),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use wd_common::types::{CachedChannel, CachedGuild, CachedMessage, CachedReaction, ReactionEmoji};

    use super::*;
    use crate::cache::ResolvedPermissions;

    const GUILD: Snowflake = Snowflake::new(100);
    const ACTOR: Snowflake = Snowflake::new(900);

    struct FakeCache {
        allow: Permissions,
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
            _channel_id: Snowflake,
            _message_id: Snowflake,
            _emoji: &ReactionEmoji,
        ) -> Option<CachedReaction> {
            None
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

    fn policy(allow: Permissions) -> GuildPolicy<'static, FakeCache> {
        GuildPolicy::new(Box::leak(Box::new(FakeCache { allow })), ACTOR)
    }

    // === single-bit checks ===

    #[tokio::test]
    async fn test_manage_guild_denied_and_allowed() {
        assert_eq!(
            policy(Permissions::empty()).can_manage_guild(GUILD).await,
            CheckOutcome::denied(1, "Missing ManageGuild permission")
        );
        assert_eq!(
            policy(Permissions::MANAGE_GUILD).can_manage_guild(GUILD).await,
            CheckOutcome::allowed(2)
        );
        assert_eq!(
            policy(Permissions::ADMINISTRATOR).can_manage_guild(GUILD).await,
            CheckOutcome::allowed(2)
        );
    }

    #[tokio::test]
    async fn test_single_bit_families() {
        assert!(policy(Permissions::MANAGE_CHANNELS)
            .can_manage_channels(GUILD)
            .await
            .is_allowed());
        assert!(policy(Permissions::BAN_MEMBERS).can_ban_members(GUILD).await.is_allowed());
        assert!(policy(Permissions::KICK_MEMBERS).can_kick_members(GUILD).await.is_allowed());
        assert!(policy(Permissions::MANAGE_ROLES).can_manage_roles(GUILD).await.is_allowed());
        assert!(policy(Permissions::MANAGE_WEBHOOKS)
            .can_manage_webhooks(GUILD)
            .await
            .is_allowed());
        assert!(policy(Permissions::VIEW_AUDIT_LOG)
            .can_view_audit_log(GUILD)
            .await
            .is_allowed());
        assert!(policy(Permissions::MANAGE_EVENTS).can_manage_events(GUILD).await.is_allowed());
        assert!(policy(Permissions::CREATE_GUILD_EXPRESSIONS)
            .can_create_guild_expressions(GUILD)
            .await
            .is_allowed());
    }

    // === composites require both bits ===

    #[tokio::test]
    async fn test_bulk_ban_requires_both_bits() {
        assert_eq!(
            policy(Permissions::MANAGE_GUILD).can_bulk_ban_users(GUILD).await,
            CheckOutcome::denied(1, "Missing BanMembers permission")
        );
        assert_eq!(
            policy(Permissions::BAN_MEMBERS).can_bulk_ban_users(GUILD).await,
            CheckOutcome::denied(2, "Missing ManageGuild permission")
        );
        assert_eq!(
            policy(Permissions::BAN_MEMBERS | Permissions::MANAGE_GUILD)
                .can_bulk_ban_users(GUILD)
                .await,
            CheckOutcome::allowed(3)
        );
    }

    #[tokio::test]
    async fn test_begin_prune_requires_both_bits() {
        assert_eq!(
            policy(Permissions::MANAGE_GUILD).can_begin_prune(GUILD).await,
            CheckOutcome::denied(1, "Missing KickMembers permission")
        );
        assert_eq!(
            policy(Permissions::KICK_MEMBERS).can_begin_prune(GUILD).await,
            CheckOutcome::denied(2, "Missing ManageGuild permission")
        );
        assert!(policy(Permissions::KICK_MEMBERS | Permissions::MANAGE_GUILD)
            .can_begin_prune(GUILD)
            .await
            .is_allowed());
    }

    #[tokio::test]
    async fn test_edit_onboarding_requires_both_bits() {
        assert_eq!(
            policy(Permissions::MANAGE_ROLES).can_edit_onboarding(GUILD).await,
            CheckOutcome::denied(1, "Missing ManageGuild permission")
        );
        assert_eq!(
            policy(Permissions::MANAGE_GUILD).can_edit_onboarding(GUILD).await,
            CheckOutcome::denied(2, "Missing ManageRoles permission")
        );
        assert!(policy(Permissions::MANAGE_GUILD | Permissions::MANAGE_ROLES)
            .can_edit_onboarding(GUILD)
            .await
            .is_allowed());
    }

    // === the OR-combinator ===

    #[tokio::test]
    async fn test_manage_expressions_either_bit_suffices() {
        assert!(policy(Permissions::MANAGE_GUILD_EXPRESSIONS)
            .can_manage_guild_expressions(GUILD)
            .await
            .is_allowed());
        assert!(policy(Permissions::CREATE_GUILD_EXPRESSIONS)
            .can_manage_guild_expressions(GUILD)
            .await
            .is_allowed());
        assert_eq!(
            policy(Permissions::MANAGE_GUILD)
                .can_manage_guild_expressions(GUILD)
                .await,
            CheckOutcome::denied(
                1,
                "Missing ManageGuildExpressions or CreateGuildExpressions permission"
            )
        );
    }

    // === field-conditional member checks ===

    #[tokio::test]
    async fn test_edit_member_empty_body_checks_nothing() {
        let outcome = policy(Permissions::empty())
            .can_edit_member(GUILD, &EditMemberPayload::default())
            .await;
        assert_eq!(outcome, CheckOutcome::allowed(7));
    }

    #[tokio::test]
    async fn test_edit_member_checks_only_present_fields() {
        let body = EditMemberPayload {
            roles: Some(vec![Snowflake::new(1)]),
            ..EditMemberPayload::default()
        };
        assert_eq!(
            policy(Permissions::empty()).can_edit_member(GUILD, &body).await,
            CheckOutcome::denied(2, "Missing ManageRoles permission")
        );
        assert!(policy(Permissions::MANAGE_ROLES)
            .can_edit_member(GUILD, &body)
            .await
            .is_allowed());
    }

    #[tokio::test]
    async fn test_edit_member_move_and_timeout_fields() {
        let move_body = EditMemberPayload {
            channel_id: Some(Snowflake::new(2)),
            ..EditMemberPayload::default()
        };
        assert_eq!(
            policy(Permissions::empty()).can_edit_member(GUILD, &move_body).await,
            CheckOutcome::denied(5, "Missing MoveMembers permission")
        );

        let timeout_body = EditMemberPayload {
            communication_disabled_until: Some(chrono::Utc::now()),
            ..EditMemberPayload::default()
        };
        assert_eq!(
            policy(Permissions::empty())
                .can_edit_member(GUILD, &timeout_body)
                .await,
            CheckOutcome::denied(6, "Missing ModerateMembers permission")
        );
    }

    #[tokio::test]
    async fn test_add_member_base_bit_always_checked() {
        let body = AddMemberPayload {
            access_token: "tok".into(),
            ..AddMemberPayload::default()
        };
        assert_eq!(
            policy(Permissions::empty()).can_add_member(GUILD, &body).await,
            CheckOutcome::denied(1, "Missing CreateInstantInvite permission")
        );
        assert_eq!(
            policy(Permissions::CREATE_INSTANT_INVITE)
                .can_add_member(GUILD, &body)
                .await,
            CheckOutcome::allowed(6)
        );
    }

    #[tokio::test]
    async fn test_add_member_conditional_fields() {
        let body = AddMemberPayload {
            access_token: "tok".into(),
            nick: Some("nick".into()),
            mute: Some(true),
            ..AddMemberPayload::default()
        };
        assert_eq!(
            policy(Permissions::CREATE_INSTANT_INVITE)
                .can_add_member(GUILD, &body)
                .await,
            CheckOutcome::denied(2, "Missing ManageNicknames permission")
        );
        assert_eq!(
            policy(Permissions::CREATE_INSTANT_INVITE | Permissions::MANAGE_NICKNAMES)
                .can_add_member(GUILD, &body)
                .await,
            CheckOutcome::denied(4, "Missing MuteMembers permission")
        );
    }
}
