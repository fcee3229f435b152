//! Guild-scoped request gate.

use wd_common::types::{
    AddMemberPayload, AuditLog, AuditLogQuery, Ban, BanPayload, BansQuery, BulkBanPayload,
    BulkBanResult, Channel, ChannelPositionUpdate, CreateChannelPayload, EditMemberPayload, Emoji,
    EmojiEditPayload, EmojiPayload, Guild, GuildEditPayload, GuildPreview, GuildQuery, Integration,
    Invite, Member, Onboarding, OnboardingPayload, PruneCountQuery, PrunePayload, PruneResult,
    Role, RolePayload, RolePositionUpdate, ScheduledEvent, ScheduledEventEditPayload,
    ScheduledEventPayload, Snowflake, Sticker, StickerEditPayload, StickerPayload, VanityUrl,
    Webhook, WelcomeScreen, WelcomeScreenPayload,
};

use crate::cache::Cache;
use crate::error::{GateResult, ResourceLocator};
use crate::gate::{ensure_allowed, forward, CallContext, Gate};
use crate::remote::RemoteClient;

/// Gate over guild-scoped operations.
pub struct GuildsGate<'g, C, R> {
    pub(crate) gate: &'g Gate<C, R>,
}

impl<C: Cache, R: RemoteClient> GuildsGate<'_, C, R> {
    /// Fetch a guild; reads need no precondition, only remote wrapping.
    pub async fn get(
        &self,
        guild_id: Snowflake,
        query: &GuildQuery,
        ctx: &CallContext,
    ) -> GateResult<Guild> {
        forward(
            self.gate.remote.get_guild(guild_id, query),
            ResourceLocator::guild(guild_id),
            "get guild",
            ctx,
        )
        .await
    }

    /// Fetch a guild's public preview.
    pub async fn get_preview(
        &self,
        guild_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<GuildPreview> {
        forward(
            self.gate.remote.get_guild_preview(guild_id),
            ResourceLocator::guild(guild_id),
            "get guild preview",
            ctx,
        )
        .await
    }

    /// Edit guild settings.
    pub async fn edit(
        &self,
        guild_id: Snowflake,
        body: &GuildEditPayload,
        ctx: &CallContext,
    ) -> GateResult<Guild> {
        const ACTION: &str = "edit guild";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_guild(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .edit_guild(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Create a channel in the guild.
    pub async fn create_channel(
        &self,
        guild_id: Snowflake,
        body: &CreateChannelPayload,
        ctx: &CallContext,
    ) -> GateResult<Channel> {
        const ACTION: &str = "create guild channel";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_channels(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_guild_channel(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Reorder the guild's channels.
    pub async fn set_channel_positions(
        &self,
        guild_id: Snowflake,
        body: &[ChannelPositionUpdate],
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "set channel positions";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_channels(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .set_channel_positions(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Add a member through OAuth; only the permissions matching present
    /// body fields are required.
    pub async fn add_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        body: &AddMemberPayload,
        ctx: &CallContext,
    ) -> GateResult<Option<Member>> {
        const ACTION: &str = "add guild member";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_add_member(guild_id, body).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.add_guild_member(guild_id, user_id, body),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit a member; only the permissions matching present body fields
    /// are required.
    pub async fn edit_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        body: &EditMemberPayload,
        ctx: &CallContext,
    ) -> GateResult<Member> {
        const ACTION: &str = "edit guild member";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_edit_member(guild_id, body).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .edit_guild_member(guild_id, user_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Kick a member.
    pub async fn remove_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "remove guild member";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_kick_members(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .remove_guild_member(guild_id, user_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Create a role.
    pub async fn create_role(
        &self,
        guild_id: Snowflake,
        body: &RolePayload,
        ctx: &CallContext,
    ) -> GateResult<Role> {
        const ACTION: &str = "create guild role";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_roles(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_role(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Reorder the guild's roles.
    pub async fn set_role_positions(
        &self,
        guild_id: Snowflake,
        body: &[RolePositionUpdate],
        ctx: &CallContext,
    ) -> GateResult<Vec<Role>> {
        const ACTION: &str = "set role positions";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_roles(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .set_role_positions(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit a role.
    pub async fn edit_role(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        body: &RolePayload,
        ctx: &CallContext,
    ) -> GateResult<Role> {
        const ACTION: &str = "edit guild role";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_roles(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .edit_role(guild_id, role_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Delete a role.
    pub async fn delete_role(
        &self,
        guild_id: Snowflake,
        role_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete guild role";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_roles(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .delete_role(guild_id, role_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Assign a role to a member.
    pub async fn add_role_to_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "add role to member";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_roles(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.add_role_to_member(
                guild_id,
                user_id,
                role_id,
                Some(ctx.reason.as_str()),
            ),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Remove a role from a member.
    pub async fn remove_role_from_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "remove role from member";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_roles(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.remove_role_from_member(
                guild_id,
                user_id,
                role_id,
                Some(ctx.reason.as_str()),
            ),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Fetch one ban record.
    pub async fn get_member_ban(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Ban> {
        const ACTION: &str = "get member ban";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_ban_members(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_member_ban(guild_id, user_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List ban records.
    pub async fn get_member_bans(
        &self,
        guild_id: Snowflake,
        query: &BansQuery,
        ctx: &CallContext,
    ) -> GateResult<Vec<Ban>> {
        const ACTION: &str = "get member bans";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_ban_members(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_member_bans(guild_id, query),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Ban a user.
    pub async fn ban_user(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        body: &BanPayload,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "ban user";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_ban_members(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .ban_user(guild_id, user_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Lift a ban.
    pub async fn unban_user(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "unban user";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_ban_members(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .unban_user(guild_id, user_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Ban many users at once; requires both moderation bits.
    pub async fn bulk_ban_users(
        &self,
        guild_id: Snowflake,
        body: &BulkBanPayload,
        ctx: &CallContext,
    ) -> GateResult<BulkBanResult> {
        const ACTION: &str = "bulk ban users";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_bulk_ban_users(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .bulk_ban_users(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Dry-run a prune.
    pub async fn get_prune_count(
        &self,
        guild_id: Snowflake,
        query: &PruneCountQuery,
        ctx: &CallContext,
    ) -> GateResult<PruneResult> {
        const ACTION: &str = "get prune count";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_kick_members(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_prune_count(guild_id, query),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Prune inactive members; requires both moderation bits.
    pub async fn begin_prune(
        &self,
        guild_id: Snowflake,
        body: &PrunePayload,
        ctx: &CallContext,
    ) -> GateResult<PruneResult> {
        const ACTION: &str = "begin prune";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_begin_prune(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .begin_prune(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List every invite of the guild.
    pub async fn get_invites(
        &self,
        guild_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Vec<Invite>> {
        const ACTION: &str = "get guild invites";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_guild(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_guild_invites(guild_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List the guild's integrations.
    pub async fn get_integrations(
        &self,
        guild_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Vec<Integration>> {
        const ACTION: &str = "get guild integrations";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_guild(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_integrations(guild_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Remove an integration.
    pub async fn delete_integration(
        &self,
        guild_id: Snowflake,
        integration_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete guild integration";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_guild(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.delete_integration(
                guild_id,
                integration_id,
                Some(ctx.reason.as_str()),
            ),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Fetch the vanity invite.
    pub async fn get_vanity_url(
        &self,
        guild_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<VanityUrl> {
        const ACTION: &str = "get vanity URL";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_guild(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_vanity_url(guild_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit the welcome screen.
    pub async fn edit_welcome_screen(
        &self,
        guild_id: Snowflake,
        body: &WelcomeScreenPayload,
        ctx: &CallContext,
    ) -> GateResult<WelcomeScreen> {
        const ACTION: &str = "edit welcome screen";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_guild(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .edit_welcome_screen(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Upload a custom emoji.
    pub async fn create_emoji(
        &self,
        guild_id: Snowflake,
        body: &EmojiPayload,
        ctx: &CallContext,
    ) -> GateResult<Emoji> {
        const ACTION: &str = "create guild emoji";
        let locator = ResourceLocator::guild(guild_id);
        let can = self
            .gate
            .guild_policy()
            .can_create_guild_expressions(guild_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_emoji(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit a custom emoji.
    pub async fn edit_emoji(
        &self,
        guild_id: Snowflake,
        emoji_id: Snowflake,
        body: &EmojiEditPayload,
        ctx: &CallContext,
    ) -> GateResult<Emoji> {
        const ACTION: &str = "edit guild emoji";
        let locator = ResourceLocator::guild(guild_id);
        let can = self
            .gate
            .guild_policy()
            .can_manage_guild_expressions(guild_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .edit_emoji(guild_id, emoji_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Delete a custom emoji.
    pub async fn delete_emoji(
        &self,
        guild_id: Snowflake,
        emoji_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete guild emoji";
        let locator = ResourceLocator::guild(guild_id);
        let can = self
            .gate
            .guild_policy()
            .can_manage_guild_expressions(guild_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .delete_emoji(guild_id, emoji_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Upload a custom sticker.
    pub async fn create_sticker(
        &self,
        guild_id: Snowflake,
        body: &StickerPayload,
        ctx: &CallContext,
    ) -> GateResult<Sticker> {
        const ACTION: &str = "create guild sticker";
        let locator = ResourceLocator::guild(guild_id);
        let can = self
            .gate
            .guild_policy()
            .can_create_guild_expressions(guild_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_sticker(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit a custom sticker.
    pub async fn edit_sticker(
        &self,
        guild_id: Snowflake,
        sticker_id: Snowflake,
        body: &StickerEditPayload,
        ctx: &CallContext,
    ) -> GateResult<Sticker> {
        const ACTION: &str = "edit guild sticker";
        let locator = ResourceLocator::guild(guild_id);
        let can = self
            .gate
            .guild_policy()
            .can_manage_guild_expressions(guild_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .edit_sticker(guild_id, sticker_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Delete a custom sticker.
    pub async fn delete_sticker(
        &self,
        guild_id: Snowflake,
        sticker_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete guild sticker";
        let locator = ResourceLocator::guild(guild_id);
        let can = self
            .gate
            .guild_policy()
            .can_manage_guild_expressions(guild_id)
            .await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .delete_sticker(guild_id, sticker_id, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Create a scheduled event.
    pub async fn create_scheduled_event(
        &self,
        guild_id: Snowflake,
        body: &ScheduledEventPayload,
        ctx: &CallContext,
    ) -> GateResult<ScheduledEvent> {
        const ACTION: &str = "create scheduled event";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_events(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .create_scheduled_event(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit a scheduled event.
    pub async fn edit_scheduled_event(
        &self,
        guild_id: Snowflake,
        event_id: Snowflake,
        body: &ScheduledEventEditPayload,
        ctx: &CallContext,
    ) -> GateResult<ScheduledEvent> {
        const ACTION: &str = "edit scheduled event";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_events(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.edit_scheduled_event(
                guild_id,
                event_id,
                body,
                Some(ctx.reason.as_str()),
            ),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Delete a scheduled event.
    pub async fn delete_scheduled_event(
        &self,
        guild_id: Snowflake,
        event_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<()> {
        const ACTION: &str = "delete scheduled event";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_events(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.delete_scheduled_event(guild_id, event_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Read the audit log.
    pub async fn get_audit_logs(
        &self,
        guild_id: Snowflake,
        query: &AuditLogQuery,
        ctx: &CallContext,
    ) -> GateResult<AuditLog> {
        const ACTION: &str = "get audit logs";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_view_audit_log(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_audit_logs(guild_id, query),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// List every webhook of the guild.
    pub async fn get_webhooks(
        &self,
        guild_id: Snowflake,
        ctx: &CallContext,
    ) -> GateResult<Vec<Webhook>> {
        const ACTION: &str = "get guild webhooks";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_manage_webhooks(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate.remote.get_guild_webhooks(guild_id),
            locator,
            ACTION,
            ctx,
        )
        .await
    }

    /// Edit onboarding; requires both the guild and role management
    /// bits.
    pub async fn edit_onboarding(
        &self,
        guild_id: Snowflake,
        body: &OnboardingPayload,
        ctx: &CallContext,
    ) -> GateResult<Onboarding> {
        const ACTION: &str = "edit guild onboarding";
        let locator = ResourceLocator::guild(guild_id);
        let can = self.gate.guild_policy().can_edit_onboarding(guild_id).await;
        ensure_allowed(can, &locator, ACTION, ctx)?;

        forward(
            self.gate
                .remote
                .edit_onboarding(guild_id, body, Some(ctx.reason.as_str())),
            locator,
            ACTION,
            ctx,
        )
        .await
    }
}
