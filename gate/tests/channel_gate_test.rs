//! End-to-end tests for the channel gate: context resolution, permission
//! pre-flight, payload validation, and remote forwarding in order.

mod helpers;

use helpers::{gate, MockCache, MockRemote, ACTOR, CHANNEL, GUILD, MESSAGE, OTHER_USER};
use wd_common::types::{
    ChannelEditPayload, ChannelType, ForumThreadPayload, GuildFeature, MessagePayload,
    ReactionEmoji,
};
use wd_common::{Permissions, Snowflake};
use wd_gate::{CallContext, ResourceLocator, CONTEXT_UNRESOLVED, REMOTE_CALL_FAILED};

fn ctx() -> CallContext {
    CallContext::new("integration test", "testing")
}

fn full_sender() -> Permissions {
    Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::READ_MESSAGE_HISTORY
}

// ============================================================================
// Context resolution
// ============================================================================

#[tokio::test]
async fn test_unknown_channel_is_context_unresolved() {
    let gate = gate(MockCache::new(), MockRemote::new());

    let err = gate
        .channels()
        .create_message(CHANNEL, &MessagePayload::text("hi"), &ctx())
        .await
        .unwrap_err();

    assert!(err.is_context_unresolved());
    assert_eq!(err.debug, CONTEXT_UNRESOLVED);
    assert_eq!(err.locator, ResourceLocator::channel_only(CHANNEL));
    assert_eq!(err.message, "Channel not found in cache");
    assert!(gate.remote().dispatched().is_empty());
}

#[tokio::test]
async fn test_direct_message_channel_rejected_by_guild_method() {
    let cache = MockCache::new()
        .with_dm_channel()
        .channel_allow(Permissions::all());
    let gate = gate(cache, MockRemote::new());

    let err = gate
        .channels()
        .create_message(CHANNEL, &MessagePayload::text("hi"), &ctx())
        .await
        .unwrap_err();

    assert!(err.is_context_unresolved());
    assert!(err.message.contains("direct-message variant"));
    assert!(gate.remote().dispatched().is_empty());
}

// ============================================================================
// Permission pre-flight
// ============================================================================

#[tokio::test]
async fn test_view_only_actor_denied_on_send_messages() {
    let cache = MockCache::with_channel(ChannelType::GuildText)
        .channel_allow(Permissions::VIEW_CHANNEL);
    let gate = gate(cache, MockRemote::new());

    let err = gate
        .channels()
        .create_message(CHANNEL, &MessagePayload::text("hi"), &ctx())
        .await
        .unwrap_err();

    assert_eq!(err.debug, 2);
    assert_eq!(err.message, "Missing SendMessages permission");
    assert_eq!(err.action, "create message");
    assert_eq!(err.detail, "integration test");
    assert_eq!(err.reason, "testing");
    assert_eq!(err.locator, ResourceLocator::guild_channel(GUILD, CHANNEL));
    assert!(gate.remote().dispatched().is_empty());
}

#[tokio::test]
async fn test_delete_foreign_message_needs_manage_messages() {
    let cache = MockCache::with_channel(ChannelType::GuildText)
        .with_message_author(OTHER_USER)
        .channel_allow(Permissions::VIEW_CHANNEL);
    let gate = gate(cache, MockRemote::new());

    let err = gate
        .channels()
        .delete_message(CHANNEL, MESSAGE, &ctx())
        .await
        .unwrap_err();

    assert_eq!(err.debug, 2);
    assert!(err.message.contains("ManageMessages"));
    assert!(gate.remote().dispatched().is_empty());
}

#[tokio::test]
async fn test_delete_own_message_forwards_with_reason() {
    let cache = MockCache::with_channel(ChannelType::GuildText)
        .with_message_author(ACTOR)
        .channel_allow(Permissions::VIEW_CHANNEL);
    let gate = gate(cache, MockRemote::new());

    gate.channels()
        .delete_message(CHANNEL, MESSAGE, &ctx())
        .await
        .expect("own message deletion passes");

    assert_eq!(gate.remote().dispatched(), vec!["delete_message"]);
    assert_eq!(gate.remote().last_reason().as_deref(), Some("testing"));
}

#[tokio::test]
async fn test_delete_reaction_self_removal_without_record() {
    let cache = MockCache::with_channel(ChannelType::GuildText).channel_allow(full_sender());
    let gate = gate(cache, MockRemote::new());

    gate.channels()
        .delete_message_reaction(CHANNEL, MESSAGE, &ReactionEmoji::unicode("🔥"), &ctx())
        .await
        .expect("no cached record means self-removal");

    assert_eq!(gate.remote().dispatched(), vec!["delete_own_message_reaction"]);
}

// ============================================================================
// Payload validation (after permissions, before dispatch)
// ============================================================================

#[tokio::test]
async fn test_oversized_content_fails_before_any_remote_call() {
    let cache = MockCache::with_channel(ChannelType::GuildText).channel_allow(full_sender());
    let gate = gate(cache, MockRemote::new());

    let err = gate
        .channels()
        .create_message(CHANNEL, &MessagePayload::text("a".repeat(2001)), &ctx())
        .await
        .unwrap_err();

    assert_eq!(err.debug, 11);
    assert_eq!(err.message, "Message content must be 2000 or fewer characters");
    assert!(gate.remote().dispatched().is_empty());
}

#[tokio::test]
async fn test_bitrate_on_text_channel_rejected_by_edit_validator() {
    let cache = MockCache::with_channel(ChannelType::GuildText)
        .channel_allow(Permissions::VIEW_CHANNEL | Permissions::MANAGE_CHANNELS);
    let gate = gate(cache, MockRemote::new());

    let body = ChannelEditPayload {
        bitrate: Some(64000),
        ..ChannelEditPayload::default()
    };
    let err = gate.channels().edit(CHANNEL, &body, &ctx()).await.unwrap_err();

    assert_eq!(err.debug, 8);
    assert!(err.message.contains("Bitrate"));
    assert!(gate.remote().dispatched().is_empty());
}

#[tokio::test]
async fn test_announcement_conversion_requires_news_feature() {
    let cache = MockCache::with_channel(ChannelType::GuildText)
        .with_guild_features(vec![GuildFeature::Community])
        .channel_allow(Permissions::VIEW_CHANNEL | Permissions::MANAGE_CHANNELS);
    let gate = gate(cache, MockRemote::new());

    let body = ChannelEditPayload {
        kind: Some(ChannelType::GuildAnnouncement),
        ..ChannelEditPayload::default()
    };
    let err = gate.channels().edit(CHANNEL, &body, &ctx()).await.unwrap_err();
    assert_eq!(err.debug, 2);
    assert!(err.message.contains("News feature"));

    // With the flag the same edit dispatches.
    let cache = MockCache::with_channel(ChannelType::GuildText)
        .with_guild_features(vec![GuildFeature::News])
        .channel_allow(Permissions::VIEW_CHANNEL | Permissions::MANAGE_CHANNELS);
    let news_gate = helpers::gate(cache, MockRemote::new());
    news_gate
        .channels()
        .edit(CHANNEL, &body, &ctx())
        .await
        .expect("conversion legal with the News feature");
    assert_eq!(news_gate.remote().dispatched(), vec!["edit_channel"]);
}

// ============================================================================
// Operation-specific ordering
// ============================================================================

#[tokio::test]
async fn test_forum_thread_type_gate_runs_before_permissions() {
    // The actor holds no permissions at all, yet the wrong-channel-type
    // code reports first.
    let cache = MockCache::with_channel(ChannelType::GuildText).channel_allow(Permissions::empty());
    let gate = gate(cache, MockRemote::new());

    let body = ForumThreadPayload {
        name: "topic".into(),
        message: MessagePayload::text("first post"),
        ..ForumThreadPayload::default()
    };
    let err = gate
        .channels()
        .create_forum_thread(CHANNEL, &body, &ctx())
        .await
        .unwrap_err();

    assert_eq!(err.debug, 1);
    assert!(err.message.contains("Forum and Media channels"));
}

#[tokio::test]
async fn test_forum_thread_permission_check_after_type_gate() {
    let cache = MockCache::with_channel(ChannelType::GuildForum).channel_allow(Permissions::empty());
    let gate = gate(cache, MockRemote::new());

    let body = ForumThreadPayload {
        name: "topic".into(),
        message: MessagePayload::text("first post"),
        ..ForumThreadPayload::default()
    };
    let err = gate
        .channels()
        .create_forum_thread(CHANNEL, &body, &ctx())
        .await
        .unwrap_err();

    assert_eq!(err.debug, 1);
    assert_eq!(err.message, "Missing ViewChannel permission");
}

// ============================================================================
// Forwarding & remote failures
// ============================================================================

#[tokio::test]
async fn test_successful_call_returns_remote_result() {
    let cache = MockCache::with_channel(ChannelType::GuildText).channel_allow(full_sender());
    let gate = gate(cache, MockRemote::new());

    let message = gate
        .channels()
        .create_message(CHANNEL, &MessagePayload::text("hi"), &ctx())
        .await
        .expect("fully permitted call succeeds");

    assert_eq!(message.channel_id, CHANNEL);
    assert_eq!(gate.remote().dispatched(), vec!["create_message"]);
}

#[tokio::test]
async fn test_remote_rejection_wrapped_with_remote_code() {
    let cache = MockCache::with_channel(ChannelType::GuildText).channel_allow(full_sender());
    let gate = gate(cache, MockRemote::failing("50013: Missing Permissions"));

    let err = gate
        .channels()
        .create_message(CHANNEL, &MessagePayload::text("hi"), &ctx())
        .await
        .unwrap_err();

    assert!(err.is_remote_failure());
    assert_eq!(err.debug, REMOTE_CALL_FAILED);
    assert_eq!(err.message, "50013: Missing Permissions");
    assert!(err.source.is_some());
    // The call did reach the remote client.
    assert_eq!(gate.remote().dispatched(), vec!["create_message"]);
}

#[tokio::test]
async fn test_direct_message_passthrough_skips_checks() {
    // No cached channel, no permissions: the DM variant still dispatches.
    let gate = gate(MockCache::new(), MockRemote::new());

    gate.channels()
        .create_direct_message(Snowflake::new(777), &MessagePayload::text("hi"), &ctx())
        .await
        .expect("DM passthrough does not consult cache or policy");

    assert_eq!(gate.remote().dispatched(), vec!["create_message"]);
}
