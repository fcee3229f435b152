//! Query-string parameter types for read operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::snowflake::Snowflake;

/// Paging parameters for channel message listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MessagesQuery {
    /// Messages around this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub around: Option<Snowflake>,
    /// Messages before this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Snowflake>,
    /// Messages after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Snowflake>,
    /// Page size, 1-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
}

/// Paging parameters for reaction user listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReactionUsersQuery {
    /// Users after this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Snowflake>,
    /// Page size, 1-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
}

/// Paging parameters for archived thread listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ArchivedThreadsQuery {
    /// Threads archived before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTime<Utc>>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
}

/// Filter parameters for audit log listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AuditLogQuery {
    /// Entries by this actor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Snowflake>,
    /// Entries of this action type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<u16>,
    /// Entries before this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Snowflake>,
    /// Page size, 1-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
}

/// Parameters for the prune dry-run count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PruneCountQuery {
    /// Days of inactivity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u8>,
    /// Roles whose members are prunable despite the role.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_roles: Vec<Snowflake>,
}

/// Parameters for guild fetches.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GuildQuery {
    /// Include approximate member and presence counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_counts: Option<bool>,
}

/// Parameters for invite fetches.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InviteQuery {
    /// Include approximate member counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_counts: Option<bool>,
    /// Include the expiry time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_expiration: Option<bool>,
}

/// Paging parameters for ban listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BansQuery {
    /// Bans before this user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Snowflake>,
    /// Bans after this user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Snowflake>,
    /// Page size, 1-1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
}
