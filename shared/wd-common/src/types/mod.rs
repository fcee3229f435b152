//! Shared wire types.

pub mod channel;
pub mod component;
pub mod guild;
pub mod message;
pub mod models;
pub mod permissions;
pub mod query;
pub mod snowflake;

pub use channel::*;
pub use component::*;
pub use guild::*;
pub use message::*;
pub use models::*;
pub use permissions::Permissions;
pub use query::*;
pub use snowflake::{Snowflake, SnowflakeError};
