//! Permission pre-flight evaluation.
//!
//! One policy per resource family, each exposing one async method per
//! operation. A method resolves the actor's effective allow mask once,
//! walks an ordered list of checks, and returns the first denial with a
//! stable code identifying the failed step, or the final success code.

pub mod channel;
pub mod check;
pub mod guild;

pub use channel::ChannelPolicy;
pub use check::{has_permission, CheckOutcome};
pub use guild::GuildPolicy;
