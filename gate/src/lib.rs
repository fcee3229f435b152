//! `Warden` Request Gate
//!
//! Permission-aware validation layer sitting in front of a chat platform
//! REST client. Every mutating or sensitive call first resolves the
//! actor's effective permissions from a local cache, runs an ordered set
//! of precondition checks, validates the outbound payload against the
//! platform's documented limits, and only then forwards the call to the
//! remote client. Every failure, local or remote, comes back as a single
//! structured [`error::RequestError`] value; nothing in this crate throws.

pub mod cache;
pub mod config;
pub mod error;
pub mod gate;
pub mod permissions;
pub mod remote;
pub mod validation;

pub use cache::{Cache, ResolvedPermissions};
pub use config::{ConfigError, GateConfig};
pub use error::{GateResult, RequestError, ResourceLocator, CONTEXT_UNRESOLVED, REMOTE_CALL_FAILED};
pub use gate::{CallContext, Gate};
pub use permissions::{has_permission, CheckOutcome};
pub use remote::{RemoteClient, RemoteError};
pub use validation::Validation;
