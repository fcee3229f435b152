//! `Warden` Common Library
//!
//! Wire types shared by the request gate and its embedders: identifiers,
//! permission bitflags, request payloads, cached-entity snapshots, and
//! remote object models.

pub mod types;

pub use types::*;
