//! Cascading resolution engine.
//!
//! Settings for one key may be defined at several scopes. A [`Hierarchy`]
//! ranks the scopes by the order of their sources; the grouping engine
//! fetches every source concurrently and partitions the results by key; the
//! resolution engine sorts each group by rank and links every setting to the
//! less specific one it overrides, yielding one winning setting per key.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod group;
pub mod hierarchy;
pub mod prelude;
pub mod resolve;
pub mod store_source;

#[cfg(test)]
mod stub;

pub use group::group_settings;
pub use hierarchy::Hierarchy;
pub use resolve::{resolve_group, resolve_settings};
pub use store_source::StoreSettingsSource;

// vim: ts=4
