//! Cascading deployment settings.
//!
//! Settings are defined redundantly at several levels of a deployment:
//! - environment (`env01`)
//! - region (`env01#us-west-2`)
//! - config type (`env01#us-west-2#myApp`)
//!
//! The most specific definition of a key wins, and every value it overrides
//! stays reachable through its parent chain.
//!
//! This crate wires the resolution engine to a settings store: the deployment
//! coordinates are bootstrapped from environment variables, and
//! [`ServerConfig`] resolves all settings of the running deployment.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

// Re-export shared types and adapter traits from cascade-types
pub use cascade_types::deployment;
pub use cascade_types::error;
pub use cascade_types::scope;
pub use cascade_types::setting;
pub use cascade_types::settings_store;
pub use cascade_types::source;

// Resolution engine re-exports
pub use cascade_core::{
	Hierarchy, StoreSettingsSource, group_settings, resolve_group, resolve_settings,
};

// Local modules
pub mod config;
pub mod prelude;
pub mod provider;

pub use crate::config::{EnvVar, ServerConfigSettings, SettingOrigin};
pub use crate::provider::{ServerConfig, ServerConfigBuilder, ServerConfigProvider};

// vim: ts=4
