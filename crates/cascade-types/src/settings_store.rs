//! Adapter trait for keyed datastores holding deployment settings.
//!
//! Settings are stored under a partition key equal to the provenance of the
//! deployment level they belong to (see [`DeploymentParams::provenance`]),
//! with the setting key as sort key.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::deployment::DeploymentParams;
use crate::prelude::*;

/// Maximum number of settings returned for one deployment level
pub const FIND_SETTINGS_LIMIT: usize = 1000;

#[async_trait]
pub trait SettingsStore: Debug + Send + Sync {
	/// Find every setting stored for exactly the level addressed by `params`.
	///
	/// Results are ordered by key, descending, and capped at
	/// [`FIND_SETTINGS_LIMIT`]. Each setting carries the scope and provenance
	/// derived from `params`. An unknown level yields an empty list.
	async fn find_settings(&self, params: &DeploymentParams) -> CsResult<Vec<Setting>>;
}

// vim: ts=4
