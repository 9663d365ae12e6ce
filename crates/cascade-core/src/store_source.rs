//! Settings source backed by a keyed settings store

use async_trait::async_trait;
use std::sync::Arc;

use cascade_types::deployment::DeploymentParams;
use cascade_types::settings_store::SettingsStore;

use crate::prelude::*;

/// Provides the settings stored for one deployment level.
///
/// The scope and provenance are derived from the deployment params: the last
/// filled level is the scope, and the joined levels are the partition key.
#[derive(Debug, Clone)]
pub struct StoreSettingsSource {
	params: DeploymentParams,
	provenance: Box<str>,
	store: Arc<dyn SettingsStore>,
}

impl StoreSettingsSource {
	pub fn new(params: DeploymentParams, store: Arc<dyn SettingsStore>) -> Self {
		let provenance = params.provenance().into_boxed_str();
		Self { params, provenance, store }
	}

	pub fn params(&self) -> &DeploymentParams {
		&self.params
	}
}

#[async_trait]
impl SettingsSource for StoreSettingsSource {
	fn scope(&self) -> Scope {
		self.params.scope()
	}

	fn provenance(&self) -> &str {
		&self.provenance
	}

	async fn load_settings(&self) -> CsResult<Vec<Setting>> {
		let settings = self.store.find_settings(&self.params).await?;
		debug!("Store returned {} settings for '{}'", settings.len(), self.provenance);
		Ok(settings)
	}
}


// vim: ts=4
