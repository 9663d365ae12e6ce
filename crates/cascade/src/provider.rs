//! Settings provider for the running deployment

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use cascade_core::{StoreSettingsSource, resolve_settings};

use crate::config::{ServerConfigSettings, SettingOrigin};
use crate::prelude::*;

/// Provides the resolved settings of a deployment
#[async_trait]
pub trait ServerConfigProvider: std::fmt::Debug + Send + Sync {
	/// Every setting key, resolved to its most specific value
	async fn all_settings(&self) -> CsResult<Vec<Setting>>;
}

/// Store-backed provider over the `env`, `env#region` and
/// `env#region#configType` levels of one deployment.
///
/// Only the filled levels become sources. The hierarchy is built once and
/// reused by every call.
#[derive(Debug)]
pub struct ServerConfig {
	params: DeploymentParams,
	hierarchy: Hierarchy,
	timeout: Option<Duration>,
}

impl ServerConfig {
	pub fn builder() -> ServerConfigBuilder {
		ServerConfigBuilder::new()
	}

	pub fn new(
		params: DeploymentParams,
		store: Arc<dyn SettingsStore>,
		timeout: Option<Duration>,
	) -> CsResult<Self> {
		let sources = deployment_levels(&params).into_iter().map(|level| {
			Arc::new(StoreSettingsSource::new(level, store.clone())) as Arc<dyn SettingsSource>
		});
		let hierarchy = Hierarchy::new(sources)?;

		info!("Settings provider for {} ({} levels)", params, hierarchy.len());
		Ok(Self { params, hierarchy, timeout })
	}

	pub fn params(&self) -> &DeploymentParams {
		&self.params
	}

	pub fn hierarchy(&self) -> &Hierarchy {
		&self.hierarchy
	}
}

#[async_trait]
impl ServerConfigProvider for ServerConfig {
	async fn all_settings(&self) -> CsResult<Vec<Setting>> {
		let Some(timeout) = self.timeout else {
			return resolve_settings(&self.hierarchy).await;
		};

		tokio::time::timeout(timeout, resolve_settings(&self.hierarchy)).await.map_err(|_| {
			warn!("Settings resolution for {} timed out after {:?}", self.params, timeout);
			Error::Timeout
		})?
	}
}

/// Deployment params of every filled level, least specific first
fn deployment_levels(params: &DeploymentParams) -> Vec<DeploymentParams> {
	let environment = DeploymentParams::environment(params.environment.clone());
	let mut levels = vec![environment.clone()];

	if let Some(region) = params.region.as_deref().filter(|r| !r.is_empty()) {
		let region = environment.with_region(region);
		levels.push(region.clone());

		if let Some(config_type) = params.config_type.as_deref().filter(|c| !c.is_empty()) {
			levels.push(region.with_config_type(config_type));
		}
	}

	levels
}

/// Builder for [`ServerConfig`]
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
	settings: ServerConfigSettings,
	timeout: Option<Duration>,
	store: Option<Arc<dyn SettingsStore>>,
}

impl ServerConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn environment(&mut self, origin: SettingOrigin) -> &mut Self {
		self.settings.environment = origin;
		self
	}

	pub fn region(&mut self, origin: SettingOrigin) -> &mut Self {
		self.settings.region = origin;
		self
	}

	pub fn config_type(&mut self, origin: SettingOrigin) -> &mut Self {
		self.settings.config_type = origin;
		self
	}

	pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
		self.timeout = Some(timeout);
		self
	}

	// Adapters
	pub fn store(&mut self, store: Arc<dyn SettingsStore>) -> &mut Self {
		self.store = Some(store);
		self
	}

	/// Build from the process environment
	pub fn build(&self) -> CsResult<ServerConfig> {
		self.build_with(|name| std::env::var(name).ok())
	}

	/// Build with a custom variable lookup
	pub fn build_with<F>(&self, lookup: F) -> CsResult<ServerConfig>
	where
		F: Fn(&str) -> Option<String>,
	{
		let Some(store) = self.store.clone() else {
			error!("FATAL: No settings store configured");
			return Err(Error::Config("No settings store configured".to_string()));
		};
		let params = self.settings.resolve(lookup)?;
		ServerConfig::new(params, store, self.timeout)
	}
}


// vim: ts=4
