//! In-memory settings source for unit tests

use async_trait::async_trait;
use std::sync::Arc;

use crate::prelude::*;

#[derive(Debug)]
pub struct StubSource {
	scope: Scope,
	provenance: Box<str>,
	settings: Result<Vec<Setting>, String>,
}

impl StubSource {
	pub fn new(scope: Scope, provenance: &str, settings: Vec<Setting>) -> Arc<dyn SettingsSource> {
		Arc::new(Self { scope, provenance: provenance.into(), settings: Ok(settings) })
	}

	pub fn empty(scope: Scope) -> Arc<dyn SettingsSource> {
		Self::new(scope, scope.as_str(), Vec::new())
	}

	pub fn failing(scope: Scope, provenance: &str, reason: &str) -> Arc<dyn SettingsSource> {
		Arc::new(Self { scope, provenance: provenance.into(), settings: Err(reason.into()) })
	}
}

#[async_trait]
impl SettingsSource for StubSource {
	fn scope(&self) -> Scope {
		self.scope
	}

	fn provenance(&self) -> &str {
		&self.provenance
	}

	async fn load_settings(&self) -> CsResult<Vec<Setting>> {
		self.settings.clone().map_err(Error::DbError)
	}
}

// vim: ts=4
