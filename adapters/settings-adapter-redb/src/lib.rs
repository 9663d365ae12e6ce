//! Redb-based Settings Store Adapter
//!
//! Implements the SettingsStore trait using redb as keyed datastore for
//! deployment settings.
//!
//! # Storage Layout
//!
//! All settings live in one table, `environment_settings`, keyed by
//! `(pk, key)`:
//! - `pk` - provenance of the deployment level (`env01`, `env01#us-west-2`,
//!   `env01#us-west-2#myApp`)
//! - `key` - setting name
//!
//! The value is the raw setting string. A query reads exactly one partition,
//! newest key first, up to the configured limit.
//!
//! The adapter only reads. Rows are written by whatever provisions the
//! database (see [`SettingsAdapterRedb::database`]).

use async_trait::async_trait;
use redb::ReadableDatabase;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

use cascade_types::deployment::DeploymentParams;
use cascade_types::prelude::*;
use cascade_types::settings_store::{FIND_SETTINGS_LIMIT, SettingsStore};

mod error;
pub use error::Error;

/// Settings adapter configuration
#[derive(Debug, Clone)]
pub struct AdapterConfig {
	/// Maximum number of settings returned for one partition
	pub limit: usize,
}

impl Default for AdapterConfig {
	fn default() -> Self {
		Self { limit: FIND_SETTINGS_LIMIT }
	}
}

// Storage table definitions
pub mod tables {
	use redb::TableDefinition;

	/// Stores setting values: (pk, key) -> value
	pub const TABLE_SETTINGS: TableDefinition<(&str, &str), &str> =
		TableDefinition::new("environment_settings");
}

use tables::TABLE_SETTINGS;

/// Settings store using redb for storage
pub struct SettingsAdapterRedb {
	/// Database file
	path: PathBuf,

	/// Configuration
	config: AdapterConfig,

	db: Arc<redb::Database>,
}

impl SettingsAdapterRedb {
	/// Open (or create) the settings database at `path`
	pub async fn new(path: impl AsRef<Path>, config: AdapterConfig) -> CsResult<Self> {
		let path = path.as_ref().to_path_buf();

		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			std::fs::create_dir_all(parent).map_err(|e| {
				Error::IoError(format!("Failed to create storage directory: {}", e))
			})?;
		}

		debug!("Opening settings database at {:?} (limit={})", path, config.limit);

		let db = redb::Database::create(&path).map_err(|e| {
			Error::DbError(format!("Failed to open database: {}", e))
		})?;

		// Create the table if it doesn't exist
		let tx = db.begin_write().map_err(|e| {
			Error::DbError(format!("Failed to begin write transaction: {}", e))
		})?;
		tx.open_table(TABLE_SETTINGS).map_err(|e| {
			Error::DbError(format!("Failed to open settings table: {}", e))
		})?;
		tx.commit().map_err(|e| {
			Error::DbError(format!("Failed to commit table creation: {}", e))
		})?;

		Ok(Self { path, config, db: Arc::new(db) })
	}

	/// The underlying database, for provisioning and fixtures
	pub fn database(&self) -> &redb::Database {
		&self.db
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

/// Read one partition, newest key first
fn find_partition(
	db: &redb::Database,
	pk: &str,
	scope: Scope,
	limit: usize,
) -> CsResult<Vec<Setting>> {
	let tx = db.begin_read().map_err(error::from_redb_error)?;
	let table = tx.open_table(TABLE_SETTINGS).map_err(error::from_redb_error)?;

	// Every (pk, _) key sorts below (pk + "\0", "")
	let upper = format!("{}\0", pk);
	let range = table.range((pk, "")..(upper.as_str(), "")).map_err(error::from_redb_error)?;

	let mut settings = Vec::new();
	for item in range.rev().take(limit) {
		let (key, value) = item.map_err(error::from_redb_error)?;
		let (_, name) = key.value();
		settings.push(Setting::new(scope, name, value.value(), pk));
	}

	Ok(settings)
}

#[async_trait]
impl SettingsStore for SettingsAdapterRedb {
	async fn find_settings(&self, params: &DeploymentParams) -> CsResult<Vec<Setting>> {
		let db = Arc::clone(&self.db);
		let pk = params.provenance();
		let scope = params.scope();
		let limit = self.config.limit;
		debug!("Finding settings for {:?} (pk={})", params, pk);

		let res = tokio::task::spawn_blocking(move || find_partition(&db, &pk, scope, limit))
			.await
			.map_err(Error::from)?;
		let settings = res?;

		trace!(
			"Found settings: {:?}",
			settings.iter().map(|s| (&*s.key, &*s.value)).collect::<Vec<_>>()
		);
		Ok(settings)
	}
}

impl std::fmt::Debug for SettingsAdapterRedb {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SettingsAdapterRedb")
			.field("path", &self.path)
			.field("config", &self.config)
			.finish()
	}
}

// vim: ts=4
