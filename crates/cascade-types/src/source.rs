//! Settings source trait
//!
//! A source provides the raw settings defined at exactly one scope. The
//! resolution engine never inspects how a source obtains its data.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait SettingsSource: Debug + Send + Sync {
	/// The scope this source provides settings for
	fn scope(&self) -> Scope;

	/// Where the settings come from (for diagnostics)
	fn provenance(&self) -> &str;

	/// Load every setting defined at this source's scope
	async fn load_settings(&self) -> CsResult<Vec<Setting>>;
}

// vim: ts=4
