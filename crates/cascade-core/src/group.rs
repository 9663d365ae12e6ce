//! Grouping engine
//!
//! Loads every source of a hierarchy concurrently and partitions the
//! combined settings by key.

use futures::future::try_join_all;
use std::collections::HashMap;

use crate::prelude::*;

/// Load all sources of `hierarchy` and group their settings by key.
///
/// Sources are fetched concurrently and all of them must succeed: the first
/// failure aborts the call with [`Error::SourceFetch`] and drops the fetches
/// still in flight. Groups appear in the order their key was first seen,
/// walking the sources in hierarchy order.
pub async fn group_settings(hierarchy: &Hierarchy) -> CsResult<Vec<SettingsGroup>> {
	let matrix = try_join_all(hierarchy.sources().iter().map(|source| async move {
		source
			.load_settings()
			.await
			.inspect_err(|err| {
				warn!("Loading settings from '{}' failed: {}", source.provenance(), err);
			})
			.map_err(|err| Error::source_fetch(source.scope(), source.provenance(), err))
	}))
	.await?;

	let total: usize = matrix.iter().map(Vec::len).sum();
	let groups = partition(matrix.into_iter().flatten());
	debug!(
		"Loaded {} settings from {} sources into {} groups",
		total,
		hierarchy.len(),
		groups.len()
	);

	Ok(groups)
}

/// Partition settings by key, keeping first-seen key order
pub fn partition(settings: impl IntoIterator<Item = Setting>) -> Vec<SettingsGroup> {
	let mut index: HashMap<Box<str>, usize> = HashMap::new();
	let mut groups: Vec<SettingsGroup> = Vec::new();

	for setting in settings {
		if let Some(group) = index.get(&setting.key).and_then(|&i| groups.get_mut(i)) {
			group.settings.push(setting);
		} else {
			index.insert(setting.key.clone(), groups.len());
			groups.push(SettingsGroup { key: setting.key.clone(), settings: vec![setting] });
		}
	}

	groups
}


// vim: ts=4
