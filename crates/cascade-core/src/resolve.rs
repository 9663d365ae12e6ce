//! Resolution engine
//!
//! Orders each key group by specificity and links every setting to the one
//! it overrides. Only the most specific setting of each group is returned;
//! the rest of the group stays reachable through its `parent` chain.

use crate::group::group_settings;
use crate::prelude::*;

/// Resolve every key defined by the sources of `hierarchy` to its most specific setting.
///
/// Fails as a whole if any source fails or any group cannot be ordered; no
/// partial result is returned.
pub async fn resolve_settings(hierarchy: &Hierarchy) -> CsResult<Vec<Setting>> {
	let groups = group_settings(hierarchy).await?;

	let mut resolved = Vec::with_capacity(groups.len());
	for group in groups {
		let key = group.key.clone();
		if let Some(setting) = resolve_group(hierarchy, group)
			.inspect_err(|err| warn!("Cannot resolve setting '{}': {}", key, err))?
		{
			resolved.push(setting);
		}
	}

	debug!("Resolved {} settings", resolved.len());
	Ok(resolved)
}

/// Order one group least specific first and link the parent chain.
///
/// Returns the most specific setting, or `None` for an empty group. Scopes
/// outside the hierarchy fail with [`Error::UnknownScope`]; two settings at
/// the same scope fail with [`Error::DuplicateSetting`].
pub fn resolve_group(hierarchy: &Hierarchy, group: SettingsGroup) -> CsResult<Option<Setting>> {
	let mut ranked = group
		.settings
		.into_iter()
		.map(|setting| hierarchy.rank(setting.scope).map(|rank| (rank, setting)))
		.collect::<CsResult<Vec<_>>>()?;

	// Stable, so equal ranks keep fetch order until rejected below
	ranked.sort_by_key(|(rank, _)| *rank);

	let mut current: Option<(usize, Setting)> = None;
	for (rank, mut setting) in ranked {
		let parent = match current.take() {
			Some((prev_rank, _)) if prev_rank == rank => {
				return Err(Error::DuplicateSetting { key: setting.key, scope: setting.scope });
			}
			Some((_, prev)) => Some(Box::new(prev)),
			None => None,
		};
		setting.parent = parent;
		current = Some((rank, setting));
	}

	Ok(current.map(|(_, setting)| setting))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::stub::StubSource;

	const SHARED: &str = "SHARED";

	fn abc_hierarchy() -> Hierarchy {
		Hierarchy::new([
			StubSource::new(
				Scope::Environment,
				"srcA",
				vec![
					Setting::new(Scope::Environment, SHARED, "A", "test"),
					Setting::new(Scope::Environment, "another key", "Another", "test"),
				],
			),
			StubSource::new(Scope::Region, "srcB", vec![Setting::new(Scope::Region, SHARED, "B", "test")]),
			StubSource::new(
				Scope::ConfigType,
				"srcC",
				vec![Setting::new(Scope::ConfigType, SHARED, "C", "test")],
			),
		])
		.expect("hierarchy")
	}

	#[tokio::test]
	async fn test_links_parent_chain() {
		let settings = resolve_settings(&abc_hierarchy()).await.expect("resolve");
		assert_eq!(settings.len(), 2);

		let shared = &settings[0];
		assert_eq!(&*shared.key, SHARED);
		assert_eq!(&*shared.value, "C");
		assert_eq!(shared.scope, Scope::ConfigType);

		let parent = shared.parent.as_deref().expect("parent");
		assert_eq!(&*parent.key, SHARED);
		assert_eq!(&*parent.value, "B");
		assert_eq!(parent.scope, Scope::Region);

		let grandparent = parent.parent.as_deref().expect("grandparent");
		assert_eq!(&*grandparent.key, SHARED);
		assert_eq!(&*grandparent.value, "A");
		assert_eq!(grandparent.scope, Scope::Environment);
		assert!(grandparent.parent.is_none());

		let another = &settings[1];
		assert_eq!(&*another.value, "Another");
		assert!(another.parent.is_none());
	}

	#[test]
	fn test_group_order_does_not_matter() {
		let hierarchy = abc_hierarchy();
		let group = SettingsGroup {
			key: "x".into(),
			settings: vec![
				Setting::new(Scope::ConfigType, "x", "C", "t"),
				Setting::new(Scope::Environment, "x", "A", "t"),
				Setting::new(Scope::Region, "x", "B", "t"),
			],
		};

		let setting = resolve_group(&hierarchy, group).expect("resolve").expect("setting");
		let values: Vec<&str> = setting.chain().map(|s| &*s.value).collect();
		assert_eq!(values, vec!["C", "B", "A"]);
	}

	#[test]
	fn test_empty_group_yields_nothing() {
		let group = SettingsGroup { key: "x".into(), settings: Vec::new() };
		assert!(matches!(resolve_group(&abc_hierarchy(), group), Ok(None)));
	}

	#[test]
	fn test_stale_parent_is_replaced() {
		let stale = Setting {
			parent: Some(Box::new(Setting::new(Scope::Environment, "x", "stale", "t"))),
			..Setting::new(Scope::Region, "x", "B", "t")
		};
		let group = SettingsGroup { key: "x".into(), settings: vec![stale] };

		let setting = resolve_group(&abc_hierarchy(), group).expect("resolve").expect("setting");
		assert!(setting.parent.is_none());
	}

	#[test]
	fn test_unknown_scope_fails() {
		let hierarchy =
			Hierarchy::new([StubSource::empty(Scope::Environment), StubSource::empty(Scope::Region)])
				.expect("hierarchy");
		let group = SettingsGroup {
			key: "x".into(),
			settings: vec![
				Setting::new(Scope::Environment, "x", "A", "t"),
				Setting::new(Scope::ConfigType, "x", "C", "t"),
			],
		};

		let res = resolve_group(&hierarchy, group);
		assert!(matches!(res, Err(Error::UnknownScope(Scope::ConfigType))));
	}

	#[test]
	fn test_duplicate_scope_in_group_fails() {
		let group = SettingsGroup {
			key: "x".into(),
			settings: vec![
				Setting::new(Scope::Environment, "x", "A", "t"),
				Setting::new(Scope::Region, "x", "B", "t"),
				Setting::new(Scope::Environment, "x", "A2", "t"),
			],
		};

		let res = resolve_group(&abc_hierarchy(), group);
		match res {
			Err(Error::DuplicateSetting { key, scope }) => {
				assert_eq!(&*key, "x");
				assert_eq!(scope, Scope::Environment);
			}
			other => panic!("expected DuplicateSetting, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_unknown_scope_aborts_whole_resolution() {
		let hierarchy = Hierarchy::new([
			StubSource::new(
				Scope::Environment,
				"env01",
				vec![
					Setting::new(Scope::Environment, "good", "1", "env01"),
					Setting::new(Scope::ConfigType, "bad", "2", "env01"),
				],
			),
			StubSource::empty(Scope::Region),
		])
		.expect("hierarchy");

		let res = resolve_settings(&hierarchy).await;
		assert!(matches!(res, Err(Error::UnknownScope(Scope::ConfigType))));
	}
}

// vim: ts=4
