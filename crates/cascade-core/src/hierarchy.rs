//! Ordered scope hierarchy
//!
//! Specificity is positional: sources are supplied least specific first, and
//! a scope's rank is the position of its source. Ranks are computed once at
//! construction so comparisons are a map lookup.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::prelude::*;

#[derive(Debug, Clone)]
pub struct Hierarchy {
	sources: Box<[Arc<dyn SettingsSource>]>,
	ranks: HashMap<Scope, usize>,
}

impl Hierarchy {
	/// Build a hierarchy from sources ordered least specific first.
	///
	/// Fails if two sources claim the same scope.
	pub fn new(sources: impl IntoIterator<Item = Arc<dyn SettingsSource>>) -> CsResult<Self> {
		let sources: Box<[Arc<dyn SettingsSource>]> = sources.into_iter().collect();
		let mut ranks = HashMap::with_capacity(sources.len());

		for (rank, source) in sources.iter().enumerate() {
			if ranks.insert(source.scope(), rank).is_some() {
				warn!("Scope {} configured twice (source '{}')", source.scope(), source.provenance());
				return Err(Error::DuplicateScope(source.scope()));
			}
		}

		debug!(
			"Hierarchy: [{}]",
			sources.iter().map(|s| s.provenance()).collect::<Vec<_>>().join(", ")
		);
		Ok(Self { sources, ranks })
	}

	pub fn sources(&self) -> &[Arc<dyn SettingsSource>] {
		&self.sources
	}

	/// Configured scopes, least specific first
	pub fn scopes(&self) -> impl Iterator<Item = Scope> + '_ {
		self.sources.iter().map(|source| source.scope())
	}

	pub fn len(&self) -> usize {
		self.sources.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sources.is_empty()
	}

	/// Position of `scope` in the hierarchy (0 = least specific)
	pub fn rank(&self, scope: Scope) -> CsResult<usize> {
		self.ranks.get(&scope).copied().ok_or(Error::UnknownScope(scope))
	}

	/// Order two tokens by the specificity of their scopes.
	///
	/// `Less` means `a` is less specific than `b`. Keys do not take part in
	/// the comparison.
	pub fn compare(&self, a: &SettingsToken, b: &SettingsToken) -> CsResult<Ordering> {
		Ok(self.rank(a.scope)?.cmp(&self.rank(b.scope)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::stub::StubSource;

	fn token(scope: Scope) -> SettingsToken {
		SettingsToken { scope, key: "key1".into() }
	}

	#[test]
	fn test_compare_follows_source_order() {
		let hierarchy = Hierarchy::new([
			StubSource::empty(Scope::ConfigType),
			StubSource::empty(Scope::Environment),
			StubSource::empty(Scope::Region),
		])
		.expect("hierarchy");

		let cfg = token(Scope::ConfigType);
		let env = token(Scope::Environment);
		let region = token(Scope::Region);

		assert_eq!(hierarchy.compare(&cfg, &env).ok(), Some(Ordering::Less));
		assert_eq!(hierarchy.compare(&cfg, &region).ok(), Some(Ordering::Less));
		assert_eq!(hierarchy.compare(&env, &region).ok(), Some(Ordering::Less));
		assert_eq!(hierarchy.compare(&region, &env).ok(), Some(Ordering::Greater));
		assert_eq!(hierarchy.compare(&region, &cfg).ok(), Some(Ordering::Greater));
		assert_eq!(hierarchy.compare(&region, &region).ok(), Some(Ordering::Equal));
	}

	#[test]
	fn test_compare_ignores_key() {
		let hierarchy =
			Hierarchy::new([StubSource::empty(Scope::Environment), StubSource::empty(Scope::Region)])
				.expect("hierarchy");

		let a = SettingsToken { scope: Scope::Environment, key: "zzz".into() };
		let b = SettingsToken { scope: Scope::Environment, key: "aaa".into() };
		assert_eq!(hierarchy.compare(&a, &b).ok(), Some(Ordering::Equal));
	}

	#[test]
	fn test_unknown_scope_is_rejected() {
		let hierarchy =
			Hierarchy::new([StubSource::empty(Scope::Environment), StubSource::empty(Scope::Region)])
				.expect("hierarchy");

		let res = hierarchy.compare(&token(Scope::ConfigType), &token(Scope::Environment));
		assert!(matches!(res, Err(Error::UnknownScope(Scope::ConfigType))));

		let res = hierarchy.compare(&token(Scope::Environment), &token(Scope::ConfigType));
		assert!(matches!(res, Err(Error::UnknownScope(Scope::ConfigType))));
	}

	#[test]
	fn test_duplicate_scope_is_rejected() {
		let res = Hierarchy::new([
			StubSource::empty(Scope::Environment),
			StubSource::empty(Scope::Environment),
		]);
		assert!(matches!(res, Err(Error::DuplicateScope(Scope::Environment))));
	}

	#[test]
	fn test_sources_keep_order() {
		let hierarchy =
			Hierarchy::new([StubSource::empty(Scope::Region), StubSource::empty(Scope::Environment)])
				.expect("hierarchy");

		assert_eq!(hierarchy.len(), 2);
		assert_eq!(hierarchy.scopes().collect::<Vec<_>>(), vec![Scope::Region, Scope::Environment]);
		assert_eq!(hierarchy.rank(Scope::Environment).ok(), Some(1));
	}

	#[test]
	fn test_empty_hierarchy() {
		let hierarchy = Hierarchy::new(Vec::<Arc<dyn SettingsSource>>::new()).expect("hierarchy");
		assert!(hierarchy.is_empty());
		assert!(matches!(hierarchy.rank(Scope::Environment), Err(Error::UnknownScope(_))));
	}
}

// vim: ts=4
