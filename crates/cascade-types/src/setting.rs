//! Settings, ordering tokens and per-key groups

use serde::{Deserialize, Serialize};

use crate::scope::Scope;

/// A key/value pair defined at one scope.
///
/// After resolution, `parent` points to the less specific setting with the
/// same key that this one overrides, forming a backward chain down to the
/// most general definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
	pub key: Box<str>,
	pub scope: Scope,
	pub value: Box<str>,
	/// Where the value originated (for diagnostics)
	pub provenance: Box<str>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent: Option<Box<Setting>>,
}

impl Setting {
	pub fn new(
		scope: Scope,
		key: impl Into<Box<str>>,
		value: impl Into<Box<str>>,
		provenance: impl Into<Box<str>>,
	) -> Self {
		Self {
			key: key.into(),
			scope,
			value: value.into(),
			provenance: provenance.into(),
			parent: None,
		}
	}

	pub fn token(&self) -> SettingsToken {
		SettingsToken { scope: self.scope, key: self.key.clone() }
	}

	/// This setting followed by every setting it overrides, most specific first
	pub fn chain(&self) -> impl Iterator<Item = &Setting> {
		std::iter::successors(Some(self), |setting| setting.parent.as_deref())
	}

	/// Every setting this one overrides, most specific first
	pub fn overridden(&self) -> impl Iterator<Item = &Setting> {
		self.chain().skip(1)
	}

	/// Number of overridden settings in the parent chain
	pub fn depth(&self) -> usize {
		self.overridden().count()
	}
}

/// The (scope, key) identity of a setting, used only for ordering
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingsToken {
	pub scope: Scope,
	pub key: Box<str>,
}

impl From<&Setting> for SettingsToken {
	fn from(setting: &Setting) -> Self {
		setting.token()
	}
}

/// All settings sharing one key, across every scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsGroup {
	pub key: Box<str>,
	pub settings: Vec<Setting>,
}


// vim: ts=4
