//! Configuration scopes
//!
//! The set of recognized scopes is closed. Their specificity is not encoded
//! here: a hierarchy ranks scopes by the position of their sources.

use serde::{Deserialize, Serialize};

/// One level of configuration specificity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
	/// Environment-wide (e.g. `env01`)
	#[serde(rename = "environment")]
	Environment,
	/// Region within an environment (e.g. `env01#us-west-2`)
	#[serde(rename = "region")]
	Region,
	/// Config type within a region (e.g. `env01#us-west-2#myApp`)
	#[serde(rename = "configType")]
	ConfigType,
}

impl Scope {
	pub fn as_str(&self) -> &'static str {
		match self {
			Scope::Environment => "environment",
			Scope::Region => "region",
			Scope::ConfigType => "configType",
		}
	}
}

impl std::fmt::Display for Scope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}


// vim: ts=4
