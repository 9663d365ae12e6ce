//! Deployment coordinates addressing one level of the settings hierarchy

use serde::{Deserialize, Serialize};

use crate::scope::Scope;

/// Separator between the segments of a provenance string
pub const PROVENANCE_SEPARATOR: char = '#';

/// Environment, region and config type of a deployment.
///
/// Each filled level narrows the addressed scope: the last filled level
/// determines the [`Scope`], and the filled segments joined by `#` form the
/// provenance string (`env01`, `env01#us-west-2`, `env01#us-west-2#myApp`).
/// Empty strings count as unfilled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentParams {
	pub environment: Box<str>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub region: Option<Box<str>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub config_type: Option<Box<str>>,
}

fn filled(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.is_empty())
}

impl DeploymentParams {
	pub fn environment(environment: impl Into<Box<str>>) -> Self {
		Self { environment: environment.into(), region: None, config_type: None }
	}

	pub fn with_region(mut self, region: impl Into<Box<str>>) -> Self {
		self.region = Some(region.into());
		self
	}

	pub fn with_config_type(mut self, config_type: impl Into<Box<str>>) -> Self {
		self.config_type = Some(config_type.into());
		self
	}

	/// The most specific filled level
	pub fn scope(&self) -> Scope {
		if filled(self.config_type.as_deref()).is_some() {
			Scope::ConfigType
		} else if filled(self.region.as_deref()).is_some() {
			Scope::Region
		} else {
			Scope::Environment
		}
	}

	/// Partition key of the addressed level.
	///
	/// Intermediate levels that are not filled are rendered as empty segments.
	pub fn provenance(&self) -> String {
		let region = self.region.as_deref().unwrap_or_default();
		let config_type = self.config_type.as_deref().unwrap_or_default();
		let sep = PROVENANCE_SEPARATOR;
		match self.scope() {
			Scope::ConfigType => format!("{}{sep}{}{sep}{}", self.environment, region, config_type),
			Scope::Region => format!("{}{sep}{}", self.environment, region),
			Scope::Environment => self.environment.to_string(),
		}
	}
}

impl std::fmt::Display for DeploymentParams {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.provenance())
	}
}


// vim: ts=4
