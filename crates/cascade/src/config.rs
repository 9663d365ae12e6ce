//! Deployment coordinates bootstrapped from environment variables

use crate::prelude::*;

pub const VAR_ENVIRONMENT: &str = "BLUE_ENVIRONMENT";
pub const VAR_REGION: &str = "BLUE_REGION";
pub const VAR_CONFIG_TYPE: &str = "BLUE_CONFIG_TYPE";

/// An environment variable with a fallback value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
	pub variable: Box<str>,
	pub default: Box<str>,
}

impl EnvVar {
	pub fn new(variable: impl Into<Box<str>>, default: impl Into<Box<str>>) -> Self {
		Self { variable: variable.into(), default: default.into() }
	}

	/// Value of the variable if it is set and not empty, the default otherwise
	pub fn resolve_env<F>(&self, lookup: F) -> Box<str>
	where
		F: Fn(&str) -> Option<String>,
	{
		match lookup(&self.variable) {
			Some(value) if !value.is_empty() => value.into(),
			_ => self.default.clone(),
		}
	}
}

/// Where the value of one deployment level comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingOrigin {
	Env(EnvVar),
	Fixed(Box<str>),
}

impl SettingOrigin {
	pub fn env(variable: impl Into<Box<str>>, default: impl Into<Box<str>>) -> Self {
		SettingOrigin::Env(EnvVar::new(variable, default))
	}

	pub fn fixed(value: impl Into<Box<str>>) -> Self {
		SettingOrigin::Fixed(value.into())
	}

	pub fn resolve<F>(&self, lookup: F) -> Box<str>
	where
		F: Fn(&str) -> Option<String>,
	{
		match self {
			SettingOrigin::Env(var) => var.resolve_env(lookup),
			SettingOrigin::Fixed(value) => value.clone(),
		}
	}
}

/// Origins of the environment, region and config type levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfigSettings {
	pub environment: SettingOrigin,
	pub region: SettingOrigin,
	pub config_type: SettingOrigin,
}

impl Default for ServerConfigSettings {
	fn default() -> Self {
		Self {
			environment: SettingOrigin::env(VAR_ENVIRONMENT, ""),
			region: SettingOrigin::env(VAR_REGION, ""),
			config_type: SettingOrigin::env(VAR_CONFIG_TYPE, ""),
		}
	}
}

impl ServerConfigSettings {
	/// Resolve the deployment coordinates through `lookup`.
	///
	/// The environment is mandatory. A config type needs a region to hang
	/// off, since its provenance includes the region segment.
	pub fn resolve<F>(&self, lookup: F) -> CsResult<DeploymentParams>
	where
		F: Fn(&str) -> Option<String>,
	{
		let environment = self.environment.resolve(&lookup);
		let region = self.region.resolve(&lookup);
		let config_type = self.config_type.resolve(&lookup);

		if environment.is_empty() {
			return Err(Error::Config(format!(
				"environment is not configured ({})",
				describe(&self.environment)
			)));
		}
		if region.is_empty() && !config_type.is_empty() {
			return Err(Error::Config(format!(
				"config type '{}' requires a region ({})",
				config_type,
				describe(&self.region)
			)));
		}

		let mut params = DeploymentParams::environment(environment);
		if !region.is_empty() {
			params = params.with_region(region);
		}
		if !config_type.is_empty() {
			params = params.with_config_type(config_type);
		}
		debug!("Deployment coordinates: {}", params);
		Ok(params)
	}

	/// Resolve against the process environment
	pub fn from_env(&self) -> CsResult<DeploymentParams> {
		self.resolve(|name| std::env::var(name).ok())
	}
}

fn describe(origin: &SettingOrigin) -> String {
	match origin {
		SettingOrigin::Env(var) => format!("set {}", var.variable),
		SettingOrigin::Fixed(_) => "fixed value is empty".to_string(),
	}
}


// vim: ts=4
