pub use cascade_core::prelude::*;
pub use cascade_types::deployment::DeploymentParams;
pub use cascade_types::settings_store::SettingsStore;

pub use crate::provider::ServerConfigProvider;

// vim: ts=4
