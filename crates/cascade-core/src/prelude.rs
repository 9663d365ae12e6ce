pub use cascade_types::prelude::*;
pub use cascade_types::source::SettingsSource;

pub use crate::hierarchy::Hierarchy;

// vim: ts=4
