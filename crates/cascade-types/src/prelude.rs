pub use crate::error::{CsResult, Error};
pub use crate::scope::Scope;
pub use crate::setting::{Setting, SettingsGroup, SettingsToken};

pub use tracing::{debug, debug_span, error, info, trace, warn};

// vim: ts=4
