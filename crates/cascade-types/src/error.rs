//! Error type shared by the engine, the facade and the store adapters

use crate::scope::Scope;

pub type CsResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// A settings source failed to produce its data
	SourceFetch { scope: Scope, provenance: Box<str>, reason: Box<str> },
	/// A token references a scope that is not part of the hierarchy
	UnknownScope(Scope),
	/// Two sources in one hierarchy claim the same scope
	DuplicateScope(Scope),
	/// Two settings with the same key were produced at the same scope
	DuplicateSetting { key: Box<str>, scope: Scope },
	Config(String),
	DbError(String),
	Timeout,

	// externals
	Io(std::io::Error),
}

impl Error {
	/// Wrap an error raised while loading one source, keeping the scope it belongs to.
	///
	/// An error that already is a `SourceFetch` is passed through unchanged.
	pub fn source_fetch(scope: Scope, provenance: &str, err: Error) -> Self {
		match err {
			err @ Error::SourceFetch { .. } => err,
			err => Error::SourceFetch {
				scope,
				provenance: provenance.into(),
				reason: err.to_string().into(),
			},
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::SourceFetch { scope, provenance, reason } => {
				write!(f, "failed to load {} settings from '{}': {}", scope, provenance, reason)
			}
			Error::UnknownScope(scope) => write!(f, "scope '{}' is not part of the hierarchy", scope),
			Error::DuplicateScope(scope) => {
				write!(f, "scope '{}' is configured by more than one source", scope)
			}
			Error::DuplicateSetting { key, scope } => {
				write!(f, "setting '{}' is defined more than once at scope '{}'", key, scope)
			}
			Error::Config(msg) => write!(f, "configuration error: {}", msg),
			Error::DbError(msg) => write!(f, "database error: {}", msg),
			Error::Timeout => write!(f, "settings resolution timed out"),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}


// vim: ts=4
