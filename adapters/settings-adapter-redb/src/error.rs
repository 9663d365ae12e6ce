//! Error types for the settings adapter

use std::fmt;

/// Settings adapter-specific errors
#[derive(Debug)]
pub enum Error {
	/// Database operation error
	DbError(String),

	/// I/O error
	IoError(String),

	/// Blocking task failed or was cancelled
	TaskError(String),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::DbError(msg) => write!(f, "Database error: {}", msg),
			Error::IoError(msg) => write!(f, "I/O error: {}", msg),
			Error::TaskError(msg) => write!(f, "Task error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<tokio::task::JoinError> for Error {
	fn from(err: tokio::task::JoinError) -> Self {
		Error::TaskError(err.to_string())
	}
}

impl From<Error> for cascade_types::error::Error {
	fn from(err: Error) -> Self {
		cascade_types::error::Error::DbError(err.to_string())
	}
}

/// Helper to convert redb errors
pub fn from_redb_error<E: fmt::Display>(err: E) -> Error {
	Error::DbError(err.to_string())
}

// vim: ts=4
