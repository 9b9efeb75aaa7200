//! Error types for convention declaration files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading declared conventions.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a declaration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A `[software_types]` table used an empty name.
	#[error("software type name must not be empty")]
	EmptySoftwareType,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
