//! Registry errors.

/// Errors raised while registering software-type implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two implementations share the same software-type name.
	#[error("duplicate software type: {name:?}")]
	DuplicateSoftwareType { name: Box<str> },

	/// A software-type name must not be empty.
	#[error("software type name must not be empty")]
	EmptyName,
}
