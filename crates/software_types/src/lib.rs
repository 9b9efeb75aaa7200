//! Software-type implementations and their convention storage.
//!
//! A software type is a named configuration shape contributed by a plugin.
//! Each registered [`SoftwareTypeImplementation`] owns an ordered list of
//! [`ConventionEntry`] values: default assignments, collection additions and
//! nested-object accesses recorded upstream by the DSL evaluator.
//!
//! The [`SoftwareTypeRegistry`] is the only owner of implementations. It keeps
//! registration order for iteration and a name index for direct lookup.

pub mod entry;
pub mod error;
pub mod records;
pub mod registry;

pub use entry::{ConventionEntry, ConventionKind};
pub use error::RegistryError;
pub use records::{
	AssignmentRecord, ConventionValue, DataAdditionRecord, NestedObjectAccessRecord, PropertyPath,
};
pub use registry::{SoftwareTypeImplementation, SoftwareTypeRegistry};
