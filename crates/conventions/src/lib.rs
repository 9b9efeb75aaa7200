//! Convention lookup and re-registration.
//!
//! Conventions are default configuration effects recorded for a software type.
//! This crate moves them between two shapes:
//!
//! - the flat, kind-tagged [`ConventionEntry`] list stored on each
//!   [`SoftwareTypeImplementation`], and
//! - the kind-partitioned [`SoftwareTypeConventionResolutionResults`] that
//!   callers merge, cache or transform.
//!
//! [`RegistryConventionRepository`] reads the registry and partitions entries
//! by kind. [`RegistryConventionRegistrar`] goes the other way and appends
//! entries to the matching implementations.
//!
//! # Ordering
//!
//! Partitioning is stable: within each kind, records keep the relative order
//! they had in the source list. Registration appends additions, then
//! assignments, then nested-object accesses. Cross-kind order from the
//! original list is therefore not reconstructed.
//!
//! [`ConventionEntry`]: decl_software_types::ConventionEntry
//! [`SoftwareTypeImplementation`]: decl_software_types::SoftwareTypeImplementation

pub mod config;
pub mod error;
pub mod lookup;
pub mod registrar;
pub mod results;

pub use config::{ConventionsConfig, DeclaredConventions, RegistrarConfig};
pub use error::{ConfigError, Result};
pub use lookup::RegistryConventionRepository;
pub use registrar::{RegistrationPolicy, RegistrationSummary, RegistryConventionRegistrar};
pub use results::{ConventionsBySoftwareType, SoftwareTypeConventionResolutionResults};

/// Source of resolved conventions, keyed by software-type name.
pub trait ConventionRepository {
	/// Returns the conventions recorded for `software_type_name`.
	///
	/// `None` means no software type with that exact name is known, which is a
	/// normal outcome rather than an error.
	fn find_conventions(
		&self,
		software_type_name: &str,
	) -> Option<SoftwareTypeConventionResolutionResults>;
}

/// Sink that installs resolved conventions into software-type implementations.
pub trait ConventionDefinitionRegistrar {
	/// Appends the given conventions to every implementation whose name is a
	/// key of `conventions_by_software_type`.
	///
	/// Existing entries are never removed or reordered. Whether a repeated call
	/// duplicates entries depends on the implementation's policy.
	fn add_conventions(
		&mut self,
		conventions_by_software_type: &ConventionsBySoftwareType,
	) -> RegistrationSummary;
}
