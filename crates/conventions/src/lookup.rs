//! Registry-backed convention lookup.

use decl_software_types::SoftwareTypeRegistry;

use crate::ConventionRepository;
use crate::results::SoftwareTypeConventionResolutionResults;

/// Reads conventions straight from a [`SoftwareTypeRegistry`].
///
/// Lookup goes through the registry's name index. Names are unique there, so
/// there is never more than one implementation to choose from.
#[derive(Clone, Copy)]
pub struct RegistryConventionRepository<'a> {
	registry: &'a SoftwareTypeRegistry,
}

impl<'a> RegistryConventionRepository<'a> {
	pub fn new(registry: &'a SoftwareTypeRegistry) -> Self {
		Self { registry }
	}
}

impl ConventionRepository for RegistryConventionRepository<'_> {
	fn find_conventions(
		&self,
		software_type_name: &str,
	) -> Option<SoftwareTypeConventionResolutionResults> {
		let Some(implementation) = self.registry.get(software_type_name) else {
			tracing::trace!(software_type = software_type_name, "no conventions defined");
			return None;
		};

		let results = SoftwareTypeConventionResolutionResults::from_entries(
			software_type_name,
			implementation.conventions(),
		);
		tracing::trace!(
			software_type = software_type_name,
			assignments = results.assignments.len(),
			additions = results.additions.len(),
			nested_object_access = results.nested_object_access.len(),
			"resolved conventions"
		);
		Some(results)
	}
}
