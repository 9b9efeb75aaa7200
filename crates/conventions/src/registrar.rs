//! Registry-backed convention registration.

use decl_software_types::SoftwareTypeRegistry;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::ConventionDefinitionRegistrar;
use crate::results::ConventionsBySoftwareType;

#[cfg(test)]
mod tests;

/// How a registrar treats a software type it has already populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationPolicy {
	/// Every call appends. Applying the same input twice duplicates entries.
	#[default]
	Accumulate,
	/// A software type receives conventions at most once per registrar.
	OncePerSoftwareType,
}

/// Outcome of one [`ConventionDefinitionRegistrar::add_conventions`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationSummary {
	/// Implementations that received entries.
	pub targeted: usize,
	/// Entries appended across all implementations.
	pub appended: usize,
	/// Implementations skipped because they were already populated.
	pub skipped: usize,
	/// Input keys with no registered implementation.
	pub unmatched: usize,
}

/// Appends resolved conventions to the implementations of a
/// [`SoftwareTypeRegistry`].
///
/// Entries are appended in a fixed order per implementation: additions, then
/// assignments, then nested-object accesses. The map key selects the target;
/// the `software_type_name` stored inside the results is not consulted.
pub struct RegistryConventionRegistrar<'a> {
	registry: &'a mut SoftwareTypeRegistry,
	policy: RegistrationPolicy,
	applied: FxHashSet<Box<str>>,
}

impl<'a> RegistryConventionRegistrar<'a> {
	/// Creates a registrar with the [`RegistrationPolicy::Accumulate`] policy.
	pub fn new(registry: &'a mut SoftwareTypeRegistry) -> Self {
		Self::with_policy(registry, RegistrationPolicy::default())
	}

	pub fn with_policy(registry: &'a mut SoftwareTypeRegistry, policy: RegistrationPolicy) -> Self {
		Self {
			registry,
			policy,
			applied: FxHashSet::default(),
		}
	}

	/// Returns true if `software_type` is marked as populated.
	///
	/// Only [`RegistrationPolicy::OncePerSoftwareType`] marks types; under
	/// [`RegistrationPolicy::Accumulate`] this is always false.
	pub fn is_applied(&self, software_type: &str) -> bool {
		self.applied.contains(software_type)
	}
}

impl ConventionDefinitionRegistrar for RegistryConventionRegistrar<'_> {
	fn add_conventions(
		&mut self,
		conventions_by_software_type: &ConventionsBySoftwareType,
	) -> RegistrationSummary {
		let mut summary = RegistrationSummary::default();
		if conventions_by_software_type.is_empty() {
			return summary;
		}

		for implementation in self.registry.iter_mut() {
			let Some(conventions) = conventions_by_software_type.get(implementation.software_type())
			else {
				continue;
			};

			if self.policy == RegistrationPolicy::OncePerSoftwareType
				&& self.applied.contains(implementation.software_type())
			{
				tracing::debug!(
					software_type = implementation.software_type(),
					"conventions already applied; skipping"
				);
				summary.skipped += 1;
				continue;
			}

			let before = implementation.conventions().len();
			for entry in conventions.entries() {
				implementation.add_convention(entry);
			}
			let appended = implementation.conventions().len() - before;

			tracing::debug!(
				software_type = implementation.software_type(),
				appended,
				"registered conventions"
			);
			summary.targeted += 1;
			summary.appended += appended;
			if self.policy == RegistrationPolicy::OncePerSoftwareType {
				self.applied.insert(implementation.software_type().into());
			}
		}

		for name in conventions_by_software_type.keys() {
			if !self.registry.contains(name) {
				tracing::debug!(software_type = %name, "no implementation for conventions");
				summary.unmatched += 1;
			}
		}

		summary
	}
}
