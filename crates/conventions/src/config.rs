//! Conventions declared in a TOML file.
//!
//! ```toml
//! [registrar]
//! policy = "once-per-software-type"
//!
//! [software_types.app]
//! assignments = [{ property = "java.version", value = 21 }]
//! additions = [{ property = "dependencies", value = "junit" }]
//! nested_object_access = [{ path = "testing" }]
//! ```
//!
//! Declared conventions are turned into resolution results and fed through the
//! same registrar as conventions resolved from the registry itself.

use std::collections::BTreeMap;
use std::path::Path;

use decl_software_types::{
	AssignmentRecord, DataAdditionRecord, NestedObjectAccessRecord, SoftwareTypeRegistry,
};
use serde::Deserialize;

use crate::ConventionDefinitionRegistrar;
use crate::error::{ConfigError, Result};
use crate::registrar::{RegistrationPolicy, RegistrationSummary, RegistryConventionRegistrar};
use crate::results::{ConventionsBySoftwareType, SoftwareTypeConventionResolutionResults};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConventionsConfig {
	pub registrar: RegistrarConfig,
	pub software_types: BTreeMap<String, DeclaredConventions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrarConfig {
	pub policy: RegistrationPolicy,
}

/// Conventions declared for one software type. Array order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeclaredConventions {
	pub assignments: Vec<AssignmentRecord>,
	pub additions: Vec<DataAdditionRecord>,
	pub nested_object_access: Vec<NestedObjectAccessRecord>,
}

impl ConventionsConfig {
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::parse(&input)?;
		tracing::debug!(
			path = %path.display(),
			software_types = config.software_types.len(),
			"loaded declared conventions"
		);
		Ok(config)
	}

	/// Converts the declared tables into registrar input.
	pub fn resolution_results(&self) -> Result<ConventionsBySoftwareType> {
		self.software_types
			.iter()
			.map(|(name, declared)| {
				if name.is_empty() {
					return Err(ConfigError::EmptySoftwareType);
				}
				let results = SoftwareTypeConventionResolutionResults {
					software_type_name: name.clone(),
					assignments: declared.assignments.clone(),
					additions: declared.additions.clone(),
					nested_object_access: declared.nested_object_access.clone(),
				};
				Ok((name.clone(), results))
			})
			.collect()
	}

	/// Registers the declared conventions with the configured policy.
	pub fn apply(&self, registry: &mut SoftwareTypeRegistry) -> Result<RegistrationSummary> {
		let conventions = self.resolution_results()?;
		let mut registrar = RegistryConventionRegistrar::with_policy(registry, self.registrar.policy);
		Ok(registrar.add_conventions(&conventions))
	}
}
