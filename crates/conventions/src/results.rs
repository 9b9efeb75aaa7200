use decl_software_types::{
	AssignmentRecord, ConventionEntry, DataAdditionRecord, NestedObjectAccessRecord,
};
use rustc_hash::FxHashMap;

/// Resolution results keyed by software-type name, as accepted by a registrar.
pub type ConventionsBySoftwareType = FxHashMap<String, SoftwareTypeConventionResolutionResults>;

/// Kind-partitioned conventions of one software type.
///
/// Each sequence preserves the relative order its records had in the source
/// convention list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoftwareTypeConventionResolutionResults {
	pub software_type_name: String,
	pub assignments: Vec<AssignmentRecord>,
	pub additions: Vec<DataAdditionRecord>,
	pub nested_object_access: Vec<NestedObjectAccessRecord>,
}

impl SoftwareTypeConventionResolutionResults {
	pub fn new(software_type_name: impl Into<String>) -> Self {
		Self {
			software_type_name: software_type_name.into(),
			..Self::default()
		}
	}

	/// Stable partition of `entries` by kind.
	pub fn from_entries<'a>(
		software_type_name: impl Into<String>,
		entries: impl IntoIterator<Item = &'a ConventionEntry>,
	) -> Self {
		let mut results = Self::new(software_type_name);
		for entry in entries {
			match entry {
				ConventionEntry::Assignment(record) => results.assignments.push(record.clone()),
				ConventionEntry::Addition(record) => results.additions.push(record.clone()),
				ConventionEntry::NestedAccess(record) => {
					results.nested_object_access.push(record.clone())
				}
			}
		}
		results
	}

	/// Total number of records across all kinds.
	pub fn len(&self) -> usize {
		self.assignments.len() + self.additions.len() + self.nested_object_access.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Wraps every record back into an entry, in registration order:
	/// additions, then assignments, then nested-object accesses.
	pub fn entries(&self) -> impl Iterator<Item = ConventionEntry> + '_ {
		self.additions
			.iter()
			.cloned()
			.map(ConventionEntry::Addition)
			.chain(self.assignments.iter().cloned().map(ConventionEntry::Assignment))
			.chain(
				self.nested_object_access
					.iter()
					.cloned()
					.map(ConventionEntry::NestedAccess),
			)
	}

	/// Owned variant of [`Self::entries`].
	pub fn into_entries(self) -> Vec<ConventionEntry> {
		let mut entries = Vec::with_capacity(self.len());
		entries.extend(self.additions.into_iter().map(ConventionEntry::Addition));
		entries.extend(self.assignments.into_iter().map(ConventionEntry::Assignment));
		entries.extend(
			self.nested_object_access
				.into_iter()
				.map(ConventionEntry::NestedAccess),
		);
		entries
	}
}
