use decl_software_types::{
	AssignmentRecord, ConventionEntry, ConventionKind, DataAdditionRecord,
	NestedObjectAccessRecord, SoftwareTypeImplementation,
};
use pretty_assertions::assert_eq;

use super::*;
use crate::SoftwareTypeConventionResolutionResults;

fn registry_of(names: &[&str]) -> SoftwareTypeRegistry {
	let mut registry = SoftwareTypeRegistry::new();
	for name in names {
		registry
			.register(SoftwareTypeImplementation::new(*name))
			.unwrap();
	}
	registry
}

fn one_assignment_two_additions(name: &str) -> SoftwareTypeConventionResolutionResults {
	SoftwareTypeConventionResolutionResults {
		software_type_name: name.to_string(),
		assignments: vec![AssignmentRecord::new("java.version", 21)],
		additions: vec![
			DataAdditionRecord::new("dependencies", "junit"),
			DataAdditionRecord::new("dependencies", "guava"),
		],
		nested_object_access: vec![],
	}
}

fn input(
	entries: impl IntoIterator<Item = (&'static str, SoftwareTypeConventionResolutionResults)>,
) -> ConventionsBySoftwareType {
	entries
		.into_iter()
		.map(|(name, results)| (name.to_string(), results))
		.collect()
}

fn conventions_of<'r>(registry: &'r SoftwareTypeRegistry, name: &str) -> &'r [ConventionEntry] {
	registry.get(name).unwrap().conventions()
}

#[test]
fn test_appends_additions_before_assignments() {
	let mut registry = registry_of(&["app"]);
	let conventions = input([("app", one_assignment_two_additions("app"))]);

	let summary = RegistryConventionRegistrar::new(&mut registry).add_conventions(&conventions);

	assert_eq!(
		conventions_of(&registry, "app"),
		&[
			ConventionEntry::Addition(DataAdditionRecord::new("dependencies", "junit")),
			ConventionEntry::Addition(DataAdditionRecord::new("dependencies", "guava")),
			ConventionEntry::Assignment(AssignmentRecord::new("java.version", 21)),
		]
	);
	assert_eq!(
		summary,
		RegistrationSummary {
			targeted: 1,
			appended: 3,
			skipped: 0,
			unmatched: 0,
		}
	);
}

#[test]
fn test_accumulate_duplicates_on_second_call() {
	let mut registry = registry_of(&["app"]);
	let conventions = input([("app", one_assignment_two_additions("app"))]);

	let mut registrar = RegistryConventionRegistrar::new(&mut registry);
	registrar.add_conventions(&conventions);
	let second = registrar.add_conventions(&conventions);

	assert_eq!(second.appended, 3);
	assert_eq!(conventions_of(&registry, "app").len(), 6);
}

#[test]
fn test_accumulate_does_not_mark_applied() {
	let mut registry = registry_of(&["app"]);
	let conventions = input([("app", one_assignment_two_additions("app"))]);

	let mut registrar = RegistryConventionRegistrar::new(&mut registry);
	registrar.add_conventions(&conventions);

	assert!(!registrar.is_applied("app"));
}

#[test]
fn test_once_per_software_type_skips_second_call() {
	let mut registry = registry_of(&["app", "lib"]);
	let first = input([("app", one_assignment_two_additions("app"))]);
	let second = input([
		("app", one_assignment_two_additions("app")),
		("lib", one_assignment_two_additions("lib")),
	]);

	let mut registrar =
		RegistryConventionRegistrar::with_policy(&mut registry, RegistrationPolicy::OncePerSoftwareType);
	registrar.add_conventions(&first);
	assert!(registrar.is_applied("app"));
	assert!(!registrar.is_applied("lib"));

	let summary = registrar.add_conventions(&second);

	assert_eq!(summary.skipped, 1);
	assert_eq!(summary.targeted, 1);
	assert_eq!(conventions_of(&registry, "app").len(), 3);
	assert_eq!(conventions_of(&registry, "lib").len(), 3);
}

#[test]
fn test_existing_entries_stay_in_front() {
	let mut registry = SoftwareTypeRegistry::new();
	let existing = ConventionEntry::from(NestedObjectAccessRecord::new("testing"));
	registry
		.register(SoftwareTypeImplementation::with_conventions(
			"app",
			[existing.clone()],
		))
		.unwrap();
	let conventions = input([("app", one_assignment_two_additions("app"))]);

	RegistryConventionRegistrar::new(&mut registry).add_conventions(&conventions);

	let entries = conventions_of(&registry, "app");
	assert_eq!(entries.len(), 4);
	assert_eq!(entries[0], existing);
}

#[test]
fn test_dead_keys_have_no_effect() {
	let mut registry = registry_of(&["app"]);
	let conventions = input([("lib", one_assignment_two_additions("lib"))]);

	let summary = RegistryConventionRegistrar::new(&mut registry).add_conventions(&conventions);

	assert!(conventions_of(&registry, "app").is_empty());
	assert_eq!(summary.targeted, 0);
	assert_eq!(summary.unmatched, 1);
}

#[test]
fn test_empty_input_is_noop() {
	let mut registry = registry_of(&["app", "lib"]);

	let summary =
		RegistryConventionRegistrar::new(&mut registry).add_conventions(&ConventionsBySoftwareType::default());

	assert_eq!(summary, RegistrationSummary::default());
	assert!(registry.iter().all(|i| i.conventions().is_empty()));
}

#[test]
fn test_entry_kind_matches_record_kind() {
	let mut registry = registry_of(&["app"]);
	let results = SoftwareTypeConventionResolutionResults {
		software_type_name: "app".to_string(),
		assignments: vec![AssignmentRecord::new("name", "demo")],
		additions: vec![DataAdditionRecord::new("tags", "x")],
		nested_object_access: vec![NestedObjectAccessRecord::new("testing")],
	};
	let conventions = input([("app", results.clone())]);

	RegistryConventionRegistrar::new(&mut registry).add_conventions(&conventions);

	let entries = conventions_of(&registry, "app");
	assert_eq!(entries[0].kind(), ConventionKind::Addition);
	assert_eq!(entries[0].as_addition(), Some(&results.additions[0]));
	assert_eq!(entries[1].kind(), ConventionKind::Assignment);
	assert_eq!(entries[1].as_assignment(), Some(&results.assignments[0]));
	assert_eq!(entries[2].kind(), ConventionKind::NestedAccess);
	assert_eq!(
		entries[2].as_nested_access(),
		Some(&results.nested_object_access[0])
	);
}
