//! Kind-tagged convention storage.

use crate::records::{AssignmentRecord, DataAdditionRecord, NestedObjectAccessRecord};

/// Kind of record held by a [`ConventionEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConventionKind {
	Assignment,
	Addition,
	NestedAccess,
}

impl core::fmt::Display for ConventionKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(match self {
			Self::Assignment => "assignment",
			Self::Addition => "addition",
			Self::NestedAccess => "nested-access",
		})
	}
}

/// One recorded convention, stored on a software-type implementation.
///
/// An entry wraps exactly one record and its variant never changes after
/// construction. Consumers should `match` on it rather than probing kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConventionEntry {
	Assignment(AssignmentRecord),
	Addition(DataAdditionRecord),
	NestedAccess(NestedObjectAccessRecord),
}

impl ConventionEntry {
	pub fn kind(&self) -> ConventionKind {
		match self {
			Self::Assignment(_) => ConventionKind::Assignment,
			Self::Addition(_) => ConventionKind::Addition,
			Self::NestedAccess(_) => ConventionKind::NestedAccess,
		}
	}

	pub fn as_assignment(&self) -> Option<&AssignmentRecord> {
		match self {
			Self::Assignment(record) => Some(record),
			_ => None,
		}
	}

	pub fn as_addition(&self) -> Option<&DataAdditionRecord> {
		match self {
			Self::Addition(record) => Some(record),
			_ => None,
		}
	}

	pub fn as_nested_access(&self) -> Option<&NestedObjectAccessRecord> {
		match self {
			Self::NestedAccess(record) => Some(record),
			_ => None,
		}
	}
}

impl From<AssignmentRecord> for ConventionEntry {
	fn from(record: AssignmentRecord) -> Self {
		Self::Assignment(record)
	}
}

impl From<DataAdditionRecord> for ConventionEntry {
	fn from(record: DataAdditionRecord) -> Self {
		Self::Addition(record)
	}
}

impl From<NestedObjectAccessRecord> for ConventionEntry {
	fn from(record: NestedObjectAccessRecord) -> Self {
		Self::NestedAccess(record)
	}
}
