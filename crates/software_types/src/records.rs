//! Convention effect records.
//!
//! Records are produced by the DSL evaluator while it runs a conventions block.
//! They are immutable once created; nothing in this workspace interprets them
//! beyond carrying them between storage and resolution results.

use serde::Deserialize;

/// Dot-separated path to a property or nested object, e.g. `java.version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PropertyPath(Box<str>);

impl PropertyPath {
	pub fn new(path: impl Into<Box<str>>) -> Self {
		Self(path.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for PropertyPath {
	fn from(path: &str) -> Self {
		Self::new(path)
	}
}

impl From<String> for PropertyPath {
	fn from(path: String) -> Self {
		Self::new(path)
	}
}

impl core::fmt::Display for PropertyPath {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.0)
	}
}

/// Value carried by an assignment or an addition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ConventionValue {
	Bool(bool),
	Int(i64),
	String(String),
	List(Vec<ConventionValue>),
}

impl From<bool> for ConventionValue {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i64> for ConventionValue {
	fn from(v: i64) -> Self {
		Self::Int(v)
	}
}

impl From<i32> for ConventionValue {
	fn from(v: i32) -> Self {
		Self::Int(v.into())
	}
}

impl From<&str> for ConventionValue {
	fn from(v: &str) -> Self {
		Self::String(v.to_string())
	}
}

impl From<String> for ConventionValue {
	fn from(v: String) -> Self {
		Self::String(v)
	}
}

impl<T: Into<ConventionValue>> From<Vec<T>> for ConventionValue {
	fn from(v: Vec<T>) -> Self {
		Self::List(v.into_iter().map(Into::into).collect())
	}
}

/// Property `property` was set to `value`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssignmentRecord {
	pub property: PropertyPath,
	pub value: ConventionValue,
}

impl AssignmentRecord {
	pub fn new(property: impl Into<PropertyPath>, value: impl Into<ConventionValue>) -> Self {
		Self {
			property: property.into(),
			value: value.into(),
		}
	}
}

/// `value` was appended to the collection-valued property `property`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataAdditionRecord {
	pub property: PropertyPath,
	pub value: ConventionValue,
}

impl DataAdditionRecord {
	pub fn new(property: impl Into<PropertyPath>, value: impl Into<ConventionValue>) -> Self {
		Self {
			property: property.into(),
			value: value.into(),
		}
	}
}

/// The nested configuration object at `path` was accessed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NestedObjectAccessRecord {
	pub path: PropertyPath,
}

impl NestedObjectAccessRecord {
	pub fn new(path: impl Into<PropertyPath>) -> Self {
		Self { path: path.into() }
	}
}
