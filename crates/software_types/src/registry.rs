use rustc_hash::FxHashMap as HashMap;

use crate::entry::ConventionEntry;
use crate::error::RegistryError;


/// A registered software type and the conventions recorded for it.
///
/// The convention list is append-only: entries can be read and new entries can
/// be pushed, but nothing replaces, removes or reorders existing ones.
#[derive(Debug, Clone)]
pub struct SoftwareTypeImplementation {
	software_type: Box<str>,
	conventions: Vec<ConventionEntry>,
}

impl SoftwareTypeImplementation {
	pub fn new(software_type: impl Into<Box<str>>) -> Self {
		Self {
			software_type: software_type.into(),
			conventions: Vec::new(),
		}
	}

	/// Creates an implementation with pre-recorded conventions, in order.
	pub fn with_conventions(
		software_type: impl Into<Box<str>>,
		conventions: impl IntoIterator<Item = ConventionEntry>,
	) -> Self {
		Self {
			software_type: software_type.into(),
			conventions: conventions.into_iter().collect(),
		}
	}

	#[inline]
	pub fn software_type(&self) -> &str {
		&self.software_type
	}

	#[inline]
	pub fn conventions(&self) -> &[ConventionEntry] {
		&self.conventions
	}

	/// Appends a single convention after all existing ones.
	pub fn add_convention(&mut self, entry: ConventionEntry) {
		self.conventions.push(entry);
	}
}

/// Registry of software-type implementations.
///
/// Iteration follows registration order. Names are unique: registering a
/// second implementation under an existing name is rejected, so a name lookup
/// has at most one answer.
#[derive(Debug, Default)]
pub struct SoftwareTypeRegistry {
	items: Vec<SoftwareTypeImplementation>,
	by_name: HashMap<Box<str>, usize>,
}

impl SoftwareTypeRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers an implementation, returning its position in iteration order.
	pub fn register(
		&mut self,
		implementation: SoftwareTypeImplementation,
	) -> Result<usize, RegistryError> {
		let name = implementation.software_type.clone();
		if name.is_empty() {
			return Err(RegistryError::EmptyName);
		}
		if self.by_name.contains_key(&name) {
			return Err(RegistryError::DuplicateSoftwareType { name });
		}

		let idx = self.items.len();
		tracing::trace!(
			software_type = %name,
			conventions = implementation.conventions.len(),
			"registered software type"
		);
		self.by_name.insert(name, idx);
		self.items.push(implementation);
		Ok(idx)
	}

	#[inline]
	pub fn get(&self, software_type: &str) -> Option<&SoftwareTypeImplementation> {
		self.by_name
			.get(software_type)
			.map(|&idx| &self.items[idx])
	}

	#[inline]
	pub fn get_mut(&mut self, software_type: &str) -> Option<&mut SoftwareTypeImplementation> {
		let idx = *self.by_name.get(software_type)?;
		Some(&mut self.items[idx])
	}

	pub fn contains(&self, software_type: &str) -> bool {
		self.by_name.contains_key(software_type)
	}

	pub fn iter(&self) -> impl Iterator<Item = &SoftwareTypeImplementation> {
		self.items.iter()
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SoftwareTypeImplementation> {
		self.items.iter_mut()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.items.iter().map(SoftwareTypeImplementation::software_type)
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
