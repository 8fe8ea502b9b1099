/// Blank node label issuer.
///
/// Naming is order dependent: the first identifier asked for gets the first
/// label. Conversions that must agree on blank node labels have to share the
/// same namer, and calls on it must not be interleaved.
pub trait Namer {
	/// Returns the label issued for `id`, issuing a new one on first use.
	fn name(&mut self, id: &str) -> String;

	/// Issues a label that was never issued before, bound to no identifier.
	fn fresh(&mut self) -> String;
}

impl<'a, N: ?Sized + Namer> Namer for &'a mut N {
	fn name(&mut self, id: &str) -> String {
		N::name(self, id)
	}

	fn fresh(&mut self) -> String {
		N::fresh(self)
	}
}

/// Default prefix of labels issued by [`UniqueNamer`].
pub const DEFAULT_NAMER_PREFIX: &str = "_:t";

/// Namer issuing `prefix` followed by a counter.
///
/// Cloning is cheap, so callers exploring alternative labelings can fork a
/// namer and drop the branches they do not keep.
#[derive(Debug, Clone)]
pub struct UniqueNamer {
	prefix: String,
	counter: usize,
	existing: im::HashMap<String, String>,
	order: im::Vector<String>,
}

impl UniqueNamer {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			counter: 0,
			existing: im::HashMap::new(),
			order: im::Vector::new(),
		}
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Checks if `id` has already been named.
	pub fn is_named(&self, id: &str) -> bool {
		self.existing.contains_key(id)
	}

	/// Returns the label issued for `id`, if any.
	pub fn get(&self, id: &str) -> Option<&str> {
		self.existing.get(id).map(String::as_str)
	}

	/// Number of identifiers named so far.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Iterates over the named identifiers with their labels, in issue order.
	pub fn names(&self) -> impl '_ + Iterator<Item = (&str, &str)> {
		self.order
			.iter()
			.filter_map(move |id| Some((id.as_str(), self.existing.get(id)?.as_str())))
	}

	fn next_label(&mut self) -> String {
		let label = format!("{}{}", self.prefix, self.counter);
		self.counter += 1;
		label
	}
}

impl Default for UniqueNamer {
	fn default() -> Self {
		Self::new(DEFAULT_NAMER_PREFIX)
	}
}

impl Namer for UniqueNamer {
	fn name(&mut self, id: &str) -> String {
		if let Some(label) = self.existing.get(id) {
			return label.clone();
		}

		let label = self.next_label();
		self.existing.insert(id.to_owned(), label.clone());
		self.order.push_back(id.to_owned());
		label
	}

	fn fresh(&mut self) -> String {
		self.next_label()
	}
}
