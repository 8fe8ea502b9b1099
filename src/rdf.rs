use core::fmt;

use iref::Iri;
use static_iref::iri;

pub use rdf_types::RDF_LANG_STRING;
pub use xsd_types::{XSD_BOOLEAN, XSD_DOUBLE, XSD_INTEGER, XSD_STRING};

pub const RDF_TYPE: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
pub const RDF_FIRST: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#first");
pub const RDF_REST: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#rest");
pub const RDF_NIL: &Iri = iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#nil");

/// Prefix reserved for blank node labels.
pub const BLANK_PREFIX: &str = "_:";

/// Checks if the given identifier is a blank node label.
pub fn is_blank_label(id: &str) -> bool {
	id.starts_with(BLANK_PREFIX)
}

/// Subject of a triple: an IRI or a blank node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subject {
	/// IRI reference.
	Iri(String),

	/// Blank node, labeled with its `_:` prefix.
	Blank(String),
}

impl Subject {
	pub fn iri(value: impl Into<String>) -> Self {
		Self::Iri(value.into())
	}

	pub fn blank(label: impl Into<String>) -> Self {
		Self::Blank(label.into())
	}

	/// Creates an IRI or blank node depending on the shape of `id`.
	pub fn from_id(id: impl Into<String>) -> Self {
		let id = id.into();
		if is_blank_label(&id) {
			Self::Blank(id)
		} else {
			Self::Iri(id)
		}
	}

	pub fn is_blank(&self) -> bool {
		matches!(self, Self::Blank(_))
	}

	pub fn as_iri(&self) -> Option<&str> {
		match self {
			Self::Iri(iri) => Some(iri),
			Self::Blank(_) => None,
		}
	}

	pub fn as_blank(&self) -> Option<&str> {
		match self {
			Self::Blank(label) => Some(label),
			Self::Iri(_) => None,
		}
	}

	/// Returns the IRI or blank node label.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Iri(value) | Self::Blank(value) => value,
		}
	}
}

impl fmt::Display for Subject {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Iri(iri) => write!(f, "<{iri}>"),
			Self::Blank(label) => f.write_str(label),
		}
	}
}

/// RDF term.
///
/// Two nodes are the same node if they have the same variant and the same
/// fields. This is what triple deduplication relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
	/// IRI reference.
	Iri(String),

	/// Blank node, labeled with its `_:` prefix.
	Blank(String),

	/// Literal value.
	Literal(Literal),
}

impl Node {
	pub fn iri(value: impl Into<String>) -> Self {
		Self::Iri(value.into())
	}

	pub fn blank(label: impl Into<String>) -> Self {
		Self::Blank(label.into())
	}

	/// Creates an IRI or blank node depending on the shape of `id`.
	pub fn from_id(id: impl Into<String>) -> Self {
		Subject::from_id(id).into()
	}

	pub fn is_iri(&self) -> bool {
		matches!(self, Self::Iri(_))
	}

	pub fn is_blank(&self) -> bool {
		matches!(self, Self::Blank(_))
	}

	pub fn is_literal(&self) -> bool {
		matches!(self, Self::Literal(_))
	}

	pub fn as_iri(&self) -> Option<&str> {
		match self {
			Self::Iri(iri) => Some(iri),
			_ => None,
		}
	}

	pub fn as_blank(&self) -> Option<&str> {
		match self {
			Self::Blank(label) => Some(label),
			_ => None,
		}
	}

	pub fn as_literal(&self) -> Option<&Literal> {
		match self {
			Self::Literal(literal) => Some(literal),
			_ => None,
		}
	}
}

impl From<Subject> for Node {
	fn from(value: Subject) -> Self {
		match value {
			Subject::Iri(iri) => Self::Iri(iri),
			Subject::Blank(label) => Self::Blank(label),
		}
	}
}

impl From<Literal> for Node {
	fn from(value: Literal) -> Self {
		Self::Literal(value)
	}
}

/// Formats the node using the N-Quads term syntax.
impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Iri(iri) => write!(f, "<{iri}>"),
			Self::Blank(label) => f.write_str(label),
			Self::Literal(literal) => fmt::Display::fmt(literal, f),
		}
	}
}

/// RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
	/// Lexical form.
	pub lexical: String,

	/// Datatype IRI.
	pub datatype: String,

	/// Language tag, only set for `rdf:langString` literals.
	pub language: Option<String>,
}

impl Literal {
	pub fn new(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
		Self {
			lexical: lexical.into(),
			datatype: datatype.into(),
			language: None,
		}
	}

	/// Creates an `xsd:string` literal.
	pub fn string(lexical: impl Into<String>) -> Self {
		Self::new(lexical, XSD_STRING.as_str())
	}

	/// Creates an `rdf:langString` literal.
	pub fn lang_string(lexical: impl Into<String>, language: impl Into<String>) -> Self {
		Self {
			lexical: lexical.into(),
			datatype: RDF_LANG_STRING.as_str().to_owned(),
			language: Some(language.into()),
		}
	}

	pub fn is_lang_string(&self) -> bool {
		self.language.is_some()
	}

	/// Checks if the datatype is `xsd:string`, which N-Quads leaves implicit.
	pub fn is_plain_string(&self) -> bool {
		self.language.is_none() && self.datatype == XSD_STRING.as_str()
	}
}

impl fmt::Display for Literal {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("\"")?;
		write_escaped(f, &self.lexical)?;
		f.write_str("\"")?;

		match &self.language {
			Some(language) => write!(f, "@{language}"),
			None if self.is_plain_string() => Ok(()),
			None => write!(f, "^^<{}>", self.datatype),
		}
	}
}

/// Writes `value` with the N-Quads string escapes applied.
pub(crate) fn write_escaped(f: &mut impl fmt::Write, value: &str) -> fmt::Result {
	for c in value.chars() {
		match c {
			'\\' => f.write_str("\\\\")?,
			'\t' => f.write_str("\\t")?,
			'\n' => f.write_str("\\n")?,
			'\r' => f.write_str("\\r")?,
			'"' => f.write_str("\\\"")?,
			c => f.write_char(c)?,
		}
	}

	Ok(())
}

/// RDF triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
	pub subject: Subject,

	/// Predicate IRI.
	pub predicate: String,

	pub object: Node,
}

impl Triple {
	pub fn new(subject: Subject, predicate: impl Into<String>, object: impl Into<Node>) -> Self {
		Self {
			subject,
			predicate: predicate.into(),
			object: object.into(),
		}
	}
}
