use core::fmt;

use crate::{is_blank_label, Dataset, Node, Subject, Triple, DEFAULT_GRAPH};

/// Label of the reference blank node in normalized output.
const REFERENCE_BLANK: &str = "_:a";

/// Label of every other blank node in normalized output.
const OTHER_BLANK: &str = "_:z";

/// Label of blank graph names in normalized output.
const BLANK_GRAPH: &str = "_:g";

/// Serializes the dataset into canonical N-Quads.
pub fn to_nquads(dataset: &Dataset) -> String {
	write_dataset(dataset, None)
}

/// Serializes the dataset into canonical N-Quads, collapsing blank nodes.
///
/// Blank nodes labeled `reference` are written `_:a`, any other blank node is
/// written `_:z` and blank graph names are written `_:g`.
pub fn to_normalized_nquads(dataset: &Dataset, reference: &str) -> String {
	write_dataset(dataset, Some(reference))
}

fn write_dataset(dataset: &Dataset, reference: Option<&str>) -> String {
	let mut lines: Vec<String> = dataset
		.quads()
		.map(|(graph, triple)| to_nquad(triple, graph, reference))
		.collect();

	lines.sort_unstable();

	tracing::debug!(
		graphs = dataset.graphs().count(),
		quads = lines.len(),
		normalized = reference.is_some(),
		"dataset serialized to N-Quads"
	);

	lines.concat()
}

/// Renders a single quad line, terminated by ` .\n`.
///
/// `graph` is the name of the graph holding the triple, the default graph
/// having no graph term. In normalization mode, when `reference` is given,
/// blank nodes are collapsed as in [`to_normalized_nquads`].
pub fn to_nquad(triple: &Triple, graph: &str, reference: Option<&str>) -> String {
	Quad {
		triple,
		graph,
		reference,
	}
	.to_string()
}

struct Quad<'a> {
	triple: &'a Triple,
	graph: &'a str,
	reference: Option<&'a str>,
}

impl<'a> Quad<'a> {
	fn fmt_blank(&self, label: &str, f: &mut fmt::Formatter) -> fmt::Result {
		match self.reference {
			Some(reference) if label == reference => f.write_str(REFERENCE_BLANK),
			Some(_) => f.write_str(OTHER_BLANK),
			None => f.write_str(label),
		}
	}

	fn fmt_subject(&self, subject: &Subject, f: &mut fmt::Formatter) -> fmt::Result {
		match subject {
			Subject::Blank(label) => self.fmt_blank(label, f),
			subject => fmt::Display::fmt(subject, f),
		}
	}

	fn fmt_object(&self, object: &Node, f: &mut fmt::Formatter) -> fmt::Result {
		match object {
			Node::Blank(label) => self.fmt_blank(label, f),
			object => fmt::Display::fmt(object, f),
		}
	}

	fn fmt_graph(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.graph == DEFAULT_GRAPH {
			return Ok(());
		}

		if !is_blank_label(self.graph) {
			write!(f, " <{}>", self.graph)
		} else if self.reference.is_some() {
			write!(f, " {BLANK_GRAPH}")
		} else {
			write!(f, " {}", self.graph)
		}
	}
}

impl<'a> fmt::Display for Quad<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.fmt_subject(&self.triple.subject, f)?;
		write!(f, " <{}> ", self.triple.predicate)?;
		self.fmt_object(&self.triple.object, f)?;
		self.fmt_graph(f)?;
		f.write_str(" .\n")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Literal, XSD_INTEGER};

	fn triple(s: Subject, o: impl Into<Node>) -> Triple {
		Triple::new(s, "http://example.org/p", o)
	}

	#[test]
	fn default_graph_has_no_graph_term() {
		let t = triple(Subject::iri("http://example.org/s"), Node::iri("http://example.org/o"));
		assert_eq!(
			to_nquad(&t, DEFAULT_GRAPH, None),
			"<http://example.org/s> <http://example.org/p> <http://example.org/o> .\n"
		)
	}

	#[test]
	fn named_graphs() {
		let t = triple(Subject::blank("_:b0"), Literal::new("1", XSD_INTEGER.as_str()));
		assert_eq!(
			to_nquad(&t, "http://example.org/g", None),
			"_:b0 <http://example.org/p> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> <http://example.org/g> .\n"
		);
		assert_eq!(
			to_nquad(&t, "_:g0", None),
			"_:b0 <http://example.org/p> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> _:g0 .\n"
		)
	}

	#[test]
	fn normalization() {
		let t = triple(Subject::blank("_:b0"), Node::blank("_:b1"));
		assert_eq!(
			to_nquad(&t, "_:b2", Some("_:b0")),
			"_:a <http://example.org/p> _:z _:g .\n"
		);
		assert_eq!(
			to_nquad(&t, "http://example.org/g", Some("_:b1")),
			"_:z <http://example.org/p> _:a <http://example.org/g> .\n"
		);
	}

	#[test]
	fn sorted_output() {
		let mut dataset = Dataset::new();
		dataset.insert(
			DEFAULT_GRAPH,
			triple(Subject::iri("http://example.org/b"), Literal::string("x")),
		);
		dataset.insert(
			"http://example.org/g",
			triple(Subject::iri("http://example.org/a"), Literal::string("y")),
		);
		dataset.insert(
			DEFAULT_GRAPH,
			triple(Subject::blank("_:c"), Literal::lang_string("z", "en")),
		);

		assert_eq!(
			to_nquads(&dataset),
			concat!(
				"<http://example.org/a> <http://example.org/p> \"y\" <http://example.org/g> .\n",
				"<http://example.org/b> <http://example.org/p> \"x\" .\n",
				"_:c <http://example.org/p> \"z\"@en .\n",
			)
		)
	}

	#[test]
	fn normalized_dataset() {
		let mut dataset = Dataset::new();
		dataset.insert(
			DEFAULT_GRAPH,
			triple(Subject::blank("_:b1"), Node::blank("_:b0")),
		);
		dataset.insert(
			DEFAULT_GRAPH,
			triple(Subject::blank("_:b0"), Node::iri("http://example.org/o")),
		);

		assert_eq!(
			to_normalized_nquads(&dataset, "_:b0"),
			concat!(
				"_:a <http://example.org/p> <http://example.org/o> .\n",
				"_:z <http://example.org/p> _:a .\n",
			)
		)
	}
}
