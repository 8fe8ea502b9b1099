use crate::{
	id_to_rdf, object_to_rdf, Item, Namer, Node, NodeMap, Subject, Triple, RDF_FIRST, RDF_NIL,
	RDF_REST, RDF_TYPE,
};

/// Creates the RDF triples of the given graph.
///
/// Subjects are visited in identifier order and their properties in
/// lexicographic order, so the output only depends on the content of the
/// graph and on the state of `namer`. The `@type` property becomes `rdf:type`
/// and every other keyword property is ignored.
pub fn graph_to_rdf(graph: &NodeMap, namer: &mut impl Namer) -> Vec<Triple> {
	let mut triples = Vec::new();

	for (id, node) in graph {
		// Named on first use, so that a subject without triples never takes a
		// label.
		let mut subject = None;

		for (property, items) in &node.properties {
			let predicate = if property == "@type" {
				RDF_TYPE.as_str()
			} else if is_keyword(property) {
				continue;
			} else {
				property.as_str()
			};

			for item in items {
				let subject = subject
					.get_or_insert_with(|| id_to_rdf(id, namer))
					.clone();

				item_to_rdf(subject, predicate, item, namer, &mut triples)
			}
		}
	}

	tracing::debug!(
		subjects = graph.len(),
		triples = triples.len(),
		"graph converted to RDF"
	);

	triples
}

/// Converts a `@list` value into an RDF collection.
///
/// The head of the collection is attached to `subject` through `predicate`.
/// Every item takes a fresh blank node linked to the item by `rdf:first` and
/// to the next blank node by `rdf:rest`, the last one pointing to `rdf:nil`.
/// An empty list is `rdf:nil` itself.
pub fn list_to_rdf(
	list: &[Item],
	namer: &mut impl Namer,
	subject: Subject,
	predicate: &str,
	triples: &mut Vec<Triple>,
) {
	tracing::trace!(len = list.len(), "encoding RDF collection");

	let mut subject = subject;
	let mut predicate = predicate;

	for item in list {
		let blank = Subject::Blank(namer.fresh());
		triples.push(Triple::new(subject, predicate, blank.clone()));

		item_to_rdf(blank.clone(), RDF_FIRST.as_str(), item, namer, triples);

		subject = blank;
		predicate = RDF_REST.as_str();
	}

	triples.push(Triple::new(subject, predicate, Node::iri(RDF_NIL.as_str())))
}

/// Emits the triples linking `subject` to `item` through `predicate`.
fn item_to_rdf(
	subject: Subject,
	predicate: &str,
	item: &Item,
	namer: &mut impl Namer,
	triples: &mut Vec<Triple>,
) {
	match item {
		Item::List { list } => list_to_rdf(list, namer, subject, predicate, triples),
		item => {
			if let Some(object) = object_to_rdf(item, namer) {
				triples.push(Triple::new(subject, predicate, object))
			}
		}
	}
}

/// Checks if the given property name is a JSON-LD keyword.
pub fn is_keyword(property: &str) -> bool {
	property.starts_with('@')
}
