use std::collections::{btree_map, BTreeMap};

use indexmap::{set, IndexSet};

use crate::{graph_to_rdf, is_blank_label, GraphMap, Namer, Triple};

/// Name of the default graph.
pub const DEFAULT_GRAPH: &str = "@default";

/// Set of RDF triples.
///
/// Triples are kept in first-insertion order, and inserting a triple that is
/// already present does nothing. Two graphs are equal when they hold the same
/// triples, whatever their order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
	triples: IndexSet<Triple>,
}

impl Graph {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a triple, returning `false` if it was already present.
	pub fn insert(&mut self, triple: Triple) -> bool {
		self.triples.insert(triple)
	}

	pub fn contains(&self, triple: &Triple) -> bool {
		self.triples.contains(triple)
	}

	/// Returns the triple inserted at position `index`.
	pub fn get(&self, index: usize) -> Option<&Triple> {
		self.triples.get_index(index)
	}

	pub fn len(&self) -> usize {
		self.triples.len()
	}

	pub fn is_empty(&self) -> bool {
		self.triples.is_empty()
	}

	pub fn iter(&self) -> set::Iter<'_, Triple> {
		self.triples.iter()
	}
}

impl Extend<Triple> for Graph {
	fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
		self.triples.extend(iter)
	}
}

impl FromIterator<Triple> for Graph {
	fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
		Self {
			triples: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Graph {
	type Item = &'a Triple;
	type IntoIter = set::Iter<'a, Triple>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl IntoIterator for Graph {
	type Item = Triple;
	type IntoIter = set::IntoIter<Triple>;

	fn into_iter(self) -> Self::IntoIter {
		self.triples.into_iter()
	}
}

/// RDF dataset.
///
/// Maps graph names to graphs. Graph names are IRIs, blank node labels or
/// [`DEFAULT_GRAPH`]. Empty graphs have no N-Quads representation, so they are
/// ignored when comparing datasets.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
	graphs: BTreeMap<String, Graph>,
}

impl Dataset {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates the dataset of the given node maps.
	///
	/// Every graph is converted with [`graph_to_rdf`], sharing `namer` so that
	/// blank node labels are consistent across graphs. Blank graph names are
	/// relabeled like blank subjects, once the graph is known to hold triples.
	/// Graphs without triples are left out.
	pub fn from_graph_map(graphs: &GraphMap, namer: &mut impl Namer) -> Self {
		let mut result = Self::new();

		for (name, graph) in graphs {
			let triples = graph_to_rdf(graph, namer);
			if triples.is_empty() {
				continue;
			}

			let name = if is_blank_label(name) {
				namer.name(name)
			} else {
				name.clone()
			};

			result.graph_mut(&name).extend(triples);
		}

		result
	}

	/// Inserts a triple in the given graph, returning `false` if it was
	/// already present.
	pub fn insert(&mut self, graph: &str, triple: Triple) -> bool {
		self.graph_mut(graph).insert(triple)
	}

	/// Returns the graph with the given name, creating it if necessary.
	pub fn graph_mut(&mut self, name: &str) -> &mut Graph {
		self.graphs.entry(name.to_owned()).or_default()
	}

	pub fn graph(&self, name: &str) -> Option<&Graph> {
		self.graphs.get(name)
	}

	pub fn default_graph(&self) -> Option<&Graph> {
		self.graph(DEFAULT_GRAPH)
	}

	pub fn contains(&self, graph: &str, triple: &Triple) -> bool {
		self.graph(graph).is_some_and(|g| g.contains(triple))
	}

	pub fn graph_names(&self) -> impl '_ + Iterator<Item = &str> {
		self.graphs.keys().map(String::as_str)
	}

	/// Iterates over the graphs, sorted by name.
	pub fn graphs(&self) -> Graphs<'_> {
		Graphs(self.graphs.iter())
	}

	/// Iterates over every triple along with its graph name.
	pub fn quads(&self) -> impl '_ + Iterator<Item = (&str, &Triple)> {
		self.graphs()
			.flat_map(|(name, graph)| graph.iter().map(move |triple| (name, triple)))
	}

	/// Total number of triples.
	pub fn len(&self) -> usize {
		self.graphs.values().map(Graph::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.graphs.values().all(Graph::is_empty)
	}
}

impl PartialEq for Dataset {
	fn eq(&self, other: &Self) -> bool {
		fn non_empty((_, graph): &(&str, &Graph)) -> bool {
			!graph.is_empty()
		}

		self.graphs()
			.filter(non_empty)
			.eq(other.graphs().filter(non_empty))
	}
}

impl Eq for Dataset {}

pub struct Graphs<'a>(btree_map::Iter<'a, String, Graph>);

impl<'a> Iterator for Graphs<'a> {
	type Item = (&'a str, &'a Graph);

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next().map(|(name, graph)| (name.as_str(), graph))
	}
}
