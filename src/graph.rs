use std::collections::BTreeMap;

use crate::Item;

/// Node object of a node map.
///
/// Properties are kept sorted by name, which is the order in which they are
/// turned into triples.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeObject {
	#[cfg_attr(
		feature = "serde",
		serde(rename = "@id", default, skip_serializing_if = "Option::is_none")
	)]
	pub id: Option<String>,

	#[cfg_attr(feature = "serde", serde(flatten))]
	pub properties: BTreeMap<String, Vec<Item>>,
}

impl NodeObject {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: Some(id.into()),
			properties: BTreeMap::new(),
		}
	}

	/// Appends `item` to the values of `property`.
	pub fn insert(&mut self, property: impl Into<String>, item: Item) {
		self.properties.entry(property.into()).or_default().push(item)
	}

	/// Builder version of [`insert`](Self::insert).
	pub fn with(mut self, property: impl Into<String>, item: Item) -> Self {
		self.insert(property, item);
		self
	}

	pub fn get(&self, property: &str) -> &[Item] {
		self.properties
			.get(property)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}
}

/// Node map of a single graph, from subject identifier to node object.
pub type NodeMap = BTreeMap<String, NodeObject>;

/// Node maps of every graph, from graph name to node map.
///
/// The default graph is named [`DEFAULT_GRAPH`](crate::DEFAULT_GRAPH).
pub type GraphMap = BTreeMap<String, NodeMap>;
