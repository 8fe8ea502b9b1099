//! This library converts JSON-LD node maps into RDF datasets, and RDF
//! literals back into JSON-LD value objects. It also provides a canonical
//! N-Quads writer and an N-Quads reader.
//!
//! # Example
//!
//! ```
//! use jsonld_rdf::{nquads, Dataset, GraphMap, Item, NodeMap, NodeObject, UniqueNamer, DEFAULT_GRAPH};
//!
//! let mut graph = NodeMap::new();
//! graph.insert(
//!   "http://example.org/JohnSmith".to_owned(),
//!   NodeObject::new("http://example.org/JohnSmith")
//!     .with("http://example.org/name", Item::value("John Smith"))
//!     .with("http://example.org/age", Item::value(42i64))
//! );
//!
//! let mut graphs = GraphMap::new();
//! graphs.insert(DEFAULT_GRAPH.to_owned(), graph);
//!
//! let dataset = Dataset::from_graph_map(&graphs, &mut UniqueNamer::default());
//! print!("{}", nquads::to_nquads(&dataset));
//! ```
//!
//! This should print the following:
//! ```text
//! <http://example.org/JohnSmith> <http://example.org/age> "42"^^<http://www.w3.org/2001/XMLSchema#integer> .
//! <http://example.org/JohnSmith> <http://example.org/name> "John Smith" .
//! ```
#[doc(hidden)]
pub use iref;

#[doc(hidden)]
pub use rdf_types;

#[doc(hidden)]
pub use xsd_types;

#[doc(hidden)]
pub use json_syntax;

mod anonymous;
mod dataset;
mod datatypes;
mod graph;
mod r#impl;
pub mod nquads;
mod quads;
mod rdf;
mod value;

pub use anonymous::*;
pub use dataset::*;
pub use datatypes::*;
pub use graph::*;
pub use r#impl::*;
pub use quads::*;
pub use rdf::*;
pub use value::*;
