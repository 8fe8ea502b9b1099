use ::rdf_types::{BlankIdBuf, Id, LiteralType, Quad, Term};
use iref::IriBuf;
use langtag::LangTagBuf;

use crate::{is_blank_label, Dataset, Literal, Node, Subject, Triple, DEFAULT_GRAPH};

/// Lexical quad, as used by the `rdf-types` crate.
pub type RdfQuad = Quad<Id, IriBuf, Term<Id, ::rdf_types::Literal>, Id>;

#[derive(Debug, thiserror::Error)]
pub enum IntoRdfQuadsError {
	#[error("invalid IRI `{0}`")]
	InvalidIri(String),

	#[error("invalid blank node identifier `{0}`")]
	InvalidBlankId(String),

	#[error("invalid language tag `{0}`")]
	InvalidLangTag(String),
}

impl Dataset {
	/// Converts the dataset into `rdf-types` quads.
	///
	/// Triples of the default graph have no graph component.
	pub fn to_rdf_quads(&self) -> Result<Vec<RdfQuad>, IntoRdfQuadsError> {
		self.quads()
			.map(|(graph, triple)| {
				let graph = if graph == DEFAULT_GRAPH {
					None
				} else {
					Some(label_to_id(graph)?)
				};

				Ok(Quad(
					subject_to_id(&triple.subject)?,
					iri(&triple.predicate)?,
					node_to_term(&triple.object)?,
					graph,
				))
			})
			.collect()
	}

	/// Creates a dataset from `rdf-types` quads, dropping duplicates.
	pub fn from_rdf_quads(quads: impl IntoIterator<Item = RdfQuad>) -> Self {
		let mut result = Self::new();

		for Quad(s, p, o, g) in quads {
			let triple = Triple::new(
				Subject::from_id(id_label(s)),
				p.as_str(),
				term_to_node(o),
			);

			match g {
				Some(g) => result.insert(&id_label(g), triple),
				None => result.insert(DEFAULT_GRAPH, triple),
			};
		}

		result
	}
}

fn label_to_id(label: &str) -> Result<Id, IntoRdfQuadsError> {
	if is_blank_label(label) {
		blank_id(label).map(Id::Blank)
	} else {
		iri(label).map(Id::Iri)
	}
}

fn subject_to_id(subject: &Subject) -> Result<Id, IntoRdfQuadsError> {
	match subject {
		Subject::Iri(value) => iri(value).map(Id::Iri),
		Subject::Blank(label) => blank_id(label).map(Id::Blank),
	}
}

fn blank_id(label: &str) -> Result<BlankIdBuf, IntoRdfQuadsError> {
	BlankIdBuf::new(label.to_owned())
		.map_err(|_| IntoRdfQuadsError::InvalidBlankId(label.to_owned()))
}

fn iri(value: &str) -> Result<IriBuf, IntoRdfQuadsError> {
	IriBuf::new(value.to_owned()).map_err(|_| IntoRdfQuadsError::InvalidIri(value.to_owned()))
}

fn node_to_term(node: &Node) -> Result<Term<Id, ::rdf_types::Literal>, IntoRdfQuadsError> {
	match node {
		Node::Literal(literal) => {
			let type_ = match &literal.language {
				Some(tag) => LiteralType::LangString(
					LangTagBuf::new(tag.clone())
						.map_err(|_| IntoRdfQuadsError::InvalidLangTag(tag.clone()))?,
				),
				None => LiteralType::Any(iri(&literal.datatype)?),
			};

			Ok(Term::Literal(::rdf_types::Literal::new(
				literal.lexical.clone(),
				type_,
			)))
		}
		Node::Iri(value) => iri(value).map(|iri| Term::Id(Id::Iri(iri))),
		Node::Blank(label) => blank_id(label).map(|blank| Term::Id(Id::Blank(blank))),
	}
}

fn id_label(id: Id) -> String {
	match id {
		Id::Iri(iri) => iri.as_str().to_owned(),
		Id::Blank(blank) => blank.as_str().to_owned(),
	}
}

fn term_to_node(term: Term<Id, ::rdf_types::Literal>) -> Node {
	match term {
		Term::Id(id) => Node::from_id(id_label(id)),
		Term::Literal(literal) => match literal.type_ {
			LiteralType::Any(ty) => Node::Literal(Literal::new(literal.value, ty.as_str())),
			LiteralType::LangString(tag) => {
				Node::Literal(Literal::lang_string(literal.value, tag.as_str()))
			}
		},
	}
}
