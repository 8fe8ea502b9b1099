use crate::{
	is_blank_label, Item, Literal, NativeValue, Namer, Node, Subject, ValueObject, RDF_LANG_STRING,
	XSD_BOOLEAN, XSD_DOUBLE, XSD_INTEGER, XSD_STRING,
};

/// Converts a JSON-LD value or node reference into an RDF object.
///
/// Returns `None` for list objects, which are not a single term but a
/// collection of triples (see [`list_to_rdf`](crate::list_to_rdf)).
pub fn object_to_rdf(item: &Item, namer: &mut impl Namer) -> Option<Node> {
	match item {
		Item::List { .. } => None,
		Item::Value(value) => Some(Node::Literal(value_to_rdf(value))),
		Item::Reference { id } | Item::Id(id) => Some(id_to_rdf(id, namer).into()),
	}
}

/// Converts a node identifier into an RDF subject.
///
/// Blank node identifiers are relabeled through `namer`.
pub fn id_to_rdf(id: &str, namer: &mut impl Namer) -> Subject {
	if is_blank_label(id) {
		Subject::Blank(namer.name(id))
	} else {
		Subject::Iri(id.to_owned())
	}
}

/// Converts a JSON-LD value object into an RDF literal.
pub fn value_to_rdf(value: &ValueObject) -> Literal {
	let datatype = |default: &str| value.type_.clone().unwrap_or_else(|| default.to_owned());

	match &value.value {
		NativeValue::Boolean(b) => Literal::new(b.to_string(), datatype(XSD_BOOLEAN.as_str())),
		NativeValue::Integer(i) => Literal::new(i.to_string(), datatype(XSD_INTEGER.as_str())),
		NativeValue::Double(d) => Literal::new(canonical_double(*d), datatype(XSD_DOUBLE.as_str())),
		NativeValue::String(s) => match &value.language {
			Some(language) => Literal {
				lexical: s.clone(),
				datatype: RDF_LANG_STRING.as_str().to_owned(),
				language: Some(language.clone()),
			},
			None => Literal::new(s.clone(), datatype(XSD_STRING.as_str())),
		},
	}
}

/// Canonical `xsd:double` lexical form.
///
/// The mantissa has a single integer digit, at least one fractional digit and
/// no trailing zeros beyond that, followed by an uppercase exponent marker:
/// `1.5E0`, `1.0E2`, `-2.5E-1`.
pub fn canonical_double(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}

	if value.is_infinite() {
		return if value > 0.0 { "INF" } else { "-INF" }.to_owned();
	}

	let formatted = format!("{value:E}");
	match formatted.split_once('E') {
		Some((mantissa, exponent)) if !mantissa.contains('.') => {
			format!("{mantissa}.0E{exponent}")
		}
		_ => formatted,
	}
}
