use crate::{Item, Literal, NativeValue, Node, Options, ValueObject};
use crate::{XSD_BOOLEAN, XSD_DOUBLE, XSD_INTEGER, XSD_STRING};

/// Converts an RDF term into a JSON-LD value or node reference.
pub fn rdf_to_object(node: &Node, options: Options) -> Item {
	match node {
		Node::Iri(id) | Node::Blank(id) => Item::Reference { id: id.clone() },
		Node::Literal(literal) => Item::Value(literal_to_value(literal, options)),
	}
}

/// Converts an RDF literal into a JSON-LD value object.
///
/// With native types enabled, `xsd:boolean`, `xsd:integer` and `xsd:double`
/// literals whose lexical form is valid become native values. Any other
/// literal keeps its lexical form along with its datatype, unless that
/// datatype is `xsd:string`.
pub fn literal_to_value(literal: &Literal, options: Options) -> ValueObject {
	if let Some(language) = &literal.language {
		return ValueObject::lang_string(literal.lexical.clone(), language.clone());
	}

	if literal.datatype == XSD_STRING.as_str() {
		return ValueObject::new(literal.lexical.clone());
	}

	if options.use_native_types {
		if let Some(value) = native_value(&literal.lexical, &literal.datatype) {
			return ValueObject::new(value);
		}
	}

	ValueObject::typed(literal.lexical.clone(), literal.datatype.clone())
}

fn native_value(lexical: &str, datatype: &str) -> Option<NativeValue> {
	if datatype == XSD_BOOLEAN.as_str() {
		return match lexical {
			"true" => Some(NativeValue::Boolean(true)),
			"false" => Some(NativeValue::Boolean(false)),
			_ => None,
		};
	}

	let is_integer = datatype == XSD_INTEGER.as_str();
	if !is_integer && datatype != XSD_DOUBLE.as_str() {
		return None;
	}

	if !is_numeric(lexical) {
		return None;
	}

	let number: f64 = lexical
		.parse()
		.expect("numeric lexical form must parse as a double");

	if !number.is_finite() {
		return None;
	}

	if is_integer {
		lexical
			.parse::<i64>()
			.ok()
			.filter(|i| i.to_string() == lexical)
			.map(NativeValue::Integer)
	} else {
		Some(NativeValue::Double(number))
	}
}

/// Checks that `lexical` matches `[+-]?[0-9]+(\.[0-9]+)?([Ee][+-]?[0-9]+)?`.
pub(crate) fn is_numeric(lexical: &str) -> bool {
	fn digits(bytes: &[u8], mut i: usize) -> Option<usize> {
		let start = i;
		while bytes.get(i).is_some_and(u8::is_ascii_digit) {
			i += 1
		}

		(i > start).then_some(i)
	}

	fn sign(bytes: &[u8], i: usize) -> usize {
		match bytes.get(i) {
			Some(b'+' | b'-') => i + 1,
			_ => i,
		}
	}

	let bytes = lexical.as_bytes();

	let Some(mut i) = digits(bytes, sign(bytes, 0)) else {
		return false;
	};

	if bytes.get(i) == Some(&b'.') {
		match digits(bytes, i + 1) {
			Some(j) => i = j,
			None => return false,
		}
	}

	if matches!(bytes.get(i), Some(b'e' | b'E')) {
		match digits(bytes, sign(bytes, i + 1)) {
			Some(j) => i = j,
			None => return false,
		}
	}

	i == bytes.len()
}
