//! JSON-LD values, as found in the property lists of a node map.

/// Native value of a JSON-LD value object.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NativeValue {
	Boolean(bool),
	Integer(i64),
	Double(f64),
	String(String),
}

impl NativeValue {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}
}

impl From<bool> for NativeValue {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl From<i64> for NativeValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<f64> for NativeValue {
	fn from(value: f64) -> Self {
		Self::Double(value)
	}
}

impl From<String> for NativeValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl<'a> From<&'a str> for NativeValue {
	fn from(value: &'a str) -> Self {
		Self::String(value.to_owned())
	}
}

/// JSON-LD value object (`@value`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueObject {
	#[cfg_attr(feature = "serde", serde(rename = "@value"))]
	pub value: NativeValue,

	/// Explicit datatype IRI.
	#[cfg_attr(
		feature = "serde",
		serde(rename = "@type", default, skip_serializing_if = "Option::is_none")
	)]
	pub type_: Option<String>,

	#[cfg_attr(
		feature = "serde",
		serde(rename = "@language", default, skip_serializing_if = "Option::is_none")
	)]
	pub language: Option<String>,
}

impl ValueObject {
	pub fn new(value: impl Into<NativeValue>) -> Self {
		Self {
			value: value.into(),
			type_: None,
			language: None,
		}
	}

	pub fn typed(value: impl Into<NativeValue>, type_: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			type_: Some(type_.into()),
			language: None,
		}
	}

	pub fn lang_string(value: impl Into<String>, language: impl Into<String>) -> Self {
		Self {
			value: NativeValue::String(value.into()),
			type_: None,
			language: Some(language.into()),
		}
	}
}

/// Member of a node property list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Item {
	/// List object (`@list`).
	List {
		#[cfg_attr(feature = "serde", serde(rename = "@list"))]
		list: Vec<Item>,
	},

	/// Value object (`@value`).
	Value(ValueObject),

	/// Node reference (`@id`).
	Reference {
		#[cfg_attr(feature = "serde", serde(rename = "@id"))]
		id: String,
	},

	/// Bare identifier, as found in `@type` lists.
	Id(String),
}

impl Item {
	pub fn list(items: impl IntoIterator<Item = Item>) -> Self {
		Self::List {
			list: items.into_iter().collect(),
		}
	}

	pub fn reference(id: impl Into<String>) -> Self {
		Self::Reference { id: id.into() }
	}

	pub fn value(value: impl Into<NativeValue>) -> Self {
		Self::Value(ValueObject::new(value))
	}

	pub fn is_list(&self) -> bool {
		matches!(self, Self::List { .. })
	}

	pub fn as_value(&self) -> Option<&ValueObject> {
		match self {
			Self::Value(value) => Some(value),
			_ => None,
		}
	}

	/// Returns the identifier of a node reference or bare identifier.
	pub fn as_id(&self) -> Option<&str> {
		match self {
			Self::Reference { id } | Self::Id(id) => Some(id),
			_ => None,
		}
	}

	/// Returns the JSON form of this item.
	///
	/// Returns `None` if the item holds a non-finite double, which JSON cannot
	/// represent.
	#[cfg(feature = "serde")]
	pub fn to_json(&self) -> Option<json_syntax::Value> {
		json_syntax::to_value(self).ok()
	}
}

impl From<ValueObject> for Item {
	fn from(value: ValueObject) -> Self {
		Self::Value(value)
	}
}
