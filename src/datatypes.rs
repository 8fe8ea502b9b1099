//! Conversion between JSON-LD values and RDF terms.
mod de;
mod ser;

pub use de::*;
pub use ser::*;

/// Options of the RDF to JSON-LD value conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Options {
	/// Turn `xsd:boolean`, `xsd:integer` and `xsd:double` literals into
	/// native JSON values.
	#[cfg_attr(feature = "serde", serde(default))]
	pub use_native_types: bool,
}

impl Options {
	pub fn native_types() -> Self {
		Self {
			use_native_types: true,
		}
	}
}
