mod rdf_types;

pub use self::rdf_types::*;
