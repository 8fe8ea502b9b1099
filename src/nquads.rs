//! N-Quads serialization and parsing.
//!
//! The writer produces canonical N-Quads: every quad line is rendered then
//! the lines are sorted, so the output only depends on the content of the
//! dataset. The reader accepts one quad per line, and empty lines.
//!
//! ```
//! use jsonld_rdf::{nquads, Dataset};
//!
//! let input = "<http://example.org/s> <http://example.org/p> \"o\" .\n";
//! let dataset: Dataset = input.parse().expect("invalid N-Quads");
//! assert_eq!(nquads::to_nquads(&dataset), input);
//! ```
mod read;
mod write;

pub use read::*;
pub use write::*;
