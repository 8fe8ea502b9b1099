use std::str::FromStr;

use crate::{Dataset, Literal, Node, Subject, Triple, DEFAULT_GRAPH, XSD_STRING};

/// N-Quads parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid N-Quads statement at line {line}")]
pub struct ParseError {
	/// Line of the invalid statement, starting from 1.
	pub line: usize,
}

/// Parses an N-Quads document.
///
/// Lines may be separated by `\n`, `\r\n` or `\r`. Parsing stops at the first
/// line that is neither blank nor a quad. Triples are added to their graph
/// unless an identical triple is already there.
pub fn parse_nquads(input: &str) -> Result<Dataset, ParseError> {
	let mut dataset = Dataset::new();
	let mut count = 0;

	for (i, line) in lines(input).enumerate() {
		let line_number = i + 1;
		count = line_number;

		if is_blank(line) {
			continue;
		}

		let Some(statement) = Statement::parse(line) else {
			tracing::debug!(line = line_number, "invalid N-Quads statement");
			return Err(ParseError { line: line_number });
		};

		dataset.insert(
			statement.graph.unwrap_or(DEFAULT_GRAPH),
			Triple::new(statement.subject, statement.predicate, statement.object),
		);
	}

	tracing::debug!(
		lines = count,
		triples = dataset.len(),
		"N-Quads document parsed"
	);

	Ok(dataset)
}

impl FromStr for Dataset {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_nquads(s)
	}
}

/// Splits the input on `\r\n`, `\n` and `\r`.
fn lines(input: &str) -> impl '_ + Iterator<Item = &str> {
	let mut rest = Some(input);
	std::iter::from_fn(move || {
		let s = rest?;
		match s.find(|c: char| c == '\n' || c == '\r') {
			Some(i) => {
				let end = if s[i..].starts_with("\r\n") { i + 2 } else { i + 1 };
				rest = Some(&s[end..]);
				Some(&s[..i])
			}
			None => {
				rest = None;
				Some(s)
			}
		}
	})
}

fn is_blank(line: &str) -> bool {
	line.bytes().all(|b| b == b' ' || b == b'\t')
}

/// Quad statement.
struct Statement<'a> {
	subject: Subject,
	predicate: &'a str,
	object: Node,
	graph: Option<&'a str>,
}

impl<'a> Statement<'a> {
	/// Parses a whole line.
	///
	/// ```text
	/// quad      := WSO subject WS predicate WS object WSO graph WSO
	/// subject   := IRI | BLANK
	/// predicate := IRI
	/// object    := IRI | BLANK | literal
	/// graph     := '.' | ( IRI | BLANK ) WSO '.'
	/// ```
	fn parse(line: &'a str) -> Option<Self> {
		let mut cursor = Cursor::new(line);
		cursor.whitespace();

		let subject = match cursor.iri() {
			Some(iri) => Subject::iri(iri),
			None => Subject::blank(cursor.blank()?),
		};

		if cursor.whitespace() == 0 {
			return None;
		}

		let predicate = cursor.iri()?;

		if cursor.whitespace() == 0 {
			return None;
		}

		let object = if let Some(iri) = cursor.iri() {
			Node::iri(iri)
		} else if let Some(label) = cursor.blank() {
			Node::blank(label)
		} else {
			Node::Literal(cursor.literal()?)
		};

		cursor.whitespace();

		let graph = if cursor.eat(b'.') {
			None
		} else {
			let graph = match cursor.iri() {
				Some(iri) => iri,
				None => cursor.blank()?,
			};

			cursor.whitespace();
			if !cursor.eat(b'.') {
				return None;
			}

			Some(graph)
		};

		cursor.whitespace();
		if !cursor.is_empty() {
			return None;
		}

		Some(Self {
			subject,
			predicate,
			object,
			graph,
		})
	}
}

/// Scanner over a single line.
///
/// Every method either consumes what it recognizes, or leaves the cursor
/// untouched and returns `None`.
struct Cursor<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> Cursor<'a> {
	fn new(input: &'a str) -> Self {
		Self { input, pos: 0 }
	}

	fn rest(&self) -> &'a str {
		&self.input[self.pos..]
	}

	fn is_empty(&self) -> bool {
		self.pos == self.input.len()
	}

	fn peek(&self) -> Option<u8> {
		self.input.as_bytes().get(self.pos).copied()
	}

	fn eat(&mut self, b: u8) -> bool {
		if self.peek() == Some(b) {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	/// Consumes spaces and tabs, returning how many were consumed.
	fn whitespace(&mut self) -> usize {
		let n = self
			.rest()
			.bytes()
			.take_while(|b| *b == b' ' || *b == b'\t')
			.count();
		self.pos += n;
		n
	}

	/// `'<' scheme ':' [^>]* '>'` where the scheme is a non-empty run of
	/// anything but `:` and `>`.
	///
	/// Returns the IRI without its angle brackets.
	fn iri(&mut self) -> Option<&'a str> {
		let rest = self.rest();
		let body = rest.strip_prefix('<')?;

		let end = body.find('>')?;
		let iri = &body[..end];

		match iri.find(':') {
			Some(colon) if colon > 0 => {
				self.pos += end + 2;
				Some(iri)
			}
			_ => None,
		}
	}

	/// `'_:' [A-Za-z] [A-Za-z0-9]*`
	///
	/// Returns the label with its `_:` prefix.
	fn blank(&mut self) -> Option<&'a str> {
		let rest = self.rest();
		let name = rest.strip_prefix("_:")?;

		if !name.bytes().next()?.is_ascii_alphabetic() {
			return None;
		}

		let len = 2 + name.bytes().take_while(u8::is_ascii_alphanumeric).count();
		self.pos += len;
		Some(&rest[..len])
	}

	/// `'"' chars '"' ( '^^' IRI | '@' language )?`
	fn literal(&mut self) -> Option<Literal> {
		let start = self.pos;
		match self.literal_inner() {
			Some(literal) => Some(literal),
			None => {
				self.pos = start;
				None
			}
		}
	}

	fn literal_inner(&mut self) -> Option<Literal> {
		let rest = self.rest();
		let body = rest.strip_prefix('"')?;

		let mut escaped = false;
		let mut end = None;
		for (i, c) in body.char_indices() {
			match c {
				_ if escaped => escaped = false,
				'\\' => escaped = true,
				'"' => {
					end = Some(i);
					break;
				}
				_ => (),
			}
		}

		let end = end?;
		let lexical = unescape(&body[..end]);
		self.pos += end + 2;

		if self.rest().starts_with("^^") {
			self.pos += 2;
			let datatype = self.iri()?;
			Some(Literal::new(lexical, datatype))
		} else if self.eat(b'@') {
			let language = self.language()?;
			Some(Literal::lang_string(lexical, language))
		} else {
			Some(Literal::new(lexical, XSD_STRING.as_str()))
		}
	}

	/// `[a-zA-Z]+ ( '-' [a-zA-Z0-9]+ )*`
	fn language(&mut self) -> Option<&'a str> {
		let rest = self.rest();
		let bytes = rest.as_bytes();

		let mut len = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
		if len == 0 {
			return None;
		}

		while bytes.get(len) == Some(&b'-') {
			let n = bytes[len + 1..]
				.iter()
				.take_while(|b| b.is_ascii_alphanumeric())
				.count();

			if n == 0 {
				break;
			}

			len += 1 + n;
		}

		self.pos += len;
		Some(&rest[..len])
	}
}

/// Reverses the string escapes of a literal.
///
/// Escapes are decoded in a single pass, so `\\t` is a backslash followed
/// by `t`. Unknown escapes are kept as they are.
fn unescape(s: &str) -> String {
	if !s.contains('\\') {
		return s.to_owned();
	}

	let mut result = String::with_capacity(s.len());
	let mut chars = s.chars();

	while let Some(c) = chars.next() {
		if c != '\\' {
			result.push(c);
			continue;
		}

		match chars.next() {
			Some('\\') => result.push('\\'),
			Some('t') => result.push('\t'),
			Some('n') => result.push('\n'),
			Some('r') => result.push('\r'),
			Some('"') => result.push('"'),
			Some('\'') => result.push('\''),
			Some('b') => result.push('\u{8}'),
			Some('f') => result.push('\u{c}'),
			Some(u @ ('u' | 'U')) => {
				let len = if u == 'u' { 4 } else { 8 };
				let digits = chars.as_str().get(..len);
				match digits.and_then(decode_hex) {
					Some(decoded) => {
						result.push(decoded);
						chars = chars.as_str()[len..].chars();
					}
					None => {
						result.push('\\');
						result.push(u);
					}
				}
			}
			Some(other) => {
				result.push('\\');
				result.push(other);
			}
			None => result.push('\\'),
		}
	}

	result
}

fn decode_hex(digits: &str) -> Option<char> {
	if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
		return None;
	}

	u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}
